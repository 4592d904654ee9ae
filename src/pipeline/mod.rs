mod filter;
mod metrics;
mod validator;

pub use filter::{filter, restrict};
pub use metrics::compute;
pub use validator::validate;
