use std::env;
use std::io::stderr;
use std::process::exit;
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use sales_report::config::{LOG_LEVEL_VAR, USAGE};
use sales_report::presentation::SummaryView;
use sales_report::{Invocation, Orchestrator, ReportConfig, ReportJob};

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let invocation = match Invocation::from_args(args.as_slice()) {
        Ok(invocation) => invocation,
        Err(error) => {
            eprintln!("{error}");
            eprintln!("{USAGE}");
            eprintln!("Dates use YYYY-MM-DD. Set {LOG_LEVEL_VAR} to error, warn, info, debug or trace for logging.");
            exit(1);
        }
    };

    let log_level = env::var(LOG_LEVEL_VAR)
        .map(|level| parse_log_level(&level)).unwrap_or(LevelFilter::ERROR);

    setup_logging(log_level);

    let orchestrator = Orchestrator::new(ReportConfig::default());

    let timer = Instant::now();
    let result = ReportJob::spawn(orchestrator, invocation.into_request()).wait().await;
    let duration = timer.elapsed();

    match result {
        Ok(report) => {
            info!("Generated report in: {duration:?}");

            for (label, value) in SummaryView::from(&report.summary).fields() {
                info!("{label}: {value}");
            }

            println!("{}", report.path.display());
            Ok(())
        }
        Err(error) => {
            eprintln!("Error: {error}");
            exit(1);
        }
    }
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries only the report path, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
