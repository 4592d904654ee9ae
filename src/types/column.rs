use std::fmt;
use std::fmt::{Display, Formatter};

/// The five columns every sales sheet must carry.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Column {
    Date,
    Seller,
    Product,
    Quantity,
    Price
}

impl Column {
    pub const REQUIRED: [Column; 5] = [
        Column::Date,
        Column::Seller,
        Column::Product,
        Column::Quantity,
        Column::Price
    ];

    /// Canonical header name.
    pub fn name(self) -> &'static str {
        match self {
            Column::Date => "date",
            Column::Seller => "seller",
            Column::Product => "product",
            Column::Quantity => "quantity",
            Column::Price => "price"
        }
    }

    /// Legacy Spanish header accepted in place of the canonical name.
    fn alias(self) -> &'static str {
        match self {
            Column::Date => "fecha",
            Column::Seller => "vendedor",
            Column::Product => "producto",
            Column::Quantity => "cantidad",
            Column::Price => "precio"
        }
    }

    /// Case-insensitive header match against the canonical name or its alias.
    pub fn matches(self, header: &str) -> bool {
        let header = header.trim();
        header.eq_ignore_ascii_case(self.name()) || header.eq_ignore_ascii_case(self.alias())
    }
}

impl Display for Column {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}
