use serde::{Deserialize, Serialize};

use crate::formatter::{D3NumberFormatter, NumberFormatter};

/// Where the currency symbol sits relative to the number.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurrencyPosition {
    #[default]
    Prefix,
    Suffix,
}

/// Currency directive as configured by the host dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    pub symbol: String,
    #[serde(default)]
    pub symbol_position: CurrencyPosition,
}

/// Wraps a numeric formatter and attaches the currency symbol.
///
/// When a currency directive is configured it takes precedence over the
/// plain y-axis number format.
#[derive(Debug, Clone)]
pub struct CurrencyFormatter {
    pub currency: CurrencyFormat,
    pub number: D3NumberFormatter,
}

impl CurrencyFormatter {
    pub fn new(currency: CurrencyFormat, format_str: Option<String>) -> Self {
        Self {
            currency,
            number: D3NumberFormatter::new(format_str),
        }
    }
}

impl NumberFormatter for CurrencyFormatter {
    fn format(&self, value: f64) -> String {
        let formatted = self.number.format(value);
        match self.currency.symbol_position {
            CurrencyPosition::Prefix => format!("{}{}", self.currency.symbol, formatted),
            CurrencyPosition::Suffix => format!("{} {}", formatted, self.currency.symbol),
        }
    }
}
