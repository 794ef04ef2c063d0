pub mod currency;
pub mod formatter;

pub use currency::{CurrencyFormat, CurrencyFormatter, CurrencyPosition};
pub use formatter::{D3NumberFormatter, Formatters, NumberFormatter, TimeFormatter, UtcTimeFormatter};
