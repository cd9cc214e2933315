//! Dividend input model, currency handling, and file loading

pub mod currency;
mod data;
pub mod loader;

pub use data::{CalculatorInput, DividendRecord, DEFAULT_PAYER_LABEL};
pub use loader::{load_dividends, load_dividends_from_csv, load_dividends_from_json, LoadError};
