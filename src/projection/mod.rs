//! Annual projection of one month of dividends

mod engine;
mod result;

pub use engine::ProjectionEngine;
pub use result::CalculationResult;

// ============================================================================
// Annualization
// ============================================================================
// The simulator extrapolates a single month to a calendar year by flat
// repetition: the entered month is assumed to recur unchanged twelve
// times. This is a deliberate simplification, not a forecasting model.

/// Months in the projected year
pub const MONTHS_PER_YEAR: f64 = 12.0;
