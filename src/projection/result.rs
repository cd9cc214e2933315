//! Simulation result record

use serde::{Deserialize, Serialize};

/// Outcome of one simulation, produced fresh by the engine and never
/// mutated afterwards
///
/// Monetary fields are in R$; rates are fractions (0.10 = 10%).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Total dividends received in the simulated month, all companies
    pub total_monthly_dividends: f64,

    /// Withholding at source for the month (Art. 6º-A)
    pub monthly_withholding: f64,

    /// Monthly total repeated flat over twelve months
    pub projected_annual_income: f64,

    /// Monthly withholding repeated flat over twelve months
    pub projected_annual_withholding: f64,

    /// Effective minimum tax rate for the projected income (Art. 16-A)
    pub minimum_tax_rate: f64,

    /// Minimum tax on the projected annual income
    pub minimum_tax_total_due: f64,

    /// Shortfall to settle at the annual reconciliation, never negative
    pub annual_balance_due: f64,
}

impl CalculationResult {
    /// Share of the projected income actually owed as minimum tax
    ///
    /// Zero income yields zero rather than a division by zero.
    pub fn effective_rate(&self) -> f64 {
        if self.projected_annual_income > 0.0 {
            self.minimum_tax_total_due / self.projected_annual_income
        } else {
            0.0
        }
    }
}
