//! Projection engine composing the monthly withholding with the annual
//! minimum-tax reconciliation

use crate::assumptions::Assumptions;
use crate::dividend::CalculatorInput;

use super::result::CalculationResult;
use super::MONTHS_PER_YEAR;

/// Computes a full [`CalculationResult`] from one month of dividends
///
/// Stateless and synchronous; each call is an independent projection of
/// the configured assumptions over the given input. Input validation is a
/// caller concern: non-finite amounts propagate through the arithmetic
/// rather than raising a distinguished error.
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    assumptions: Assumptions,
}

impl ProjectionEngine {
    pub fn new(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    /// Run the simulation for one month of dividends
    pub fn project(&self, input: &CalculatorInput) -> CalculationResult {
        // Monthly figures (Art. 6º-A)
        let monthly_withholding = self
            .assumptions
            .withholding
            .monthly_withholding(&input.dividends);
        let total_monthly_dividends = input.total_amount();

        // Flat twelve-month extrapolation of the entered month
        let projected_annual_income = total_monthly_dividends * MONTHS_PER_YEAR;
        let projected_annual_withholding = monthly_withholding * MONTHS_PER_YEAR;

        // Minimum taxation of the projected income (Art. 16-A)
        let minimum_tax_rate = self.assumptions.minimum_tax.rate_for(projected_annual_income);
        let minimum_tax_total_due = projected_annual_income * minimum_tax_rate;

        // Withholding already paid during the year offsets the minimum
        // tax; an excess is not refunded at the reconciliation
        let annual_balance_due = (minimum_tax_total_due - projected_annual_withholding).max(0.0);

        CalculationResult {
            total_monthly_dividends,
            monthly_withholding,
            projected_annual_income,
            projected_annual_withholding,
            minimum_tax_rate,
            minimum_tax_total_due,
            annual_balance_due,
        }
    }
}
