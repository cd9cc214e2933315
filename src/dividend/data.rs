//! Dividend records and simulation input

use serde::{Deserialize, Serialize};

/// Label under which records with a blank paying company are grouped
pub const DEFAULT_PAYER_LABEL: &str = "Unnamed payer";

/// One dividend payment received in the simulated month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DividendRecord {
    /// Paying company; blank means the payer was not identified
    #[serde(default)]
    pub source: String,

    /// Amount received in the month (R$)
    #[serde(default)]
    pub amount: f64,
}

impl DividendRecord {
    pub fn new(source: impl Into<String>, amount: f64) -> Self {
        Self {
            source: source.into(),
            amount,
        }
    }

    /// Grouping key for the per-company withholding exemption
    ///
    /// The source is trimmed; whitespace-only sources all collapse into
    /// the default payer group instead of each counting as a company.
    pub fn payer_key(&self) -> &str {
        let trimmed = self.source.trim();
        if trimmed.is_empty() {
            DEFAULT_PAYER_LABEL
        } else {
            trimmed
        }
    }
}

/// Full input to one simulation: the dividends of a single month
///
/// Record order only matters for display and export; the computation
/// groups by company and is order independent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInput {
    pub dividends: Vec<DividendRecord>,
}

impl CalculatorInput {
    pub fn new(dividends: Vec<DividendRecord>) -> Self {
        Self { dividends }
    }

    /// Total received in the month across all records, with no grouping
    pub fn total_amount(&self) -> f64 {
        self.dividends.iter().map(|d| d.amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payer_key_trims_source() {
        let record = DividendRecord::new("  Acme  ", 100.0);
        assert_eq!(record.payer_key(), "Acme");
    }

    #[test]
    fn test_blank_sources_share_the_default_key() {
        let empty = DividendRecord::new("", 100.0);
        let spaces = DividendRecord::new("   ", 100.0);

        assert_eq!(empty.payer_key(), DEFAULT_PAYER_LABEL);
        assert_eq!(empty.payer_key(), spaces.payer_key());
    }

    #[test]
    fn test_total_amount() {
        let input = CalculatorInput::new(vec![
            DividendRecord::new("Acme", 1_000.0),
            DividendRecord::new("", 250.5),
        ]);
        assert!((input.total_amount() - 1_250.5).abs() < 1e-9);

        assert_eq!(CalculatorInput::default().total_amount(), 0.0);
    }
}
