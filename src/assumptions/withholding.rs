//! Monthly withholding at source (Art. 6º-A)
//!
//! Dividends paid by a single company to a single individual above the
//! monthly exemption are taxed at a flat rate on the excess.

use std::collections::BTreeMap;

use crate::dividend::DividendRecord;

/// Withholding rule applied per paying company per month
#[derive(Debug, Clone, PartialEq)]
pub struct WithholdingRule {
    /// Monthly exemption per paying company (R$)
    pub monthly_exemption: f64,

    /// Rate applied to the amount above the exemption (e.g., 0.10 = 10%)
    pub rate: f64,
}

impl Default for WithholdingRule {
    fn default() -> Self {
        Self {
            monthly_exemption: super::MONTHLY_WITHHOLDING_EXEMPTION,
            rate: super::WITHHOLDING_RATE,
        }
    }
}

impl WithholdingRule {
    /// Withholding due on one company's monthly total
    ///
    /// Only the amount strictly above the exemption is taxed; a total
    /// exactly at the exemption owes nothing.
    pub fn tax_on(&self, monthly_total: f64) -> f64 {
        if monthly_total > self.monthly_exemption {
            (monthly_total - self.monthly_exemption) * self.rate
        } else {
            0.0
        }
    }

    /// Total withholding for one month of dividend records
    ///
    /// Records are grouped per paying company before the exemption is
    /// applied. Sources are trimmed, and every blank source falls into the
    /// single default payer group rather than counting as its own company.
    /// No validation happens here; amounts are summed as given.
    pub fn monthly_withholding(&self, dividends: &[DividendRecord]) -> f64 {
        let mut by_source: BTreeMap<&str, f64> = BTreeMap::new();
        for dividend in dividends {
            *by_source.entry(dividend.payer_key()).or_insert(0.0) += dividend.amount;
        }

        by_source.values().map(|&total| self.tax_on(total)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(source: &str, amount: f64) -> DividendRecord {
        DividendRecord::new(source, amount)
    }

    #[test]
    fn test_no_dividends() {
        let rule = WithholdingRule::default();
        assert_eq!(rule.monthly_withholding(&[]), 0.0);
    }

    #[test]
    fn test_exemption_is_strictly_above() {
        let rule = WithholdingRule::default();

        // Exactly at the exemption owes nothing
        assert_eq!(rule.monthly_withholding(&[record("Acme", 50_000.0)]), 0.0);

        // Any excess is taxed
        let wh = rule.monthly_withholding(&[record("Acme", 60_000.0)]);
        assert!((wh - 1_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_exemption_applies_per_company() {
        let rule = WithholdingRule::default();

        // Two companies at 30k each stay under their own exemptions
        let split = rule.monthly_withholding(&[
            record("Acme", 30_000.0),
            record("Globex", 30_000.0),
        ]);
        assert_eq!(split, 0.0);

        // The same 60k from one company crosses its exemption
        let merged = rule.monthly_withholding(&[
            record("Acme", 30_000.0),
            record("Acme", 30_000.0),
        ]);
        assert!((merged - 1_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_blank_sources_merge_into_default_payer() {
        let rule = WithholdingRule::default();

        // Blank and whitespace-only sources are one payer, not two
        let wh = rule.monthly_withholding(&[
            record("", 30_000.0),
            record("   ", 30_000.0),
        ]);
        assert!((wh - 1_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_sources_trimmed_before_grouping() {
        let rule = WithholdingRule::default();

        let wh = rule.monthly_withholding(&[
            record(" Acme ", 30_000.0),
            record("Acme", 30_000.0),
        ]);
        assert!((wh - 1_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_grouping_is_order_independent() {
        let rule = WithholdingRule::default();
        let forward = [
            record("Acme", 45_000.0),
            record("Globex", 80_000.0),
            record("Acme", 20_000.0),
            record("", 12_500.0),
        ];
        let mut reversed = forward.clone();
        reversed.reverse();

        assert_eq!(
            rule.monthly_withholding(&forward),
            rule.monthly_withholding(&reversed)
        );
    }

    #[test]
    fn test_multiple_companies_sum() {
        let rule = WithholdingRule::default();

        // Acme: (65.000 - 50.000) × 10% = 1.500
        // Globex: (120.000 - 50.000) × 10% = 7.000
        // Initech: under the exemption
        let wh = rule.monthly_withholding(&[
            record("Acme", 65_000.0),
            record("Globex", 120_000.0),
            record("Initech", 49_999.99),
        ]);
        assert!((wh - 8_500.0).abs() < 1e-9);
    }
}
