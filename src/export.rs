//! CSV report export
//!
//! Serializes the raw dividend rows and every computed field as a
//! `;`-delimited report with two-decimal comma-formatted values and CRLF
//! line endings, matching the on-screen result block.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use chrono::{DateTime, Local};
use log::info;

use crate::dividend::currency::format_csv_number;
use crate::dividend::{CalculatorInput, DEFAULT_PAYER_LABEL};
use crate::projection::CalculationResult;

/// Write the full simulation report
pub fn write_report<W: Write>(
    mut w: W,
    input: &CalculatorInput,
    result: &CalculationResult,
    generated_at: DateTime<Local>,
) -> io::Result<()> {
    write!(w, "Dividend tax simulation (Lei 15.270/2025)\r\n")?;
    write!(w, "Generated at;{}\r\n", generated_at.format("%Y-%m-%d %H:%M"))?;
    write!(w, "\r\n")?;

    write!(w, "Input dividends\r\n")?;
    write!(w, "Paying company;Amount received\r\n")?;
    if input.dividends.is_empty() {
        write!(w, "No dividends entered;0,00\r\n")?;
    } else {
        for dividend in input.dividends.iter() {
            let source = if dividend.source.trim().is_empty() {
                DEFAULT_PAYER_LABEL
            } else {
                dividend.source.as_str()
            };
            write!(w, "{};{}\r\n", source, format_csv_number(dividend.amount))?;
        }
    }
    write!(w, "\r\n")?;

    write!(w, "Calculation result\r\n")?;
    write!(w, "Item;Value\r\n")?;
    write!(
        w,
        "Total dividends received;{}\r\n",
        format_csv_number(result.total_monthly_dividends)
    )?;
    write!(
        w,
        "Withholding at source;{}\r\n",
        format_csv_number(result.monthly_withholding)
    )?;
    write!(
        w,
        "Projected annual income;{}\r\n",
        format_csv_number(result.projected_annual_income)
    )?;
    write!(
        w,
        "Projected annual withholding;{}\r\n",
        format_csv_number(result.projected_annual_withholding)
    )?;
    write!(
        w,
        "Minimum tax rate;{}\r\n",
        format_csv_number(result.minimum_tax_rate)
    )?;
    write!(
        w,
        "Minimum tax due;{}\r\n",
        format_csv_number(result.minimum_tax_total_due)
    )?;
    write!(
        w,
        "Balance due at reconciliation;{}\r\n",
        format_csv_number(result.annual_balance_due)
    )?;

    Ok(())
}

/// Write the report to a file, stamped with the current time
pub fn export_report(
    path: &Path,
    input: &CalculatorInput,
    result: &CalculationResult,
) -> io::Result<()> {
    let file = File::create(path)?;
    write_report(file, input, result, Local::now())?;
    info!("report written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dividend::DividendRecord;
    use crate::{Assumptions, ProjectionEngine};
    use chrono::TimeZone;

    fn stamp() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 1, 15, 10, 30, 0).unwrap()
    }

    #[test]
    fn test_report_layout() {
        let input = CalculatorInput::new(vec![
            DividendRecord::new("Acme", 60_000.0),
            DividendRecord::new("", 1_234.56),
        ]);
        let result = ProjectionEngine::new(Assumptions::default_statutory()).project(&input);

        let mut buffer = Vec::new();
        write_report(&mut buffer, &input, &result, stamp()).unwrap();
        let report = String::from_utf8(buffer).unwrap();

        let expected = "Dividend tax simulation (Lei 15.270/2025)\r\n\
                        Generated at;2026-01-15 10:30\r\n\
                        \r\n\
                        Input dividends\r\n\
                        Paying company;Amount received\r\n\
                        Acme;60000,00\r\n\
                        Unnamed payer;1234,56\r\n\
                        \r\n\
                        Calculation result\r\n\
                        Item;Value\r\n\
                        Total dividends received;61234,56\r\n\
                        Withholding at source;1000,00\r\n\
                        Projected annual income;734814,72\r\n\
                        Projected annual withholding;12000,00\r\n\
                        Minimum tax rate;0,02\r\n\
                        Minimum tax due;16510,64\r\n\
                        Balance due at reconciliation;4510,64\r\n";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_empty_input_placeholder_row() {
        let input = CalculatorInput::default();
        let result = ProjectionEngine::default().project(&input);

        let mut buffer = Vec::new();
        write_report(&mut buffer, &input, &result, stamp()).unwrap();
        let report = String::from_utf8(buffer).unwrap();

        assert!(report.contains("No dividends entered;0,00\r\n"));
        assert!(report.contains("Balance due at reconciliation;0,00\r\n"));
    }
}
