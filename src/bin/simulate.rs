//! Simulate one month of dividends against the 2026 dividend tax rules
//!
//! Dividends come from a CSV/JSON file, repeated --dividend flags, or
//! both; the result block goes to stdout, optionally as JSON or as a
//! `;`-delimited CSV report.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use dividend_tax_system::dividend::currency::{format_brl, format_percent, parse_masked};
use dividend_tax_system::dividend::load_dividends;
use dividend_tax_system::{
    export, statute, Assumptions, CalculationResult, CalculatorInput, DividendRecord,
    ProjectionEngine,
};

/// Dividend withholding and minimum-tax simulator (Lei 15.270/2025)
#[derive(Debug, Parser)]
#[command(name = "simulate", version, about)]
struct Args {
    /// Dividend input file: .csv with `source;amount` rows, or .json
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Inline dividend as SOURCE=AMOUNT (repeatable); AMOUNT accepts
    /// masked entry such as "12.345,67", and a bare AMOUNT goes to the
    /// unnamed payer
    #[arg(short, long = "dividend", value_name = "SOURCE=AMOUNT")]
    dividends: Vec<String>,

    /// Write the full report as `;`-delimited CSV to this path
    #[arg(short, long)]
    export: Option<PathBuf>,

    /// Print the result as JSON instead of the text block
    #[arg(long)]
    json: bool,

    /// Print the statutory basis and exit
    #[arg(long)]
    legal: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.legal {
        for (article, text) in statute::LEGAL_BASIS {
            println!("{article}\n{text}\n");
        }
        println!("{}", statute::DISCLAIMER);
        return Ok(());
    }

    let input = build_input(&args)?;
    info!("simulating {} dividend record(s)", input.dividends.len());

    let engine = ProjectionEngine::new(Assumptions::default_statutory());
    let result = engine.project(&input);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&result);
    }

    if let Some(path) = &args.export {
        export::export_report(path, &input, &result)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}

fn build_input(args: &Args) -> Result<CalculatorInput> {
    if args.input.is_none() && args.dividends.is_empty() {
        bail!("no dividends given; pass --input FILE and/or --dividend SOURCE=AMOUNT");
    }

    let mut input = match &args.input {
        Some(path) => load_dividends(path)
            .with_context(|| format!("failed to load dividends from {}", path.display()))?,
        None => CalculatorInput::default(),
    };

    for flag in &args.dividends {
        input.dividends.push(parse_dividend_flag(flag));
    }

    Ok(input)
}

/// Split a `SOURCE=AMOUNT` flag; without a `=` the whole value is the
/// amount and the source stays blank
fn parse_dividend_flag(flag: &str) -> DividendRecord {
    match flag.split_once('=') {
        Some((source, amount)) => DividendRecord::new(source, parse_masked(amount)),
        None => DividendRecord::new("", parse_masked(flag)),
    }
}

fn print_result(result: &CalculationResult) {
    println!("Monthly figures:");
    println!(
        "  Dividends received:      {}",
        format_brl(result.total_monthly_dividends)
    );
    println!(
        "  Withholding at source:   {}",
        format_brl(result.monthly_withholding)
    );

    println!("\nAnnual projection (12 identical months):");
    println!(
        "  Projected income:        {}",
        format_brl(result.projected_annual_income)
    );
    println!(
        "  Projected withholding:   {}",
        format_brl(result.projected_annual_withholding)
    );

    println!("\nMinimum taxation:");
    println!(
        "  Minimum rate:            {}",
        format_percent(result.minimum_tax_rate)
    );
    println!(
        "  Minimum tax due:         {}",
        format_brl(result.minimum_tax_total_due)
    );

    println!(
        "\nBalance due at annual reconciliation: {}",
        format_brl(result.annual_balance_due)
    );
    println!(
        "Effective rate on projected income:   {}",
        format_percent(result.effective_rate())
    );

    println!("\n{}", statute::DISCLAIMER);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dividend_flag() {
        let named = parse_dividend_flag("Acme=60.000,00");
        assert_eq!(named.source, "Acme");
        assert_eq!(named.amount, 60_000.0);

        let unnamed = parse_dividend_flag("1.234,56");
        assert_eq!(unnamed.source, "");
        assert_eq!(unnamed.amount, 1_234.56);
    }
}
