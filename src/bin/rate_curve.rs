//! Sweep the simulator across a range of monthly dividend totals
//!
//! Produces a CSV curve of withholding, minimum tax and balance due by
//! monthly income for a single paying company, covering both statutory
//! thresholds once annualized.

use dividend_tax_system::{Assumptions, CalculatorInput, DividendRecord, ProjectionEngine};
use rayon::prelude::*;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

fn main() {
    env_logger::init();

    let start = Instant::now();

    // R$ 0 to R$ 150.000 per month in R$ 500 steps: the annualized range
    // runs well past the R$ 1.200.000 ceiling
    let step = 500.0;
    let points: Vec<f64> = (0..=300).map(|i| i as f64 * step).collect();

    println!("Sweeping {} monthly dividend levels...", points.len());

    let assumptions = Assumptions::default_statutory();
    let results: Vec<_> = points
        .par_iter()
        .map(|&monthly| {
            let engine = ProjectionEngine::new(assumptions.clone());
            let input = CalculatorInput::new(vec![DividendRecord::new("Sweep Co", monthly)]);
            (monthly, engine.project(&input))
        })
        .collect();

    let output_path = "rate_curve_output.csv";
    let mut file = File::create(output_path).expect("Failed to create output file");

    writeln!(
        file,
        "Monthly,AnnualIncome,MonthlyWithholding,AnnualWithholding,MinimumTaxRate,MinimumTaxDue,BalanceDue"
    )
    .unwrap();

    for (monthly, result) in &results {
        writeln!(
            file,
            "{:.2},{:.2},{:.2},{:.2},{:.6},{:.2},{:.2}",
            monthly,
            result.projected_annual_income,
            result.monthly_withholding,
            result.projected_annual_withholding,
            result.minimum_tax_rate,
            result.minimum_tax_total_due,
            result.annual_balance_due,
        )
        .unwrap();
    }

    println!("Output written to {}", output_path);

    // Summary at the statutory corners
    println!("\nCurve summary:");
    // 50.000/month sits on the withholding exemption and annualizes to
    // the minimum-tax floor at once
    let corners = [
        ("Both thresholds", 50_000.0),
        ("Ramp midpoint", 75_000.0),
        ("Minimum tax ceiling", 100_000.0),
    ];
    let engine = ProjectionEngine::new(assumptions);
    for (label, monthly) in corners {
        let input = CalculatorInput::new(vec![DividendRecord::new("Sweep Co", monthly)]);
        let result = engine.project(&input);
        println!(
            "  {:<22} monthly={:>10.2}  rate={:.4}  balance_due={:>10.2}",
            label, monthly, result.minimum_tax_rate, result.annual_balance_due
        );
    }

    println!("\nTotal time: {:?}", start.elapsed());
}
