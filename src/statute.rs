//! Statutory basis of the simulation
//!
//! Plain-text summaries of the Lei 15.270/2025 articles the simulator
//! implements, shown on request so the computed figures can be traced
//! back to their rules.

/// Summaries of the implemented articles, as (article, text) pairs
pub const LEGAL_BASIS: &[(&str, &str)] = &[
    (
        "Art. 6º-A (monthly withholding of high incomes)",
        "From January of calendar year 2026 onward, profits and dividends \
         paid, credited, employed or delivered by a single legal entity to \
         a single individual resident in Brazil in excess of R$ 50.000,00 \
         within the same month are subject to withholding of income tax at \
         10% on the amount above that limit.",
    ),
    (
        "Art. 16-A (annual minimum taxation)",
        "Individuals whose annual income exceeds R$ 600.000,00 owe a \
         minimum effective income tax. The minimum rate grows linearly \
         from zero at R$ 600.000,00 of annual income up to 10% at \
         R$ 1.200.000,00, and stays at 10% above that. Tax already \
         withheld at source during the year is deducted from the minimum \
         tax due at the annual reconciliation.",
    ),
];

/// Footer shown with every simulation
pub const DISCLAIMER: &str =
    "Illustrative simulation under Lei 15.270/2025. Consult your accountant.";
