//! Currency parsing and pt-BR locale formatting
//!
//! Amounts arrive either as masked digit entry ("1.234,56") or as
//! locale-formatted file values, and leave as two-decimal comma strings
//! for display and CSV export.

/// Parse a masked currency entry by keeping digits only and treating the
/// last two as cents
///
/// This is the digit-only sanitization applied to interactive amount
/// entry: "1.234,56" → 1234.56, "R$ 50.000,00" → 50000.0, "" → 0.0.
/// Anything without a digit parses as zero.
pub fn parse_masked(input: &str) -> f64 {
    let digits: String = input.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return 0.0;
    }

    digits.parse::<f64>().unwrap_or(0.0) / 100.0
}

/// Parse a locale-formatted amount from a file field
///
/// Accepts "12.345,67", "12345,67", an optional "R$" prefix, and plain
/// "12345.67". Dots are treated as thousands separators only when a
/// decimal comma is present. Returns `None` when nothing numeric remains.
pub fn parse_amount(input: &str) -> Option<f64> {
    let cleaned = input.trim().trim_start_matches("R$").trim();
    if cleaned.is_empty() {
        return None;
    }

    let normalized = if cleaned.contains(',') {
        cleaned.replace('.', "").replace(',', ".")
    } else {
        cleaned.to_string()
    };

    normalized.parse::<f64>().ok()
}

/// Format with thousands dots and a decimal comma: 1234.5 → "1.234,50"
pub fn format_amount(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    format!("{}{},{:02}", if negative { "-" } else { "" }, grouped, frac)
}

/// Currency display form: 1234.5 → "R$ 1.234,50"
pub fn format_brl(value: f64) -> String {
    format!("R$ {}", format_amount(value))
}

/// Fraction as a percentage with two decimals: 0.1 → "10,00%"
pub fn format_percent(value: f64) -> String {
    format!("{}%", format_csv_number(value * 100.0))
}

/// Two decimals with a comma separator and no grouping, for CSV cells:
/// 1234.5 → "1234,50"
pub fn format_csv_number(value: f64) -> String {
    format!("{value:.2}").replace('.', ",")
}
