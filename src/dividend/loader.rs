//! Load dividend inputs from CSV or JSON files
//!
//! CSV rows are `source;amount` with locale decimal-comma amounts; JSON
//! accepts either the full input object or a bare array of records.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use log::info;
use serde::Deserialize;
use thiserror::Error;

use super::currency;
use super::{CalculatorInput, DividendRecord};

/// Errors raised while reading a dividend input file
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("malformed CSV input: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed JSON input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("record {record}: cannot parse amount {value:?}")]
    BadAmount { record: usize, value: String },

    #[error("unsupported input format {extension:?}, expected .csv or .json")]
    UnsupportedFormat { extension: String },
}

/// Load a month of dividends from a file, with the format chosen by the
/// file extension
pub fn load_dividends(path: &Path) -> Result<CalculatorInput, LoadError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let open = |path: &Path| {
        File::open(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })
    };

    let input = match extension.as_str() {
        "csv" => load_dividends_from_csv(open(path)?)?,
        "json" => load_dividends_from_json(open(path)?)?,
        _ => return Err(LoadError::UnsupportedFormat { extension }),
    };

    info!(
        "loaded {} dividend record(s) from {}",
        input.dividends.len(),
        path.display()
    );
    Ok(input)
}

/// Read `source;amount` CSV rows into a simulation input
///
/// An optional header row is skipped when its amount column is not
/// numeric. A missing amount column parses as an error, not as zero.
pub fn load_dividends_from_csv<R: Read>(reader: R) -> Result<CalculatorInput, LoadError> {
    let mut rows = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut dividends = Vec::new();
    for (index, row) in rows.records().enumerate() {
        let row = row?;
        let source = row.get(0).unwrap_or("").to_string();
        let raw_amount = row.get(1).unwrap_or("");

        match currency::parse_amount(raw_amount) {
            Some(amount) => dividends.push(DividendRecord::new(source, amount)),
            // Header row
            None if index == 0 => continue,
            None => {
                return Err(LoadError::BadAmount {
                    record: index + 1,
                    value: raw_amount.to_string(),
                })
            }
        }
    }

    Ok(CalculatorInput::new(dividends))
}

/// Read a JSON simulation input
///
/// Accepts `{"dividends": [...]}` as well as a bare `[...]` of records.
pub fn load_dividends_from_json<R: Read>(reader: R) -> Result<CalculatorInput, LoadError> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum JsonInput {
        Full(CalculatorInput),
        Records(Vec<DividendRecord>),
    }

    let input = match serde_json::from_reader(reader)? {
        JsonInput::Full(input) => input,
        JsonInput::Records(dividends) => CalculatorInput::new(dividends),
    };
    Ok(input)
}
