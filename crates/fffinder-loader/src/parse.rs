//! CSV decoding with per-cell primitive type inference.
//!
//! Each data row becomes a [`RawRow`] keyed by header name. Cells are typed
//! the way a loosely-typed CSV reader would type them: empty cells are null,
//! `true`/`false` literals are booleans, and plain decimal literals inside the
//! exactly-representable integer range are numbers. Everything else stays
//! text, byte for byte.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::LoadError;

/// Largest magnitude (exclusive) accepted as a number; `2^53`.
const MAX_INFERRED_NUMBER: f64 = 9_007_199_254_740_992.0;

static FLOAT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*-?([0-9]+\.?|\.[0-9]+|[0-9]+\.[0-9]+)([eE][-+]?[0-9]+)?\s*$")
        .expect("valid regex")
});

/// One header-keyed data row. Columns missing from a short row are absent.
pub type RawRow = HashMap<String, CellValue>;

/// A CSV cell after type inference.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Infers the primitive type of a raw cell.
    #[must_use]
    pub fn infer(raw: &str) -> Self {
        match raw {
            "" => return CellValue::Null,
            "true" | "TRUE" => return CellValue::Bool(true),
            "false" | "FALSE" => return CellValue::Bool(false),
            _ => {}
        }

        if FLOAT_RE.is_match(raw) {
            if let Ok(n) = raw.trim().parse::<f64>() {
                if n > -MAX_INFERRED_NUMBER && n < MAX_INFERRED_NUMBER {
                    return CellValue::Number(n);
                }
            }
        }

        CellValue::Text(raw.to_owned())
    }

    /// Renders the value as text, or `None` for [`CellValue::Null`].
    ///
    /// Integral numbers print without a fractional part (`1`, not `1.0`),
    /// and negative zero prints as `0`.
    #[must_use]
    pub fn to_text(&self) -> Option<String> {
        match self {
            CellValue::Null => None,
            CellValue::Bool(b) => Some(b.to_string()),
            CellValue::Number(n) if *n == 0.0 => Some("0".to_owned()),
            CellValue::Number(n) => Some(n.to_string()),
            CellValue::Text(s) => Some(s.clone()),
        }
    }

    /// The numeric value, if this cell was inferred as a number.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// Decodes CSV text with a header row into typed rows, in file order.
///
/// Blank lines are skipped. Short rows leave trailing columns absent; fields
/// beyond the header width are dropped.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] if the CSV reader fails.
pub fn parse_rows(text: &str) -> Result<Vec<RawRow>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let mut rows = Vec::new();

    for result in reader.records() {
        let record = result?;
        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(header, cell)| (header.to_owned(), CellValue::infer(cell)))
            .collect();
        rows.push(row);
    }

    tracing::debug!(
        columns = headers.len(),
        rows = rows.len(),
        "parsed dataset rows"
    );
    Ok(rows)
}
