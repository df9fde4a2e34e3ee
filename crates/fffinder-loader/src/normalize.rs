//! Normalization of typed CSV rows into [`FacilityRecord`]s.
//!
//! Each record field has its own normalizer so the fallback for a missing or
//! malformed value is explicit: text becomes `""`, an unknown status becomes
//! `None`, an unknown facility type is dropped, and coordinates become `0`.

use fffinder_core::{FacilityRecord, FacilityStatus, FacilityType};

use crate::error::LoadError;
use crate::parse::{parse_rows, CellValue, RawRow};

pub const COL_LOCATION_ID: &str = "locationid";
pub const COL_APPLICANT: &str = "Applicant";
pub const COL_FACILITY_TYPE: &str = "FacilityType";
pub const COL_ADDRESS: &str = "Address";
pub const COL_STATUS: &str = "Status";
pub const COL_FOOD_ITEMS: &str = "FoodItems";
pub const COL_LATITUDE: &str = "Latitude";
pub const COL_LONGITUDE: &str = "Longitude";

/// Parses dataset text and normalizes every data row, preserving row order.
///
/// # Errors
///
/// Returns [`LoadError::Parse`] if the CSV reader fails. Malformed field
/// values never fail the load.
pub fn parse_dataset(text: &str) -> Result<Vec<FacilityRecord>, LoadError> {
    let rows = parse_rows(text)?;
    Ok(rows.iter().map(normalize_row).collect())
}

/// Converts one typed row into a [`FacilityRecord`].
#[must_use]
pub fn normalize_row(row: &RawRow) -> FacilityRecord {
    FacilityRecord {
        location_id: text_field(row, COL_LOCATION_ID),
        applicant_name: text_field(row, COL_APPLICANT),
        facility_type: facility_type_field(row),
        address: text_field(row, COL_ADDRESS),
        status: status_field(row),
        food_items: text_field(row, COL_FOOD_ITEMS),
        latitude: coordinate_field(row, COL_LATITUDE),
        longitude: coordinate_field(row, COL_LONGITUDE),
    }
}

/// The column rendered as text, or `""` when absent or empty.
#[must_use]
pub fn text_field(row: &RawRow, column: &str) -> String {
    row.get(column)
        .and_then(CellValue::to_text)
        .unwrap_or_default()
}

/// `Some` only when the `FacilityType` column holds a known type verbatim.
#[must_use]
pub fn facility_type_field(row: &RawRow) -> Option<FacilityType> {
    FacilityType::parse(&text_field(row, COL_FACILITY_TYPE))
}

/// `Some` only when the `Status` column holds a known status verbatim.
#[must_use]
pub fn status_field(row: &RawRow) -> Option<FacilityStatus> {
    FacilityStatus::parse(&text_field(row, COL_STATUS))
}

/// The column as a finite number, or `0.0` when absent or non-numeric.
#[must_use]
pub fn coordinate_field(row: &RawRow, column: &str) -> f64 {
    row.get(column)
        .and_then(CellValue::as_number)
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
