//! Filtering of the canonical record set by free text and permit status.
//!
//! Every call filters the full slice it is given; results are never derived
//! from an earlier result.

use serde::{Deserialize, Serialize};

use crate::facility::{FacilityRecord, FacilityStatus};

/// Which record fields a search term is matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    #[default]
    All,
    Name,
    Address,
}

impl SearchField {
    /// Maps a field selector to a variant. Anything other than `"name"` or
    /// `"address"` selects [`SearchField::All`].
    #[must_use]
    pub fn from_param(value: &str) -> Self {
        match value {
            "name" => SearchField::Name,
            "address" => SearchField::Address,
            _ => SearchField::All,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SearchField::All => "all",
            SearchField::Name => "name",
            SearchField::Address => "address",
        }
    }
}

impl From<&str> for SearchField {
    fn from(value: &str) -> Self {
        Self::from_param(value)
    }
}

impl std::fmt::Display for SearchField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The inputs that drive the current filtered view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    pub search_term: String,
    pub search_field: SearchField,
    pub status_filter: Option<FacilityStatus>,
}

impl Query {
    /// Runs [`search`] with this query's parameters.
    #[must_use]
    pub fn apply<'a>(&self, records: &'a [FacilityRecord]) -> Vec<&'a FacilityRecord> {
        search(
            records,
            &self.search_term,
            self.search_field,
            self.status_filter,
        )
    }
}

/// Returns the records matching both the status filter and the search term,
/// in their original order.
///
/// A `None` status matches every record. An empty `term` matches every
/// record; otherwise the term is compared case-insensitively as a substring
/// of the selected field(s). The term is used as given, so leading or
/// trailing whitespace is part of what must match.
#[must_use]
pub fn search<'a>(
    records: &'a [FacilityRecord],
    term: &str,
    field: SearchField,
    status: Option<FacilityStatus>,
) -> Vec<&'a FacilityRecord> {
    let needle = (!term.is_empty()).then(|| term.to_lowercase());

    records
        .iter()
        .filter(|record| matches_status(record, status))
        .filter(|record| {
            needle
                .as_deref()
                .is_none_or(|needle| matches_term(record, needle, field))
        })
        .collect()
}

fn matches_status(record: &FacilityRecord, status: Option<FacilityStatus>) -> bool {
    status.is_none_or(|wanted| record.status == Some(wanted))
}

/// `needle` must already be lower-cased.
fn matches_term(record: &FacilityRecord, needle: &str, field: SearchField) -> bool {
    let contains = |value: &str| value.to_lowercase().contains(needle);
    match field {
        SearchField::Name => contains(&record.applicant_name),
        SearchField::Address => contains(&record.address),
        SearchField::All => contains(&record.applicant_name) || contains(&record.address),
    }
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
