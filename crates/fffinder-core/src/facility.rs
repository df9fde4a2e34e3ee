use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CoreError;

/// Permit status of a mobile food facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FacilityStatus {
    Approved,
    Requested,
    Suspend,
    Expired,
    Issued,
}

impl FacilityStatus {
    /// Every status, in the order the dataset documents them.
    pub const ALL: [FacilityStatus; 5] = [
        FacilityStatus::Approved,
        FacilityStatus::Requested,
        FacilityStatus::Suspend,
        FacilityStatus::Expired,
        FacilityStatus::Issued,
    ];

    /// The value as it appears in the `Status` column.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FacilityStatus::Approved => "APPROVED",
            FacilityStatus::Requested => "REQUESTED",
            FacilityStatus::Suspend => "SUSPEND",
            FacilityStatus::Expired => "EXPIRED",
            FacilityStatus::Issued => "ISSUED",
        }
    }

    /// Exact, case-sensitive lookup. `"approved"` is not a status.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

impl std::fmt::Display for FacilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FacilityStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| CoreError::UnknownStatus(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FacilityType {
    Truck,
    #[serde(rename = "Push Cart")]
    PushCart,
}

impl FacilityType {
    pub const ALL: [FacilityType; 2] = [FacilityType::Truck, FacilityType::PushCart];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FacilityType::Truck => "Truck",
            FacilityType::PushCart => "Push Cart",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

impl std::fmt::Display for FacilityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One permit row from the dataset, normalized for search and display.
///
/// Text fields are never missing: absent source values become `""`. `status`
/// serializes as an explicit `null` when unknown, while `facility_type` is
/// left out of the serialized record entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityRecord {
    pub location_id: String,
    pub applicant_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facility_type: Option<FacilityType>,
    pub address: String,
    pub status: Option<FacilityStatus>,
    pub food_items: String,
    pub latitude: f64,
    pub longitude: f64,
}
