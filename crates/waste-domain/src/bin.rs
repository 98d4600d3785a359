//! Bin Entity
//!
//! A waste-collection container on the bin management page.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use super::entity::{DomainError, DomainResult, Entity};

/// Whether the bin's fill sensor is reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SensorStatus {
    Active,
    Inactive,
}

impl SensorStatus {
    pub const ALL: [SensorStatus; 2] = [SensorStatus::Active, SensorStatus::Inactive];

    pub fn as_str(&self) -> &'static str {
        match self {
            SensorStatus::Active => "Active",
            SensorStatus::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for SensorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SensorStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Active" => Ok(SensorStatus::Active),
            "Inactive" => Ok(SensorStatus::Inactive),
            other => Err(DomainError::InvalidInput(format!("unknown sensor status '{}'", other))),
        }
    }
}

/// A managed bin
///
/// Ids are user-supplied and may repeat; fill level is not range-checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bin {
    pub id: i32,
    pub location: String,
    pub sensor_status: SensorStatus,
    /// Percentage, new bins start at 0
    pub fill_level: u32,
}

impl Bin {
    pub fn new(id: i32, location: impl Into<String>, sensor_status: SensorStatus, fill_level: u32) -> Self {
        Self {
            id,
            location: location.into(),
            sensor_status,
            fill_level,
        }
    }

    /// Copy of this bin with only the editable fields replaced
    pub fn with_edit(&self, location: &str, sensor_status: SensorStatus) -> Self {
        Self {
            location: location.to_string(),
            sensor_status,
            ..self.clone()
        }
    }
}

impl Entity for Bin {
    type Id = i32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Raw "Add New Bin" form state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinDraft {
    /// Unparsed id as typed
    pub id: String,
    pub location: String,
    pub sensor_status: Option<SensorStatus>,
}

impl BinDraft {
    /// Validate the draft into a new, empty bin
    pub fn into_bin(&self) -> DomainResult<Bin> {
        let id = self.id.trim().parse::<i32>()
            .map_err(|_| DomainError::InvalidInput(format!("bin id '{}' is not a number", self.id)))?;

        let location = self.location.trim();
        if location.is_empty() {
            return Err(DomainError::InvalidInput("location is required".to_string()));
        }

        let sensor_status = self.sensor_status
            .ok_or_else(|| DomainError::InvalidInput("sensor status is required".to_string()))?;

        Ok(Bin::new(id, location, sensor_status, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(id: &str, location: &str, status: Option<SensorStatus>) -> BinDraft {
        BinDraft {
            id: id.to_string(),
            location: location.to_string(),
            sensor_status: status,
        }
    }

    #[test]
    fn test_draft_into_bin() {
        let bin = draft(" 42 ", "Raja Park", Some(SensorStatus::Active)).into_bin().unwrap();
        assert_eq!(bin.id(), 42);
        assert_eq!(bin.location, "Raja Park");
        assert_eq!(bin.sensor_status, SensorStatus::Active);
        assert_eq!(bin.fill_level, 0);
    }

    #[test]
    fn test_draft_rejects_non_numeric_id() {
        for id in ["", "abc", "4x", "1.5", "--3", "99999999999"] {
            let result = draft(id, "Raja Park", Some(SensorStatus::Active)).into_bin();
            assert!(matches!(result, Err(DomainError::InvalidInput(_))), "id {:?}", id);
        }
    }

    #[test]
    fn test_draft_accepts_negative_id() {
        let bin = draft("-3", "Sanganer", Some(SensorStatus::Inactive)).into_bin().unwrap();
        assert_eq!(bin.id, -3);
        assert_eq!(bin.fill_level, 0);
    }

    #[test]
    fn test_draft_requires_location_and_status() {
        assert!(draft("1", "   ", Some(SensorStatus::Active)).into_bin().is_err());
        assert!(draft("1", "Raja Park", None).into_bin().is_err());
    }

    #[test]
    fn test_with_edit_keeps_fill_level() {
        let bin = Bin::new(2, "Malviya Nagar", SensorStatus::Active, 85);
        let edited = bin.with_edit("C-Scheme", SensorStatus::Inactive);
        assert_eq!(edited.id, 2);
        assert_eq!(edited.location, "C-Scheme");
        assert_eq!(edited.sensor_status, SensorStatus::Inactive);
        assert_eq!(edited.fill_level, 85);
    }

    #[test]
    fn test_sensor_status_strings() {
        assert_eq!(SensorStatus::Inactive.as_str(), "Inactive");
        assert_eq!("Active".parse::<SensorStatus>(), Ok(SensorStatus::Active));
        assert!("active".parse::<SensorStatus>().is_err());
    }
}
