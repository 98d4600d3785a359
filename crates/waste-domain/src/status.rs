//! Bin Status Entity
//!
//! Read-only bin snapshot shown on the dashboard map and summary table.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult, Entity};
use super::fill::FillBand;
use super::geo::LatLng;

/// Display and wire format of `last_update`
pub const LAST_UPDATE_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinStatus {
    pub id: u32,
    pub fill_level: u32,
    pub location: String,
    pub position: LatLng,
    #[serde(with = "last_update_format")]
    pub last_update: NaiveDateTime,
}

impl BinStatus {
    pub fn new(
        id: u32,
        fill_level: u32,
        location: impl Into<String>,
        position: LatLng,
        last_update: &str,
    ) -> DomainResult<Self> {
        let last_update = NaiveDateTime::parse_from_str(last_update, LAST_UPDATE_FORMAT)
            .map_err(|e| DomainError::InvalidInput(format!("last update '{}': {}", last_update, e)))?;
        Ok(Self {
            id,
            fill_level,
            location: location.into(),
            position,
            last_update,
        })
    }

    pub fn band(&self) -> FillBand {
        FillBand::from_level(self.fill_level)
    }

    pub fn last_update_label(&self) -> String {
        self.last_update.format(LAST_UPDATE_FORMAT).to_string()
    }

    /// Marker popup lines
    pub fn popup_text(&self) -> (String, String) {
        (
            format!("Bin {}: {}% full", self.id, self.fill_level),
            format!("Location: {}", self.location),
        )
    }
}

impl Entity for BinStatus {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Mock snapshot the dashboard renders
pub fn seed_statuses() -> DomainResult<Vec<BinStatus>> {
    Ok(vec![
        BinStatus::new(1, 20, "Central Park", LatLng::new(40.785091, -73.968285), "2023-05-20 10:30")?,
        BinStatus::new(2, 80, "Malviya Nagar", LatLng::new(40.758896, -73.985130), "2023-05-20 11:15")?,
        BinStatus::new(3, 50, "Vaishali Nagar", LatLng::new(40.706086, -73.996864), "2023-05-20 09:45")?,
        BinStatus::new(4, 10, "Mansarovar", LatLng::new(40.689247, -74.044502), "2023-05-20 12:00")?,
    ])
}

mod last_update_format {
    use chrono::NaiveDateTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    use super::LAST_UPDATE_FORMAT;

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(LAST_UPDATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, LAST_UPDATE_FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_statuses() {
        let statuses = seed_statuses().unwrap();
        assert_eq!(statuses.len(), 4);
        assert_eq!(statuses[1].location, "Malviya Nagar");
        assert_eq!(statuses[1].band(), FillBand::High);
        assert_eq!(statuses[3].last_update_label(), "2023-05-20 12:00");
    }

    #[test]
    fn test_bad_timestamp() {
        let result = BinStatus::new(9, 0, "Somewhere", LatLng::new(0.0, 0.0), "yesterday");
        assert!(matches!(result, Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn test_popup_text() {
        let status = &seed_statuses().unwrap()[0];
        let (title, location) = status.popup_text();
        assert_eq!(title, "Bin 1: 20% full");
        assert_eq!(location, "Location: Central Park");
    }

    #[test]
    fn test_last_update_serde_format() {
        let status = &seed_statuses().unwrap()[2];
        let json = serde_json::to_value(status).unwrap();
        assert_eq!(json["last_update"], "2023-05-20 09:45");

        let back: BinStatus = serde_json::from_value(json).unwrap();
        assert_eq!(&back, status);
    }
}
