//! Fill Level Bands
//!
//! Buckets a fill percentage into the three display colors.

use serde::{Deserialize, Serialize};

/// Fill level at which a bin is shown orange
pub const WARNING_THRESHOLD: u32 = 50;
/// Fill level at which a bin is shown red and raises an alert
pub const ALERT_THRESHOLD: u32 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillBand {
    Low,
    Medium,
    High,
}

impl FillBand {
    pub fn from_level(fill_level: u32) -> Self {
        if fill_level < WARNING_THRESHOLD {
            FillBand::Low
        } else if fill_level < ALERT_THRESHOLD {
            FillBand::Medium
        } else {
            FillBand::High
        }
    }

    /// Color name, also the marker image suffix
    pub fn color(&self) -> &'static str {
        match self {
            FillBand::Low => "green",
            FillBand::Medium => "orange",
            FillBand::High => "red",
        }
    }
}
