use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse hazard group of a warning label, estimated from its title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningCategory {
    Health,
    Environmental,
    Physical,
    General,
}

const HEALTH_MARKERS: &[&str] = &["독성", "유해", "건강"];
const ENVIRONMENTAL_MARKERS: &[&str] = &["환경", "수질", "대기"];
const PHYSICAL_MARKERS: &[&str] = &["인화", "폭발", "산화"];

impl WarningCategory {
    /// Groups are checked in order: health, environmental, physical.
    pub fn estimate(title: &str) -> WarningCategory {
        let lower = title.to_lowercase();
        let has_any = |markers: &[&str]| markers.iter().any(|m| lower.contains(m));

        if has_any(HEALTH_MARKERS) {
            WarningCategory::Health
        } else if has_any(ENVIRONMENTAL_MARKERS) {
            WarningCategory::Environmental
        } else if has_any(PHYSICAL_MARKERS) {
            WarningCategory::Physical
        } else {
            WarningCategory::General
        }
    }
}

impl fmt::Display for WarningCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarningCategory::Health => write!(f, "health"),
            WarningCategory::Environmental => write!(f, "environmental"),
            WarningCategory::Physical => write!(f, "physical"),
            WarningCategory::General => write!(f, "general"),
        }
    }
}
