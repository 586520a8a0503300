use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::SelectionError;

/// Temporal bucketing of the revenue series
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl Granularity {
    /// Lowercase code used in requests and config
    pub fn code(&self) -> &'static str {
        match self {
            Granularity::Daily => "daily",
            Granularity::Weekly => "weekly",
            Granularity::Monthly => "monthly",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Granularity::Daily => "Daily",
            Granularity::Weekly => "Weekly",
            Granularity::Monthly => "Monthly",
        }
    }

    /// All granularities in selector order
    pub fn all() -> [Granularity; 3] {
        [Granularity::Daily, Granularity::Weekly, Granularity::Monthly]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "daily" => Some(Granularity::Daily),
            "weekly" => Some(Granularity::Weekly),
            "monthly" => Some(Granularity::Monthly),
            _ => None,
        }
    }
}

impl FromStr for Granularity {
    type Err = SelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| SelectionError::InvalidGranularity(s.to_string()))
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
