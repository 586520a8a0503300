use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Granularity, SelectionError};

/// Reporting horizon of the dashboard, in days.
///
/// Serialized as the plain day count (`7`, `30`, `90`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Window {
    #[default]
    Days7,
    Days30,
    Days90,
}

impl Window {
    /// Number of days covered by the window
    pub fn days(&self) -> u32 {
        match self {
            Window::Days7 => 7,
            Window::Days30 => 30,
            Window::Days90 => 90,
        }
    }

    /// Button label, e.g. "30 Days"
    pub fn display_name(&self) -> String {
        format!("{} Days", self.days())
    }

    /// All windows in selector order
    pub fn all() -> [Window; 3] {
        [Window::Days7, Window::Days30, Window::Days90]
    }

    /// Whether a revenue series is offered at `granularity` for this window.
    ///
    /// Every window supports daily; weekly needs at least 30 days and
    /// monthly needs 90.
    pub fn supports(&self, granularity: Granularity) -> bool {
        match granularity {
            Granularity::Daily => true,
            Granularity::Weekly => matches!(self, Window::Days30 | Window::Days90),
            Granularity::Monthly => matches!(self, Window::Days90),
        }
    }
}

impl TryFrom<u32> for Window {
    type Error = SelectionError;

    fn try_from(days: u32) -> Result<Self, Self::Error> {
        match days {
            7 => Ok(Window::Days7),
            30 => Ok(Window::Days30),
            90 => Ok(Window::Days90),
            other => Err(SelectionError::InvalidWindow(other)),
        }
    }
}

impl From<Window> for u32 {
    fn from(window: Window) -> Self {
        window.days()
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.days())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_days() {
        assert_eq!(Window::try_from(7), Ok(Window::Days7));
        assert_eq!(Window::try_from(30), Ok(Window::Days30));
        assert_eq!(Window::try_from(90), Ok(Window::Days90));
        assert_eq!(Window::try_from(14), Err(SelectionError::InvalidWindow(14)));
        assert_eq!(Window::try_from(0), Err(SelectionError::InvalidWindow(0)));
    }

    #[test]
    fn test_supported_granularities() {
        assert!(Window::Days7.supports(Granularity::Daily));
        assert!(!Window::Days7.supports(Granularity::Weekly));
        assert!(!Window::Days7.supports(Granularity::Monthly));

        assert!(Window::Days30.supports(Granularity::Daily));
        assert!(Window::Days30.supports(Granularity::Weekly));
        assert!(!Window::Days30.supports(Granularity::Monthly));

        for granularity in Granularity::all() {
            assert!(Window::Days90.supports(granularity));
        }
    }

    #[test]
    fn test_serde_as_day_count() {
        assert_eq!(serde_json::to_string(&Window::Days30).unwrap(), "30");
        let parsed: Window = serde_json::from_str("90").unwrap();
        assert_eq!(parsed, Window::Days90);
        assert!(serde_json::from_str::<Window>("60").is_err());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Window::default(), Window::Days7);
        assert_eq!(Window::Days7.display_name(), "7 Days");
        assert_eq!(Window::Days90.to_string(), "90");
    }
}
