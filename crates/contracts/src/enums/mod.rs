pub mod granularity;
pub mod report_window;

pub use granularity::Granularity;
pub use report_window::Window;

use thiserror::Error;

/// Rejected raw selection input (value outside the closed enumerations).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("invalid reporting window: {0} (expected 7, 30 or 90)")]
    InvalidWindow(u32),

    #[error("invalid granularity: {0:?} (expected daily, weekly or monthly)")]
    InvalidGranularity(String),
}
