use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::enums::{Granularity, Window};
use crate::shared::indicators::{MetricName, SummaryStat};

/// Single point of the revenue chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// X-axis label, e.g. "Day 3" or "Week 2"
    pub label: String,
    /// Revenue in whole currency units
    pub value: u64,
}

impl SeriesPoint {
    pub fn new(label: impl Into<String>, value: u64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Chronologically ordered revenue points. Empty means "not offered".
pub type Series = Vec<SeriesPoint>;

/// Revenue share of one product category within a window.
///
/// Shares of a window are not normalized to 100.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: String,
    pub share_percent: u32,
    pub revenue: u64,
}

/// Share of orders in one fulfillment status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusShare {
    pub status: String,
    pub share_percent: u32,
    /// Bar colour, e.g. "#4CAF50"
    pub color_token: String,
}

/// Granularity choice as offered to the selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GranularityOption {
    pub granularity: Granularity,
    /// `false` when the current window has no series at this granularity
    pub enabled: bool,
}

/// Everything the operations dashboard renders for one selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationsOverview {
    pub window: Window,
    pub granularity: Granularity,
    /// Revenue chart data (possibly empty)
    pub series: Series,
    pub category_shares: Vec<CategoryShare>,
    pub status_shares: Vec<StatusShare>,
    /// Summary tiles, keyed by metric in tile order
    pub summary: BTreeMap<MetricName, SummaryStat>,
    /// Total revenue for the window
    pub revenue_total: f64,
    pub granularity_options: Vec<GranularityOption>,
    /// X-axis tick interval (0 = label every point)
    pub axis_label_interval: u32,
}

impl OperationsOverview {
    /// Whether the revenue chart should show its "no data" state
    pub fn has_series(&self) -> bool {
        !self.series.is_empty()
    }
}
