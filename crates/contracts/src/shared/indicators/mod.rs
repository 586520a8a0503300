use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Indicator identity & display metadata
// ---------------------------------------------------------------------------

/// Summary tiles shown above the revenue chart.
///
/// Declaration order is the tile order; maps keyed by `MetricName` iterate
/// in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricName {
    TotalOrders,
    ActiveCustomers,
    InventoryItems,
    FulfillmentRate,
}

impl MetricName {
    pub fn all() -> [MetricName; 4] {
        [
            MetricName::TotalOrders,
            MetricName::ActiveCustomers,
            MetricName::InventoryItems,
            MetricName::FulfillmentRate,
        ]
    }

    /// Tile title
    pub fn title(&self) -> &'static str {
        match self {
            MetricName::TotalOrders => "TOTAL ORDERS",
            MetricName::ActiveCustomers => "ACTIVE CUSTOMERS",
            MetricName::InventoryItems => "INVENTORY ITEMS",
            MetricName::FulfillmentRate => "ORDER FULFILLMENT RATE",
        }
    }

    /// Icon token for the presentation layer
    pub fn icon(&self) -> &'static str {
        match self {
            MetricName::TotalOrders => "shopping-cart",
            MetricName::ActiveCustomers => "users",
            MetricName::InventoryItems => "boxes",
            MetricName::FulfillmentRate => "truck",
        }
    }
}

// ---------------------------------------------------------------------------
// Computed values
// ---------------------------------------------------------------------------

/// Pre-formatted tile value plus its change against the previous period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStat {
    /// Display-ready value, e.g. "1,284" or "95.8%"
    pub display_value: String,
    /// Change relative to previous period, expressed as a percentage.
    pub change_percent: f64,
}

impl SummaryStat {
    pub fn new(display_value: &str, change_percent: f64) -> Self {
        Self {
            display_value: display_value.to_string(),
            change_percent,
        }
    }
}

/// Direction arrow of a percent change. Zero counts as `Up`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeDirection {
    Up,
    Down,
}

impl ChangeDirection {
    pub fn arrow(&self) -> char {
        match self {
            ChangeDirection::Up => '\u{2191}',
            ChangeDirection::Down => '\u{2193}',
        }
    }
}

/// Formatted percent change: arrow plus absolute magnitude.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PercentChange {
    pub direction: ChangeDirection,
    /// Absolute value without the `%` sign, e.g. "2.4"
    pub magnitude: String,
}

impl PercentChange {
    pub fn arrow(&self) -> char {
        self.direction.arrow()
    }
}
