use contracts::dashboards::d400_operations_overview::{
    CategoryShare, Series, SeriesPoint, StatusShare,
};
use contracts::enums::{Granularity, Window};
use contracts::shared::indicators::{MetricName, SummaryStat};
use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashMap};

use super::generator::SeriesGenerator;

// ---------------------------------------------------------------------------
// Fixed tables
// ---------------------------------------------------------------------------

const WEEKLY_30: &[(&str, u64)] = &[
    ("Week 1", 15000),
    ("Week 2", 18000),
    ("Week 3", 22000),
    ("Week 4", 19000),
];

const WEEKLY_90: &[(&str, u64)] = &[
    ("Week 1", 15000),
    ("Week 2", 18000),
    ("Week 3", 22000),
    ("Week 4", 19000),
    ("Week 5", 21000),
    ("Week 6", 20000),
    ("Week 7", 23000),
    ("Week 8", 24000),
    ("Week 9", 25000),
    ("Week 10", 26000),
    ("Week 11", 27000),
    ("Week 12", 28000),
];

const MONTHLY_90: &[(&str, u64)] = &[("Month 1", 50000), ("Month 2", 60000), ("Month 3", 70000)];

/// (category, share %, revenue)
const CATEGORIES_7: &[(&str, u32, u64)] = &[
    ("Electronics", 35, 158000),
    ("Fashion", 28, 126000),
    ("Home & Living", 22, 99000),
    ("Beauty", 15, 67000),
];

const CATEGORIES_30: &[(&str, u32, u64)] = &[
    ("Electronics", 40, 200000),
    ("Fashion", 30, 150000),
    ("Home & Living", 20, 80000),
    ("Beauty", 10, 50000),
];

const CATEGORIES_90: &[(&str, u32, u64)] = &[
    ("Electronics", 30, 180000),
    ("Fashion", 30, 150000),
    ("Home & Living", 25, 120000),
    ("Beauty", 15, 70000),
];

/// Tile values in `MetricName::all()` order: (display value, change %)
const SUMMARY_7: [(&str, f64); 4] = [("1,284", 12.5), ("892", 8.2), ("1,567", -2.4), ("95.8%", 1.1)];
const SUMMARY_30: [(&str, f64); 4] = [("3,000", 15.0), ("1,200", 5.0), ("1,800", 0.0), ("97.5%", 2.0)];
const SUMMARY_90: [(&str, f64); 4] = [("8,500", 10.0), ("1,500", 4.0), ("2,200", -1.0), ("96.0%", 3.5)];

static STATUS_SHARES: Lazy<Vec<StatusShare>> = Lazy::new(|| {
    [
        ("Completed", 65, "#4CAF50"),
        ("Processing", 25, "#FFC107"),
        ("Cancelled", 10, "#F44336"),
    ]
    .into_iter()
    .map(|(status, share_percent, color_token)| StatusShare {
        status: status.to_string(),
        share_percent,
        color_token: color_token.to_string(),
    })
    .collect()
});

static EMPTY_SUMMARY: BTreeMap<MetricName, SummaryStat> = BTreeMap::new();

fn fixed_series(granularity: Granularity, window: Window) -> &'static [(&'static str, u64)] {
    match (granularity, window) {
        (Granularity::Weekly, Window::Days30) => WEEKLY_30,
        (Granularity::Weekly, Window::Days90) => WEEKLY_90,
        (Granularity::Monthly, Window::Days90) => MONTHLY_90,
        _ => &[],
    }
}

fn fixed_categories(window: Window) -> &'static [(&'static str, u32, u64)] {
    match window {
        Window::Days7 => CATEGORIES_7,
        Window::Days30 => CATEGORIES_30,
        Window::Days90 => CATEGORIES_90,
    }
}

fn fixed_summary(window: Window) -> [(&'static str, f64); 4] {
    match window {
        Window::Days7 => SUMMARY_7,
        Window::Days30 => SUMMARY_30,
        Window::Days90 => SUMMARY_90,
    }
}

fn fixed_revenue_total(window: Window) -> f64 {
    match window {
        Window::Days7 => 185005.24,
        Window::Days30 => 229034.21,
        Window::Days90 => 403192.13,
    }
}

// ---------------------------------------------------------------------------
// Repository
// ---------------------------------------------------------------------------

/// Immutable dashboard data, built once per process.
///
/// Every (granularity, window) pair has an entry; pairs the window does not
/// support hold an empty series.
#[derive(Debug, Clone)]
pub struct SeriesRepository {
    series: HashMap<(Granularity, Window), Series>,
    category_shares: HashMap<Window, Vec<CategoryShare>>,
    summaries: HashMap<Window, BTreeMap<MetricName, SummaryStat>>,
    revenue_totals: HashMap<Window, f64>,
}

impl SeriesRepository {
    /// Populate all tables. The generator is called once per window for the
    /// daily series and never again.
    pub fn build(generator: &mut impl SeriesGenerator) -> Self {
        let mut series = HashMap::new();
        let mut category_shares = HashMap::new();
        let mut summaries = HashMap::new();
        let mut revenue_totals = HashMap::new();

        for window in Window::all() {
            for granularity in Granularity::all() {
                let points = match granularity {
                    Granularity::Daily => generator.generate(window.days()),
                    _ => fixed_series(granularity, window)
                        .iter()
                        .map(|(label, value)| SeriesPoint::new(*label, *value))
                        .collect(),
                };
                series.insert((granularity, window), points);
            }

            category_shares.insert(
                window,
                fixed_categories(window)
                    .iter()
                    .map(|(category, share_percent, revenue)| CategoryShare {
                        category: category.to_string(),
                        share_percent: *share_percent,
                        revenue: *revenue,
                    })
                    .collect(),
            );

            summaries.insert(
                window,
                MetricName::all()
                    .into_iter()
                    .zip(fixed_summary(window))
                    .map(|(metric, (value, change))| (metric, SummaryStat::new(value, change)))
                    .collect(),
            );

            revenue_totals.insert(window, fixed_revenue_total(window));
        }

        tracing::debug!(entries = series.len(), "series repository built");

        Self {
            series,
            category_shares,
            summaries,
            revenue_totals,
        }
    }

    /// Revenue series for the pair; empty when not offered
    pub fn series(&self, granularity: Granularity, window: Window) -> &[SeriesPoint] {
        self.series
            .get(&(granularity, window))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_offered(&self, granularity: Granularity, window: Window) -> bool {
        !self.series(granularity, window).is_empty()
    }

    pub fn category_shares(&self, window: Window) -> &[CategoryShare] {
        self.category_shares
            .get(&window)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Global order-status breakdown, identical for every selection
    pub fn status_shares(&self) -> &[StatusShare] {
        &STATUS_SHARES
    }

    pub fn summary(&self, window: Window) -> &BTreeMap<MetricName, SummaryStat> {
        self.summaries.get(&window).unwrap_or(&EMPTY_SUMMARY)
    }

    pub fn revenue_total(&self, window: Window) -> f64 {
        self.revenue_totals.get(&window).copied().unwrap_or_default()
    }
}
