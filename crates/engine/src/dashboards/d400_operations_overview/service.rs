use contracts::dashboards::d400_operations_overview::{GranularityOption, OperationsOverview};
use contracts::enums::{Granularity, Window};

use super::repository::SeriesRepository;
use super::selection::SelectionState;

/// Tick interval for long daily series
const DAILY_AXIS_INTERVAL: u32 = 4;

/// Resolve the selection to everything the dashboard renders.
///
/// Pure: reads the repository, never mutates it. An empty series is a valid
/// result and means "no data" for the chart.
pub fn resolve_view(state: &SelectionState, repository: &SeriesRepository) -> OperationsOverview {
    let window = state.window();
    let granularity = state.granularity();
    let series = repository.series(granularity, window).to_vec();
    let axis_label_interval = axis_label_interval(granularity, series.len());

    OperationsOverview {
        window,
        granularity,
        series,
        category_shares: repository.category_shares(window).to_vec(),
        status_shares: repository.status_shares().to_vec(),
        summary: repository.summary(window).clone(),
        revenue_total: repository.revenue_total(window),
        granularity_options: granularity_options(window, repository),
        axis_label_interval,
    }
}

/// Selector entries; options without data for `window` are disabled
pub fn granularity_options(window: Window, repository: &SeriesRepository) -> Vec<GranularityOption> {
    Granularity::all()
        .into_iter()
        .map(|granularity| GranularityOption {
            granularity,
            enabled: repository.is_offered(granularity, window),
        })
        .collect()
}

/// Weekly/monthly and week-long series label every point.
fn axis_label_interval(granularity: Granularity, points: usize) -> u32 {
    match granularity {
        Granularity::Weekly | Granularity::Monthly => 0,
        Granularity::Daily if points == 7 => 0,
        Granularity::Daily => DAILY_AXIS_INTERVAL,
    }
}
