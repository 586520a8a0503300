use std::fmt::Write;

use contracts::dashboards::d400_operations_overview::OperationsOverview;

use crate::shared::format::{
    format_currency_share, format_percent_change, format_revenue_total, format_thousands,
    share_bar_width,
};

/// Plain-text rendering of a resolved view, for terminals and logs.
pub fn build_report(view: &OperationsOverview) -> String {
    let mut output = String::new();

    let _ = writeln!(
        output,
        "# Operations Dashboard ({}, {})",
        view.window.display_name(),
        view.granularity.display_name()
    );
    let _ = writeln!(output);

    for (metric, stat) in &view.summary {
        let change = format_percent_change(stat.change_percent);
        let _ = writeln!(
            output,
            "{:<24} {:>8}   {} {}% than last week",
            metric.title(),
            stat.display_value,
            change.arrow(),
            change.magnitude
        );
    }
    let _ = writeln!(output);

    let _ = writeln!(output, "## Revenue Overview");
    let _ = writeln!(
        output,
        "Total revenue: {}",
        format_revenue_total(view.revenue_total)
    );
    let options: Vec<String> = view
        .granularity_options
        .iter()
        .map(|option| {
            if option.enabled {
                option.granularity.display_name().to_string()
            } else {
                format!("({})", option.granularity.display_name())
            }
        })
        .collect();
    let _ = writeln!(output, "Views: {}", options.join(" | "));

    if view.series.is_empty() {
        let _ = writeln!(output, "No data for this view.");
    } else {
        for point in &view.series {
            let _ = writeln!(output, "  {:<10} {:>10}", point.label, format_thousands(point.value));
        }
    }
    let _ = writeln!(output);

    let _ = writeln!(output, "## Sales by Category");
    for share in &view.category_shares {
        let _ = writeln!(
            output,
            "  {:<14} {:>3}% (bar {:>3}%) {:>10}",
            share.category,
            share.share_percent,
            share_bar_width(share.share_percent),
            format_currency_share(share)
        );
    }
    let _ = writeln!(output);

    let _ = writeln!(output, "## Order Status Distribution");
    for status in &view.status_shares {
        let _ = writeln!(
            output,
            "  {:<12} {:>3}% {}",
            status.status, status.share_percent, status.color_token
        );
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d400_operations_overview::{
        SelectionState, SeriesGenerator, SeriesRepository, resolve_view,
    };
    use contracts::enums::{Granularity, Window};

    struct Flat;

    impl SeriesGenerator for Flat {
        fn next_value(&mut self) -> u64 {
            21500
        }
    }

    #[test]
    fn test_report_for_default_view() {
        let repo = SeriesRepository::build(&mut Flat);
        let report = build_report(&resolve_view(&SelectionState::default(), &repo));

        assert!(report.starts_with("# Operations Dashboard (7 Days, Daily)"));
        assert!(report.contains("TOTAL ORDERS"));
        assert!(report.contains("↓ 2.4% than last week"));
        assert!(report.contains("Total revenue: 185,005.24"));
        assert!(report.contains("Views: Daily | (Weekly) | (Monthly)"));
        assert!(report.contains("Day 7"));
        assert!(report.contains("21,500"));
        assert!(report.contains("$158,000"));
        assert!(report.contains("(bar  50%)"));
        assert!(report.contains("Cancelled"));
    }

    #[test]
    fn test_report_for_ninety_days() {
        let repo = SeriesRepository::build(&mut Flat);
        let state = SelectionState::default().select_window(Window::Days90);
        let report = build_report(&resolve_view(&state, &repo));
        assert!(report.contains("Views: Daily | Weekly | Monthly"));
        assert!(report.contains("Day 90"));
        assert!(report.contains("↓ 1% than last week"));
    }

    #[test]
    fn test_report_for_weekly_thirty_days() {
        let repo = SeriesRepository::build(&mut Flat);
        let state = SelectionState::default()
            .select_window(Window::Days30)
            .select_granularity(Granularity::Weekly)
            .state();
        let report = build_report(&resolve_view(&state, &repo));
        assert!(report.starts_with("# Operations Dashboard (30 Days, Weekly)"));
        assert!(report.contains("Views: Daily | Weekly | (Monthly)"));
        assert!(report.contains("Week 4"));
        assert!(!report.contains("Day 1 "));
        assert!(report.contains("↑ 0% than last week"));
    }
}
