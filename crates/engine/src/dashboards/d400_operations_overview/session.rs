use contracts::dashboards::d400_operations_overview::OperationsOverview;
use contracts::enums::{Granularity, SelectionError, Window};
use std::sync::Arc;

use super::repository::SeriesRepository;
use super::selection::{SelectionState, Transition};
use super::service::resolve_view;

/// One viewer's dashboard: exclusively owned selection over shared data.
///
/// Every event handler applies its transition completely before the view
/// is re-derived, and returns that view.
#[derive(Debug, Clone)]
pub struct DashboardSession {
    repository: Arc<SeriesRepository>,
    state: SelectionState,
}

impl DashboardSession {
    pub fn new(repository: Arc<SeriesRepository>) -> Self {
        Self {
            repository,
            state: SelectionState::default(),
        }
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn repository(&self) -> &SeriesRepository {
        &self.repository
    }

    /// Current view without changing the selection
    pub fn view(&self) -> OperationsOverview {
        resolve_view(&self.state, &self.repository)
    }

    pub fn on_window_selected(&mut self, window: Window) -> OperationsOverview {
        self.state = self.state.select_window(window);
        tracing::debug!(window = window.days(), "window selected");
        self.view()
    }

    pub fn on_granularity_selected(&mut self, granularity: Granularity) -> OperationsOverview {
        if let Transition::Applied(next) = self.state.select_granularity(granularity) {
            self.state = next;
            tracing::debug!(granularity = granularity.code(), "granularity selected");
        }
        self.view()
    }

    /// Untyped window input, e.g. from a query string or CLI.
    ///
    /// Values outside 7/30/90 are a caller contract violation and fail
    /// without touching the selection.
    pub fn on_raw_window(&mut self, days: u32) -> Result<OperationsOverview, SelectionError> {
        let window = Window::try_from(days)?;
        Ok(self.on_window_selected(window))
    }

    pub fn on_raw_granularity(&mut self, code: &str) -> Result<OperationsOverview, SelectionError> {
        let granularity: Granularity = code.parse()?;
        Ok(self.on_granularity_selected(granularity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d400_operations_overview::generator::RandomSeriesGenerator;

    fn session() -> DashboardSession {
        let repository = SeriesRepository::build(&mut RandomSeriesGenerator::default());
        DashboardSession::new(Arc::new(repository))
    }

    #[test]
    fn test_event_flow() {
        let mut session = session();
        assert_eq!(session.view().series.len(), 7);

        let view = session.on_window_selected(Window::Days90);
        assert_eq!(view.series.len(), 90);
        assert_eq!(view.axis_label_interval, 4);

        let view = session.on_granularity_selected(Granularity::Monthly);
        assert_eq!(view.granularity, Granularity::Monthly);
        assert_eq!(view.series.len(), 3);

        let view = session.on_window_selected(Window::Days30);
        assert_eq!(view.granularity, Granularity::Daily);
        assert_eq!(view.series.len(), 30);
    }

    #[test]
    fn test_rejected_granularity_keeps_view() {
        let mut session = session();
        let before = session.view();
        let after = session.on_granularity_selected(Granularity::Monthly);
        assert_eq!(before, after);
        assert_eq!(session.state(), SelectionState::default());
    }

    #[test]
    fn test_daily_series_stable_across_events() {
        let mut session = session();
        let first = session.on_window_selected(Window::Days30).series;
        session.on_granularity_selected(Granularity::Weekly);
        let second = session.on_window_selected(Window::Days30).series;
        assert_eq!(first, second);
    }

    #[test]
    fn test_sessions_share_repository_not_state() {
        let repository = Arc::new(SeriesRepository::build(&mut RandomSeriesGenerator::default()));
        let mut a = DashboardSession::new(Arc::clone(&repository));
        let b = DashboardSession::new(Arc::clone(&repository));
        a.on_window_selected(Window::Days90);
        assert_eq!(b.state(), SelectionState::default());
        assert_eq!(
            a.repository().series(Granularity::Daily, Window::Days7),
            b.view().series.as_slice()
        );
    }

    #[test]
    fn test_raw_input_fails_fast() {
        let mut session = session();
        session.on_raw_window(30).unwrap();
        assert_eq!(session.on_raw_window(14), Err(SelectionError::InvalidWindow(14)));
        assert_eq!(
            session.on_raw_granularity("hourly"),
            Err(SelectionError::InvalidGranularity("hourly".to_string()))
        );
        assert_eq!(session.state().window(), Window::Days30);

        let view = session.on_raw_granularity("weekly").unwrap();
        assert_eq!(view.series.len(), 4);
    }
}
