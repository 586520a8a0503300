use contracts::enums::{Granularity, Window};

/// Current (window, granularity) selection.
///
/// Always holds a combination the window supports. Transitions consume the
/// state and return the next one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    window: Window,
    granularity: Granularity,
}

/// Outcome of a granularity selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Applied(SelectionState),
    /// Combination not offered; carries the unchanged state
    Rejected(SelectionState),
}

impl Transition {
    pub fn state(self) -> SelectionState {
        match self {
            Transition::Applied(state) | Transition::Rejected(state) => state,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied(_))
    }
}

impl SelectionState {
    pub fn window(&self) -> Window {
        self.window
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Switch window. Granularity always falls back to daily, even when the
    /// new window would also support the current one.
    pub fn select_window(self, window: Window) -> SelectionState {
        SelectionState {
            window,
            granularity: Granularity::Daily,
        }
    }

    /// Switch granularity if the current window offers it, otherwise no-op.
    pub fn select_granularity(self, granularity: Granularity) -> Transition {
        if self.window.supports(granularity) {
            Transition::Applied(SelectionState {
                granularity,
                ..self
            })
        } else {
            tracing::debug!(
                window = self.window.days(),
                granularity = granularity.code(),
                "granularity not offered for window, selection unchanged"
            );
            Transition::Rejected(self)
        }
    }
}
