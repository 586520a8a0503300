pub mod generator;
pub mod report;
pub mod repository;
pub mod selection;
pub mod service;
pub mod session;

pub use generator::{RandomSeriesGenerator, SeriesGenerator};
pub use repository::SeriesRepository;
pub use selection::{SelectionState, Transition};
pub use service::resolve_view;
pub use session::DashboardSession;
