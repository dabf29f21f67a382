pub mod api;
pub mod config;
pub mod error;
pub mod wiki;

use std::sync::Arc;
use wiki::SummaryProvider;

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn SummaryProvider>,
}
