use canary_scanners::config::ServerSettings;
use canary_scanners::Analyzer;
use std::sync::Arc;

/// Shared, read-only context handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<dyn Analyzer>,
    pub settings: ServerSettings,
}

impl AppState {
    pub fn new(analyzer: Arc<dyn Analyzer>, settings: ServerSettings) -> Self {
        Self { analyzer, settings }
    }
}
