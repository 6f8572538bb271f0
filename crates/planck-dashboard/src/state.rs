//! Application state for the dashboard server.

use std::sync::Arc;

use crate::advisor::{BackendAdvisor, HeuristicAdvisor};
use crate::config::DashboardConfig;
use crate::service::CircuitService;

/// Shared application state.
pub struct AppState {
    /// Dashboard configuration.
    pub config: DashboardConfig,
    /// Circuit operations, bound to the configured limits.
    pub service: CircuitService,
    /// Backend recommender.
    pub advisor: Arc<dyn BackendAdvisor>,
}

impl AppState {
    /// Create a new application state with default configuration.
    pub fn new() -> Self {
        Self::with_config(DashboardConfig::default())
    }

    /// Create application state with custom configuration.
    pub fn with_config(config: DashboardConfig) -> Self {
        Self {
            service: CircuitService::new(config.limits),
            config,
            advisor: Arc::new(HeuristicAdvisor),
        }
    }

    /// Replace the backend advisor.
    pub fn with_advisor(mut self, advisor: Arc<dyn BackendAdvisor>) -> Self {
        self.advisor = advisor;
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
