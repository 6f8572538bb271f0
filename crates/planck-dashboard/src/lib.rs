//! Planck Dashboard - HTTP service for circuit generation, visualization
//! and analysis.
//!
//! The service exposes the Planck circuit core over a small JSON API:
//!
//! - Generate demonstration circuits from the template catalogue
//! - Render circuit text as an SVG diagram
//! - Report gate statistics for circuit text
//! - Recommend an execution backend through a pluggable advisor
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use planck_dashboard::{AppState, DashboardConfig, create_router};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = DashboardConfig::default();
//!     let addr = config.bind_address()?;
//!     let state = Arc::new(AppState::with_config(config));
//!
//!     let app = create_router(state);
//!     let listener = tokio::net::TcpListener::bind(addr).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod advisor;
pub mod api;
pub mod config;
pub mod dto;
pub mod error;
pub mod server;
pub mod service;
pub mod state;

pub use advisor::{
    AdvisorError, Backend, BackendAdvisor, CircuitFeatures, HeuristicAdvisor, Recommendation,
};
pub use config::{ConfigError, DashboardConfig, Limits};
pub use dto::{
    AnalyzeResponse, CircuitStats, GateView, GenerateResponse, HealthResponse, LayerView,
    VisualizeResponse,
};
pub use error::ApiError;
pub use server::create_router;
pub use service::{CircuitService, ServiceError, ServiceResult};
pub use state::AppState;
