//! Execution backend recommendations.
//!
//! The dashboard does not run circuits. It only suggests where a circuit
//! should run, through the [`BackendAdvisor`] trait. [`HeuristicAdvisor`] is
//! the built-in rule table; deployments with a smarter recommender plug it
//! in through [`AppState::with_advisor`](crate::AppState::with_advisor).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Execution backend class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    QuantumInspiredGpu,
    QuantumQpu,
    HpcGpu,
}

impl Backend {
    /// `(base fidelity, per-layer error rate)`.
    fn noise(self) -> (f64, f64) {
        match self {
            Backend::QuantumInspiredGpu => (0.995, 0.001),
            Backend::HpcGpu => (0.998, 0.0005),
            Backend::QuantumQpu => (0.985, 0.002),
        }
    }

    /// Expected fidelity in percent after `depth` layers.
    pub fn estimated_fidelity(self, depth: usize) -> f64 {
        let (base, error) = self.noise();
        let depth = i32::try_from(depth).unwrap_or(i32::MAX);
        base * (1.0 - error).powi(depth) * 100.0
    }
}

/// What the advisor gets to see of a circuit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CircuitFeatures {
    pub qubits: u32,
    pub depth: usize,
    pub gate_count: usize,
    /// Latency the caller can tolerate, in milliseconds.
    #[serde(default)]
    pub target_latency_ms: Option<u32>,
    /// Backend the caller would pick.
    #[serde(default)]
    pub preferred_backend: Option<Backend>,
}

/// A backend suggestion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub backend: Backend,
    pub shots: u32,
    /// How strongly the matching rule favours the backend, in `[0, 1]`.
    pub confidence: f64,
    /// Percent.
    pub estimated_fidelity: f64,
    /// Which rule fired.
    pub rule: &'static str,
}

/// Advisor errors.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AdvisorError {
    #[error("Advisor unavailable: {0}")]
    Unavailable(String),
}

/// Recommends an execution backend for a circuit.
#[async_trait]
pub trait BackendAdvisor: Send + Sync {
    /// Name shown in logs.
    fn name(&self) -> &str;

    /// Pick a backend for a circuit with the given features.
    async fn recommend(&self, features: &CircuitFeatures) -> Result<Recommendation, AdvisorError>;
}

/// Default shot count.
pub const DEFAULT_SHOTS: u32 = 1024;

/// Rule-table advisor.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicAdvisor;

impl HeuristicAdvisor {
    /// Backend chosen from circuit size alone.
    pub fn select(features: &CircuitFeatures) -> (Backend, &'static str, f64) {
        let CircuitFeatures {
            qubits,
            depth,
            gate_count,
            ..
        } = *features;

        if qubits < 12 && depth < 50 {
            (Backend::QuantumInspiredGpu, "small_shallow", 0.9)
        } else if (12..20).contains(&qubits) && gate_count < 100 {
            (Backend::QuantumQpu, "medium_sparse", 0.8)
        } else if qubits >= 20 || depth >= 100 || gate_count >= 100 {
            (Backend::HpcGpu, "large_or_deep", 0.85)
        } else {
            (Backend::QuantumInspiredGpu, "fallback", 0.6)
        }
    }

    /// Backend chosen with the caller's latency target taken into account.
    pub fn select_with_latency(features: &CircuitFeatures) -> (Backend, &'static str, f64) {
        let Some(latency) = features.target_latency_ms else {
            return Self::select(features);
        };

        if features.preferred_backend == Some(Backend::QuantumQpu) && latency < 500 {
            return (Backend::HpcGpu, "qpu_too_slow", 0.7);
        }
        if latency < 100 && features.qubits < 12 {
            return (Backend::QuantumInspiredGpu, "low_latency", 0.75);
        }
        if (100..500).contains(&latency) {
            return (Backend::HpcGpu, "moderate_latency", 0.75);
        }
        if latency >= 500 && features.qubits >= 12 {
            return (Backend::QuantumQpu, "relaxed_latency", 0.75);
        }
        Self::select(features)
    }
}

#[async_trait]
impl BackendAdvisor for HeuristicAdvisor {
    fn name(&self) -> &str {
        "heuristic"
    }

    async fn recommend(&self, features: &CircuitFeatures) -> Result<Recommendation, AdvisorError> {
        let (backend, rule, confidence) = Self::select_with_latency(features);
        let shots = match backend {
            Backend::QuantumQpu => DEFAULT_SHOTS * 2,
            _ => DEFAULT_SHOTS,
        };

        Ok(Recommendation {
            backend,
            shots,
            confidence,
            estimated_fidelity: backend.estimated_fidelity(features.depth),
            rule,
        })
    }
}
