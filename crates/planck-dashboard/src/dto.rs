//! Data Transfer Objects for the dashboard API.
//!
//! These types bridge Planck circuits, decode results and diagrams to
//! JSON-serializable API requests and responses.

use std::collections::BTreeMap;

use planck_ir::{Circuit, Layout};
use planck_qasm::DecodeWarning;
use planck_render::DiagramStyle;
use planck_templates::TemplateParams;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::advisor::Backend;

// ============================================================================
// Requests
// ============================================================================

/// Request to generate a template circuit.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    /// Catalogue id (`bell-state`) or algorithm name (`bell`).
    pub algorithm: String,
    #[serde(flatten)]
    pub params: TemplateParams,
}

/// Request carrying circuit text, used by visualize.
#[derive(Debug, Clone, Deserialize)]
pub struct VisualizeRequest {
    /// Circuit text.
    #[serde(alias = "qasm")]
    pub circuit_text: String,
    /// Style overrides; omitted fields keep their defaults.
    #[serde(default)]
    pub style: Option<DiagramStyle>,
}

/// Request to analyze circuit text.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(alias = "qasm")]
    pub circuit_text: String,
}

/// Request for a backend recommendation.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendRequest {
    #[serde(alias = "qasm")]
    pub circuit_text: String,
    #[serde(default)]
    pub target_latency_ms: Option<u32>,
    #[serde(default)]
    pub preferred_backend: Option<Backend>,
}

// ============================================================================
// Circuit views
// ============================================================================

/// A single gate for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GateView {
    /// Gate name (e.g., "h", "cx", "rz").
    pub name: String,
    /// Display label (e.g., "H", "CX").
    pub label: String,
    pub targets: Vec<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub control: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<f64>,
    /// Time column assigned by the layout engine.
    pub time: usize,
}

impl GateView {
    /// One view per gate, in program order.
    pub fn list(circuit: &Circuit, layout: &Layout) -> Vec<GateView> {
        circuit
            .gates()
            .iter()
            .zip(layout.times())
            .map(|(gate, &time)| GateView {
                name: gate.name().to_string(),
                label: gate.kind.label(),
                targets: gate.targets.iter().map(|q| q.0).collect(),
                control: gate.control.map(|q| q.0),
                params: gate.kind.params(),
                time,
            })
            .collect()
    }
}

/// Gates sharing a time column.
#[derive(Debug, Clone, Serialize)]
pub struct LayerView {
    pub column: usize,
    pub gates: Vec<GateView>,
}

impl LayerView {
    /// Group gate views by column.
    pub fn group(gates: &[GateView], layout: &Layout) -> Vec<LayerView> {
        layout
            .layers()
            .into_iter()
            .enumerate()
            .map(|(column, indices)| LayerView {
                column,
                gates: indices
                    .into_iter()
                    .filter_map(|i| gates.get(i).cloned())
                    .collect(),
            })
            .collect()
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Response from the generate operation.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    /// Algorithm family (e.g., "grover").
    pub algorithm: String,
    /// Catalogue id (e.g., "grovers").
    pub template_id: String,
    pub circuit_text: String,
    pub qubit_count: u32,
    pub gates: Vec<GateView>,
    pub depth: usize,
    /// What the circuit demonstrates.
    pub metadata: Value,
}

/// Summary numbers shown next to a diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CircuitStats {
    pub gates: usize,
    pub qubits: u32,
    pub depth: usize,
}

/// Response from the visualize operation.
#[derive(Debug, Clone, Serialize)]
pub struct VisualizeResponse {
    /// SVG document.
    pub image: String,
    /// Always "svg".
    pub format: &'static str,
    pub stats: CircuitStats,
    pub width: u32,
    pub height: u32,
    /// Gates grouped by time column.
    pub layers: Vec<LayerView>,
}

/// Response from the analyze operation.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeResponse {
    pub qubit_count: u32,
    pub total_gates: usize,
    pub gate_type_counts: BTreeMap<String, usize>,
    pub estimated_depth: usize,
    pub measurement_count: usize,
    /// Statements skipped while decoding.
    pub warnings: Vec<DecodeWarning>,
}

// ============================================================================
// Health check response
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status (always "ok" if responding).
    pub status: String,
    /// Dashboard version.
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
