//! The circuit operations served by the dashboard.
//!
//! [`CircuitService`] wires the template library, the text codec, the layout
//! engine and the renderer together. Handlers in [`crate::api`] are thin
//! adapters over it, so everything here is synchronous and HTTP-free.

use planck_ir::IrError;
use planck_qasm::{CodecError, DecodeOptions, Decoded};
use planck_render::{DiagramStyle, RenderError};
use planck_templates::{TemplateError, TemplateParams};
use thiserror::Error;

use crate::advisor::CircuitFeatures;
use crate::config::Limits;
use crate::dto::{
    AnalyzeResponse, CircuitStats, GateView, GenerateResponse, LayerView, VisualizeResponse,
};

/// Errors from the circuit operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ServiceError {
    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Circuit(#[from] IrError),

    #[error("Circuit text is {size} bytes, more than the limit of {limit}")]
    SourceTooLarge { size: usize, limit: usize },

    #[error("{requested} qubits requested, more than the limit of {limit}")]
    TooManyQubits { requested: u32, limit: u32 },
}

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Generate, visualize and analyze circuits within configured limits.
#[derive(Debug, Clone, Default)]
pub struct CircuitService {
    limits: Limits,
}

impl CircuitService {
    pub fn new(limits: Limits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Build a template circuit and its text form.
    pub fn generate(
        &self,
        algorithm: &str,
        params: &TemplateParams,
    ) -> ServiceResult<GenerateResponse> {
        let template = planck_templates::find_template(algorithm)?;
        self.check_qubits(params.qubit_count(template))?;

        let generated = planck_templates::generate(template.id, params)?;
        let circuit = &generated.circuit;

        let layout = circuit.layout();
        let response = GenerateResponse {
            algorithm: generated.template.algorithm.as_str().to_string(),
            template_id: generated.template.id.to_string(),
            circuit_text: planck_qasm::encode(circuit),
            qubit_count: circuit.num_qubits(),
            gates: GateView::list(circuit, &layout),
            depth: layout.depth(),
            metadata: generated.metadata,
        };

        tracing::info!(
            template = %response.template_id,
            qubits = response.qubit_count,
            gates = response.gates.len(),
            "Generated circuit"
        );
        Ok(response)
    }

    /// Decode circuit text and draw it.
    ///
    /// `style` overrides the default diagram style; its column guard is
    /// clamped to the configured limit.
    pub fn visualize(
        &self,
        circuit_text: &str,
        style: Option<DiagramStyle>,
    ) -> ServiceResult<VisualizeResponse> {
        let decoded = self.decode(circuit_text)?;

        let mut style = style.unwrap_or_default();
        style.max_columns = style.max_columns.min(self.limits.max_columns);

        let diagram = planck_render::render(&decoded.circuit, &style)?;
        let gates = GateView::list(&decoded.circuit, &decoded.layout);

        let response = VisualizeResponse {
            image: diagram.to_svg()?,
            format: "svg",
            stats: CircuitStats {
                gates: decoded.circuit.gates().len(),
                qubits: decoded.qubit_count(),
                depth: decoded.depth(),
            },
            width: diagram.width,
            height: diagram.height,
            layers: LayerView::group(&gates, &decoded.layout),
        };

        tracing::info!(
            qubits = response.stats.qubits,
            depth = response.stats.depth,
            width = response.width,
            "Rendered circuit"
        );
        Ok(response)
    }

    /// Read-only statistics for circuit text.
    pub fn analyze(&self, circuit_text: &str) -> ServiceResult<AnalyzeResponse> {
        let decoded = self.decode(circuit_text)?;

        Ok(AnalyzeResponse {
            qubit_count: decoded.qubit_count(),
            total_gates: decoded.circuit.gates().len(),
            gate_type_counts: decoded.circuit.gate_counts(),
            estimated_depth: decoded.depth(),
            measurement_count: decoded.measurement_count(),
            warnings: decoded.warnings,
        })
    }

    /// Features the backend advisor works from.
    pub fn features(&self, circuit_text: &str) -> ServiceResult<CircuitFeatures> {
        let decoded = self.decode(circuit_text)?;
        Ok(CircuitFeatures {
            qubits: decoded.qubit_count(),
            depth: decoded.depth(),
            gate_count: decoded.circuit.gates().len(),
            ..Default::default()
        })
    }

    fn decode(&self, circuit_text: &str) -> ServiceResult<Decoded> {
        if circuit_text.len() > self.limits.max_source_bytes {
            tracing::warn!(
                size = circuit_text.len(),
                limit = self.limits.max_source_bytes,
                "Rejected oversized circuit text"
            );
            return Err(ServiceError::SourceTooLarge {
                size: circuit_text.len(),
                limit: self.limits.max_source_bytes,
            });
        }

        let options = DecodeOptions::with_max_qubits(self.limits.max_qubits);
        let decoded = planck_qasm::decode_with(circuit_text, &options).inspect_err(|e| {
            tracing::warn!(error = %e, "Rejected circuit text");
        })?;

        for warning in &decoded.warnings {
            tracing::debug!(line = warning.line, reason = %warning.reason, "Skipped statement");
        }
        Ok(decoded)
    }

    fn check_qubits(&self, requested: u32) -> ServiceResult<()> {
        if requested > self.limits.max_qubits {
            return Err(ServiceError::TooManyQubits {
                requested,
                limit: self.limits.max_qubits,
            });
        }
        Ok(())
    }
}
