//! Demonstration circuit templates for Planck.
//!
//! The catalogue lists five algorithm families. [`generate`] looks a template
//! up by catalogue id or algorithm name and builds its circuit together with
//! a small metadata record describing what the circuit demonstrates.
//!
//! Circuit structure depends only on the register size. Rotation angles of
//! the variational templates (VQE, QAOA) are random; pass a seed in
//! [`TemplateParams`] to make them reproducible.
//!
//! ```rust
//! use planck_templates::{TemplateParams, generate};
//!
//! let bell = generate("bell", &TemplateParams::default()).unwrap();
//! assert_eq!(bell.circuit.gates().len(), 2);
//! assert_eq!(bell.metadata["type"], "entanglement");
//! ```

pub mod catalogue;
pub mod circuits;
pub mod error;
pub mod params;

use planck_ir::Circuit;
use serde::Serialize;
use serde_json::{Value, json};

pub use catalogue::{Algorithm, Difficulty, OutputFormat, TEMPLATES, Template, find_template};
pub use error::{TemplateError, TemplateResult};
pub use params::{MIN_QUBITS, TemplateParams};

/// A generated template circuit.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedCircuit {
    pub template: &'static Template,
    pub circuit: Circuit,
    pub metadata: Value,
}

/// Build the circuit for the template named by `key`.
pub fn generate(key: &str, params: &TemplateParams) -> TemplateResult<GeneratedCircuit> {
    let template = find_template(key)?;
    let n = params.qubit_count(template);
    let mut rng = params.rng();

    let (circuit, metadata) = match template.algorithm {
        Algorithm::Bell => (
            circuits::bell_circuit()?,
            json!({
                "type": "entanglement",
                "description": "Creates maximally entangled Bell state",
                "expected_states": ["00", "11"],
                "fidelity": 0.99,
            }),
        ),
        Algorithm::Grover => {
            let iterations = circuits::grover_iterations(n).min(circuits::grover::MAX_ITERATIONS);
            (
                circuits::grover_circuit(n)?,
                json!({
                    "type": "search",
                    "description": "Grover search for unsorted database",
                    "search_space": 2f64.powi(i32::try_from(n).unwrap_or(i32::MAX)),
                    "iterations": iterations,
                    "speedup": "O(√N)",
                }),
            )
        }
        Algorithm::Shor => {
            let control = n / 2;
            (
                circuits::shor_circuit(n)?,
                json!({
                    "type": "factorization",
                    "description": "Shor period finding for factoring",
                    "control_qubits": control,
                    "target_qubits": n - control,
                    "classical_postprocessing": true,
                }),
            )
        }
        Algorithm::Vqe => {
            let layers = circuits::vqe::LAYERS;
            (
                circuits::vqe_circuit(n, &mut rng)?,
                json!({
                    "type": "variational",
                    "description": "VQE for ground state energy estimation",
                    "layers": layers,
                    "parameters": layers * n as usize * 2,
                    "classical_optimizer": "COBYLA",
                }),
            )
        }
        Algorithm::Qaoa => (
            circuits::qaoa_circuit(n, &mut rng)?,
            json!({
                "type": "optimization",
                "description": "QAOA for combinatorial optimization",
                "layers": circuits::qaoa::LAYERS,
                "edges": circuits::ring_edges(n.max(MIN_QUBITS)).len(),
                "classical_optimizer": "Nelder-Mead",
            }),
        ),
    };

    tracing::debug!(
        template = template.id,
        qubits = circuit.num_qubits(),
        gates = circuit.gates().len(),
        "Generated template circuit"
    );

    Ok(GeneratedCircuit {
        template,
        circuit,
        metadata,
    })
}
