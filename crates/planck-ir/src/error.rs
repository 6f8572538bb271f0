//! Error types for the IR crate.

use crate::qubit::QubitId;
use thiserror::Error;

/// Errors that can occur in IR operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum IrError {
    /// A gate or measurement references a qubit outside `[0, num_qubits)`.
    #[error(
        "Qubit index {} out of range for a {num_qubits}-qubit circuit{}",
        qubit.0,
        format_gate_context(gate_name.as_deref())
    )]
    QubitIndexOutOfRange {
        /// The offending qubit.
        qubit: QubitId,
        /// Number of qubits declared by the circuit.
        num_qubits: u32,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// The same qubit appears twice in one operation.
    #[error("Duplicate qubit {qubit} in operation{}", format_gate_context(gate_name.as_deref()))]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: QubitId,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// A gate was built without any target qubit.
    #[error("Gate '{0}' has no target qubit")]
    MissingTarget(String),

    /// A gate parameter is NaN or infinite.
    #[error("Gate '{gate_name}' has a non-finite parameter")]
    NonFiniteParameter {
        /// Name of the gate.
        gate_name: String,
    },

    /// A circuit must declare at least one qubit.
    #[error("Circuit must declare at least one qubit")]
    EmptyRegister,
}

fn format_gate_context(gate_name: Option<&str>) -> String {
    match gate_name {
        Some(name) => format!(" (gate: {name})"),
        None => String::new(),
    }
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
