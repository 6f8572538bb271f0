//! Error types for the circuit text codec.

use thiserror::Error;

/// Errors that can occur while decoding circuit text.
///
/// Decoding is tolerant: individual statements that cannot be used are
/// skipped and reported as warnings. Only text that cannot describe a
/// circuit at all is an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CodecError {
    /// The text declares no qubit register.
    #[error("Malformed circuit text: {0}")]
    MalformedCircuitText(String),

    /// The qubit register is larger than the caller allows.
    #[error("Qubit register of {requested} qubits exceeds the limit of {limit}")]
    TooManyQubits { requested: u32, limit: u32 },
}

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;
