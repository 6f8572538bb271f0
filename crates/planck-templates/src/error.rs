//! Error types for template generation.

use planck_ir::IrError;
use thiserror::Error;

/// Errors that can occur while generating a template circuit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TemplateError {
    /// No template matches the requested id or algorithm name.
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// A generator produced an invalid gate.
    #[error("Circuit error: {0}")]
    Circuit(#[from] IrError),
}

/// Result type for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;
