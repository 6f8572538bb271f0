//! Error types for diagram rendering.

use planck_ir::IrError;
use thiserror::Error;

/// Errors that can occur while rendering a circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RenderError {
    /// The circuit is not drawable (out-of-range qubit, empty register).
    #[error(transparent)]
    Ir(#[from] IrError),

    /// The circuit needs more time columns than the style allows.
    #[error("Circuit needs {columns} columns, more than the limit of {max_columns}")]
    TooManyColumns {
        /// Columns the circuit needs, including the measurement column.
        columns: usize,
        /// Configured limit.
        max_columns: usize,
    },

    /// Writing the SVG document failed.
    #[error("SVG serialization failed: {0}")]
    Svg(String),
}

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;
