//! Circuit Text Codec for Planck
//!
//! Encodes a [`planck_ir::Circuit`] as OpenQASM 2.0 text and decodes such
//! text back into a circuit. Decoding is tolerant: statements it cannot use
//! are skipped and reported as [`DecodeWarning`]s instead of failing the
//! whole input.
//!
//! # Accepted Statements
//!
//! | Statement | Example |
//! |-----------|---------|
//! | Version header | `OPENQASM 2.0;` |
//! | Include | `include "qelib1.inc";` |
//! | Qubit register | `qreg q[5];`, `qubit[5] q;` |
//! | Classical register | `creg c[5];`, `bit[5] c;` |
//! | Gates | `h q[0];`, `cx q[0],q[1];`, `rz(-pi/2) q[0];` |
//! | Measurement | `measure q[0] -> c[0];`, `measure q -> c;`, `c[0] = measure q[0];` |
//! | Comments | `// comment` |
//!
//! # Example: Round-Trip
//!
//! ```rust
//! use planck_ir::{Circuit, QubitId};
//! use planck_qasm::{decode, encode};
//!
//! let mut circuit = Circuit::new("bell", 2);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//!
//! let text = encode(&circuit);
//! assert!(text.contains("cx q[0],q[1];"));
//!
//! let decoded = decode(&text).unwrap();
//! assert_eq!(decoded.qubit_count(), 2);
//! assert_eq!(decoded.depth(), 2);
//! ```

mod emitter;
mod error;
mod lexer;
mod parser;
mod statement;

pub use emitter::{EncodeOptions, encode, encode_with};
pub use error::{CodecError, CodecResult};
pub use parser::{DecodeOptions, DecodeWarning, Decoded, decode, decode_with};
pub use statement::MAX_REGISTER_SIZE;

// Re-export statement types for callers that classify text themselves
pub mod syntax {
    pub use crate::statement::{Operand, Statement, classify};
}
