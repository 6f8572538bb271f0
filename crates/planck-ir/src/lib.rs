//! Planck Circuit Intermediate Representation
//!
//! This crate provides the gate model shared by the rest of the Planck
//! workspace: gates, circuits and the layout engine that assigns gates to
//! time columns.
//!
//! # Core Components
//!
//! - **Qubits**: [`QubitId`] addresses a wire of the quantum register
//! - **Gates**: [`GateKind`] for the supported mnemonics, [`Gate`] for a gate
//!   bound to its control and target qubits
//! - **Circuit**: [`Circuit`] holds the register sizes, the gate list in
//!   program order and the terminal [`Measurement`] block
//! - **Layout**: [`Layout`] assigns each gate a column and derives depth
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use planck_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::new("bell", 2);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//! circuit.measure_all().unwrap();
//!
//! assert_eq!(circuit.gates().len(), 2);
//! assert_eq!(circuit.depth(), 2);
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `h` | 1 | Hadamard gate |
//! | `x`, `y`, `z` | 1 | Pauli gates |
//! | `s`, `t` | 1 | Phase gates |
//! | `rx`, `ry`, `rz` | 1 | Rotation gates |
//! | `cx` / `cnot` | 2 | Controlled-NOT |
//! | `cz` | 2 | Controlled-Z |
//! | `cp` | 2 | Controlled phase |
//! | `swap` | 2 | SWAP gate |

pub mod circuit;
pub mod error;
pub mod gate;
pub mod layout;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::{Gate, GateKind, Measurement};
pub use layout::Layout;
pub use qubit::QubitId;
