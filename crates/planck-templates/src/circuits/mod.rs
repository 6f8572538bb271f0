//! Circuit generators, one per algorithm family.

pub mod bell;
pub mod grover;
pub mod qaoa;
pub mod shor;
pub mod vqe;

pub use bell::bell_circuit;
pub use grover::{grover_circuit, grover_iterations};
pub use qaoa::{qaoa_circuit, ring_edges};
pub use shor::shor_circuit;
pub use vqe::vqe_circuit;
