//! Grover search circuit.
//!
//! The oracle and diffusion steps are the simplified CNOT-ladder forms used
//! for demonstration: they have the shape of a Grover iteration without the
//! multi-controlled phase gate a faithful oracle needs.

use std::f64::consts::PI;

use planck_ir::{Circuit, IrResult, QubitId};

/// Iterations applied at most, whatever the register size.
pub const MAX_ITERATIONS: u64 = 3;

/// Textbook iteration count `floor(pi/4 * sqrt(2^n))`.
pub fn grover_iterations(num_qubits: u32) -> u64 {
    let exponent = i32::try_from(num_qubits).unwrap_or(i32::MAX);
    let optimal = PI / 4.0 * 2f64.powi(exponent).sqrt();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let iterations = optimal.floor() as u64;
    iterations
}

/// Superposition, then `min(grover_iterations(n), 3)` oracle and diffusion
/// rounds, then a full read-out. Registers smaller than two qubits are
/// widened to two.
pub fn grover_circuit(num_qubits: u32) -> IrResult<Circuit> {
    let n = num_qubits.max(2);
    let last = QubitId(n - 1);
    let mut circuit = Circuit::new("grover", n);

    for i in 0..n {
        circuit.h(QubitId(i))?;
    }

    for _ in 0..grover_iterations(n).min(MAX_ITERATIONS) {
        // Oracle: mark the target state
        circuit.x(last)?;
        for i in 0..n - 1 {
            circuit.cx(QubitId(i), last)?;
        }
        circuit.x(last)?;

        // Diffusion
        for i in 0..n {
            circuit.h(QubitId(i))?.x(QubitId(i))?;
        }
        for i in 0..n - 1 {
            circuit.cx(QubitId(i), last)?;
        }
        for i in 0..n {
            circuit.x(QubitId(i))?.h(QubitId(i))?;
        }
    }

    circuit.measure_all()?;
    Ok(circuit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_count() {
        assert_eq!(grover_iterations(2), 1);
        assert_eq!(grover_iterations(4), 3);
        assert_eq!(grover_iterations(8), 12);
    }

    #[test]
    fn test_gate_count() {
        // 8 qubits, 3 rounds of: x, 7 cx, x, 16 (h,x), 7 cx, 16 (x,h)
        let circuit = grover_circuit(8).unwrap();
        assert_eq!(circuit.gates().len(), 8 + 3 * (2 + 7 + 16 + 7 + 16));
        assert_eq!(circuit.measurements().len(), 8);
    }

    #[test]
    fn test_two_qubit_register() {
        let circuit = grover_circuit(2).unwrap();
        assert_eq!(circuit.gates().len(), 2 + (2 + 1 + 4 + 1 + 4));
    }
}
