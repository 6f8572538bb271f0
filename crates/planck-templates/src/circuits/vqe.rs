//! Hardware-efficient VQE ansatz.

use std::f64::consts::TAU;

use planck_ir::{Circuit, IrResult, QubitId};
use rand::Rng;

/// Number of ansatz layers.
pub const LAYERS: usize = 3;

/// `LAYERS` repetitions of an `ry` rotation on every qubit, a linear CNOT
/// chain and an `rz` rotation on every qubit, followed by a full read-out.
///
/// Angles are drawn uniformly from `[0, 2pi)`.
pub fn vqe_circuit<R: Rng>(num_qubits: u32, rng: &mut R) -> IrResult<Circuit> {
    let n = num_qubits;
    let mut circuit = Circuit::new("vqe", n);

    for _ in 0..LAYERS {
        for i in 0..n {
            circuit.ry(rng.gen_range(0.0..TAU), QubitId(i))?;
        }
        for i in 0..n.saturating_sub(1) {
            circuit.cx(QubitId(i), QubitId(i + 1))?;
        }
        for i in 0..n {
            circuit.rz(rng.gen_range(0.0..TAU), QubitId(i))?;
        }
    }

    circuit.measure_all()?;
    Ok(circuit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use planck_ir::GateKind;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_layer_structure() {
        let mut rng = StdRng::seed_from_u64(7);
        let circuit = vqe_circuit(4, &mut rng).unwrap();
        let counts = circuit.gate_counts();

        assert_eq!(counts.get("ry"), Some(&12));
        assert_eq!(counts.get("rz"), Some(&12));
        assert_eq!(counts.get("cx"), Some(&9));
    }

    #[test]
    fn test_angles_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        let circuit = vqe_circuit(3, &mut rng).unwrap();
        for gate in circuit.gates() {
            if let GateKind::Ry { theta } | GateKind::Rz { theta } = gate.kind {
                assert!((0.0..TAU).contains(&theta));
            }
        }
    }
}
