//! QAOA circuit on a ring graph.

use std::f64::consts::TAU;

use planck_ir::{Circuit, IrResult, QubitId};
use rand::Rng;

/// Number of cost/mixer layers.
pub const LAYERS: usize = 2;

/// Edges `(i, i+1 mod n)` of the ring on `n` nodes.
pub fn ring_edges(n: u32) -> Vec<(u32, u32)> {
    (0..n).map(|i| (i, (i + 1) % n)).collect()
}

/// Superposition, then `LAYERS` rounds of a ZZ cost term per ring edge
/// (`cx i,j; rz(2 gamma) j; cx i,j`) and an `rx(2 beta)` mixer on every
/// qubit, then a full read-out. `gamma` and `beta` are drawn per layer from
/// `[0, 2pi)`. Registers smaller than two qubits are widened to two.
pub fn qaoa_circuit<R: Rng>(num_qubits: u32, rng: &mut R) -> IrResult<Circuit> {
    let n = num_qubits.max(2);
    let edges = ring_edges(n);
    let mut circuit = Circuit::new("qaoa", n);

    for i in 0..n {
        circuit.h(QubitId(i))?;
    }

    for _ in 0..LAYERS {
        let gamma = rng.gen_range(0.0..TAU);
        for &(i, j) in &edges {
            circuit
                .cx(QubitId(i), QubitId(j))?
                .rz(2.0 * gamma, QubitId(j))?
                .cx(QubitId(i), QubitId(j))?;
        }

        let beta = rng.gen_range(0.0..TAU);
        for i in 0..n {
            circuit.rx(2.0 * beta, QubitId(i))?;
        }
    }

    circuit.measure_all()?;
    Ok(circuit)
}
