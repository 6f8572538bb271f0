//! Property-based tests for the layout engine.

use planck_ir::{Circuit, Gate, GateKind, Layout, QubitId};
use proptest::prelude::*;

/// Gate operations that can be applied to a circuit.
#[derive(Debug, Clone)]
enum GateOp {
    H(u32),
    X(u32),
    Rz(f64, u32),
    CX(u32, u32),
    Swap(u32, u32),
}

impl GateOp {
    fn apply(self, circuit: &mut Circuit) {
        let _ = match self {
            GateOp::H(q) => circuit.h(QubitId(q)),
            GateOp::X(q) => circuit.x(QubitId(q)),
            GateOp::Rz(theta, q) => circuit.rz(theta, QubitId(q)),
            GateOp::CX(c, t) => circuit.cx(QubitId(c), QubitId(t)),
            GateOp::Swap(a, b) => circuit.swap(QubitId(a), QubitId(b)),
        };
    }
}

fn arb_gate_op(num_qubits: u32) -> impl Strategy<Value = GateOp> {
    let pair = (0..num_qubits, 0..num_qubits)
        .prop_filter("Qubits must differ", |(a, b)| a != b);
    prop_oneof![
        (0..num_qubits).prop_map(GateOp::H),
        (0..num_qubits).prop_map(GateOp::X),
        (-3.0_f64..3.0, 0..num_qubits).prop_map(|(theta, q)| GateOp::Rz(theta, q)),
        pair.clone().prop_map(|(c, t)| GateOp::CX(c, t)),
        pair.prop_map(|(a, b)| GateOp::Swap(a, b)),
    ]
}

/// Circuits with 2-6 qubits and 0-20 gates.
fn arb_circuit() -> impl Strategy<Value = Circuit> {
    (2_u32..=6).prop_flat_map(|num_qubits| {
        prop::collection::vec(arb_gate_op(num_qubits), 0..=20).prop_map(move |ops| {
            let mut circuit = Circuit::new("prop", num_qubits);
            for op in ops {
                op.apply(&mut circuit);
            }
            circuit
        })
    })
}

proptest! {
    /// Appending a gate never decreases depth.
    #[test]
    fn test_depth_is_monotone(
        circuit in arb_circuit(),
        a in 0_u32..2,
        b in 0_u32..2,
    ) {
        let before = circuit.depth();
        let mut extended = circuit.clone();
        if a == b {
            extended.h(QubitId(a)).unwrap();
        } else {
            extended.cx(QubitId(a), QubitId(b)).unwrap();
        }
        prop_assert!(extended.depth() >= before);
    }

    /// Layout is a pure function of the gate list.
    #[test]
    fn test_layout_is_deterministic(circuit in arb_circuit()) {
        prop_assert_eq!(circuit.layout(), circuit.layout());
    }

    /// Every gate lands strictly after the previous gate on each of its qubits.
    #[test]
    fn test_gates_on_shared_qubits_are_ordered(circuit in arb_circuit()) {
        let layout = circuit.layout();
        let gates = circuit.gates();
        for (i, later) in gates.iter().enumerate() {
            for (j, earlier) in gates[..i].iter().enumerate() {
                if earlier.qubits().any(|q| later.qubits().any(|p| p == q)) {
                    prop_assert!(layout.times()[j] < layout.times()[i]);
                }
            }
        }
        prop_assert!(layout.times().iter().all(|&t| t < layout.depth()));
    }

    /// Two trailing gates on disjoint qubits can be swapped without changing
    /// their columns or the depth.
    #[test]
    fn test_disjoint_trailing_gates_commute(
        circuit in arb_circuit(),
        first in 0_u32..2,
    ) {
        let second = 1 - first;
        let g1 = Gate::single(GateKind::H, QubitId(first));
        let g2 = Gate::new(GateKind::CX, [QubitId(2)], Some(QubitId(second))).unwrap();

        let mut forward = circuit.gates().to_vec();
        forward.push(g1.clone());
        forward.push(g2.clone());

        let mut reversed = circuit.gates().to_vec();
        reversed.push(g2);
        reversed.push(g1);

        let a = Layout::of(&forward);
        let b = Layout::of(&reversed);
        let n = forward.len();

        prop_assert_eq!(a.depth(), b.depth());
        prop_assert_eq!(a.time(n - 2), b.time(n - 1));
        prop_assert_eq!(a.time(n - 1), b.time(n - 2));
    }
}

#[test]
fn test_consecutive_disjoint_single_qubit_gates_share_column_zero() {
    let mut circuit = Circuit::new("parallel", 2);
    circuit.h(QubitId(0)).unwrap().x(QubitId(1)).unwrap();

    let layout = circuit.layout();
    assert_eq!(layout.times(), &[0, 0]);
    assert_eq!(layout.depth(), 1);
}
