//! Property-based tests for circuit text roundtrip conversion.
//!
//! Tests that circuit → text → circuit preserves gate sequence and register
//! sizes.

use planck_ir::{Circuit, GateKind, QubitId};
use planck_qasm::{EncodeOptions, decode, encode, encode_with};
use proptest::prelude::*;

/// Gate operations that can be applied to a circuit.
#[derive(Debug, Clone)]
enum GateOp {
    H(u32),
    X(u32),
    Y(u32),
    Z(u32),
    S(u32),
    T(u32),
    Rx(f64, u32),
    Ry(f64, u32),
    Rz(f64, u32),
    CX(u32, u32),
    CZ(u32, u32),
    CP(f64, u32, u32),
    Swap(u32, u32),
}

impl GateOp {
    fn apply(self, circuit: &mut Circuit) {
        let _ = match self {
            GateOp::H(q) => circuit.h(QubitId(q)),
            GateOp::X(q) => circuit.x(QubitId(q)),
            GateOp::Y(q) => circuit.y(QubitId(q)),
            GateOp::Z(q) => circuit.z(QubitId(q)),
            GateOp::S(q) => circuit.s(QubitId(q)),
            GateOp::T(q) => circuit.t(QubitId(q)),
            GateOp::Rx(theta, q) => circuit.rx(theta, QubitId(q)),
            GateOp::Ry(theta, q) => circuit.ry(theta, QubitId(q)),
            GateOp::Rz(theta, q) => circuit.rz(theta, QubitId(q)),
            GateOp::CX(c, t) => circuit.cx(QubitId(c), QubitId(t)),
            GateOp::CZ(c, t) => circuit.cz(QubitId(c), QubitId(t)),
            GateOp::CP(theta, c, t) => circuit.cp(theta, QubitId(c), QubitId(t)),
            GateOp::Swap(a, b) => circuit.swap(QubitId(a), QubitId(b)),
        };
    }
}

/// Generate a random gate operation for a circuit with given number of qubits.
fn arb_gate_op(num_qubits: u32) -> BoxedStrategy<GateOp> {
    let angle = -7.0_f64..7.0;
    let single = prop_oneof![
        (0..num_qubits).prop_map(GateOp::H),
        (0..num_qubits).prop_map(GateOp::X),
        (0..num_qubits).prop_map(GateOp::Y),
        (0..num_qubits).prop_map(GateOp::Z),
        (0..num_qubits).prop_map(GateOp::S),
        (0..num_qubits).prop_map(GateOp::T),
        (angle.clone(), 0..num_qubits).prop_map(|(a, q)| GateOp::Rx(a, q)),
        (angle.clone(), 0..num_qubits).prop_map(|(a, q)| GateOp::Ry(a, q)),
        (angle.clone(), 0..num_qubits).prop_map(|(a, q)| GateOp::Rz(a, q)),
    ];

    // For single-qubit circuits, only generate single-qubit gates
    if num_qubits < 2 {
        return single.boxed();
    }

    let pair = (0..num_qubits, 0..num_qubits)
        .prop_filter("Control and target must differ", |(c, t)| c != t);
    prop_oneof![
        3 => single,
        1 => pair.clone().prop_map(|(c, t)| GateOp::CX(c, t)),
        1 => pair.clone().prop_map(|(c, t)| GateOp::CZ(c, t)),
        1 => (angle, pair.clone()).prop_map(|(a, (c, t))| GateOp::CP(a, c, t)),
        1 => pair.prop_map(|(a, b)| GateOp::Swap(a, b)),
    ]
    .boxed()
}

/// Circuits with 1-6 qubits, 0-25 gates and an optional full read-out.
fn arb_circuit() -> impl Strategy<Value = Circuit> {
    (1_u32..=6).prop_flat_map(|num_qubits| {
        (
            prop::collection::vec(arb_gate_op(num_qubits), 0..=25),
            any::<bool>(),
        )
            .prop_map(move |(ops, measure)| {
                let mut circuit = Circuit::new("test", num_qubits);
                for op in ops {
                    op.apply(&mut circuit);
                }
                if measure {
                    let _ = circuit.measure_all();
                }
                circuit
            })
    })
}

fn angles_match(a: &GateKind, b: &GateKind) -> bool {
    a.params()
        .iter()
        .zip(b.params())
        .all(|(x, y)| (x - y).abs() <= 5e-5)
}

proptest! {
    /// Test that circuit → text → circuit preserves the gate sequence.
    #[test]
    fn test_roundtrip_preserves_gates(circuit in arb_circuit()) {
        let text = encode(&circuit);
        let decoded = decode(&text).expect("encoded text must decode");

        prop_assert!(decoded.warnings.is_empty(), "warnings: {:?}", decoded.warnings);
        prop_assert_eq!(decoded.qubit_count(), circuit.num_qubits());
        prop_assert_eq!(decoded.circuit.num_clbits(), circuit.num_clbits());
        prop_assert_eq!(decoded.circuit.gates().len(), circuit.gates().len());
        prop_assert_eq!(decoded.measurement_count(), circuit.measurements().len());
        prop_assert_eq!(decoded.depth(), circuit.depth());

        for (built, parsed) in circuit.gates().iter().zip(decoded.circuit.gates()) {
            prop_assert_eq!(built.name(), parsed.name());
            prop_assert_eq!(&built.targets, &parsed.targets);
            prop_assert_eq!(built.control, parsed.control);
            prop_assert!(angles_match(&built.kind, &parsed.kind));
        }
    }

    /// Batched read-out decodes to the same measurement block.
    #[test]
    fn test_batched_roundtrip_preserves_measurements(circuit in arb_circuit()) {
        let options = EncodeOptions { batch_measurements: true, comments: true };
        let decoded = decode(&encode_with(&circuit, &options)).expect("encoded text must decode");

        prop_assert_eq!(decoded.circuit.measurements(), circuit.measurements());
        prop_assert_eq!(decoded.circuit.gates().len(), circuit.gates().len());
    }

    /// Test that text generation is deterministic.
    #[test]
    fn test_encoding_is_deterministic(circuit in arb_circuit()) {
        prop_assert_eq!(encode(&circuit), encode(&circuit));
    }

    /// Decoding never panics on arbitrary input.
    #[test]
    fn test_decode_arbitrary_text_does_not_panic(text in "\\PC{0,200}") {
        let _ = decode(&text);
    }
}

#[test]
fn test_two_gate_circuit_encodes_and_decodes_to_depth_two() {
    let mut circuit = Circuit::new("scenario", 2);
    circuit
        .h(QubitId(0))
        .unwrap()
        .cx(QubitId(0), QubitId(1))
        .unwrap();

    let text = encode(&circuit);
    let h = text.find("h q[0];").expect("h line");
    let cx = text.find("cx q[0],q[1];").expect("cx line");
    assert!(h < cx);

    assert_eq!(decode(&text).unwrap().depth(), 2);
}
