//! Bell state preparation.

use planck_ir::{Circuit, IrResult, QubitId};

/// `h q[0]; cx q[0],q[1];` followed by a full read-out.
pub fn bell_circuit() -> IrResult<Circuit> {
    let mut circuit = Circuit::new("bell", 2);
    circuit
        .h(QubitId(0))?
        .cx(QubitId(0), QubitId(1))?
        .measure_all()?;
    Ok(circuit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use planck_ir::GateKind;

    #[test]
    fn test_bell_structure() {
        let circuit = bell_circuit().unwrap();
        assert_eq!(circuit.num_qubits(), 2);
        assert_eq!(circuit.gates().len(), 2);
        assert_eq!(circuit.gates()[0].kind, GateKind::H);
        assert_eq!(circuit.gates()[1].kind, GateKind::CX);
        assert_eq!(circuit.gates()[1].control, Some(QubitId(0)));
        assert_eq!(circuit.measurements().len(), 2);
        assert_eq!(circuit.depth(), 2);
    }
}
