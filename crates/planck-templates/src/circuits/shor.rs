//! Shor period-finding circuit (simplified).

use std::f64::consts::PI;

use planck_ir::{Circuit, IrResult, QubitId};

/// Build a period-finding skeleton on `num_qubits` qubits.
///
/// The first half of the register is the control (counting) register, the
/// rest the work register. Modular exponentiation is stood in for by a CNOT
/// from every control qubit to every work qubit; the inverse QFT is a swap
/// network followed by Hadamards and controlled phases. Only the control
/// register is measured.
pub fn shor_circuit(num_qubits: u32) -> IrResult<Circuit> {
    let n = num_qubits;
    let control = n / 2;
    let work = n - control;
    let mut circuit = Circuit::new("shor", n);

    for i in 0..control {
        circuit.h(QubitId(i))?;
    }

    for i in 0..control {
        for j in 0..work {
            circuit.cx(QubitId(i), QubitId(control + j))?;
        }
    }

    for i in 0..control / 2 {
        circuit.swap(QubitId(i), QubitId(control - 1 - i))?;
    }

    for i in 0..control {
        circuit.h(QubitId(i))?;
        for j in 0..i {
            let theta = -PI / 2f64.powi((i - j) as i32);
            circuit.cp(theta, QubitId(j), QubitId(i))?;
        }
    }

    for i in 0..control {
        circuit.measure(QubitId(i), i)?;
    }
    Ok(circuit)
}
