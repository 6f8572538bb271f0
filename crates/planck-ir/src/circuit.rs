//! High-level circuit builder API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::{Gate, GateKind, Measurement};
use crate::layout::Layout;
use crate::qubit::QubitId;

/// A quantum circuit: a qubit register, an ordered gate list and a terminal
/// measurement block.
///
/// Gate order is program order (the order statements appear in circuit
/// text), not timeline order; see [`Layout`] for the latter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Number of qubits in the quantum register.
    num_qubits: u32,
    /// Number of bits in the classical register.
    num_clbits: u32,
    /// Gates in program order.
    gates: Vec<Gate>,
    /// Read-out block, in program order.
    measurements: Vec<Measurement>,
}

impl Circuit {
    /// Create an empty circuit whose classical register matches the qubit
    /// register.
    pub fn new(name: impl Into<String>, num_qubits: u32) -> Self {
        Self::with_size(name, num_qubits, num_qubits)
    }

    /// Create an empty circuit with explicit register sizes.
    pub fn with_size(name: impl Into<String>, num_qubits: u32, num_clbits: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            num_clbits,
            gates: vec![],
            measurements: vec![],
        }
    }

    /// Assemble a circuit without validating qubit indices.
    ///
    /// Circuit text may reference qubits beyond the declared register; the
    /// decoder keeps such gates so that [`Circuit::validate`] can report them.
    pub fn from_parts(
        name: impl Into<String>,
        num_qubits: u32,
        num_clbits: u32,
        gates: Vec<Gate>,
        measurements: Vec<Measurement>,
    ) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            num_clbits,
            gates,
            measurements,
        }
    }

    // =========================================================================
    // Single-qubit gates
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(GateKind::H, [qubit], None)
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(GateKind::X, [qubit], None)
    }

    /// Apply Pauli-Y gate.
    pub fn y(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(GateKind::Y, [qubit], None)
    }

    /// Apply Pauli-Z gate.
    pub fn z(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(GateKind::Z, [qubit], None)
    }

    /// Apply S gate.
    pub fn s(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(GateKind::S, [qubit], None)
    }

    /// Apply T gate.
    pub fn t(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(GateKind::T, [qubit], None)
    }

    /// Apply Rx rotation gate.
    pub fn rx(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(GateKind::Rx { theta }, [qubit], None)
    }

    /// Apply Ry rotation gate.
    pub fn ry(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(GateKind::Ry { theta }, [qubit], None)
    }

    /// Apply Rz rotation gate.
    pub fn rz(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(GateKind::Rz { theta }, [qubit], None)
    }

    // =========================================================================
    // Two-qubit gates
    // =========================================================================

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(GateKind::CX, [target], Some(control))
    }

    /// Apply CZ gate.
    pub fn cz(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(GateKind::CZ, [target], Some(control))
    }

    /// Apply controlled-phase gate.
    pub fn cp(&mut self, theta: f64, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(GateKind::CP { theta }, [target], Some(control))
    }

    /// Apply SWAP gate.
    pub fn swap(&mut self, q1: QubitId, q2: QubitId) -> IrResult<&mut Self> {
        self.push(GateKind::Swap, [q1, q2], None)
    }

    // =========================================================================
    // Other operations
    // =========================================================================

    /// Append an already-built gate after checking its qubits are in range.
    pub fn gate(&mut self, gate: Gate) -> IrResult<&mut Self> {
        for qubit in gate.qubits() {
            self.check_qubit(qubit, Some(gate.name()))?;
        }
        self.gates.push(gate);
        Ok(self)
    }

    /// Measure a qubit to a classical bit.
    pub fn measure(&mut self, qubit: QubitId, clbit: u32) -> IrResult<&mut Self> {
        self.check_qubit(qubit, Some("measure"))?;
        self.num_clbits = self.num_clbits.max(clbit.saturating_add(1));
        self.measurements.push(Measurement { qubit, clbit });
        Ok(self)
    }

    /// Measure all qubits to corresponding classical bits.
    pub fn measure_all(&mut self) -> IrResult<&mut Self> {
        for i in 0..self.num_qubits {
            self.measure(QubitId(i), i)?;
        }
        Ok(self)
    }

    fn push<const N: usize>(
        &mut self,
        kind: GateKind,
        targets: [QubitId; N],
        control: Option<QubitId>,
    ) -> IrResult<&mut Self> {
        let gate = Gate::new(kind, targets, control)?;
        self.gate(gate)
    }

    fn check_qubit(&self, qubit: QubitId, gate_name: Option<&str>) -> IrResult<()> {
        if qubit.0 >= self.num_qubits {
            return Err(IrError::QubitIndexOutOfRange {
                qubit,
                num_qubits: self.num_qubits,
                gate_name: gate_name.map(str::to_string),
            });
        }
        Ok(())
    }

    // =========================================================================
    // Validation and analysis
    // =========================================================================

    /// Check that the register is non-empty and every gate and measurement
    /// stays inside it.
    pub fn validate(&self) -> IrResult<()> {
        if self.num_qubits == 0 {
            return Err(IrError::EmptyRegister);
        }
        for gate in &self.gates {
            for qubit in gate.qubits() {
                self.check_qubit(qubit, Some(gate.name()))?;
            }
        }
        for m in &self.measurements {
            self.check_qubit(m.qubit, Some("measure"))?;
        }
        Ok(())
    }

    /// Schedule the gates onto time columns.
    pub fn layout(&self) -> Layout {
        Layout::of(&self.gates)
    }

    /// Number of time columns needed to run every gate.
    pub fn depth(&self) -> usize {
        self.layout().depth()
    }

    /// Gate counts keyed by mnemonic, in name order.
    pub fn gate_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for gate in &self.gates {
            *counts.entry(gate.name().to_string()).or_insert(0) += 1;
        }
        counts
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> u32 {
        self.num_qubits
    }

    /// Get the number of classical bits.
    pub fn num_clbits(&self) -> u32 {
        self.num_clbits
    }

    /// Gates in program order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// The measurement block.
    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }
}
