//! Quantum gate types.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::qubit::QubitId;

/// Gate kinds with known semantics, plus a catch-all for anything else that
/// appears in well-formed circuit text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GateKind {
    /// Hadamard gate.
    H,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// S gate (sqrt(Z)).
    S,
    /// T gate (fourth root of Z).
    T,
    /// Rotation around X axis.
    Rx {
        /// Rotation angle in radians.
        theta: f64,
    },
    /// Rotation around Y axis.
    Ry {
        /// Rotation angle in radians.
        theta: f64,
    },
    /// Rotation around Z axis.
    Rz {
        /// Rotation angle in radians.
        theta: f64,
    },
    /// Controlled-X (CNOT) gate.
    CX,
    /// Controlled-Z gate.
    CZ,
    /// Controlled phase gate.
    CP {
        /// Phase angle in radians.
        theta: f64,
    },
    /// SWAP gate.
    Swap,
    /// Any other mnemonic. Kept so hand-edited text is not silently altered.
    Custom {
        /// Mnemonic as written.
        name: String,
        /// Numeric parameters, if any.
        params: Vec<f64>,
    },
}

impl GateKind {
    /// Resolve a mnemonic (case-insensitive) and its parameters.
    ///
    /// Returns `None` when the mnemonic is known but the parameter count is
    /// wrong (`rx q[0];`, `h(0.5) q[0];`). Unknown mnemonics become
    /// [`GateKind::Custom`].
    pub fn from_mnemonic(name: &str, params: &[f64]) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        let kind = match (lower.as_str(), params) {
            ("h", []) => GateKind::H,
            ("x", []) => GateKind::X,
            ("y", []) => GateKind::Y,
            ("z", []) => GateKind::Z,
            ("s", []) => GateKind::S,
            ("t", []) => GateKind::T,
            ("rx", [theta]) => GateKind::Rx { theta: *theta },
            ("ry", [theta]) => GateKind::Ry { theta: *theta },
            ("rz", [theta]) => GateKind::Rz { theta: *theta },
            ("cx" | "cnot", []) => GateKind::CX,
            ("cz", []) => GateKind::CZ,
            ("cp", [theta]) => GateKind::CP { theta: *theta },
            ("swap", []) => GateKind::Swap,
            ("h" | "x" | "y" | "z" | "s" | "t" | "rx" | "ry" | "rz" | "cx" | "cnot" | "cz"
            | "cp" | "swap", _) => return None,
            _ => GateKind::Custom {
                name: name.to_string(),
                params: params.to_vec(),
            },
        };
        Some(kind)
    }

    /// Whether a mnemonic names a two-qubit controlled gate, i.e. whether
    /// its first operand is the control.
    pub fn is_controlled_mnemonic(name: &str) -> bool {
        matches!(
            name.to_ascii_lowercase().as_str(),
            "cx" | "cnot" | "cz" | "cp"
        )
    }

    /// Canonical lower-case mnemonic.
    #[inline]
    pub fn name(&self) -> &str {
        match self {
            GateKind::H => "h",
            GateKind::X => "x",
            GateKind::Y => "y",
            GateKind::Z => "z",
            GateKind::S => "s",
            GateKind::T => "t",
            GateKind::Rx { .. } => "rx",
            GateKind::Ry { .. } => "ry",
            GateKind::Rz { .. } => "rz",
            GateKind::CX => "cx",
            GateKind::CZ => "cz",
            GateKind::CP { .. } => "cp",
            GateKind::Swap => "swap",
            GateKind::Custom { name, .. } => name,
        }
    }

    /// Whether this kind takes a control qubit.
    #[inline]
    pub fn is_controlled(&self) -> bool {
        matches!(self, GateKind::CX | GateKind::CZ | GateKind::CP { .. })
    }

    /// Number of qubits the gate acts on, when known.
    pub fn num_qubits(&self) -> Option<u32> {
        match self {
            GateKind::H
            | GateKind::X
            | GateKind::Y
            | GateKind::Z
            | GateKind::S
            | GateKind::T
            | GateKind::Rx { .. }
            | GateKind::Ry { .. }
            | GateKind::Rz { .. } => Some(1),
            GateKind::CX | GateKind::CZ | GateKind::CP { .. } | GateKind::Swap => Some(2),
            GateKind::Custom { .. } => None,
        }
    }

    /// Numeric parameters in declaration order.
    pub fn params(&self) -> Vec<f64> {
        match self {
            GateKind::Rx { theta }
            | GateKind::Ry { theta }
            | GateKind::Rz { theta }
            | GateKind::CP { theta } => vec![*theta],
            GateKind::Custom { params, .. } => params.clone(),
            _ => vec![],
        }
    }

    /// Upper-case label used on diagram boxes.
    pub fn label(&self) -> String {
        self.name().to_ascii_uppercase()
    }
}

/// A gate applied to concrete qubits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    /// What the gate does.
    pub kind: GateKind,
    /// Target qubits, in operand order.
    pub targets: Vec<QubitId>,
    /// Control qubit for controlled gates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control: Option<QubitId>,
}

impl Gate {
    /// Create a gate after checking the structural invariants: at least one
    /// target, unique targets, a control distinct from every target and
    /// finite parameters.
    pub fn new(
        kind: GateKind,
        targets: impl IntoIterator<Item = QubitId>,
        control: Option<QubitId>,
    ) -> IrResult<Self> {
        let targets: Vec<QubitId> = targets.into_iter().collect();
        if targets.is_empty() {
            return Err(IrError::MissingTarget(kind.name().to_string()));
        }
        if kind.params().iter().any(|p| !p.is_finite()) {
            return Err(IrError::NonFiniteParameter {
                gate_name: kind.name().to_string(),
            });
        }

        for (i, q) in targets.iter().enumerate() {
            if targets[..i].contains(q) || control == Some(*q) {
                return Err(IrError::DuplicateQubit {
                    qubit: *q,
                    gate_name: Some(kind.name().to_string()),
                });
            }
        }

        Ok(Self {
            kind,
            targets,
            control,
        })
    }

    /// A single-target, uncontrolled gate.
    pub fn single(kind: GateKind, target: QubitId) -> Self {
        Self {
            kind,
            targets: vec![target],
            control: None,
        }
    }

    /// Canonical mnemonic of the gate.
    #[inline]
    pub fn name(&self) -> &str {
        self.kind.name()
    }

    /// Every qubit the gate touches: control first, then targets.
    pub fn qubits(&self) -> impl Iterator<Item = QubitId> + '_ {
        self.control.into_iter().chain(self.targets.iter().copied())
    }
}

/// A read-out of one qubit into one classical bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurement {
    /// Measured qubit.
    pub qubit: QubitId,
    /// Destination classical bit.
    pub clbit: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mnemonics_are_case_insensitive() {
        assert_eq!(GateKind::from_mnemonic("H", &[]), Some(GateKind::H));
        assert_eq!(GateKind::from_mnemonic("CNOT", &[]), Some(GateKind::CX));
        assert_eq!(
            GateKind::from_mnemonic("Rz", &[0.5]),
            Some(GateKind::Rz { theta: 0.5 })
        );
    }

    #[test]
    fn test_wrong_parameter_count_is_rejected() {
        assert_eq!(GateKind::from_mnemonic("rx", &[]), None);
        assert_eq!(GateKind::from_mnemonic("h", &[1.0]), None);
        assert_eq!(GateKind::from_mnemonic("cp", &[1.0, 2.0]), None);
    }

    #[test]
    fn test_unknown_mnemonic_is_custom() {
        let kind = GateKind::from_mnemonic("ccx", &[]).unwrap();
        assert_eq!(
            kind,
            GateKind::Custom {
                name: "ccx".into(),
                params: vec![]
            }
        );
        assert_eq!(kind.num_qubits(), None);
        assert!(!kind.is_controlled());
    }

    #[test]
    fn test_controlled_mnemonics() {
        assert!(GateKind::is_controlled_mnemonic("cx"));
        assert!(GateKind::is_controlled_mnemonic("CNOT"));
        assert!(GateKind::is_controlled_mnemonic("cp"));
        assert!(!GateKind::is_controlled_mnemonic("swap"));
        assert!(!GateKind::is_controlled_mnemonic("h"));
    }

    #[test]
    fn test_gate_rejects_control_on_target() {
        let err = Gate::new(GateKind::CX, [QubitId(1)], Some(QubitId(1))).unwrap_err();
        assert!(matches!(err, IrError::DuplicateQubit { qubit: QubitId(1), .. }));
    }

    #[test]
    fn test_gate_rejects_duplicate_targets() {
        let err = Gate::new(GateKind::Swap, [QubitId(0), QubitId(0)], None).unwrap_err();
        assert!(matches!(err, IrError::DuplicateQubit { .. }));
    }

    #[test]
    fn test_gate_requires_target() {
        let err = Gate::new(GateKind::H, [], None).unwrap_err();
        assert_eq!(err, IrError::MissingTarget("h".into()));
    }

    #[test]
    fn test_gate_rejects_non_finite_parameters() {
        for theta in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = Gate::new(GateKind::Rz { theta }, [QubitId(0)], None).unwrap_err();
            assert_eq!(
                err,
                IrError::NonFiniteParameter {
                    gate_name: "rz".into()
                }
            );
        }
        let custom = GateKind::Custom {
            name: "u".into(),
            params: vec![0.5, f64::NAN],
        };
        assert!(Gate::new(custom, [QubitId(0)], None).is_err());
    }

    #[test]
    fn test_gate_qubits_lists_control_first() {
        let gate = Gate::new(GateKind::CX, [QubitId(2)], Some(QubitId(0))).unwrap();
        let qubits: Vec<_> = gate.qubits().collect();
        assert_eq!(qubits, vec![QubitId(0), QubitId(2)]);
    }
}
