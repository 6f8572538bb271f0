//! OpenQASM 2.0 emitter.

use planck_ir::{Circuit, Gate, Measurement, QubitId};

/// Formatting switches for [`encode_with`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Emit `measure q -> c;` when every qubit is read into the bit of the
    /// same index, in order.
    pub batch_measurements: bool,
    /// Emit a leading `// <circuit name>` comment.
    pub comments: bool,
}

/// Emit a circuit as OpenQASM 2.0 text with default options.
pub fn encode(circuit: &Circuit) -> String {
    encode_with(circuit, &EncodeOptions::default())
}

/// Emit a circuit as OpenQASM 2.0 text.
///
/// Angles are printed with four decimals. Register names are always `q` and
/// `c`.
pub fn encode_with(circuit: &Circuit, options: &EncodeOptions) -> String {
    let mut emitter = Emitter::new(options);
    emitter.emit_circuit(circuit);
    emitter.output
}

struct Emitter<'a> {
    output: String,
    options: &'a EncodeOptions,
}

impl<'a> Emitter<'a> {
    fn new(options: &'a EncodeOptions) -> Self {
        Self {
            output: String::new(),
            options,
        }
    }

    fn emit_circuit(&mut self, circuit: &Circuit) {
        if self.options.comments {
            self.writeln(&format!("// {}", circuit.name()));
        }
        self.writeln("OPENQASM 2.0;");
        self.writeln("include \"qelib1.inc\";");
        self.writeln("");

        self.writeln(&format!("qreg q[{}];", circuit.num_qubits()));
        self.writeln(&format!("creg c[{}];", circuit.num_clbits()));
        self.writeln("");

        for gate in circuit.gates() {
            self.emit_gate(gate);
        }

        let measurements = circuit.measurements();
        if self.options.batch_measurements && is_full_readout(circuit) {
            self.writeln("measure q -> c;");
        } else {
            for m in measurements {
                self.writeln(&format!("measure q[{}] -> c[{}];", m.qubit.0, m.clbit));
            }
        }
    }

    fn emit_gate(&mut self, gate: &Gate) {
        let name = gate.name();
        let operands = emit_qubits(gate.qubits());
        let params = gate.kind.params();

        if params.is_empty() {
            self.writeln(&format!("{name} {operands};"));
        } else {
            let params = params
                .iter()
                .map(|p| format!("{p:.4}"))
                .collect::<Vec<_>>()
                .join(",");
            self.writeln(&format!("{name}({params}) {operands};"));
        }
    }

    fn writeln(&mut self, line: &str) {
        self.output.push_str(line);
        self.output.push('\n');
    }
}

fn emit_qubits(qubits: impl Iterator<Item = QubitId>) -> String {
    qubits
        .map(|q| format!("q[{}]", q.0))
        .collect::<Vec<_>>()
        .join(",")
}

fn is_full_readout(circuit: &Circuit) -> bool {
    let measurements = circuit.measurements();
    measurements.len() == circuit.num_qubits() as usize
        && circuit.num_clbits() >= circuit.num_qubits()
        && measurements.iter().zip(0..).all(|(m, i)| {
            *m == Measurement {
                qubit: QubitId(i),
                clbit: i,
            }
        })
}
