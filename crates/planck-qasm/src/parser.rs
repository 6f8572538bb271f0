//! Tolerant decoder from circuit text to a [`Circuit`].

use std::fmt;

use planck_ir::{Circuit, Gate, GateKind, Layout, Measurement, QubitId};
use serde::Serialize;

use crate::error::{CodecError, CodecResult};
use crate::statement::{MAX_REGISTER_SIZE, Operand, Statement, classify};

/// A statement the decoder skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodeWarning {
    /// 1-based line on which the statement starts.
    pub line: usize,
    /// The statement text, trimmed and without its `;`.
    pub statement: String,
    /// Why it was skipped.
    pub reason: String,
}

impl fmt::Display for DecodeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {} ({})", self.line, self.reason, self.statement)
    }
}

/// Result of decoding circuit text.
#[derive(Debug, Clone)]
pub struct Decoded {
    /// The recovered circuit. Qubit indices are not range checked; call
    /// [`Circuit::validate`] before rendering.
    pub circuit: Circuit,
    /// Column assignment of the recovered gates.
    pub layout: Layout,
    /// Statements that were skipped, in source order.
    pub warnings: Vec<DecodeWarning>,
}

impl Decoded {
    /// Number of declared qubits.
    pub fn qubit_count(&self) -> u32 {
        self.circuit.num_qubits()
    }

    /// Circuit depth of the recovered gates.
    pub fn depth(&self) -> usize {
        self.layout.depth()
    }

    /// Number of qubit read-outs.
    pub fn measurement_count(&self) -> usize {
        self.circuit.measurements().len()
    }
}

/// Limits applied while decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Largest qubit register accepted. A larger declaration fails the
    /// whole decode before any statement after it is folded.
    pub max_qubits: u32,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_qubits: MAX_REGISTER_SIZE,
        }
    }
}

impl DecodeOptions {
    /// Options with a qubit limit, capped at [`MAX_REGISTER_SIZE`].
    pub fn with_max_qubits(max_qubits: u32) -> Self {
        Self {
            max_qubits: max_qubits.min(MAX_REGISTER_SIZE),
        }
    }
}

/// Decode circuit text with default limits.
///
/// Statements that are not understood are skipped and listed in
/// [`Decoded::warnings`]. Fails only when no qubit register is declared.
pub fn decode(source: &str) -> CodecResult<Decoded> {
    decode_with(source, &DecodeOptions::default())
}

/// Decode circuit text.
///
/// Like [`decode`], but also fails as soon as a qubit register larger than
/// `options.max_qubits` is declared.
pub fn decode_with(source: &str, options: &DecodeOptions) -> CodecResult<Decoded> {
    let mut folder = Folder::default();

    for (line, text) in split_statements(source) {
        let statement = classify(&text);
        if let Statement::QubitRegister { size, .. } = &statement {
            if folder.qubits.is_none() && *size > options.max_qubits {
                return Err(CodecError::TooManyQubits {
                    requested: *size,
                    limit: options.max_qubits,
                });
            }
        }
        if let Err(reason) = folder.apply(statement) {
            tracing::debug!(line, statement = %text, %reason, "skipping statement");
            folder.warnings.push(DecodeWarning {
                line,
                statement: text,
                reason,
            });
        }
    }

    folder.finish()
}

/// Split source into `;`-terminated statements with `//` comments removed.
///
/// Each statement is paired with the line it starts on. A trailing fragment
/// without `;` is still returned.
fn split_statements(source: &str) -> Vec<(usize, String)> {
    let mut statements = Vec::new();
    let mut current = String::new();
    let mut start_line = 1;

    for (index, raw_line) in source.lines().enumerate() {
        let line_number = index + 1;
        let code = raw_line.split("//").next().unwrap_or_default();

        for (i, piece) in code.split(';').enumerate() {
            if i > 0 {
                push_statement(&mut statements, &mut current, start_line);
            }
            if current.trim().is_empty() && !piece.trim().is_empty() {
                start_line = line_number;
            }
            current.push_str(piece);
        }
        current.push('\n');
    }
    push_statement(&mut statements, &mut current, start_line);

    statements
}

fn push_statement(statements: &mut Vec<(usize, String)>, current: &mut String, line: usize) {
    let text = current.trim();
    if !text.is_empty() {
        statements.push((line, text.to_string()));
    }
    current.clear();
}

/// Accumulates classified statements into circuit parts.
#[derive(Default)]
struct Folder {
    qubits: Option<(String, u32)>,
    clbits: Option<u32>,
    gates: Vec<Gate>,
    measurements: Vec<Measurement>,
    register_measured: bool,
    warnings: Vec<DecodeWarning>,
}

impl Folder {
    fn apply(&mut self, statement: Statement) -> Result<(), String> {
        match statement {
            Statement::Header { .. } | Statement::Include { .. } => Ok(()),
            Statement::QubitRegister { name, size } => {
                if let Some((first, _)) = &self.qubits {
                    return Err(format!(
                        "additional quantum register '{name}' ignored; '{first}' is already declared"
                    ));
                }
                self.qubits = Some((name, size));
                Ok(())
            }
            Statement::ClassicalRegister { name, size } => {
                if self.clbits.is_some() {
                    return Err(format!("additional classical register '{name}' ignored"));
                }
                self.clbits = Some(size);
                Ok(())
            }
            Statement::Measure { qubit, clbit } => self.measure(&qubit, &clbit),
            Statement::GateCall {
                name,
                params,
                operands,
            } => self.gate(&name, &params, &operands),
            Statement::Unrecognized { reason } => Err(reason),
        }
    }

    fn measure(&mut self, qubit: &Operand, clbit: &Operand) -> Result<(), String> {
        match (qubit.index, clbit.index) {
            (Some(q), Some(c)) => {
                self.measurements.push(Measurement {
                    qubit: QubitId(q),
                    clbit: c,
                });
                Ok(())
            }
            (None, None) => {
                let Some(size) = self.qubits.as_ref().map(|(_, size)| *size) else {
                    return Err("register measurement before any qubit register".into());
                };
                if self.register_measured {
                    return Err("register is already measured".into());
                }
                self.register_measured = true;
                self.measurements
                    .extend((0..size).map(|i| Measurement {
                        qubit: QubitId(i),
                        clbit: i,
                    }));
                Ok(())
            }
            _ => Err("measurement mixes a register with a single bit".into()),
        }
    }

    fn gate(&mut self, name: &str, params: &[f64], operands: &[Operand]) -> Result<(), String> {
        let mut qubits = Vec::with_capacity(operands.len());
        for operand in operands {
            match operand.index {
                Some(index) => qubits.push(QubitId(index)),
                None => {
                    return Err(format!(
                        "whole-register operand '{}' is not supported",
                        operand.register
                    ));
                }
            }
        }

        let kind = GateKind::from_mnemonic(name, params).ok_or_else(|| {
            format!(
                "gate '{name}' does not take {} parameter(s)",
                params.len()
            )
        })?;

        let gate = if GateKind::is_controlled_mnemonic(name) && qubits.len() >= 2 {
            let control = qubits.remove(0);
            Gate::new(kind, qubits, Some(control))
        } else {
            Gate::new(kind, qubits, None)
        }
        .map_err(|e| e.to_string())?;

        self.gates.push(gate);
        Ok(())
    }

    fn finish(self) -> CodecResult<Decoded> {
        let Some((_, num_qubits)) = self.qubits else {
            return Err(CodecError::MalformedCircuitText(
                "no qubit register declared (expected e.g. 'qreg q[2];')".into(),
            ));
        };

        let measured = self
            .measurements
            .iter()
            .map(|m| m.clbit.saturating_add(1))
            .max()
            .unwrap_or(0);
        let num_clbits = self.clbits.unwrap_or(num_qubits).max(measured);

        let circuit = Circuit::from_parts("decoded", num_qubits, num_clbits, self.gates, self.measurements);
        let layout = circuit.layout();

        tracing::debug!(
            qubits = num_qubits,
            gates = circuit.gates().len(),
            depth = layout.depth(),
            skipped = self.warnings.len(),
            "decoded circuit text"
        );

        Ok(Decoded {
            circuit,
            layout,
            warnings: self.warnings,
        })
    }
}
