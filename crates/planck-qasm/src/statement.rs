//! Statement classification.
//!
//! Circuit text is tolerated rather than validated: every `;`-terminated
//! statement is classified into exactly one [`Statement`], and anything the
//! decoder cannot use becomes [`Statement::Unrecognized`] with a reason.

use serde::Serialize;

use crate::lexer::{Token, tokenize};

/// Largest register the decoder accepts.
pub const MAX_REGISTER_SIZE: u32 = 1 << 16;

/// Deepest nesting of parentheses and signs accepted in a parameter.
const MAX_EXPR_DEPTH: usize = 64;

/// A register reference such as `q[3]`, or a whole register `q`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Operand {
    /// Register name.
    pub register: String,
    /// Element index, `None` for the whole register.
    pub index: Option<u32>,
}

/// One classified statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Statement {
    /// `OPENQASM 2.0`
    Header { version: String },
    /// `include "qelib1.inc"`
    Include { path: String },
    /// `qreg q[N]` or `qubit[N] q`
    QubitRegister { name: String, size: u32 },
    /// `creg c[N]` or `bit[N] c`
    ClassicalRegister { name: String, size: u32 },
    /// `measure q[i] -> c[j]` or `c[j] = measure q[i]`
    Measure { qubit: Operand, clbit: Operand },
    /// `name(params) operand, operand, ...`
    GateCall {
        name: String,
        params: Vec<f64>,
        operands: Vec<Operand>,
    },
    /// Anything else; skipped by the decoder.
    Unrecognized { reason: String },
}

impl Statement {
    fn unrecognized(reason: impl Into<String>) -> Self {
        Statement::Unrecognized {
            reason: reason.into(),
        }
    }
}

/// Classify one statement, given without its terminating `;` and with
/// comments already removed.
pub fn classify(text: &str) -> Statement {
    let tokens = match tokenize(text) {
        Ok(tokens) => tokens,
        Err(slice) => return Statement::unrecognized(format!("invalid token '{slice}'")),
    };

    let mut cursor = Cursor::new(&tokens);
    let statement = match cursor.peek() {
        None => return Statement::unrecognized("empty statement"),
        Some(Token::OpenQasm) => cursor.header(),
        Some(Token::Include) => cursor.include(),
        Some(Token::Qreg | Token::Creg) => cursor.qasm2_register(),
        Some(Token::Qubit | Token::Bit) => cursor.qasm3_register(),
        Some(Token::Measure) => cursor.measure_arrow(),
        Some(Token::Identifier(_)) if cursor.has_assignment() => cursor.measure_assign(),
        Some(Token::Identifier(_)) => cursor.gate_call(),
        Some(other) => Err(format!("unexpected '{other}' at start of statement")),
    };

    match statement.and_then(|s| cursor.finish().map(|()| s)) {
        Ok(statement) => statement,
        Err(reason) => Statement::unrecognized(reason),
    }
}

type Classified<T> = Result<T, String>;

/// Token cursor over a single statement.
struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
}

impl<'a> Cursor<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    fn consume(&mut self, token: &Token) -> bool {
        if self.peek() == Some(token) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, token: &Token) -> Classified<()> {
        match self.advance() {
            Some(found) if found == token => Ok(()),
            Some(found) => Err(format!("expected '{token}', found '{found}'")),
            None => Err(format!("expected '{token}', found end of statement")),
        }
    }

    fn finish(&self) -> Classified<()> {
        match self.peek() {
            None => Ok(()),
            Some(extra) => Err(format!("unexpected trailing '{extra}'")),
        }
    }

    fn has_assignment(&self) -> bool {
        self.tokens.contains(&Token::Eq)
    }

    fn identifier(&mut self) -> Classified<String> {
        match self.advance() {
            Some(Token::Identifier(name)) => Ok(name.clone()),
            Some(found) => Err(format!("expected identifier, found '{found}'")),
            None => Err("expected identifier, found end of statement".into()),
        }
    }

    fn integer(&mut self) -> Classified<u32> {
        match self.advance() {
            Some(Token::IntLiteral(v)) => {
                u32::try_from(*v).map_err(|_| format!("index {v} is too large"))
            }
            Some(found) => Err(format!("expected integer, found '{found}'")),
            None => Err("expected integer, found end of statement".into()),
        }
    }

    fn bracketed_size(&mut self) -> Classified<u32> {
        self.expect(&Token::LBracket)?;
        let size = self.integer()?;
        self.expect(&Token::RBracket)?;
        Ok(size)
    }

    fn operand(&mut self) -> Classified<Operand> {
        let register = self.identifier()?;
        let index = if self.peek() == Some(&Token::LBracket) {
            Some(self.bracketed_size()?)
        } else {
            None
        };
        Ok(Operand { register, index })
    }

    // =========================================================================
    // Statement forms
    // =========================================================================

    fn header(&mut self) -> Classified<Statement> {
        self.advance();
        let version = match self.advance() {
            Some(Token::FloatLiteral(v)) => format!("{v:.1}"),
            Some(Token::IntLiteral(v)) => v.to_string(),
            _ => return Err("missing OPENQASM version".into()),
        };
        Ok(Statement::Header { version })
    }

    fn include(&mut self) -> Classified<Statement> {
        self.advance();
        match self.advance() {
            Some(Token::StringLiteral(path)) => Ok(Statement::Include { path: path.clone() }),
            _ => Err("include expects a quoted path".into()),
        }
    }

    fn qasm2_register(&mut self) -> Classified<Statement> {
        let quantum = self.advance() == Some(&Token::Qreg);
        let name = self.identifier()?;
        let size = self.bracketed_size()?;
        register(quantum, name, size)
    }

    fn qasm3_register(&mut self) -> Classified<Statement> {
        let quantum = self.advance() == Some(&Token::Qubit);
        let size = if self.peek() == Some(&Token::LBracket) {
            self.bracketed_size()?
        } else {
            1
        };
        let name = self.identifier()?;
        register(quantum, name, size)
    }

    fn measure_arrow(&mut self) -> Classified<Statement> {
        self.advance();
        let qubit = self.operand()?;
        self.expect(&Token::Arrow)?;
        let clbit = self.operand()?;
        Ok(Statement::Measure { qubit, clbit })
    }

    fn measure_assign(&mut self) -> Classified<Statement> {
        let clbit = self.operand()?;
        self.expect(&Token::Eq)?;
        self.expect(&Token::Measure)?;
        let qubit = self.operand()?;
        Ok(Statement::Measure { qubit, clbit })
    }

    fn gate_call(&mut self) -> Classified<Statement> {
        let name = self.identifier()?;

        let mut params = Vec::new();
        if self.consume(&Token::LParen) {
            if !self.consume(&Token::RParen) {
                loop {
                    params.push(self.angle()?);
                    if self.consume(&Token::RParen) {
                        break;
                    }
                    self.expect(&Token::Comma)?;
                }
            }
        }

        let mut operands = vec![self.operand()?];
        while self.consume(&Token::Comma) {
            operands.push(self.operand()?);
        }

        Ok(Statement::GateCall {
            name,
            params,
            operands,
        })
    }

    // =========================================================================
    // Angle expressions: sums of products of signed numbers and `pi`
    // =========================================================================

    fn angle(&mut self) -> Classified<f64> {
        let value = self.sum()?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err("parameter does not evaluate to a finite number".into())
        }
    }

    fn sum(&mut self) -> Classified<f64> {
        let mut value = self.product()?;
        loop {
            if self.consume(&Token::Plus) {
                value += self.product()?;
            } else if self.consume(&Token::Minus) {
                value -= self.product()?;
            } else {
                return Ok(value);
            }
        }
    }

    fn product(&mut self) -> Classified<f64> {
        let mut value = self.unary()?;
        loop {
            if self.consume(&Token::Star) {
                value *= self.unary()?;
            } else if self.consume(&Token::Slash) {
                value /= self.unary()?;
            } else {
                return Ok(value);
            }
        }
    }

    fn unary(&mut self) -> Classified<f64> {
        if self.consume(&Token::Minus) {
            return self.nested(Self::unary).map(|v| -v);
        }
        if self.consume(&Token::Plus) {
            return self.nested(Self::unary);
        }
        match self.advance() {
            Some(Token::FloatLiteral(v)) => Ok(*v),
            #[allow(clippy::cast_precision_loss)]
            Some(Token::IntLiteral(v)) => Ok(*v as f64),
            Some(Token::Pi) => Ok(std::f64::consts::PI),
            Some(Token::LParen) => {
                let value = self.nested(Self::sum)?;
                self.expect(&Token::RParen)?;
                Ok(value)
            }
            Some(found) => Err(format!("expected number, found '{found}'")),
            None => Err("expected number, found end of statement".into()),
        }
    }

    fn nested(&mut self, parse: fn(&mut Self) -> Classified<f64>) -> Classified<f64> {
        if self.depth >= MAX_EXPR_DEPTH {
            return Err("expression nested too deeply".into());
        }
        self.depth += 1;
        let value = parse(self);
        self.depth -= 1;
        value
    }
}

fn register(quantum: bool, name: String, size: u32) -> Classified<Statement> {
    if size == 0 {
        return Err(format!("register '{name}' must have at least one element"));
    }
    if size > MAX_REGISTER_SIZE {
        return Err(format!(
            "register '{name}' has {size} elements, more than the supported {MAX_REGISTER_SIZE}"
        ));
    }
    Ok(if quantum {
        Statement::QubitRegister { name, size }
    } else {
        Statement::ClassicalRegister { name, size }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn op(register: &str, index: u32) -> Operand {
        Operand {
            register: register.into(),
            index: Some(index),
        }
    }

    fn params_of(text: &str) -> Vec<f64> {
        match classify(text) {
            Statement::GateCall { params, .. } => params,
            other => panic!("expected gate call, got {other:?}"),
        }
    }

    #[test]
    fn test_header_and_include() {
        assert_eq!(
            classify("OPENQASM 2.0"),
            Statement::Header {
                version: "2.0".into()
            }
        );
        assert_eq!(
            classify("include \"qelib1.inc\""),
            Statement::Include {
                path: "qelib1.inc".into()
            }
        );
    }

    #[test]
    fn test_register_forms() {
        assert_eq!(
            classify("qreg q[3]"),
            Statement::QubitRegister {
                name: "q".into(),
                size: 3
            }
        );
        assert_eq!(
            classify("qubit[4] q"),
            Statement::QubitRegister {
                name: "q".into(),
                size: 4
            }
        );
        assert_eq!(
            classify("bit[2] c"),
            Statement::ClassicalRegister {
                name: "c".into(),
                size: 2
            }
        );
        assert!(matches!(
            classify("qreg q[0]"),
            Statement::Unrecognized { .. }
        ));
        assert!(matches!(
            classify("qreg q[4000000000]"),
            Statement::Unrecognized { .. }
        ));
    }

    #[test]
    fn test_measure_forms() {
        let expected = Statement::Measure {
            qubit: op("q", 1),
            clbit: op("c", 0),
        };
        assert_eq!(classify("measure q[1] -> c[0]"), expected);
        assert_eq!(classify("c[0] = measure q[1]"), expected);

        let batched = classify("measure q -> c");
        assert!(matches!(
            batched,
            Statement::Measure { ref qubit, .. } if qubit.index.is_none()
        ));
    }

    #[test]
    fn test_gate_call_operands() {
        assert_eq!(
            classify("cx q[0],q[1]"),
            Statement::GateCall {
                name: "cx".into(),
                params: vec![],
                operands: vec![op("q", 0), op("q", 1)],
            }
        );
    }

    #[test]
    fn test_angle_expressions() {
        assert!((params_of("rz(0.7854) q[0]")[0] - 0.7854).abs() < 1e-12);
        assert!((params_of("rz(-pi/2) q[0]")[0] + PI / 2.0).abs() < 1e-12);
        assert!((params_of("rz(2*pi) q[0]")[0] - 2.0 * PI).abs() < 1e-12);
        assert!((params_of("rz(pi/4 + pi/4) q[0]")[0] - PI / 2.0).abs() < 1e-12);
        assert_eq!(params_of("u(1, 2, 3) q[0]"), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_division_by_zero_is_unrecognized() {
        assert!(matches!(
            classify("rz(1/0) q[0]"),
            Statement::Unrecognized { .. }
        ));
    }

    #[test]
    fn test_nesting_within_limit() {
        let text = format!("rz({}pi{}) q[0]", "(".repeat(32), ")".repeat(32));
        assert!((params_of(&text)[0] - PI).abs() < 1e-12);
        assert!((params_of("rz(--+-1) q[0]")[0] + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_deep_nesting_is_unrecognized() {
        let parens = format!("rz({}1{}) q[0]", "(".repeat(10_000), ")".repeat(10_000));
        let signs = format!("rz({}1) q[0]", "-".repeat(10_000));
        for text in [parens, signs] {
            assert_eq!(
                classify(&text),
                Statement::Unrecognized {
                    reason: "expression nested too deeply".into()
                }
            );
        }
    }

    #[test]
    fn test_malformed_statements() {
        for text in ["h", "h q[", "if (c==1) x q[0]", "measure q[0]", "h q[0] q[1]"] {
            assert!(
                matches!(classify(text), Statement::Unrecognized { .. }),
                "{text} should be unrecognized"
            );
        }
    }
}
