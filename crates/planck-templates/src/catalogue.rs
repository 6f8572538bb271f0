//! The template catalogue.

use serde::Serialize;

use crate::error::{TemplateError, TemplateResult};

/// Algorithm family a template demonstrates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Bell,
    Grover,
    Shor,
    Vqe,
    Qaoa,
}

impl Algorithm {
    /// Lower-case algorithm name, as accepted by [`find_template`].
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Bell => "bell",
            Algorithm::Grover => "grover",
            Algorithm::Shor => "shor",
            Algorithm::Vqe => "vqe",
            Algorithm::Qaoa => "qaoa",
        }
    }
}

/// How hard the template is to follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// Format the template is published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OutputFormat {
    #[serde(rename = "QASM")]
    Qasm,
    Qiskit,
}

/// A catalogue entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub algorithm: Algorithm,
    pub description: &'static str,
    pub min_qubits: u32,
    pub difficulty: Difficulty,
    pub output_format: OutputFormat,
}

/// Every template, in display order.
pub static TEMPLATES: [Template; 5] = [
    Template {
        id: "bell-state",
        name: "Bell",
        algorithm: Algorithm::Bell,
        description: "Create an entangled quantum state for system interconnectivity and secure communication.",
        min_qubits: 2,
        difficulty: Difficulty::Beginner,
        output_format: OutputFormat::Qasm,
    },
    Template {
        id: "grovers",
        name: "Grover",
        algorithm: Algorithm::Grover,
        description: "Search unsorted databases for pattern matching and unstructured search problems.",
        min_qubits: 8,
        difficulty: Difficulty::Intermediate,
        output_format: OutputFormat::Qasm,
    },
    Template {
        id: "shors",
        name: "Shor",
        algorithm: Algorithm::Shor,
        description: "Factor large numbers for cryptanalysis and number theory research applications.",
        min_qubits: 16,
        difficulty: Difficulty::Advanced,
        output_format: OutputFormat::Qiskit,
    },
    Template {
        id: "vqe",
        name: "VQE",
        algorithm: Algorithm::Vqe,
        description: "Variational Quantum Eigensolver for finding ground state energies and optimization.",
        min_qubits: 12,
        difficulty: Difficulty::Advanced,
        output_format: OutputFormat::Qiskit,
    },
    Template {
        id: "qaoa",
        name: "QAOA",
        algorithm: Algorithm::Qaoa,
        description: "Quantum Approximate Optimization for combinatorial optimization and constraint satisfaction.",
        min_qubits: 10,
        difficulty: Difficulty::Intermediate,
        output_format: OutputFormat::Qasm,
    },
];

/// Look up a template by catalogue id (`bell-state`) or algorithm name
/// (`bell`), ignoring case and surrounding whitespace.
pub fn find_template(key: &str) -> TemplateResult<&'static Template> {
    let key = key.trim().to_ascii_lowercase();
    TEMPLATES
        .iter()
        .find(|t| t.id == key || t.algorithm.as_str() == key)
        .ok_or(TemplateError::UnknownAlgorithm(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_id_and_algorithm() {
        assert_eq!(find_template("bell-state").unwrap().algorithm, Algorithm::Bell);
        assert_eq!(find_template("grover").unwrap().id, "grovers");
        assert_eq!(find_template(" QAOA ").unwrap().name, "QAOA");
    }

    #[test]
    fn test_unknown_algorithm() {
        assert_eq!(
            find_template("teleport"),
            Err(TemplateError::UnknownAlgorithm("teleport".into()))
        );
    }

    #[test]
    fn test_ids_are_unique() {
        for (i, a) in TEMPLATES.iter().enumerate() {
            for b in &TEMPLATES[i + 1..] {
                assert_ne!(a.id, b.id);
                assert_ne!(a.algorithm, b.algorithm);
            }
        }
    }
}
