//! Generator parameters.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::catalogue::{Algorithm, Template};

/// Smallest register any template is built on.
pub const MIN_QUBITS: u32 = 2;

/// Caller-supplied knobs for a template generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateParams {
    /// Size of the problem; the register gets `ceil(log2(num_items))` qubits.
    pub num_items: Option<u64>,
    /// Explicit register size, overriding `num_items`.
    pub qubits: Option<u32>,
    /// Seed for rotation angles. Without one, angles come from entropy.
    pub seed: Option<u64>,
}

impl TemplateParams {
    /// Parameters with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Register size for `template`.
    ///
    /// Bell is always two qubits and Shor never fewer than its catalogue
    /// minimum.
    pub fn qubit_count(&self, template: &Template) -> u32 {
        let requested = match (self.qubits, self.num_items) {
            (Some(qubits), _) => qubits,
            (None, Some(items)) => qubits_for_items(items),
            (None, None) => template.min_qubits,
        };

        match template.algorithm {
            Algorithm::Bell => 2,
            Algorithm::Shor => requested.max(template.min_qubits),
            _ => requested.max(MIN_QUBITS),
        }
    }

    pub(crate) fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// `max(2, ceil(log2(items)))`.
fn qubits_for_items(items: u64) -> u32 {
    if items <= 1 {
        return MIN_QUBITS;
    }
    let bits = u64::BITS - (items - 1).leading_zeros();
    bits.max(MIN_QUBITS)
}
