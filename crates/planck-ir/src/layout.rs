//! Greedy time-column scheduling.
//!
//! Each gate is placed in the earliest column after every gate already
//! placed on any qubit it touches. Gates on disjoint qubits may share a
//! column. There is no reordering: the result depends only on program order
//! and on the qubit sets each gate touches.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::gate::Gate;
use crate::qubit::QubitId;

/// Column assignment for a gate list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layout {
    /// Column of each gate, indexed like the input gate list.
    times: Vec<usize>,
    /// Number of columns used.
    depth: usize,
}

impl Layout {
    /// Schedule `gates` in program order.
    ///
    /// Runs in O(gates × qubits-per-gate). Qubits outside the declared
    /// register are scheduled like any other; range checking belongs to
    /// [`Circuit::validate`](crate::Circuit::validate).
    pub fn of(gates: &[Gate]) -> Self {
        let mut next_free: FxHashMap<QubitId, usize> = FxHashMap::default();
        let mut times = Vec::with_capacity(gates.len());

        for gate in gates {
            // Must be after all operations on its qubits
            let time = gate
                .qubits()
                .map(|q| next_free.get(&q).copied().unwrap_or(0))
                .max()
                .unwrap_or(0);

            for q in gate.qubits() {
                next_free.insert(q, time + 1);
            }
            times.push(time);
        }

        let depth = next_free.values().copied().max().unwrap_or(0);
        tracing::trace!(gates = gates.len(), depth, "scheduled gate list");

        Self { times, depth }
    }

    /// Column of the gate at `index` in program order.
    pub fn time(&self, index: usize) -> Option<usize> {
        self.times.get(index).copied()
    }

    /// Columns of all gates, in program order.
    pub fn times(&self) -> &[usize] {
        &self.times
    }

    /// Number of distinct columns needed.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Highest column any gate occupies, `None` for an empty gate list.
    pub fn max_column(&self) -> Option<usize> {
        self.times.iter().copied().max()
    }

    /// Gate indices grouped by column, each group in program order.
    pub fn layers(&self) -> Vec<Vec<usize>> {
        let mut layers: Vec<Vec<usize>> = vec![Vec::new(); self.depth];
        for (index, &time) in self.times.iter().enumerate() {
            layers[time].push(index);
        }
        layers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::GateKind;

    fn h(q: u32) -> Gate {
        Gate::single(GateKind::H, QubitId(q))
    }

    fn cx(c: u32, t: u32) -> Gate {
        Gate::new(GateKind::CX, [QubitId(t)], Some(QubitId(c))).unwrap()
    }

    #[test]
    fn test_empty_gate_list() {
        let layout = Layout::of(&[]);
        assert_eq!(layout.depth(), 0);
        assert!(layout.times().is_empty());
        assert_eq!(layout.max_column(), None);
        assert!(layout.layers().is_empty());
    }

    #[test]
    fn test_disjoint_gates_share_column() {
        let layout = Layout::of(&[h(0), h(1)]);
        assert_eq!(layout.times(), &[0, 0]);
        assert_eq!(layout.depth(), 1);
    }

    #[test]
    fn test_shared_qubit_orders_gates() {
        let layout = Layout::of(&[h(0), cx(0, 1), h(1), h(2)]);
        assert_eq!(layout.times(), &[0, 1, 2, 0]);
        assert_eq!(layout.depth(), 3);
    }

    #[test]
    fn test_control_qubit_counts_as_touched() {
        // The cx waits on qubit 0 even though it only targets qubit 2.
        let layout = Layout::of(&[h(0), h(0), cx(0, 2)]);
        assert_eq!(layout.time(2), Some(2));
    }

    #[test]
    fn test_layers_group_by_column() {
        let layout = Layout::of(&[h(0), h(1), cx(0, 1), h(2)]);
        assert_eq!(layout.layers(), vec![vec![0, 1, 3], vec![2]]);
    }

    #[test]
    fn test_out_of_range_qubit_is_scheduled() {
        let layout = Layout::of(&[h(0), h(40)]);
        assert_eq!(layout.times(), &[0, 0]);
    }
}
