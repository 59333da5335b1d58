// SPDX-License-Identifier: Apache-2.0

//! Canonical-class index over the library.
//!
//! Every library node is simulated over the four primary inputs. A node whose
//! function is an NPN representative is registered under that function; a node
//! whose complemented function is a representative is registered, as a
//! complemented signal, under the complement. All other nodes are skipped: the
//! same class is reached through some other node or not at all.

use std::collections::HashMap;

use crate::network::LibraryNetwork;
use crate::npn::CanonTable;
use crate::tt::TruthTable16;

/// Simulates every node of `ntk`, indexed by `node_to_index`.
///
/// Primary input `i` is variable `i`; primary inputs past the fourth have no
/// 4-input projection and simulate as constant false.
pub fn simulate_nodes<N: LibraryNetwork>(ntk: &N) -> Vec<TruthTable16> {
    let mut values = vec![TruthTable16::const0(); ntk.size()];
    for node in ntk.nodes() {
        let index = ntk.node_to_index(node);
        let tt = if ntk.is_constant(node) {
            TruthTable16::const0()
        } else if let Some(pi) = ntk.pi_index(node) {
            if pi < 4 {
                TruthTable16::var(pi)
            } else {
                TruthTable16::const0()
            }
        } else {
            let fanins = ntk.fanins(node);
            debug_assert_eq!(fanins.len(), 2, "gate {:?} must have two fanins", node);
            let operand = |s: N::Signal| {
                let fanin_index = ntk.node_to_index(ntk.get_node(s));
                values[fanin_index].negate_if(ntk.is_complemented(s))
            };
            let a = operand(fanins[0]);
            let b = operand(fanins[1]);
            if ntk.is_xor(node) { a.xor(b) } else { a.and(b) }
        };
        values[index] = tt;
    }
    values
}

/// Simulates a single signal of `ntk`.
pub fn simulate_signal<N: LibraryNetwork>(ntk: &N, s: N::Signal) -> TruthTable16 {
    let values = simulate_nodes(ntk);
    values[ntk.node_to_index(ntk.get_node(s))].negate_if(ntk.is_complemented(s))
}

/// Mapping from NPN representative to the library signals computing it.
#[derive(Debug, Clone)]
pub struct ClassIndex<S> {
    classes: HashMap<TruthTable16, Vec<S>>,
}

impl<S: Copy> ClassIndex<S> {
    /// Classifies every node of `db`, in node order.
    pub fn build<N>(db: &N, canon: &CanonTable) -> Self
    where
        N: LibraryNetwork<Signal = S>,
    {
        let sim = simulate_nodes(db);
        let mut classes: HashMap<TruthTable16, Vec<S>> = HashMap::new();
        for node in db.nodes() {
            let tt = sim[db.node_to_index(node)];
            if canon.is_representative(tt) {
                classes.entry(tt).or_default().push(db.make_signal(node));
            } else if canon.is_representative(tt.not()) {
                classes
                    .entry(tt.not())
                    .or_default()
                    .push(db.negate(db.make_signal(node)));
            }
        }
        log::debug!(
            "ClassIndex::build: nodes={} covered_classes={}",
            db.size(),
            classes.len()
        );
        Self { classes }
    }

    /// Library signals realizing `representative`, in discovery order.
    pub fn get(&self, representative: TruthTable16) -> Option<&[S]> {
        self.classes.get(&representative).map(|v| v.as_slice())
    }

    pub fn covered_classes(&self) -> usize {
        self.classes.len()
    }

    /// Total number of registered signals across all classes.
    pub fn num_signals(&self) -> usize {
        self.classes.values().map(|v| v.len()).sum()
    }

    /// Covered representatives in ascending order.
    pub fn representatives(&self) -> Vec<TruthTable16> {
        let mut keys: Vec<TruthTable16> = self.classes.keys().copied().collect();
        keys.sort();
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::index_list::{IndexListBuilder, decode};
    use crate::library::xag::{Xag, XagSignal};
    use pretty_assertions::assert_eq;

    fn and_or_library() -> Xag {
        let mut b = IndexListBuilder::new(4);
        let x0 = b.pi_literal(0);
        let x1 = b.pi_literal(1);
        // AND(x0, x1) and OR(x0, x1) = !AND(!x0, !x1).
        b.add_and(x0, x1);
        b.add_and(x0 ^ 1, x1 ^ 1);
        decode(b.build().raw()).unwrap()
    }

    #[test]
    fn test_simulate_nodes() {
        let xag = and_or_library();
        let sim = simulate_nodes(&xag);
        assert_eq!(sim.len(), 7);
        assert_eq!(sim[0], TruthTable16::const0());
        assert_eq!(sim[1], TruthTable16::var(0));
        assert_eq!(sim[4], TruthTable16::var(3));
        assert_eq!(sim[5], TruthTable16(0x8888));
        assert_eq!(sim[6], TruthTable16(0x1111));
    }

    #[test]
    fn test_registered_signals_compute_their_class() {
        let xag = and_or_library();
        let canon = CanonTable::shared();
        let index = ClassIndex::build(&xag, canon);
        for key in index.representatives() {
            for &s in index.get(key).unwrap() {
                assert_eq!(simulate_signal(&xag, s), key);
            }
        }
    }

    #[test]
    fn test_tiny_library_classes() {
        let xag = and_or_library();
        let index = ClassIndex::build(&xag, CanonTable::shared());
        // Constant node under 0x0000; x3 complemented under 0x00FF. x0..x2 are
        // neither representatives nor complements of one. Both gates land in
        // the AND class, which is not a representative itself (0x000F is), so
        // neither is registered.
        assert_eq!(
            index.representatives(),
            vec![TruthTable16(0x0000), TruthTable16(0x00FF)]
        );
        assert_eq!(index.get(TruthTable16(0x0000)), Some(&[XagSignal::new(0, false)][..]));
        assert_eq!(index.get(TruthTable16(0x00FF)), Some(&[XagSignal::new(4, true)][..]));
        assert_eq!(index.get(TruthTable16(0x000F)), None);
    }

    #[test]
    fn test_representative_gate_is_registered() {
        // AND(!x2, !x3) is exactly the AND-class representative 0x000F.
        let mut b = IndexListBuilder::new(4);
        let x2 = b.pi_literal(2);
        let x3 = b.pi_literal(3);
        b.add_and(x2 ^ 1, x3 ^ 1);
        // AND(!x2, x3) is in the same class, but neither it nor its complement
        // is the representative.
        b.add_and(x2 ^ 1, x3);
        let xag: Xag = decode(b.build().raw()).unwrap();
        let index = ClassIndex::build(&xag, CanonTable::shared());
        assert_eq!(
            index.get(TruthTable16(0x000F)),
            Some(&[XagSignal::new(5, false)][..])
        );
        assert_eq!(index.num_signals(), 3);
    }
}
