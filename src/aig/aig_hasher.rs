// SPDX-License-Identifier: Apache-2.0

//! Structural hashing for AIG nodes.
//!
//! Each node gets a blake3 digest over its kind and the (complement-adjusted,
//! order-normalized) digests of its fanins, plus its logic depth. Feeding a
//! freshly pushed gate returns an already-known equivalent when one exists at
//! the same or smaller depth.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::aig::gate::{AigNode, AigOperand, AigRef};
use crate::aig::topo::postorder_for_aig_refs_node_only;

const TAG_AND: u8 = 0;
const TAG_INPUT: u8 = 1;
const TAG_LITERAL: u8 = 2;

static FALSE_DIGEST: Lazy<blake3::Hash> = Lazy::new(|| literal_digest(false));
static TRUE_DIGEST: Lazy<blake3::Hash> = Lazy::new(|| literal_digest(true));

fn literal_digest(value: bool) -> blake3::Hash {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&[TAG_LITERAL, value as u8]);
    hasher.finalize()
}

#[derive(Debug, Clone, Copy)]
struct NodeSummary {
    depth: usize,
    digest: blake3::Hash,
}

#[derive(Default)]
pub struct AigHasher {
    /// Shallowest known node for each digest.
    shallowest: HashMap<blake3::Hash, (usize, AigRef)>,
    summaries: HashMap<AigRef, NodeSummary>,
}

impl AigHasher {
    pub fn new() -> Self {
        Self::default()
    }

    fn operand_bytes(&self, operand: &AigOperand) -> [u8; 32] {
        let mut bytes = *self.summaries[&operand.node].digest.as_bytes();
        if operand.negated {
            bytes[0] ^= 1;
        }
        bytes
    }

    fn summarize(&self, aig_ref: AigRef, node: &AigNode) -> NodeSummary {
        match node {
            AigNode::Literal(value) => NodeSummary {
                depth: 0,
                digest: if *value { *TRUE_DIGEST } else { *FALSE_DIGEST },
            },
            AigNode::Input { .. } => {
                // Inputs are distinct even when they share a name.
                let mut hasher = blake3::Hasher::new();
                hasher.update(&[TAG_INPUT]);
                hasher.update(&(aig_ref.id as u64).to_le_bytes());
                NodeSummary {
                    depth: 0,
                    digest: hasher.finalize(),
                }
            }
            AigNode::And2 { a, b } => {
                let a_bytes = self.operand_bytes(a);
                let b_bytes = self.operand_bytes(b);
                let (lo, hi) = if a_bytes <= b_bytes {
                    (a_bytes, b_bytes)
                } else {
                    (b_bytes, a_bytes)
                };
                let mut hasher = blake3::Hasher::new();
                hasher.update(&[TAG_AND]);
                hasher.update(&lo);
                hasher.update(&hi);
                let depth = self.summaries[&a.node]
                    .depth
                    .max(self.summaries[&b.node].depth)
                    + 1;
                NodeSummary {
                    depth,
                    digest: hasher.finalize(),
                }
            }
        }
    }

    /// Returns the depth and digest of `aig_ref`, summarizing any fanin cone
    /// not seen before.
    pub fn get_depth_and_hash(
        &mut self,
        aig_ref: &AigRef,
        nodes: &[AigNode],
    ) -> (usize, blake3::Hash) {
        if !self.summaries.contains_key(aig_ref) {
            let postorder = postorder_for_aig_refs_node_only(&[*aig_ref], nodes, &self.summaries);
            for current in postorder {
                let summary = self.summarize(current, &nodes[current.id]);
                self.summaries.insert(current, summary);
            }
        }
        let summary = self.summaries[aig_ref];
        (summary.depth, summary.digest)
    }

    /// Registers `aig_ref`; returns an equivalent, no-deeper node if one was
    /// registered before.
    pub fn feed_ref(&mut self, aig_ref: &AigRef, nodes: &[AigNode]) -> Option<AigRef> {
        let (depth, digest) = self.get_depth_and_hash(aig_ref, nodes);
        match self.shallowest.get(&digest) {
            Some(&(known_depth, known_ref)) if known_depth <= depth => Some(known_ref),
            _ => {
                self.shallowest.insert(digest, (depth, *aig_ref));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn input(name: &str) -> AigNode {
        AigNode::Input {
            name: name.to_string(),
        }
    }

    #[test]
    fn test_commuted_and_hashes_equal() {
        let a = AigRef { id: 1 };
        let b = AigRef { id: 2 };
        let nodes = vec![
            AigNode::Literal(false),
            input("a"),
            input("b"),
            AigNode::And2 {
                a: a.into(),
                b: AigOperand::from(b).negate(),
            },
            AigNode::And2 {
                a: AigOperand::from(b).negate(),
                b: a.into(),
            },
        ];
        let mut hasher = AigHasher::new();
        assert_eq!(hasher.feed_ref(&AigRef { id: 3 }, &nodes), None);
        assert_eq!(hasher.feed_ref(&AigRef { id: 4 }, &nodes), Some(AigRef { id: 3 }));
        assert_eq!(hasher.get_depth_and_hash(&AigRef { id: 4 }, &nodes).0, 1);
    }

    #[test]
    fn test_negation_changes_hash() {
        let a = AigRef { id: 1 };
        let b = AigRef { id: 2 };
        let nodes = vec![
            AigNode::Literal(false),
            input("a"),
            input("b"),
            AigNode::And2 {
                a: a.into(),
                b: b.into(),
            },
            AigNode::And2 {
                a: AigOperand::from(a).negate(),
                b: b.into(),
            },
        ];
        let mut hasher = AigHasher::new();
        let (_, h3) = hasher.get_depth_and_hash(&AigRef { id: 3 }, &nodes);
        let (_, h4) = hasher.get_depth_and_hash(&AigRef { id: 4 }, &nodes);
        assert_ne!(h3, h4);
    }

    #[test]
    fn test_same_named_inputs_stay_distinct() {
        let nodes = vec![AigNode::Literal(false), input("x"), input("x")];
        let mut hasher = AigHasher::new();
        assert_eq!(hasher.feed_ref(&AigRef { id: 1 }, &nodes), None);
        assert_eq!(hasher.feed_ref(&AigRef { id: 2 }, &nodes), None);
    }

    #[test]
    fn test_deep_chain_does_not_recurse() {
        let depth = 100_000;
        let mut nodes = vec![input("a")];
        for i in 1..=depth {
            nodes.push(AigNode::And2 {
                a: AigRef { id: i - 1 }.into(),
                b: AigRef { id: 0 }.into(),
            });
        }
        let mut hasher = AigHasher::new();
        let (d, _) = hasher.get_depth_and_hash(&AigRef { id: depth }, &nodes);
        assert_eq!(d, depth);
    }
}
