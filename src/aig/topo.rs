// SPDX-License-Identifier: Apache-2.0

use crate::aig::gate::{AigNode, AigRef};
use std::collections::{HashMap, HashSet};

/// Post-order over the fanin cones of `aig_refs`, visiting each node once
/// regardless of the complement on the edges reaching it.
///
/// Nodes present in `cache` are treated as already visited and are not
/// emitted.
pub fn postorder_for_aig_refs_node_only(
    aig_refs: &[AigRef],
    nodes: &[AigNode],
    cache: &HashMap<AigRef, impl Sized>,
) -> Vec<AigRef> {
    let mut order = Vec::new();
    let mut emitted: HashSet<AigRef> = HashSet::new();
    // Each entry is a node and whether its fanins were already pushed.
    let mut stack: Vec<(AigRef, bool)> = aig_refs.iter().rev().map(|r| (*r, false)).collect();
    while let Some((node, expanded)) = stack.pop() {
        if cache.contains_key(&node) || emitted.contains(&node) {
            continue;
        }
        if expanded {
            emitted.insert(node);
            order.push(node);
            continue;
        }
        stack.push((node, true));
        for fanin in nodes[node.id].get_args().into_iter().rev() {
            if !cache.contains_key(&fanin) && !emitted.contains(&fanin) {
                stack.push((fanin, false));
            }
        }
    }
    order
}
