// SPDX-License-Identifier: Apache-2.0

//! XOR-AND graph (XAG) used to hold the circuit library.
//!
//! Node 0 is the constant-false node; primary inputs and two-input AND/XOR
//! gates follow in creation order. Edges carry a complement flag, so inverters
//! are free.
//!
//! Gate creation folds trivial cases and structurally hashes the rest:
//! - AND fanins are ordered; `a & a = a`, `a & !a = 0`, `0 & b = 0`,
//!   `1 & b = b`.
//! - XOR fanin complements are moved to the output; `a ^ a = 0`, `0 ^ b = b`.
//! - An AND/XOR with the same (normalized) fanins as an existing gate returns
//!   the existing gate.

use std::collections::HashMap;

use crate::network::{LibraryNetwork, ResynNetwork};

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct XagRef {
    pub id: usize,
}

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct XagSignal {
    pub node: XagRef,
    pub negated: bool,
}

impl XagSignal {
    pub const fn new(id: usize, negated: bool) -> Self {
        Self {
            node: XagRef { id },
            negated,
        }
    }

    #[must_use]
    pub fn negate(&self) -> Self {
        Self {
            node: self.node,
            negated: !self.negated,
        }
    }

    #[must_use]
    pub fn negate_if(&self, negated: bool) -> Self {
        Self {
            node: self.node,
            negated: self.negated ^ negated,
        }
    }

    fn regular(&self) -> Self {
        Self {
            node: self.node,
            negated: false,
        }
    }
}

impl From<XagRef> for XagSignal {
    fn from(node: XagRef) -> Self {
        XagSignal {
            node,
            negated: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum XagNode {
    Constant,
    Input { index: usize },
    And2 { a: XagSignal, b: XagSignal },
    Xor2 { a: XagSignal, b: XagSignal },
}

impl XagNode {
    pub fn get_operands(&self) -> Vec<XagSignal> {
        match self {
            XagNode::Constant | XagNode::Input { .. } => vec![],
            XagNode::And2 { a, b } | XagNode::Xor2 { a, b } => vec![*a, *b],
        }
    }
}

#[derive(Debug, Clone)]
pub struct Xag {
    nodes: Vec<XagNode>,
    inputs: Vec<XagRef>,
    outputs: Vec<XagSignal>,
    strash: HashMap<XagNode, XagRef>,
}

impl Default for Xag {
    fn default() -> Self {
        Self::new()
    }
}

impl Xag {
    pub fn new() -> Self {
        Self {
            nodes: vec![XagNode::Constant],
            inputs: Vec::new(),
            outputs: Vec::new(),
            strash: HashMap::new(),
        }
    }

    pub fn get_false(&self) -> XagSignal {
        XagSignal::new(0, false)
    }

    pub fn get_true(&self) -> XagSignal {
        XagSignal::new(0, true)
    }

    pub fn get(&self, node: XagRef) -> &XagNode {
        &self.nodes[node.id]
    }

    pub fn inputs(&self) -> &[XagRef] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[XagSignal] {
        &self.outputs
    }

    /// Number of AND and XOR gates.
    pub fn num_gates(&self) -> usize {
        self.nodes.len() - 1 - self.inputs.len()
    }

    pub fn add_input(&mut self) -> XagSignal {
        let node = XagRef {
            id: self.nodes.len(),
        };
        self.nodes.push(XagNode::Input {
            index: self.inputs.len(),
        });
        self.inputs.push(node);
        node.into()
    }

    fn hash_or_insert(&mut self, gate: XagNode) -> XagRef {
        if let Some(existing) = self.strash.get(&gate) {
            return *existing;
        }
        let gate_ref = XagRef {
            id: self.nodes.len(),
        };
        self.nodes.push(gate);
        self.strash.insert(gate, gate_ref);
        gate_ref
    }

    pub fn add_and_binary(&mut self, lhs: XagSignal, rhs: XagSignal) -> XagSignal {
        let (a, b) = if lhs <= rhs { (lhs, rhs) } else { (rhs, lhs) };
        if a.node == b.node {
            return if a.negated == b.negated {
                a
            } else {
                self.get_false()
            };
        }
        // Ordering puts the constant node first.
        if a.node.id == 0 {
            return if a.negated { b } else { self.get_false() };
        }
        self.hash_or_insert(XagNode::And2 { a, b }).into()
    }

    pub fn add_xor_binary(&mut self, lhs: XagSignal, rhs: XagSignal) -> XagSignal {
        let negated = lhs.negated ^ rhs.negated;
        let (a, b) = if lhs.node <= rhs.node {
            (lhs.regular(), rhs.regular())
        } else {
            (rhs.regular(), lhs.regular())
        };
        if a.node == b.node {
            return XagSignal::new(0, negated);
        }
        if a.node.id == 0 {
            return b.negate_if(negated);
        }
        let node = self.hash_or_insert(XagNode::Xor2 { a, b });
        XagSignal {
            node,
            negated,
        }
    }

    pub fn add_output(&mut self, s: XagSignal) {
        debug_assert!(
            s.node.id < self.nodes.len(),
            "add_output: node index out of bounds: {} (nodes.len() = {})",
            s.node.id,
            self.nodes.len()
        );
        self.outputs.push(s);
    }
}

impl LibraryNetwork for Xag {
    type Node = XagRef;
    type Signal = XagSignal;

    fn size(&self) -> usize {
        self.nodes.len()
    }

    fn num_pis(&self) -> usize {
        self.inputs.len()
    }

    fn get_constant(&self, value: bool) -> XagSignal {
        XagSignal::new(0, value)
    }

    fn create_pi(&mut self) -> XagSignal {
        self.add_input()
    }

    fn create_and(&mut self, a: XagSignal, b: XagSignal) -> XagSignal {
        self.add_and_binary(a, b)
    }

    fn create_xor(&mut self, a: XagSignal, b: XagSignal) -> XagSignal {
        self.add_xor_binary(a, b)
    }

    fn create_po(&mut self, s: XagSignal) {
        self.add_output(s)
    }

    fn negate(&self, s: XagSignal) -> XagSignal {
        s.negate()
    }

    fn get_node(&self, s: XagSignal) -> XagRef {
        s.node
    }

    fn make_signal(&self, n: XagRef) -> XagSignal {
        n.into()
    }

    fn is_complemented(&self, s: XagSignal) -> bool {
        s.negated
    }

    fn is_constant(&self, n: XagRef) -> bool {
        matches!(self.nodes[n.id], XagNode::Constant)
    }

    fn pi_index(&self, n: XagRef) -> Option<usize> {
        match self.nodes[n.id] {
            XagNode::Input { index } => Some(index),
            _ => None,
        }
    }

    fn pi_at(&self, index: usize) -> XagRef {
        self.inputs[index]
    }

    fn is_xor(&self, n: XagRef) -> bool {
        matches!(self.nodes[n.id], XagNode::Xor2 { .. })
    }

    fn fanins(&self, n: XagRef) -> Vec<XagSignal> {
        self.nodes[n.id].get_operands()
    }

    fn node_to_index(&self, n: XagRef) -> usize {
        n.id
    }

    fn nodes(&self) -> Vec<XagRef> {
        (0..self.nodes.len()).map(|id| XagRef { id }).collect()
    }
}

/// An XAG is also a valid target: candidates keep their XOR gates instead of
/// being expanded into ANDs.
impl ResynNetwork for Xag {
    type Signal = XagSignal;

    fn get_constant(&self, value: bool) -> XagSignal {
        XagSignal::new(0, value)
    }

    fn create_and(&mut self, a: XagSignal, b: XagSignal) -> XagSignal {
        self.add_and_binary(a, b)
    }

    fn create_xor(&mut self, a: XagSignal, b: XagSignal) -> XagSignal {
        self.add_xor_binary(a, b)
    }

    fn create_not(&mut self, a: XagSignal) -> XagSignal {
        a.negate()
    }
}
