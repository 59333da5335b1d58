// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;
use std::fmt;

use crate::aig::topo::postorder_for_aig_refs_node_only;

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct AigRef {
    pub id: usize,
}

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct AigOperand {
    pub node: AigRef,
    pub negated: bool,
}

impl AigOperand {
    #[must_use]
    pub fn negate(&self) -> Self {
        Self {
            node: self.node,
            negated: !self.negated,
        }
    }

    pub fn non_negated(&self) -> Option<AigRef> {
        if self.negated { None } else { Some(self.node) }
    }
}

impl From<AigRef> for AigOperand {
    fn from(node: AigRef) -> Self {
        AigOperand {
            node,
            negated: false,
        }
    }
}

impl From<&AigRef> for AigOperand {
    fn from(node: &AigRef) -> Self {
        AigOperand {
            node: *node,
            negated: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AigNode {
    Input { name: String },
    Literal(bool),
    And2 { a: AigOperand, b: AigOperand },
}

impl AigNode {
    pub fn get_operands(&self) -> Vec<AigOperand> {
        match self {
            AigNode::Input { .. } => vec![],
            AigNode::Literal(_) => vec![],
            AigNode::And2 { a, b } => vec![*a, *b],
        }
    }

    pub fn get_args(&self) -> Vec<AigRef> {
        match self {
            AigNode::Input { .. } => vec![],
            AigNode::Literal(_) => vec![],
            AigNode::And2 { a, b } => vec![a.node, b.node],
        }
    }
}

/// A single-bit primary input.
#[derive(Debug, Clone)]
pub struct Input {
    pub name: String,
    pub operand: AigOperand,
}

/// A single-bit primary output; references from the AIG can be negated.
#[derive(Debug, Clone)]
pub struct Output {
    pub name: String,
    pub operand: AigOperand,
}

#[derive(Debug, Clone)]
pub struct GateFn {
    pub name: String,
    pub inputs: Vec<Input>,
    pub outputs: Vec<Output>,
    pub gates: Vec<AigNode>,
}

impl GateFn {
    pub fn get(&self, aig_ref: AigRef) -> &AigNode {
        &self.gates[aig_ref.id]
    }

    /// Nodes reachable from the outputs, in post-order.
    pub fn live_nodes(&self) -> Vec<AigRef> {
        let starts: Vec<AigRef> = self.outputs.iter().map(|o| o.operand.node).collect();
        postorder_for_aig_refs_node_only(&starts, &self.gates, &HashMap::<AigRef, ()>::new())
    }

    /// Number of AND gates reachable from the outputs.
    pub fn live_and_count(&self) -> usize {
        self.live_nodes()
            .into_iter()
            .filter(|r| matches!(self.gates[r.id], AigNode::And2 { .. }))
            .count()
    }

    fn operand_to_string(&self, operand: &AigOperand) -> String {
        let base = match &self.gates[operand.node.id] {
            AigNode::Input { name } => name.clone(),
            AigNode::Literal(value) => return format!("{}", *value ^ operand.negated),
            AigNode::And2 { .. } => format!("%{}", operand.node.id),
        };
        if operand.negated {
            format!("not({})", base)
        } else {
            base
        }
    }
}

impl fmt::Display for GateFn {
    /// Emits live gates in post-order, then the output assignments.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inputs = self
            .inputs
            .iter()
            .map(|i| i.name.clone())
            .collect::<Vec<String>>()
            .join(", ");
        let outputs = self
            .outputs
            .iter()
            .map(|o| o.name.clone())
            .collect::<Vec<String>>()
            .join(", ");
        writeln!(f, "fn {}({}) -> ({}) {{", self.name, inputs, outputs)?;
        for aig_ref in self.live_nodes() {
            if let AigNode::And2 { a, b } = &self.gates[aig_ref.id] {
                writeln!(
                    f,
                    "  %{} = and({}, {})",
                    aig_ref.id,
                    self.operand_to_string(a),
                    self.operand_to_string(b)
                )?;
            }
        }
        for output in &self.outputs {
            writeln!(
                f,
                "  {} = {}",
                output.name,
                self.operand_to_string(&output.operand)
            )?;
        }
        write!(f, "}}")
    }
}
