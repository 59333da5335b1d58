// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;

use bitvec::vec::BitVec;

use crate::aig::gate::{AigNode, AigOperand, AigRef, GateFn, Input};
use crate::tt::TruthTable16;

pub struct GateSimResult {
    pub outputs: Vec<bool>,
    /// Value of every node, indexed by `AigRef::id`.
    pub all_values: BitVec,
}

/// Evaluates `gate_fn` on one input assignment.
///
/// Gates are stored in creation order, so a single forward pass sees every
/// fanin before its fanout.
pub fn eval(gate_fn: &GateFn, inputs: &[bool]) -> GateSimResult {
    assert_eq!(
        inputs.len(),
        gate_fn.inputs.len(),
        "eval: expected {} input values",
        gate_fn.inputs.len()
    );
    let seeded: HashMap<AigRef, bool> = gate_fn
        .inputs
        .iter()
        .zip(inputs)
        .map(|(input, value)| (input.operand.node, *value ^ input.operand.negated))
        .collect();
    let mut all_values = BitVec::repeat(false, gate_fn.gates.len());
    for (id, node) in gate_fn.gates.iter().enumerate() {
        let value = match node {
            AigNode::Literal(value) => *value,
            AigNode::Input { .. } => seeded.get(&AigRef { id }).copied().unwrap_or(false),
            AigNode::And2 { a, b } => {
                let operand = |op: &AigOperand| all_values[op.node.id] ^ op.negated;
                operand(a) && operand(b)
            }
        };
        all_values.set(id, value);
    }
    let outputs = gate_fn
        .outputs
        .iter()
        .map(|o| all_values[o.operand.node.id] ^ o.operand.negated)
        .collect();
    GateSimResult {
        outputs,
        all_values,
    }
}

/// Bit-parallel simulation of `operand` where input `i` of `inputs` carries
/// the function `leaves[i]`. Inputs without a leaf simulate as constant false.
pub fn simulate_tt16(
    gates: &[AigNode],
    inputs: &[Input],
    leaves: &[TruthTable16],
    operand: AigOperand,
) -> TruthTable16 {
    let bound: HashMap<AigRef, TruthTable16> = inputs
        .iter()
        .zip(leaves)
        .map(|(input, tt)| (input.operand.node, tt.negate_if(input.operand.negated)))
        .collect();
    let mut values: Vec<TruthTable16> = Vec::with_capacity(operand.node.id + 1);
    for (id, node) in gates[..=operand.node.id].iter().enumerate() {
        let tt = match node {
            AigNode::Literal(value) => TruthTable16::const0().negate_if(*value),
            AigNode::Input { .. } => bound
                .get(&AigRef { id })
                .copied()
                .unwrap_or_else(TruthTable16::const0),
            AigNode::And2 { a, b } => values[a.node.id]
                .negate_if(a.negated)
                .and(values[b.node.id].negate_if(b.negated)),
        };
        values.push(tt);
    }
    values[operand.node.id].negate_if(operand.negated)
}
