// SPDX-License-Identifier: Apache-2.0

//! `GateBuilder` accumulates an AND-inverter graph and produces a `GateFn`.
//!
//! With folding enabled, constant operands are simplified away and the
//! absorption pattern `(a | b) & b => b` is recognized. With hashing enabled,
//! structurally identical gates are shared.
//!
//! ```
//! use xag_npn::aig::{GateBuilder, GateBuilderOptions, GateFn};
//!
//! let mut builder = GateBuilder::new("and2".to_string(), GateBuilderOptions::opt());
//! let a = builder.add_input("a".to_string());
//! let b = builder.add_input("b".to_string());
//! let o = builder.add_and_binary(a, b);
//! builder.add_output("o".to_string(), o);
//! let gate_fn: GateFn = builder.build();
//! assert_eq!(gate_fn.live_and_count(), 1);
//! ```

use crate::aig::aig_hasher::AigHasher;
use crate::aig::gate::{AigNode, AigOperand, AigRef, GateFn, Input, Output};
use crate::network::ResynNetwork;

#[derive(Debug, Clone, Copy)]
pub struct GateBuilderOptions {
    pub fold: bool,
    pub hash: bool,
}

impl GateBuilderOptions {
    /// Folding and hashing enabled.
    pub fn opt() -> Self {
        Self {
            fold: true,
            hash: true,
        }
    }

    pub fn no_opt() -> Self {
        Self {
            fold: false,
            hash: false,
        }
    }
}

pub struct GateBuilder {
    pub name: String,
    pub gates: Vec<AigNode>,
    pub inputs: Vec<Input>,
    pub outputs: Vec<Output>,
    pub options: GateBuilderOptions,
    pub hasher: Option<AigHasher>,
}

impl GateBuilder {
    pub fn new(name: String, options: GateBuilderOptions) -> Self {
        Self {
            name,
            gates: vec![AigNode::Literal(false)],
            inputs: Vec::new(),
            outputs: Vec::new(),
            options,
            hasher: if options.hash {
                Some(AigHasher::new())
            } else {
                None
            },
        }
    }

    pub fn build(self) -> GateFn {
        debug_assert!(
            !self.outputs.is_empty(),
            "GateBuilder::build: graph must have at least one output"
        );
        GateFn {
            name: self.name,
            inputs: self.inputs,
            outputs: self.outputs,
            gates: self.gates,
        }
    }

    pub fn get_false(&self) -> AigOperand {
        AigOperand {
            node: AigRef { id: 0 },
            negated: false,
        }
    }

    pub fn get_true(&self) -> AigOperand {
        self.get_false().negate()
    }

    pub fn is_known_false(&self, operand: AigOperand) -> bool {
        operand.node.id == 0 && !operand.negated
    }

    pub fn is_known_true(&self, operand: AigOperand) -> bool {
        operand.node.id == 0 && operand.negated
    }

    /// Adds a single-bit primary input.
    pub fn add_input(&mut self, name: String) -> AigOperand {
        let operand: AigOperand = AigRef {
            id: self.gates.len(),
        }
        .into();
        self.gates.push(AigNode::Input { name: name.clone() });
        self.inputs.push(Input { name, operand });
        operand
    }

    pub fn add_output(&mut self, name: String, operand: AigOperand) {
        debug_assert!(
            operand.node.id < self.gates.len(),
            "add_output: node index out of bounds: {} (gates.len() = {})",
            operand.node.id,
            self.gates.len()
        );
        self.outputs.push(Output { name, operand });
    }

    /// Number of gate slots allocated so far, including any that folding or
    /// hashing left unreferenced.
    pub fn node_count(&self) -> usize {
        self.gates.len()
    }

    // Returns the operands of `a` if it reads as `x | y`, i.e. `!(!x & !y)`.
    fn as_or(&self, a: AigOperand) -> Option<(AigOperand, AigOperand)> {
        if !a.negated {
            return None;
        }
        match &self.gates[a.node.id] {
            AigNode::And2 { a, b } => Some((a.negate(), b.negate())),
            _ => None,
        }
    }

    fn absorb(&self, lhs: AigOperand, rhs: AigOperand) -> Option<AigOperand> {
        if let Some((x, y)) = self.as_or(lhs) {
            if x == rhs || y == rhs {
                return Some(rhs);
            }
        }
        if let Some((x, y)) = self.as_or(rhs) {
            if x == lhs || y == lhs {
                return Some(lhs);
            }
        }
        None
    }

    pub fn add_and_binary(&mut self, lhs: AigOperand, rhs: AigOperand) -> AigOperand {
        if self.options.fold {
            if self.is_known_false(lhs) || self.is_known_false(rhs) {
                return self.get_false();
            }
            if self.is_known_true(lhs) {
                return rhs;
            }
            if self.is_known_true(rhs) {
                return lhs;
            }
            if lhs == rhs {
                return lhs;
            }
            if lhs == rhs.negate() {
                return self.get_false();
            }
            if let Some(absorbed) = self.absorb(lhs, rhs) {
                return absorbed;
            }
        }
        let gate_ref = AigRef {
            id: self.gates.len(),
        };
        self.gates.push(AigNode::And2 { a: lhs, b: rhs });
        if let Some(hasher) = &mut self.hasher {
            if let Some(existing) = hasher.feed_ref(&gate_ref, &self.gates) {
                return existing.into();
            }
        }
        gate_ref.into()
    }

    pub fn add_not(&mut self, arg: AigOperand) -> AigOperand {
        arg.negate()
    }

    pub fn add_or_binary(&mut self, lhs: AigOperand, rhs: AigOperand) -> AigOperand {
        let and = self.add_and_binary(lhs.negate(), rhs.negate());
        self.add_not(and)
    }

    /// XOR from three ANDs: `!(!(a & !b) & !(!a & b))`.
    pub fn add_xor_binary(&mut self, lhs: AigOperand, rhs: AigOperand) -> AigOperand {
        if self.options.fold {
            if self.is_known_false(lhs) {
                return rhs;
            }
            if self.is_known_false(rhs) {
                return lhs;
            }
            if self.is_known_true(lhs) {
                return self.add_not(rhs);
            }
            if self.is_known_true(rhs) {
                return self.add_not(lhs);
            }
        }
        let a_not_b = self.add_and_binary(lhs, rhs.negate());
        let not_a_b = self.add_and_binary(lhs.negate(), rhs);
        self.add_or_binary(a_not_b, not_a_b)
    }
}

impl ResynNetwork for GateBuilder {
    type Signal = AigOperand;

    fn get_constant(&self, value: bool) -> AigOperand {
        if value {
            self.get_true()
        } else {
            self.get_false()
        }
    }

    fn create_and(&mut self, a: AigOperand, b: AigOperand) -> AigOperand {
        self.add_and_binary(a, b)
    }

    fn create_xor(&mut self, a: AigOperand, b: AigOperand) -> AigOperand {
        self.add_xor_binary(a, b)
    }

    fn create_not(&mut self, a: AigOperand) -> AigOperand {
        self.add_not(a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aig::gate_sim::simulate_tt16;
    use crate::tt::TruthTable16;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn two_inputs(options: GateBuilderOptions) -> (GateBuilder, AigOperand, AigOperand) {
        let mut gb = GateBuilder::new("t".to_string(), options);
        let a = gb.add_input("a".to_string());
        let b = gb.add_input("b".to_string());
        (gb, a, b)
    }

    #[test]
    fn test_and_constant_folding() {
        let (mut gb, a, _) = two_inputs(GateBuilderOptions::opt());
        let f = gb.get_false();
        let t = gb.get_true();
        assert_eq!(gb.add_and_binary(a, f), f);
        assert_eq!(gb.add_and_binary(t, a), a);
        assert_eq!(gb.add_and_binary(a, a), a);
        assert_eq!(gb.add_and_binary(a, a.negate()), f);
        assert_eq!(gb.node_count(), 3);
    }

    #[test]
    fn test_or_absorption() {
        let (mut gb, a, b) = two_inputs(GateBuilderOptions::opt());
        let a_or_b = gb.add_or_binary(a, b);
        assert_eq!(gb.add_and_binary(a_or_b, b), b);
        assert_eq!(gb.add_and_binary(a, a_or_b), a);
    }

    #[test]
    fn test_hashing_shares_commuted_gates() {
        let (mut gb, a, b) = two_inputs(GateBuilderOptions::opt());
        let ab = gb.add_and_binary(a, b);
        let ba = gb.add_and_binary(b, a);
        assert_eq!(ab, ba);
        // The duplicate slot stays allocated but is never referenced.
        assert_eq!(gb.node_count(), 5);
    }

    #[test]
    fn test_no_opt_keeps_every_gate() {
        let (mut gb, a, b) = two_inputs(GateBuilderOptions::no_opt());
        gb.add_and_binary(a, b);
        gb.add_and_binary(b, a);
        gb.add_and_binary(a, gb.get_true());
        assert_eq!(gb.node_count(), 6);
    }

    #[test_case(GateBuilderOptions::opt(); "opt")]
    #[test_case(GateBuilderOptions::no_opt(); "no_opt")]
    fn test_xor_and_or_functions(options: GateBuilderOptions) {
        let (mut gb, a, b) = two_inputs(options);
        let x = gb.add_xor_binary(a, b);
        let o = gb.add_or_binary(a, b);
        let leaves = [TruthTable16::var(0), TruthTable16::var(1)];
        assert_eq!(
            simulate_tt16(&gb.gates, &gb.inputs, &leaves, x),
            TruthTable16::var(0).xor(TruthTable16::var(1))
        );
        assert_eq!(
            simulate_tt16(&gb.gates, &gb.inputs, &leaves, o),
            TruthTable16::var(0).not().and(TruthTable16::var(1).not()).not()
        );
    }

    #[test]
    fn test_build_displays_live_gates() {
        let (mut gb, a, b) = two_inputs(GateBuilderOptions::opt());
        let o = gb.add_and_binary(a, b.negate());
        gb.add_output("o".to_string(), o.negate());
        let gate_fn = gb.build();
        assert_eq!(
            gate_fn.to_string(),
            "fn t(a, b) -> (o) {\n  %3 = and(a, not(b))\n  o = not(%3)\n}"
        );
    }
}
