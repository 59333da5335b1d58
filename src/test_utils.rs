// SPDX-License-Identifier: Apache-2.0

//! Helpers shared by unit and integration tests.

use crate::aig::gate_sim::simulate_tt16;
use crate::aig::{AigOperand, GateBuilder, GateBuilderOptions};
use crate::network::ResynNetwork;
use crate::tt::TruthTable16;

/// A target AIG with four inputs `a`..`d`, returned alongside their operands.
pub fn four_input_target(options: GateBuilderOptions) -> (GateBuilder, Vec<AigOperand>) {
    let mut gb = GateBuilder::new("cut".to_string(), options);
    let leaves = ["a", "b", "c", "d"]
        .iter()
        .map(|name| gb.add_input(name.to_string()))
        .collect();
    (gb, leaves)
}

/// Function of `operand` with input `i` of `gb` bound to variable `i`.
pub fn function_of(gb: &GateBuilder, operand: AigOperand) -> TruthTable16 {
    let vars: Vec<TruthTable16> = (0..gb.inputs.len().min(4)).map(TruthTable16::var).collect();
    simulate_tt16(&gb.gates, &gb.inputs, &vars, operand)
}

/// Target network that records how many gates were requested.
pub struct CountingNetwork {
    pub inner: GateBuilder,
    pub ands: usize,
    pub xors: usize,
}

impl CountingNetwork {
    pub fn new(inner: GateBuilder) -> Self {
        Self {
            inner,
            ands: 0,
            xors: 0,
        }
    }

    pub fn gates_requested(&self) -> usize {
        self.ands + self.xors
    }
}

impl ResynNetwork for CountingNetwork {
    type Signal = AigOperand;

    fn get_constant(&self, value: bool) -> AigOperand {
        self.inner.get_constant(value)
    }

    fn create_and(&mut self, a: AigOperand, b: AigOperand) -> AigOperand {
        self.ands += 1;
        self.inner.create_and(a, b)
    }

    fn create_xor(&mut self, a: AigOperand, b: AigOperand) -> AigOperand {
        self.xors += 1;
        self.inner.create_xor(a, b)
    }

    fn create_not(&mut self, a: AigOperand) -> AigOperand {
        self.inner.create_not(a)
    }
}
