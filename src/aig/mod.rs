// SPDX-License-Identifier: Apache-2.0

//! AND-inverter graph target for resynthesis.

pub mod aig_hasher;
pub mod gate;
pub mod gate_builder;
pub mod gate_sim;
pub mod topo;

pub use gate::{AigNode, AigOperand, AigRef, GateFn, Input, Output};
pub use gate_builder::{GateBuilder, GateBuilderOptions};
