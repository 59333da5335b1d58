// SPDX-License-Identifier: Apache-2.0

//! Resynthesis of small cut functions from a precomputed XOR-AND circuit
//! library, matched by NPN class.
//!
//! ```
//! use xag_npn::aig::{GateBuilder, GateBuilderOptions};
//! use xag_npn::resyn::{XagNpnResynthesis, XagNpnResynthesisParams};
//! use xag_npn::tt::TruthTable;
//!
//! let engine = XagNpnResynthesis::new(XagNpnResynthesisParams::default());
//! let mut gb = GateBuilder::new("cut".to_string(), GateBuilderOptions::opt());
//! let leaves = vec![gb.add_input("a".to_string()), gb.add_input("b".to_string())];
//! let and2 = TruthTable::from_hex(2, "8").unwrap();
//! let found = engine.candidates(&mut gb, &and2, &leaves);
//! assert!(!found.is_empty());
//! ```

pub mod aig;
pub mod library;
pub mod network;
pub mod npn;
pub mod resyn;
pub mod test_utils;
pub mod tt;
