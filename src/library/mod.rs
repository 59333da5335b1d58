// SPDX-License-Identifier: Apache-2.0

//! The precomputed circuit library.
//!
//! This module provides:
//! - An XOR-AND graph (`Xag`) to hold library circuits.
//! - The compact index-list encoding and its decoder.
//! - The built-in library of size-optimum 4-input subcircuits.
//! - The canonical-class index from NPN representative to library signals.

pub mod classify;
pub mod index_list;
pub mod subgraphs;
pub mod xag;
