// SPDX-License-Identifier: Apache-2.0

//! Capabilities the resynthesis engine needs from the networks it touches.
//!
//! Two roles exist:
//! - the *target* network ([`ResynNetwork`]) that replacement candidates are
//!   materialized into, and
//! - the *library* network ([`LibraryNetwork`]) holding the precomputed
//!   circuits.
//!
//! A network type that lacks a required operation does not implement the
//! trait, so the mismatch is reported by the compiler before any query can
//! run.

use std::fmt::Debug;
use std::hash::Hash;

/// Operations the engine uses to build candidates in a target network.
///
/// Implementations may deduplicate structurally identical nodes (the AIG
/// builder does when hashing is enabled); the engine itself only shares nodes
/// within a single query.
pub trait ResynNetwork {
    type Signal: Copy + Eq + Hash + Debug;

    fn get_constant(&self, value: bool) -> Self::Signal;

    fn create_and(&mut self, a: Self::Signal, b: Self::Signal) -> Self::Signal;

    fn create_xor(&mut self, a: Self::Signal, b: Self::Signal) -> Self::Signal;

    fn create_not(&mut self, a: Self::Signal) -> Self::Signal;
}

/// Operations the engine uses to decode, simulate and copy library circuits.
///
/// Nodes are visited in creation order, which is topological since every
/// gate is created after its fanins.
pub trait LibraryNetwork: Default {
    type Node: Copy + Eq + Hash + Debug;
    type Signal: Copy + Eq + Hash + Debug;

    /// Number of nodes, including the constant and the primary inputs.
    fn size(&self) -> usize;

    fn num_pis(&self) -> usize;

    fn get_constant(&self, value: bool) -> Self::Signal;

    fn create_pi(&mut self) -> Self::Signal;

    fn create_and(&mut self, a: Self::Signal, b: Self::Signal) -> Self::Signal;

    fn create_xor(&mut self, a: Self::Signal, b: Self::Signal) -> Self::Signal;

    fn create_po(&mut self, s: Self::Signal);

    fn negate(&self, s: Self::Signal) -> Self::Signal;

    fn get_node(&self, s: Self::Signal) -> Self::Node;

    fn make_signal(&self, n: Self::Node) -> Self::Signal;

    fn is_complemented(&self, s: Self::Signal) -> bool;

    fn is_constant(&self, n: Self::Node) -> bool;

    /// Returns the primary-input position of `n`, if it is a primary input.
    fn pi_index(&self, n: Self::Node) -> Option<usize>;

    /// Returns the node of the primary input at `index`.
    fn pi_at(&self, index: usize) -> Self::Node;

    fn is_xor(&self, n: Self::Node) -> bool;

    /// Fanin edges of a gate in fanin order; empty for constants and inputs.
    fn fanins(&self, n: Self::Node) -> Vec<Self::Signal>;

    /// Dense index of `n` in `0..size()`, following creation order.
    fn node_to_index(&self, n: Self::Node) -> usize;

    /// All nodes in creation order.
    fn nodes(&self) -> Vec<Self::Node>;
}
