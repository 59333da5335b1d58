// SPDX-License-Identifier: Apache-2.0

//! Compact integer encoding of XAGs ("index lists").
//!
//! Layout of the `u32` sequence:
//! - word 0: `(gate_count << 16) | (output_count << 8) | input_count`
//! - then one pair `(lit_a, lit_b)` per gate, in creation order
//! - then `output_count` output literals
//!
//! A literal is `2 * node_id + complement`. Node id 0 is constant false, ids
//! `1..=input_count` are the primary inputs, and gates take the following ids
//! in array order. A pair with `lit_a > lit_b` is an XOR gate; any other pair
//! is an AND gate.

use std::fmt;

use crate::network::LibraryNetwork;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    Empty,
    Truncated {
        expected_len: usize,
        got_len: usize,
    },
    TrailingData {
        expected_len: usize,
        got_len: usize,
    },
    /// A literal names a node that is not defined at the point of reference.
    UndefinedLiteral {
        position: usize,
        literal: u32,
        defined_nodes: u32,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "index list is empty; missing header word"),
            Self::Truncated {
                expected_len,
                got_len,
            } => write!(
                f,
                "index list is truncated: header implies {} words, got {}",
                expected_len, got_len
            ),
            Self::TrailingData {
                expected_len,
                got_len,
            } => write!(
                f,
                "index list has trailing data: header implies {} words, got {}",
                expected_len, got_len
            ),
            Self::UndefinedLiteral {
                position,
                literal,
                defined_nodes,
            } => write!(
                f,
                "literal {} at word {} references node {} but only {} nodes are defined",
                literal,
                position,
                literal >> 1,
                defined_nodes
            ),
        }
    }
}

impl std::error::Error for DecodeError {}

fn lookup_literal<N: LibraryNetwork>(
    ntk: &N,
    signals: &[N::Signal],
    position: usize,
    literal: u32,
) -> Result<N::Signal, DecodeError> {
    let id = (literal >> 1) as usize;
    if id >= signals.len() {
        return Err(DecodeError::UndefinedLiteral {
            position,
            literal,
            defined_nodes: signals.len() as u32,
        });
    }
    let s = signals[id];
    Ok(if literal & 1 != 0 { ntk.negate(s) } else { s })
}

/// Validated view over an index list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexList {
    values: Vec<u32>,
}

impl IndexList {
    /// Checks the header and the overall length against it.
    ///
    /// Literal ranges are checked during `decode`.
    pub fn new(values: Vec<u32>) -> Result<Self, DecodeError> {
        let header = *values.first().ok_or(DecodeError::Empty)?;
        let num_gates = (header >> 16) as usize;
        let num_pos = ((header >> 8) & 0xFF) as usize;
        let expected_len = 1 + 2 * num_gates + num_pos;
        if values.len() < expected_len {
            return Err(DecodeError::Truncated {
                expected_len,
                got_len: values.len(),
            });
        }
        if values.len() > expected_len {
            return Err(DecodeError::TrailingData {
                expected_len,
                got_len: values.len(),
            });
        }
        Ok(Self { values })
    }

    pub fn num_pis(&self) -> u32 {
        self.values[0] & 0xFF
    }

    pub fn num_pos(&self) -> u32 {
        (self.values[0] >> 8) & 0xFF
    }

    pub fn num_gates(&self) -> u32 {
        self.values[0] >> 16
    }

    pub fn raw(&self) -> &[u32] {
        &self.values
    }

    /// Gate literal pairs in creation order.
    pub fn gates(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let end = 1 + 2 * self.num_gates() as usize;
        self.values[1..end].chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }

    pub fn outputs(&self) -> &[u32] {
        let start = 1 + 2 * self.num_gates() as usize;
        &self.values[start..]
    }

    /// Instantiates the encoded network into `ntk`.
    ///
    /// Fresh primary inputs are created in `ntk`; gates go through its
    /// AND/XOR constructors, so trivial or duplicate gates may fold away.
    /// Returns the `ntk` signal of every encoded node id.
    pub fn decode_into<N: LibraryNetwork>(
        &self,
        ntk: &mut N,
    ) -> Result<Vec<N::Signal>, DecodeError> {
        let mut signals: Vec<N::Signal> = Vec::with_capacity(
            1 + self.num_pis() as usize + self.num_gates() as usize,
        );
        signals.push(ntk.get_constant(false));
        for _ in 0..self.num_pis() {
            signals.push(ntk.create_pi());
        }

        for (gate_index, (lit_a, lit_b)) in self.gates().enumerate() {
            let position = 1 + 2 * gate_index;
            let a = lookup_literal(ntk, &signals, position, lit_a)?;
            let b = lookup_literal(ntk, &signals, position + 1, lit_b)?;
            let s = if lit_a > lit_b {
                ntk.create_xor(a, b)
            } else {
                ntk.create_and(a, b)
            };
            signals.push(s);
        }

        let start = 1 + 2 * self.num_gates() as usize;
        let mut outputs = Vec::with_capacity(self.num_pos() as usize);
        for (i, &literal) in self.outputs().iter().enumerate() {
            outputs.push(lookup_literal(ntk, &signals, start + i, literal)?);
        }
        for s in outputs {
            ntk.create_po(s);
        }

        log::trace!(
            "decode_into: pis={} gates={} pos={} size={}",
            self.num_pis(),
            self.num_gates(),
            self.num_pos(),
            ntk.size()
        );
        Ok(signals)
    }
}

/// Decodes `values` into a fresh network.
pub fn decode<N: LibraryNetwork>(values: &[u32]) -> Result<N, DecodeError> {
    let list = IndexList::new(values.to_vec())?;
    let mut ntk = N::default();
    list.decode_into(&mut ntk)?;
    Ok(ntk)
}

/// Incremental encoder producing index lists.
///
/// Literal arguments follow the encoding: `2 * node_id + complement`.
#[derive(Debug, Clone)]
pub struct IndexListBuilder {
    num_pis: u32,
    gates: Vec<(u32, u32)>,
    outputs: Vec<u32>,
}

impl IndexListBuilder {
    pub fn new(num_pis: u32) -> Self {
        assert!(num_pis <= 0xFF, "at most 255 primary inputs can be encoded");
        Self {
            num_pis,
            gates: Vec::new(),
            outputs: Vec::new(),
        }
    }

    /// Literal of primary input `index` (0-based).
    pub fn pi_literal(&self, index: u32) -> u32 {
        assert!(index < self.num_pis);
        2 * (index + 1)
    }

    fn next_literal(&self) -> u32 {
        2 * (1 + self.num_pis + self.gates.len() as u32)
    }

    /// Adds an AND gate and returns its (uncomplemented) literal.
    pub fn add_and(&mut self, lit_a: u32, lit_b: u32) -> u32 {
        let literal = self.next_literal();
        self.gates
            .push((std::cmp::min(lit_a, lit_b), std::cmp::max(lit_a, lit_b)));
        literal
    }

    /// Adds an XOR gate and returns its (uncomplemented) literal.
    pub fn add_xor(&mut self, lit_a: u32, lit_b: u32) -> u32 {
        assert_ne!(
            lit_a, lit_b,
            "an XOR of a literal with itself cannot be encoded"
        );
        let literal = self.next_literal();
        self.gates
            .push((std::cmp::max(lit_a, lit_b), std::cmp::min(lit_a, lit_b)));
        literal
    }

    pub fn add_output(&mut self, literal: u32) {
        self.outputs.push(literal);
    }

    pub fn build(self) -> IndexList {
        assert!(self.gates.len() <= 0xFFFF, "at most 65535 gates can be encoded");
        assert!(self.outputs.len() <= 0xFF, "at most 255 outputs can be encoded");
        let mut values = Vec::with_capacity(1 + 2 * self.gates.len() + self.outputs.len());
        values.push(
            (self.gates.len() as u32) << 16 | (self.outputs.len() as u32) << 8 | self.num_pis,
        );
        for (a, b) in self.gates {
            values.push(a);
            values.push(b);
        }
        values.extend(self.outputs);
        IndexList { values }
    }
}
