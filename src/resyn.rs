// SPDX-License-Identifier: Apache-2.0

//! NPN-based resynthesis of functions with up to four inputs.
//!
//! The engine is constructed once: it forces the shared canonical table,
//! decodes the circuit library and indexes every library node by the NPN
//! class it computes. A query canonicalizes the cut function, looks up the
//! library signals for its class and copies each one into the target network
//! with the inverse permutation and polarity applied.

use std::collections::HashMap;
use std::fmt;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::library::classify::ClassIndex;
use crate::library::index_list::{DecodeError, IndexList};
use crate::library::subgraphs::SUBGRAPHS;
use crate::library::xag::Xag;
use crate::network::{LibraryNetwork, ResynNetwork};
use crate::npn::CanonTable;
use crate::tt::TruthTable;

/// Number of primary inputs every library circuit is expressed over.
pub const LIBRARY_INPUTS: usize = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct XagNpnResynthesisParams {
    /// Log the construction statistics when the engine is dropped.
    pub verbose: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct XagNpnResynthesisStats {
    /// Time spent obtaining the canonical table.
    pub time_classes: Duration,
    /// Time spent decoding and classifying the library.
    pub time_db: Duration,
    /// Number of library nodes, including the constant and the inputs.
    pub db_size: usize,
    /// Number of NPN classes with at least one library signal.
    pub covered_classes: usize,
}

impl XagNpnResynthesisStats {
    /// Human-readable summary, one item per line.
    pub fn report(&self) -> String {
        format!(
            "[i] build classes time = {:>5.2} secs\n\
             [i] build db time      = {:>5.2} secs\n\
             [i] db size            = {}\n\
             [i] covered classes    = {}",
            self.time_classes.as_secs_f64(),
            self.time_db.as_secs_f64(),
            self.db_size,
            self.covered_classes
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResynError {
    Decode(DecodeError),
    /// The library is not expressed over exactly four primary inputs.
    InputCount { got: u32 },
}

impl fmt::Display for ResynError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResynError::Decode(e) => write!(f, "malformed library encoding: {}", e),
            ResynError::InputCount { got } => write!(
                f,
                "library must have {} primary inputs; encoding declares {}",
                LIBRARY_INPUTS, got
            ),
        }
    }
}

impl std::error::Error for ResynError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResynError::Decode(e) => Some(e),
            ResynError::InputCount { .. } => None,
        }
    }
}

impl From<DecodeError> for ResynError {
    fn from(e: DecodeError) -> Self {
        ResynError::Decode(e)
    }
}

pub struct XagNpnResynthesis<D: LibraryNetwork = Xag> {
    params: XagNpnResynthesisParams,
    stats: XagNpnResynthesisStats,
    canon: &'static CanonTable,
    db: D,
    classes: ClassIndex<D::Signal>,
}

impl XagNpnResynthesis<Xag> {
    /// Builds the engine over the built-in library.
    pub fn new(params: XagNpnResynthesisParams) -> Self {
        match Self::from_encoding(params, &SUBGRAPHS) {
            Ok(engine) => engine,
            Err(e) => panic!("built-in library failed to decode: {}", e),
        }
    }
}

impl<D: LibraryNetwork> XagNpnResynthesis<D> {
    /// Builds the engine over the library in `encoding`.
    ///
    /// Fails if the encoding is malformed or is not over four inputs; no
    /// partially built engine is returned.
    pub fn from_encoding(
        params: XagNpnResynthesisParams,
        encoding: &[u32],
    ) -> Result<Self, ResynError> {
        let start = Instant::now();
        let canon = CanonTable::shared();
        let time_classes = start.elapsed();

        let start = Instant::now();
        let list = IndexList::new(encoding.to_vec())?;
        if list.num_pis() as usize != LIBRARY_INPUTS {
            return Err(ResynError::InputCount {
                got: list.num_pis(),
            });
        }
        let mut db = D::default();
        list.decode_into(&mut db)?;
        let classes = ClassIndex::build(&db, canon);
        let time_db = start.elapsed();

        let stats = XagNpnResynthesisStats {
            time_classes,
            time_db,
            db_size: db.size(),
            covered_classes: classes.covered_classes(),
        };
        log::debug!(
            "XagNpnResynthesis: db_size={} covered_classes={} signals={}",
            stats.db_size,
            stats.covered_classes,
            classes.num_signals()
        );
        Ok(Self {
            params,
            stats,
            canon,
            db,
            classes,
        })
    }

    pub fn params(&self) -> &XagNpnResynthesisParams {
        &self.params
    }

    pub fn stats(&self) -> &XagNpnResynthesisStats {
        &self.stats
    }

    pub fn canon_table(&self) -> &CanonTable {
        self.canon
    }

    pub fn class_index(&self) -> &ClassIndex<D::Signal> {
        &self.classes
    }

    pub fn library(&self) -> &D {
        &self.db
    }

    /// Offers every library implementation of `function` over `leaves` to
    /// `accept`, stopping as soon as `accept` returns `false`.
    ///
    /// `leaves[i]` drives input `i` of `function`; missing leaves read as
    /// constant false. Functions over more than four inputs, and functions
    /// whose class the library does not cover, produce no candidates.
    /// Library nodes shared between candidates are materialized once per call.
    pub fn resynthesize<N, F>(
        &self,
        ntk: &mut N,
        function: &TruthTable,
        leaves: &[N::Signal],
        mut accept: F,
    ) where
        N: ResynNetwork,
        F: FnMut(N::Signal) -> bool,
    {
        let Some(tt) = function.extend_to_4() else {
            log::trace!(
                "resynthesize: skipping {}-input function",
                function.num_vars()
            );
            return;
        };
        let entry = self.canon.lookup(tt);
        let Some(candidates) = self.classes.get(entry.representative) else {
            log::trace!(
                "resynthesize: no library entry for class {}",
                entry.representative
            );
            return;
        };
        let xform = entry.xform;

        let mut memo: HashMap<D::Node, N::Signal> = HashMap::new();
        memo.insert(
            self.db.get_node(self.db.get_constant(false)),
            ntk.get_constant(false),
        );
        for i in 0..LIBRARY_INPUTS {
            let leaf_index = xform.perm.0[i] as usize;
            let leaf = match leaves.get(leaf_index) {
                Some(&leaf) => leaf,
                None => ntk.get_constant(false),
            };
            let leaf = if xform.input_negated(leaf_index) {
                ntk.create_not(leaf)
            } else {
                leaf
            };
            memo.insert(self.db.pi_at(i), leaf);
        }

        for &candidate in candidates {
            let f = self.copy_db_entry(ntk, self.db.get_node(candidate), &mut memo);
            let f = if self.db.is_complemented(candidate) != xform.output_neg {
                ntk.create_not(f)
            } else {
                f
            };
            if !accept(f) {
                break;
            }
        }
    }

    /// Collects every candidate `resynthesize` would offer.
    pub fn candidates<N: ResynNetwork>(
        &self,
        ntk: &mut N,
        function: &TruthTable,
        leaves: &[N::Signal],
    ) -> Vec<N::Signal> {
        let mut result = Vec::new();
        self.resynthesize(ntk, function, leaves, |s| {
            result.push(s);
            true
        });
        result
    }

    /// Copies the cone of `root` into `ntk`, reusing anything already in
    /// `memo`. The constant and the primary inputs must be seeded.
    fn copy_db_entry<N: ResynNetwork>(
        &self,
        ntk: &mut N,
        root: D::Node,
        memo: &mut HashMap<D::Node, N::Signal>,
    ) -> N::Signal {
        let mut stack = vec![root];
        while let Some(&node) = stack.last() {
            if memo.contains_key(&node) {
                stack.pop();
                continue;
            }
            let fanins = self.db.fanins(node);
            debug_assert_eq!(fanins.len(), 2, "unseeded non-gate node {:?}", node);
            let pending: Vec<D::Node> = fanins
                .iter()
                .map(|&fanin| self.db.get_node(fanin))
                .filter(|fanin_node| !memo.contains_key(fanin_node))
                .collect();
            if !pending.is_empty() {
                stack.extend(pending);
                continue;
            }
            let mut operands = Vec::with_capacity(2);
            for &fanin in &fanins {
                let s = memo[&self.db.get_node(fanin)];
                operands.push(if self.db.is_complemented(fanin) {
                    ntk.create_not(s)
                } else {
                    s
                });
            }
            let s = if self.db.is_xor(node) {
                ntk.create_xor(operands[0], operands[1])
            } else {
                ntk.create_and(operands[0], operands[1])
            };
            memo.insert(node, s);
            stack.pop();
        }
        memo[&root]
    }
}

impl<D: LibraryNetwork> Drop for XagNpnResynthesis<D> {
    fn drop(&mut self) {
        if self.params.verbose {
            for line in self.stats.report().lines() {
                log::info!("{}", line);
            }
        }
    }
}
