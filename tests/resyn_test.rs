// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;

use pretty_assertions::assert_eq;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use test_case::test_case;

use xag_npn::aig::{AigOperand, GateBuilderOptions};
use xag_npn::library::classify::simulate_signal;
use xag_npn::library::index_list::IndexListBuilder;
use xag_npn::library::subgraphs::SUBGRAPHS;
use xag_npn::library::xag::{Xag, XagRef, XagSignal};
use xag_npn::network::LibraryNetwork;
use xag_npn::resyn::{XagNpnResynthesis, XagNpnResynthesisParams};
use xag_npn::test_utils::{four_input_target, function_of, CountingNetwork};
use xag_npn::tt::{TruthTable, TruthTable16};

fn engine() -> XagNpnResynthesis {
    let _ = env_logger::try_init();
    XagNpnResynthesis::new(XagNpnResynthesisParams::default())
}

fn tt4(bits: u16) -> TruthTable {
    TruthTable::from(TruthTable16(bits))
}

#[test]
fn builtin_library_shape() {
    let engine = engine();
    assert_eq!(engine.stats().db_size, 1785);
    assert_eq!(engine.stats().covered_classes, 135);
    assert_eq!(engine.library().num_pis(), 4);
    assert_eq!(engine.canon_table().num_classes(), 222);
}

#[test]
fn sampled_queries_are_sound_in_aig_target() {
    let engine = engine();
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(0x5eed);
    let mut covered = 0;
    for _ in 0..512 {
        let bits: u16 = rng.gen();
        let (mut gb, leaves) = four_input_target(GateBuilderOptions::opt());
        let found = engine.candidates(&mut gb, &tt4(bits), &leaves);
        if !found.is_empty() {
            covered += 1;
        }
        for c in found {
            assert_eq!(function_of(&gb, c), TruthTable16(bits), "query 0x{:04x}", bits);
        }
    }
    assert!(covered > 0);
}

#[test]
fn every_covered_class_is_sound_under_random_transforms() {
    let engine = engine();
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
    for representative in engine.class_index().representatives() {
        for _ in 0..4 {
            let mut perm: Vec<usize> = (0..4).collect();
            for i in (1..4).rev() {
                perm.swap(i, rng.gen_range(0..=i));
            }
            let neg: u8 = rng.gen_range(0..16);
            let out: bool = rng.gen();
            // Relabel and complement the representative's inputs.
            let mut bits = 0u16;
            for x in 0..16u16 {
                let mut y = 0u16;
                for i in 0..4 {
                    let bit = ((x >> perm[i]) & 1) ^ ((neg as u16 >> i) & 1);
                    y |= bit << i;
                }
                if ((representative.0 >> y) & 1 != 0) ^ out {
                    bits |= 1 << x;
                }
            }
            let (mut gb, leaves) = four_input_target(GateBuilderOptions::no_opt());
            let found = engine.candidates(&mut gb, &tt4(bits), &leaves);
            assert!(!found.is_empty(), "class {} lost under transform", representative);
            for c in found {
                assert_eq!(function_of(&gb, c), TruthTable16(bits));
            }
        }
    }
}

#[test]
fn queries_are_sound_in_xag_target() {
    let engine = engine();
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(99);
    for _ in 0..256 {
        let bits: u16 = rng.gen();
        let mut target = Xag::new();
        let leaves: Vec<XagSignal> = (0..4).map(|_| target.add_input()).collect();
        for c in engine.candidates(&mut target, &tt4(bits), &leaves) {
            assert_eq!(simulate_signal(&target, c), TruthTable16(bits));
        }
    }
}

#[test]
fn all_two_input_functions_with_two_leaves() {
    let engine = engine();
    for bits in 0..16u64 {
        let function = TruthTable::from_u64(2, bits).unwrap();
        let (mut gb, leaves) = four_input_target(GateBuilderOptions::opt());
        let expected = function.extend_to_4().unwrap();
        let found = engine.candidates(&mut gb, &function, &leaves[..2]);
        assert!(!found.is_empty(), "2-input function 0x{:x}", bits);
        for c in found {
            assert_eq!(function_of(&gb, c), expected);
        }
    }
}

#[test_case(0x0000, false; "const0")]
#[test_case(0xFFFF, true; "const1")]
fn constants_yield_the_constant_signal(bits: u16, value: bool) {
    let engine = engine();
    let (mut gb, leaves) = four_input_target(GateBuilderOptions::opt());
    let found = engine.candidates(&mut gb, &tt4(bits), &leaves);
    let expected: AigOperand = if value { gb.get_true() } else { gb.get_false() };
    assert_eq!(found, vec![expected]);
}

#[test]
fn uncovered_class_yields_nothing() {
    let engine = engine();
    assert!(engine.class_index().get(TruthTable16(0x0117)).is_none());
    let (mut gb, leaves) = four_input_target(GateBuilderOptions::opt());
    let before = gb.node_count();
    assert!(engine.candidates(&mut gb, &tt4(0x0117), &leaves).is_empty());
    assert_eq!(gb.node_count(), before);
}

#[test]
fn wide_function_is_a_no_op() {
    let engine = engine();
    let (mut gb, leaves) = four_input_target(GateBuilderOptions::opt());
    let before = gb.node_count();
    let wide = TruthTable::from_u64(5, 0x8000_0000).unwrap();
    let mut calls = 0;
    engine.resynthesize(&mut gb, &wide, &leaves, |_| {
        calls += 1;
        true
    });
    assert_eq!(calls, 0);
    assert_eq!(gb.node_count(), before);
}

#[test]
fn cancellation_stops_materialization() {
    let engine = engine();
    let parity = tt4(0x6996);
    assert!(engine.class_index().get(TruthTable16(0x6996)).unwrap().len() > 1);

    let (gb, leaves) = four_input_target(GateBuilderOptions::no_opt());
    let mut stopped = CountingNetwork::new(gb);
    let mut accept_calls = 0;
    engine.resynthesize(&mut stopped, &parity, &leaves, |_| {
        accept_calls += 1;
        false
    });
    assert_eq!(accept_calls, 1);

    let (gb, leaves) = four_input_target(GateBuilderOptions::no_opt());
    let mut full = CountingNetwork::new(gb);
    let all = engine.candidates(&mut full, &parity, &leaves);
    assert!(all.len() > 1);
    assert!(stopped.gates_requested() < full.gates_requested());
}

fn gate_cone(db: &Xag, root: XagRef, seen: &mut HashSet<XagRef>) {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        let fanins = db.fanins(node);
        if fanins.is_empty() || !seen.insert(node) {
            continue;
        }
        stack.extend(fanins.iter().map(|s| s.node));
    }
}

#[test_case(0x6996; "parity")]
#[test_case(0x0116; "one_hot_or_none")]
#[test_case(0x0017; "majority_like")]
fn shared_library_gates_are_built_once_per_query(bits: u16) {
    let engine = engine();
    let signals = engine.class_index().get(TruthTable16(bits)).unwrap();
    let mut union = HashSet::new();
    for s in signals {
        gate_cone(engine.library(), s.node, &mut union);
    }

    let (gb, leaves) = four_input_target(GateBuilderOptions::no_opt());
    let mut target = CountingNetwork::new(gb);
    let found = engine.candidates(&mut target, &tt4(bits), &leaves);
    assert_eq!(found.len(), signals.len());
    assert_eq!(target.gates_requested(), union.len());
}

#[test]
fn separate_queries_do_not_share_state() {
    let engine = engine();
    let (gb, leaves) = four_input_target(GateBuilderOptions::no_opt());
    let mut target = CountingNetwork::new(gb);
    engine.candidates(&mut target, &tt4(0x6996), &leaves);
    let first = target.gates_requested();
    engine.candidates(&mut target, &tt4(0x6996), &leaves);
    assert_eq!(target.gates_requested(), 2 * first);
}

#[test]
fn construction_is_idempotent() {
    let a: XagNpnResynthesis =
        XagNpnResynthesis::from_encoding(Default::default(), &SUBGRAPHS).unwrap();
    let b: XagNpnResynthesis =
        XagNpnResynthesis::from_encoding(Default::default(), &SUBGRAPHS).unwrap();
    assert_eq!(a.class_index().representatives(), b.class_index().representatives());
    for key in a.class_index().representatives() {
        assert_eq!(a.class_index().get(key), b.class_index().get(key));
    }
    assert_eq!(a.stats().db_size, b.stats().db_size);
}

fn tiny_engine(build: impl FnOnce(&mut IndexListBuilder)) -> XagNpnResynthesis {
    let mut b = IndexListBuilder::new(4);
    build(&mut b);
    XagNpnResynthesis::from_encoding(Default::default(), b.build().raw()).unwrap()
}

#[test]
fn tiny_and_library_serves_and_and_or() {
    // The AND class representative is AND(!x2, !x3).
    let engine = tiny_engine(|b| {
        let x2 = b.pi_literal(2);
        let x3 = b.pi_literal(3);
        b.add_and(x2 ^ 1, x3 ^ 1);
    });

    let (mut gb, leaves) = four_input_target(GateBuilderOptions::opt());
    let (a, c) = (leaves[0], leaves[1]);
    let and2 = TruthTable::from_u64(2, 0x8).unwrap();
    let found = engine.candidates(&mut gb, &and2, &leaves[..2]);
    assert_eq!(found.len(), 1);
    // Hashing returns the existing gate for the same structure.
    assert_eq!(gb.add_and_binary(a, c), found[0]);

    let or2 = TruthTable::from_u64(2, 0xE).unwrap();
    let found = engine.candidates(&mut gb, &or2, &leaves[..2]);
    assert_eq!(found.len(), 1);
    assert_eq!(gb.add_or_binary(a, c), found[0]);
}

#[test]
fn tiny_library_outside_canonical_form_is_not_indexed() {
    let engine = tiny_engine(|b| {
        let x0 = b.pi_literal(0);
        let x1 = b.pi_literal(1);
        b.add_and(x0, x1);
    });
    let (mut gb, leaves) = four_input_target(GateBuilderOptions::opt());
    let and2 = TruthTable::from_u64(2, 0x8).unwrap();
    assert!(engine.candidates(&mut gb, &and2, &leaves[..2]).is_empty());
}

#[test]
fn tiny_xor_library() {
    let engine = tiny_engine(|b| {
        let x2 = b.pi_literal(2);
        let x3 = b.pi_literal(3);
        b.add_xor(x2, x3);
    });
    assert!(engine.library().is_xor(XagRef { id: 5 }));
    for bits in [0x6u64, 0x9] {
        let function = TruthTable::from_u64(2, bits).unwrap();
        let mut target = Xag::new();
        let leaves: Vec<XagSignal> = (0..2).map(|_| target.add_input()).collect();
        let found = engine.candidates(&mut target, &function, &leaves);
        assert_eq!(found.len(), 1);
        assert_eq!(target.num_gates(), 1);
        assert_eq!(
            simulate_signal(&target, found[0]),
            function.extend_to_4().unwrap()
        );
    }
}
