// SPDX-License-Identifier: Apache-2.0

use pretty_assertions::assert_eq;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use xag_npn::library::classify::{simulate_nodes, ClassIndex};
use xag_npn::library::index_list::{decode, IndexList};
use xag_npn::library::subgraphs::{NUM_GATES, NUM_INPUTS, SUBGRAPHS};
use xag_npn::library::xag::Xag;
use xag_npn::network::LibraryNetwork;
use xag_npn::npn::{all_transforms, unapply_npn, CanonTable, NpnTransform};
use xag_npn::tt::TruthTable16;

#[test]
fn builtin_encoding_header() {
    let list = IndexList::new(SUBGRAPHS.to_vec()).unwrap();
    assert_eq!(list.num_gates(), NUM_GATES);
    assert_eq!(list.num_pis(), NUM_INPUTS);
    assert_eq!(list.num_pos(), 0);
    assert_eq!(list.gates().count(), 1780);
}

#[test]
fn builtin_library_decodes_without_folding() {
    let xag: Xag = decode(&SUBGRAPHS).unwrap();
    assert_eq!(xag.size(), 1785);
    assert_eq!(xag.num_gates(), 1780);
    let xors = xag.nodes().into_iter().filter(|&n| xag.is_xor(n)).count();
    assert!(xors > 0 && xors < 1780, "xor gates: {}", xors);
}

#[test]
fn builtin_classification_is_sound() {
    let _ = env_logger::try_init();
    let xag: Xag = decode(&SUBGRAPHS).unwrap();
    let canon = CanonTable::shared();
    let index = ClassIndex::build(&xag, canon);
    assert_eq!(index.covered_classes(), 135);
    let sim = simulate_nodes(&xag);
    let mut registered = 0;
    for key in index.representatives() {
        assert!(canon.is_representative(key));
        let signals = index.get(key).unwrap();
        // Discovery order is ascending node id.
        assert!(signals.windows(2).all(|w| w[0].node < w[1].node));
        for s in signals {
            assert_eq!(sim[s.node.id].negate_if(s.negated), key);
            registered += 1;
        }
    }
    assert_eq!(registered, index.num_signals());
}

#[test]
fn canonicalization_is_closed_under_npn() {
    let canon = CanonTable::shared();
    let transforms: Vec<NpnTransform> = all_transforms().collect();
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(2024);
    for _ in 0..2000 {
        let f = TruthTable16(rng.gen());
        let xform = transforms[rng.gen_range(0..transforms.len())];
        let g = unapply_npn(f, xform);
        assert_eq!(canon.representative(g), canon.representative(f));
    }
}

#[test]
fn canonical_table_is_deterministic() {
    let rebuilt = CanonTable::build();
    let shared = CanonTable::shared();
    let mut tt = TruthTable16::const0();
    loop {
        assert_eq!(rebuilt.lookup(tt), shared.lookup(tt));
        tt = tt.next();
        if tt.is_const0() {
            break;
        }
    }
}
