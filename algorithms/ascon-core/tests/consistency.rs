//! Cross-consistency properties: XOF output-prefix stability and
//! `hash`/`hasha` agreement with the equivalent fixed-length `init_fixed`
//! sequence.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use ascon_core::xof::{hash, hasha, Xof, XofA, HASH_SIZE};

fn squeeze_n(mut sponge: Xof, n: usize) -> Vec<u8> {
    let mut out = vec![0u8; n];
    sponge.squeeze(&mut out);
    out
}

#[test]
fn longer_squeeze_is_a_superset_extension_of_shorter_squeeze() {
    for &n in &[0usize, 1, 7, 8, 9, 32, 100] {
        for &k in &[0usize, 1, 8, 17] {
            let mut a = Xof::init();
            a.absorb(b"prefix-consistency");
            let short = squeeze_n(a.clone(), n);

            let mut b = Xof::init();
            b.absorb(b"prefix-consistency");
            let long = squeeze_n(b, n + k);

            assert_eq!(&long[..n], &short[..], "mismatch at n={n}, k={k}");
        }
    }
}

#[test]
fn split_squeeze_calls_match_one_combined_call() {
    let mut a = Xof::init();
    a.absorb(b"split vs combined");
    let mut combined = [0u8; 50];
    a.squeeze(&mut combined);

    let mut b = Xof::init();
    b.absorb(b"split vs combined");
    let mut split = [0u8; 50];
    let pieces = [3usize, 1, 8, 30, 8];
    let mut offset = 0;
    for piece in pieces {
        b.squeeze(&mut split[offset..offset + piece]);
        offset += piece;
    }
    assert_eq!(split, combined);
}

#[test]
fn xofa_is_also_prefix_consistent() {
    let mut a = XofA::init();
    a.absorb(b"xofa prefix check");
    let mut short = [0u8; 16];
    a.squeeze(&mut short);

    let mut b = XofA::init();
    b.absorb(b"xofa prefix check");
    let mut long = [0u8; 48];
    b.squeeze(&mut long);

    assert_eq!(long[..16], short);
}

#[test]
fn hash_equals_explicit_init_fixed_absorb_squeeze() {
    let mut sponge = Xof::init_fixed(HASH_SIZE);
    sponge.absorb(b"equivalence check");
    let mut out = [0u8; HASH_SIZE];
    sponge.squeeze(&mut out);
    assert_eq!(out, hash(b"equivalence check"));
}

#[test]
fn hasha_equals_explicit_init_fixed_absorb_squeeze() {
    let mut sponge = XofA::init_fixed(HASH_SIZE);
    sponge.absorb(b"equivalence check");
    let mut out = [0u8; HASH_SIZE];
    sponge.squeeze(&mut out);
    assert_eq!(out, hasha(b"equivalence check"));
}

#[test]
fn reinit_fixed_then_squeeze_matches_a_fresh_hash() {
    let mut sponge = Xof::init();
    sponge.absorb(b"discarded first use");
    let mut discard = [0u8; 8];
    sponge.squeeze(&mut discard);

    sponge.reinit_fixed(HASH_SIZE);
    sponge.absorb(b"second use");
    let mut out = [0u8; HASH_SIZE];
    sponge.squeeze(&mut out);

    assert_eq!(out, hash(b"second use"));
}
