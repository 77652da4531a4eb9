//! The unmasked ASCON permutation, `p^a` / `p^b`.
//!
//! Twelve rounds are tabulated; callers select how many of the trailing
//! rounds to run via `first_round` (`0` runs all twelve, `6` runs the final
//! six — the `p^a`/`p^b` split used throughout the sponge and AEAD layers).

use crate::state::AsconState;

/// Total number of rounds tabulated by [`ROUND_CONSTANTS`].
pub const MAX_ROUNDS: u8 = 12;

/// Per-round constants, indexed by round number `0..12`.
///
/// "Nothing up my sleeve": each byte steps down by `0x0f` from the last
/// (`0xf0, 0xe1, 0xd2, ...`), the standard ASCON round-constant table, a
/// simple, auditable schedule rather than a derived one.
pub const ROUND_CONSTANTS: [u64; MAX_ROUNDS as usize] = [
    0xf0, 0xe1, 0xd2, 0xc3, 0xb4, 0xa5, 0x96, 0x87, 0x78, 0x69, 0x5a, 0x4b,
];

/// Runs the ASCON permutation starting at round `first_round` (inclusive)
/// through round 11 (inclusive), mutating `state` in place.
///
/// `first_round == 0` is `p^a` (twelve rounds); `first_round == 6` is `p^b`
/// (six rounds), the two instantiations used by the sponge and AEAD modes.
pub fn permute(state: &mut AsconState, first_round: u8) {
    for &rc in &ROUND_CONSTANTS[first_round as usize..] {
        round(state, rc);
    }
}

fn round(state: &mut AsconState, round_constant: u64) {
    let [x0, x1, x2, x3, x4] = state.words;

    // Addition of the round constant.
    let x2 = x2 ^ round_constant;

    // Substitution layer (5-bit Chi-like S-box, bitsliced across the lanes).
    let x0 = x0 ^ x4;
    let x4 = x4 ^ x3;
    let x2 = x2 ^ x1;

    let t0 = !x0 & x1;
    let t1 = !x1 & x2;
    let t2 = !x2 & x3;
    let t3 = !x3 & x4;
    let t4 = !x4 & x0;

    let x0 = x0 ^ t1;
    let x1 = x1 ^ t2;
    let x2 = x2 ^ t3;
    let x3 = x3 ^ t4;
    let x4 = x4 ^ t0;

    let x1 = x1 ^ x0;
    let x0 = x0 ^ x4;
    let x3 = x3 ^ x2;
    let x2 = !x2;

    // Linear diffusion layer.
    let x0 = x0 ^ x0.rotate_right(19) ^ x0.rotate_right(28);
    let x1 = x1 ^ x1.rotate_right(61) ^ x1.rotate_right(39);
    let x2 = x2 ^ x2.rotate_right(1) ^ x2.rotate_right(6);
    let x3 = x3 ^ x3.rotate_right(10) ^ x3.rotate_right(17);
    let x4 = x4 ^ x4.rotate_right(7) ^ x4.rotate_right(41);

    state.words = [x0, x1, x2, x3, x4];
}
