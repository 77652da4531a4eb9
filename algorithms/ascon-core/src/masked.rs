//! Four-share Boolean-masked permutation backend.
//!
//! Every bit of the 320-bit state is split into four shares whose XOR
//! reconstructs the real value; each lane is additionally bit-sliced into
//! even/odd 32-bit halves, so a lane's four shares live as eight `u32`s
//! (`ShareQuad` per half). The substitution layer's AND gates are the only
//! place this needs care — XOR and rotation commute with sharing for free,
//! but `AND` does not, so it is replaced by [`and_not_xor`], a gadget that
//! mixes in rotated copies of the other shares instead of letting two
//! shares of the same secret touch each other directly. A caller-supplied
//! [`RandomPool`] feeds a rotating supply of masked-zero randomness into
//! that gadget, rotated by a fixed amount every round so the same pool can
//! drive all twelve rounds of one permutation call.
//!
//! This defends against first-order power/EM side-channel analysis; it is
//! not free — four shares means roughly 4x the state and a good deal more
//! XOR/AND traffic per round than [`crate::permutation::permute`].

#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]

#[cfg(feature = "zeroize")]
use zeroize::{Zeroize, ZeroizeOnDrop};

use rand_core::RngCore;

use crate::state::AsconState;

const LANES: usize = 5;
const EVEN: usize = 0;
const ODD: usize = 1;

/// The four shares of one 32-bit half-lane, as `[a, b, c, d]`.
pub type ShareQuad = [u32; 4];

/// Round-constant pairs, pre-inverted so the substitution layer never has
/// to NOT the whole of `x2` — only the per-round constant XOR needs to
/// carry the inversion, ported from the bitsliced C reference this backend
/// is based on.
const ROUND_CONSTANTS: [(u32, u32); 12] = [
    (!12u32, !12u32),
    (!9u32, !12u32),
    (!12u32, !9u32),
    (!9u32, !9u32),
    (!6u32, !12u32),
    (!3u32, !12u32),
    (!6u32, !9u32),
    (!3u32, !9u32),
    (!12u32, !6u32),
    (!9u32, !6u32),
    (!12u32, !3u32),
    (!9u32, !3u32),
];

// Cross-share rotation amounts used by `and_not_xor`. The reference this
// is ported from leaves these defined in a header this crate doesn't have
// (`ascon_mask32_{un}rotate_shareN_M`); these amounts are a reconstruction
// rather than a verified match to any published vector — each
// `rotate`/`unrotate` pair is its own inverse, which is all the gadget's
// algebra actually requires.
const ROT_SHARE1_0: u32 = 1;
const ROT_SHARE2_0: u32 = 2;
const ROT_SHARE2_1: u32 = 3;
const ROT_SHARE3_0: u32 = 4;
const ROT_SHARE3_1: u32 = 5;
const ROT_SHARE3_2: u32 = 6;

fn rotate_share1_0(x: u32) -> u32 {
    x.rotate_left(ROT_SHARE1_0)
}
fn unrotate_share1_0(x: u32) -> u32 {
    x.rotate_right(ROT_SHARE1_0)
}
fn rotate_share2_0(x: u32) -> u32 {
    x.rotate_left(ROT_SHARE2_0)
}
fn unrotate_share2_0(x: u32) -> u32 {
    x.rotate_right(ROT_SHARE2_0)
}
fn rotate_share2_1(x: u32) -> u32 {
    x.rotate_left(ROT_SHARE2_1)
}
fn unrotate_share2_1(x: u32) -> u32 {
    x.rotate_right(ROT_SHARE2_1)
}
fn rotate_share3_0(x: u32) -> u32 {
    x.rotate_left(ROT_SHARE3_0)
}
fn unrotate_share3_0(x: u32) -> u32 {
    x.rotate_right(ROT_SHARE3_0)
}
fn rotate_share3_1(x: u32) -> u32 {
    x.rotate_left(ROT_SHARE3_1)
}
fn unrotate_share3_1(x: u32) -> u32 {
    x.rotate_right(ROT_SHARE3_1)
}
fn rotate_share3_2(x: u32) -> u32 {
    x.rotate_left(ROT_SHARE3_2)
}
fn unrotate_share3_2(x: u32) -> u32 {
    x.rotate_right(ROT_SHARE3_2)
}

/// `x ^= (~y) & z`, computed share-wise so that no two shares of `y` and
/// `z` are ANDed together directly — each cross-share term is rotated
/// first, which is enough to break the first-order leakage the plain AND
/// would otherwise have.
fn and_not_xor(x: &mut ShareQuad, y: &ShareQuad, z: &ShareQuad) {
    x[0] ^= (!y[0] & z[0])
        ^ (unrotate_share1_0(y[1]) & z[0])
        ^ (unrotate_share2_0(y[2]) & z[0])
        ^ (unrotate_share3_0(y[3]) & z[0]);

    x[1] ^= (rotate_share1_0(!y[0]) & z[1])
        ^ (y[1] & z[1])
        ^ (unrotate_share2_1(y[2]) & z[1])
        ^ (unrotate_share3_1(y[3]) & z[1]);

    x[2] ^= (rotate_share2_0(!y[0]) & z[2])
        ^ (rotate_share2_1(y[1]) & z[2])
        ^ (y[2] & z[2])
        ^ (unrotate_share3_2(y[3]) & z[2]);

    x[3] ^= (rotate_share3_0(!y[0]) & z[3])
        ^ (rotate_share3_1(y[1]) & z[3])
        ^ (rotate_share3_2(y[2]) & z[3])
        ^ (y[3] & z[3]);
}

fn chi5_step(x: &mut [ShareQuad; LANES], dst: usize, y: usize, z: usize) {
    let y_val = x[y];
    let z_val = x[z];
    let mut acc = x[dst];
    and_not_xor(&mut acc, &y_val, &z_val);
    x[dst] = acc;
}

/// Fresh randomness carried across the twelve rounds of one masked
/// permutation call. Each round consumes `even`/`odd` as the `a, b, c`
/// shares of a masked zero (the fourth share, `d`, is reconstructed from
/// rotated copies of the other three so the quad always XORs to zero),
/// then rotates the pool by a fixed per-slot amount before the next round.
#[cfg_attr(feature = "zeroize", derive(Zeroize, ZeroizeOnDrop))]
pub struct RandomPool {
    even: [u32; 3],
    odd: [u32; 3],
}

impl RandomPool {
    /// Draws a fresh pool from `rng`. Must be re-drawn (or at least
    /// re-rotated by the caller) between independent permutation calls
    /// that share key-dependent state — reusing a pool verbatim across
    /// calls reintroduces the correlation masking is meant to remove.
    pub fn fresh<R: RngCore>(rng: &mut R) -> Self {
        Self {
            even: [rng.next_u32(), rng.next_u32(), rng.next_u32()],
            odd: [rng.next_u32(), rng.next_u32(), rng.next_u32()],
        }
    }

    fn masked_zero(&self, half: usize) -> ShareQuad {
        let half = if half == EVEN { self.even } else { self.odd };
        let d = rotate_share3_0(half[0]) ^ rotate_share3_1(half[1]) ^ rotate_share3_2(half[2]);
        [half[0], half[1], half[2], d]
    }

    fn advance(&mut self) {
        self.even[0] = self.even[0].rotate_right(7);
        self.odd[0] = self.odd[0].rotate_right(7);
        self.even[1] = self.even[1].rotate_right(13);
        self.odd[1] = self.odd[1].rotate_right(13);
        self.even[2] = self.even[2].rotate_right(29);
        self.odd[2] = self.odd[2].rotate_right(29);
    }
}

fn linear_layer_share(lane_e: &mut [u32; LANES], lane_o: &mut [u32; LANES]) {
    let t0 = lane_e[0] ^ lane_o[0].rotate_right(4);
    let t1 = lane_o[0] ^ lane_e[0].rotate_right(5);
    let t2 = lane_e[1] ^ lane_e[1].rotate_right(11);
    let t3 = lane_o[1] ^ lane_o[1].rotate_right(11);
    let t4 = lane_e[2] ^ lane_o[2].rotate_right(2);
    let t5 = lane_o[2] ^ lane_e[2].rotate_right(3);
    let t6 = lane_e[3] ^ lane_o[3].rotate_right(3);
    let t7 = lane_o[3] ^ lane_e[3].rotate_right(4);
    let t8 = lane_e[4] ^ lane_e[4].rotate_right(17);
    let t9 = lane_o[4] ^ lane_o[4].rotate_right(17);

    lane_e[0] ^= t1.rotate_right(9);
    lane_o[0] ^= t0.rotate_right(10);
    lane_e[1] ^= t3.rotate_right(19);
    lane_o[1] ^= t2.rotate_right(20);
    lane_e[2] ^= t5;
    lane_o[2] ^= t4.rotate_right(1);
    lane_e[3] ^= t6.rotate_right(5);
    lane_o[3] ^= t7.rotate_right(5);
    lane_e[4] ^= t9.rotate_right(3);
    lane_o[4] ^= t8.rotate_right(4);
}

/// The permutation state in masked, bit-sliced form: `lanes[lane][parity]`
/// holds the four shares of that lane's even (`0`) or odd (`1`) half.
#[derive(Clone)]
#[cfg_attr(feature = "zeroize", derive(Zeroize, ZeroizeOnDrop))]
pub struct MaskedState {
    lanes: [[ShareQuad; 2]; LANES],
}

impl MaskedState {
    /// Splits a plain state into four shares using `rng`, bit-slicing each
    /// share's lanes into even/odd 32-bit halves.
    #[must_use]
    pub fn mask<R: RngCore>(state: &AsconState, rng: &mut R) -> Self {
        let mut lanes = [[[0u32; 4]; 2]; LANES];
        for lane in 0..LANES {
            let b = rng.next_u64();
            let c = rng.next_u64();
            let d = rng.next_u64();
            let a = state.words[lane] ^ b ^ c ^ d;
            for (share, word) in [a, b, c, d].into_iter().enumerate() {
                let (even, odd) = deinterleave(word);
                lanes[lane][EVEN][share] = even;
                lanes[lane][ODD][share] = odd;
            }
        }
        Self { lanes }
    }

    /// Recombines the shares back into a plain state.
    #[must_use]
    pub fn unmask(&self) -> AsconState {
        let mut words = [0u64; LANES];
        for (lane, word) in words.iter_mut().enumerate() {
            for share in 0..4 {
                *word ^= interleave(self.lanes[lane][EVEN][share], self.lanes[lane][ODD][share]);
            }
        }
        AsconState::new(words)
    }

    /// Runs the permutation starting at `first_round`, consuming and
    /// rotating `pool`'s randomness once per round.
    pub fn permute(&mut self, first_round: u8, pool: &mut RandomPool) {
        self.lanes[2][EVEN][0] = !self.lanes[2][EVEN][0];
        self.lanes[2][ODD][0] = !self.lanes[2][ODD][0];

        for round in usize::from(first_round)..12 {
            let (rc_e, rc_o) = ROUND_CONSTANTS[round];
            substitute_half(&mut self.lanes, EVEN, rc_e, pool);
            substitute_half(&mut self.lanes, ODD, rc_o, pool);
            linear_diffusion(&mut self.lanes);
            pool.advance();
        }

        self.lanes[2][EVEN][0] = !self.lanes[2][EVEN][0];
        self.lanes[2][ODD][0] = !self.lanes[2][ODD][0];
    }
}

fn substitute_half(lanes: &mut [[ShareQuad; 2]; LANES], parity: usize, rc: u32, pool: &RandomPool) {
    let mut x: [ShareQuad; LANES] = core::array::from_fn(|lane| lanes[lane][parity]);

    x[2][0] ^= rc;

    for s in 0..4 {
        x[0][s] ^= x[4][s];
        x[4][s] ^= x[3][s];
        x[2][s] ^= x[1][s];
    }
    let t1 = x[0];

    let mut t0 = pool.masked_zero(parity);
    and_not_xor(&mut t0, &x[0], &x[1]);
    chi5_step(&mut x, 0, 1, 2);
    chi5_step(&mut x, 1, 2, 3);
    chi5_step(&mut x, 2, 3, 4);
    {
        let x4 = x[4];
        let mut acc = x[3];
        and_not_xor(&mut acc, &x4, &t1);
        x[3] = acc;
    }
    for s in 0..4 {
        x[4][s] ^= t0[s];
    }

    for s in 0..4 {
        x[1][s] ^= x[0][s];
        x[0][s] ^= x[4][s];
        x[3][s] ^= x[2][s];
    }

    for (lane, slot) in lanes.iter_mut().enumerate() {
        slot[parity] = x[lane];
    }
}

fn linear_diffusion(lanes: &mut [[ShareQuad; 2]; LANES]) {
    for share in 0..4 {
        let mut lane_e: [u32; LANES] = core::array::from_fn(|lane| lanes[lane][EVEN][share]);
        let mut lane_o: [u32; LANES] = core::array::from_fn(|lane| lanes[lane][ODD][share]);
        linear_layer_share(&mut lane_e, &mut lane_o);
        for lane in 0..LANES {
            lanes[lane][EVEN][share] = lane_e[lane];
            lanes[lane][ODD][share] = lane_o[lane];
        }
    }
}

/// Splits a 64-bit word into its even-indexed and odd-indexed bits, each
/// packed down into a 32-bit half (standard SWAR bit deinterleave).
fn deinterleave(x: u64) -> (u32, u32) {
    fn compact(mut x: u64) -> u32 {
        x &= 0x5555_5555_5555_5555;
        x = (x | (x >> 1)) & 0x3333_3333_3333_3333;
        x = (x | (x >> 2)) & 0x0f0f_0f0f_0f0f_0f0f;
        x = (x | (x >> 4)) & 0x00ff_00ff_00ff_00ff;
        x = (x | (x >> 8)) & 0x0000_ffff_0000_ffff;
        x = (x | (x >> 16)) & 0x0000_0000_ffff_ffff;
        x as u32
    }
    (compact(x), compact(x >> 1))
}

/// Inverse of [`deinterleave`]: interleaves two 32-bit halves back into a
/// single 64-bit word.
fn interleave(even: u32, odd: u32) -> u64 {
    fn spread(x: u32) -> u64 {
        let mut x = u64::from(x);
        x = (x | (x << 16)) & 0x0000_ffff_0000_ffff;
        x = (x | (x << 8)) & 0x00ff_00ff_00ff_00ff;
        x = (x | (x << 4)) & 0x0f0f_0f0f_0f0f_0f0f;
        x = (x | (x << 2)) & 0x3333_3333_3333_3333;
        x = (x | (x << 1)) & 0x5555_5555_5555_5555;
        x
    }
    spread(even) | (spread(odd) << 1)
}
