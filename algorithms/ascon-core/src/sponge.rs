//! Rate-level sponge primitives shared by the AEAD and XOF/Hash modes.
//!
//! These are deliberately low-level: absorb/squeeze a block of up to
//! [`MAX_RATE`] bytes, pad a partial block, or flip the domain-separator
//! bit. The higher-level modes in [`crate::aead`] and [`crate::xof`]
//! compose these with [`crate::permutation::permute`] to drive the actual
//! constructions.

use crate::permutation::permute;
use crate::state::AsconState;

/// Widest rate supported by any mode in this crate (ASCON-*A variants).
pub const MAX_RATE: usize = 16;

/// Narrow rate used by ASCON-80pq-SIV and plain ASCON-HASH/XOF.
pub const RATE_8: usize = 8;

/// Wide rate used by ASCON-HASHA/XOFA.
pub const RATE_16: usize = 16;

/// `p^b`, the six-round permutation used between sponge blocks at rate 8
/// in the AEAD constructions.
pub const INNER_ROUNDS_RATE8: u8 = 6;

/// XORs up to [`MAX_RATE`] bytes of `data` into the leading lanes of `state`.
///
/// # Panics
///
/// Panics if `data.len() > MAX_RATE`.
pub fn absorb_into(state: &mut AsconState, data: &[u8]) {
    assert!(data.len() <= MAX_RATE, "absorb block exceeds MAX_RATE");
    state.xor_bytes(data, 0);
}

/// Reads up to [`MAX_RATE`] bytes out of the leading lanes of `state`.
///
/// # Panics
///
/// Panics if `out.len() > MAX_RATE`.
pub fn squeeze_from(state: &AsconState, out: &mut [u8]) {
    assert!(out.len() <= MAX_RATE, "squeeze block exceeds MAX_RATE");
    state.read_bytes(out, 0);
}

/// XORs an arbitrary-length byte string into the state at full-width byte
/// `offset` (`0..40`), not just the leading rate window.
///
/// Used by the AEAD key-schedule steps, which address bytes past the rate
/// — e.g. writing a 20-byte key starting at offset 20 of the 40-byte
/// state.
pub fn absorb_partial(state: &mut AsconState, buf: &[u8], offset: usize, len: usize) {
    state.xor_bytes(&buf[..len], offset);
}

/// Reads 8 bytes back out of the state at full-width byte `offset`.
pub fn squeeze_8(state: &AsconState, out: &mut [u8; 8], offset: usize) {
    state.read_bytes(out, offset);
}

/// XORs a 16-byte buffer into the state at full-width byte `offset`.
pub fn absorb_16(state: &mut AsconState, buf: &[u8; 16], offset: usize) {
    state.xor_bytes(buf, offset);
}

/// Reads a 16-byte buffer back out of the state at full-width byte `offset`.
pub fn squeeze_16(state: &AsconState, out: &mut [u8; 16], offset: usize) {
    state.read_bytes(out, offset);
}

/// XORs the `0x80` padding marker at byte offset `offset` within the rate
/// window (`offset` is the number of real bytes already absorbed into the
/// current block, so `offset < rate`).
pub fn pad(state: &mut AsconState, offset: usize) {
    state.xor_byte_at(offset / 8, offset % 8, 0x80);
}

/// Flips the domain-separation bit between sponge phases (e.g. between
/// associated-data absorption and plaintext absorption/squeezing in the
/// AEAD mode).
pub fn separator(state: &mut AsconState) {
    state.xor_x4_lsb(1);
}

/// Absorbs an arbitrary-length byte string at rate 8, running `permute`
/// with `first_round` between full blocks.
///
/// `include_final_pad` controls whether a final, purely-padding block is
/// appended when `data.len()` is an exact multiple of the rate: set for
/// associated data, clear for plaintext/ciphertext, matching the reference
/// construction this mode is ported from.
pub fn absorb_rate8(state: &mut AsconState, data: &[u8], first_round: u8, include_final_pad: bool) {
    let mut chunks = data.chunks_exact(RATE_8);
    for block in &mut chunks {
        absorb_into(state, block);
        permute(state, first_round);
    }
    let remainder = chunks.remainder();
    if !remainder.is_empty() {
        absorb_into(state, remainder);
        pad(state, remainder.len());
        permute(state, first_round);
    } else if include_final_pad {
        pad(state, 0);
        permute(state, first_round);
    }
}
