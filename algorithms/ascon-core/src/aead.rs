//! ASCON-80pq-SIV: a two-pass, nonce-misuse-resistant AEAD.
//!
//! The construction authenticates first (producing a 16-byte tag over the
//! associated data and plaintext), then uses that tag as the nonce for an
//! OFB-mode encryption pass — the "synthetic IV" that gives the mode its
//! name. Reusing a nonce at the API level degrades gracefully rather than
//! catastrophically, as long as the plaintext varies.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use subtle::ConstantTimeEq;
#[cfg(feature = "zeroize")]
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::VerifyError;
use crate::permutation::permute;
use crate::sponge::{absorb_16, absorb_partial, absorb_rate8, separator, squeeze_16, squeeze_8, INNER_ROUNDS_RATE8};
use crate::state::AsconState;

/// Key size for ASCON-80pq (post-quantum margin: 160-bit key).
pub const KEY_SIZE: usize = 20;
/// Nonce size, shared with the standard ASCON-128/128a AEADs.
pub const NONCE_SIZE: usize = 16;
/// Tag size, shared with the standard ASCON-128/128a AEADs.
pub const TAG_SIZE: usize = 16;

const IV1: u32 = 0xa140_0c06; // authentication phase
const IV2: u32 = 0xa240_0c06; // encryption phase

/// ASCON-80pq-SIV, keyed with a 20-byte key.
///
/// Holds only the key; the permutation state is reconstructed fresh for
/// each phase of each `encrypt`/`decrypt` call rather than being kept
/// around between calls.
#[derive(Clone)]
#[cfg_attr(feature = "zeroize", derive(Zeroize, ZeroizeOnDrop))]
pub struct Ascon80pqSiv {
    key: [u8; KEY_SIZE],
}

impl Ascon80pqSiv {
    /// Builds an AEAD instance bound to `key`.
    #[must_use]
    pub const fn new(key: [u8; KEY_SIZE]) -> Self {
        Self { key }
    }

    fn init_state(&self, nonce_like: &[u8; NONCE_SIZE], iv: u32) -> AsconState {
        let mut state = AsconState::default();
        state.xor_bytes(&iv.to_be_bytes(), 0);
        state.xor_bytes(&self.key, 4);
        state.xor_bytes(nonce_like, 24);
        permute(&mut state, 0);
        absorb_partial(&mut state, &self.key, 20, KEY_SIZE);
        state
    }

    fn authenticate(&self, nonce: &[u8; NONCE_SIZE], ad: &[u8], message: &[u8]) -> [u8; TAG_SIZE] {
        let mut state = self.init_state(nonce, IV1);
        if !ad.is_empty() {
            absorb_rate8(&mut state, ad, INNER_ROUNDS_RATE8, true);
        }
        separator(&mut state);
        absorb_rate8(&mut state, message, INNER_ROUNDS_RATE8, false);

        absorb_partial(&mut state, &self.key, 8, KEY_SIZE);
        permute(&mut state, 0);
        let mut key_tail = [0u8; 16];
        key_tail.copy_from_slice(&self.key[4..20]);
        absorb_16(&mut state, &key_tail, 24);

        let mut tag = [0u8; TAG_SIZE];
        squeeze_16(&state, &mut tag, 24);
        tag
    }

    /// Encrypts `plaintext` under `nonce` and `ad`, returning
    /// `ciphertext || tag`.
    #[must_use]
    pub fn encrypt(&self, nonce: &[u8; NONCE_SIZE], ad: &[u8], plaintext: &[u8]) -> Vec<u8> {
        let mlen = plaintext.len();
        let tag = self.authenticate(nonce, ad, plaintext);

        let mut out = Vec::with_capacity(mlen + TAG_SIZE);
        out.resize(mlen + TAG_SIZE, 0u8);
        let (ct, tag_out) = out.split_at_mut(mlen);
        tag_out.copy_from_slice(&tag);

        let mut state = self.init_state(&tag, IV2);
        ofb_xor(&mut state, ct, plaintext, INNER_ROUNDS_RATE8);
        out
    }

    /// Decrypts `ciphertext` (which must be `plaintext-length + TAG_SIZE`
    /// bytes, the layout `encrypt` produces) under `nonce` and `ad`.
    ///
    /// # Errors
    ///
    /// Returns [`VerifyError`] if `ciphertext` is shorter than [`TAG_SIZE`]
    /// or if the recomputed tag does not match. On failure the recovered
    /// plaintext buffer is zeroed before returning.
    pub fn decrypt(
        &self,
        nonce: &[u8; NONCE_SIZE],
        ad: &[u8],
        ciphertext: &[u8],
    ) -> Result<Vec<u8>, VerifyError> {
        if ciphertext.len() < TAG_SIZE {
            return Err(VerifyError);
        }
        let clen = ciphertext.len() - TAG_SIZE;
        let (ct, tag_bytes) = ciphertext.split_at(clen);
        let mut tag = [0u8; TAG_SIZE];
        tag.copy_from_slice(tag_bytes);

        let mut m = Vec::with_capacity(clen);
        m.resize(clen, 0u8);
        let mut state = self.init_state(&tag, IV2);
        ofb_xor(&mut state, &mut m, ct, INNER_ROUNDS_RATE8);

        let computed_tag = self.authenticate(nonce, ad, &m);

        if bool::from(computed_tag.ct_eq(&tag)) {
            Ok(m)
        } else {
            scrub(&mut m);
            Err(VerifyError)
        }
    }
}

/// Runs the permutation in OFB mode: each call to `permute` produces an
/// 8-byte keystream block that is XORed into `src` to produce `dest`. OFB
/// is its own inverse, so this same loop drives both encryption and
/// decryption.
///
/// The final partial block truncates the keystream to the remaining bytes
/// rather than padding the message — distinct from the sponge's `0x80`
/// padding used during absorption.
fn ofb_xor(state: &mut AsconState, dest: &mut [u8], src: &[u8], first_round: u8) {
    let mut offset = 0;
    while offset + 8 <= src.len() {
        permute(state, first_round);
        let mut block = [0u8; 8];
        squeeze_8(state, &mut block, 0);
        for i in 0..8 {
            dest[offset + i] = src[offset + i] ^ block[i];
        }
        offset += 8;
    }
    let remainder = src.len() - offset;
    if remainder > 0 {
        permute(state, first_round);
        let mut block = [0u8; 8];
        squeeze_8(state, &mut block, 0);
        for i in 0..remainder {
            dest[offset + i] = src[offset + i] ^ block[i];
        }
    }
}

#[cfg(feature = "zeroize")]
fn scrub(buf: &mut [u8]) {
    buf.zeroize();
}

#[cfg(not(feature = "zeroize"))]
fn scrub(buf: &mut [u8]) {
    for b in buf.iter_mut() {
        *b = 0;
    }
}
