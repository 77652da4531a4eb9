//! ASCON-XOF / ASCON-XOFA extensible-output functions, and the ASCON-HASH
//! / ASCON-HASHA fixed-length hashes built on top of them.
//!
//! Both siblings share the same incremental sponge state machine; they
//! differ only in their initialization vector and in how many rounds the
//! permutation runs between blocks (`R::INNER_ROUND`, the "a" vs "b"
//! split). ASCON-HASH/-HASHA are simply the `outlen = 32` instance of the
//! same `init_fixed` mechanism, not a separate construction.

use core::marker::PhantomData;

use crate::permutation::permute;
use crate::sponge::RATE_8;
use crate::state::AsconState;

/// Digest size produced by [`hash`] and [`hasha`].
pub const HASH_SIZE: usize = 32;

/// Selects the IV and inter-block round count for a sponge instantiation.
pub trait RoundSchedule: Copy {
    /// Initialization vector placed in `x0` before the opening permutation;
    /// `x1..x4` start at zero.
    const IV: u64;
    /// `first_round` passed to [`permute`] between rate-8 blocks.
    const INNER_ROUND: u8;
}

/// ASCON-XOF's round schedule: full twelve-round permutation between every
/// block, both absorbing and squeezing.
#[derive(Clone, Copy, Debug, Default)]
pub struct XofRounds;

impl RoundSchedule for XofRounds {
    const IV: u64 = 0x0040_0c00_0000_0000;
    const INNER_ROUND: u8 = 0;
}

/// ASCON-XOFA's round schedule: eight rounds between blocks, lighter than
/// plain XOF at the cost of a smaller security margin.
#[derive(Clone, Copy, Debug, Default)]
pub struct XofARounds;

impl RoundSchedule for XofARounds {
    const IV: u64 = 0x0040_0c04_0000_0000;
    const INNER_ROUND: u8 = 4;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SpongeMode {
    Absorb,
    Squeeze,
}

/// Incremental ASCON-XOF(A) sponge state.
///
/// `R` selects which construction this is (see [`Xof`] / [`XofA`]). The
/// permutation state zeroizes itself on drop via [`AsconState`]'s own
/// `Drop` impl (when the `zeroize` feature is enabled); `Sponge` needs no
/// `Drop` of its own.
#[derive(Clone)]
pub struct Sponge<R> {
    state: AsconState,
    count: u8,
    mode: SpongeMode,
    _schedule: PhantomData<R>,
}

impl<R: RoundSchedule> Sponge<R> {
    /// Initializes for arbitrary-length output.
    #[must_use]
    pub fn init() -> Self {
        Self::init_with_iv(R::IV)
    }

    /// Initializes for a fixed `outlen`-byte output, encoding `outlen` (in
    /// bits) into the IV before the opening permutation. If `outlen * 8`
    /// does not fit in 32 bits, this silently falls back to arbitrary-length
    /// output rather than truncating the encoded length.
    #[must_use]
    pub fn init_fixed(outlen: usize) -> Self {
        let bits = (outlen as u64).saturating_mul(8);
        let bits = if bits < (1u64 << 32) { bits } else { 0 };
        let iv = (R::IV & 0xffff_ffff_0000_0000) | bits;
        Self::init_with_iv(iv)
    }

    fn init_with_iv(iv: u64) -> Self {
        let mut state = AsconState::new([iv, 0, 0, 0, 0]);
        permute(&mut state, 0);
        Self {
            state,
            count: 0,
            mode: SpongeMode::Absorb,
            _schedule: PhantomData,
        }
    }

    /// Re-initializes for arbitrary-length output, reusing storage.
    pub fn reinit(&mut self) {
        *self = Self::init();
    }

    /// Re-initializes for a fixed `outlen`-byte output, reusing storage.
    pub fn reinit_fixed(&mut self, outlen: usize) {
        *self = Self::init_fixed(outlen);
    }

    /// Absorbs more input.
    ///
    /// Calling this after [`Sponge::squeeze`] has begun is a usage error;
    /// the reference construction this is ported from does not check for
    /// it, so in release builds it is treated as continuing to mutate the
    /// post-squeeze state rather than panicking.
    pub fn absorb(&mut self, data: &[u8]) {
        debug_assert!(
            self.mode == SpongeMode::Absorb,
            "absorb() called after squeeze() has begun"
        );
        for &byte in data {
            self.state.xor_byte_at(0, usize::from(self.count), byte);
            self.count += 1;
            if usize::from(self.count) == RATE_8 {
                permute(&mut self.state, R::INNER_ROUND);
                self.count = 0;
            }
        }
    }

    fn pad_in_place(&mut self) {
        self.state.xor_byte_at(0, usize::from(self.count), 0x80);
        self.count = 0;
    }

    /// Squeezes `out.len()` bytes of output.
    ///
    /// The first call pads and permutes to transition from absorbing to
    /// squeezing; subsequent calls continue from where the last one left
    /// off, so `squeeze(&mut buf[..n])` followed by `squeeze(&mut buf[..k])`
    /// yields the same `n+k` bytes as one `squeeze(&mut buf[..n+k])` call.
    pub fn squeeze(&mut self, out: &mut [u8]) {
        if self.mode == SpongeMode::Absorb {
            self.pad_in_place();
            permute(&mut self.state, R::INNER_ROUND);
            self.mode = SpongeMode::Squeeze;
            self.count = 0;
        }
        for byte in out.iter_mut() {
            if usize::from(self.count) == RATE_8 {
                permute(&mut self.state, R::INNER_ROUND);
                self.count = 0;
            }
            *byte = self.state.byte_at(0, usize::from(self.count));
            self.count += 1;
        }
    }

    /// Clears the rate to zero and permutes, for SpongePRNG-style forward
    /// secrecy: recovering the pre-clear state from a post-clear capture
    /// requires inverting the permutation. Leaves the sponge ready to
    /// absorb again.
    pub fn clear_rate(&mut self) {
        self.pad_in_place();
        self.state.words[0] = 0;
        permute(&mut self.state, R::INNER_ROUND);
        self.mode = SpongeMode::Absorb;
    }

    /// Deep-copies an initialized sponge.
    #[must_use]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Securely clears the state by consuming and dropping it.
    pub fn free(self) {}
}

/// Incremental ASCON-XOF state.
pub type Xof = Sponge<XofRounds>;
/// Incremental ASCON-XOFA state.
pub type XofA = Sponge<XofARounds>;

/// One-shot ASCON-XOF: absorbs `data` and fills `out` with arbitrary-length
/// output.
pub fn xof_oneshot(data: &[u8], out: &mut [u8]) {
    let mut sponge = Xof::init();
    sponge.absorb(data);
    sponge.squeeze(out);
}

/// One-shot ASCON-XOFA: absorbs `data` and fills `out` with arbitrary-length
/// output.
pub fn xofa_oneshot(data: &[u8], out: &mut [u8]) {
    let mut sponge = XofA::init();
    sponge.absorb(data);
    sponge.squeeze(out);
}

/// ASCON-HASH: fixed 32-byte digest.
#[must_use]
pub fn hash(data: &[u8]) -> [u8; HASH_SIZE] {
    let mut sponge = Xof::init_fixed(HASH_SIZE);
    sponge.absorb(data);
    let mut out = [0u8; HASH_SIZE];
    sponge.squeeze(&mut out);
    out
}

/// ASCON-HASHA: fixed 32-byte digest, lighter inter-block permutation.
#[must_use]
pub fn hasha(data: &[u8]) -> [u8; HASH_SIZE] {
    let mut sponge = XofA::init_fixed(HASH_SIZE);
    sponge.absorb(data);
    let mut out = [0u8; HASH_SIZE];
    sponge.squeeze(&mut out);
    out
}

#[cfg(feature = "digest-trait")]
mod digest_impls {
    use super::{RoundSchedule, Sponge};
    use digest::{ExtendableOutput, Update, XofReader};

    impl<R: RoundSchedule> Update for Sponge<R> {
        fn update(&mut self, data: &[u8]) {
            self.absorb(data);
        }
    }

    impl<R: RoundSchedule> XofReader for Sponge<R> {
        fn read(&mut self, buffer: &mut [u8]) {
            self.squeeze(buffer);
        }
    }

    impl<R: RoundSchedule> ExtendableOutput for Sponge<R> {
        type Reader = Self;

        fn finalize_xof(mut self) -> Self::Reader {
            // Force the absorb -> squeeze transition without emitting
            // anything, so the returned reader can `read()` immediately.
            let mut nothing = [0u8; 0];
            self.squeeze(&mut nothing);
            self
        }
    }
}
