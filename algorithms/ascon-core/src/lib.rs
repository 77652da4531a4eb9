#![cfg_attr(not(feature = "std"), no_std)]

//! # ascon-core
//!
//! The permutation, sponge, AEAD, and XOF/hash primitives of the ASCON
//! lightweight-cryptography family, plus an optional four-share
//! Boolean-masked permutation backend for side-channel resistance.
//!
//! ```rust
//! use ascon_core::aead::{Ascon80pqSiv, KEY_SIZE, NONCE_SIZE};
//!
//! let cipher = Ascon80pqSiv::new([0u8; KEY_SIZE]);
//! let nonce = [0u8; NONCE_SIZE];
//! let ct = cipher.encrypt(&nonce, b"associated data", b"plaintext");
//! let pt = cipher.decrypt(&nonce, b"associated data", &ct).unwrap();
//! assert_eq!(pt, b"plaintext");
//! ```
//!
//! ```rust
//! let digest = ascon_core::xof::hash(b"message");
//! assert_eq!(digest.len(), 32);
//! ```

#[cfg(not(feature = "std"))]
extern crate alloc;

// =============================================================================
// MODULES
// =============================================================================

/// ASCON-80pq-SIV, the nonce-misuse-resistant AEAD mode.
pub mod aead;
/// The [`error::VerifyError`] type returned by AEAD decryption on failure.
pub mod error;
/// Four-share Boolean-masked permutation backend.
#[cfg(feature = "masked")]
pub mod masked;
/// The unmasked 320-bit ASCON permutation.
pub mod permutation;
/// Rate-level absorb/squeeze/pad/separator primitives.
pub mod sponge;
/// The permutation state and its big-endian byte codec.
pub mod state;
/// ASCON-XOF/XOFA and ASCON-HASH/HASHA.
pub mod xof;

// =============================================================================
// EXPORTS
// =============================================================================

#[cfg(feature = "digest-trait")]
pub use digest;
pub use aead::Ascon80pqSiv;
pub use error::VerifyError;
pub use state::AsconState;
pub use xof::{hash, hasha, Xof, XofA};
