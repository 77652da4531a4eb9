//! Error types.
//!
//! Kept hand-rolled rather than pulled in from an error-derive crate,
//! matching how small, dependency-light error types are defined elsewhere
//! in this codebase.

use core::fmt;

/// Authentication failed during [`crate::aead::Ascon80pqSiv::decrypt`].
///
/// Carries no payload: the sponge construction gives no meaningful detail
/// beyond "the tag did not match," and leaking anything more specific
/// (e.g. how many bytes matched) would itself be a side channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VerifyError;

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ASCON AEAD authentication failed")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for VerifyError {}
