//! Expansion extraction — commitment verification of out-of-band payloads.
//!
//! A chain link does not embed its large payload; it commits to it by
//! hash. The server supplies the payload separately, and nothing in it
//! may be trusted until it re-hashes to the link's commitment.

use crate::hash::hash_expansion;
use thiserror::Error;
use weft_types::ExpansionHash;

#[derive(Debug, Error)]
pub enum ExpansionError {
    /// A link commits to an expansion but the candidate supplied no payload.
    #[error("no expansion payload supplied")]
    MissingPayload,

    /// The supplied payload does not hash to the link's commitment.
    #[error("expansion hash mismatch: link commits to {committed}, payload hashes to {computed}")]
    HashMismatch {
        committed: ExpansionHash,
        computed: ExpansionHash,
    },
}

/// Verify `payload` against a link's `commitment` and release its bytes.
///
/// The returned bytes are safe to parse: they are exactly the bytes the
/// link's signer committed to.
pub fn extract_expansion(
    commitment: &ExpansionHash,
    payload: &str,
) -> Result<Vec<u8>, ExpansionError> {
    let computed = hash_expansion(payload.as_bytes());
    if computed != *commitment {
        return Err(ExpansionError::HashMismatch {
            committed: *commitment,
            computed,
        });
    }
    Ok(payload.as_bytes().to_vec())
}
