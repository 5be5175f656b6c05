//! Blake2b hashing for expansion commitments.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use weft_types::ExpansionHash;

type Blake2b256 = Blake2b<U32>;

/// Compute a 256-bit Blake2b hash of arbitrary data.
pub fn blake2b_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Hash an expansion payload to produce the commitment its link carries.
pub fn hash_expansion(payload: &[u8]) -> ExpansionHash {
    ExpansionHash::new(blake2b_256(payload))
}
