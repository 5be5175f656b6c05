//! Hashing and expansion commitment verification.
//!
//! Signature verification of chain links happens upstream in whatever
//! loads and checks chains; this crate covers only the hash side:
//! committing to an out-of-band expansion payload and re-verifying a
//! supplied payload against that commitment.

pub mod expansion;
pub mod hash;

pub use expansion::{extract_expansion, ExpansionError};
pub use hash::{blake2b_256, hash_expansion};
