//! Fundamental types for the weft web-of-trust client.
//!
//! This crate defines the types shared across every other crate in the
//! workspace: usernames, user and key identifiers, signature identifiers,
//! sequence numbers, expansion hashes, and timestamps.

pub mod error;
pub mod hash;
pub mod key_id;
pub mod seqno;
pub mod sig_id;
pub mod time;
pub mod user_id;
pub mod username;

pub use error::IdParseError;
pub use hash::ExpansionHash;
pub use key_id::KeyId;
pub use seqno::Seqno;
pub use sig_id::SigId;
pub use time::Timestamp;
pub use user_id::UserId;
pub use username::Username;
