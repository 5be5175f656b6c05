//! Identity sig chains — append-only signed histories.
//!
//! Chains are loaded and signature-checked elsewhere (the loader/server
//! boundary); this crate models the loaded form: typed links, structural
//! validation, revocation application, and resolution of links by
//! signature id with an expected kind.

pub mod chain;
pub mod error;
pub mod link;
pub mod user;

pub use chain::SigChain;
pub use error::ChainError;
pub use link::{ChainLink, LinkKind};
pub use user::{User, UserVersion};
