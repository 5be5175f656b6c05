//! Web-of-trust vouch verification.
//!
//! The server may *propose* vouches about an identity; nothing it says is
//! trusted. Each candidate is cross-checked against two independently
//! signed histories: the vouch link in the voucher's chain and, when the
//! vouchee reacted, the reaction link in the vouchee's chain. Payloads
//! are released only after re-hashing to their link's commitment, the
//! identity assertion must name exactly the vouchee, and a reaction must
//! reference exactly the vouch it answers. What survives comes out as a
//! [`ValidatedVouch`] with its status resolved; anything else fails the
//! candidate — and, fail-fast, its whole batch.

pub mod candidate;
pub mod error;
pub mod expansion;
pub mod service;
pub mod session;
pub mod source;
pub mod status;
pub mod vouch;

pub use candidate::CandidateVouch;
pub use error::{LinkRole, WotError};
pub use expansion::{
    Confidence, EldestAssertion, ReactionExpansion, SeqTail, VouchExpansion, VouchedUser,
};
pub use service::WotService;
pub use session::Session;
pub use source::{UserLoader, VouchSource};
pub use status::{resolve_status, ReactionType, VouchStatus};
pub use vouch::ValidatedVouch;
