//! Parse error for hex-encoded identifiers.

use thiserror::Error;

/// Failure to parse a hex-encoded identifier from its string form.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("invalid {kind}: {source}")]
pub struct IdParseError {
    /// Which identifier type was being parsed.
    pub kind: &'static str,
    #[source]
    pub source: hex::FromHexError,
}
