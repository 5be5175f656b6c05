//! HTTP implementations of the weft collaborator interfaces.
//!
//! [`WotApiClient`] talks to a weft server: it fetches candidate vouches
//! and loads identity records with their chains, implementing the
//! [`weft_wot::VouchSource`] and [`weft_wot::UserLoader`] seams that the
//! verification core depends on. Chain links arrive from the server
//! already signature-checked; this side re-validates their structure
//! when assembling the [`weft_chain::SigChain`].

pub mod api;
pub mod config;

pub use api::WotApiClient;
pub use config::{ClientConfig, ConfigError};
