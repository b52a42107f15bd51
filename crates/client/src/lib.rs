//! `comptoir-client`
//!
//! **Responsibility:** native client for the comptoir suite (identity,
//! products, clients, assistant chat behind one gateway).
//!
//! The load-bearing part of this crate is the authentication/authorization
//! subsystem: the on-disk credential slot ([`store`]), the session manager
//! owning the authentication signal ([`session`]), the live access policy
//! ([`policy`]) and the guard/gate predicates ([`guard`]). Screens and the
//! HTTP clients are thin plumbing around it.
//!
//! The client is a **thin shell** around the gateway: every authorization
//! decision it makes is advisory (which screens and buttons to offer); the
//! services re-enforce the same policy server-side.

pub mod api;
pub mod error;
pub mod guard;
pub mod policy;
pub mod screens;
pub mod session;
pub mod store;

pub use error::AuthError;
pub use guard::{AccessLevel, Decision, GateDenied, Router, Screen, require_admin};
pub use policy::{AccessPolicy, AccessSnapshot};
pub use session::Session;
pub use store::CredentialStore;
