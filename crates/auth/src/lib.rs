//! `comptoir-auth` — claim model and bearer token payload decoding.
//!
//! This crate is intentionally decoupled from HTTP and storage. It extracts
//! the **unverified** claims embedded in a bearer token so the client can
//! tailor its UI (which screens and actions to offer). Nothing here is a
//! trust boundary: no signature verification happens client-side, and the
//! gateway re-checks every call independently.

pub mod claims;
pub mod decode;
pub mod roles;

pub use claims::{ANONYMOUS_SUBJECT, TokenClaims};
pub use decode::decode_claims;
pub use roles::Role;
