//! Compact token payload extraction.
//!
//! A bearer token is three dot-separated base64url segments
//! (`header.payload.signature`). Only the payload is of interest here: it
//! is decoded and parsed into [`TokenClaims`] for UI gating. The signature
//! segment is never looked at — callers must not treat the result as a
//! verified identity.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::TokenClaims;

/// Decode the payload segment of a bearer token into claims.
///
/// Returns `None` on any malformation: wrong segment count, invalid
/// base64, invalid UTF-8, or a payload that is not a JSON object. This
/// function never panics and never returns an error type: a bad token is
/// simply "no claims", and every dependent predicate degrades to its
/// empty/false default.
pub fn decode_claims(token: &str) -> Option<TokenClaims> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        tracing::debug!(segments = segments.len(), "token does not have 3 segments");
        return None;
    }

    let bytes = decode_base64url(segments[1])?;
    let payload = String::from_utf8(bytes).ok()?;

    match serde_json::from_str(&payload) {
        Ok(claims) => Some(claims),
        Err(err) => {
            tracing::debug!(%err, "token payload is not a valid claims object");
            None
        }
    }
}

/// Reverse the URL-safe substitutions, re-pad, and decode with the
/// standard alphabet.
fn decode_base64url(segment: &str) -> Option<Vec<u8>> {
    let mut standard = segment.replace('-', "+").replace('_', "/");
    while standard.len() % 4 != 0 {
        standard.push('=');
    }
    STANDARD.decode(standard).ok()
}
