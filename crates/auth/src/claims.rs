use serde::{Deserialize, Serialize};

use crate::Role;

/// Subject reported when a token is absent, undecodable, or carries no `sub`.
pub const ANONYMOUS_SUBJECT: &str = "anonymous";

/// Unverified claims extracted from a bearer token payload.
///
/// Every field is optional on the wire; a payload that is valid JSON but
/// carries none of them still decodes (to an all-default claim set).
/// Timestamps are carried for display but **not** enforced: a token is
/// treated as live until the user logs out, matching the gateway's
/// stateless bearer scheme. Unknown payload fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject (username) the token was issued to.
    #[serde(default)]
    pub sub: Option<String>,

    /// Roles granted to the subject. Absent means no roles, not an error.
    #[serde(default)]
    pub roles: Vec<Role>,

    /// Issued-at, seconds since the epoch.
    #[serde(default)]
    pub iat: Option<i64>,

    /// Expiry, seconds since the epoch. Carried, never checked client-side.
    #[serde(default)]
    pub exp: Option<i64>,
}

impl TokenClaims {
    /// The subject, or [`ANONYMOUS_SUBJECT`] when the token carried none.
    pub fn subject(&self) -> &str {
        self.sub.as_deref().unwrap_or(ANONYMOUS_SUBJECT)
    }

    pub fn has_role(&self, role: &Role) -> bool {
        self.roles.contains(role)
    }

    /// The sole authorization distinction in the client.
    pub fn is_admin(&self) -> bool {
        self.has_role(&Role::ADMIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_falls_back_to_anonymous() {
        let claims = TokenClaims::default();
        assert_eq!(claims.subject(), ANONYMOUS_SUBJECT);
    }

    #[test]
    fn admin_requires_exact_role() {
        let claims = TokenClaims {
            sub: Some("alice".to_string()),
            roles: vec![Role::new("ADMIN"), Role::new("USER")],
            ..TokenClaims::default()
        };
        assert!(claims.is_admin());
        assert!(claims.has_role(&Role::new("USER")));

        let claims = TokenClaims {
            roles: vec![Role::new("admin")],
            ..TokenClaims::default()
        };
        assert!(!claims.is_admin(), "role comparison is case-sensitive");
    }

    #[test]
    fn payload_with_no_fields_deserializes_to_defaults() {
        let claims: TokenClaims = serde_json::from_str("{}").unwrap();
        assert_eq!(claims, TokenClaims::default());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let claims: TokenClaims =
            serde_json::from_str(r#"{"sub":"bob","aud":"comptoir","nbf":0}"#).unwrap();
        assert_eq!(claims.subject(), "bob");
        assert!(claims.roles.is_empty());
    }
}
