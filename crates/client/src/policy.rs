//! Live access policy over the current session.

use std::sync::Arc;

use comptoir_auth::{ANONYMOUS_SUBJECT, Role, TokenClaims, decode_claims};

use crate::session::Session;

/// Answers "who is this session" and "what may it do" from the live
/// credential.
///
/// Every call reads through session → store → decoder; nothing is cached,
/// so a credential change is reflected on the very next read. All answers
/// are advisory UI gating — the services enforce the real policy.
#[derive(Clone)]
pub struct AccessPolicy {
    session: Arc<Session>,
}

/// One coherent read of the authorization-relevant state, for guard and
/// gate evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessSnapshot {
    pub authenticated: bool,
    pub admin: bool,
}

impl AccessPolicy {
    pub fn new(session: Arc<Session>) -> Self {
        Self { session }
    }

    fn claims(&self) -> Option<TokenClaims> {
        self.session.token().as_deref().and_then(decode_claims)
    }

    /// Roles granted to the current session; empty when there is no
    /// credential or it does not decode.
    pub fn roles(&self) -> Vec<Role> {
        self.claims().map(|c| c.roles).unwrap_or_default()
    }

    pub fn has_role(&self, role: &Role) -> bool {
        self.claims().is_some_and(|c| c.has_role(role))
    }

    /// The single authorization distinction in the client.
    pub fn is_admin(&self) -> bool {
        self.has_role(&Role::ADMIN)
    }

    /// Decoded subject, or `"anonymous"`.
    pub fn user_id(&self) -> String {
        self.claims()
            .map(|c| c.subject().to_string())
            .unwrap_or_else(|| ANONYMOUS_SUBJECT.to_string())
    }

    pub fn snapshot(&self) -> AccessSnapshot {
        AccessSnapshot {
            authenticated: self.session.is_authenticated(),
            admin: self.is_admin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AuthError;
    use crate::{CredentialStore, api::IdentityApi};

    struct NoIdentity;

    #[async_trait::async_trait]
    impl IdentityApi for NoIdentity {
        async fn login(&self, _: &str, _: &str) -> Result<String, AuthError> {
            Err(AuthError::Rejected {
                message: "unused".to_string(),
            })
        }
        async fn register(&self, _: &str, _: &str, _: &str) -> Result<(), AuthError> {
            Ok(())
        }
    }

    const ADMIN_TOKEN: &str =
        "eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiJhbGljZSIsInJvbGVzIjpbIkFETUlOIl19.sig";
    const USER_TOKEN: &str =
        "eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiJib2IiLCJyb2xlcyI6WyJVU0VSIl19.sig";

    fn policy_with_token(dir: &tempfile::TempDir, token: Option<&str>) -> AccessPolicy {
        let store = CredentialStore::at_path(dir.path().join("token"));
        if let Some(token) = token {
            store.set(token);
        }
        AccessPolicy::new(Arc::new(Session::new(store, Arc::new(NoIdentity))))
    }

    #[test]
    fn admin_token_grants_admin() {
        let dir = tempfile::tempdir().unwrap();
        let policy = policy_with_token(&dir, Some(ADMIN_TOKEN));
        assert_eq!(policy.user_id(), "alice");
        assert!(policy.is_admin());
    }

    #[test]
    fn user_token_is_not_admin() {
        let dir = tempfile::tempdir().unwrap();
        let policy = policy_with_token(&dir, Some(USER_TOKEN));
        assert!(!policy.is_admin());
        assert!(policy.has_role(&Role::new("USER")));
        assert_eq!(policy.user_id(), "bob");
    }

    #[test]
    fn no_credential_degrades_to_anonymous() {
        let dir = tempfile::tempdir().unwrap();
        let policy = policy_with_token(&dir, None);
        assert!(policy.roles().is_empty());
        assert!(!policy.is_admin());
        assert_eq!(policy.user_id(), ANONYMOUS_SUBJECT);
        assert_eq!(
            policy.snapshot(),
            AccessSnapshot {
                authenticated: false,
                admin: false
            }
        );
    }

    #[test]
    fn malformed_credential_degrades_to_no_roles() {
        let dir = tempfile::tempdir().unwrap();
        let policy = policy_with_token(&dir, Some("garbage-token"));
        assert!(policy.roles().is_empty());
        assert_eq!(policy.user_id(), ANONYMOUS_SUBJECT);
        // Present-but-undecodable still counts as authenticated: the signal
        // only tracks presence, never validity.
        assert!(policy.snapshot().authenticated);
        assert!(!policy.snapshot().admin);
    }

    // Claims are re-read on every call, never cached past a single read.
    #[test]
    fn credential_change_is_immediately_reflected() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::at_path(dir.path().join("token"));
        store.set(USER_TOKEN);
        let session = Arc::new(Session::new(store.clone(), Arc::new(NoIdentity)));
        let policy = AccessPolicy::new(session);

        assert!(!policy.is_admin());
        store.set(ADMIN_TOKEN);
        assert!(policy.is_admin());
        assert_eq!(policy.user_id(), "alice");
    }
}
