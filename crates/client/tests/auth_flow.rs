//! End-to-end authentication/authorization flows against in-memory
//! collaborators: real tokens minted with `jsonwebtoken`, the real store,
//! session, policy, guards and gates.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use comptoir_auth::Role;
use comptoir_client::api::{ApiError, IdentityApi, Product, ProductApi};
use comptoir_client::error::AuthError;
use comptoir_client::screens::ProductsScreen;
use comptoir_client::{AccessPolicy, CredentialStore, Router, Screen, Session};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde_json::json;

fn mint_token(sub: &str, roles: &[&str]) -> String {
    let claims = json!({ "sub": sub, "roles": roles, "iat": 1_700_000_000 });
    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(b"test-secret"),
    )
    .expect("failed to encode token")
}

/// Identity fake issuing a minted token per user.
struct FakeIdentity;

#[async_trait::async_trait]
impl IdentityApi for FakeIdentity {
    async fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        match (username, password) {
            ("alice", "secret") => Ok(mint_token("alice", &["ADMIN", "USER"])),
            ("bob", "secret") => Ok(mint_token("bob", &["USER"])),
            _ => Err(AuthError::Rejected {
                message: "Identifiants invalides".to_string(),
            }),
        }
    }

    async fn register(&self, _: &str, _: &str, _: &str) -> Result<(), AuthError> {
        Ok(())
    }
}

#[derive(Default)]
struct CountingProducts {
    calls: AtomicUsize,
}

#[async_trait::async_trait]
impl ProductApi for CountingProducts {
    async fn list(&self) -> Result<Vec<Product>, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Vec::new())
    }
    async fn get(&self, _: u64) -> Result<Product, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ApiError::Api(404, String::new()))
    }
    async fn create(&self, p: &Product) -> Result<Product, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(p.clone())
    }
    async fn update(&self, _: u64, p: &Product) -> Result<Product, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(p.clone())
    }
    async fn delete(&self, _: u64) -> Result<(), ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn fresh_session(dir: &tempfile::TempDir) -> Arc<Session> {
    let store = CredentialStore::at_path(dir.path().join("token"));
    Arc::new(Session::new(store, Arc::new(FakeIdentity)))
}

#[tokio::test]
async fn admin_login_unlocks_everything() {
    let dir = tempfile::tempdir().unwrap();
    let session = fresh_session(&dir);
    let policy = AccessPolicy::new(session.clone());
    let mut router = Router::new(policy.clone());

    assert_eq!(router.navigate(Screen::Clients), Screen::Login);

    session.login("alice", "secret").await.unwrap();
    assert_eq!(policy.user_id(), "alice");
    assert!(policy.is_admin());
    assert!(policy.has_role(&Role::new("USER")));
    assert_eq!(router.navigate(Screen::Clients), Screen::Clients);
}

#[tokio::test]
async fn non_admin_is_redirected_to_chat_not_login() {
    let dir = tempfile::tempdir().unwrap();
    let session = fresh_session(&dir);
    let policy = AccessPolicy::new(session.clone());
    let mut router = Router::new(policy.clone());

    session.login("bob", "secret").await.unwrap();
    assert!(!policy.is_admin());
    assert_eq!(router.navigate(Screen::Clients), Screen::Chat);
    assert_eq!(router.navigate(Screen::Products), Screen::Products);
}

#[tokio::test]
async fn gated_delete_issues_no_remote_call_for_non_admin() {
    let dir = tempfile::tempdir().unwrap();
    let session = fresh_session(&dir);
    session.login("bob", "secret").await.unwrap();

    let api = Arc::new(CountingProducts::default());
    let mut screen = ProductsScreen::new(api.clone(), AccessPolicy::new(session));
    screen.delete(1).await;

    assert_eq!(
        screen.error.as_deref(),
        Some("Action réservée aux administrateurs")
    );
    assert_eq!(api.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn logout_returns_the_client_to_anonymous() {
    let dir = tempfile::tempdir().unwrap();
    let session = fresh_session(&dir);
    let policy = AccessPolicy::new(session.clone());
    let mut router = Router::new(policy.clone());

    session.login("alice", "secret").await.unwrap();
    session.logout();

    assert!(!session.is_authenticated());
    assert_eq!(policy.user_id(), "anonymous");
    assert!(policy.roles().is_empty());
    assert_eq!(router.navigate(Screen::Chat), Screen::Login);
}

#[tokio::test]
async fn failed_login_preserves_the_previous_session() {
    let dir = tempfile::tempdir().unwrap();
    let session = fresh_session(&dir);
    let policy = AccessPolicy::new(session.clone());

    session.login("alice", "secret").await.unwrap();
    session.login("alice", "oops").await.unwrap_err();

    assert!(session.is_authenticated());
    assert_eq!(policy.user_id(), "alice");
    assert!(policy.is_admin());
}

#[tokio::test]
async fn session_is_restored_from_disk_across_restarts() {
    let dir = tempfile::tempdir().unwrap();
    {
        let session = fresh_session(&dir);
        session.login("bob", "secret").await.unwrap();
    }

    // New process: same store path, fresh session and policy.
    let session = fresh_session(&dir);
    let policy = AccessPolicy::new(session.clone());
    assert!(session.is_authenticated());
    assert_eq!(policy.user_id(), "bob");
    assert!(!policy.is_admin());
}
