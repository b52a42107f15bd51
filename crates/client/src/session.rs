//! Session manager — the authoritative authentication state.

use std::sync::Arc;

use tokio::sync::watch;

use crate::api::IdentityApi;
use crate::error::AuthError;
use crate::store::CredentialStore;

/// Owns the credential store and publishes the "authenticated" signal.
///
/// Constructed once per process. The signal is a plain boolean: it is true
/// iff the store held a non-empty credential at the last recomputation. It
/// says nothing about the credential's integrity or expiry.
///
/// Ordering invariant: on every `login`/`logout` the store is mutated
/// first, then subscribers are notified — an observer woken by the signal
/// always sees the store already reflecting the new state.
pub struct Session {
    store: CredentialStore,
    identity: Arc<dyn IdentityApi>,
    authenticated: watch::Sender<bool>,
}

impl Session {
    pub fn new(store: CredentialStore, identity: Arc<dyn IdentityApi>) -> Self {
        let (authenticated, _) = watch::channel(store.get().is_some());
        Self {
            store,
            identity,
            authenticated,
        }
    }

    /// Authenticate against the identity service.
    ///
    /// On success the credential is persisted and the signal flips to true.
    /// On rejection nothing changes: the prior credential (or its absence)
    /// and the signal are left exactly as they were, and the server's
    /// message is surfaced to the caller.
    ///
    /// Inputs are assumed non-empty; the login form validates them.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        let token = self.identity.login(username, password).await?;
        self.store.set(&token);
        self.authenticated.send_replace(true);
        tracing::info!(username, "logged in");
        Ok(token)
    }

    /// Drop the local credential. Always succeeds.
    ///
    /// Purely local: with a stateless bearer scheme there is nothing to
    /// tell the server.
    pub fn logout(&self) {
        self.store.clear();
        self.authenticated.send_replace(false);
        tracing::info!("logged out");
    }

    /// Synchronous presence check, for guards that need an immediate
    /// answer rather than an observable.
    pub fn is_authenticated(&self) -> bool {
        self.store.get().is_some()
    }

    /// Current credential, for claim extraction and bearer-auth headers.
    pub fn token(&self) -> Option<String> {
        self.store.get()
    }

    /// Observe authentication transitions.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.authenticated.subscribe()
    }
}
