//! On-disk credential slot.

use std::io;
use std::path::PathBuf;

/// Single named slot holding the current bearer token as plain text.
///
/// The slot lives in the user data directory and survives restarts. It is
/// the sole owner of the credential: no other component keeps a copy past a
/// single read. All operations are synchronous and local.
///
/// Storage trouble (unreadable directory, permission failure) is treated as
/// "no credential present": the client degrades to logged-out behavior
/// instead of failing hard, with a `warn` in the log.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    /// Store backed by the default slot (`<data dir>/comptoir/token`).
    pub fn new() -> Self {
        Self::at_path(default_token_path())
    }

    /// Store backed by an explicit path. Used by tests and by deployments
    /// that relocate client state.
    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Persist `token`, replacing any prior value.
    pub fn set(&self, token: &str) {
        if let Some(parent) = self.path.parent()
            && let Err(err) = std::fs::create_dir_all(parent)
        {
            tracing::warn!(%err, path = %self.path.display(), "cannot create credential dir");
            return;
        }
        if let Err(err) = std::fs::write(&self.path, token) {
            tracing::warn!(%err, path = %self.path.display(), "cannot persist credential");
        }
    }

    /// The stored token, or `None` if never set, cleared, empty, or
    /// unreadable.
    pub fn get(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(token) if token.is_empty() => None,
            Ok(token) => Some(token),
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => {
                tracing::warn!(%err, path = %self.path.display(), "cannot read credential");
                None
            }
        }
    }

    /// Remove the stored value unconditionally. Idempotent: clearing an
    /// empty slot is a no-op, not an error.
    pub fn clear(&self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => {
                tracing::warn!(%err, path = %self.path.display(), "cannot clear credential");
            }
        }
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

fn default_token_path() -> PathBuf {
    match dirs::data_dir() {
        Some(dir) => dir.join("comptoir").join("token"),
        None => PathBuf::from(".comptoir-token"),
    }
}
