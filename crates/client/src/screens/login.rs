//! Login screen.

use std::sync::Arc;

use crate::session::Session;

pub struct LoginScreen {
    session: Arc<Session>,
    pub loading: bool,
    pub error: Option<String>,
}

impl LoginScreen {
    pub fn new(session: Arc<Session>) -> Self {
        Self {
            session,
            loading: false,
            error: None,
        }
    }

    /// Validate the form and attempt a login.
    ///
    /// Returns true when the session is now authenticated. The loading flag
    /// keeps a second submit from being issued while one is in flight.
    pub async fn submit(&mut self, username: &str, password: &str) -> bool {
        if self.loading {
            return false;
        }
        if username.is_empty() || password.is_empty() {
            self.error = Some("Veuillez remplir tous les champs".to_string());
            return false;
        }

        self.loading = true;
        self.error = None;
        let result = self.session.login(username, password).await;
        self.loading = false;

        match result {
            Ok(_) => true,
            Err(err) => {
                self.error = Some(err.to_string());
                false
            }
        }
    }
}
