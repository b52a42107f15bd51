//! Account creation screen.

use std::sync::Arc;

use crate::api::IdentityApi;

const SUCCESS: &str = "Compte créé avec succès! Redirection...";

pub struct RegisterScreen {
    identity: Arc<dyn IdentityApi>,
    pub loading: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl RegisterScreen {
    pub fn new(identity: Arc<dyn IdentityApi>) -> Self {
        Self {
            identity,
            loading: false,
            error: None,
            success: None,
        }
    }

    /// Form validation mirroring the account service's own rules, so the
    /// common mistakes are caught before a round-trip.
    fn validate(username: &str, email: &str, password: &str) -> Option<&'static str> {
        if username.len() < 3 {
            return Some("Le nom d'utilisateur doit contenir au moins 3 caractères");
        }
        if !email.contains('@') {
            return Some("Adresse email invalide");
        }
        if password.len() < 4 {
            return Some("Le mot de passe doit contenir au moins 4 caractères");
        }
        None
    }

    /// Returns true when the account was created.
    pub async fn submit(&mut self, username: &str, email: &str, password: &str) -> bool {
        if self.loading {
            return false;
        }
        if let Some(message) = Self::validate(username, email, password) {
            self.error = Some(message.to_string());
            return false;
        }

        self.loading = true;
        self.error = None;
        self.success = None;
        let result = self.identity.register(username, email, password).await;
        self.loading = false;

        match result {
            Ok(()) => {
                self.success = Some(SUCCESS.to_string());
                true
            }
            Err(err) => {
                self.error = Some(err.to_string());
                false
            }
        }
    }
}
