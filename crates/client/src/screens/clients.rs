//! Customer management screen.

use std::sync::Arc;

use crate::api::{Client, ClientApi};
use crate::guard::require_admin;
use crate::policy::AccessPolicy;

pub struct ClientsScreen {
    api: Arc<dyn ClientApi>,
    policy: AccessPolicy,
    pub clients: Vec<Client>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ClientsScreen {
    pub fn new(api: Arc<dyn ClientApi>, policy: AccessPolicy) -> Self {
        Self {
            api,
            policy,
            clients: Vec::new(),
            loading: false,
            error: None,
        }
    }

    pub async fn load(&mut self) {
        self.loading = true;
        match self.api.list().await {
            Ok(clients) => {
                self.clients = clients;
                self.error = None;
            }
            Err(err) => {
                tracing::warn!(%err, "client list failed");
                self.error = Some("Erreur lors du chargement des clients".to_string());
            }
        }
        self.loading = false;
    }

    /// Create or update depending on id presence. Admin-gated.
    pub async fn save(&mut self, client: Client) {
        if let Err(denied) = require_admin(&self.policy.snapshot()) {
            self.error = Some(denied.message);
            return;
        }

        let result = match client.id {
            Some(id) => self.api.update(id, &client).await.map(|_| ()),
            None => self.api.create(&client).await.map(|_| ()),
        };

        match result {
            Ok(()) => self.load().await,
            Err(err) => {
                tracing::warn!(%err, "client save failed");
                self.error = Some(match client.id {
                    Some(_) => "Erreur lors de la mise à jour".to_string(),
                    None => "Erreur lors de la création".to_string(),
                });
            }
        }
    }

    /// Admin-gated delete.
    pub async fn delete(&mut self, id: u64) {
        if let Err(denied) = require_admin(&self.policy.snapshot()) {
            self.error = Some(denied.message);
            return;
        }

        match self.api.delete(id).await {
            Ok(()) => self.load().await,
            Err(err) => {
                tracing::warn!(%err, "client delete failed");
                self.error = Some("Erreur lors de la suppression".to_string());
            }
        }
    }
}
