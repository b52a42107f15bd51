//! Product management screen.

use std::sync::Arc;

use crate::api::{Product, ProductApi};
use crate::guard::require_admin;
use crate::policy::AccessPolicy;

pub struct ProductsScreen {
    api: Arc<dyn ProductApi>,
    policy: AccessPolicy,
    pub products: Vec<Product>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ProductsScreen {
    pub fn new(api: Arc<dyn ProductApi>, policy: AccessPolicy) -> Self {
        Self {
            api,
            policy,
            products: Vec::new(),
            loading: false,
            error: None,
        }
    }

    pub async fn load(&mut self) {
        self.loading = true;
        match self.api.list().await {
            Ok(products) => {
                self.products = products;
                self.error = None;
            }
            Err(err) => {
                tracing::warn!(%err, "product list failed");
                self.error = Some("Erreur lors du chargement des produits".to_string());
            }
        }
        self.loading = false;
    }

    /// Create or update depending on id presence. Admin-gated: a non-admin
    /// gets the rejection message and no remote call is made.
    pub async fn save(&mut self, product: Product) {
        if let Err(denied) = require_admin(&self.policy.snapshot()) {
            self.error = Some(denied.message);
            return;
        }

        let result = match product.id {
            Some(id) => self.api.update(id, &product).await.map(|_| ()),
            None => self.api.create(&product).await.map(|_| ()),
        };

        match result {
            Ok(()) => self.load().await,
            Err(err) => {
                tracing::warn!(%err, "product save failed");
                self.error = Some(match product.id {
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
                tracing::warn!(%err, "product delete failed");
                self.error = Some("Erreur lors de la suppression".to_string());
            }
        }
    }
}
