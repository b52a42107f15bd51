//! Product service client.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::ApiError;
use crate::session::Session;

/// A product as the product service serves it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub nom: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub prix: f64,
    #[serde(
        rename = "quantiteStock",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub quantite_stock: Option<u64>,
}

#[async_trait::async_trait]
pub trait ProductApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>, ApiError>;
    async fn get(&self, id: u64) -> Result<Product, ApiError>;
    async fn create(&self, product: &Product) -> Result<Product, ApiError>;
    async fn update(&self, id: u64, product: &Product) -> Result<Product, ApiError>;
    async fn delete(&self, id: u64) -> Result<(), ApiError>;
}

/// Reqwest-backed product client. Attaches the current bearer token when
/// one is present; the service decides what an anonymous call may do.
pub struct HttpProductApi {
    base_url: String,
    client: reqwest::Client,
    session: Arc<Session>,
}

impl HttpProductApi {
    pub fn new(gateway_url: impl Into<String>, session: Arc<Session>) -> Self {
        Self {
            base_url: format!("{}/produit-service/produits", gateway_url.into()),
            client: reqwest::Client::new(),
            session,
        }
    }

    fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.session.token() {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }
}

#[async_trait::async_trait]
impl ProductApi for HttpProductApi {
    async fn list(&self) -> Result<Vec<Product>, ApiError> {
        let resp = self
            .authed(self.client.get(&self.base_url))
            .send()
            .await
            .map_err(ApiError::network)?;
        if !resp.status().is_success() {
            return Err(ApiError::from_response(resp).await);
        }
        resp.json().await.map_err(ApiError::parse)
    }

    async fn get(&self, id: u64) -> Result<Product, ApiError> {
        let url = format!("{}/{id}", self.base_url);
        let resp = self
            .authed(self.client.get(&url))
            .send()
            .await
            .map_err(ApiError::network)?;
        if !resp.status().is_success() {
            return Err(ApiError::from_response(resp).await);
        }
        resp.json().await.map_err(ApiError::parse)
    }

    async fn create(&self, product: &Product) -> Result<Product, ApiError> {
        let resp = self
            .authed(self.client.post(&self.base_url).json(product))
            .send()
            .await
            .map_err(ApiError::network)?;
        if !resp.status().is_success() {
            return Err(ApiError::from_response(resp).await);
        }
        resp.json().await.map_err(ApiError::parse)
    }

    async fn update(&self, id: u64, product: &Product) -> Result<Product, ApiError> {
        let url = format!("{}/{id}", self.base_url);
        let resp = self
            .authed(self.client.put(&url).json(product))
            .send()
            .await
            .map_err(ApiError::network)?;
        if !resp.status().is_success() {
            return Err(ApiError::from_response(resp).await);
        }
        resp.json().await.map_err(ApiError::parse)
    }

    async fn delete(&self, id: u64) -> Result<(), ApiError> {
        let url = format!("{}/{id}", self.base_url);
        let resp = self
            .authed(self.client.delete(&url))
            .send()
            .await
            .map_err(ApiError::network)?;
        if !resp.status().is_success() {
            return Err(ApiError::from_response(resp).await);
        }
        Ok(())
    }
}
