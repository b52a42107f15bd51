//! Client (customer) service client.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::ApiError;
use crate::session::Session;

/// A customer record as the client service serves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adresse: Option<String>,
}

#[async_trait::async_trait]
pub trait ClientApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Client>, ApiError>;
    async fn get(&self, id: u64) -> Result<Client, ApiError>;
    async fn create(&self, client: &Client) -> Result<Client, ApiError>;
    async fn update(&self, id: u64, client: &Client) -> Result<Client, ApiError>;
    async fn delete(&self, id: u64) -> Result<(), ApiError>;
}

/// Reqwest-backed customer client, same shape as the product client.
pub struct HttpClientApi {
    base_url: String,
    client: reqwest::Client,
    session: Arc<Session>,
}

impl HttpClientApi {
    pub fn new(gateway_url: impl Into<String>, session: Arc<Session>) -> Self {
        Self {
            base_url: format!("{}/client-service/clients", gateway_url.into()),
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
impl ClientApi for HttpClientApi {
    async fn list(&self) -> Result<Vec<Client>, ApiError> {
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

    async fn get(&self, id: u64) -> Result<Client, ApiError> {
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

    async fn create(&self, client: &Client) -> Result<Client, ApiError> {
        let resp = self
            .authed(self.client.post(&self.base_url).json(client))
            .send()
            .await
            .map_err(ApiError::network)?;
        if !resp.status().is_success() {
            return Err(ApiError::from_response(resp).await);
        }
        resp.json().await.map_err(ApiError::parse)
    }

    async fn update(&self, id: u64, client: &Client) -> Result<Client, ApiError> {
        let url = format!("{}/{id}", self.base_url);
        let resp = self
            .authed(self.client.put(&url).json(client))
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
