//! Assistant chat client.

use std::sync::Arc;

use crate::api::ApiError;
use crate::session::Session;

/// Request/response chat with the assistant service: one message in, one
/// plain-text reply out.
#[async_trait::async_trait]
pub trait ChatApi: Send + Sync {
    async fn send(&self, message: &str) -> Result<String, ApiError>;
}

pub struct HttpChatApi {
    base_url: String,
    client: reqwest::Client,
    session: Arc<Session>,
}

impl HttpChatApi {
    pub fn new(gateway_url: impl Into<String>, session: Arc<Session>) -> Self {
        Self {
            base_url: format!("{}/agent-ia-service", gateway_url.into()),
            client: reqwest::Client::new(),
            session,
        }
    }
}

#[async_trait::async_trait]
impl ChatApi for HttpChatApi {
    async fn send(&self, message: &str) -> Result<String, ApiError> {
        let url = format!("{}/chat", self.base_url);
        let mut req = self.client.get(&url).query(&[("message", message)]);
        if let Some(token) = self.session.token() {
            req = req.bearer_auth(token);
        }

        let resp = req.send().await.map_err(ApiError::network)?;
        if !resp.status().is_success() {
            return Err(ApiError::from_response(resp).await);
        }
        resp.text().await.map_err(ApiError::parse)
    }
}
