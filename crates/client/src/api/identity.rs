//! Identity service client (login, account creation).

use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// Remote identity endpoint.
///
/// `login` resolves to a bearer token; it does **not** store it — that is
/// the session manager's job, so the credential has a single owner.
#[async_trait::async_trait]
pub trait IdentityApi: Send + Sync {
    async fn login(&self, username: &str, password: &str) -> Result<String, AuthError>;

    async fn register(&self, username: &str, email: &str, password: &str)
    -> Result<(), AuthError>;
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(rename = "access-token")]
    access_token: String,
}

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

/// Error bodies are `{"message": ...}` when the service bothered to say why.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Reqwest-backed identity client talking through the gateway.
pub struct HttpIdentityApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpIdentityApi {
    pub fn new(gateway_url: impl Into<String>) -> Self {
        Self {
            base_url: format!("{}/auth-service", gateway_url.into()),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl IdentityApi for HttpIdentityApi {
    async fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        let url = format!("{}/login", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(&LoginRequest { username, password })
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(rejection(resp, "Erreur lors de la connexion").await);
        }

        let body: LoginResponse = resp
            .json()
            .await
            .map_err(|e| AuthError::InvalidResponse(e.to_string()))?;
        Ok(body.access_token)
    }

    async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(), AuthError> {
        let url = format!("{}/users", self.base_url);
        let resp = self
            .client
            .post(&url)
            .json(&RegisterRequest {
                username,
                email,
                password,
            })
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(rejection(resp, "Erreur lors de l'inscription").await);
        }
        Ok(())
    }
}

/// Surface the server's own message when the body carries one.
async fn rejection(resp: reqwest::Response, fallback: &str) -> AuthError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .map(|b| b.message)
        .unwrap_or_else(|_| fallback.to_string());
    tracing::debug!(%status, "identity service rejected the request");
    AuthError::Rejected { message }
}
