use thiserror::Error;

/// Failures of resource/chat calls.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("API error ({0}): {1}")]
    Api(u16, String),
    #[error("parse error: {0}")]
    Parse(String),
}

impl ApiError {
    pub(crate) fn network(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }

    pub(crate) fn parse(err: reqwest::Error) -> Self {
        Self::Parse(err.to_string())
    }

    /// Build an `Api` error from a non-success response, consuming its body.
    pub(crate) async fn from_response(resp: reqwest::Response) -> Self {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        Self::Api(status, body)
    }
}
