use thiserror::Error;

/// Failures of the authentication flow.
///
/// A rejection carries the server's own message when one was provided so
/// screens can show it verbatim. Rejection never mutates existing
/// authentication state: a failed login leaves the previous session (or its
/// absence) exactly as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The identity service refused the credentials.
    #[error("{message}")]
    Rejected { message: String },

    /// The identity service could not be reached.
    #[error("network error: {0}")]
    Network(String),

    /// The identity service answered with something we could not read.
    #[error("invalid response from identity service: {0}")]
    InvalidResponse(String),
}
