//! HTTP clients for the gateway-fronted services.
//!
//! Each remote service is modeled as an object-safe trait with a
//! reqwest-backed production implementation, so screens can be exercised
//! against in-memory fakes. Every call has exactly one terminal completion
//! (a value or an error); there is no retry or backoff at this layer.

pub mod chat;
pub mod clients;
pub mod error;
pub mod identity;
pub mod products;

pub use chat::{ChatApi, HttpChatApi};
pub use clients::{Client, ClientApi, HttpClientApi};
pub use error::ApiError;
pub use identity::{HttpIdentityApi, IdentityApi};
pub use products::{HttpProductApi, Product, ProductApi};

/// Default gateway URL when `COMPTOIR_GATEWAY_URL` is not set.
pub const DEFAULT_GATEWAY_URL: &str = "http://localhost:8888";
