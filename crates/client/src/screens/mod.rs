//! Screen controllers.
//!
//! Each screen mirrors the usual view state machine: a loading flag while a
//! call is in flight, an error message on failure, a reload after every
//! successful mutation. The resource screens gate admin-only mutations
//! before issuing any remote call.

pub mod chat;
pub mod clients;
pub mod login;
pub mod products;
pub mod register;

pub use chat::{ChatMessage, ChatRole, ChatScreen, QUICK_ACTIONS};
pub use clients::ClientsScreen;
pub use login::LoginScreen;
pub use products::ProductsScreen;
pub use register::RegisterScreen;
