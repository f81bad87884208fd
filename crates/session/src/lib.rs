//! Client-side session core of the recruitment portal: token decoding,
//! token persistence, role-aware navigation state and the API clients.

pub mod api;
pub mod config;
pub mod guard;
pub mod provider;
pub mod store;
pub mod token;

pub use api::{ApiClient, ApiClients, AuthApi};
pub use guard::{is_active, NavGuard, NavPhase};
pub use provider::SessionProvider;
pub use store::{FileTokenStore, MemoryTokenStore, StorageError, TokenStore};
pub use token::{decode_claims, try_decode_claims, DecodeError};

#[cfg(feature = "web")]
pub use store::BrowserTokenStore;
