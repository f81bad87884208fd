use std::fmt;
use std::sync::Arc;

use shared_types::{Claims, Role, SessionConfig};

use crate::store::{MemoryTokenStore, TokenStore};
use crate::token::decode_claims;

/// The single read/write entry point for the persisted session token.
///
/// Cloning is cheap and every clone shares the same underlying store, so
/// the navigation guard, pages and API clients all observe one token.
#[derive(Clone)]
pub struct SessionProvider {
    store: Arc<dyn TokenStore>,
}

impl fmt::Debug for SessionProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionProvider").finish_non_exhaustive()
    }
}

impl PartialEq for SessionProvider {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.store, &other.store)
    }
}

impl SessionProvider {
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Provider over the platform's local storage: `window.localStorage`
    /// in browser builds, the configured key/value file elsewhere.
    pub fn from_config(config: &SessionConfig) -> Self {
        #[cfg(feature = "web")]
        {
            Self::new(crate::store::BrowserTokenStore::new(config.storage_key.clone()))
        }
        #[cfg(not(feature = "web"))]
        {
            Self::new(crate::store::FileTokenStore::new(
                config.store_path.clone(),
                config.storage_key.clone(),
            ))
        }
    }

    /// Provider backed by memory only; nothing survives the process.
    pub fn in_memory() -> Self {
        Self::new(MemoryTokenStore::new())
    }

    /// The persisted token, if any. Storage failures read as "no token".
    pub fn token(&self) -> Option<String> {
        match self.store.load() {
            Ok(token) => token.filter(|t| !t.trim().is_empty()),
            Err(e) => {
                tracing::warn!(error = %e, "Session storage unavailable, treating as signed out");
                None
            }
        }
    }

    pub fn set_token(&self, token: &str) {
        if let Err(e) = self.store.save(token) {
            tracing::warn!(error = %e, "Failed to persist session token");
        }
    }

    /// Forget the token (logout, or a 401 from the API).
    pub fn clear(&self) {
        if let Err(e) = self.store.clear() {
            tracing::warn!(error = %e, "Failed to clear session token");
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Claims of the persisted token. `None` when absent or undecodable.
    pub fn claims(&self) -> Option<Claims> {
        claims_of(&self.token()?)
    }

    /// Role for menu selection. Missing or undecodable tokens resolve to
    /// the default applicant role.
    pub fn resolve_role(&self) -> Role {
        self.resolve().0
    }

    /// Role plus whether a token was present, from a single storage read.
    pub fn resolve(&self) -> (Role, bool) {
        match self.token() {
            Some(token) => {
                let role = claims_of(&token).map(|c| c.role()).unwrap_or_default();
                (role, true)
            }
            None => (Role::default(), false),
        }
    }
}

fn claims_of(token: &str) -> Option<Claims> {
    let claims = decode_claims(token)?;
    if claims.is_expired_at(chrono::Utc::now()) {
        tracing::debug!(exp = ?claims.exp, "Session token is past its expiry");
    }
    Some(claims)
}
