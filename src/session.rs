use std::sync::Arc;

use tokio::sync::RwLock;

/// Opaque bearer token issued at login
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

/// Storage for the session credential
///
/// The storage mechanism belongs to the embedding application; screens only
/// read the credential before each authenticated request.
#[async_trait::async_trait]
pub trait SessionStore: Send + Sync {
    async fn get_credential(&self) -> Option<Credential>;

    async fn set_credential(&self, credential: Credential);

    async fn clear(&self);
}

/// In-process session store
#[derive(Clone, Default)]
pub struct MemorySessionStore {
    credential: Arc<RwLock<Option<Credential>>>,
}

impl std::fmt::Debug for MemorySessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemorySessionStore")
            .field(
                "has_credential",
                &self
                    .credential
                    .try_read()
                    .map(|c| c.is_some())
                    .unwrap_or(false),
            )
            .finish()
    }
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a credential
    pub fn with_credential(credential: Credential) -> Self {
        Self {
            credential: Arc::new(RwLock::new(Some(credential))),
        }
    }
}

#[async_trait::async_trait]
impl SessionStore for MemorySessionStore {
    async fn get_credential(&self) -> Option<Credential> {
        self.credential.read().await.clone()
    }

    async fn set_credential(&self, credential: Credential) {
        *self.credential.write().await = Some(credential);
    }

    async fn clear(&self) {
        *self.credential.write().await = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_debug_is_redacted() {
        let credential = Credential::new("eyJhbGciOi.secret");
        assert_eq!(format!("{:?}", credential), "Credential(<redacted>)");
        assert_eq!(credential.as_str(), "eyJhbGciOi.secret");
    }

    #[tokio::test]
    async fn test_set_get_clear() {
        let store = MemorySessionStore::new();
        assert_eq!(store.get_credential().await, None);

        store.set_credential(Credential::new("abc")).await;
        assert_eq!(store.get_credential().await, Some(Credential::new("abc")));

        store.clear().await;
        assert_eq!(store.get_credential().await, None);
    }

    #[test]
    fn test_clones_share_state() {
        let store = MemorySessionStore::with_credential(Credential::new("abc"));
        let other = store.clone();
        tokio_test::block_on(other.clear());
        assert_eq!(tokio_test::block_on(store.get_credential()), None);
    }
}
