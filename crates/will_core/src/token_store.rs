//! Persistence for the opaque credential returned by registration.

use anyhow::Result;
use async_trait::async_trait;
use storage::Storage;
use tokio::sync::Mutex;
use tracing::info;

#[async_trait]
pub trait TokenStore: Send + Sync {
    async fn store(&self, token: &str) -> Result<()>;
    async fn retrieve(&self) -> Result<Option<String>>;
    async fn remove(&self) -> Result<()>;
}

/// Process-local slot; nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn store(&self, token: &str) -> Result<()> {
        *self.slot.lock().await = Some(token.to_string());
        Ok(())
    }

    async fn retrieve(&self) -> Result<Option<String>> {
        Ok(self.slot.lock().await.clone())
    }

    async fn remove(&self) -> Result<()> {
        self.slot.lock().await.take();
        Ok(())
    }
}

#[async_trait]
impl TokenStore for Storage {
    async fn store(&self, token: &str) -> Result<()> {
        self.store_auth_token(token).await
    }

    async fn retrieve(&self) -> Result<Option<String>> {
        self.auth_token().await
    }

    async fn remove(&self) -> Result<()> {
        self.remove_auth_token().await.map(|_| ())
    }
}

/// Signs the user out by forgetting the stored credential.
pub async fn logout(tokens: &dyn TokenStore) -> Result<()> {
    tokens.remove().await?;
    info!("auth token removed");
    Ok(())
}

#[cfg(test)]
#[path = "tests/token_store_tests.rs"]
mod tests;
