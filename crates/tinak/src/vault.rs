//! Custody of account secret keys
//!
//! Secret keys are kept apart from the queryable account records.
use futures::lock::Mutex;
use std::collections::HashMap;
use std::ops::Deref;
use std::sync::Arc;

use crate::{models::SecretKey, Result, Success};

#[async_trait]
pub trait AbstractVault: std::marker::Sync + std::marker::Send {
    /// Take custody of an account's secret key
    async fn store_secret(&self, account_id: &str, secret: SecretKey) -> Success;

    /// Fetch an account's secret key
    async fn fetch_secret(&self, account_id: &str) -> Result<Option<SecretKey>>;

    /// Drop the secret key of an account which was never created
    async fn delete_secret(&self, account_id: &str) -> Success;
}

/// In-memory vault
#[derive(Default, Clone)]
pub struct MemoryVault {
    pub secrets: Arc<Mutex<HashMap<String, SecretKey>>>,
}

#[async_trait]
impl AbstractVault for MemoryVault {
    async fn store_secret(&self, account_id: &str, secret: SecretKey) -> Success {
        let mut secrets = self.secrets.lock().await;
        secrets.insert(account_id.to_string(), secret);
        Ok(())
    }

    async fn fetch_secret(&self, account_id: &str) -> Result<Option<SecretKey>> {
        let secrets = self.secrets.lock().await;
        Ok(secrets.get(account_id).cloned())
    }

    async fn delete_secret(&self, account_id: &str) -> Success {
        let mut secrets = self.secrets.lock().await;
        secrets.remove(account_id);
        Ok(())
    }
}

#[derive(Clone)]
pub enum Vault {
    Memory(MemoryVault),
    Custom(Arc<dyn AbstractVault>),
}

impl Default for Vault {
    fn default() -> Self {
        Self::Memory(Default::default())
    }
}

impl Deref for Vault {
    type Target = dyn AbstractVault;

    fn deref(&self) -> &Self::Target {
        match self {
            Vault::Memory(memory) => memory,
            Vault::Custom(custom) => custom.as_ref(),
        }
    }
}
