//! Ledger registration of freshly provisioned accounts
use std::ops::Deref;
use std::sync::Arc;

use crate::Success;

#[async_trait]
pub trait AbstractRegistrar: std::marker::Sync + std::marker::Send {
    /// Register a public key on the ledger
    async fn register(&self, public_key: &str, account_type: &str, username: &str) -> Success;
}

/// Stand-in for the on-chain registration contract
///
/// Only logs the call; always succeeds.
#[derive(Default, Clone)]
pub struct SimulatedRegistrar;

#[async_trait]
impl AbstractRegistrar for SimulatedRegistrar {
    async fn register(&self, public_key: &str, account_type: &str, username: &str) -> Success {
        info!(
            "[ledger] registering {} {} with public key {}",
            account_type, username, public_key
        );

        Ok(())
    }
}

#[derive(Clone)]
pub enum Registrar {
    Simulated(SimulatedRegistrar),
    Custom(Arc<dyn AbstractRegistrar>),
}

impl Default for Registrar {
    fn default() -> Self {
        Self::Simulated(SimulatedRegistrar)
    }
}

impl Deref for Registrar {
    type Target = dyn AbstractRegistrar;

    fn deref(&self) -> &Self::Target {
        match self {
            Registrar::Simulated(simulated) => simulated,
            Registrar::Custom(custom) => custom.as_ref(),
        }
    }
}
