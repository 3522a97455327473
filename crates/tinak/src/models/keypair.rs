use super::SecretKey;

/// Freshly provisioned ledger keypair
#[derive(Debug, Clone)]
pub struct Keypair {
    /// Public key (`G...`)
    pub public_key: String,
    /// Secret seed (`S...`)
    pub secret_key: SecretKey,
}
