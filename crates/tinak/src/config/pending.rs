/// Pending verification limits
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct PendingConfig {
    /// Maximum number of live pending verifications
    pub max_pending: usize,
    /// How often expired verifications are swept (in seconds)
    pub reap_interval: u64,
}

impl Default for PendingConfig {
    fn default() -> PendingConfig {
        PendingConfig {
            max_pending: 10_000,
            reap_interval: 300,
        }
    }
}
