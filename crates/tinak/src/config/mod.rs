mod email_verification;
mod pending;

pub use email_verification::*;
pub use pending::*;

/// Tinak configuration
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Config {
    /// Public URL of this server
    ///
    /// Verification links are built as `{base_url}/api/verify-email?token=...`
    pub base_url: String,

    /// Email verification
    pub email_verification: EmailVerificationConfig,

    /// Limits on pending verifications
    pub pending: PendingConfig,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            base_url: "http://localhost:8000".into(),
            email_verification: Default::default(),
            pending: Default::default(),
        }
    }
}

impl Config {
    /// Build the verification link for a given token
    pub fn verification_url(&self, token: &str) -> String {
        format!(
            "{}/api/verify-email?token={}",
            self.base_url.trim_end_matches('/'),
            token
        )
    }
}
