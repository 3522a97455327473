/// Ledger secret key (Stellar strkey, `S...`)
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SecretKey(String);

impl SecretKey {
    pub fn new(secret: String) -> SecretKey {
        SecretKey(secret)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let secret: String = std::iter::repeat('X').take(self.0.len()).collect();

        f.debug_tuple("SecretKey").field(&secret).finish()
    }
}
