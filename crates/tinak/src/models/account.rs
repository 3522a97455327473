use iso8601_timestamp::Timestamp;

/// Account type which is listed as a client
pub const CLIENT_ACCOUNT_TYPE: &str = "client";

/// Account model
///
/// Key material is never part of an account, the secret half
/// of the provisioned keypair lives in the [`crate::Vault`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Unique Id
    pub id: String,

    /// User's email
    pub email: String,

    /// Display name
    pub username: String,

    /// Kind of account, e.g. `client`
    pub account_type: String,

    /// Ledger public key (Stellar strkey, `G...`)
    pub public_key: String,

    /// Whether the email address has been verified
    pub is_verified: bool,

    /// Time at which this account was created
    pub created_at: Timestamp,
}

/// Public projection of an account
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "schemas", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct PublicAccount {
    /// Unique Id
    pub id: String,
    /// User's email
    pub email: String,
    /// Display name
    pub username: String,
    /// Kind of account
    pub account_type: String,
    /// Ledger public key
    pub public_key: String,
}
