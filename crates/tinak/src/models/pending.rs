use iso8601_timestamp::Timestamp;

/// Lifecycle of a pending verification
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VerificationState {
    /// Waiting for the link to be visited
    Pending,
    /// Link visited, ledger registration in flight
    Registering,
    /// Ledger registration failed, the token may be used again
    Failed,
}

/// Pending email verification
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PendingVerification {
    /// Unique token (uuid v4) sent out by email
    pub token: String,

    /// Email which is being verified
    pub email: String,

    /// Requested display name
    pub username: String,

    /// Requested account type
    pub account_type: String,

    /// Time at which this verification was issued
    pub created_at: Timestamp,

    /// Time at which this token expires
    pub expires_at: Timestamp,

    /// Lifecycle state
    pub state: VerificationState,
}
