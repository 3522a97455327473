use iso8601_timestamp::Timestamp;

use crate::{
    models::{Account, PendingVerification},
    Result, Success,
};

#[async_trait]
pub trait AbstractDatabase: std::marker::Sync + std::marker::Send {
    /// Find account by email
    async fn find_account_by_email(&self, email: &str) -> Result<Option<Account>>;

    /// Find all accounts of a given type, in insertion order
    async fn find_accounts_by_type(&self, account_type: &str) -> Result<Vec<Account>>;

    /// Find pending verification by token
    async fn find_pending_verification(&self, token: &str)
        -> Result<Option<PendingVerification>>;

    /// Find pending verification by email
    async fn find_pending_verification_by_email(
        &self,
        email: &str,
    ) -> Result<Option<PendingVerification>>;

    /// Count pending verifications, expired or not
    async fn count_pending_verifications(&self) -> Result<usize>;

    /// Insert a new pending verification
    ///
    /// Fails if the email already belongs to an account or to a live
    /// pending verification, or if `max_pending` live verifications exist.
    async fn insert_pending_verification(
        &self,
        pending: &PendingVerification,
        now: Timestamp,
        max_pending: usize,
    ) -> Success;

    /// Swap a pending verification for a freshly issued one
    async fn replace_pending_verification(
        &self,
        token: &str,
        pending: &PendingVerification,
    ) -> Success;

    /// Delete pending verification
    async fn delete_pending_verification(&self, token: &str) -> Success;

    /// Claim a pending verification for consumption
    ///
    /// Moves the verification into the `Registering` state. Expired
    /// verifications are removed and reported as such.
    async fn claim_pending_verification(
        &self,
        token: &str,
        now: Timestamp,
    ) -> Result<PendingVerification>;

    /// Mark a claimed verification as failed so it may be claimed again
    async fn release_pending_verification(&self, token: &str) -> Success;

    /// Remove a claimed verification and store its account in one step
    async fn complete_pending_verification(&self, token: &str, account: &Account) -> Success;

    /// Remove every verification which expired before `now`
    async fn delete_expired_verifications(
        &self,
        now: Timestamp,
    ) -> Result<Vec<PendingVerification>>;
}
