use crate::{
    models::{Account, PendingVerification, VerificationState},
    util::unix_millis,
    Error, Result, Success,
};

use futures::lock::Mutex;
use iso8601_timestamp::Timestamp;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use super::definition::AbstractDatabase;

/// Pending verifications with an expiry-ordered index
#[derive(Default)]
pub struct Verifications {
    by_token: HashMap<String, PendingVerification>,
    by_expiry: BTreeSet<(i64, String)>,
}

impl Verifications {
    fn insert(&mut self, pending: PendingVerification) {
        self.by_expiry
            .insert((pending.expiry_key(), pending.token.clone()));
        self.by_token.insert(pending.token.clone(), pending);
    }

    fn remove(&mut self, token: &str) -> Option<PendingVerification> {
        let pending = self.by_token.remove(token)?;
        self.by_expiry
            .remove(&(pending.expiry_key(), pending.token.clone()));
        Some(pending)
    }

    fn find_by_email(&self, email: &str) -> Option<&PendingVerification> {
        self.by_token
            .values()
            .find(|pending| pending.email == email)
    }

    /// Remove everything which expired strictly before `now`
    ///
    /// Claimed verifications are left for their consumer to finish.
    fn remove_expired(&mut self, now: Timestamp) -> Vec<PendingVerification> {
        let now = unix_millis(now);
        let expired: Vec<String> = self
            .by_expiry
            .iter()
            .take_while(|(expiry, _)| *expiry < now)
            .filter(|(_, token)| {
                self.by_token
                    .get(token)
                    .map_or(false, |pending| pending.state != VerificationState::Registering)
            })
            .map(|(_, token)| token.clone())
            .collect();

        expired
            .iter()
            .filter_map(|token| self.remove(token))
            .collect()
    }
}

/// In-memory database
///
/// Locks are always taken in the order verifications, accounts.
#[derive(Default, Clone)]
pub struct DummyDb {
    pub accounts: Arc<Mutex<Vec<Account>>>,
    pub verifications: Arc<Mutex<Verifications>>,
}

#[async_trait]
impl AbstractDatabase for DummyDb {
    /// Find account by email
    async fn find_account_by_email(&self, email: &str) -> Result<Option<Account>> {
        let accounts = self.accounts.lock().await;
        Ok(accounts
            .iter()
            .find(|account| account.email == email)
            .cloned())
    }

    /// Find all accounts of a given type, in insertion order
    async fn find_accounts_by_type(&self, account_type: &str) -> Result<Vec<Account>> {
        let accounts = self.accounts.lock().await;
        Ok(accounts
            .iter()
            .filter(|account| account.account_type == account_type)
            .cloned()
            .collect())
    }

    /// Find pending verification by token
    async fn find_pending_verification(
        &self,
        token: &str,
    ) -> Result<Option<PendingVerification>> {
        let verifications = self.verifications.lock().await;
        Ok(verifications.by_token.get(token).cloned())
    }

    /// Find pending verification by email
    async fn find_pending_verification_by_email(
        &self,
        email: &str,
    ) -> Result<Option<PendingVerification>> {
        let verifications = self.verifications.lock().await;
        Ok(verifications.find_by_email(email).cloned())
    }

    /// Count pending verifications, expired or not
    async fn count_pending_verifications(&self) -> Result<usize> {
        let verifications = self.verifications.lock().await;
        Ok(verifications.by_token.len())
    }

    /// Insert a new pending verification
    async fn insert_pending_verification(
        &self,
        pending: &PendingVerification,
        now: Timestamp,
        max_pending: usize,
    ) -> Success {
        let mut verifications = self.verifications.lock().await;
        let accounts = self.accounts.lock().await;

        if accounts.iter().any(|account| account.email == pending.email) {
            return Err(Error::EmailInUse);
        }

        if let Some(existing) = verifications.find_by_email(&pending.email) {
            if existing.is_expired_at(now) && existing.state != VerificationState::Registering {
                let token = existing.token.clone();
                verifications.remove(&token);
            } else {
                return Err(Error::EmailInUse);
            }
        }

        if verifications.by_token.len() >= max_pending {
            let reaped = verifications.remove_expired(now);
            if !reaped.is_empty() {
                debug!("Reaped {} expired verifications on insert", reaped.len());
            }

            if verifications.by_token.len() >= max_pending {
                return Err(Error::TooManyPending);
            }
        }

        if verifications.by_token.contains_key(&pending.token) {
            return Err(Error::InternalError);
        }

        verifications.insert(pending.clone());
        Ok(())
    }

    /// Swap a pending verification for a freshly issued one
    async fn replace_pending_verification(
        &self,
        token: &str,
        pending: &PendingVerification,
    ) -> Success {
        let mut verifications = self.verifications.lock().await;
        match verifications.by_token.get(token) {
            Some(existing) if existing.state != VerificationState::Registering => {}
            _ => return Err(Error::InvalidToken),
        }

        verifications.remove(token);
        verifications.insert(pending.clone());
        Ok(())
    }

    /// Delete pending verification
    async fn delete_pending_verification(&self, token: &str) -> Success {
        let mut verifications = self.verifications.lock().await;
        if verifications.remove(token).is_some() {
            Ok(())
        } else {
            Err(Error::InvalidToken)
        }
    }

    /// Claim a pending verification for consumption
    async fn claim_pending_verification(
        &self,
        token: &str,
        now: Timestamp,
    ) -> Result<PendingVerification> {
        let mut verifications = self.verifications.lock().await;
        let pending = verifications
            .by_token
            .get_mut(token)
            .ok_or(Error::InvalidToken)?;

        if pending.state == VerificationState::Registering {
            return Err(Error::InvalidToken);
        }

        if pending.is_expired_at(now) {
            verifications.remove(token);
            return Err(Error::ExpiredToken);
        }

        pending.state = VerificationState::Registering;
        Ok(pending.clone())
    }

    /// Mark a claimed verification as failed so it may be claimed again
    async fn release_pending_verification(&self, token: &str) -> Success {
        let mut verifications = self.verifications.lock().await;
        match verifications.by_token.get_mut(token) {
            Some(pending) if pending.state == VerificationState::Registering => {
                pending.state = VerificationState::Failed;
                Ok(())
            }
            _ => Err(Error::InvalidToken),
        }
    }

    /// Remove a claimed verification and store its account in one step
    async fn complete_pending_verification(&self, token: &str, account: &Account) -> Success {
        let mut verifications = self.verifications.lock().await;
        let mut accounts = self.accounts.lock().await;

        match verifications.by_token.get(token) {
            Some(pending) if pending.state == VerificationState::Registering => {}
            _ => return Err(Error::InvalidToken),
        }

        if accounts.iter().any(|existing| existing.email == account.email) {
            verifications.remove(token);
            return Err(Error::EmailInUse);
        }

        verifications.remove(token);
        accounts.push(account.clone());
        Ok(())
    }

    /// Remove every verification which expired before `now`
    async fn delete_expired_verifications(
        &self,
        now: Timestamp,
    ) -> Result<Vec<PendingVerification>> {
        let mut verifications = self.verifications.lock().await;
        Ok(verifications.remove_expired(now))
    }
}
