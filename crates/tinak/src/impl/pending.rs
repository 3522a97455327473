use iso8601_timestamp::{Duration, Timestamp};

use crate::{
    models::{Account, Keypair, PendingVerification, VerificationState},
    util::{generate_token, require_field, unix_millis, validate_email},
    Error, Result, Success, Tinak, TinakEvent,
};

impl PendingVerification {
    /// Issue a new verification valid for `validity` seconds from `now`
    pub fn new(
        email: String,
        username: String,
        account_type: String,
        now: Timestamp,
        validity: u64,
    ) -> Result<PendingVerification> {
        let expires_at = i64::try_from(validity)
            .ok()
            .and_then(|seconds| now.checked_add(Duration::seconds(seconds)))
            .ok_or_else(|| {
                error!("Verification validity of {}s is out of range", validity);
                Error::InternalError
            })?;

        Ok(PendingVerification {
            token: generate_token(),
            email,
            username,
            account_type,
            created_at: now,
            expires_at,
            state: VerificationState::Pending,
        })
    }

    /// Whether this verification has expired at the given time
    pub fn is_expired_at(&self, now: Timestamp) -> bool {
        now > self.expires_at
    }

    pub(crate) fn expiry_key(&self) -> i64 {
        unix_millis(self.expires_at)
    }

    /// Start a registration and email out the verification link
    pub async fn initiate(
        tinak: &Tinak,
        email: &str,
        username: &str,
        account_type: &str,
    ) -> Result<PendingVerification> {
        let email = require_field(email, "email")?;
        let username = require_field(username, "username")?;
        let account_type = require_field(account_type, "accountType")?;
        validate_email(&email)?;

        let now = Timestamp::now_utc();
        let pending = PendingVerification::new(
            email,
            username,
            account_type,
            now,
            tinak.config.email_verification.expiry.expire_verification,
        )?;

        tinak
            .database
            .insert_pending_verification(&pending, now, tinak.config.pending.max_pending)
            .await?;

        info!("Pending verification created for {}", pending.email);

        pending.send_or_discard(tinak).await?;

        tinak
            .publish_event(TinakEvent::CreatePendingVerification {
                email: pending.email.clone(),
                username: pending.username.clone(),
                account_type: pending.account_type.clone(),
            })
            .await;

        Ok(pending)
    }

    /// Issue a fresh token for an unfinished registration
    ///
    /// Succeeds quietly when there is nothing to resend.
    pub async fn resend(tinak: &Tinak, email: &str) -> Success {
        let email = require_field(email, "email")?;

        let existing = match tinak
            .database
            .find_pending_verification_by_email(&email)
            .await?
        {
            Some(existing) if existing.state != VerificationState::Registering => existing,
            _ => return Ok(()),
        };

        let pending = PendingVerification::new(
            existing.email,
            existing.username,
            existing.account_type,
            Timestamp::now_utc(),
            tinak.config.email_verification.expiry.expire_verification,
        )?;

        match tinak
            .database
            .replace_pending_verification(&existing.token, &pending)
            .await
        {
            Ok(()) => {}
            // Claimed or consumed in the meantime
            Err(Error::InvalidToken) => return Ok(()),
            Err(err) => return Err(err),
        }

        info!("Verification reissued for {}", pending.email);
        pending.send_or_discard(tinak).await
    }

    /// Consume a token, provisioning a keypair and the account
    pub async fn consume(tinak: &Tinak, token: &str) -> Result<Account> {
        let token = require_field(token, "token")?;

        let pending = match tinak
            .database
            .claim_pending_verification(&token, Timestamp::now_utc())
            .await
        {
            Ok(pending) => pending,
            Err(Error::ExpiredToken) => {
                info!("Discarded expired verification {}", token);
                return Err(Error::ExpiredToken);
            }
            Err(err) => return Err(err),
        };

        let keypair = Keypair::random();

        if let Err(err) = tinak
            .registrar
            .register(&keypair.public_key, &pending.account_type, &pending.username)
            .await
        {
            error!("Ledger registration failed for {}: {:?}", pending.email, err);
            release(tinak, &token).await;
            return Err(Error::RegistrationFailed);
        }

        let account = Account::from_verification(&pending, keypair.public_key);

        if let Err(err) = tinak
            .vault
            .store_secret(&account.id, keypair.secret_key)
            .await
        {
            error!("Failed to store secret key for {}: {:?}", account.email, err);
            release(tinak, &token).await;
            return Err(err);
        }

        if let Err(err) = tinak
            .database
            .complete_pending_verification(&token, &account)
            .await
        {
            warn!("Could not complete verification for {}: {:?}", account.email, err);
            if let Err(err) = tinak.vault.delete_secret(&account.id).await {
                error!("Failed to drop secret key of {}: {:?}", account.id, err);
            }

            return Err(err);
        }

        info!("Account {} verified for {}", account.id, account.email);

        tinak
            .publish_event(TinakEvent::CreateAccount {
                account: account.clone(),
            })
            .await;

        Ok(account)
    }

    /// Send the verification email, dropping this verification if it can't be delivered
    async fn send_or_discard(&self, tinak: &Tinak) -> Success {
        let url = tinak.config.verification_url(&self.token);
        let minutes = self.expires_at.duration_since(self.created_at).whole_minutes();

        let result = match tinak.config.email_verification.templates.verify.render(
            &self.email,
            &json!({
                "url": url,
                "username": self.username,
                "minutes": minutes,
            }),
        ) {
            Ok(mail) => tinak.mailer.send(mail).await,
            Err(err) => Err(err),
        };

        match result {
            Ok(()) => {
                info!("Verification email sent to {}", self.email);
                Ok(())
            }
            Err(err) => {
                if let Err(err) = tinak.database.delete_pending_verification(&self.token).await {
                    warn!(
                        "Failed to discard undelivered verification for {}: {:?}",
                        self.email, err
                    );
                }

                Err(err)
            }
        }
    }
}

/// Hand a claimed verification back so it may be retried
async fn release(tinak: &Tinak, token: &str) {
    if let Err(err) = tinak.database.release_pending_verification(token).await {
        warn!("Failed to release verification {}: {:?}", token, err);
    }
}
