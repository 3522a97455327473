use iso8601_timestamp::Timestamp;

use crate::{
    models::{Account, PendingVerification, PublicAccount, CLIENT_ACCOUNT_TYPE},
    util::require_field,
    Error, Result, Tinak,
};

impl Account {
    /// Create the account for a consumed verification
    pub fn from_verification(pending: &PendingVerification, public_key: String) -> Account {
        Account {
            id: ulid::Ulid::new().to_string(),
            email: pending.email.clone(),
            username: pending.username.clone(),
            account_type: pending.account_type.clone(),
            public_key,
            is_verified: true,
            created_at: Timestamp::now_utc(),
        }
    }

    /// Public projection of this account
    pub fn to_public(&self) -> PublicAccount {
        PublicAccount {
            id: self.id.clone(),
            email: self.email.clone(),
            username: self.username.clone(),
            account_type: self.account_type.clone(),
            public_key: self.public_key.clone(),
        }
    }

    /// Find the verified account to log in with
    pub async fn login(tinak: &Tinak, email: &str) -> Result<Account> {
        let email = require_field(email, "email")?;

        tinak
            .database
            .find_account_by_email(&email)
            .await?
            .filter(|account| account.is_verified)
            .ok_or(Error::UnknownUser)
    }

    /// Fetch every client account, in creation order
    pub async fn fetch_clients(tinak: &Tinak) -> Result<Vec<Account>> {
        tinak
            .database
            .find_accounts_by_type(CLIENT_ACCOUNT_TYPE)
            .await
    }
}

#[cfg(test)]
mod tests {
    use crate::{models::Account, Error, Tinak};

    async fn register(tinak: &Tinak, email: &str, account_type: &str) -> Account {
        let pending = crate::models::PendingVerification::initiate(
            tinak,
            email,
            "someone",
            account_type,
        )
        .await
        .unwrap();

        crate::models::PendingVerification::consume(tinak, &pending.token)
            .await
            .unwrap()
    }

    #[async_std::test]
    async fn login_requires_verified_account() {
        let tinak = Tinak::default();

        crate::models::PendingVerification::initiate(&tinak, "ana@example.com", "ana", "client")
            .await
            .unwrap();

        assert_eq!(
            Account::login(&tinak, "ana@example.com").await,
            Err(Error::UnknownUser)
        );
        assert_eq!(
            Account::login(&tinak, "nobody@example.com").await,
            Err(Error::UnknownUser)
        );
        assert_eq!(
            Account::login(&tinak, " ").await,
            Err(Error::IncorrectData { with: "email" })
        );
    }

    #[async_std::test]
    async fn login_finds_verified_account() {
        let tinak = Tinak::default();
        let account = register(&tinak, "ana@example.com", "client").await;

        let found = Account::login(&tinak, "ana@example.com").await.unwrap();
        assert_eq!(found, account);
        assert!(found.is_verified);
        assert_eq!(found.to_public().public_key, account.public_key);
    }

    #[async_std::test]
    async fn clients_are_listed_in_order() {
        let tinak = Tinak::default();
        let first = register(&tinak, "first@example.com", "client").await;
        register(&tinak, "company@example.com", "business").await;
        let second = register(&tinak, "second@example.com", "client").await;

        let clients = Account::fetch_clients(&tinak).await.unwrap();
        assert_eq!(clients, vec![first, second]);
    }
}
