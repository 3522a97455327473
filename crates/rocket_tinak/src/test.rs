pub use iso8601_timestamp::{Duration, Timestamp};
pub use rocket::http::{ContentType, Status};
pub use std::sync::Arc;
pub use tinak::{
    config::*, database::DummyDb, mailer::*, models::*, Database, Error, Registrar, Result,
    Success, Tinak, TinakEvent, Vault,
};

use tinak::ledger::AbstractRegistrar;

use crate::PublicDir;

/// Mailer that never manages to deliver anything
pub struct BrokenMailer;

#[async_trait::async_trait]
impl AbstractMailer for BrokenMailer {
    async fn send(&self, _mail: Mail) -> Success {
        Err(Error::EmailFailed)
    }
}

/// Registrar whose ledger is always unreachable
pub struct BrokenRegistrar;

#[async_trait::async_trait]
impl AbstractRegistrar for BrokenRegistrar {
    async fn register(&self, _: &str, _: &str, _: &str) -> Success {
        Err(Error::InternalError)
    }
}

pub fn for_test() -> (Tinak, Outbox) {
    let outbox = Outbox::default();

    (
        Tinak {
            mailer: Mailer::Outbox(outbox.clone()),
            ..Default::default()
        },
        outbox,
    )
}

/// Register and verify an account, using the local part of the email as username
pub async fn create_account(tinak: &Tinak, email: &str, account_type: &str) -> Account {
    let username = email.split('@').next().unwrap_or(email);
    let pending = PendingVerification::initiate(tinak, email, username, account_type)
        .await
        .unwrap();

    PendingVerification::consume(tinak, &pending.token)
        .await
        .unwrap()
}

pub async fn bootstrap_rocket_with_tinak(tinak: Tinak) -> rocket::local::asynchronous::Client {
    let rocket = crate::mount(rocket::build(), tinak, PublicDir::default());

    rocket::local::asynchronous::Client::tracked(rocket)
        .await
        .expect("valid `Rocket`")
}
