#[macro_use]
extern crate serde;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate async_trait;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_json;

#[cfg(feature = "schemas")]
#[macro_use]
extern crate schemars;

mod result;
pub use result::*;

pub mod config;
pub mod database;
pub mod derive;
pub mod events;
pub mod r#impl;
pub mod ledger;
pub mod mailer;
pub mod models;
pub mod util;
pub mod vault;

pub use config::Config;
pub use database::Database;
pub use events::TinakEvent;
pub use ledger::Registrar;
pub use mailer::Mailer;
pub use vault::Vault;

use async_std::channel::Sender;

/// Tinak state
#[derive(Default, Clone)]
pub struct Tinak {
    pub config: Config,
    pub database: Database,
    pub mailer: Mailer,
    pub registrar: Registrar,
    pub vault: Vault,
    pub event_channel: Option<Sender<TinakEvent>>,
}

impl Tinak {
    pub async fn publish_event(&self, event: TinakEvent) {
        if let Some(sender) = &self.event_channel {
            if let Err(err) = sender.send(event).await {
                error!("Failed to publish a Tinak event: {:?}", err);
            }
        }
    }
}
