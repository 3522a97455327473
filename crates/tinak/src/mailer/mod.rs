use std::ops::Deref;
use std::sync::Arc;

use crate::{config::EmailVerificationConfig, Result, Success};

mod outbox;
mod smtp;

pub use outbox::Outbox;
pub use smtp::SmtpMailer;

/// Rendered email, ready to be delivered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mail {
    /// Recipient address
    pub to: String,
    /// Subject line
    pub subject: String,
    /// Plain text body
    pub text: String,
    /// HTML body
    pub html: Option<String>,
}

#[async_trait]
pub trait AbstractMailer: std::marker::Sync + std::marker::Send {
    /// Deliver an email
    async fn send(&self, mail: Mail) -> Success;
}

#[derive(Clone)]
pub enum Mailer {
    Outbox(Outbox),
    Smtp(SmtpMailer),
    Custom(Arc<dyn AbstractMailer>),
}

impl Default for Mailer {
    fn default() -> Self {
        Self::Outbox(Default::default())
    }
}

impl Mailer {
    /// Pick a mailer for the given configuration
    pub fn from_config(config: &EmailVerificationConfig) -> Result<Mailer> {
        Ok(match &config.smtp {
            Some(smtp) => Mailer::Smtp(SmtpMailer::new(smtp)?),
            None => {
                warn!("No SMTP server configured, verification emails will only be logged.");
                Mailer::Outbox(Default::default())
            }
        })
    }
}

impl Deref for Mailer {
    type Target = dyn AbstractMailer;

    fn deref(&self) -> &Self::Target {
        match self {
            Mailer::Outbox(outbox) => outbox,
            Mailer::Smtp(smtp) => smtp,
            Mailer::Custom(custom) => custom.as_ref(),
        }
    }
}
