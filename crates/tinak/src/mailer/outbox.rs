use futures::lock::Mutex;
use std::sync::Arc;

use super::{AbstractMailer, Mail};
use crate::Success;

/// In-memory outbox, keeps every email it is handed
#[derive(Default, Clone)]
pub struct Outbox {
    pub mail: Arc<Mutex<Vec<Mail>>>,
}

impl Outbox {
    /// Most recent email sent to a given address
    pub async fn last_mail_to(&self, to: &str) -> Option<Mail> {
        let mail = self.mail.lock().await;
        mail.iter().rev().find(|mail| mail.to == to).cloned()
    }
}

#[async_trait]
impl AbstractMailer for Outbox {
    async fn send(&self, mail: Mail) -> Success {
        info!("[outbox] {} <{}>\n{}", mail.subject, mail.to, mail.text);
        self.mail.lock().await.push(mail);
        Ok(())
    }
}
