use std::time::Duration;

use iso8601_timestamp::Timestamp;

use crate::{Result, Tinak, TinakEvent};

impl Tinak {
    /// Remove every expired pending verification
    pub async fn reap_expired_verifications(&self) -> Result<usize> {
        let expired = self
            .database
            .delete_expired_verifications(Timestamp::now_utc())
            .await?;

        if expired.is_empty() {
            return Ok(0);
        }

        info!("Reaped {} expired verifications", expired.len());

        let count = expired.len();
        self.publish_event(TinakEvent::ExpireVerifications {
            emails: expired.into_iter().map(|pending| pending.email).collect(),
        })
        .await;

        Ok(count)
    }

    /// Sweep expired verifications forever, every `reap_interval` seconds
    pub async fn run_reaper(self) {
        let interval = Duration::from_secs(self.config.pending.reap_interval.max(1));

        loop {
            async_std::task::sleep(interval).await;

            if let Err(err) = self.reap_expired_verifications().await {
                error!("Failed to reap expired verifications: {:?}", err);
            }
        }
    }
}
