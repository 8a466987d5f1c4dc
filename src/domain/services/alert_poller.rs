#[cfg(test)]
#[path = "alert_poller_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use tokio::sync::mpsc;
use tokio::time;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::domain::models::AlertMessage;
use crate::domain::models::Event;
use crate::domain::models::FetchError;
use crate::domain::models::ServiceBox;
use crate::domain::models::SessionContext;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(20);
pub const MAX_POLL_INTERVAL: Duration = Duration::from_secs(24 * 60 * 60);

pub struct AlertPoller {
    service: ServiceBox,
    interval: Duration,
}

impl AlertPoller {
    pub fn new(service: ServiceBox, interval: Duration) -> Result<AlertPoller> {
        if interval.is_zero() {
            bail!("Alert poll interval must be greater than zero");
        }
        if interval > MAX_POLL_INTERVAL {
            bail!(format!(
                "Alert poll interval must be at most {}s, got {}s",
                MAX_POLL_INTERVAL.as_secs(),
                interval.as_secs()
            ));
        }

        return Ok(AlertPoller { service, interval });
    }

    pub async fn poll(&self, session: &SessionContext) -> Result<Option<AlertMessage>, FetchError> {
        return self.service.get_alert(session).await;
    }

    /// Polls for alerts every interval until `cancel` fires. The first tick
    /// happens one interval after starting.
    ///
    /// Ticks never overlap: a slow request pushes the following tick back
    /// instead of racing it, so a notification always comes from the newest
    /// request. Cancelling while a request is in flight drops it, and its
    /// response never reaches the screen.
    pub async fn start(
        self,
        session: SessionContext,
        tx: mpsc::UnboundedSender<Event>,
        cancel: CancellationToken,
    ) -> Result<()> {
        let first_tick = match time::Instant::now().checked_add(self.interval) {
            Some(first_tick) => first_tick,
            None => bail!("Alert poll interval is too large to schedule"),
        };
        let mut ticker = time::interval_at(first_tick, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        tracing::debug!(
            user_id = session.user_id(),
            interval_secs = self.interval.as_secs(),
            "Alert poller started"
        );

        let mut tick: u64 = 0;
        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                _ = ticker.tick() => {}
            }

            tick += 1;
            let res = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    tracing::debug!(tick, "Dropping in-flight alert poll");
                    break;
                }
                res = self.poll(&session) => res,
            };

            match res {
                Ok(Some(alert)) => {
                    tracing::info!(tick, message = %alert.message, "Alert received");
                    tx.send(Event::AlertReceived(alert))?;
                }
                Ok(None) => {
                    tracing::debug!(tick, "No pending alert");
                }
                Err(err) => {
                    tracing::warn!(tick, error = %err, "Alert poll failed");
                }
            }
        }

        tracing::debug!(ticks = tick, "Alert poller stopped");
        return Ok(());
    }
}
