#[cfg(test)]
#[path = "home_screen_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use tokio::sync::mpsc;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use super::AlertPoller;
use super::PlantListFetcher;
use crate::domain::models::Event;
use crate::domain::models::ServiceBox;
use crate::domain::models::SessionContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenStatus {
    Inactive,
    Active,
}

/// Owns the background work behind the home screen: a one-shot plant fetch
/// and the recurring alert poller, both tied to a single cancellation token.
pub struct HomeScreen {
    cancel: Option<CancellationToken>,
    poll_interval: Duration,
    service: ServiceBox,
    tasks: JoinSet<Result<()>>,
}

impl HomeScreen {
    pub fn new(service: ServiceBox, poll_interval: Duration) -> HomeScreen {
        return HomeScreen {
            cancel: None,
            poll_interval,
            service,
            tasks: JoinSet::new(),
        };
    }

    pub fn status(&self) -> ScreenStatus {
        if self.cancel.is_some() {
            return ScreenStatus::Active;
        }

        return ScreenStatus::Inactive;
    }

    pub fn activate(
        &mut self,
        session: SessionContext,
        tx: mpsc::UnboundedSender<Event>,
    ) -> Result<()> {
        if self.status() == ScreenStatus::Active {
            bail!("Home screen is already active");
        }

        let poller = AlertPoller::new(self.service.clone(), self.poll_interval)?;
        let fetcher = PlantListFetcher::new(self.service.clone());
        let cancel = CancellationToken::new();

        let fetch_session = session.clone();
        let fetch_tx = tx.clone();
        let fetch_cancel = cancel.clone();
        self.tasks.spawn(async move {
            return fetcher.start(fetch_session, fetch_tx, fetch_cancel).await;
        });

        let poll_cancel = cancel.clone();
        self.tasks.spawn(async move {
            return poller.start(session, tx, poll_cancel).await;
        });

        tracing::info!("Home screen activated");
        self.cancel = Some(cancel);

        return Ok(());
    }

    /// Stops the poller and abandons any in-flight request, then waits for
    /// both tasks to wind down. Deactivating an inactive screen does nothing.
    pub async fn deactivate(&mut self) -> Result<()> {
        let cancel = match self.cancel.take() {
            Some(cancel) => cancel,
            None => return Ok(()),
        };

        cancel.cancel();
        while let Some(res) = self.tasks.join_next().await {
            res??;
        }

        tracing::info!("Home screen deactivated");
        return Ok(());
    }
}
