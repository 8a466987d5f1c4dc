#[cfg(test)]
#[path = "plant_list_fetcher_test.rs"]
mod tests;

use anyhow::Result;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::domain::models::Event;
use crate::domain::models::FetchError;
use crate::domain::models::Plant;
use crate::domain::models::ServiceBox;
use crate::domain::models::SessionContext;

pub struct PlantListFetcher {
    service: ServiceBox,
}

impl PlantListFetcher {
    pub fn new(service: ServiceBox) -> PlantListFetcher {
        return PlantListFetcher { service };
    }

    pub async fn fetch(&self, session: &SessionContext) -> Result<Vec<Plant>, FetchError> {
        let plants = self.service.list_plants(session).await?;
        tracing::debug!(
            user_id = session.user_id(),
            count = plants.len(),
            "Fetched plants"
        );

        return Ok(plants);
    }

    /// Fetches the plant list once and hands it to the screen. Failures are
    /// logged and dropped so the screen keeps whatever it displayed before.
    pub async fn start(
        self,
        session: SessionContext,
        tx: mpsc::UnboundedSender<Event>,
        cancel: CancellationToken,
    ) -> Result<()> {
        let res = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::debug!("Plant fetch abandoned, screen is no longer active");
                return Ok(());
            }
            res = self.fetch(&session) => res,
        };

        match res {
            Ok(plants) => {
                tx.send(Event::PlantsLoaded(plants))?;
            }
            Err(err) => {
                tracing::error!(error = %err, user_id = session.user_id(), "Failed to fetch plants");
            }
        }

        return Ok(());
    }
}
