use std::sync::Arc;

use async_trait::async_trait;

use super::AlertMessage;
use super::FetchError;
use super::Plant;
use super::SessionContext;

pub type ServiceBox = Arc<dyn PlantService + Send + Sync>;

#[async_trait]
pub trait PlantService {
    /// Used at startup to verify the plant server can be reached.
    async fn health_check(&self) -> Result<(), FetchError>;

    /// Lists every plant owned by the session's user, in the order the server
    /// returns them.
    async fn list_plants(&self, session: &SessionContext) -> Result<Vec<Plant>, FetchError>;

    /// Requests the pending alert for the session's user. `None` means the
    /// server answered successfully with nothing to show.
    async fn get_alert(&self, session: &SessionContext)
        -> Result<Option<AlertMessage>, FetchError>;
}
