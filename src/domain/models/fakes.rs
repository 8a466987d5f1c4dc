use std::collections::VecDeque;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::AlertMessage;
use super::FetchError;
use super::Plant;
use super::PlantService;
use super::ServiceBox;
use super::SessionContext;

type AlertResult = Result<Option<AlertMessage>, FetchError>;
type PlantsResult = Result<Vec<Plant>, FetchError>;

/// In-memory plant service answering from queued responses. Once a queue is
/// drained, plants come back empty and alerts come back as `None`.
#[derive(Default)]
pub struct ScriptedService {
    alerts: Mutex<VecDeque<AlertResult>>,
    plants: Mutex<VecDeque<PlantsResult>>,
    delay: Duration,
    in_flight: AtomicUsize,
    pub alert_calls: AtomicUsize,
    pub max_in_flight: AtomicUsize,
    pub plant_calls: AtomicUsize,
}

impl ScriptedService {
    pub fn with_delay(mut self, delay: Duration) -> ScriptedService {
        self.delay = delay;
        return self;
    }

    pub fn push_alert(self, res: AlertResult) -> ScriptedService {
        self.alerts.lock().unwrap().push_back(res);
        return self;
    }

    pub fn push_plants(self, res: PlantsResult) -> ScriptedService {
        self.plants.lock().unwrap().push_back(res);
        return self;
    }

    pub fn boxed(self) -> (Arc<ScriptedService>, ServiceBox) {
        let service = Arc::new(self);
        let boxed: ServiceBox = service.clone();
        return (service, boxed);
    }

    async fn wait(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

pub fn status_error(endpoint: &str, status: u16) -> FetchError {
    return FetchError::HttpStatus {
        endpoint: endpoint.to_string(),
        status,
    };
}

#[async_trait]
impl PlantService for ScriptedService {
    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<(), FetchError> {
        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn list_plants(&self, _session: &SessionContext) -> PlantsResult {
        self.plant_calls.fetch_add(1, Ordering::SeqCst);
        self.wait().await;

        let next = self.plants.lock().unwrap().pop_front();
        return next.unwrap_or_else(|| return Ok(vec![]));
    }

    #[allow(clippy::implicit_return)]
    async fn get_alert(&self, _session: &SessionContext) -> AlertResult {
        self.alert_calls.fetch_add(1, Ordering::SeqCst);
        let in_flight = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(in_flight, Ordering::SeqCst);

        self.wait().await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        let next = self.alerts.lock().unwrap().pop_front();
        return next.unwrap_or(Ok(None));
    }
}
