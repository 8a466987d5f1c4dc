#[cfg(test)]
#[path = "http_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::AlertMessage;
use crate::domain::models::FetchError;
use crate::domain::models::Plant;
use crate::domain::models::PlantService;
use crate::domain::models::SessionContext;

pub const PLANTS_ENDPOINT: &str = "/plants";
pub const ALERT_ENDPOINT: &str = "/getalert";
pub const USER_ID_HEADER: &str = "user_id";

pub struct HttpPlantService {
    client: reqwest::Client,
    url: String,
}

impl HttpPlantService {
    pub fn new(url: &str, timeout: Duration) -> Result<HttpPlantService> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        return Ok(HttpPlantService {
            client,
            url: url.trim_end_matches('/').to_string(),
        });
    }

    pub fn from_config() -> Result<HttpPlantService> {
        return HttpPlantService::new(&Config::get(ConfigKey::ServerURL), Config::request_timeout()?);
    }

    async fn get_body(&self, endpoint: &str, session: &SessionContext) -> Result<String, FetchError> {
        let res = self
            .client
            .get(format!("{url}{endpoint}", url = self.url))
            .header(CONTENT_TYPE, "application/json")
            .header(USER_ID_HEADER, session.user_id())
            .send()
            .await
            .map_err(|err| return FetchError::network(endpoint, err))?;

        let status = res.status();
        if !status.is_success() {
            tracing::error!(
                endpoint,
                status = status.as_u16(),
                "Plant server returned an error status"
            );
            return Err(FetchError::HttpStatus {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        let body = res
            .text()
            .await
            .map_err(|err| return FetchError::network(endpoint, err))?;
        tracing::debug!(endpoint, body = %body, "Plant server response");

        return Ok(body);
    }
}

#[async_trait]
impl PlantService for HttpPlantService {
    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<(), FetchError> {
        let res = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|err| return FetchError::network("/", err))?;

        if !res.status().is_success() {
            tracing::error!(status = res.status().as_u16(), "Plant server health check failed");
            return Err(FetchError::HttpStatus {
                endpoint: "/".to_string(),
                status: res.status().as_u16(),
            });
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn list_plants(&self, session: &SessionContext) -> Result<Vec<Plant>, FetchError> {
        let body = self.get_body(PLANTS_ENDPOINT, session).await?;
        let plants = serde_json::from_str::<Vec<Plant>>(&body)
            .map_err(|err| return FetchError::decode(PLANTS_ENDPOINT, err))?;

        return Ok(plants);
    }

    #[allow(clippy::implicit_return)]
    async fn get_alert(
        &self,
        session: &SessionContext,
    ) -> Result<Option<AlertMessage>, FetchError> {
        let body = self.get_body(ALERT_ENDPOINT, session).await?;
        if body.trim().is_empty() {
            return Ok(None);
        }

        let value = serde_json::from_str::<Value>(&body)
            .map_err(|err| return FetchError::decode(ALERT_ENDPOINT, err))?;
        let alert = AlertMessage::from_value(value)
            .map_err(|err| return FetchError::decode(ALERT_ENDPOINT, err))?;

        return Ok(alert);
    }
}
