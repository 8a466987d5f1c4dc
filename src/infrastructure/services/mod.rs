pub mod http;

use std::sync::Arc;

use anyhow::Result;

use crate::domain::models::ServiceBox;

pub struct PlantServiceManager {}

impl PlantServiceManager {
    pub fn get() -> Result<ServiceBox> {
        return Ok(Arc::new(http::HttpPlantService::from_config()?));
    }
}
