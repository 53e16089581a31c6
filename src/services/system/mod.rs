pub mod health;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::{AppStartTime, system::responses::HealthResponse};
use crate::storage::Storage;

pub struct SystemService {
    storage: Arc<dyn Storage>,
}

impl SystemService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn get_config(&self) -> &AppConfig {
        AppConfig::get()
    }

    pub(crate) fn storage_backend(&self) -> &'static str {
        self.storage.backend_name()
    }

    // 运行状态
    pub fn health(&self, start_time: &AppStartTime) -> HealthResponse {
        health::health(self, start_time)
    }
}
