use chrono::Utc;

use super::SystemService;
use crate::models::{AppStartTime, system::responses::HealthResponse};

pub fn health(service: &SystemService, start_time: &AppStartTime) -> HealthResponse {
    let config = service.get_config();
    let now = Utc::now();

    HealthResponse {
        name: config.app.system_name.clone(),
        version: env!("CARGO_PKG_VERSION"),
        environment: config.app.environment.clone(),
        storage_backend: service.storage_backend(),
        started_at: start_time.start_datetime,
        uptime_seconds: (now - start_time.start_datetime).num_seconds().max(0),
    }
}
