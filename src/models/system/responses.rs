use serde::Serialize;

// 健康检查响应
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub name: String,
    pub version: &'static str,
    pub environment: String,
    pub storage_backend: &'static str,
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub uptime_seconds: i64,
}
