use actix_web::{HttpResponse, Result as ActixResult, web};

use crate::models::{ApiResponse, AppStartTime};
use crate::services::SystemService;

pub async fn health(
    service: web::Data<SystemService>,
    start_time: web::Data<AppStartTime>,
) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        service.health(start_time.get_ref()),
        "Service is healthy",
    )))
}

// 配置路由
pub fn configure_system_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1/system").route("/health", web::get().to(health)));
}
