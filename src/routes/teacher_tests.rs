use actix_web::{HttpResponse, Result as ActixResult, web};

use crate::models::ApiResponse;
use crate::runtime::RequestContext;
use crate::services::TestService;
use crate::utils::CallerId;

pub async fn list_tests(
    service: web::Data<TestService>,
    ctx: RequestContext,
    caller: CallerId,
) -> ActixResult<HttpResponse> {
    let tests = service.list_tests(&ctx, caller.0).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(tests, "Tests retrieved successfully")))
}

// 配置路由
pub fn configure_tests_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1/tests").route("", web::get().to(list_tests)));
}
