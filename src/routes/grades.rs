use actix_web::{HttpResponse, Result as ActixResult, web};

use crate::models::ApiResponse;
use crate::runtime::RequestContext;
use crate::services::GradeService;
use crate::utils::{CallerId, SafeGradeId};

pub async fn get_grade_detail(
    service: web::Data<GradeService>,
    ctx: RequestContext,
    caller: CallerId,
    grade_id: SafeGradeId,
) -> ActixResult<HttpResponse> {
    let detail = service.grade_detail(&ctx, caller.0, grade_id.0).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(detail, "Grade retrieved successfully")))
}

// 配置路由
pub fn configure_grades_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/grades").route("/{grade_id}", web::get().to(get_grade_detail)),
    );
}
