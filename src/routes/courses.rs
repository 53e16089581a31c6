use actix_web::{HttpResponse, Result as ActixResult, web};

use crate::models::{
    ApiResponse, Payload,
    courses::requests::{CreateCourseRequest, UpdateCourseRequest},
};
use crate::runtime::RequestContext;
use crate::services::CourseService;
use crate::utils::{CallerId, SafeCourseId};

// HTTP处理程序
//
// 请求体只在这里做 JSON 语法解析，字段解码由服务层在权限检查后进行。
pub async fn create_course(
    service: web::Data<CourseService>,
    ctx: RequestContext,
    caller: CallerId,
    course_data: web::Json<serde_json::Value>,
) -> ActixResult<HttpResponse> {
    let request = Payload::<CreateCourseRequest>::Raw(course_data.into_inner());
    let course = service.create_course(&ctx, caller.0, request).await?;
    Ok(HttpResponse::Created().json(ApiResponse::success(course, "Course created successfully")))
}

pub async fn update_course(
    service: web::Data<CourseService>,
    ctx: RequestContext,
    caller: CallerId,
    course_id: SafeCourseId,
    update_data: web::Json<serde_json::Value>,
) -> ActixResult<HttpResponse> {
    let request = Payload::<UpdateCourseRequest>::Raw(update_data.into_inner());
    let course = service
        .update_course(&ctx, caller.0, course_id.0, request)
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(course, "Course updated successfully")))
}

// 配置路由
pub fn configure_courses_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/courses")
            .route("", web::post().to(create_course))
            .route("/{course_id}", web::put().to(update_course)),
    );
}
