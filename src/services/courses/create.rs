use tracing::info;

use super::CourseService;
use crate::errors::{PortalError, Result};
use crate::models::{
    Payload, UserId,
    courses::{entities::Course, requests::CreateCourseRequest},
};
use crate::runtime::RequestContext;
use crate::services::access::{Action, authorize};
use crate::services::caller::resolve_caller;

pub async fn create_course(
    service: &CourseService,
    ctx: &RequestContext,
    user_id: UserId,
    request: Payload<CreateCourseRequest>,
) -> Result<Course> {
    let session = service.storage().begin(ctx).await?;

    let caller = resolve_caller(session.as_ref(), ctx, user_id).await?;
    authorize(&caller, Action::CreateCourse)?;

    // 载荷校验先于任何课程存储访问
    let fields = request.decode()?.validate()?;

    if !session.subject_exists(ctx, fields.subject_id).await? {
        return Err(PortalError::not_found("subject does not exist"));
    }

    let course = session.create_course(ctx, caller.id, &fields).await?;
    session.commit().await?;

    info!(
        request_id = ctx.request_id(),
        course_id = %course.id,
        teacher_user_id = %caller.id,
        "course created"
    );
    Ok(course)
}
