use tracing::info;

use super::GradeService;
use crate::errors::{PortalError, Result};
use crate::models::{GradeId, UserId, grades::responses::GradeDetailResponse};
use crate::runtime::RequestContext;
use crate::services::access::{AccessRule, Action, authorize, rule_mismatch};
use crate::services::caller::resolve_caller;

pub async fn grade_detail(
    service: &GradeService,
    ctx: &RequestContext,
    user_id: UserId,
    grade_id: GradeId,
) -> Result<GradeDetailResponse> {
    let session = service.storage().begin(ctx).await?;

    let caller = resolve_caller(session.as_ref(), ctx, user_id).await?;
    let rule = authorize(&caller, Action::ViewGrade)?;

    let grade = session
        .get_grade(ctx, grade_id)
        .await?
        .ok_or_else(|| PortalError::not_found(format!("grade {grade_id} does not exist")))?;

    match rule {
        AccessRule::Unrestricted => {}
        AccessRule::OwnRecordsOnly => {
            if grade.student_user_id != caller.id {
                info!(
                    request_id = ctx.request_id(),
                    user_id = %caller.id,
                    grade_id = %grade_id,
                    "grade view denied: grade belongs to another student"
                );
                return Err(PortalError::forbidden("students may only view their own grades"));
            }
        }
        AccessRule::TaughtCoursesOnly => {
            if !session
                .is_teacher_of_course(ctx, caller.id, grade.course_id)
                .await?
            {
                info!(
                    request_id = ctx.request_id(),
                    user_id = %caller.id,
                    grade_id = %grade_id,
                    course_id = %grade.course_id,
                    "grade view denied: caller does not teach the course"
                );
                return Err(PortalError::forbidden(
                    "teachers may only view grades of their own courses",
                ));
            }
        }
        other => return Err(rule_mismatch(&caller, Action::ViewGrade, other)),
    }

    let grade_summary = session
        .grade_summary(ctx, grade_id)
        .await?
        .ok_or_else(|| PortalError::not_found(format!("grade {grade_id} does not exist")))?;
    let grade_details = session.grade_details(ctx, grade.student_test_id).await?;
    session.commit().await?;

    Ok(GradeDetailResponse {
        grade_summary,
        grade_details,
    })
}
