use tracing::info;

use super::CourseService;
use crate::errors::{PortalError, Result};
use crate::models::{
    CourseId, Payload, UserId,
    courses::{entities::Course, requests::UpdateCourseRequest},
};
use crate::runtime::RequestContext;
use crate::services::access::{AccessRule, Action, authorize, rule_mismatch};
use crate::services::caller::resolve_caller;

pub async fn update_course(
    service: &CourseService,
    ctx: &RequestContext,
    user_id: UserId,
    course_id: CourseId,
    request: Payload<UpdateCourseRequest>,
) -> Result<Course> {
    let session = service.storage().begin(ctx).await?;

    let caller = resolve_caller(session.as_ref(), ctx, user_id).await?;
    let rule = authorize(&caller, Action::UpdateCourse)?;

    let fields = request.decode()?.validate()?;

    let course = session
        .get_course(ctx, course_id)
        .await?
        .ok_or_else(|| PortalError::not_found(format!("course {course_id} does not exist")))?;

    match rule {
        AccessRule::Allow => {}
        AccessRule::CourseOwnerOnly => {
            if course.teacher_user_id != caller.id {
                info!(
                    request_id = ctx.request_id(),
                    user_id = %caller.id,
                    course_id = %course_id,
                    "course update denied: caller does not own the course"
                );
                return Err(PortalError::forbidden(
                    "only the owning teacher can update this course",
                ));
            }
        }
        other => return Err(rule_mismatch(&caller, Action::UpdateCourse, other)),
    }

    if !session.subject_exists(ctx, fields.subject_id).await? {
        return Err(PortalError::not_found("subject does not exist"));
    }

    let affected = session.update_course(ctx, course_id, &fields).await?;
    if affected == 0 {
        return Err(PortalError::not_found(format!(
            "course {course_id} does not exist"
        )));
    }

    let updated = session
        .get_course(ctx, course_id)
        .await?
        .ok_or_else(|| PortalError::not_found(format!("course {course_id} does not exist")))?;
    session.commit().await?;

    info!(
        request_id = ctx.request_id(),
        course_id = %course_id,
        teacher_user_id = %caller.id,
        "course updated"
    );
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::services::test_support::{School, ctx};
    use chrono::{TimeZone, Utc};

    fn request(title: &str) -> UpdateCourseRequest {
        UpdateCourseRequest {
            title: title.to_string(),
            description: "updated".to_string(),
            subject_id: 3,
            scheduled_at: Some(Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 0).unwrap()),
        }
    }

    #[tokio::test]
    async fn test_other_teacher_is_forbidden() {
        let school = School::new();
        let service = CourseService::new(school.storage.clone());

        let err = service
            .update_course(&ctx(), UserId(7), CourseId(42), request("Algebra II"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Forbidden);
        assert_eq!(
            school.storage.course_row(CourseId(42)).unwrap().title,
            "Algebra I"
        );
    }

    #[tokio::test]
    async fn test_owner_updates_course() {
        let school = School::new();
        let service = CourseService::new(school.storage.clone());

        let updated = service
            .update_course(&ctx(), UserId(9), CourseId(42), request("Algebra II"))
            .await
            .unwrap();
        assert_eq!(updated.teacher_user_id, UserId(9));
        assert_eq!(updated.title, "Algebra II");
        assert_eq!(updated.description, "updated");
        assert!(updated.updated_at >= updated.created_at);
        assert_eq!(
            school.storage.course_row(CourseId(42)).unwrap().title,
            "Algebra II"
        );
    }

    #[tokio::test]
    async fn test_students_cannot_update() {
        let school = School::new();
        let service = CourseService::new(school.storage.clone());

        let err = service
            .update_course(&ctx(), school.student, school.course, request("X"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Forbidden);
    }

    #[tokio::test]
    async fn test_missing_or_deleted_course_is_not_found() {
        let school = School::new();
        let service = CourseService::new(school.storage.clone());

        let err = service
            .update_course(&ctx(), school.owner, CourseId(4242), request("X"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);

        school.storage.soft_delete_course(school.course);
        let err = service
            .update_course(&ctx(), school.owner, school.course, request("X"))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_invalid_payload_checked_before_course_lookup() {
        let school = School::new();
        let service = CourseService::new(school.storage.clone());
        school.storage.clear_recorded_calls();

        let err = service
            .update_course(&ctx(), school.owner, school.course, request(""))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(!school.storage.recorded_calls().contains(&"get_course"));
    }

    #[tokio::test]
    async fn test_missing_subject_rolls_back() {
        let school = School::new();
        let service = CourseService::new(school.storage.clone());

        let err = service
            .update_course(
                &ctx(),
                school.owner,
                school.course,
                UpdateCourseRequest {
                    subject_id: 77,
                    ..request("Algebra II")
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(
            school.storage.course_row(school.course).unwrap().title,
            "Algebra I"
        );
    }
}
