use tracing::debug;

use super::TestService;
use crate::errors::Result;
use crate::models::{UserId, teacher_tests::responses::TestListResponse};
use crate::runtime::RequestContext;
use crate::services::access::{AccessRule, Action, authorize, rule_mismatch};
use crate::services::caller::resolve_caller;

pub async fn list_tests(
    service: &TestService,
    ctx: &RequestContext,
    user_id: UserId,
) -> Result<TestListResponse> {
    let session = service.storage().begin(ctx).await?;

    let caller = resolve_caller(session.as_ref(), ctx, user_id).await?;
    let tests = match authorize(&caller, Action::ListTests)? {
        AccessRule::AuthoredTests => session.list_tests_for_teacher(ctx, caller.id).await?,
        AccessRule::AttendedCourses => session.list_tests_for_student(ctx, caller.id).await?,
        other => return Err(rule_mismatch(&caller, Action::ListTests, other)),
    };
    session.commit().await?;

    debug!(
        request_id = ctx.request_id(),
        user_id = %caller.id,
        count = tests.len(),
        "tests listed"
    );
    Ok(tests.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::test_support::{School, ctx};
    use crate::storage::memory_storage::TeacherTestRow;
    use chrono::{TimeZone, Utc};

    fn add_test(school: &School, title: &str, created_day: u32, scheduled_day: u32, draft: bool) {
        school.storage.insert_teacher_test(TeacherTestRow {
            title: title.to_string(),
            description: String::new(),
            duration_minutes: 30,
            course_id: school.course.get(),
            created_by: school.owner.get(),
            is_draft: draft,
            scheduled_at: Utc.with_ymd_and_hms(2025, 4, scheduled_day, 9, 0, 0).unwrap(),
            created_at: Utc.with_ymd_and_hms(2025, 3, created_day, 9, 0, 0).unwrap(),
            ..Default::default()
        });
    }

    fn titles(response: &TestListResponse) -> Vec<&str> {
        response.tests.iter().map(|t| t.title.as_str()).collect()
    }

    #[tokio::test]
    async fn test_teacher_listing_is_newest_first_and_includes_drafts() {
        let school = School::new();
        add_test(&school, "Quiz A", 5, 20, false);
        add_test(&school, "Draft B", 9, 25, true);
        let service = TestService::new(school.storage.clone());

        let response = service.list_tests(&ctx(), school.owner).await.unwrap();
        // Midterm 创建于 4 月 2 日，晚于以上两个
        assert_eq!(titles(&response), vec!["Midterm", "Draft B", "Quiz A"]);
        assert_eq!(response.count, 3);
    }

    #[tokio::test]
    async fn test_student_listing_is_soonest_first_without_drafts() {
        let school = School::new();
        add_test(&school, "Quiz A", 5, 20, false);
        add_test(&school, "Pop Quiz", 6, 3, false);
        add_test(&school, "Draft B", 9, 2, true);
        let service = TestService::new(school.storage.clone());

        let response = service.list_tests(&ctx(), school.student).await.unwrap();
        assert_eq!(titles(&response), vec!["Pop Quiz", "Midterm", "Quiz A"]);
        assert_eq!(response.tests[0].course_title, "Algebra I");
        assert_eq!(response.tests[0].teacher_name, "Nine");
    }

    #[tokio::test]
    async fn test_empty_listings_are_not_errors() {
        let school = School::new();
        let service = TestService::new(school.storage.clone());

        let teacher = service.list_tests(&ctx(), school.other_teacher).await.unwrap();
        assert_eq!(teacher.count, 0);
        assert!(teacher.tests.is_empty());

        // 未出席任何课程
        let student = service.list_tests(&ctx(), school.other_student).await.unwrap();
        assert!(student.tests.is_empty());
    }

    #[tokio::test]
    async fn test_deleted_course_hides_tests() {
        let school = School::new();
        school.storage.soft_delete_course(school.course);
        let service = TestService::new(school.storage.clone());

        let response = service.list_tests(&ctx(), school.student).await.unwrap();
        assert!(response.tests.is_empty());
    }

    #[tokio::test]
    async fn test_parent_uses_attendance_listing() {
        let school = School::new();
        let service = TestService::new(school.storage.clone());
        school.storage.clear_recorded_calls();

        let response = service.list_tests(&ctx(), school.parent).await.unwrap();
        assert!(response.tests.is_empty());
        assert!(
            school
                .storage
                .recorded_calls()
                .contains(&"list_tests_for_student")
        );
    }

    #[tokio::test]
    async fn test_other_role_lists_attended_published_tests() {
        let school = School::new();
        add_test(&school, "Draft B", 9, 2, true);
        let other = school.storage.add_user("Oz", "other");
        school.storage.add_attendance(other, school.course);
        let service = TestService::new(school.storage.clone());

        let response = service.list_tests(&ctx(), other).await.unwrap();
        assert_eq!(titles(&response), vec!["Midterm"]);
    }
}
