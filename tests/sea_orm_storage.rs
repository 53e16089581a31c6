//! SeaORM 后端在 SQLite 内存库上的查询语义

use std::time::Duration;

use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, Set};

use edu_portal::entity::{
    attendances, courses, grades, student_test_answers, student_tests, subjects, teacher_tests,
    test_questions, users,
};
use edu_portal::models::courses::requests::CourseFields;
use edu_portal::models::{CourseId, GradeId, StudentTestId, SubjectId, UserId};
use edu_portal::runtime::RequestContext;
use edu_portal::storage::Storage;
use edu_portal::storage::sea_orm_storage::SeaOrmStorage;

const DAY: i64 = 86_400;
const BASE: i64 = 1_743_498_000; // 2025-04-01 09:00:00 UTC

fn ctx() -> RequestContext {
    RequestContext::with_timeout(Duration::from_secs(5))
}

async fn connect() -> (DatabaseConnection, SeaOrmStorage) {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opt).await.unwrap();
    let storage = SeaOrmStorage::from_connection(db.clone()).await.unwrap();
    (db, storage)
}

async fn user(db: &DatabaseConnection, id: i64, name: &str, role: &str, deleted: bool) {
    users::ActiveModel {
        id: Set(id),
        name: Set(name.to_string()),
        email: Set(format!("{id}@school.test")),
        password_hash: Set("x".to_string()),
        phone: Set(None),
        role: Set(role.to_string()),
        is_deleted: Set(deleted),
        created_at: Set(BASE),
        updated_at: Set(BASE),
    }
    .insert(db)
    .await
    .unwrap();
}

async fn course(db: &DatabaseConnection, id: i64, teacher: i64, deleted: bool) {
    courses::ActiveModel {
        id: Set(id),
        title: Set(format!("Course {id}")),
        description: Set("desc".to_string()),
        teacher_user_id: Set(teacher),
        subject_id: Set(3),
        scheduled_at: Set(BASE),
        created_at: Set(BASE),
        updated_at: Set(BASE),
        is_deleted: Set(deleted),
    }
    .insert(db)
    .await
    .unwrap();
}

async fn attendance(db: &DatabaseConnection, id: i64, student: i64, course_id: i64) {
    attendances::ActiveModel {
        id: Set(id),
        student_user_id: Set(student),
        course_id: Set(course_id),
        status: Set("present".to_string()),
        attended_at: Set(BASE),
        is_deleted: Set(false),
    }
    .insert(db)
    .await
    .unwrap();
}

struct SeedTest {
    id: i64,
    course_id: i64,
    created_by: i64,
    is_draft: bool,
    scheduled_day: i64,
    created_day: i64,
}

async fn teacher_test(db: &DatabaseConnection, seed: SeedTest) {
    teacher_tests::ActiveModel {
        id: Set(seed.id),
        title: Set(format!("Test {}", seed.id)),
        description: Set(String::new()),
        duration_minutes: Set(30),
        course_id: Set(seed.course_id),
        created_by: Set(seed.created_by),
        is_draft: Set(seed.is_draft),
        scheduled_at: Set(BASE + seed.scheduled_day * DAY),
        created_at: Set(BASE + seed.created_day * DAY),
        updated_at: Set(BASE),
        is_deleted: Set(false),
    }
    .insert(db)
    .await
    .unwrap();
}

/// 教师 9 负责课程 42；学生 11 出席课程 42（两条出席记录）
async fn seed(db: &DatabaseConnection) {
    user(db, 9, "Nine", "teacher", false).await;
    user(db, 7, "Seven", "teacher", false).await;
    user(db, 11, "Sam", "student", false).await;
    user(db, 12, "Gone", "student", true).await;

    subjects::ActiveModel {
        id: Set(3),
        name: Set("Mathematics".to_string()),
        is_deleted: Set(false),
        created_at: Set(BASE),
        updated_at: Set(BASE),
    }
    .insert(db)
    .await
    .unwrap();

    course(db, 42, 9, false).await;
    course(db, 43, 9, true).await;
    attendance(db, 1, 11, 42).await;
    attendance(db, 2, 11, 42).await;
    attendance(db, 3, 11, 43).await;

    teacher_test(db, SeedTest { id: 200, course_id: 42, created_by: 9, is_draft: false, scheduled_day: 10, created_day: 1 }).await;
    teacher_test(db, SeedTest { id: 201, course_id: 42, created_by: 9, is_draft: false, scheduled_day: 3, created_day: 2 }).await;
    teacher_test(db, SeedTest { id: 202, course_id: 42, created_by: 9, is_draft: true, scheduled_day: 1, created_day: 3 }).await;
    teacher_test(db, SeedTest { id: 203, course_id: 43, created_by: 9, is_draft: false, scheduled_day: 2, created_day: 0 }).await;

    student_tests::ActiveModel {
        id: Set(300),
        teacher_test_id: Set(200),
        student_user_id: Set(11),
        score: Set(5.0),
        comment: Set(None),
        submitted_at: Set(Some(BASE)),
        is_deleted: Set(false),
    }
    .insert(db)
    .await
    .unwrap();

    for (id, text) in [(400, "first"), (401, "second")] {
        test_questions::ActiveModel {
            id: Set(id),
            teacher_test_id: Set(200),
            question_text: Set(text.to_string()),
            correct_answer: Set("a".to_string()),
            score: Set(5),
            is_deleted: Set(false),
        }
        .insert(db)
        .await
        .unwrap();
    }
    // 明细 ID 的顺序与题目 ID 相反
    for (id, question, answer) in [(451, 400, "a"), (450, 401, "b"), (452, 401, "c")] {
        student_test_answers::ActiveModel {
            id: Set(id),
            student_test_id: Set(300),
            test_question_id: Set(question),
            student_answer: Set(answer.to_string()),
            is_correct: Set(answer == "a"),
            score: Set(if answer == "a" { 5 } else { 0 }),
            grade_type: Set(None),
            is_deleted: Set(id == 452),
        }
        .insert(db)
        .await
        .unwrap();
    }

    grades::ActiveModel {
        id: Set(500),
        student_test_id: Set(300),
        student_user_id: Set(11),
        course_id: Set(42),
        score: Set(5.0),
        comment: Set(Some("ok".to_string())),
        submitted_at: Set(Some(BASE)),
        is_deleted: Set(false),
    }
    .insert(db)
    .await
    .unwrap();
}

fn fields(title: &str) -> CourseFields {
    CourseFields {
        title: title.to_string(),
        description: "intro".to_string(),
        subject_id: SubjectId(3),
        scheduled_at: chrono::DateTime::from_timestamp(BASE + DAY, 0).unwrap(),
    }
}

#[tokio::test]
async fn test_user_lookups_skip_deleted_users() {
    let (db, storage) = connect().await;
    seed(&db).await;
    let ctx = ctx();
    let session = storage.begin(&ctx).await.unwrap();

    assert_eq!(
        session.user_role(&ctx, UserId(9)).await.unwrap().as_deref(),
        Some("teacher")
    );
    assert!(session.user_exists(&ctx, UserId(11)).await.unwrap());
    assert!(!session.user_exists(&ctx, UserId(12)).await.unwrap());
    assert!(session.user_role(&ctx, UserId(12)).await.unwrap().is_none());
    assert!(!session.user_exists(&ctx, UserId(999)).await.unwrap());
}

#[tokio::test]
async fn test_course_round_trip_and_update() {
    let (db, storage) = connect().await;
    seed(&db).await;
    let ctx = ctx();

    let session = storage.begin(&ctx).await.unwrap();
    let created = session
        .create_course(&ctx, UserId(9), &fields("Algebra I"))
        .await
        .unwrap();
    let read = session.get_course(&ctx, created.id).await.unwrap().unwrap();
    assert_eq!(read, created);
    assert!(created.id.get() > 0);
    assert!(created.updated_at >= created.created_at);

    let affected = session
        .update_course(&ctx, CourseId(42), &fields("Algebra II"))
        .await
        .unwrap();
    assert_eq!(affected, 1);
    let updated = session.get_course(&ctx, CourseId(42)).await.unwrap().unwrap();
    assert_eq!(updated.title, "Algebra II");
    assert_eq!(updated.teacher_user_id, UserId(9));

    // 已删除的课程既读不到也改不了
    assert!(session.get_course(&ctx, CourseId(43)).await.unwrap().is_none());
    let affected = session
        .update_course(&ctx, CourseId(43), &fields("X"))
        .await
        .unwrap();
    assert_eq!(affected, 0);

    assert!(session.subject_exists(&ctx, SubjectId(3)).await.unwrap());
    assert!(!session.subject_exists(&ctx, SubjectId(4)).await.unwrap());
    session.commit().await.unwrap();
}

#[tokio::test]
async fn test_uncommitted_session_rolls_back() {
    let (db, storage) = connect().await;
    seed(&db).await;
    let ctx = ctx();

    let created = {
        let session = storage.begin(&ctx).await.unwrap();
        session
            .create_course(&ctx, UserId(9), &fields("Temporary"))
            .await
            .unwrap()
    };

    let session = storage.begin(&ctx).await.unwrap();
    assert!(session.get_course(&ctx, created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_grade_summary_and_details() {
    let (db, storage) = connect().await;
    seed(&db).await;
    let ctx = ctx();
    let session = storage.begin(&ctx).await.unwrap();

    let grade = session.get_grade(&ctx, GradeId(500)).await.unwrap().unwrap();
    assert_eq!(grade.student_test_id, StudentTestId(300));
    assert_eq!(grade.course_id, CourseId(42));

    let summary = session
        .grade_summary(&ctx, GradeId(500))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(summary.test_title, "Test 200");
    assert_eq!(summary.subject_name, "Mathematics");
    assert_eq!(summary.duration_minutes, 30);
    assert_eq!(summary.comment.as_deref(), Some("ok"));

    let details = session
        .grade_details(&ctx, StudentTestId(300))
        .await
        .unwrap();
    let answers: Vec<&str> = details.iter().map(|d| d.student_answer.as_str()).collect();
    assert_eq!(answers, vec!["b", "a"]);
    assert_eq!(details[0].question_text, "second");

    assert!(session.grade_summary(&ctx, GradeId(501)).await.unwrap().is_none());
    assert!(
        session
            .is_teacher_of_course(&ctx, UserId(9), CourseId(42))
            .await
            .unwrap()
    );
    assert!(
        !session
            .is_teacher_of_course(&ctx, UserId(7), CourseId(42))
            .await
            .unwrap()
    );
}

#[tokio::test]
async fn test_test_listings() {
    let (db, storage) = connect().await;
    seed(&db).await;
    let ctx = ctx();
    let session = storage.begin(&ctx).await.unwrap();

    let teacher: Vec<i64> = session
        .list_tests_for_teacher(&ctx, UserId(9))
        .await
        .unwrap()
        .iter()
        .map(|t| t.teacher_test_id.get())
        .collect();
    // 课程 43 已删除，其测验不出现
    assert_eq!(teacher, vec![202, 201, 200]);

    let student: Vec<i64> = session
        .list_tests_for_student(&ctx, UserId(11))
        .await
        .unwrap()
        .iter()
        .map(|t| t.teacher_test_id.get())
        .collect();
    assert_eq!(student, vec![201, 200]);

    assert!(
        session
            .list_tests_for_teacher(&ctx, UserId(7))
            .await
            .unwrap()
            .is_empty()
    );
}
