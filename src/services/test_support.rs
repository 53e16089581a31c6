//! 业务流程测试共用的数据集

use std::sync::Arc;
use std::time::Duration;

use chrono::{TimeZone, Utc};

use crate::models::{CourseId, GradeId, TeacherTestId, UserId};
use crate::runtime::RequestContext;
use crate::storage::memory_storage::{
    AnswerRow, AttendanceRow, CourseRow, GradeRow, MemoryStorage, StudentTestRow, SubjectRow,
    TeacherTestRow, TestQuestionRow, UserRow,
};

pub fn ctx() -> RequestContext {
    RequestContext::with_timeout(Duration::from_secs(5))
}

/// 课程 42 属于教师 9，学生 `student` 出席并有一份成绩
pub struct School {
    pub storage: Arc<MemoryStorage>,
    pub owner: UserId,
    pub other_teacher: UserId,
    pub student: UserId,
    pub other_student: UserId,
    pub parent: UserId,
    pub admin: UserId,
    pub course: CourseId,
    pub test: TeacherTestId,
    pub grade: GradeId,
}

fn user(storage: &MemoryStorage, id: i64, name: &str, role: &str) -> UserId {
    storage.insert_user(UserRow {
        id,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        role: role.to_string(),
        is_deleted: false,
    })
}

impl School {
    pub fn new() -> Self {
        let storage = Arc::new(MemoryStorage::new());
        let at = |day: u32| Utc.with_ymd_and_hms(2025, 4, day, 9, 0, 0).unwrap();

        let owner = user(&storage, 9, "Nine", "teacher");
        let other_teacher = user(&storage, 7, "Seven", "teacher");
        let student = user(&storage, 11, "Sam", "student");
        let other_student = user(&storage, 12, "Kim", "student");
        let parent = user(&storage, 13, "Pat", "parent");
        let admin = user(&storage, 14, "Ada", "admin");

        let subject = storage.insert_subject(SubjectRow {
            id: 3,
            name: "Mathematics".to_string(),
            is_deleted: false,
        });
        let course = storage.insert_course(CourseRow {
            id: 42,
            title: "Algebra I".to_string(),
            description: "intro".to_string(),
            teacher_user_id: owner.get(),
            subject_id: subject.get(),
            scheduled_at: at(1),
            created_at: at(1),
            updated_at: at(1),
            is_deleted: false,
        });
        storage.insert_attendance(AttendanceRow {
            student_user_id: student.get(),
            course_id: course.get(),
            ..Default::default()
        });

        let test = storage.insert_teacher_test(TeacherTestRow {
            title: "Midterm".to_string(),
            description: "chapters 1-3".to_string(),
            duration_minutes: 45,
            course_id: course.get(),
            created_by: owner.get(),
            is_draft: false,
            scheduled_at: at(10),
            created_at: at(2),
            ..Default::default()
        });
        let student_test = storage.insert_student_test(StudentTestRow {
            teacher_test_id: test.get(),
            student_user_id: student.get(),
            ..Default::default()
        });
        for (text, answer, correct, score) in [("1+1", "2", true, 5), ("2*3", "5", false, 0)] {
            let question = storage.insert_question(TestQuestionRow {
                teacher_test_id: test.get(),
                question_text: text.to_string(),
                ..Default::default()
            });
            storage.insert_answer(AnswerRow {
                student_test_id: student_test.get(),
                test_question_id: question,
                student_answer: answer.to_string(),
                is_correct: correct,
                score,
                ..Default::default()
            });
        }
        let grade = storage.insert_grade(GradeRow {
            student_test_id: student_test.get(),
            student_user_id: student.get(),
            course_id: course.get(),
            score: 5.0,
            comment: Some("keep practicing".to_string()),
            ..Default::default()
        });

        Self {
            storage,
            owner,
            other_teacher,
            student,
            other_student,
            parent,
            admin,
            course,
            test,
            grade,
        }
    }
}
