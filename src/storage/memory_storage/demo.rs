//! 演示数据
//!
//! 内存后端启动时为空库录入一所最小的学校，便于直接调用接口。

use chrono::{Duration, SubsecRound, Utc};
use tracing::warn;

use super::{
    AnswerRow, AttendanceRow, CourseRow, GradeRow, MemoryStorage, StudentTestRow, SubjectRow,
    TeacherTestRow, TestQuestionRow, UserRow,
};

impl MemoryStorage {
    pub fn with_demo_data() -> Self {
        let storage = Self::new();
        storage.seed_demo_data();
        storage
    }

    fn seed_demo_data(&self) {
        let now = Utc::now().trunc_subsecs(0);

        let user = |id: i64, name: &str, role: &str| {
            self.insert_user(UserRow {
                id,
                name: name.to_string(),
                email: format!("{}@demo.local", name.to_lowercase()),
                role: role.to_string(),
                is_deleted: false,
            })
        };
        let teacher = user(1, "Teacher", "teacher");
        let student = user(2, "Student", "student");
        user(3, "Parent", "parent");
        user(4, "Admin", "admin");

        let subject = self.insert_subject(SubjectRow {
            id: 1,
            name: "Mathematics".to_string(),
            is_deleted: false,
        });
        let course = self.insert_course(CourseRow {
            id: 1,
            title: "Algebra I".to_string(),
            description: "Linear equations and inequalities".to_string(),
            teacher_user_id: teacher.get(),
            subject_id: subject.get(),
            scheduled_at: now + Duration::days(1),
            created_at: now,
            updated_at: now,
            is_deleted: false,
        });
        self.insert_attendance(AttendanceRow {
            student_user_id: student.get(),
            course_id: course.get(),
            ..Default::default()
        });

        let test = self.insert_teacher_test(TeacherTestRow {
            title: "Unit 1 Quiz".to_string(),
            description: "Solving for x".to_string(),
            duration_minutes: 20,
            course_id: course.get(),
            created_by: teacher.get(),
            is_draft: false,
            scheduled_at: now + Duration::days(2),
            created_at: now,
            is_deleted: false,
            ..Default::default()
        });
        let attempt = self.insert_student_test(StudentTestRow {
            teacher_test_id: test.get(),
            student_user_id: student.get(),
            ..Default::default()
        });
        let question = self.insert_question(TestQuestionRow {
            teacher_test_id: test.get(),
            question_text: "2x + 3 = 7".to_string(),
            ..Default::default()
        });
        self.insert_answer(AnswerRow {
            student_test_id: attempt.get(),
            test_question_id: question,
            student_answer: "x = 2".to_string(),
            is_correct: true,
            score: 10,
            ..Default::default()
        });
        self.insert_grade(GradeRow {
            student_test_id: attempt.get(),
            student_user_id: student.get(),
            course_id: course.get(),
            score: 10.0,
            comment: Some("Well done".to_string()),
            submitted_at: Some(now),
            is_deleted: false,
            ..Default::default()
        });

        warn!("In-memory storage seeded with demo users 1-4 (teacher, student, parent, admin)");
    }
}
