//! 内存表与测试数据录入
//!
//! 行结构与数据库表一一对应，保留软删除标记，查询语义与 SeaORM 后端一致。

use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, SubsecRound, Utc};
use dashmap::DashMap;

use crate::models::{
    CourseId, GradeId, StudentTestId, SubjectId, TeacherTestId, UserId, courses::entities::Course,
};

#[derive(Debug, Clone, Default)]
pub struct UserRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub is_deleted: bool,
}

#[derive(Debug, Clone, Default)]
pub struct SubjectRow {
    pub id: i64,
    pub name: String,
    pub is_deleted: bool,
}

#[derive(Debug, Clone, Default)]
pub struct CourseRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub teacher_user_id: i64,
    pub subject_id: i64,
    pub scheduled_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_deleted: bool,
}

impl CourseRow {
    pub(super) fn to_course(&self) -> Course {
        Course {
            id: CourseId(self.id),
            teacher_user_id: UserId(self.teacher_user_id),
            title: self.title.clone(),
            description: self.description.clone(),
            subject_id: SubjectId(self.subject_id),
            scheduled_at: self.scheduled_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AttendanceRow {
    pub id: i64,
    pub student_user_id: i64,
    pub course_id: i64,
    pub is_deleted: bool,
}

#[derive(Debug, Clone, Default)]
pub struct TeacherTestRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub duration_minutes: i32,
    pub course_id: i64,
    pub created_by: i64,
    pub is_draft: bool,
    pub scheduled_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub is_deleted: bool,
}

#[derive(Debug, Clone, Default)]
pub struct StudentTestRow {
    pub id: i64,
    pub teacher_test_id: i64,
    pub student_user_id: i64,
    pub is_deleted: bool,
}

#[derive(Debug, Clone, Default)]
pub struct TestQuestionRow {
    pub id: i64,
    pub teacher_test_id: i64,
    pub question_text: String,
    pub is_deleted: bool,
}

#[derive(Debug, Clone, Default)]
pub struct AnswerRow {
    pub id: i64,
    pub student_test_id: i64,
    pub test_question_id: i64,
    pub student_answer: String,
    pub is_correct: bool,
    pub score: i32,
    pub is_deleted: bool,
}

#[derive(Debug, Clone, Default)]
pub struct GradeRow {
    pub id: i64,
    pub student_test_id: i64,
    pub student_user_id: i64,
    pub course_id: i64,
    pub score: f64,
    pub comment: Option<String>,
    pub submitted_at: Option<DateTime<Utc>>,
    pub is_deleted: bool,
}

#[derive(Debug, Default)]
pub(super) struct MemoryTables {
    pub users: DashMap<i64, UserRow>,
    pub subjects: DashMap<i64, SubjectRow>,
    pub courses: DashMap<i64, CourseRow>,
    pub attendances: DashMap<i64, AttendanceRow>,
    pub teacher_tests: DashMap<i64, TeacherTestRow>,
    pub student_tests: DashMap<i64, StudentTestRow>,
    pub questions: DashMap<i64, TestQuestionRow>,
    pub answers: DashMap<i64, AnswerRow>,
    pub grades: DashMap<i64, GradeRow>,
    sequence: AtomicI64,
    calls: Mutex<Vec<&'static str>>,
}

impl MemoryTables {
    /// 全局自增 ID，不随回滚复用
    pub fn next_id(&self) -> i64 {
        self.sequence.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// 显式指定的 ID 之后不再被自动分配
    pub fn reserve(&self, id: i64) {
        self.sequence.fetch_max(id, Ordering::SeqCst);
    }

    pub fn record(&self, operation: &'static str) {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(operation);
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn clear_calls(&self) {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }

    pub fn snapshot_courses(&self) -> Vec<CourseRow> {
        self.courses.iter().map(|row| row.value().clone()).collect()
    }

    pub fn restore_courses(&self, rows: Vec<CourseRow>) {
        self.courses.clear();
        for row in rows {
            self.courses.insert(row.id, row);
        }
    }
}

/// 数据录入接口，`id` 为 0 时自动分配
impl super::MemoryStorage {
    fn assign(&self, id: i64) -> i64 {
        if id > 0 {
            self.tables.reserve(id);
            id
        } else {
            self.tables.next_id()
        }
    }

    pub fn insert_user(&self, mut row: UserRow) -> UserId {
        row.id = self.assign(row.id);
        let id = row.id;
        self.tables.users.insert(id, row);
        UserId(id)
    }

    /// 录入用户，角色为原样字符串
    pub fn add_user(&self, name: &str, role: &str) -> UserId {
        self.insert_user(UserRow {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            role: role.to_string(),
            ..Default::default()
        })
    }

    pub fn insert_subject(&self, mut row: SubjectRow) -> SubjectId {
        row.id = self.assign(row.id);
        let id = row.id;
        self.tables.subjects.insert(id, row);
        SubjectId(id)
    }

    pub fn add_subject(&self, name: &str) -> SubjectId {
        self.insert_subject(SubjectRow {
            name: name.to_string(),
            ..Default::default()
        })
    }

    pub fn insert_course(&self, mut row: CourseRow) -> CourseId {
        row.id = self.assign(row.id);
        let id = row.id;
        self.tables.courses.insert(id, row);
        CourseId(id)
    }

    /// 录入课程，时间字段取当前时间
    pub fn add_course(&self, title: &str, teacher: UserId, subject: SubjectId) -> CourseId {
        let now = Utc::now().trunc_subsecs(0);
        self.insert_course(CourseRow {
            title: title.to_string(),
            description: format!("{title} course"),
            teacher_user_id: teacher.get(),
            subject_id: subject.get(),
            scheduled_at: now,
            created_at: now,
            updated_at: now,
            ..Default::default()
        })
    }

    /// 标记课程为已删除
    pub fn soft_delete_course(&self, course_id: CourseId) {
        if let Some(mut row) = self.tables.courses.get_mut(&course_id.get()) {
            row.is_deleted = true;
        }
    }

    pub fn insert_attendance(&self, mut row: AttendanceRow) -> i64 {
        row.id = self.assign(row.id);
        let id = row.id;
        self.tables.attendances.insert(id, row);
        id
    }

    pub fn add_attendance(&self, student: UserId, course: CourseId) -> i64 {
        self.insert_attendance(AttendanceRow {
            student_user_id: student.get(),
            course_id: course.get(),
            ..Default::default()
        })
    }

    pub fn insert_teacher_test(&self, mut row: TeacherTestRow) -> TeacherTestId {
        row.id = self.assign(row.id);
        let id = row.id;
        self.tables.teacher_tests.insert(id, row);
        TeacherTestId(id)
    }

    pub fn insert_student_test(&self, mut row: StudentTestRow) -> StudentTestId {
        row.id = self.assign(row.id);
        let id = row.id;
        self.tables.student_tests.insert(id, row);
        StudentTestId(id)
    }

    pub fn insert_question(&self, mut row: TestQuestionRow) -> i64 {
        row.id = self.assign(row.id);
        let id = row.id;
        self.tables.questions.insert(id, row);
        id
    }

    pub fn insert_answer(&self, mut row: AnswerRow) -> i64 {
        row.id = self.assign(row.id);
        let id = row.id;
        self.tables.answers.insert(id, row);
        id
    }

    pub fn insert_grade(&self, mut row: GradeRow) -> GradeId {
        row.id = self.assign(row.id);
        let id = row.id;
        self.tables.grades.insert(id, row);
        GradeId(id)
    }

    /// 读取课程行（包括已删除的）
    pub fn course_row(&self, course_id: CourseId) -> Option<CourseRow> {
        self.tables
            .courses
            .get(&course_id.get())
            .map(|row| row.value().clone())
    }

    /// 已执行的存储操作名称
    pub fn recorded_calls(&self) -> Vec<&'static str> {
        self.tables.calls()
    }

    pub fn clear_recorded_calls(&self) {
        self.tables.clear_calls();
    }
}
