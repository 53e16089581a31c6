use serde::{Deserialize, Serialize};

use crate::models::{CourseId, GradeId, StudentTestId, TeacherTestId, UserId};

// 成绩
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    pub id: GradeId,
    pub student_test_id: StudentTestId,
    pub student_user_id: UserId,
    pub course_id: CourseId,
    pub score: f64,
    pub comment: Option<String>,
    pub submitted_at: Option<chrono::DateTime<chrono::Utc>>,
}

// 成绩概要（成绩 → 答卷 → 测验 → 课程 → 教科）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeSummary {
    pub grade_id: GradeId,
    pub student_user_id: UserId,
    pub teacher_test_id: TeacherTestId,
    pub score: f64,
    pub comment: Option<String>,
    pub test_title: String,
    pub subject_name: String,
    pub scheduled_at: chrono::DateTime<chrono::Utc>,
    pub duration_minutes: i32,
}

// 成绩明细（逐题）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeDetail {
    pub test_question_id: i64,
    pub question_text: String,
    pub student_answer: String,
    pub is_correct: bool,
    pub score: i32,
}
