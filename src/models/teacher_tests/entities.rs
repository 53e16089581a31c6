use serde::{Deserialize, Serialize};

use crate::models::TeacherTestId;

// 测验列表项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestListItem {
    pub teacher_test_id: TeacherTestId,
    pub title: String,
    pub description: String,
    pub duration_minutes: i32,
    pub course_title: String,
    pub subject_name: String,
    pub teacher_name: String,
    pub scheduled_at: chrono::DateTime<chrono::Utc>,
    pub is_draft: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
