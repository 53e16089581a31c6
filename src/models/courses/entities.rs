use serde::{Deserialize, Serialize};

use crate::models::{CourseId, SubjectId, UserId};

// 课程
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    // 课程ID
    #[serde(rename = "course_id")]
    pub id: CourseId,
    // 负责教师ID
    pub teacher_user_id: UserId,
    // 标题
    pub title: String,
    // 描述
    pub description: String,
    // 教科ID
    pub subject_id: SubjectId,
    // 上课时间
    pub scheduled_at: chrono::DateTime<chrono::Utc>,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
