//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行查询，然后转换为 models 中的业务实体。
//! 所有表都使用 `is_deleted` 软删除标记，时间字段以 Unix 秒存储。

pub mod prelude;

pub mod attendances;
pub mod courses;
pub mod grades;
pub mod student_test_answers;
pub mod subjects;
pub mod teacher_tests;
pub mod test_questions;
pub mod users;

use chrono::{DateTime, Utc};

/// Unix 秒转换为 UTC 时间
pub(crate) fn from_unix(ts: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()
}
