//! 测验列表存储操作

use super::SeaOrmSession;
use crate::entity::{
    attendances, courses, from_unix, subjects,
    teacher_tests::{self, Column, Entity as TeacherTests},
    users,
};
use crate::errors::{PortalError, Result};
use crate::models::{TeacherTestId, UserId, teacher_tests::entities::TestListItem};
use sea_orm::{
    ColumnTrait, EntityTrait, FromQueryResult, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, Select,
};

#[derive(Debug, FromQueryResult)]
struct TestListRow {
    teacher_test_id: i64,
    title: String,
    description: String,
    duration_minutes: i32,
    course_title: String,
    subject_name: String,
    teacher_name: String,
    scheduled_at: i64,
    is_draft: bool,
    created_at: i64,
}

impl From<TestListRow> for TestListItem {
    fn from(row: TestListRow) -> Self {
        TestListItem {
            teacher_test_id: TeacherTestId(row.teacher_test_id),
            title: row.title,
            description: row.description,
            duration_minutes: row.duration_minutes,
            course_title: row.course_title,
            subject_name: row.subject_name,
            teacher_name: row.teacher_name,
            scheduled_at: from_unix(row.scheduled_at),
            is_draft: row.is_draft,
            created_at: from_unix(row.created_at),
        }
    }
}

/// 测验 → 课程 → 教科 / 授课教师 的公共查询
fn test_list_select() -> Select<TeacherTests> {
    TeacherTests::find()
        .select_only()
        .column_as(Column::Id, "teacher_test_id")
        .column_as(Column::Title, "title")
        .column_as(Column::Description, "description")
        .column_as(Column::DurationMinutes, "duration_minutes")
        .column_as(courses::Column::Title, "course_title")
        .column_as(subjects::Column::Name, "subject_name")
        .column_as(users::Column::Name, "teacher_name")
        .column_as(Column::ScheduledAt, "scheduled_at")
        .column_as(Column::IsDraft, "is_draft")
        .column_as(Column::CreatedAt, "created_at")
        .join(JoinType::InnerJoin, teacher_tests::Relation::Course.def())
        .join(JoinType::InnerJoin, courses::Relation::Subject.def())
        .join(JoinType::InnerJoin, courses::Relation::Teacher.def())
        .filter(Column::IsDeleted.eq(false))
        .filter(courses::Column::IsDeleted.eq(false))
        .filter(subjects::Column::IsDeleted.eq(false))
        .filter(users::Column::IsDeleted.eq(false))
}

impl SeaOrmSession {
    /// 教师创建的测验（含草稿），最新创建的在前
    pub async fn list_tests_for_teacher_impl(
        &self,
        teacher_id: UserId,
    ) -> Result<Vec<TestListItem>> {
        let rows = test_list_select()
            .filter(Column::CreatedBy.eq(teacher_id.get()))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .into_model::<TestListRow>()
            .all(&self.txn)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询测验列表失败: {e}")))?;

        Ok(rows.into_iter().map(TestListItem::from).collect())
    }

    /// 学生出席课程中已发布的测验，最早安排的在前
    pub async fn list_tests_for_student_impl(
        &self,
        student_id: UserId,
    ) -> Result<Vec<TestListItem>> {
        let rows = test_list_select()
            .join(JoinType::InnerJoin, courses::Relation::Attendances.def())
            .filter(attendances::Column::StudentUserId.eq(student_id.get()))
            .filter(attendances::Column::IsDeleted.eq(false))
            .filter(Column::IsDraft.eq(false))
            .distinct()
            .order_by_asc(Column::ScheduledAt)
            .order_by_asc(Column::Id)
            .into_model::<TestListRow>()
            .all(&self.txn)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询测验列表失败: {e}")))?;

        Ok(rows.into_iter().map(TestListItem::from).collect())
    }
}
