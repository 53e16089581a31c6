//! 课程存储操作

use super::SeaOrmSession;
use crate::entity::courses::{ActiveModel, Column, Entity as Courses};
use crate::entity::subjects::{Column as SubjectColumn, Entity as Subjects};
use crate::errors::{PortalError, Result};
use crate::models::{
    CourseId, SubjectId, UserId,
    courses::{entities::Course, requests::CourseFields},
};
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};

impl SeaOrmSession {
    /// 创建课程
    pub async fn create_course_impl(
        &self,
        teacher_id: UserId,
        fields: &CourseFields,
    ) -> Result<Course> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            title: Set(fields.title.clone()),
            description: Set(fields.description.clone()),
            teacher_user_id: Set(teacher_id.get()),
            subject_id: Set(fields.subject_id.get()),
            scheduled_at: Set(fields.scheduled_at.timestamp()),
            created_at: Set(now),
            updated_at: Set(now),
            is_deleted: Set(false),
            ..Default::default()
        };

        let result = model
            .insert(&self.txn)
            .await
            .map_err(|e| PortalError::database_operation(format!("创建课程失败: {e}")))?;

        Ok(result.into_course())
    }

    /// 通过 ID 获取课程
    pub async fn get_course_impl(&self, course_id: CourseId) -> Result<Option<Course>> {
        let result = Courses::find_by_id(course_id.get())
            .filter(Column::IsDeleted.eq(false))
            .one(&self.txn)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 更新课程，只改写未删除的行
    pub async fn update_course_impl(
        &self,
        course_id: CourseId,
        fields: &CourseFields,
    ) -> Result<u64> {
        let now = chrono::Utc::now().timestamp();

        let result = Courses::update_many()
            .col_expr(Column::Title, Expr::value(fields.title.clone()))
            .col_expr(Column::Description, Expr::value(fields.description.clone()))
            .col_expr(Column::SubjectId, Expr::value(fields.subject_id.get()))
            .col_expr(Column::ScheduledAt, Expr::value(fields.scheduled_at.timestamp()))
            .col_expr(Column::UpdatedAt, Expr::value(now))
            .filter(Column::Id.eq(course_id.get()))
            .filter(Column::IsDeleted.eq(false))
            .exec(&self.txn)
            .await
            .map_err(|e| PortalError::database_operation(format!("更新课程失败: {e}")))?;

        Ok(result.rows_affected)
    }

    /// 检查教科是否存在
    pub async fn subject_exists_impl(&self, subject_id: SubjectId) -> Result<bool> {
        let count = Subjects::find_by_id(subject_id.get())
            .filter(SubjectColumn::IsDeleted.eq(false))
            .count(&self.txn)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询教科失败: {e}")))?;

        Ok(count > 0)
    }
}
