//! 用户存储操作

use super::SeaOrmSession;
use crate::entity::users::{Column, Entity as Users};
use crate::errors::{PortalError, Result};
use crate::models::UserId;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

impl SeaOrmSession {
    /// 获取用户角色
    pub async fn user_role_impl(&self, user_id: UserId) -> Result<Option<String>> {
        let result = Users::find_by_id(user_id.get())
            .filter(Column::IsDeleted.eq(false))
            .one(&self.txn)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.role))
    }

    /// 检查用户是否存在
    pub async fn user_exists_impl(&self, user_id: UserId) -> Result<bool> {
        let count = Users::find_by_id(user_id.get())
            .filter(Column::IsDeleted.eq(false))
            .count(&self.txn)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(count > 0)
    }
}
