//! 调用者身份解析

use tracing::warn;

use crate::errors::{PortalError, Result};
use crate::models::{
    UserId,
    users::entities::{Caller, UserRole},
};
use crate::runtime::RequestContext;
use crate::storage::UserStore;

/// 解析调用者：用户必须存在且未删除，角色必须是已知角色
pub async fn resolve_caller<S>(store: &S, ctx: &RequestContext, user_id: UserId) -> Result<Caller>
where
    S: UserStore + ?Sized,
{
    if !store.user_exists(ctx, user_id).await? {
        return Err(PortalError::unauthenticated(format!(
            "user {user_id} does not exist"
        )));
    }

    let raw_role = store
        .user_role(ctx, user_id)
        .await?
        .ok_or_else(|| PortalError::unauthenticated(format!("user {user_id} does not exist")))?;

    match raw_role.parse::<UserRole>() {
        Ok(role) => Ok(Caller { id: user_id, role }),
        Err(_) => {
            warn!(
                request_id = ctx.request_id(),
                user_id = %user_id,
                role = %raw_role,
                "user has an unrecognised role"
            );
            Err(PortalError::forbidden("user role is not recognised"))
        }
    }
}
