pub mod list;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::{UserId, teacher_tests::responses::TestListResponse};
use crate::runtime::RequestContext;
use crate::storage::Storage;

pub struct TestService {
    storage: Arc<dyn Storage>,
}

impl TestService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    // 按角色列出可见的测验
    pub async fn list_tests(
        &self,
        ctx: &RequestContext,
        user_id: UserId,
    ) -> Result<TestListResponse> {
        list::list_tests(self, ctx, user_id).await
    }
}
