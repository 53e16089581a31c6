pub mod detail;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::{GradeId, UserId, grades::responses::GradeDetailResponse};
use crate::runtime::RequestContext;
use crate::storage::Storage;

pub struct GradeService {
    storage: Arc<dyn Storage>,
}

impl GradeService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    // 获取成绩概要和逐题明细
    pub async fn grade_detail(
        &self,
        ctx: &RequestContext,
        user_id: UserId,
        grade_id: GradeId,
    ) -> Result<GradeDetailResponse> {
        detail::grade_detail(self, ctx, user_id, grade_id).await
    }
}
