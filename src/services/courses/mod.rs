pub mod create;
pub mod update;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::{
    CourseId, Payload, UserId,
    courses::{
        entities::Course,
        requests::{CreateCourseRequest, UpdateCourseRequest},
    },
};
use crate::runtime::RequestContext;
use crate::storage::Storage;

pub struct CourseService {
    storage: Arc<dyn Storage>,
}

impl CourseService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    // 创建课程
    pub async fn create_course(
        &self,
        ctx: &RequestContext,
        user_id: UserId,
        request: impl Into<Payload<CreateCourseRequest>>,
    ) -> Result<Course> {
        create::create_course(self, ctx, user_id, request.into()).await
    }

    // 更新课程
    pub async fn update_course(
        &self,
        ctx: &RequestContext,
        user_id: UserId,
        course_id: CourseId,
        request: impl Into<Payload<UpdateCourseRequest>>,
    ) -> Result<Course> {
        update::update_course(self, ctx, user_id, course_id, request.into()).await
    }
}
