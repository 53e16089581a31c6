use std::sync::Arc;

use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::{
    CourseId, GradeId, StudentTestId, SubjectId, UserId,
    courses::{entities::Course, requests::CourseFields},
    grades::entities::{Grade, GradeDetail, GradeSummary},
    teacher_tests::entities::TestListItem,
};
use crate::runtime::RequestContext;

pub mod memory_storage;
pub mod sea_orm_storage;

/// 用户查询
#[async_trait::async_trait]
pub trait UserStore: Send + Sync {
    // 获取未删除用户的角色字符串（原样返回，由服务层解析）
    async fn user_role(&self, ctx: &RequestContext, user_id: UserId) -> Result<Option<String>>;
    // 用户是否存在且未删除
    async fn user_exists(&self, ctx: &RequestContext, user_id: UserId) -> Result<bool>;
}

/// 课程管理
#[async_trait::async_trait]
pub trait CourseStore: Send + Sync {
    // 创建课程，返回持久化后的课程
    async fn create_course(
        &self,
        ctx: &RequestContext,
        teacher_id: UserId,
        fields: &CourseFields,
    ) -> Result<Course>;
    // 通过ID获取未删除的课程
    async fn get_course(&self, ctx: &RequestContext, course_id: CourseId)
    -> Result<Option<Course>>;
    // 更新课程，返回受影响的行数
    async fn update_course(
        &self,
        ctx: &RequestContext,
        course_id: CourseId,
        fields: &CourseFields,
    ) -> Result<u64>;
    // 教科是否存在且未删除
    async fn subject_exists(&self, ctx: &RequestContext, subject_id: SubjectId) -> Result<bool>;
}

/// 成绩查询
#[async_trait::async_trait]
pub trait GradeStore: Send + Sync {
    // 成绩概要（成绩 → 答卷 → 测验 → 课程 → 教科）
    async fn grade_summary(
        &self,
        ctx: &RequestContext,
        grade_id: GradeId,
    ) -> Result<Option<GradeSummary>>;
    // 答卷的逐题明细，按明细ID升序
    async fn grade_details(
        &self,
        ctx: &RequestContext,
        student_test_id: StudentTestId,
    ) -> Result<Vec<GradeDetail>>;
    // 通过ID获取未删除的成绩
    async fn get_grade(&self, ctx: &RequestContext, grade_id: GradeId) -> Result<Option<Grade>>;
    // 教师是否负责该课程
    async fn is_teacher_of_course(
        &self,
        ctx: &RequestContext,
        teacher_id: UserId,
        course_id: CourseId,
    ) -> Result<bool>;
}

/// 测验列表
#[async_trait::async_trait]
pub trait TestStore: Send + Sync {
    // 教师创建的测验，按创建时间倒序
    async fn list_tests_for_teacher(
        &self,
        ctx: &RequestContext,
        teacher_id: UserId,
    ) -> Result<Vec<TestListItem>>;
    // 学生出席课程中已发布的测验，按安排时间升序
    async fn list_tests_for_student(
        &self,
        ctx: &RequestContext,
        student_id: UserId,
    ) -> Result<Vec<TestListItem>>;
}

/// 存储会话：一个业务流程内的所有读写
///
/// SeaORM 后端对应一个数据库事务。未调用 `commit` 就被丢弃的会话会回滚。
#[async_trait::async_trait]
pub trait StorageSession: UserStore + CourseStore + GradeStore + TestStore {
    async fn commit(self: Box<Self>) -> Result<()>;
}

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    // 开启一个存储会话
    async fn begin(&self, ctx: &RequestContext) -> Result<Box<dyn StorageSession>>;
    // 后端名称，用于日志
    fn backend_name(&self) -> &'static str;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let config = AppConfig::get();
    if memory_storage::MemoryStorage::accepts(&config.database.url) {
        return Ok(Arc::new(memory_storage::MemoryStorage::with_demo_data()));
    }
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
