//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。
//! 每个存储会话对应一个数据库事务，会话中的查询都在该事务上执行。

mod courses;
mod grades;
mod teacher_tests;
mod users;

use crate::config::AppConfig;
use crate::errors::{PortalError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{
    ConnectOptions, Database, DatabaseConnection, DatabaseTransaction, TransactionTrait,
};
use std::time::Duration;
use tracing::{debug, info};

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

/// SeaORM 存储会话（一个数据库事务）
pub struct SeaOrmSession {
    pub(crate) txn: DatabaseTransaction,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        Self::from_connection(db).await
    }

    /// 使用已有连接创建存储实例并运行迁移
    pub async fn from_connection(db: DatabaseConnection) -> Result<Self> {
        Migrator::up(&db, None)
            .await
            .map_err(|e| PortalError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，后端: {:?}", db.get_database_backend());

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| PortalError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("foreign_keys", "ON")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| PortalError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false);

        Database::connect(opt)
            .await
            .map_err(|e| PortalError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(PortalError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, memory:// 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    CourseId, GradeId, StudentTestId, SubjectId, UserId,
    courses::{entities::Course, requests::CourseFields},
    grades::entities::{Grade, GradeDetail, GradeSummary},
    teacher_tests::entities::TestListItem,
};
use crate::runtime::RequestContext;
use crate::storage::{
    CourseStore, GradeStore, Storage, StorageSession, TestStore, UserStore,
};
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    async fn begin(&self, ctx: &RequestContext) -> Result<Box<dyn StorageSession>> {
        let txn = ctx
            .run("begin", async {
                self.db
                    .begin()
                    .await
                    .map_err(|e| PortalError::database_operation(format!("开启事务失败: {e}")))
            })
            .await?;
        debug!(
            request_id = ctx.request_id(),
            remaining_ms = ctx.remaining().as_millis() as u64,
            "数据库事务已开启"
        );
        Ok(Box::new(SeaOrmSession { txn }))
    }

    fn backend_name(&self) -> &'static str {
        "sea-orm"
    }
}

#[async_trait]
impl StorageSession for SeaOrmSession {
    async fn commit(self: Box<Self>) -> Result<()> {
        self.txn
            .commit()
            .await
            .map_err(|e| PortalError::database_operation(format!("提交事务失败: {e}")))
    }
}

// 用户模块
#[async_trait]
impl UserStore for SeaOrmSession {
    async fn user_role(&self, ctx: &RequestContext, user_id: UserId) -> Result<Option<String>> {
        ctx.run("user_role", self.user_role_impl(user_id)).await
    }

    async fn user_exists(&self, ctx: &RequestContext, user_id: UserId) -> Result<bool> {
        ctx.run("user_exists", self.user_exists_impl(user_id)).await
    }
}

// 课程模块
#[async_trait]
impl CourseStore for SeaOrmSession {
    async fn create_course(
        &self,
        ctx: &RequestContext,
        teacher_id: UserId,
        fields: &CourseFields,
    ) -> Result<Course> {
        ctx.run("create_course", self.create_course_impl(teacher_id, fields))
            .await
    }

    async fn get_course(
        &self,
        ctx: &RequestContext,
        course_id: CourseId,
    ) -> Result<Option<Course>> {
        ctx.run("get_course", self.get_course_impl(course_id)).await
    }

    async fn update_course(
        &self,
        ctx: &RequestContext,
        course_id: CourseId,
        fields: &CourseFields,
    ) -> Result<u64> {
        ctx.run("update_course", self.update_course_impl(course_id, fields))
            .await
    }

    async fn subject_exists(&self, ctx: &RequestContext, subject_id: SubjectId) -> Result<bool> {
        ctx.run("subject_exists", self.subject_exists_impl(subject_id))
            .await
    }
}

// 成绩模块
#[async_trait]
impl GradeStore for SeaOrmSession {
    async fn grade_summary(
        &self,
        ctx: &RequestContext,
        grade_id: GradeId,
    ) -> Result<Option<GradeSummary>> {
        ctx.run("grade_summary", self.grade_summary_impl(grade_id))
            .await
    }

    async fn grade_details(
        &self,
        ctx: &RequestContext,
        student_test_id: StudentTestId,
    ) -> Result<Vec<GradeDetail>> {
        ctx.run("grade_details", self.grade_details_impl(student_test_id))
            .await
    }

    async fn get_grade(&self, ctx: &RequestContext, grade_id: GradeId) -> Result<Option<Grade>> {
        ctx.run("get_grade", self.get_grade_impl(grade_id)).await
    }

    async fn is_teacher_of_course(
        &self,
        ctx: &RequestContext,
        teacher_id: UserId,
        course_id: CourseId,
    ) -> Result<bool> {
        ctx.run(
            "is_teacher_of_course",
            self.is_teacher_of_course_impl(teacher_id, course_id),
        )
        .await
    }
}

// 测验模块
#[async_trait]
impl TestStore for SeaOrmSession {
    async fn list_tests_for_teacher(
        &self,
        ctx: &RequestContext,
        teacher_id: UserId,
    ) -> Result<Vec<TestListItem>> {
        ctx.run(
            "list_tests_for_teacher",
            self.list_tests_for_teacher_impl(teacher_id),
        )
        .await
    }

    async fn list_tests_for_student(
        &self,
        ctx: &RequestContext,
        student_id: UserId,
    ) -> Result<Vec<TestListItem>> {
        ctx.run(
            "list_tests_for_student",
            self.list_tests_for_student_impl(student_id),
        )
        .await
    }
}
