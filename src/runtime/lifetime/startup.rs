use crate::errors::Result;
use crate::models::AppStartTime;
use crate::routes;
use crate::services::{CourseService, GradeService, SystemService, TestService};
use crate::storage::Storage;
use actix_web::web;
use std::sync::Arc;
use tracing::warn;

/// 启动后共享给每个 worker 的应用状态
#[derive(Clone)]
pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub courses: web::Data<CourseService>,
    pub grades: web::Data<GradeService>,
    pub tests: web::Data<TestService>,
    pub system: web::Data<SystemService>,
    pub start_time: web::Data<AppStartTime>,
}

impl StartupContext {
    /// 基于存储后端构建全部服务
    pub fn from_storage(storage: Arc<dyn Storage>, start_time: AppStartTime) -> Self {
        Self {
            courses: web::Data::new(CourseService::new(storage.clone())),
            grades: web::Data::new(GradeService::new(storage.clone())),
            tests: web::Data::new(TestService::new(storage.clone())),
            system: web::Data::new(SystemService::new(storage.clone())),
            start_time: web::Data::new(start_time),
            storage,
        }
    }

    /// 注册服务实例和 API 路由
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.courses.clone())
            .app_data(self.grades.clone())
            .app_data(self.tests.clone())
            .app_data(self.system.clone())
            .app_data(self.start_time.clone())
            .configure(routes::configure_api_routes);
    }
}

/// 准备服务器启动的上下文
/// 包括存储后端（含迁移）和业务服务
pub async fn prepare_server_startup(start_time: AppStartTime) -> Result<StartupContext> {
    let storage = crate::storage::create_storage().await?;
    warn!(
        "Storage backend '{}' initialized",
        storage.backend_name()
    );

    Ok(StartupContext::from_storage(storage, start_time))
}
