pub mod courses;

pub mod grades;

pub mod system;

pub mod teacher_tests;

pub use courses::configure_courses_routes;
pub use grades::configure_grades_routes;
pub use system::configure_system_routes;
pub use teacher_tests::configure_tests_routes;

use actix_web::web;

/// 注册全部 API 路由
pub fn configure_api_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_courses_routes)
        .configure(configure_grades_routes)
        .configure(configure_tests_routes)
        .configure(configure_system_routes);
}
