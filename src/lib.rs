//! EduPortal - 教育平台课程、测验与成绩后端
//!
//! 基于 Actix Web 和 SeaORM 构建。
//!
//! # 架构
//! - `config`: 配置管理
//! - `entity`: SeaORM 数据库实体
//! - `errors`: 统一错误处理
//! - `middlewares`: 请求上下文中间件
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 请求上下文与运行时生命周期管理
//! - `services`: 业务逻辑层（访问矩阵、课程、成绩、测验）
//! - `storage`: 数据存储层（SeaORM / 内存）
//! - `utils`: 请求提取器与参数错误处理

pub mod config;
pub mod entity;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
