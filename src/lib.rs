//! Course Market - 在线课程市场后端
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Collection Context: 购物车 / 收藏夹（同一聚合，按类型区分）
//! - Catalog Context: 课程目录
//!
//! 应用层 (application/):
//! - Ports: CollectionRepository, CourseRepository, Catalog
//! - Commands: CQRS 命令处理器
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API
//! - Persistence: SQLite 存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
