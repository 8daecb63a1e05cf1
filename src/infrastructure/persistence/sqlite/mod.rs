//! SQLite Persistence - SQLite 数据库持久化实现

mod category_repo;
mod collection_repo;
mod course_repo;
mod database;
mod review_repo;

pub use category_repo::*;
pub use collection_repo::*;
pub use course_repo::*;
pub use database::*;
pub use review_repo::*;
