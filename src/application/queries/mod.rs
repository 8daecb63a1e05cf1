//! 应用层 - 查询（读操作）
//!
//! CQRS 查询侧：处理所有读操作

mod category_queries;
mod collection_queries;
mod course_queries;
mod review_queries;

pub mod handlers;

pub use category_queries::*;
pub use collection_queries::*;
pub use course_queries::*;
pub use review_queries::*;
