//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：处理所有写操作

mod category_commands;
mod collection_commands;
mod course_commands;
mod review_commands;

pub mod handlers;

pub use category_commands::*;
pub use collection_commands::*;
pub use course_commands::*;
pub use review_commands::*;
