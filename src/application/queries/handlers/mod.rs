//! Query Handlers 实现

mod category_handlers;
mod collection_handlers;
mod course_handlers;
mod review_handlers;

pub use category_handlers::*;
pub use collection_handlers::*;
pub use course_handlers::*;
pub use review_handlers::*;
