//! Review Context - 课程评价限界上下文
//!
//! 职责:
//! - 评分（1 到 5）与评论校验
//! - 评价的逐字段更新

mod entities;
mod errors;
mod value_objects;

pub use entities::{NewReview, Review, ReviewUpdate};
pub use errors::ReviewError;
pub use value_objects::{Rating, ReviewId};
