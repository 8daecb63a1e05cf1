//! Collection Context - 用户集合限界上下文
//!
//! 职责:
//! - 购物车与收藏夹共用一个聚合（CollectionKind 区分）
//! - 条目去重
//! - 购物车总价计算（读取时实时计算）

mod aggregate;
mod errors;
mod value_objects;

pub use aggregate::{Collection, CollectionItem};
pub use errors::CollectionError;
pub use value_objects::{CollectionId, CollectionKind, CourseId, ItemId, Money, OwnerId};
