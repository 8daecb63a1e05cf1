//! Collection Queries

use crate::domain::collection::{CollectionKind, OwnerId};

/// 获取用户集合查询（不会自动创建）
#[derive(Debug, Clone)]
pub struct GetCollection {
    pub kind: CollectionKind,
    pub owner_id: OwnerId,
}
