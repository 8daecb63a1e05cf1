//! Collection Commands

use crate::domain::collection::{CollectionKind, CourseId, OwnerId};

/// 向集合加入课程命令（集合不存在时会先创建）
#[derive(Debug, Clone)]
pub struct AddItem {
    pub kind: CollectionKind,
    pub owner_id: OwnerId,
    pub course_id: CourseId,
}

/// 从集合移除课程命令
#[derive(Debug, Clone)]
pub struct RemoveItem {
    pub kind: CollectionKind,
    pub owner_id: OwnerId,
    pub course_id: CourseId,
}
