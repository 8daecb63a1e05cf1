//! Collection Context - Aggregate Root

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{CollectionError, CollectionId, CollectionKind, CourseId, ItemId, Money, OwnerId};

/// 集合条目 - 对一门课程的引用
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionItem {
    id: ItemId,
    course_id: CourseId,
    added_at: DateTime<Utc>,
}

impl CollectionItem {
    pub fn new(id: ItemId, course_id: CourseId, added_at: DateTime<Utc>) -> Self {
        Self {
            id,
            course_id,
            added_at,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn course_id(&self) -> CourseId {
        self.course_id
    }

    pub fn added_at(&self) -> DateTime<Utc> {
        self.added_at
    }
}

/// Collection 聚合根（购物车 / 收藏夹）
///
/// 不变量:
/// - 每个 (owner, kind) 至多一个 Collection（由存储层唯一约束保证）
/// - 同一 Collection 内每门课程至多出现一次
/// - 条目没有数量语义，只有存在 / 不存在
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    id: CollectionId,
    owner_id: OwnerId,
    kind: CollectionKind,
    items: Vec<CollectionItem>,
    created_at: DateTime<Utc>,
}

impl Collection {
    /// 创建空集合
    pub fn new(
        id: CollectionId,
        owner_id: OwnerId,
        kind: CollectionKind,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            owner_id,
            kind,
            items: Vec::new(),
            created_at,
        }
    }

    /// 装载已持久化的条目，重复课程视为数据损坏
    pub fn with_items(mut self, items: Vec<CollectionItem>) -> Result<Self, CollectionError> {
        for item in items {
            self.attach(item)?;
        }
        Ok(self)
    }

    /// 校验课程可以加入集合
    pub fn ensure_can_add(&self, course_id: CourseId) -> Result<(), CollectionError> {
        if self.contains(course_id) {
            return Err(CollectionError::DuplicateItem {
                kind: self.kind,
                course_id,
            });
        }
        Ok(())
    }

    /// 加入条目
    pub fn attach(&mut self, item: CollectionItem) -> Result<(), CollectionError> {
        self.ensure_can_add(item.course_id)?;
        self.items.push(item);
        Ok(())
    }

    /// 移除条目
    pub fn detach(&mut self, course_id: CourseId) -> Result<CollectionItem, CollectionError> {
        let position = self
            .items
            .iter()
            .position(|item| item.course_id == course_id)
            .ok_or(CollectionError::ItemNotFound {
                kind: self.kind,
                course_id,
            })?;
        Ok(self.items.remove(position))
    }

    pub fn contains(&self, course_id: CourseId) -> bool {
        self.items.iter().any(|item| item.course_id == course_id)
    }

    /// 条目引用的所有课程
    pub fn course_ids(&self) -> Vec<CourseId> {
        self.items.iter().map(|item| item.course_id).collect()
    }

    /// 计算总价
    ///
    /// 价格表中缺失的课程（已被目录删除）按 0 计入。
    /// 不需要总价的集合类型返回 None。
    pub fn total(
        &self,
        prices: &HashMap<CourseId, Money>,
    ) -> Result<Option<Money>, CollectionError> {
        if !self.kind.has_total() {
            return Ok(None);
        }

        let mut total = Money::ZERO;
        for price in self
            .items
            .iter()
            .filter_map(|item| prices.get(&item.course_id))
        {
            total = total
                .checked_add(*price)
                .ok_or(CollectionError::TotalOverflow { kind: self.kind })?;
        }
        Ok(Some(total))
    }

    /// 价格表中找不到的课程
    pub fn unpriced(&self, prices: &HashMap<CourseId, Money>) -> Vec<CourseId> {
        self.items
            .iter()
            .map(|item| item.course_id)
            .filter(|course_id| !prices.contains_key(course_id))
            .collect()
    }

    // Getters
    pub fn id(&self) -> CollectionId {
        self.id
    }

    pub fn owner_id(&self) -> OwnerId {
        self.owner_id
    }

    pub fn kind(&self) -> CollectionKind {
        self.kind
    }

    pub fn items(&self) -> &[CollectionItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
