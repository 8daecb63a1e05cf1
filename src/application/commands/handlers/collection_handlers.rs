//! Collection Command Handlers
//!
//! 购物车与收藏夹共用同一套处理器，由命令中的 CollectionKind 区分

use serde::Serialize;
use std::sync::Arc;

use crate::application::commands::{AddItem, RemoveItem};
use crate::application::error::ApplicationError;
use crate::application::ports::{CatalogPort, CollectionRepositoryPort, RepositoryError};
use crate::domain::collection::{
    Collection, CollectionItem, CollectionKind, CourseId, ItemId, OwnerId,
};

/// 集合条目视图
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemView {
    pub id: ItemId,
    pub course_id: CourseId,
    pub added_at: String,
}

impl From<&CollectionItem> for ItemView {
    fn from(item: &CollectionItem) -> Self {
        Self {
            id: item.id(),
            course_id: item.course_id(),
            added_at: item.added_at().to_rfc3339(),
        }
    }
}

/// 获取或创建用户的集合
///
/// 两个并发请求可能同时发现集合不存在并各自插入；后插入的一方会收到
/// 唯一约束冲突，此时重新读取一次即可拿到对方创建的集合。
pub(crate) async fn get_or_create_collection(
    repo: &dyn CollectionRepositoryPort,
    owner_id: OwnerId,
    kind: CollectionKind,
) -> Result<Collection, ApplicationError> {
    if let Some(collection) = repo.find_by_owner(owner_id, kind).await? {
        return Ok(collection);
    }

    match repo.insert_collection(owner_id, kind).await {
        Ok(collection) => {
            tracing::info!(
                collection_id = %collection.id(),
                owner_id = %owner_id,
                kind = %kind,
                "Collection created"
            );
            Ok(collection)
        }
        Err(RepositoryError::Duplicate(_)) => {
            tracing::warn!(
                owner_id = %owner_id,
                kind = %kind,
                "Collection created concurrently, reloading"
            );
            repo.find_by_owner(owner_id, kind).await?.ok_or_else(|| {
                ApplicationError::conflict(format!(
                    "{} for owner {} could not be created",
                    kind, owner_id
                ))
            })
        }
        Err(e) => Err(e.into()),
    }
}

// ============================================================================
// AddItem
// ============================================================================

/// AddItem Handler
///
/// 可能同时产生两个写操作：创建集合、创建条目。
/// 集合的创建总是先于条目提交，不会留下无主条目。
pub struct AddItemHandler {
    collection_repo: Arc<dyn CollectionRepositoryPort>,
    catalog: Arc<dyn CatalogPort>,
}

impl AddItemHandler {
    pub fn new(
        collection_repo: Arc<dyn CollectionRepositoryPort>,
        catalog: Arc<dyn CatalogPort>,
    ) -> Self {
        Self {
            collection_repo,
            catalog,
        }
    }

    pub async fn handle(&self, command: AddItem) -> Result<ItemView, ApplicationError> {
        let AddItem {
            kind,
            owner_id,
            course_id,
        } = command;

        // 先校验课程，失败时不创建集合
        if !self.catalog.exists(course_id).await? {
            return Err(ApplicationError::CatalogEntryNotFound(course_id));
        }

        let collection =
            get_or_create_collection(self.collection_repo.as_ref(), owner_id, kind).await?;
        let items = self.collection_repo.list_items(collection.id()).await?;
        let collection = collection.with_items(items)?;
        collection.ensure_can_add(course_id)?;

        // 并发添加同一课程时，唯一约束是最终裁决
        let item = match self
            .collection_repo
            .insert_item(collection.id(), course_id)
            .await
        {
            Ok(item) => item,
            Err(RepositoryError::Duplicate(_)) => {
                return Err(ApplicationError::DuplicateItem { kind, course_id });
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!(
            collection_id = %collection.id(),
            owner_id = %owner_id,
            kind = %kind,
            course_id = %course_id,
            "Item added"
        );

        Ok(ItemView::from(&item))
    }
}

// ============================================================================
// RemoveItem
// ============================================================================

/// RemoveItem Handler
///
/// 集合变空后不会被删除。
pub struct RemoveItemHandler {
    collection_repo: Arc<dyn CollectionRepositoryPort>,
}

impl RemoveItemHandler {
    pub fn new(collection_repo: Arc<dyn CollectionRepositoryPort>) -> Self {
        Self { collection_repo }
    }

    pub async fn handle(&self, command: RemoveItem) -> Result<(), ApplicationError> {
        let RemoveItem {
            kind,
            owner_id,
            course_id,
        } = command;

        let collection = self
            .collection_repo
            .find_by_owner(owner_id, kind)
            .await?
            .ok_or(ApplicationError::CollectionNotFound { kind, owner_id })?;
        let items = self.collection_repo.list_items(collection.id()).await?;
        let mut collection = collection.with_items(items)?;
        let item = collection.detach(course_id)?;

        // 并发移除时另一方已经删掉了这一行
        if !self
            .collection_repo
            .delete_item(collection.id(), course_id)
            .await?
        {
            return Err(ApplicationError::ItemNotFound { kind, course_id });
        }

        tracing::info!(
            collection_id = %collection.id(),
            owner_id = %owner_id,
            kind = %kind,
            course_id = %course_id,
            item_id = %item.id(),
            remaining = collection.items().len(),
            "Item removed"
        );

        Ok(())
    }
}
