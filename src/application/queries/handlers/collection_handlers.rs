//! Collection Query Handlers

use serde::Serialize;
use std::sync::Arc;

use crate::application::commands::handlers::ItemView;
use crate::application::error::ApplicationError;
use crate::application::ports::{CatalogPort, CollectionRepositoryPort};
use crate::application::queries::GetCollection;
use crate::domain::collection::{CollectionId, CollectionKind, Money, OwnerId};

// ============================================================================
// Response DTOs
// ============================================================================

/// 集合视图
#[derive(Debug, Clone, Serialize)]
pub struct CollectionView {
    pub id: CollectionId,
    pub owner_id: OwnerId,
    pub kind: CollectionKind,
    pub items: Vec<ItemView>,
    /// 仅购物车有总价，读取时按课程当前价格计算
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_price: Option<Money>,
}

// ============================================================================
// Handlers
// ============================================================================

/// GetCollection Handler
pub struct GetCollectionHandler {
    collection_repo: Arc<dyn CollectionRepositoryPort>,
    catalog: Arc<dyn CatalogPort>,
}

impl GetCollectionHandler {
    pub fn new(
        collection_repo: Arc<dyn CollectionRepositoryPort>,
        catalog: Arc<dyn CatalogPort>,
    ) -> Self {
        Self {
            collection_repo,
            catalog,
        }
    }

    pub async fn handle(&self, query: GetCollection) -> Result<CollectionView, ApplicationError> {
        let GetCollection { kind, owner_id } = query;

        let collection = self
            .collection_repo
            .find_by_owner(owner_id, kind)
            .await?
            .ok_or(ApplicationError::CollectionNotFound { kind, owner_id })?;
        let items = self.collection_repo.list_items(collection.id()).await?;
        let collection = collection.with_items(items)?;

        let total_price = if !kind.has_total() {
            None
        } else if collection.is_empty() {
            Some(Money::ZERO)
        } else {
            let prices = self.catalog.prices_of(&collection.course_ids()).await?;
            for course_id in collection.unpriced(&prices) {
                tracing::warn!(
                    collection_id = %collection.id(),
                    course_id = %course_id,
                    "Course no longer in catalog, counted as zero"
                );
            }
            collection.total(&prices)?
        };

        Ok(CollectionView {
            id: collection.id(),
            owner_id: collection.owner_id(),
            kind: collection.kind(),
            items: collection.items().iter().map(ItemView::from).collect(),
            total_price,
        })
    }
}
