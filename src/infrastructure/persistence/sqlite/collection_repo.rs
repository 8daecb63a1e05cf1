//! SQLite Collection Repository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::FromRow;

use super::{map_read_error, map_write_error, parse_timestamp, DbPool};
use crate::application::ports::{CollectionRepositoryPort, RepositoryError};
use crate::domain::collection::{
    Collection, CollectionId, CollectionItem, CollectionKind, CourseId, ItemId, OwnerId,
};

/// SQLite Collection Repository
///
/// 购物车与收藏夹共用 collections / collection_items 两张表，以 kind 列区分。
pub struct SqliteCollectionRepository {
    pool: DbPool,
}

impl SqliteCollectionRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct CollectionRow {
    id: i64,
    owner_id: i64,
    kind: String,
    created_at: String,
}

impl TryFrom<CollectionRow> for Collection {
    type Error = RepositoryError;

    fn try_from(row: CollectionRow) -> Result<Self, Self::Error> {
        let kind = CollectionKind::from_str(&row.kind).ok_or_else(|| {
            RepositoryError::SerializationError(format!("Unknown collection kind: {}", row.kind))
        })?;

        Ok(Collection::new(
            CollectionId::new(row.id),
            OwnerId::new(row.owner_id),
            kind,
            parse_timestamp(&row.created_at)?,
        ))
    }
}

#[derive(FromRow)]
struct ItemRow {
    id: i64,
    course_id: i64,
    added_at: String,
}

impl TryFrom<ItemRow> for CollectionItem {
    type Error = RepositoryError;

    fn try_from(row: ItemRow) -> Result<Self, Self::Error> {
        Ok(CollectionItem::new(
            ItemId::new(row.id),
            CourseId::new(row.course_id),
            parse_timestamp(&row.added_at)?,
        ))
    }
}

#[async_trait]
impl CollectionRepositoryPort for SqliteCollectionRepository {
    async fn find_by_owner(
        &self,
        owner_id: OwnerId,
        kind: CollectionKind,
    ) -> Result<Option<Collection>, RepositoryError> {
        let row: Option<CollectionRow> = sqlx::query_as(
            "SELECT id, owner_id, kind, created_at FROM collections WHERE owner_id = ? AND kind = ?",
        )
        .bind(owner_id.as_i64())
        .bind(kind.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_read_error)?;

        row.map(Collection::try_from).transpose()
    }

    async fn insert_collection(
        &self,
        owner_id: OwnerId,
        kind: CollectionKind,
    ) -> Result<Collection, RepositoryError> {
        let now = Utc::now();

        let result = sqlx::query(
            "INSERT INTO collections (owner_id, kind, created_at) VALUES (?, ?, ?)",
        )
        .bind(owner_id.as_i64())
        .bind(kind.as_str())
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, || format!("{} for owner {}", kind, owner_id)))?;

        Ok(Collection::new(
            CollectionId::new(result.last_insert_rowid()),
            owner_id,
            kind,
            now,
        ))
    }

    async fn insert_item(
        &self,
        collection_id: CollectionId,
        course_id: CourseId,
    ) -> Result<CollectionItem, RepositoryError> {
        let now = Utc::now();

        let result = sqlx::query(
            "INSERT INTO collection_items (collection_id, course_id, added_at) VALUES (?, ?, ?)",
        )
        .bind(collection_id.as_i64())
        .bind(course_id.as_i64())
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            map_write_error(e, || {
                format!("course {} in collection {}", course_id, collection_id)
            })
        })?;

        Ok(CollectionItem::new(
            ItemId::new(result.last_insert_rowid()),
            course_id,
            now,
        ))
    }

    async fn delete_item(
        &self,
        collection_id: CollectionId,
        course_id: CourseId,
    ) -> Result<bool, RepositoryError> {
        let result =
            sqlx::query("DELETE FROM collection_items WHERE collection_id = ? AND course_id = ?")
                .bind(collection_id.as_i64())
                .bind(course_id.as_i64())
                .execute(&self.pool)
                .await
                .map_err(map_read_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_items(
        &self,
        collection_id: CollectionId,
    ) -> Result<Vec<CollectionItem>, RepositoryError> {
        let rows: Vec<ItemRow> = sqlx::query_as(
            "SELECT id, course_id, added_at FROM collection_items WHERE collection_id = ? ORDER BY id ASC",
        )
        .bind(collection_id.as_i64())
        .fetch_all(&self.pool)
        .await
        .map_err(map_read_error)?;

        rows.into_iter().map(CollectionItem::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::sqlite::{create_pool, run_migrations, DatabaseConfig};

    async fn repo() -> SqliteCollectionRepository {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        SqliteCollectionRepository::new(pool)
    }

    #[tokio::test]
    async fn test_one_collection_per_owner_and_kind() {
        let repo = repo().await;
        let owner = OwnerId::new(7);

        let cart = repo
            .insert_collection(owner, CollectionKind::Cart)
            .await
            .unwrap();
        let err = repo
            .insert_collection(owner, CollectionKind::Cart)
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::Duplicate(_)));

        // 同一用户的收藏夹是独立的集合
        let favorites = repo
            .insert_collection(owner, CollectionKind::Favorites)
            .await
            .unwrap();
        assert_ne!(cart.id(), favorites.id());

        let found = repo
            .find_by_owner(owner, CollectionKind::Cart)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id(), cart.id());
        assert_eq!(found.kind(), CollectionKind::Cart);
    }

    #[tokio::test]
    async fn test_item_lifecycle() {
        let repo = repo().await;
        let cart = repo
            .insert_collection(OwnerId::new(1), CollectionKind::Cart)
            .await
            .unwrap();
        let course = CourseId::new(3);

        let item = repo.insert_item(cart.id(), course).await.unwrap();
        assert_eq!(item.course_id(), course);

        let err = repo.insert_item(cart.id(), course).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Duplicate(_)));

        let items = repo.list_items(cart.id()).await.unwrap();
        assert_eq!(items.len(), 1);

        assert!(repo.delete_item(cart.id(), course).await.unwrap());
        assert!(!repo.delete_item(cart.id(), course).await.unwrap());
        assert!(repo.list_items(cart.id()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_items_cascade_with_collection() {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        let repo = SqliteCollectionRepository::new(pool.clone());

        let cart = repo
            .insert_collection(OwnerId::new(1), CollectionKind::Cart)
            .await
            .unwrap();
        repo.insert_item(cart.id(), CourseId::new(3)).await.unwrap();

        sqlx::query("DELETE FROM collections WHERE id = ?")
            .bind(cart.id().as_i64())
            .execute(&pool)
            .await
            .unwrap();

        let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM collection_items")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(remaining, 0);
    }
}
