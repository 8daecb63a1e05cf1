//! SQLite Category Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::{map_read_error, map_write_error, DbPool};
use crate::application::ports::{CategoryRepositoryPort, RepositoryError};
use crate::domain::catalog::{Category, CategoryId, CategoryName};

/// SQLite Category Repository
pub struct SqliteCategoryRepository {
    pool: DbPool,
}

impl SqliteCategoryRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct CategoryRow {
    id: i64,
    category_name: String,
}

impl TryFrom<CategoryRow> for Category {
    type Error = RepositoryError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        let category_name = CategoryName::new(row.category_name)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;
        Ok(Category::new(CategoryId::new(row.id), category_name))
    }
}

#[async_trait]
impl CategoryRepositoryPort for SqliteCategoryRepository {
    async fn insert(&self, category_name: CategoryName) -> Result<Category, RepositoryError> {
        let result = sqlx::query("INSERT INTO categories (category_name) VALUES (?)")
            .bind(category_name.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| map_write_error(e, || format!("category {}", category_name)))?;

        Ok(Category::new(
            CategoryId::new(result.last_insert_rowid()),
            category_name,
        ))
    }

    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, RepositoryError> {
        let row: Option<CategoryRow> =
            sqlx::query_as("SELECT id, category_name FROM categories WHERE id = ?")
                .bind(id.as_i64())
                .fetch_optional(&self.pool)
                .await
                .map_err(map_read_error)?;

        row.map(Category::try_from).transpose()
    }

    async fn list(&self) -> Result<Vec<Category>, RepositoryError> {
        let rows: Vec<CategoryRow> =
            sqlx::query_as("SELECT id, category_name FROM categories ORDER BY category_name, id")
                .fetch_all(&self.pool)
                .await
                .map_err(map_read_error)?;

        rows.into_iter().map(Category::try_from).collect()
    }

    async fn update(&self, category: &Category) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE categories SET category_name = ? WHERE id = ?")
            .bind(category.category_name().as_str())
            .bind(category.id().as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| map_write_error(e, || format!("category {}", category.category_name())))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!(
                "category {}",
                category.id()
            )));
        }
        Ok(())
    }

    async fn delete(&self, id: CategoryId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(map_read_error)?;

        Ok(result.rows_affected() > 0)
    }
}
