//! Category Query Handlers

use serde::Serialize;
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::CategoryRepositoryPort;
use crate::application::queries::{GetCategory, ListCategories};
use crate::domain::catalog::{Category, CategoryId};

/// 分类响应
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryResponse {
    pub id: CategoryId,
    pub category_name: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id(),
            category_name: category.category_name().to_string(),
        }
    }
}

/// GetCategory Handler
pub struct GetCategoryHandler {
    category_repo: Arc<dyn CategoryRepositoryPort>,
}

impl GetCategoryHandler {
    pub fn new(category_repo: Arc<dyn CategoryRepositoryPort>) -> Self {
        Self { category_repo }
    }

    pub async fn handle(&self, query: GetCategory) -> Result<CategoryResponse, ApplicationError> {
        let category = self
            .category_repo
            .find_by_id(query.category_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Category", query.category_id.as_i64()))?;

        Ok(CategoryResponse::from(category))
    }
}

/// ListCategories Handler
pub struct ListCategoriesHandler {
    category_repo: Arc<dyn CategoryRepositoryPort>,
}

impl ListCategoriesHandler {
    pub fn new(category_repo: Arc<dyn CategoryRepositoryPort>) -> Self {
        Self { category_repo }
    }

    pub async fn handle(
        &self,
        _query: ListCategories,
    ) -> Result<Vec<CategoryResponse>, ApplicationError> {
        let categories = self.category_repo.list().await?;
        Ok(categories.into_iter().map(CategoryResponse::from).collect())
    }
}
