//! Category Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateCategory, DeleteCategory, RenameCategory};
use crate::application::error::ApplicationError;
use crate::application::ports::{CategoryRepositoryPort, RepositoryError};
use crate::application::queries::handlers::CategoryResponse;
use crate::domain::catalog::CategoryName;

/// CreateCategory Handler
pub struct CreateCategoryHandler {
    category_repo: Arc<dyn CategoryRepositoryPort>,
}

impl CreateCategoryHandler {
    pub fn new(category_repo: Arc<dyn CategoryRepositoryPort>) -> Self {
        Self { category_repo }
    }

    pub async fn handle(
        &self,
        command: CreateCategory,
    ) -> Result<CategoryResponse, ApplicationError> {
        let category_name = CategoryName::new(command.category_name)?;

        let category = self
            .category_repo
            .insert(category_name.clone())
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicate(_) => ApplicationError::conflict(format!(
                    "Category already exists: {}",
                    category_name
                )),
                other => other.into(),
            })?;

        tracing::info!(
            category_id = %category.id(),
            name = %category.category_name(),
            "Category created"
        );

        Ok(CategoryResponse::from(category))
    }
}

/// RenameCategory Handler
pub struct RenameCategoryHandler {
    category_repo: Arc<dyn CategoryRepositoryPort>,
}

impl RenameCategoryHandler {
    pub fn new(category_repo: Arc<dyn CategoryRepositoryPort>) -> Self {
        Self { category_repo }
    }

    pub async fn handle(
        &self,
        command: RenameCategory,
    ) -> Result<CategoryResponse, ApplicationError> {
        let category_name = CategoryName::new(command.category_name)?;
        let category_id = command.category_id;

        let mut category = self
            .category_repo
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Category", category_id.as_i64()))?;

        category.rename(category_name);

        self.category_repo
            .update(&category)
            .await
            .map_err(|e| ApplicationError::from_write(e, "Category", category_id.as_i64()))?;

        tracing::info!(
            category_id = %category_id,
            name = %category.category_name(),
            "Category renamed"
        );

        Ok(CategoryResponse::from(category))
    }
}

/// DeleteCategory Handler
///
/// 分类下的课程保留，变为未分类。
pub struct DeleteCategoryHandler {
    category_repo: Arc<dyn CategoryRepositoryPort>,
}

impl DeleteCategoryHandler {
    pub fn new(category_repo: Arc<dyn CategoryRepositoryPort>) -> Self {
        Self { category_repo }
    }

    pub async fn handle(&self, command: DeleteCategory) -> Result<(), ApplicationError> {
        let deleted = self.category_repo.delete(command.category_id).await?;
        if !deleted {
            return Err(ApplicationError::not_found(
                "Category",
                command.category_id.as_i64(),
            ));
        }

        tracing::info!(category_id = %command.category_id, "Category deleted");
        Ok(())
    }
}
