//! Category HTTP Handlers

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::application::{
    CategoryResponse, CreateCategory, DeleteCategory, GetCategory, ListCategories,
    RenameCategory,
};
use crate::domain::catalog::CategoryId;
use crate::infrastructure::http::dto::{ApiResponse, CategoryRequest, Empty};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 分类列表
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<CategoryResponse>>>, ApiError> {
    let result = state.list_categories_handler.handle(ListCategories).await?;

    Ok(Json(ApiResponse::success(result)))
}

/// 创建分类
pub async fn create_category(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CategoryRequest>,
) -> Result<Json<ApiResponse<CategoryResponse>>, ApiError> {
    let result = state
        .create_category_handler
        .handle(CreateCategory {
            category_name: req.category_name,
        })
        .await?;

    Ok(Json(ApiResponse::success(result)))
}

pub async fn get_category(
    State(state): State<Arc<AppState>>,
    Path(category_id): Path<CategoryId>,
) -> Result<Json<ApiResponse<CategoryResponse>>, ApiError> {
    let result = state
        .get_category_handler
        .handle(GetCategory { category_id })
        .await?;

    Ok(Json(ApiResponse::success(result)))
}

/// 分类改名
pub async fn rename_category(
    State(state): State<Arc<AppState>>,
    Path(category_id): Path<CategoryId>,
    Json(req): Json<CategoryRequest>,
) -> Result<Json<ApiResponse<CategoryResponse>>, ApiError> {
    let result = state
        .rename_category_handler
        .handle(RenameCategory {
            category_id,
            category_name: req.category_name,
        })
        .await?;

    Ok(Json(ApiResponse::success(result)))
}

/// 删除分类，所属课程变为未分类
pub async fn delete_category(
    State(state): State<Arc<AppState>>,
    Path(category_id): Path<CategoryId>,
) -> Result<Json<ApiResponse<Empty>>, ApiError> {
    state
        .delete_category_handler
        .handle(DeleteCategory { category_id })
        .await?;

    Ok(Json(ApiResponse::ok()))
}
