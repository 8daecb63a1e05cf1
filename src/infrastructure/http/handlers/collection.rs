//! Collection HTTP Handlers
//!
//! 购物车与收藏夹共用这些 handler，集合类型由路由传入

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::application::{AddItem, CollectionView, GetCollection, ItemView, RemoveItem};
use crate::domain::collection::{CollectionKind, CourseId};
use crate::infrastructure::http::dto::{AddItemRequest, ApiResponse, Empty, OwnerQuery};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 获取集合（含条目与购物车总价）
pub async fn get_collection(
    kind: CollectionKind,
    State(state): State<Arc<AppState>>,
    Query(owner): Query<OwnerQuery>,
) -> Result<Json<ApiResponse<CollectionView>>, ApiError> {
    let query = GetCollection {
        kind,
        owner_id: owner.owner_id,
    };

    let result = state.get_collection_handler.handle(query).await?;

    Ok(Json(ApiResponse::success(result)))
}

/// 加入课程（集合不存在时自动创建）
pub async fn add_item(
    kind: CollectionKind,
    State(state): State<Arc<AppState>>,
    Query(owner): Query<OwnerQuery>,
    Json(req): Json<AddItemRequest>,
) -> Result<Json<ApiResponse<ItemView>>, ApiError> {
    let command = AddItem {
        kind,
        owner_id: owner.owner_id,
        course_id: req.course_id,
    };

    let result = state.add_item_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(result)))
}

/// 移除课程
pub async fn remove_item(
    kind: CollectionKind,
    State(state): State<Arc<AppState>>,
    Path(course_id): Path<CourseId>,
    Query(owner): Query<OwnerQuery>,
) -> Result<Json<ApiResponse<Empty>>, ApiError> {
    let command = RemoveItem {
        kind,
        owner_id: owner.owner_id,
        course_id,
    };

    state.remove_item_handler.handle(command).await?;

    Ok(Json(ApiResponse::ok()))
}
