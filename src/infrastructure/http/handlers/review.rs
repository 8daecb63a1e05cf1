//! Review HTTP Handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::application::{
    CreateReview, DeleteReview, GetReview, ListReviews, ReviewResponse, UpdateReview,
};
use crate::domain::review::{ReviewId, ReviewUpdate};
use crate::infrastructure::http::dto::{
    ApiResponse, CreateReviewRequest, Empty, ListReviewsQuery,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 评价列表，可按 course_id 过滤
pub async fn list_reviews(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListReviewsQuery>,
) -> Result<Json<ApiResponse<Vec<ReviewResponse>>>, ApiError> {
    let result = state
        .list_reviews_handler
        .handle(ListReviews {
            course_id: query.course_id,
        })
        .await?;

    Ok(Json(ApiResponse::success(result)))
}

/// 发表评价
pub async fn create_review(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateReviewRequest>,
) -> Result<Json<ApiResponse<ReviewResponse>>, ApiError> {
    let command = CreateReview {
        course_id: req.course_id,
        user_id: req.user_id,
        rating: req.rating,
        comment: req.comment,
    };

    let result = state.create_review_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(result)))
}

pub async fn get_review(
    State(state): State<Arc<AppState>>,
    Path(review_id): Path<ReviewId>,
) -> Result<Json<ApiResponse<ReviewResponse>>, ApiError> {
    let result = state
        .get_review_handler
        .handle(GetReview { review_id })
        .await?;

    Ok(Json(ApiResponse::success(result)))
}

/// 修改评分或评论
pub async fn update_review(
    State(state): State<Arc<AppState>>,
    Path(review_id): Path<ReviewId>,
    Json(update): Json<ReviewUpdate>,
) -> Result<Json<ApiResponse<ReviewResponse>>, ApiError> {
    let result = state
        .update_review_handler
        .handle(UpdateReview { review_id, update })
        .await?;

    Ok(Json(ApiResponse::success(result)))
}

pub async fn delete_review(
    State(state): State<Arc<AppState>>,
    Path(review_id): Path<ReviewId>,
) -> Result<Json<ApiResponse<Empty>>, ApiError> {
    state
        .delete_review_handler
        .handle(DeleteReview { review_id })
        .await?;

    Ok(Json(ApiResponse::ok()))
}
