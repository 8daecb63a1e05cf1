//! Review Query Handlers

use serde::Serialize;
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::ReviewRepositoryPort;
use crate::application::queries::{GetReview, ListReviews};
use crate::domain::collection::{CourseId, OwnerId};
use crate::domain::review::{Rating, Review, ReviewId};

/// 评价响应
#[derive(Debug, Clone, Serialize)]
pub struct ReviewResponse {
    pub id: ReviewId,
    pub course_id: CourseId,
    pub user_id: OwnerId,
    pub rating: Rating,
    pub comment: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id(),
            course_id: review.course_id(),
            user_id: review.user_id(),
            rating: review.rating(),
            comment: review.comment().to_string(),
            created_at: review.created_at().to_rfc3339(),
            updated_at: review.updated_at().to_rfc3339(),
        }
    }
}

/// GetReview Handler
pub struct GetReviewHandler {
    review_repo: Arc<dyn ReviewRepositoryPort>,
}

impl GetReviewHandler {
    pub fn new(review_repo: Arc<dyn ReviewRepositoryPort>) -> Self {
        Self { review_repo }
    }

    pub async fn handle(&self, query: GetReview) -> Result<ReviewResponse, ApplicationError> {
        let review = self
            .review_repo
            .find_by_id(query.review_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Review", query.review_id.as_i64()))?;

        Ok(ReviewResponse::from(review))
    }
}

/// ListReviews Handler
pub struct ListReviewsHandler {
    review_repo: Arc<dyn ReviewRepositoryPort>,
}

impl ListReviewsHandler {
    pub fn new(review_repo: Arc<dyn ReviewRepositoryPort>) -> Self {
        Self { review_repo }
    }

    pub async fn handle(&self, query: ListReviews) -> Result<Vec<ReviewResponse>, ApplicationError> {
        let reviews = self.review_repo.list(query.course_id).await?;
        Ok(reviews.into_iter().map(ReviewResponse::from).collect())
    }
}
