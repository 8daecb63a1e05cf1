//! Review Commands

use crate::domain::collection::{CourseId, OwnerId};
use crate::domain::review::{Rating, ReviewId, ReviewUpdate};

/// 发表评价命令
#[derive(Debug, Clone)]
pub struct CreateReview {
    pub course_id: CourseId,
    pub user_id: OwnerId,
    pub rating: Rating,
    pub comment: String,
}

/// 更新评价命令
#[derive(Debug, Clone)]
pub struct UpdateReview {
    pub review_id: ReviewId,
    pub update: ReviewUpdate,
}

/// 删除评价命令
#[derive(Debug, Clone)]
pub struct DeleteReview {
    pub review_id: ReviewId,
}
