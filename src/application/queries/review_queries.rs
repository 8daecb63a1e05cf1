//! Review Queries

use crate::domain::collection::CourseId;
use crate::domain::review::ReviewId;

/// 获取评价详情查询
#[derive(Debug, Clone)]
pub struct GetReview {
    pub review_id: ReviewId,
}

/// 列出评价查询（可按课程过滤）
#[derive(Debug, Clone, Default)]
pub struct ListReviews {
    pub course_id: Option<CourseId>,
}
