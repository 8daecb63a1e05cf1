//! Review Context - Entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Rating, ReviewError, ReviewId};
use crate::domain::collection::{CourseId, OwnerId};

/// 待创建的评价
#[derive(Debug, Clone)]
pub struct NewReview {
    pub course_id: CourseId,
    pub user_id: OwnerId,
    pub rating: Rating,
    pub comment: String,
}

impl NewReview {
    pub fn new(
        course_id: CourseId,
        user_id: OwnerId,
        rating: Rating,
        comment: impl Into<String>,
    ) -> Result<Self, ReviewError> {
        Ok(Self {
            course_id,
            user_id,
            rating,
            comment: normalize_comment(comment.into())?,
        })
    }
}

/// 课程评价
///
/// 不变量:
/// - course_id、user_id 创建后不可修改
/// - comment 非空
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    id: ReviewId,
    course_id: CourseId,
    user_id: OwnerId,
    rating: Rating,
    comment: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Review {
    pub fn from_new(id: ReviewId, review: NewReview, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            course_id: review.course_id,
            user_id: review.user_id,
            rating: review.rating,
            comment: review.comment,
            created_at,
            updated_at: created_at,
        }
    }

    /// 从持久化数据还原
    pub fn restore(
        id: ReviewId,
        course_id: CourseId,
        user_id: OwnerId,
        rating: Rating,
        comment: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            course_id,
            user_id,
            rating,
            comment,
            created_at,
            updated_at,
        }
    }

    pub fn apply(&mut self, update: ReviewUpdate) -> Result<(), ReviewError> {
        if update.rating.is_none() && update.comment.is_none() {
            return Err(ReviewError::EmptyUpdate);
        }

        if let Some(comment) = update.comment {
            self.comment = normalize_comment(comment)?;
        }
        if let Some(rating) = update.rating {
            self.rating = rating;
        }

        self.updated_at = Utc::now();
        Ok(())
    }

    // Getters
    pub fn id(&self) -> ReviewId {
        self.id
    }

    pub fn course_id(&self) -> CourseId {
        self.course_id
    }

    pub fn user_id(&self) -> OwnerId {
        self.user_id
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// 评价更新，只允许修改评分与评论
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReviewUpdate {
    pub rating: Option<Rating>,
    pub comment: Option<String>,
}

fn normalize_comment(comment: String) -> Result<String, ReviewError> {
    let trimmed = comment.trim();
    if trimmed.is_empty() {
        return Err(ReviewError::EmptyComment);
    }
    Ok(trimmed.to_string())
}
