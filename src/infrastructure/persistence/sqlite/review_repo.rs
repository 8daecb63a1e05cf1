//! SQLite Review Repository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::FromRow;

use super::{map_read_error, map_write_error, parse_timestamp, DbPool};
use crate::application::ports::{RepositoryError, ReviewRepositoryPort};
use crate::domain::collection::{CourseId, OwnerId};
use crate::domain::review::{NewReview, Rating, Review, ReviewId};

const REVIEW_COLUMNS: &str = "id, course_id, user_id, rating, comment, created_at, updated_at";

/// SQLite Review Repository
pub struct SqliteReviewRepository {
    pool: DbPool,
}

impl SqliteReviewRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct ReviewRow {
    id: i64,
    course_id: i64,
    user_id: i64,
    rating: i64,
    comment: String,
    created_at: String,
    updated_at: String,
}

impl TryFrom<ReviewRow> for Review {
    type Error = RepositoryError;

    fn try_from(row: ReviewRow) -> Result<Self, Self::Error> {
        let rating = u8::try_from(row.rating)
            .ok()
            .and_then(|value| Rating::new(value).ok())
            .ok_or_else(|| {
                RepositoryError::SerializationError(format!("invalid rating {}", row.rating))
            })?;

        Ok(Review::restore(
            ReviewId::new(row.id),
            CourseId::new(row.course_id),
            OwnerId::new(row.user_id),
            rating,
            row.comment,
            parse_timestamp(&row.created_at)?,
            parse_timestamp(&row.updated_at)?,
        ))
    }
}

#[async_trait]
impl ReviewRepositoryPort for SqliteReviewRepository {
    /// 课程不存在时外键拒绝插入，返回 `NotFound`
    async fn insert(&self, review: NewReview) -> Result<Review, RepositoryError> {
        let now = Utc::now();

        let result = sqlx::query(
            r#"
            INSERT INTO reviews (course_id, user_id, rating, comment, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(review.course_id.as_i64())
        .bind(review.user_id.as_i64())
        .bind(i64::from(review.rating.value()))
        .bind(&review.comment)
        .bind(now.to_rfc3339())
        .bind(now.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, || format!("review of course {}", review.course_id)))?;

        Ok(Review::from_new(
            ReviewId::new(result.last_insert_rowid()),
            review,
            now,
        ))
    }

    async fn find_by_id(&self, id: ReviewId) -> Result<Option<Review>, RepositoryError> {
        let row: Option<ReviewRow> =
            sqlx::query_as(&format!("SELECT {} FROM reviews WHERE id = ?", REVIEW_COLUMNS))
                .bind(id.as_i64())
                .fetch_optional(&self.pool)
                .await
                .map_err(map_read_error)?;

        row.map(Review::try_from).transpose()
    }

    async fn list(&self, course_id: Option<CourseId>) -> Result<Vec<Review>, RepositoryError> {
        let rows: Vec<ReviewRow> = match course_id {
            Some(course_id) => {
                sqlx::query_as(&format!(
                    "SELECT {} FROM reviews WHERE course_id = ? ORDER BY id",
                    REVIEW_COLUMNS
                ))
                .bind(course_id.as_i64())
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as(&format!("SELECT {} FROM reviews ORDER BY id", REVIEW_COLUMNS))
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(map_read_error)?;

        rows.into_iter().map(Review::try_from).collect()
    }

    async fn update(&self, review: &Review) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE reviews SET rating = ?, comment = ?, updated_at = ? WHERE id = ?",
        )
        .bind(i64::from(review.rating().value()))
        .bind(review.comment())
        .bind(review.updated_at().to_rfc3339())
        .bind(review.id().as_i64())
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, || format!("review {}", review.id())))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("review {}", review.id())));
        }
        Ok(())
    }

    async fn delete(&self, id: ReviewId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = ?")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(map_read_error)?;

        Ok(result.rows_affected() > 0)
    }
}
