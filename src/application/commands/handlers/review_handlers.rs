//! Review Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateReview, DeleteReview, UpdateReview};
use crate::application::error::ApplicationError;
use crate::application::ports::{CatalogPort, RepositoryError, ReviewRepositoryPort};
use crate::application::queries::handlers::ReviewResponse;
use crate::domain::review::NewReview;

/// CreateReview Handler
pub struct CreateReviewHandler {
    review_repo: Arc<dyn ReviewRepositoryPort>,
    catalog: Arc<dyn CatalogPort>,
}

impl CreateReviewHandler {
    pub fn new(review_repo: Arc<dyn ReviewRepositoryPort>, catalog: Arc<dyn CatalogPort>) -> Self {
        Self {
            review_repo,
            catalog,
        }
    }

    pub async fn handle(&self, command: CreateReview) -> Result<ReviewResponse, ApplicationError> {
        let course_id = command.course_id;
        let new_review = NewReview::new(
            course_id,
            command.user_id,
            command.rating,
            command.comment,
        )?;

        if !self.catalog.exists(course_id).await? {
            return Err(ApplicationError::CatalogEntryNotFound(course_id));
        }

        // 校验之后课程仍可能被删除，外键会拒绝插入
        let review = self
            .review_repo
            .insert(new_review)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound(_) => ApplicationError::CatalogEntryNotFound(course_id),
                other => other.into(),
            })?;

        tracing::info!(
            review_id = %review.id(),
            course_id = %course_id,
            user_id = %review.user_id(),
            rating = review.rating().value(),
            "Review created"
        );

        Ok(ReviewResponse::from(review))
    }
}

/// UpdateReview Handler
pub struct UpdateReviewHandler {
    review_repo: Arc<dyn ReviewRepositoryPort>,
}

impl UpdateReviewHandler {
    pub fn new(review_repo: Arc<dyn ReviewRepositoryPort>) -> Self {
        Self { review_repo }
    }

    pub async fn handle(&self, command: UpdateReview) -> Result<ReviewResponse, ApplicationError> {
        let review_id = command.review_id;

        let mut review = self
            .review_repo
            .find_by_id(review_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Review", review_id.as_i64()))?;

        review.apply(command.update)?;

        self.review_repo
            .update(&review)
            .await
            .map_err(|e| ApplicationError::from_write(e, "Review", review_id.as_i64()))?;

        tracing::info!(review_id = %review_id, "Review updated");

        Ok(ReviewResponse::from(review))
    }
}

/// DeleteReview Handler
pub struct DeleteReviewHandler {
    review_repo: Arc<dyn ReviewRepositoryPort>,
}

impl DeleteReviewHandler {
    pub fn new(review_repo: Arc<dyn ReviewRepositoryPort>) -> Self {
        Self { review_repo }
    }

    pub async fn handle(&self, command: DeleteReview) -> Result<(), ApplicationError> {
        let deleted = self.review_repo.delete(command.review_id).await?;
        if !deleted {
            return Err(ApplicationError::not_found(
                "Review",
                command.review_id.as_i64(),
            ));
        }

        tracing::info!(review_id = %command.review_id, "Review deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::application::ports::CourseRepositoryPort;
    use crate::application::queries::handlers::ListReviewsHandler;
    use crate::application::queries::ListReviews;
    use crate::domain::catalog::{CourseLevel, CourseName, NewCourse};
    use crate::domain::collection::{CourseId, Money, OwnerId};
    use crate::domain::review::{Rating, ReviewId, ReviewUpdate};
    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig, SqliteCourseRepository,
        SqliteReviewRepository,
    };

    struct Fixture {
        reviews: Arc<SqliteReviewRepository>,
        courses: Arc<SqliteCourseRepository>,
    }

    impl Fixture {
        fn create_handler(&self) -> CreateReviewHandler {
            CreateReviewHandler::new(self.reviews.clone(), self.courses.clone())
        }

        async fn course(&self) -> CourseId {
            self.courses
                .insert(NewCourse {
                    course_name: CourseName::new("Rust Basics").unwrap(),
                    course_image: None,
                    description: String::new(),
                    category_id: None,
                    level: CourseLevel::Beginner,
                    price: Money::from_cents(100),
                    created_by: OwnerId::new(1),
                })
                .await
                .unwrap()
                .id()
        }
    }

    async fn fixture() -> Fixture {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        Fixture {
            reviews: Arc::new(SqliteReviewRepository::new(pool.clone())),
            courses: Arc::new(SqliteCourseRepository::new(pool)),
        }
    }

    fn create(course_id: CourseId, rating: u8, comment: &str) -> CreateReview {
        CreateReview {
            course_id,
            user_id: OwnerId::new(7),
            rating: Rating::new(rating).unwrap(),
            comment: comment.to_string(),
        }
    }

    #[tokio::test]
    async fn test_review_requires_existing_course() {
        let fixture = fixture().await;
        let err = fixture
            .create_handler()
            .handle(create(CourseId::new(404), 5, "好"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::CatalogEntryNotFound(id) if id == CourseId::new(404)));

        let course_id = fixture.course().await;
        let err = fixture
            .create_handler()
            .handle(create(course_id, 5, "  "))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_update_and_delete_review() {
        let fixture = fixture().await;
        let course_id = fixture.course().await;
        let created = fixture
            .create_handler()
            .handle(create(course_id, 4, "讲得很清楚"))
            .await
            .unwrap();

        let updated = UpdateReviewHandler::new(fixture.reviews.clone())
            .handle(UpdateReview {
                review_id: created.id,
                update: ReviewUpdate {
                    rating: Some(Rating::new(5).unwrap()),
                    comment: None,
                },
            })
            .await
            .unwrap();
        assert_eq!(updated.rating.value(), 5);
        assert_eq!(updated.comment, "讲得很清楚");

        let err = UpdateReviewHandler::new(fixture.reviews.clone())
            .handle(UpdateReview {
                review_id: ReviewId::new(404),
                update: ReviewUpdate {
                    rating: Some(Rating::new(1).unwrap()),
                    comment: None,
                },
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound { resource_type: "Review", .. }));

        let delete = DeleteReviewHandler::new(fixture.reviews.clone());
        delete
            .handle(DeleteReview {
                review_id: created.id,
            })
            .await
            .unwrap();
        let err = delete
            .handle(DeleteReview {
                review_id: created.id,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_reviews_follow_their_course() {
        let fixture = fixture().await;
        let course_id = fixture.course().await;
        let other_id = fixture.course().await;
        fixture
            .create_handler()
            .handle(create(course_id, 4, "不错"))
            .await
            .unwrap();
        fixture
            .create_handler()
            .handle(create(other_id, 2, "一般"))
            .await
            .unwrap();

        let list = ListReviewsHandler::new(fixture.reviews.clone());
        let for_course = list
            .handle(ListReviews {
                course_id: Some(course_id),
            })
            .await
            .unwrap();
        assert_eq!(for_course.len(), 1);
        assert_eq!(for_course[0].comment, "不错");

        fixture.courses.delete(course_id).await.unwrap();
        let all = list.handle(ListReviews { course_id: None }).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].course_id, other_id);
    }
}
