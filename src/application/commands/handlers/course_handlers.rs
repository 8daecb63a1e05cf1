//! Course Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateCourse, DeleteCourse, UpdateCourse};
use crate::application::error::ApplicationError;
use crate::application::ports::{CategoryRepositoryPort, CourseRepositoryPort, RepositoryError};
use crate::application::queries::handlers::CourseResponse;
use crate::domain::catalog::{CategoryId, CourseName, NewCourse};

/// 引用的分类必须存在
async fn ensure_category_exists(
    category_repo: &dyn CategoryRepositoryPort,
    category_id: Option<CategoryId>,
) -> Result<(), ApplicationError> {
    if let Some(category_id) = category_id {
        if category_repo.find_by_id(category_id).await?.is_none() {
            return Err(ApplicationError::not_found("Category", category_id.as_i64()));
        }
    }
    Ok(())
}

// ============================================================================
// CreateCourse
// ============================================================================

/// CreateCourse Handler
pub struct CreateCourseHandler {
    course_repo: Arc<dyn CourseRepositoryPort>,
    category_repo: Arc<dyn CategoryRepositoryPort>,
}

impl CreateCourseHandler {
    pub fn new(
        course_repo: Arc<dyn CourseRepositoryPort>,
        category_repo: Arc<dyn CategoryRepositoryPort>,
    ) -> Self {
        Self {
            course_repo,
            category_repo,
        }
    }

    pub async fn handle(&self, command: CreateCourse) -> Result<CourseResponse, ApplicationError> {
        let course_name = CourseName::new(command.course_name)?;
        ensure_category_exists(self.category_repo.as_ref(), command.category_id).await?;

        let course = self
            .course_repo
            .insert(NewCourse {
                course_name,
                course_image: command.course_image,
                description: command.description,
                category_id: command.category_id,
                level: command.level,
                price: command.price,
                created_by: command.created_by,
            })
            .await
            .map_err(|e| match (e, command.category_id) {
                // 校验之后分类被删除，外键拒绝插入
                (RepositoryError::NotFound(_), Some(category_id)) => {
                    ApplicationError::not_found("Category", category_id.as_i64())
                }
                (other, _) => other.into(),
            })?;

        tracing::info!(
            course_id = %course.id(),
            name = %course.course_name(),
            price = %course.price(),
            "Course created"
        );

        Ok(CourseResponse::from(course))
    }
}

// ============================================================================
// UpdateCourse
// ============================================================================

/// UpdateCourse Handler
pub struct UpdateCourseHandler {
    course_repo: Arc<dyn CourseRepositoryPort>,
    category_repo: Arc<dyn CategoryRepositoryPort>,
}

impl UpdateCourseHandler {
    pub fn new(
        course_repo: Arc<dyn CourseRepositoryPort>,
        category_repo: Arc<dyn CategoryRepositoryPort>,
    ) -> Self {
        Self {
            course_repo,
            category_repo,
        }
    }

    pub async fn handle(&self, command: UpdateCourse) -> Result<CourseResponse, ApplicationError> {
        let course_id = command.course_id;

        let mut course = self
            .course_repo
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Course", course_id.as_i64()))?;

        ensure_category_exists(self.category_repo.as_ref(), command.update.category_id).await?;
        course.apply(command.update)?;

        // 读取之后可能被并发删除
        self.course_repo
            .update(&course)
            .await
            .map_err(|e| ApplicationError::from_write(e, "Course", course_id.as_i64()))?;

        tracing::info!(course_id = %course_id, "Course updated");

        Ok(CourseResponse::from(course))
    }
}

// ============================================================================
// DeleteCourse
// ============================================================================

/// DeleteCourse Handler
///
/// 不级联删除购物车 / 收藏夹中的条目，课程的评价随课程一起删除。
pub struct DeleteCourseHandler {
    course_repo: Arc<dyn CourseRepositoryPort>,
}

impl DeleteCourseHandler {
    pub fn new(course_repo: Arc<dyn CourseRepositoryPort>) -> Self {
        Self { course_repo }
    }

    pub async fn handle(&self, command: DeleteCourse) -> Result<(), ApplicationError> {
        let course_id = command.course_id;

        if !self.course_repo.delete(course_id).await? {
            return Err(ApplicationError::not_found("Course", course_id.as_i64()));
        }

        tracing::info!(course_id = %course_id, "Course deleted");

        Ok(())
    }
}
