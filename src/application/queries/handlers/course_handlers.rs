//! Course Query Handlers

use serde::Serialize;
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{CourseFilter, CourseRepositoryPort};
use crate::application::queries::{GetCourse, ListCourses, SearchCourses};
use crate::domain::catalog::{CategoryId, Course, CourseLevel};
use crate::domain::collection::{CourseId, Money, OwnerId};

// ============================================================================
// Response DTOs
// ============================================================================

/// 课程详情响应
#[derive(Debug, Clone, Serialize)]
pub struct CourseResponse {
    pub id: CourseId,
    pub course_name: String,
    pub course_image: Option<String>,
    pub description: String,
    pub category_id: Option<CategoryId>,
    pub level: CourseLevel,
    pub price: Money,
    pub created_by: OwnerId,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            id: course.id(),
            course_name: course.course_name().to_string(),
            course_image: course.course_image().map(str::to_string),
            description: course.description().to_string(),
            category_id: course.category_id(),
            level: course.level(),
            price: course.price(),
            created_by: course.created_by(),
            created_at: course.created_at().to_rfc3339(),
            updated_at: course.updated_at().to_rfc3339(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GetCourse Handler
pub struct GetCourseHandler {
    course_repo: Arc<dyn CourseRepositoryPort>,
}

impl GetCourseHandler {
    pub fn new(course_repo: Arc<dyn CourseRepositoryPort>) -> Self {
        Self { course_repo }
    }

    pub async fn handle(&self, query: GetCourse) -> Result<CourseResponse, ApplicationError> {
        let course = self
            .course_repo
            .find_by_id(query.course_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Course", query.course_id.as_i64()))?;

        Ok(CourseResponse::from(course))
    }
}

/// ListCourses Handler
pub struct ListCoursesHandler {
    course_repo: Arc<dyn CourseRepositoryPort>,
}

impl ListCoursesHandler {
    pub fn new(course_repo: Arc<dyn CourseRepositoryPort>) -> Self {
        Self { course_repo }
    }

    pub async fn handle(&self, query: ListCourses) -> Result<Vec<CourseResponse>, ApplicationError> {
        let filter = query.filter;
        if let (Some(min), Some(max)) = (filter.min_price, filter.max_price) {
            if min > max {
                return Err(ApplicationError::validation(format!(
                    "min_price {} is greater than max_price {}",
                    min, max
                )));
            }
        }

        let courses = self.course_repo.search(&filter).await?;
        Ok(courses.into_iter().map(CourseResponse::from).collect())
    }
}

/// SearchCourses Handler
pub struct SearchCoursesHandler {
    course_repo: Arc<dyn CourseRepositoryPort>,
}

impl SearchCoursesHandler {
    pub fn new(course_repo: Arc<dyn CourseRepositoryPort>) -> Self {
        Self { course_repo }
    }

    pub async fn handle(&self, query: SearchCourses) -> Result<Vec<CourseResponse>, ApplicationError> {
        let term = query.course_name.trim();
        if term.is_empty() {
            return Err(ApplicationError::validation("course_name must not be empty"));
        }

        let filter = CourseFilter {
            name: Some(term.to_string()),
            ..Default::default()
        };
        let courses = self.course_repo.search(&filter).await?;
        if courses.is_empty() {
            return Err(ApplicationError::NoMatches {
                resource_type: "Course",
                term: term.to_string(),
            });
        }

        Ok(courses.into_iter().map(CourseResponse::from).collect())
    }
}
