//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::RepositoryError;
use crate::domain::catalog::CatalogError;
use crate::domain::collection::{CollectionError, CollectionKind, CourseId, OwnerId};
use crate::domain::review::ReviewError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: i64,
    },

    /// 用户还没有该类型的集合
    #[error("No {kind} for owner {owner_id}")]
    CollectionNotFound {
        kind: CollectionKind,
        owner_id: OwnerId,
    },

    /// 引用的课程不存在
    #[error("Course not found: {0}")]
    CatalogEntryNotFound(CourseId),

    /// 集合中没有该课程
    #[error("Course {course_id} is not in the {kind}")]
    ItemNotFound {
        kind: CollectionKind,
        course_id: CourseId,
    },

    /// 集合中已有该课程
    #[error("Course {course_id} is already in the {kind}")]
    DuplicateItem {
        kind: CollectionKind,
        course_id: CourseId,
    },

    /// 搜索没有任何结果
    #[error("No {resource_type} matches '{term}'")]
    NoMatches {
        resource_type: &'static str,
        term: String,
    },

    /// 并发写入冲突
    #[error("Conflict: {0}")]
    Conflict(String),

    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 仓储错误
    #[error("Repository error: {0}")]
    RepositoryError(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: i64) -> Self {
        Self::NotFound { resource_type, id }
    }

    /// 写操作的仓储错误：NotFound 视为资源不存在，Duplicate 视为冲突
    pub fn from_write(err: RepositoryError, resource_type: &'static str, id: i64) -> Self {
        match err {
            RepositoryError::NotFound(_) => Self::not_found(resource_type, id),
            RepositoryError::Duplicate(entity) => {
                Self::conflict(format!("{} already exists: {}", resource_type, entity))
            }
            other => other.into(),
        }
    }

    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 创建冲突错误
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    /// 创建内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        Self::RepositoryError(err.to_string())
    }
}

impl From<CollectionError> for ApplicationError {
    fn from(err: CollectionError) -> Self {
        match err {
            CollectionError::DuplicateItem { kind, course_id } => {
                Self::DuplicateItem { kind, course_id }
            }
            CollectionError::ItemNotFound { kind, course_id } => {
                Self::ItemNotFound { kind, course_id }
            }
            CollectionError::TotalOverflow { .. } => Self::internal(err.to_string()),
        }
    }
}

impl From<CatalogError> for ApplicationError {
    fn from(err: CatalogError) -> Self {
        Self::ValidationError(err.to_string())
    }
}

impl From<ReviewError> for ApplicationError {
    fn from(err: ReviewError) -> Self {
        Self::ValidationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_errors_keep_their_meaning() {
        let err = ApplicationError::from_write(
            RepositoryError::NotFound("course 3".to_string()),
            "Course",
            3,
        );
        assert!(matches!(err, ApplicationError::NotFound { id: 3, .. }));

        let err = ApplicationError::from_write(
            RepositoryError::Duplicate("编程".to_string()),
            "Category",
            1,
        );
        assert!(matches!(err, ApplicationError::Conflict(_)));

        let err = ApplicationError::from_write(
            RepositoryError::DatabaseError("disk".to_string()),
            "Course",
            3,
        );
        assert!(matches!(err, ApplicationError::RepositoryError(_)));
    }
}
