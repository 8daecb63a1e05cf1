//! Collection Context - Errors

use thiserror::Error;

use super::{CollectionKind, CourseId};

#[derive(Debug, Error)]
pub enum CollectionError {
    #[error("课程已在{kind}中: {course_id}")]
    DuplicateItem {
        kind: CollectionKind,
        course_id: CourseId,
    },

    #[error("{kind}中没有该课程: {course_id}")]
    ItemNotFound {
        kind: CollectionKind,
        course_id: CourseId,
    },

    #[error("{kind}总价超出可表示范围")]
    TotalOverflow { kind: CollectionKind },
}
