//! Course Commands

use crate::domain::catalog::{CategoryId, CourseLevel, CourseUpdate};
use crate::domain::collection::{CourseId, Money, OwnerId};

/// 创建课程命令
#[derive(Debug, Clone)]
pub struct CreateCourse {
    pub course_name: String,
    pub course_image: Option<String>,
    pub description: String,
    pub category_id: Option<CategoryId>,
    pub level: CourseLevel,
    pub price: Money,
    pub created_by: OwnerId,
}

/// 更新课程命令
#[derive(Debug, Clone)]
pub struct UpdateCourse {
    pub course_id: CourseId,
    pub update: CourseUpdate,
}

/// 删除课程命令
#[derive(Debug, Clone)]
pub struct DeleteCourse {
    pub course_id: CourseId,
}
