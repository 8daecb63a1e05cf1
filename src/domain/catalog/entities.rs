//! Catalog Context - Entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CatalogError, CategoryId, CategoryName, CourseLevel, CourseName};
use crate::domain::collection::{CourseId, Money, OwnerId};

/// 待创建的课程（id 由存储层分配）
#[derive(Debug, Clone)]
pub struct NewCourse {
    pub course_name: CourseName,
    pub course_image: Option<String>,
    pub description: String,
    pub category_id: Option<CategoryId>,
    pub level: CourseLevel,
    pub price: Money,
    pub created_by: OwnerId,
}

/// 课程
///
/// 不变量:
/// - id、created_by、created_at 创建后不可修改
/// - price 非负
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    id: CourseId,
    course_name: CourseName,
    course_image: Option<String>,
    description: String,
    category_id: Option<CategoryId>,
    level: CourseLevel,
    price: Money,
    created_by: OwnerId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Course {
    /// 由新课程与存储层分配的 id 组装
    pub fn from_new(id: CourseId, course: NewCourse, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            course_name: course.course_name,
            course_image: course.course_image,
            description: course.description,
            category_id: course.category_id,
            level: course.level,
            price: course.price,
            created_by: course.created_by,
            created_at,
            updated_at: created_at,
        }
    }

    /// 从持久化数据还原
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: CourseId,
        course_name: CourseName,
        course_image: Option<String>,
        description: String,
        category_id: Option<CategoryId>,
        level: CourseLevel,
        price: Money,
        created_by: OwnerId,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            course_name,
            course_image,
            description,
            category_id,
            level,
            price,
            created_by,
            created_at,
            updated_at,
        }
    }

    /// 应用逐字段更新，只修改 update 中出现的字段
    pub fn apply(&mut self, update: CourseUpdate) -> Result<(), CatalogError> {
        if update.is_empty() {
            return Err(CatalogError::EmptyUpdate);
        }

        if let Some(course_name) = update.course_name {
            self.course_name = course_name;
        }
        if let Some(course_image) = update.course_image {
            self.course_image = Some(course_image);
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(category_id) = update.category_id {
            self.category_id = Some(category_id);
        }
        if let Some(level) = update.level {
            self.level = level;
        }
        if let Some(price) = update.price {
            self.price = price;
        }

        self.updated_at = Utc::now();
        Ok(())
    }

    // Getters
    pub fn id(&self) -> CourseId {
        self.id
    }

    pub fn course_name(&self) -> &CourseName {
        &self.course_name
    }

    pub fn course_image(&self) -> Option<&str> {
        self.course_image.as_deref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category_id(&self) -> Option<CategoryId> {
        self.category_id
    }

    pub fn level(&self) -> CourseLevel {
        self.level
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn created_by(&self) -> OwnerId {
        self.created_by
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// 课程更新（显式字段，未出现的字段保持不变）
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CourseUpdate {
    pub course_name: Option<CourseName>,
    pub course_image: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<CategoryId>,
    pub level: Option<CourseLevel>,
    pub price: Option<Money>,
}

impl CourseUpdate {
    pub fn is_empty(&self) -> bool {
        self.course_name.is_none()
            && self.course_image.is_none()
            && self.description.is_none()
            && self.category_id.is_none()
            && self.level.is_none()
            && self.price.is_none()
    }
}

/// 课程分类
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    category_name: CategoryName,
}

impl Category {
    pub fn new(id: CategoryId, category_name: CategoryName) -> Self {
        Self { id, category_name }
    }

    pub fn rename(&mut self, category_name: CategoryName) {
        self.category_name = category_name;
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn category_name(&self) -> &CategoryName {
        &self.category_name
    }
}
