//! Catalog Context - 课程目录限界上下文
//!
//! 职责:
//! - 课程实体与字段校验
//! - 课程分类
//! - 显式的逐字段更新（CourseUpdate）

mod entities;
mod errors;
mod value_objects;

pub use entities::{Category, Course, CourseUpdate, NewCourse};
pub use errors::CatalogError;
pub use value_objects::{CategoryId, CategoryName, CourseLevel, CourseName};
