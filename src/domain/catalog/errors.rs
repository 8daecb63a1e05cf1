//! Catalog Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("无效的课程名称: {0}")]
    InvalidName(String),

    #[error("无效的分类名称: {0}")]
    InvalidCategoryName(String),

    #[error("无效的课程级别: {0}")]
    InvalidLevel(String),

    #[error("无效的价格: {0}")]
    InvalidPrice(String),

    #[error("更新内容为空")]
    EmptyUpdate,
}
