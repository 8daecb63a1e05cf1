//! Review Context - Errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("评分必须在 1 到 5 之间: {0}")]
    InvalidRating(u8),

    #[error("评论不能为空")]
    EmptyComment,

    #[error("更新内容为空")]
    EmptyUpdate,
}
