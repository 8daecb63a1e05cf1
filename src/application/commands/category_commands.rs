//! Category Commands

use crate::domain::catalog::CategoryId;

/// 创建分类命令
#[derive(Debug, Clone)]
pub struct CreateCategory {
    pub category_name: String,
}

/// 分类改名命令
#[derive(Debug, Clone)]
pub struct RenameCategory {
    pub category_id: CategoryId,
    pub category_name: String,
}

/// 删除分类命令
#[derive(Debug, Clone)]
pub struct DeleteCategory {
    pub category_id: CategoryId,
}
