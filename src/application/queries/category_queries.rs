//! Category Queries

use crate::domain::catalog::CategoryId;

/// 获取分类详情查询
#[derive(Debug, Clone)]
pub struct GetCategory {
    pub category_id: CategoryId,
}

/// 列出所有分类查询
#[derive(Debug, Clone, Default)]
pub struct ListCategories;
