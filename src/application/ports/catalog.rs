//! Catalog Port - 出站端口
//!
//! 集合聚合只读地依赖课程目录：存在性与当前价格

use async_trait::async_trait;
use std::collections::HashMap;

use super::RepositoryError;
use crate::domain::collection::{CourseId, Money};

/// Catalog Port
#[async_trait]
pub trait CatalogPort: Send + Sync {
    /// 课程是否存在
    async fn exists(&self, course_id: CourseId) -> Result<bool, RepositoryError>;

    /// 课程当前价格，课程不存在时返回 None
    async fn price_of(&self, course_id: CourseId) -> Result<Option<Money>, RepositoryError>;

    /// 批量获取价格，不存在的课程不出现在结果中
    async fn prices_of(
        &self,
        course_ids: &[CourseId],
    ) -> Result<HashMap<CourseId, Money>, RepositoryError> {
        // 默认实现：逐个调用 price_of
        let mut prices = HashMap::with_capacity(course_ids.len());
        for &course_id in course_ids {
            if let Some(price) = self.price_of(course_id).await? {
                prices.insert(course_id, price);
            }
        }
        Ok(prices)
    }
}
