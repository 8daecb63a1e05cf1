//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（如 SQLite）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::catalog::{
    Category, CategoryId, CategoryName, Course, CourseLevel, NewCourse,
};
use crate::domain::collection::{
    Collection, CollectionId, CollectionItem, CollectionKind, CourseId, Money, OwnerId,
};
use crate::domain::review::{NewReview, Review, ReviewId};

/// Repository 错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    /// 唯一约束冲突
    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// ============================================================================
// Collection Repository
// ============================================================================

/// Collection Repository Port
///
/// 每个方法都是单行原子操作，方法之间不共享事务。
#[async_trait]
pub trait CollectionRepositoryPort: Send + Sync {
    /// 查找用户的集合（不含条目）
    async fn find_by_owner(
        &self,
        owner_id: OwnerId,
        kind: CollectionKind,
    ) -> Result<Option<Collection>, RepositoryError>;

    /// 创建集合，(owner, kind) 已存在时返回 `Duplicate`
    async fn insert_collection(
        &self,
        owner_id: OwnerId,
        kind: CollectionKind,
    ) -> Result<Collection, RepositoryError>;

    /// 创建条目，(collection, course) 已存在时返回 `Duplicate`
    async fn insert_item(
        &self,
        collection_id: CollectionId,
        course_id: CourseId,
    ) -> Result<CollectionItem, RepositoryError>;

    /// 删除条目，返回是否真的删除了一行
    async fn delete_item(
        &self,
        collection_id: CollectionId,
        course_id: CourseId,
    ) -> Result<bool, RepositoryError>;

    /// 列出集合的所有条目
    async fn list_items(
        &self,
        collection_id: CollectionId,
    ) -> Result<Vec<CollectionItem>, RepositoryError>;
}

// ============================================================================
// Course Repository
// ============================================================================

/// 价格排序方向
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriceOrder {
    #[default]
    Asc,
    Desc,
}

impl PriceOrder {
    pub fn as_sql(&self) -> &'static str {
        match self {
            PriceOrder::Asc => "ASC",
            PriceOrder::Desc => "DESC",
        }
    }
}

/// 课程查询条件
#[derive(Debug, Clone, Default)]
pub struct CourseFilter {
    pub min_price: Option<Money>,
    pub max_price: Option<Money>,
    pub level: Option<CourseLevel>,
    pub category_id: Option<CategoryId>,
    /// 名称子串（不区分大小写）
    pub name: Option<String>,
    pub order: PriceOrder,
}

/// Course Repository Port
#[async_trait]
pub trait CourseRepositoryPort: Send + Sync {
    /// 创建课程
    async fn insert(&self, course: NewCourse) -> Result<Course, RepositoryError>;

    /// 根据 ID 查找课程
    async fn find_by_id(&self, id: CourseId) -> Result<Option<Course>, RepositoryError>;

    /// 按条件查询课程
    async fn search(&self, filter: &CourseFilter) -> Result<Vec<Course>, RepositoryError>;

    /// 保存修改后的课程
    async fn update(&self, course: &Course) -> Result<(), RepositoryError>;

    /// 删除课程，返回是否真的删除了一行
    async fn delete(&self, id: CourseId) -> Result<bool, RepositoryError>;
}

// ============================================================================
// Category Repository
// ============================================================================

/// Category Repository Port
#[async_trait]
pub trait CategoryRepositoryPort: Send + Sync {
    /// 创建分类，名称已存在时返回 `Duplicate`
    async fn insert(&self, category_name: CategoryName) -> Result<Category, RepositoryError>;

    async fn find_by_id(&self, id: CategoryId) -> Result<Option<Category>, RepositoryError>;

    /// 按名称排序列出所有分类
    async fn list(&self) -> Result<Vec<Category>, RepositoryError>;

    /// 保存改名后的分类，名称已存在时返回 `Duplicate`
    async fn update(&self, category: &Category) -> Result<(), RepositoryError>;

    /// 删除分类，所属课程变为未分类
    async fn delete(&self, id: CategoryId) -> Result<bool, RepositoryError>;
}

// ============================================================================
// Review Repository
// ============================================================================

/// Review Repository Port
#[async_trait]
pub trait ReviewRepositoryPort: Send + Sync {
    async fn insert(&self, review: NewReview) -> Result<Review, RepositoryError>;

    async fn find_by_id(&self, id: ReviewId) -> Result<Option<Review>, RepositoryError>;

    /// 列出评价，可按课程过滤
    async fn list(&self, course_id: Option<CourseId>) -> Result<Vec<Review>, RepositoryError>;

    async fn update(&self, review: &Review) -> Result<(), RepositoryError>;

    async fn delete(&self, id: ReviewId) -> Result<bool, RepositoryError>;
}
