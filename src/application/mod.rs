//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（Collection、Course、Category、Review 仓储与 Catalog）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // Collection commands
    AddItem,
    RemoveItem,
    // Course commands
    CreateCourse,
    DeleteCourse,
    UpdateCourse,
    // Category commands
    CreateCategory,
    DeleteCategory,
    RenameCategory,
    // Review commands
    CreateReview,
    DeleteReview,
    UpdateReview,
    // Handlers
    handlers::{
        AddItemHandler, CreateCategoryHandler, CreateCourseHandler, CreateReviewHandler,
        DeleteCategoryHandler, DeleteCourseHandler, DeleteReviewHandler, ItemView,
        RemoveItemHandler, RenameCategoryHandler, UpdateCourseHandler, UpdateReviewHandler,
    },
};

pub use error::ApplicationError;

pub use ports::{
    CatalogPort, CategoryRepositoryPort, CollectionRepositoryPort, CourseFilter,
    CourseRepositoryPort, PriceOrder, RepositoryError, ReviewRepositoryPort,
};

pub use queries::{
    // Collection queries
    GetCollection,
    // Course queries
    GetCourse,
    ListCourses,
    SearchCourses,
    // Category queries
    GetCategory,
    ListCategories,
    // Review queries
    GetReview,
    ListReviews,
    // Handlers
    handlers::{
        CategoryResponse, CollectionView, CourseResponse, GetCategoryHandler,
        GetCollectionHandler, GetCourseHandler, GetReviewHandler, ListCategoriesHandler,
        ListCoursesHandler, ListReviewsHandler, ReviewResponse, SearchCoursesHandler,
    },
};
