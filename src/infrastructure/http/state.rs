//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    AddItemHandler, CreateCategoryHandler, CreateCourseHandler, CreateReviewHandler,
    DeleteCategoryHandler, DeleteCourseHandler, DeleteReviewHandler, RemoveItemHandler,
    RenameCategoryHandler, UpdateCourseHandler, UpdateReviewHandler,
    // Query handlers
    GetCategoryHandler, GetCollectionHandler, GetCourseHandler, GetReviewHandler,
    ListCategoriesHandler, ListCoursesHandler, ListReviewsHandler, SearchCoursesHandler,
    // Ports
    CatalogPort, CategoryRepositoryPort, CollectionRepositoryPort, CourseRepositoryPort,
    ReviewRepositoryPort,
};

/// 应用状态
///
/// 集合处理器不区分购物车 / 收藏夹，类型由路由决定
pub struct AppState {
    // ========== Command Handlers ==========
    pub add_item_handler: AddItemHandler,
    pub remove_item_handler: RemoveItemHandler,
    pub create_course_handler: CreateCourseHandler,
    pub update_course_handler: UpdateCourseHandler,
    pub delete_course_handler: DeleteCourseHandler,
    pub create_category_handler: CreateCategoryHandler,
    pub rename_category_handler: RenameCategoryHandler,
    pub delete_category_handler: DeleteCategoryHandler,
    pub create_review_handler: CreateReviewHandler,
    pub update_review_handler: UpdateReviewHandler,
    pub delete_review_handler: DeleteReviewHandler,

    // ========== Query Handlers ==========
    pub get_collection_handler: GetCollectionHandler,
    pub get_course_handler: GetCourseHandler,
    pub list_courses_handler: ListCoursesHandler,
    pub search_courses_handler: SearchCoursesHandler,
    pub get_category_handler: GetCategoryHandler,
    pub list_categories_handler: ListCategoriesHandler,
    pub get_review_handler: GetReviewHandler,
    pub list_reviews_handler: ListReviewsHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        collection_repo: Arc<dyn CollectionRepositoryPort>,
        course_repo: Arc<dyn CourseRepositoryPort>,
        catalog: Arc<dyn CatalogPort>,
        category_repo: Arc<dyn CategoryRepositoryPort>,
        review_repo: Arc<dyn ReviewRepositoryPort>,
    ) -> Self {
        Self {
            // Command handlers
            add_item_handler: AddItemHandler::new(collection_repo.clone(), catalog.clone()),
            remove_item_handler: RemoveItemHandler::new(collection_repo.clone()),
            create_course_handler: CreateCourseHandler::new(
                course_repo.clone(),
                category_repo.clone(),
            ),
            update_course_handler: UpdateCourseHandler::new(
                course_repo.clone(),
                category_repo.clone(),
            ),
            delete_course_handler: DeleteCourseHandler::new(course_repo.clone()),
            create_category_handler: CreateCategoryHandler::new(category_repo.clone()),
            rename_category_handler: RenameCategoryHandler::new(category_repo.clone()),
            delete_category_handler: DeleteCategoryHandler::new(category_repo.clone()),
            create_review_handler: CreateReviewHandler::new(review_repo.clone(), catalog.clone()),
            update_review_handler: UpdateReviewHandler::new(review_repo.clone()),
            delete_review_handler: DeleteReviewHandler::new(review_repo.clone()),

            // Query handlers
            get_collection_handler: GetCollectionHandler::new(collection_repo, catalog),
            get_course_handler: GetCourseHandler::new(course_repo.clone()),
            list_courses_handler: ListCoursesHandler::new(course_repo.clone()),
            search_courses_handler: SearchCoursesHandler::new(course_repo),
            get_category_handler: GetCategoryHandler::new(category_repo.clone()),
            list_categories_handler: ListCategoriesHandler::new(category_repo),
            get_review_handler: GetReviewHandler::new(review_repo.clone()),
            list_reviews_handler: ListReviewsHandler::new(review_repo),
        }
    }
}
