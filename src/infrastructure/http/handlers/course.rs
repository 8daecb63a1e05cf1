//! Course HTTP Handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;

use crate::application::{
    CourseResponse, CreateCourse, DeleteCourse, GetCourse, ListCourses, SearchCourses,
    UpdateCourse,
};
use crate::domain::catalog::CourseUpdate;
use crate::domain::collection::CourseId;
use crate::infrastructure::http::dto::{
    ApiResponse, CreateCourseRequest, Empty, ListCoursesQuery, SearchCoursesQuery,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 课程列表（价格区间、级别、分类、名称过滤，按价格排序）
pub async fn list_courses(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListCoursesQuery>,
) -> Result<Json<ApiResponse<Vec<CourseResponse>>>, ApiError> {
    let result = state
        .list_courses_handler
        .handle(ListCourses {
            filter: query.into(),
        })
        .await?;

    Ok(Json(ApiResponse::success(result)))
}

/// 按名称搜索课程，没有结果时返回 404
pub async fn search_courses(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchCoursesQuery>,
) -> Result<Json<ApiResponse<Vec<CourseResponse>>>, ApiError> {
    let result = state
        .search_courses_handler
        .handle(SearchCourses {
            course_name: query.course_name,
        })
        .await?;

    Ok(Json(ApiResponse::success(result)))
}

/// 创建课程
pub async fn create_course(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateCourseRequest>,
) -> Result<Json<ApiResponse<CourseResponse>>, ApiError> {
    let command = CreateCourse {
        course_name: req.course_name,
        course_image: req.course_image,
        description: req.description,
        category_id: req.category_id,
        level: req.level,
        price: req.price,
        created_by: req.created_by,
    };

    let result = state.create_course_handler.handle(command).await?;

    Ok(Json(ApiResponse::success(result)))
}

/// 获取课程详情
pub async fn get_course(
    State(state): State<Arc<AppState>>,
    Path(course_id): Path<CourseId>,
) -> Result<Json<ApiResponse<CourseResponse>>, ApiError> {
    let result = state
        .get_course_handler
        .handle(GetCourse { course_id })
        .await?;

    Ok(Json(ApiResponse::success(result)))
}

/// 更新课程，只修改请求中出现的字段
pub async fn update_course(
    State(state): State<Arc<AppState>>,
    Path(course_id): Path<CourseId>,
    Json(update): Json<CourseUpdate>,
) -> Result<Json<ApiResponse<CourseResponse>>, ApiError> {
    let result = state
        .update_course_handler
        .handle(UpdateCourse { course_id, update })
        .await?;

    Ok(Json(ApiResponse::success(result)))
}

/// 删除课程
pub async fn delete_course(
    State(state): State<Arc<AppState>>,
    Path(course_id): Path<CourseId>,
) -> Result<Json<ApiResponse<Empty>>, ApiError> {
    state
        .delete_course_handler
        .handle(DeleteCourse { course_id })
        .await?;

    Ok(Json(ApiResponse::ok()))
}
