//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::application::{CourseFilter, PriceOrder};
use crate::domain::catalog::{CategoryId, CourseLevel};
use crate::domain::collection::{CourseId, Money, OwnerId};
use crate::domain::review::Rating;

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

/// 空数据响应
#[derive(Debug, Serialize)]
pub struct Empty {}

impl ApiResponse<Empty> {
    /// 成功但无数据
    pub fn ok() -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(Empty {}),
        }
    }
}

// ============================================================================
// Collection DTOs
// ============================================================================

/// 购物车 / 收藏夹接口的用户参数（query string）
#[derive(Debug, Deserialize)]
pub struct OwnerQuery {
    pub owner_id: OwnerId,
}

#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub course_id: CourseId,
}

// ============================================================================
// Course DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateCourseRequest {
    pub course_name: String,
    #[serde(default)]
    pub course_image: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    #[serde(default)]
    pub level: CourseLevel,
    pub price: Money,
    pub created_by: OwnerId,
}

/// 价格排序参数
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderParam {
    #[default]
    Asc,
    Desc,
}

impl From<OrderParam> for PriceOrder {
    fn from(order: OrderParam) -> Self {
        match order {
            OrderParam::Asc => PriceOrder::Asc,
            OrderParam::Desc => PriceOrder::Desc,
        }
    }
}

/// 课程列表查询参数
#[derive(Debug, Default, Deserialize)]
pub struct ListCoursesQuery {
    pub min_price: Option<Money>,
    pub max_price: Option<Money>,
    pub level: Option<CourseLevel>,
    pub category_id: Option<CategoryId>,
    pub name: Option<String>,
    #[serde(default)]
    pub order: OrderParam,
}

impl From<ListCoursesQuery> for CourseFilter {
    fn from(query: ListCoursesQuery) -> Self {
        Self {
            min_price: query.min_price,
            max_price: query.max_price,
            level: query.level,
            category_id: query.category_id,
            name: query.name.filter(|name| !name.trim().is_empty()),
            order: query.order.into(),
        }
    }
}

/// 按名称搜索课程
#[derive(Debug, Deserialize)]
pub struct SearchCoursesQuery {
    pub course_name: String,
}

// ============================================================================
// Category DTOs
// ============================================================================

/// 创建分类 / 分类改名
#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    pub category_name: String,
}

// ============================================================================
// Review DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateReviewRequest {
    pub course_id: CourseId,
    pub user_id: OwnerId,
    pub rating: Rating,
    pub comment: String,
}

/// 评价列表查询参数
#[derive(Debug, Default, Deserialize)]
pub struct ListReviewsQuery {
    pub course_id: Option<CourseId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_from_urlencoded() {
        let query: ListCoursesQuery = parse_query(
            "min_price=10&max_price=49.99&level=advanced&category_id=2&order=desc&name=rust",
        );
        let filter = CourseFilter::from(query);

        assert_eq!(filter.min_price, Some(Money::from_cents(1000)));
        assert_eq!(filter.max_price, Some(Money::from_cents(4999)));
        assert_eq!(filter.level, Some(CourseLevel::Advanced));
        assert_eq!(filter.category_id, Some(CategoryId::new(2)));
        assert_eq!(filter.order, PriceOrder::Desc);
        assert_eq!(filter.name.as_deref(), Some("rust"));
    }

    #[test]
    fn test_blank_name_is_ignored() {
        let filter = CourseFilter::from(parse_query::<ListCoursesQuery>("name=%20"));
        assert!(filter.name.is_none());
        assert_eq!(filter.order, PriceOrder::Asc);
    }

    #[test]
    fn test_review_request_rejects_out_of_range_rating() {
        let result: Result<CreateReviewRequest, _> = serde_json::from_str(
            r#"{"course_id": 1, "user_id": 7, "rating": 6, "comment": "好"}"#,
        );
        assert!(result.is_err());
    }

    fn parse_query<T: serde::de::DeserializeOwned>(query: &str) -> T {
        let uri: axum::http::Uri = format!("http://localhost/?{}", query).parse().unwrap();
        axum::extract::Query::<T>::try_from_uri(&uri).unwrap().0
    }
}
