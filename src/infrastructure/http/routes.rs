//! HTTP Routes
//!
//! API Endpoints:
//! - /api/ping                       GET     健康检查
//! - /api/cart?owner_id=             GET     获取购物车（含总价）
//! - /api/cart?owner_id=             POST    加入课程
//! - /api/cart/{course_id}?owner_id= DELETE  移除课程
//! - /api/favorite...                        同上，收藏夹（无总价）
//! - /api/course                     GET     课程列表（min_price, max_price, level, category_id, name, order）
//! - /api/course                     POST    创建课程
//! - /api/course/search?course_name= GET     按名称搜索，无结果时 404
//! - /api/course/{id}                GET     课程详情
//! - /api/course/{id}                PATCH   更新课程（逐字段）
//! - /api/course/{id}                DELETE  删除课程（评价一并删除）
//! - /api/category                   GET     分类列表
//! - /api/category                   POST    创建分类
//! - /api/category/{id}              GET     分类详情
//! - /api/category/{id}              PUT     分类改名
//! - /api/category/{id}              DELETE  删除分类（课程变为未分类）
//! - /api/review?course_id=          GET     评价列表
//! - /api/review                     POST    发表评价
//! - /api/review/{id}                GET     评价详情
//! - /api/review/{id}                PATCH   修改评分或评论
//! - /api/review/{id}                DELETE  删除评价

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

use super::dto::{AddItemRequest, OwnerQuery};
use super::handlers;
use super::state::AppState;
use crate::domain::collection::{CollectionKind, CourseId};

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .merge(collection_routes("/cart", CollectionKind::Cart))
        .merge(collection_routes("/favorite", CollectionKind::Favorites))
        .merge(course_routes())
        .merge(category_routes())
        .merge(review_routes())
}

/// 购物车 / 收藏夹路由，同一组 handler 按 kind 区分
fn collection_routes(path: &str, kind: CollectionKind) -> Router<Arc<AppState>> {
    Router::new()
        .route(
            path,
            get(
                move |state: State<Arc<AppState>>, owner: Query<OwnerQuery>| {
                    handlers::get_collection(kind, state, owner)
                },
            )
            .post(
                move |state: State<Arc<AppState>>,
                      owner: Query<OwnerQuery>,
                      req: Json<AddItemRequest>| {
                    handlers::add_item(kind, state, owner, req)
                },
            ),
        )
        .route(
            &format!("{}/:course_id", path),
            axum::routing::delete(
                move |state: State<Arc<AppState>>,
                      course_id: Path<CourseId>,
                      owner: Query<OwnerQuery>| {
                    handlers::remove_item(kind, state, course_id, owner)
                },
            ),
        )
}

/// Course 路由
fn course_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/course",
            get(handlers::list_courses).post(handlers::create_course),
        )
        .route("/course/search", get(handlers::search_courses))
        .route(
            "/course/:course_id",
            get(handlers::get_course)
                .patch(handlers::update_course)
                .delete(handlers::delete_course),
        )
}

/// Category 路由
fn category_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/category",
            get(handlers::list_categories).post(handlers::create_category),
        )
        .route(
            "/category/:category_id",
            get(handlers::get_category)
                .put(handlers::rename_category)
                .delete(handlers::delete_category),
        )
}

/// Review 路由
fn review_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/review",
            get(handlers::list_reviews).post(handlers::create_review),
        )
        .route(
            "/review/:review_id",
            get(handlers::get_review)
                .patch(handlers::update_review)
                .delete(handlers::delete_review),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig, SqliteCategoryRepository,
        SqliteCollectionRepository, SqliteCourseRepository, SqliteReviewRepository,
    };

    async fn app() -> Router {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        let courses = Arc::new(SqliteCourseRepository::new(pool.clone()));
        let state = AppState::new(
            Arc::new(SqliteCollectionRepository::new(pool.clone())),
            courses.clone(),
            courses,
            Arc::new(SqliteCategoryRepository::new(pool.clone())),
            Arc::new(SqliteReviewRepository::new(pool)),
        );
        create_routes().with_state(Arc::new(state))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    async fn create_course(app: &Router, name: &str, price: &str) -> i64 {
        let (status, body) = send(
            app,
            Method::POST,
            "/api/course",
            Some(json!({ "course_name": name, "price": price, "created_by": 1 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        body["data"]["id"].as_i64().unwrap()
    }

    #[tokio::test]
    async fn test_ping() {
        let app = app().await;
        let (status, body) = send(&app, Method::GET, "/api/ping", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_cart_flow() {
        let app = app().await;
        let course_id = create_course(&app, "Rust Basics", "49.99").await;

        let (status, body) = send(&app, Method::GET, "/api/cart?owner_id=7", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["errno"], 404);

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/cart?owner_id=7",
            Some(json!({ "course_id": course_id })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["errno"], 0);
        assert_eq!(body["data"]["course_id"], course_id);

        let (status, body) = send(&app, Method::GET, "/api/cart?owner_id=7", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["owner_id"], 7);
        assert_eq!(body["data"]["kind"], "cart");
        assert_eq!(body["data"]["total_price"], "49.99");
        assert_eq!(body["data"]["items"][0]["course_id"], course_id);

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/cart?owner_id=7",
            Some(json!({ "course_id": course_id })),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);

        let uri = format!("/api/cart/{}?owner_id=7", course_id);
        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = send(&app, Method::GET, "/api/cart?owner_id=7", None).await;
        assert_eq!(body["data"]["total_price"], "0.00");
        assert_eq!(body["data"]["items"], json!([]));
    }

    #[tokio::test]
    async fn test_favorite_flow() {
        let app = app().await;
        let course_id = create_course(&app, "Rust Basics", "49.99").await;

        let (status, _) = send(&app, Method::DELETE, "/api/favorite/5?owner_id=99", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/favorite?owner_id=3",
            Some(json!({ "course_id": 404 })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/favorite?owner_id=3",
            Some(json!({ "course_id": course_id })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = send(&app, Method::GET, "/api/favorite?owner_id=3", None).await;
        assert_eq!(body["data"]["kind"], "favorites");
        assert!(body["data"].get("total_price").is_none());

        // 收藏夹与购物车互不影响
        let (status, _) = send(&app, Method::GET, "/api/cart?owner_id=3", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_course_crud() {
        let app = app().await;
        let cheap = create_course(&app, "Go Basics", "19.50").await;
        create_course(&app, "Rust Basics", "49.99").await;

        let (status, body) = send(&app, Method::GET, "/api/course?order=desc", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"][0]["course_name"], "Rust Basics");
        assert_eq!(body["data"][1]["course_name"], "Go Basics");

        let (_, body) = send(&app, Method::GET, "/api/course?max_price=20", None).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);

        let uri = format!("/api/course/{}", cheap);
        let (status, body) = send(
            &app,
            Method::PATCH,
            &uri,
            Some(json!({ "price": 25, "level": "intermediate" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["price"], "25.00");
        assert_eq!(body["data"]["level"], "intermediate");
        assert_eq!(body["data"]["course_name"], "Go Basics");

        // 不允许写入未声明的字段
        let (status, _) = send(&app, Method::PATCH, &uri, Some(json!({ "created_by": 9 }))).await;
        assert!(status.is_client_error());

        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_create_course_validation() {
        let app = app().await;
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/course",
            Some(json!({ "course_name": "", "price": "10", "created_by": 1 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errno"], 400);
    }

    #[tokio::test]
    async fn test_search_courses() {
        let app = app().await;
        create_course(&app, "Rust Basics", "49.99").await;
        create_course(&app, "Advanced Rust", "120").await;

        let (status, body) = send(&app, Method::GET, "/api/course/search?course_name=rust", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"].as_array().unwrap().len(), 2);

        let (status, body) =
            send(&app, Method::GET, "/api/course/search?course_name=haskell", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["errno"], 404);

        let (status, _) = send(&app, Method::GET, "/api/course/search", None).await;
        assert!(status.is_client_error());
    }

    #[tokio::test]
    async fn test_category_flow() {
        let app = app().await;
        let (status, body) = send(
            &app,
            Method::POST,
            "/api/category",
            Some(json!({ "category_name": "编程" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let category_id = body["data"]["id"].as_i64().unwrap();

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/category",
            Some(json!({ "category_name": "编程" })),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/course",
            Some(json!({
                "course_name": "Rust Basics",
                "price": "49.99",
                "created_by": 1,
                "category_id": category_id,
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let course_id = body["data"]["id"].as_i64().unwrap();
        create_course(&app, "Figma", "30").await;

        let uri = format!("/api/course?category_id={}", category_id);
        let (_, body) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"][0]["category_id"], category_id);

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/course",
            Some(json!({ "course_name": "Go", "price": "1", "created_by": 1, "category_id": 404 })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let category_uri = format!("/api/category/{}", category_id);
        let (status, body) = send(
            &app,
            Method::PUT,
            &category_uri,
            Some(json!({ "category_name": "软件开发" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["category_name"], "软件开发");

        let (status, _) = send(&app, Method::DELETE, &category_uri, None).await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = send(&app, Method::GET, &category_uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (_, body) = send(&app, Method::GET, &format!("/api/course/{}", course_id), None).await;
        assert_eq!(body["data"]["category_id"], Value::Null);
    }

    #[tokio::test]
    async fn test_review_flow() {
        let app = app().await;
        let course_id = create_course(&app, "Rust Basics", "49.99").await;

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/review",
            Some(json!({ "course_id": course_id, "user_id": 7, "rating": 4, "comment": "讲得很清楚" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let review_id = body["data"]["id"].as_i64().unwrap();
        assert_eq!(body["data"]["rating"], 4);

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/review",
            Some(json!({ "course_id": 404, "user_id": 7, "rating": 4, "comment": "?" })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let review_uri = format!("/api/review/{}", review_id);
        let (status, body) = send(&app, Method::PATCH, &review_uri, Some(json!({ "rating": 5 }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["rating"], 5);
        assert_eq!(body["data"]["comment"], "讲得很清楚");

        let list_uri = format!("/api/review?course_id={}", course_id);
        let (_, body) = send(&app, Method::GET, &list_uri, None).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);

        // 删除课程时评价一并删除
        send(&app, Method::DELETE, &format!("/api/course/{}", course_id), None).await;
        let (status, _) = send(&app, Method::GET, &review_uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
