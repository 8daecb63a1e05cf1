//! HTTP Server
//!
//! Axum HTTP 服务器启动和配置

use std::sync::Arc;
use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::Router;
use http::header::CONTENT_TYPE;
use http::Method;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::middleware::error_logging_middleware;
use super::routes::create_routes;
use super::state::AppState;
use crate::config::ServerConfig;

/// 请求体上限，接口只接收小 JSON
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// 组装中间件后的完整 Router
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    create_routes()
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(middleware::from_fn(error_logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// HTTP 服务器
pub struct HttpServer {
    addr: String,
    state: Arc<AppState>,
}

impl HttpServer {
    pub fn new(config: &ServerConfig, state: AppState) -> Self {
        Self {
            addr: config.addr(),
            state: Arc::new(state),
        }
    }

    /// 启动服务器，shutdown_signal 完成后停止接收新连接
    pub async fn run_with_shutdown<F>(self, shutdown_signal: F) -> Result<(), std::io::Error>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(&self.addr).await?;
        info!(
            addr = %listener.local_addr()?,
            max_body_bytes = MAX_BODY_BYTES,
            "HTTP server listening"
        );

        axum::serve(listener, build_router(self.state))
            .with_graceful_shutdown(shutdown_signal)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use http::{Request, StatusCode};
    use tower::util::ServiceExt;

    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig, SqliteCategoryRepository,
        SqliteCollectionRepository, SqliteCourseRepository, SqliteReviewRepository,
    };

    async fn router() -> Router {
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
        build_router(Arc::new(state))
    }

    #[tokio::test]
    async fn test_oversized_body_is_rejected() {
        let router = router().await;
        let description = "x".repeat(MAX_BODY_BYTES);
        let body = serde_json::json!({
            "course_name": "Rust Basics",
            "description": description,
            "price": "10",
            "created_by": 1,
        });

        let response = router
            .clone()
            .oneshot(
                Request::post("/api/course")
                    .header(CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let small = serde_json::json!({ "course_name": "Rust Basics", "price": "10", "created_by": 1 });
        let response = router
            .oneshot(
                Request::post("/api/course")
                    .header(CONTENT_TYPE, "application/json")
                    .body(Body::from(small.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_cors_preflight_allows_patch() {
        let response = router()
            .await
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/course/1")
                    .header("origin", "http://localhost:3000")
                    .header("access-control-request-method", "PATCH")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let methods = response
            .headers()
            .get("access-control-allow-methods")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(methods.contains("PATCH"));
    }
}
