//! Course Market - 在线课程市场后端
//!
//! 架构:
//! - Domain: collection/, catalog/, review/ (Bounded Contexts)
//! - Application: commands, queries, ports
//! - Infrastructure: http, persistence

use std::sync::Arc;

use course_market::config::{load_config, print_config, LogConfig};
use course_market::infrastructure::http::{AppState, HttpServer};
use course_market::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteCategoryRepository,
    SqliteCollectionRepository, SqliteCourseRepository, SqliteReviewRepository,
};
use tracing_subscriber::EnvFilter;

/// 初始化日志，RUST_LOG 优先于配置
fn init_tracing(log: &LogConfig) {
    let log_filter = format!(
        "{},course_market={},tower_http=debug",
        log.level, log.level
    );
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(false)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Course Market - 在线课程市场后端");
    print_config(&config);

    // 确保数据目录存在
    if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    // 初始化数据库
    let db_config = DatabaseConfig {
        database_url: config.database.database_url(),
        max_connections: config.database.max_connections,
    };
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;

    // 创建 Repository 适配器，课程仓储同时充当价格目录
    let collection_repo = Arc::new(SqliteCollectionRepository::new(pool.clone()));
    let course_repo = Arc::new(SqliteCourseRepository::new(pool.clone()));
    let category_repo = Arc::new(SqliteCategoryRepository::new(pool.clone()));
    let review_repo = Arc::new(SqliteReviewRepository::new(pool));

    let state = AppState::new(
        collection_repo,
        course_repo.clone(),
        course_repo,
        category_repo,
        review_repo,
    );

    let server = HttpServer::new(&config.server, state);

    // 启动服务器（带优雅关闭）
    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for ctrl-c: {}", e);
                return;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
