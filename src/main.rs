use anyhow::Context;
use dotenvy::dotenv;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tcm_termbase::config::Config;
use tcm_termbase::services::seed;
use tcm_termbase::{build_router, db, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 加载 .env 环境变量 (RUST_LOG 也可以写在 .env 里)
    dotenv().ok();

    // 2. 初始化日志系统
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    // 3. 初始化数据库连接池并建表
    let pool = db::connect(&config.database_url, config.max_connections)
        .await
        .with_context(|| format!("failed to open database {}", config.database_url))?;
    db::run_migrations(&pool)
        .await
        .context("failed to create tables")?;

    // 4. 写入初始词库 (只在启动时执行一次，已有数据则跳过)
    if config.seed_database {
        seed::seed_if_empty(&pool)
            .await
            .context("failed to seed database")?;
    }

    let shared_state = Arc::new(AppState { db: pool });
    let app = build_router(shared_state);

    // 5. 启动服务
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!("🚀 Server started at http://{}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
