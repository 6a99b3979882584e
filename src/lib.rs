use axum::{
    routing::{get, post},
    Router,
};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

// 声明子模块
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

use handlers::{category_handler, search_handler, suggestion_handler, term_handler};

// 全局状态，Handler 通过它拿到数据库连接池
pub struct AppState {
    pub db: SqlitePool,
}

/// 构建全部路由
pub fn build_router(state: Arc<AppState>) -> Router {
    // 跨域 (CORS) - 允许所有来源，生产环境需收紧
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(category_handler::overview))
        // 检索与浏览
        .route("/search", get(search_handler::search))
        .route("/browse", get(search_handler::browse))
        .route("/api/search", get(search_handler::api_search))
        // 词条
        .route("/term/:id", get(term_handler::term_detail))
        .route("/api/term", post(term_handler::create_term))
        .route(
            "/api/term/:id",
            get(term_handler::api_term).put(term_handler::update_term),
        )
        .route("/api/categories", get(category_handler::list_categories))
        // 用户建议
        .route("/contribute", post(suggestion_handler::contribute))
        .route("/api/suggestions", get(suggestion_handler::list_suggestions))
        // 中间件：日志记录和跨域
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
