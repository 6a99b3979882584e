use axum::{extract::State, Json};
use std::sync::Arc;

use crate::error::AppResult;
use crate::models::category::Category;
use crate::services::category_service::{self, Overview};
use crate::AppState;

/// 首页概览 GET /
pub async fn overview(State(state): State<Arc<AppState>>) -> AppResult<Json<Overview>> {
    Ok(Json(category_service::overview(&state.db).await?))
}

/// 分类列表 GET /api/categories
pub async fn list_categories(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<Category>>> {
    Ok(Json(category_service::list_categories(&state.db).await?))
}
