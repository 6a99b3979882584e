use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::error::AppResult;
use crate::models::category::Category;
use crate::models::term::{NewTerm, Term, TermSummary, TermView};
use crate::services::{category_service, query_service, term_service};
use crate::AppState;

#[derive(Serialize)]
pub struct TermDetailResponse {
    pub term: Term,
    pub category: Option<Category>,
    pub related_terms: Vec<TermSummary>,
}

/// 1. 词条详情 (含同分类相关词条) GET /term/:id
pub async fn term_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> AppResult<Json<TermDetailResponse>> {
    let term = query_service::get_term(&state.db, id).await?;
    let category = match term.category_id {
        Some(category_id) => category_service::find_category(&state.db, category_id).await?,
        None => None,
    };
    let related_terms = query_service::related_terms(&state.db, &term).await?;

    Ok(Json(TermDetailResponse {
        term,
        category,
        related_terms,
    }))
}

/// 2. 词条 JSON GET /api/term/:id
pub async fn api_term(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> AppResult<Json<TermView>> {
    let view = query_service::get_term_view(&state.db, id).await?;
    Ok(Json(view))
}

/// 3. 新建词条 POST /api/term
pub async fn create_term(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewTerm>,
) -> AppResult<impl IntoResponse> {
    let term = term_service::create_term(&state.db, &payload).await?;
    Ok((StatusCode::CREATED, Json(term)))
}

/// 4. 更新词条 PUT /api/term/:id
pub async fn update_term(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(payload): Json<NewTerm>,
) -> AppResult<Json<Term>> {
    let term = term_service::update_term(&state.db, id, &payload).await?;
    Ok(Json(term))
}
