use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;
use std::sync::Arc;

use crate::error::AppResult;
use crate::models::category::Category;
use crate::models::params::{
    ApiSearchInput, ApiSearchParams, BrowseInput, BrowseParams, SearchInput, SearchParams,
};
use crate::models::term::{Term, TermSummary};
use crate::services::category_service;
use crate::services::pagination::{PageRequest, Paginated};
use crate::services::query_service::{self, SEARCH_PAGE_SIZE};
use crate::AppState;

#[derive(Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub category_id: Option<i64>,
    pub results: Paginated<Term>,
    pub categories: Vec<Category>,
}

#[derive(Serialize)]
pub struct BrowseResponse {
    pub category_id: Option<i64>,
    pub current_category: Option<Category>,
    pub results: Paginated<Term>,
    pub categories: Vec<Category>,
}

/// 1. 全文搜索 GET /search?q=&category=&page=
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<SearchResponse>> {
    let input = SearchInput::from(params);
    let categories = category_service::list_categories(&state.db).await?;

    // 没有关键词时不列结果，完整列表由 /browse 提供
    let results = if input.query.is_empty() {
        Paginated::empty(PageRequest::new(input.page, SEARCH_PAGE_SIZE))
    } else {
        query_service::search_terms(&state.db, &input).await?
    };

    tracing::debug!(
        "搜索: q={:?}, category={:?}, page={}, 命中 {} 条",
        input.query,
        input.category_id,
        input.page,
        results.total
    );

    Ok(Json(SearchResponse {
        query: input.query,
        category_id: input.category_id,
        results,
        categories,
    }))
}

/// 2. 分类浏览 GET /browse?category=&page=
pub async fn browse(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BrowseParams>,
) -> AppResult<Json<BrowseResponse>> {
    let input = BrowseInput::from(params);
    let categories = category_service::list_categories(&state.db).await?;
    let current_category = categories
        .iter()
        .find(|c| Some(c.id) == input.category_id)
        .cloned();
    let results = query_service::browse_terms(&state.db, &input).await?;

    Ok(Json(BrowseResponse {
        category_id: input.category_id,
        current_category,
        results,
        categories,
    }))
}

/// 3. 联想搜索 GET /api/search?q=&limit=
pub async fn api_search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ApiSearchParams>,
) -> AppResult<Json<Vec<TermSummary>>> {
    let input = ApiSearchInput::from(params);
    let terms = query_service::api_search(&state.db, &input).await?;
    Ok(Json(terms))
}
