use axum::{extract::State, http::StatusCode, response::IntoResponse, Form, Json};
use std::sync::Arc;

use crate::error::AppResult;
use crate::models::suggestion::{ContributeForm, NewSuggestion, Suggestion};
use crate::services::suggestion_service;
use crate::AppState;

/// 用户提交新增/纠错建议 POST /contribute
pub async fn contribute(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ContributeForm>,
) -> AppResult<impl IntoResponse> {
    let suggestion = NewSuggestion::try_from(form)?;
    let saved = suggestion_service::submit_suggestion(&state.db, &suggestion).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

/// 管理员查看待审核建议 GET /api/suggestions
pub async fn list_suggestions(State(state): State<Arc<AppState>>) -> AppResult<Json<Vec<Suggestion>>> {
    Ok(Json(suggestion_service::list_pending(&state.db).await?))
}
