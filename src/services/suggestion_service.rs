use chrono::Utc;
use sqlx::SqlitePool;

use crate::error::AppResult;
use crate::models::suggestion::{NewSuggestion, Suggestion, SuggestionStatus};
use crate::services::query_service::get_term;

const SUGGESTION_COLUMNS: &str = "id, term_id, suggestion_type, content, submitter_email, \
     submitter_name, status, created_at";

/// 保存用户提交的建议，状态固定为 pending。
///
/// 带 term_id 时先确认词条存在，不存在直接返回 NotFound，不写入悬空的建议。
/// 没有 term_id 的建议 (比如新词条) 不做这项检查。
pub async fn submit_suggestion(pool: &SqlitePool, suggestion: &NewSuggestion) -> AppResult<Suggestion> {
    if let Some(term_id) = suggestion.term_id {
        get_term(pool, term_id).await?;
    }

    let saved = sqlx::query_as::<_, Suggestion>(&format!(
        r#"
        INSERT INTO suggestions (term_id, suggestion_type, content, submitter_email, submitter_name, status, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        RETURNING {}
        "#,
        SUGGESTION_COLUMNS
    ))
    .bind(suggestion.term_id)
    .bind(suggestion.suggestion_type.map(|t| t.as_str()))
    .bind(suggestion.content.as_str())
    .bind(suggestion.submitter_email.as_deref())
    .bind(suggestion.submitter_name.as_deref())
    .bind(SuggestionStatus::Pending.as_str())
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    tracing::info!(
        ">>> 收到用户建议: id={}, type={:?}, term_id={:?}",
        saved.id,
        saved.suggestion_type,
        saved.term_id
    );
    Ok(saved)
}

/// 待审核建议，最新的在前
pub async fn list_pending(pool: &SqlitePool) -> AppResult<Vec<Suggestion>> {
    let suggestions = sqlx::query_as::<_, Suggestion>(&format!(
        "SELECT {} FROM suggestions WHERE status = ? ORDER BY created_at DESC, id DESC",
        SUGGESTION_COLUMNS
    ))
    .bind(SuggestionStatus::Pending.as_str())
    .fetch_all(pool)
    .await?;
    Ok(suggestions)
}
