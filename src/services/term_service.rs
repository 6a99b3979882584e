//! 词条写入路径
//!
//! 所有 INSERT / UPDATE 都经过这里，search_text 在写入同一条语句里由字段重新生成。

use chrono::{DateTime, Utc};
use sqlx::{Sqlite, SqlitePool};

use crate::error::{AppError, AppResult};
use crate::models::term::{NewTerm, Term};
use crate::services::category_service::find_category;
use crate::services::query_service::TERM_COLUMNS;
use crate::services::search_text::derive_search_text;

pub(crate) async fn insert_term<'e, E>(
    executor: E,
    term: &NewTerm,
    now: DateTime<Utc>,
) -> Result<Term, sqlx::Error>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let search_text = derive_search_text(term);
    sqlx::query_as::<_, Term>(&format!(
        r#"
        INSERT INTO terms (
            chinese_simplified, chinese_traditional, pinyin, english_term, english_aliases,
            definition_en, definition_zh, etymology, clinical_notes, category_id, subcategory,
            source, who_standard, reliability_score, created_at, updated_at, search_text
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING {}
        "#,
        TERM_COLUMNS
    ))
    .bind(term.chinese_simplified.as_str())
    .bind(term.chinese_traditional.as_deref())
    .bind(term.pinyin.as_deref())
    .bind(term.english_term.as_str())
    .bind(term.english_aliases.as_deref())
    .bind(term.definition_en.as_deref())
    .bind(term.definition_zh.as_deref())
    .bind(term.etymology.as_deref())
    .bind(term.clinical_notes.as_deref())
    .bind(term.category_id)
    .bind(term.subcategory.as_deref())
    .bind(term.source.as_deref())
    .bind(term.who_standard)
    .bind(term.reliability_score)
    .bind(now)
    .bind(now)
    .bind(search_text)
    .fetch_one(executor)
    .await
}

async fn ensure_category(pool: &SqlitePool, category_id: Option<i64>) -> AppResult<()> {
    if let Some(id) = category_id {
        if find_category(pool, id).await?.is_none() {
            return Err(AppError::validation(format!("category {} does not exist", id)));
        }
    }
    Ok(())
}

/// 1. 新建词条
pub async fn create_term(pool: &SqlitePool, term: &NewTerm) -> AppResult<Term> {
    term.validate()?;
    ensure_category(pool, term.category_id).await?;

    let created = insert_term(pool, term, Utc::now()).await?;
    tracing::info!(
        ">>> 新建词条: id={}, {} / {}",
        created.id,
        created.chinese_simplified,
        created.english_term
    );
    Ok(created)
}

/// 2. 整体更新词条，刷新 updated_at 与 search_text
pub async fn update_term(pool: &SqlitePool, id: i64, term: &NewTerm) -> AppResult<Term> {
    term.validate()?;
    ensure_category(pool, term.category_id).await?;

    let search_text = derive_search_text(term);
    let updated = sqlx::query_as::<_, Term>(&format!(
        r#"
        UPDATE terms
        SET chinese_simplified = ?, chinese_traditional = ?, pinyin = ?, english_term = ?,
            english_aliases = ?, definition_en = ?, definition_zh = ?, etymology = ?,
            clinical_notes = ?, category_id = ?, subcategory = ?, source = ?,
            who_standard = ?, reliability_score = ?, updated_at = ?, search_text = ?
        WHERE id = ?
        RETURNING {}
        "#,
        TERM_COLUMNS
    ))
    .bind(term.chinese_simplified.as_str())
    .bind(term.chinese_traditional.as_deref())
    .bind(term.pinyin.as_deref())
    .bind(term.english_term.as_str())
    .bind(term.english_aliases.as_deref())
    .bind(term.definition_en.as_deref())
    .bind(term.definition_zh.as_deref())
    .bind(term.etymology.as_deref())
    .bind(term.clinical_notes.as_deref())
    .bind(term.category_id)
    .bind(term.subcategory.as_deref())
    .bind(term.source.as_deref())
    .bind(term.who_standard)
    .bind(term.reliability_score)
    .bind(Utc::now())
    .bind(search_text)
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(AppError::NotFound("term"))?;

    tracing::info!(">>> 更新词条: id={}", updated.id);
    Ok(updated)
}
