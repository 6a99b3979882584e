use serde::Serialize;
use sqlx::SqlitePool;

use crate::error::AppResult;
use crate::models::category::Category;
use crate::models::term::TermSummary;
use crate::services::query_service::SUMMARY_COLUMNS;

pub const RECENT_TERMS_LIMIT: i64 = 10;

#[derive(Debug, Serialize)]
pub struct Overview {
    pub total_terms: i64,
    pub categories: Vec<Category>,
    pub recent_terms: Vec<TermSummary>,
}

pub async fn list_categories(pool: &SqlitePool) -> AppResult<Vec<Category>> {
    let categories = sqlx::query_as::<_, Category>(
        "SELECT id, name_en, name_zh, description FROM categories ORDER BY id ASC",
    )
    .fetch_all(pool)
    .await?;
    Ok(categories)
}

pub async fn find_category(pool: &SqlitePool, id: i64) -> AppResult<Option<Category>> {
    let category = sqlx::query_as::<_, Category>(
        "SELECT id, name_en, name_zh, description FROM categories WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(category)
}

/// 首页数据：词条总数、全部分类、最近新增的 10 条
pub async fn overview(pool: &SqlitePool) -> AppResult<Overview> {
    let total_terms: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM terms")
        .fetch_one(pool)
        .await?;

    let recent_terms = sqlx::query_as::<_, TermSummary>(&format!(
        "SELECT {} FROM terms ORDER BY created_at DESC, id DESC LIMIT ?",
        SUMMARY_COLUMNS
    ))
    .bind(RECENT_TERMS_LIMIT)
    .fetch_all(pool)
    .await?;

    Ok(Overview {
        total_terms,
        categories: list_categories(pool).await?,
        recent_terms,
    })
}
