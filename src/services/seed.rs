//! 初始词库
//!
//! 词库随二进制一起编译 (data/seed.json)，在启动阶段写入一次。
//! 已有词条时什么也不做，重复调用是安全的。

use std::collections::HashMap;

use chrono::Utc;
use once_cell::sync::Lazy;
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::error::AppResult;
use crate::models::category::NewCategory;
use crate::models::term::NewTerm;
use crate::services::term_service::insert_term;

#[derive(Debug, Deserialize)]
pub struct SeedTerm {
    /// 所属分类的英文名
    pub category: String,
    #[serde(flatten)]
    pub term: NewTerm,
}

#[derive(Debug, Deserialize)]
pub struct SeedCatalog {
    pub categories: Vec<NewCategory>,
    pub terms: Vec<SeedTerm>,
}

pub static SEED_CATALOG: Lazy<SeedCatalog> = Lazy::new(|| {
    serde_json::from_str(include_str!("../../data/seed.json"))
        .expect("data/seed.json must be a valid seed catalog")
});

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub categories: usize,
    pub terms: usize,
}

pub async fn seed_if_empty(pool: &SqlitePool) -> AppResult<SeedReport> {
    seed_catalog(pool, &SEED_CATALOG).await
}

/// 在一个事务里写入分类和词条。分类按英文名复用已有记录
pub async fn seed_catalog(pool: &SqlitePool, catalog: &SeedCatalog) -> AppResult<SeedReport> {
    let mut tx = pool.begin().await?;

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM terms")
        .fetch_one(&mut *tx)
        .await?;
    if existing > 0 {
        tracing::info!("词库已有 {} 条词条，跳过初始化", existing);
        return Ok(SeedReport::default());
    }

    let mut report = SeedReport::default();
    let mut category_ids: HashMap<&str, i64> = HashMap::new();

    for category in &catalog.categories {
        let found: Option<i64> = sqlx::query_scalar("SELECT id FROM categories WHERE name_en = ?")
            .bind(category.name_en.as_str())
            .fetch_optional(&mut *tx)
            .await?;

        let id = match found {
            Some(id) => id,
            None => {
                report.categories += 1;
                sqlx::query_scalar(
                    "INSERT INTO categories (name_en, name_zh, description) VALUES (?, ?, ?) RETURNING id",
                )
                .bind(category.name_en.as_str())
                .bind(category.name_zh.as_str())
                .bind(category.description.as_deref())
                .fetch_one(&mut *tx)
                .await?
            }
        };
        category_ids.insert(category.name_en.as_str(), id);
    }

    let now = Utc::now();
    for seed in &catalog.terms {
        let mut term = seed.term.clone();
        term.category_id = category_ids.get(seed.category.as_str()).copied();
        if term.category_id.is_none() {
            tracing::warn!(
                "词条 {} 的分类 {} 不存在，按未分类写入",
                term.chinese_simplified,
                seed.category
            );
        }
        insert_term(&mut *tx, &term, now).await?;
        report.terms += 1;
    }

    tx.commit().await?;
    tracing::info!(
        "🌱 初始词库写入完成: {} 个分类, {} 条词条",
        report.categories,
        report.terms
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn embedded_catalog_parses() {
        assert_eq!(SEED_CATALOG.categories.len(), 8);
        assert_eq!(SEED_CATALOG.terms.len(), 30);
    }

    #[test]
    fn every_seed_term_names_a_known_category() {
        let names: HashSet<&str> = SEED_CATALOG
            .categories
            .iter()
            .map(|c| c.name_en.as_str())
            .collect();
        for seed in &SEED_CATALOG.terms {
            assert!(names.contains(seed.category.as_str()), "{}", seed.category);
            assert!(seed.term.validate().is_ok(), "{}", seed.term.english_term);
        }
    }
}
