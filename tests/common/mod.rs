//! Helpers for integration tests.
#![allow(dead_code)]

use sqlx::SqlitePool;
use tempfile::NamedTempFile;

use tcm_termbase::db;
use tcm_termbase::models::category::Category;
use tcm_termbase::models::term::{NewTerm, Term};
use tcm_termbase::services::term_service;

/// Temporary database used in integration tests.
pub struct TestDb {
    _tempfile: NamedTempFile,
    pool: SqlitePool,
}

impl TestDb {
    pub async fn new() -> Self {
        let tempfile = NamedTempFile::new().expect("Failed to create temp file");
        let url = format!("sqlite://{}", tempfile.path().display());
        let pool = db::connect(&url, 2)
            .await
            .expect("Failed to establish SQLite connection pool.");
        db::run_migrations(&pool).await.expect("Migrations failed");
        TestDb {
            _tempfile: tempfile,
            pool,
        }
    }

    pub fn pool(&self) -> SqlitePool {
        self.pool.clone()
    }

    pub async fn add_category(&self, name_en: &str, name_zh: &str) -> Category {
        sqlx::query_as::<_, Category>(
            "INSERT INTO categories (name_en, name_zh) VALUES (?, ?) RETURNING id, name_en, name_zh, description",
        )
        .bind(name_en)
        .bind(name_zh)
        .fetch_one(&self.pool)
        .await
        .expect("should create category")
    }

    pub async fn add_term(&self, term: NewTerm) -> Term {
        term_service::create_term(&self.pool, &term)
            .await
            .expect("should create term")
    }
}

pub fn term(chinese: &str, pinyin: &str, english: &str) -> NewTerm {
    let mut term = NewTerm::new(chinese, english);
    term.pinyin = Some(pinyin.to_string());
    term
}

/// 气 / 气虚 / 血 三条词条
pub async fn qi_fixture(db: &TestDb) -> (Term, Term, Term) {
    let mut qi = term("气", "qì", "Qi");
    qi.chinese_traditional = Some("氣".into());
    qi.english_aliases = Some("Chi, Ki, Vital Energy, Life Force".into());
    let qi = db.add_term(qi).await;

    let deficiency = db.add_term(term("气虚", "qì xū", "Qi Deficiency")).await;

    let mut blood = term("血", "xuè", "Blood");
    blood.english_aliases = Some("Xue".into());
    let blood = db.add_term(blood).await;

    (qi, deficiency, blood)
}
