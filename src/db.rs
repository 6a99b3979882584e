use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// 建立 SQLite 连接池，数据库文件不存在时自动创建
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// 建表 (幂等)
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS categories (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name_en TEXT NOT NULL CHECK (length(trim(name_en)) > 0),
            name_zh TEXT NOT NULL CHECK (length(trim(name_zh)) > 0),
            description TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    // 分类被删除时词条保留，category_id 置空
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS terms (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            chinese_simplified TEXT NOT NULL,
            chinese_traditional TEXT,
            pinyin TEXT,
            english_term TEXT NOT NULL,
            english_aliases TEXT,
            definition_en TEXT,
            definition_zh TEXT,
            etymology TEXT,
            clinical_notes TEXT,
            category_id INTEGER REFERENCES categories(id) ON DELETE SET NULL,
            subcategory TEXT,
            source TEXT,
            who_standard INTEGER NOT NULL DEFAULT 0,
            reliability_score INTEGER NOT NULL DEFAULT 3
                CHECK (reliability_score BETWEEN 1 AND 5),
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            search_text TEXT NOT NULL DEFAULT ''
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS suggestions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            term_id INTEGER REFERENCES terms(id) ON DELETE SET NULL,
            suggestion_type TEXT,
            content TEXT NOT NULL,
            submitter_email TEXT,
            submitter_name TEXT,
            status TEXT NOT NULL DEFAULT 'pending',
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    for ddl in [
        "CREATE INDEX IF NOT EXISTS idx_terms_chinese_simplified ON terms (chinese_simplified)",
        "CREATE INDEX IF NOT EXISTS idx_terms_chinese_traditional ON terms (chinese_traditional)",
        "CREATE INDEX IF NOT EXISTS idx_terms_pinyin ON terms (pinyin)",
        "CREATE INDEX IF NOT EXISTS idx_terms_english_term ON terms (english_term)",
        "CREATE INDEX IF NOT EXISTS idx_terms_category_id ON terms (category_id)",
        "CREATE INDEX IF NOT EXISTS idx_suggestions_status ON suggestions (status)",
    ] {
        sqlx::query(ddl).execute(pool).await?;
    }

    Ok(())
}
