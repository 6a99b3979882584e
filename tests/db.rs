use tcm_termbase::db;

mod common;

#[tokio::test]
async fn test_creates_tables_and_migrations_are_idempotent() {
    let test_db = common::TestDb::new().await;
    let pool = test_db.pool();

    db::run_migrations(&pool)
        .await
        .expect("second migration run should be a no-op");

    let tables: Vec<String> = sqlx::query_scalar(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('categories', 'terms', 'suggestions') ORDER BY name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();
    assert_eq!(tables, vec!["categories", "suggestions", "terms"]);
}

#[tokio::test]
async fn removing_a_category_leaves_its_terms_uncategorized() {
    let test_db = common::TestDb::new().await;
    let category = test_db.add_category("Pathology", "病理").await;
    let mut term = common::term("痰湿", "tán shī", "Phlegm-Dampness");
    term.category_id = Some(category.id);
    let term = test_db.add_term(term).await;

    sqlx::query("DELETE FROM categories WHERE id = ?")
        .bind(category.id)
        .execute(&test_db.pool())
        .await
        .expect("deleting a category with terms should succeed");

    let category_id: Option<i64> = sqlx::query_scalar("SELECT category_id FROM terms WHERE id = ?")
        .bind(term.id)
        .fetch_one(&test_db.pool())
        .await
        .unwrap();
    assert_eq!(category_id, None);
}

#[tokio::test]
async fn blank_category_names_violate_constraints() {
    let test_db = common::TestDb::new().await;
    let result = sqlx::query("INSERT INTO categories (name_en, name_zh) VALUES ('  ', '基础理论')")
        .execute(&test_db.pool())
        .await;
    assert!(result.is_err());
}
