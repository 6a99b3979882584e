//! 词条检索
//!
//! 文本匹配是对若干字段做不区分大小写的子串匹配 (`LIKE '%q%'`)，不分词、不打分。
//! search_text 在写入时已按 Unicode 规则转成小写，查询串同样先转小写，
//! 所以带声调的拼音大写形式也能经由 search_text 命中。

use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::error::{AppError, AppResult};
use crate::models::params::{ApiSearchInput, BrowseInput, SearchInput};
use crate::models::term::{Term, TermSummary, TermView};
use crate::services::pagination::{PageRequest, Paginated};

pub const SEARCH_PAGE_SIZE: u32 = 20;
pub const BROWSE_PAGE_SIZE: u32 = 25;
pub const RELATED_TERMS_LIMIT: i64 = 5;
/// 联想搜索的最短查询长度 (按字符计)
pub const API_MIN_QUERY_CHARS: usize = 2;

pub(crate) const TERM_COLUMNS: &str = "id, chinese_simplified, chinese_traditional, pinyin, \
     english_term, english_aliases, definition_en, definition_zh, etymology, clinical_notes, \
     category_id, subcategory, source, who_standard, reliability_score, created_at, updated_at, \
     search_text";

pub(crate) const SUMMARY_COLUMNS: &str = "id, chinese_simplified, pinyin, english_term";

/// 全文搜索和浏览匹配的字段
const SEARCH_COLUMNS: [&str; 6] = [
    "search_text",
    "chinese_simplified",
    "chinese_traditional",
    "pinyin",
    "english_term",
    "english_aliases",
];

/// 联想搜索只看名称类字段，不含 search_text
const API_SEARCH_COLUMNS: [&str; 4] = [
    "chinese_simplified",
    "chinese_traditional",
    "pinyin",
    "english_term",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermOrder {
    /// 按 id 升序 (搜索)
    Id,
    /// 按拼音字节序升序，同拼音按 id (浏览)
    Pinyin,
}

impl TermOrder {
    fn sql(&self) -> &'static str {
        match self {
            TermOrder::Id => " ORDER BY id ASC",
            TermOrder::Pinyin => " ORDER BY pinyin ASC, id ASC",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermFilter {
    /// 空串表示不过滤文本
    pub query: String,
    pub category_id: Option<i64>,
}

/// 把查询串转成 LIKE 模式，% _ \ 按字面匹配
pub fn like_pattern(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len() + 2);
    escaped.push('%');
    for ch in query.to_lowercase().chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

fn push_text_match(builder: &mut QueryBuilder<'_, Sqlite>, query: &str, columns: &[&str]) {
    let pattern = like_pattern(query);
    builder.push(" AND (");
    for (i, column) in columns.iter().enumerate() {
        if i > 0 {
            builder.push(" OR ");
        }
        builder
            .push(column)
            .push(" LIKE ")
            .push_bind(pattern.clone())
            .push(r" ESCAPE '\'");
    }
    builder.push(")");
}

fn push_filter(builder: &mut QueryBuilder<'_, Sqlite>, filter: &TermFilter) {
    builder.push(" WHERE 1 = 1");
    if !filter.query.is_empty() {
        push_text_match(builder, &filter.query, &SEARCH_COLUMNS);
    }
    if let Some(category_id) = filter.category_id {
        builder.push(" AND category_id = ").push_bind(category_id);
    }
}

/// 核心查询：文本过滤 + 分类过滤 + 排序 + 分页
pub async fn find_terms(
    pool: &SqlitePool,
    filter: &TermFilter,
    order: TermOrder,
    request: PageRequest,
) -> AppResult<Paginated<Term>> {
    let mut count = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM terms");
    push_filter(&mut count, filter);
    let total: i64 = count.build_query_scalar().fetch_one(pool).await?;

    let mut select = QueryBuilder::<Sqlite>::new(format!("SELECT {} FROM terms", TERM_COLUMNS));
    push_filter(&mut select, filter);
    select
        .push(order.sql())
        .push(" LIMIT ")
        .push_bind(request.limit())
        .push(" OFFSET ")
        .push_bind(request.offset());

    let items = select.build_query_as::<Term>().fetch_all(pool).await?;

    Ok(Paginated::new(items, total.max(0) as u64, request))
}

/// 1. 全文搜索 (每页 20 条，按 id)
pub async fn search_terms(pool: &SqlitePool, input: &SearchInput) -> AppResult<Paginated<Term>> {
    let filter = TermFilter {
        query: input.query.clone(),
        category_id: input.category_id,
    };
    find_terms(
        pool,
        &filter,
        TermOrder::Id,
        PageRequest::new(input.page, SEARCH_PAGE_SIZE),
    )
    .await
}

/// 2. 分类浏览 (每页 25 条，按拼音)
pub async fn browse_terms(pool: &SqlitePool, input: &BrowseInput) -> AppResult<Paginated<Term>> {
    let filter = TermFilter {
        query: String::new(),
        category_id: input.category_id,
    };
    find_terms(
        pool,
        &filter,
        TermOrder::Pinyin,
        PageRequest::new(input.page, BROWSE_PAGE_SIZE),
    )
    .await
}

/// 3. 联想搜索，查询串不足 2 个字符时直接返回空
pub async fn api_search(pool: &SqlitePool, input: &ApiSearchInput) -> AppResult<Vec<TermSummary>> {
    if input.query.chars().count() < API_MIN_QUERY_CHARS {
        return Ok(Vec::new());
    }

    let mut select =
        QueryBuilder::<Sqlite>::new(format!("SELECT {} FROM terms WHERE 1 = 1", SUMMARY_COLUMNS));
    push_text_match(&mut select, &input.query, &API_SEARCH_COLUMNS);
    select
        .push(" ORDER BY id ASC LIMIT ")
        .push_bind(input.limit as i64);

    let terms = select
        .build_query_as::<TermSummary>()
        .fetch_all(pool)
        .await?;
    Ok(terms)
}

pub async fn get_term(pool: &SqlitePool, id: i64) -> AppResult<Term> {
    sqlx::query_as::<_, Term>(&format!("SELECT {} FROM terms WHERE id = ?", TERM_COLUMNS))
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(AppError::NotFound("term"))
}

pub async fn get_term_view(pool: &SqlitePool, id: i64) -> AppResult<TermView> {
    sqlx::query_as::<_, TermView>(
        r#"
        SELECT t.id, t.chinese_simplified, t.chinese_traditional, t.pinyin,
               t.english_term, t.english_aliases, t.definition_en, t.definition_zh,
               t.etymology, t.clinical_notes, c.name_en AS category, t.source, t.who_standard
        FROM terms t
        LEFT JOIN categories c ON c.id = t.category_id
        WHERE t.id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(AppError::NotFound("term"))
}

/// 同分类的其它词条，最多 5 条。未分类词条与其它未分类词条互为相关
pub async fn related_terms(pool: &SqlitePool, term: &Term) -> AppResult<Vec<TermSummary>> {
    let related = sqlx::query_as::<_, TermSummary>(&format!(
        "SELECT {} FROM terms WHERE category_id IS ? AND id != ? ORDER BY id ASC LIMIT ?",
        SUMMARY_COLUMNS
    ))
    .bind(term.category_id)
    .bind(term.id)
    .bind(RELATED_TERMS_LIMIT)
    .fetch_all(pool)
    .await?;
    Ok(related)
}
