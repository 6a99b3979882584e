use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::AppError;

pub const MIN_RELIABILITY: i64 = 1;
pub const MAX_RELIABILITY: i64 = 5;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Term {
    pub id: i64,
    pub chinese_simplified: String,
    pub chinese_traditional: Option<String>,
    pub pinyin: Option<String>,
    pub english_term: String,
    pub english_aliases: Option<String>, // 逗号分隔，如 "Chi, Ki, Vital Energy"
    pub definition_en: Option<String>,
    pub definition_zh: Option<String>,
    pub etymology: Option<String>,
    pub clinical_notes: Option<String>,
    pub category_id: Option<i64>,
    pub subcategory: Option<String>,
    pub source: Option<String>,
    pub who_standard: bool,
    pub reliability_score: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing)]
    pub search_text: String,
}

/// 新建或整体更新词条时提交的字段 (search_text 由写入路径生成，不接受外部传入)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct NewTerm {
    pub chinese_simplified: String,
    #[serde(default)]
    pub chinese_traditional: Option<String>,
    #[serde(default)]
    pub pinyin: Option<String>,
    pub english_term: String,
    #[serde(default)]
    pub english_aliases: Option<String>,
    #[serde(default)]
    pub definition_en: Option<String>,
    #[serde(default)]
    pub definition_zh: Option<String>,
    #[serde(default)]
    pub etymology: Option<String>,
    #[serde(default)]
    pub clinical_notes: Option<String>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub who_standard: bool,
    #[serde(default = "default_reliability")]
    pub reliability_score: i64,
}

fn default_reliability() -> i64 {
    3
}

impl NewTerm {
    pub fn new(chinese_simplified: impl Into<String>, english_term: impl Into<String>) -> Self {
        Self {
            chinese_simplified: chinese_simplified.into(),
            chinese_traditional: None,
            pinyin: None,
            english_term: english_term.into(),
            english_aliases: None,
            definition_en: None,
            definition_zh: None,
            etymology: None,
            clinical_notes: None,
            category_id: None,
            subcategory: None,
            source: None,
            who_standard: false,
            reliability_score: default_reliability(),
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.chinese_simplified.trim().is_empty() {
            return Err(AppError::validation("chinese_simplified is required"));
        }
        if self.english_term.trim().is_empty() {
            return Err(AppError::validation("english_term is required"));
        }
        if !(MIN_RELIABILITY..=MAX_RELIABILITY).contains(&self.reliability_score) {
            return Err(AppError::validation(format!(
                "reliability_score must be between {} and {}",
                MIN_RELIABILITY, MAX_RELIABILITY
            )));
        }
        Ok(())
    }
}

/// 轻量结果，用于联想搜索、相关词条和首页
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct TermSummary {
    pub id: i64,
    pub chinese_simplified: String,
    pub pinyin: Option<String>,
    pub english_term: String,
}

/// /api/term/:id 的输出，附带分类英文名
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TermView {
    pub id: i64,
    pub chinese_simplified: String,
    pub chinese_traditional: Option<String>,
    pub pinyin: Option<String>,
    pub english_term: String,
    pub english_aliases: Option<String>,
    pub definition_en: Option<String>,
    pub definition_zh: Option<String>,
    pub etymology: Option<String>,
    pub clinical_notes: Option<String>,
    pub category: Option<String>,
    pub source: Option<String>,
    pub who_standard: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_blank_required_fields() {
        let term = NewTerm::new("  ", "Qi");
        assert!(matches!(term.validate(), Err(AppError::Validation(_))));

        let term = NewTerm::new("气", "");
        assert!(matches!(term.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn validate_checks_reliability_range() {
        let mut term = NewTerm::new("气", "Qi");
        assert!(term.validate().is_ok());

        term.reliability_score = 0;
        assert!(term.validate().is_err());
        term.reliability_score = 6;
        assert!(term.validate().is_err());
        term.reliability_score = 5;
        assert!(term.validate().is_ok());
    }

    #[test]
    fn deserialize_fills_defaults() {
        let term: NewTerm =
            serde_json::from_str(r#"{"chinese_simplified":"气","english_term":"Qi"}"#).unwrap();
        assert_eq!(term.reliability_score, 3);
        assert!(!term.who_standard);
        assert_eq!(term.category_id, None);
    }
}
