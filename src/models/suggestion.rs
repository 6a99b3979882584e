use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::AppError;
use crate::models::params::lenient_id;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Suggestion {
    pub id: i64,
    pub term_id: Option<i64>,
    pub suggestion_type: Option<String>,
    pub content: String,
    pub submitter_email: Option<String>,
    pub submitter_name: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionType {
    NewTerm,
    Correction,
    Addition,
}

impl SuggestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestionType::NewTerm => "new_term",
            SuggestionType::Correction => "correction",
            SuggestionType::Addition => "addition",
        }
    }
}

impl FromStr for SuggestionType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "new_term" => Ok(SuggestionType::NewTerm),
            "correction" => Ok(SuggestionType::Correction),
            "addition" => Ok(SuggestionType::Addition),
            other => Err(AppError::validation(format!(
                "unknown suggestion_type: {}",
                other
            ))),
        }
    }
}

/// 审核状态，目前没有流程把 pending 改成其它状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl SuggestionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestionStatus::Pending => "pending",
            SuggestionStatus::Approved => "approved",
            SuggestionStatus::Rejected => "rejected",
        }
    }
}

/// POST /contribute 的表单，字段全部按字符串接收再转换
#[derive(Debug, Default, Deserialize)]
pub struct ContributeForm {
    pub term_id: Option<String>,
    pub suggestion_type: Option<String>,
    pub content: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewSuggestion {
    pub term_id: Option<i64>,
    pub suggestion_type: Option<SuggestionType>,
    pub content: String,
    pub submitter_email: Option<String>,
    pub submitter_name: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl TryFrom<ContributeForm> for NewSuggestion {
    type Error = AppError;

    fn try_from(form: ContributeForm) -> Result<Self, Self::Error> {
        let content =
            non_blank(form.content).ok_or_else(|| AppError::validation("content is required"))?;
        let suggestion_type = non_blank(form.suggestion_type)
            .map(|raw| raw.parse::<SuggestionType>())
            .transpose()?;

        Ok(Self {
            term_id: lenient_id(form.term_id.as_deref()),
            suggestion_type,
            content,
            submitter_email: non_blank(form.email),
            submitter_name: non_blank(form.name),
        })
    }
}
