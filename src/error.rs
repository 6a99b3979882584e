use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use thiserror::Error;

/// 服务统一错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 请求的记录不存在
    #[error("{0} not found")]
    NotFound(&'static str),
    /// 写入数据未通过校验 (缺少必填字段、取值越界等)
    #[error("{0}")]
    Validation(String),
    /// 存储层失败
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Database(e) => tracing::error!("!!! 数据库操作失败: {:?}", e),
            AppError::Validation(msg) => tracing::warn!("--- 请求数据校验失败: {}", msg),
            AppError::NotFound(_) => {}
        }
        let body = serde_json::json!({ "error": self.to_string() });
        (status, Json(body)).into_response()
    }
}
