//! HTTP API数据模型

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

// 请求体形状：`{"texts": [string...], "output_type": "conll"|"stanford"}`。
// 校验在 `validation` 模块按字段逐项进行，以便把"请求体不是JSON"(400)
// 和"字段缺失/类型错误"(422)区分开。

// ============= Health =============

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub session_id: String,
    pub uptime_seconds: f64,
    pub requests_handled: u64,
    pub timestamp: String,
}

// ============= Error Handling =============

#[derive(Debug)]
pub enum HttpServerError {
    /// 400 - 请求体缺失或不是合法JSON
    BadRequest(String),
    /// 422 - 请求字段校验失败（含对解析结果形状的防御性检查）
    InvalidRequest(String),
    /// 415 - 解析流水线在处理合法输入时失败
    Engine(String),
    /// 500 - 其他内部错误
    Internal(String),
}

impl IntoResponse for HttpServerError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            Self::InvalidRequest(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_REQUEST", msg)
            }
            Self::Engine(msg) => (StatusCode::UNSUPPORTED_MEDIA_TYPE, "ENGINE_ERROR", msg),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg),
        };

        let body = serde_json::json!({
            "success": false,
            "error": message,
            "error_code": error_code,
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        let cases = [
            (
                HttpServerError::BadRequest("no body".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                HttpServerError::InvalidRequest("missing texts".into()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                HttpServerError::Engine("run.sh exited with 1".into()),
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ),
            (
                HttpServerError::Internal("oops".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }
}
