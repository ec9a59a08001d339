//! HTTP路由handlers

use axum::extract::rejection::JsonRejection;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use chrono::Local;
use serde_json::Value;
use tracing::warn;
use tweebo_core::api::{process_texts, ParseOutput};

use crate::http::{
    models::{HealthResponse, HttpServerError},
    state::AppState,
    validation::validate_parse_request,
};

/// 创建所有路由
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", post(parse_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// POST / - 批量解析文本
///
/// 请求体手动校验：body不是JSON时返回400，字段形状错误返回422，
/// 流水线处理失败返回415。
async fn parse_handler(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ParseOutput>, HttpServerError> {
    // 更新统计
    {
        let mut stats = state.stats.write().unwrap();
        stats.increment_request("/");
    }

    let Json(value) = body.map_err(|e| HttpServerError::BadRequest(e.to_string()))?;
    let (texts, format) = validate_parse_request(&value).inspect_err(|_| {
        let mut stats = state.stats.write().unwrap();
        stats.increment_error();
    })?;

    match process_texts(state.engine.as_ref(), &texts, format).await {
        Ok(output) => {
            // 防御性检查：结果数量必须与输入一一对应
            if output.len() != texts.len() {
                let mut stats = state.stats.write().unwrap();
                stats.increment_error();
                return Err(HttpServerError::InvalidRequest(format!(
                    "pipeline returned {} results for {} texts",
                    output.len(),
                    texts.len()
                )));
            }
            Ok(Json(output))
        }
        Err(e) => {
            warn!("parse pipeline failed: {e}");
            let mut stats = state.stats.write().unwrap();
            stats.increment_error();
            Err(HttpServerError::Engine(e.to_string()))
        }
    }
}

/// GET /health - 服务器健康状态
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let stats = state.stats.read().unwrap();
    Json(HealthResponse {
        status: "ok".to_string(),
        session_id: state.session_id.clone(),
        uptime_seconds: stats.uptime_seconds(),
        requests_handled: stats.requests_total,
        timestamp: Local::now().to_rfc3339(),
    })
}
