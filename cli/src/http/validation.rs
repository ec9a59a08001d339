//! 基础请求验证逻辑
//!
//! 与库入口共用同一套格式校验（`OutputFormat::from_str`），
//! 避免HTTP边界和库边界在接受的取值上产生分歧。

use serde_json::Value;
use tweebo_core::api::OutputFormat;

use super::models::HttpServerError;

/// 校验解析请求的形状：`texts`为字符串数组，`output_type`为受支持的
/// 格式名（大小写不敏感）。任何违反都映射到422。
pub fn validate_parse_request(
    value: &Value,
) -> Result<(Vec<String>, OutputFormat), HttpServerError> {
    let object = value.as_object().ok_or_else(|| {
        HttpServerError::InvalidRequest("request body must be a JSON object".to_string())
    })?;

    // 验证 texts
    let texts_value = object
        .get("texts")
        .ok_or_else(|| HttpServerError::InvalidRequest("missing field `texts`".to_string()))?;
    let texts_array = texts_value.as_array().ok_or_else(|| {
        HttpServerError::InvalidRequest("`texts` must be an array of strings".to_string())
    })?;
    let mut texts = Vec::with_capacity(texts_array.len());
    for (index, element) in texts_array.iter().enumerate() {
        let text = element.as_str().ok_or_else(|| {
            HttpServerError::InvalidRequest(format!("`texts[{index}]` must be a string"))
        })?;
        texts.push(text.to_string());
    }

    // 验证 output_type
    let output_type = object
        .get("output_type")
        .ok_or_else(|| HttpServerError::InvalidRequest("missing field `output_type`".to_string()))?
        .as_str()
        .ok_or_else(|| {
            HttpServerError::InvalidRequest("`output_type` must be a string".to_string())
        })?;
    let format = output_type
        .parse::<OutputFormat>()
        .map_err(|e| HttpServerError::InvalidRequest(e.to_string()))?;

    Ok((texts, format))
}
