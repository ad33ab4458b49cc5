pub mod convert;
pub mod list;
pub mod mkdir;
pub mod read;
pub mod remove;
pub mod write;

use crate::errors::OpError;
use serde_json::Value;

pub(crate) fn require_str<'a>(params: &'a Value, key: &str) -> Result<&'a str, OpError> {
    params
        .get(key)
        .and_then(|v| v.as_str())
        .ok_or_else(|| OpError::InvalidParams(format!("missing {key}")))
}

pub(crate) fn opt_str<'a>(params: &'a Value, key: &str, default: &'a str) -> &'a str {
    params.get(key).and_then(|v| v.as_str()).unwrap_or(default)
}

pub(crate) fn opt_bool(params: &Value, key: &str) -> bool {
    params.get(key).and_then(|v| v.as_bool()).unwrap_or(false)
}

/// The only encodings the text tools speak. The argument stays part of the
/// contract so callers that pass it explicitly keep working.
pub(crate) fn check_encoding(enc: &str) -> Result<(), OpError> {
    match enc.to_ascii_lowercase().as_str() {
        "utf-8" | "utf8" => Ok(()),
        other => Err(OpError::InvalidParams(format!(
            "unsupported encoding '{other}' (only utf-8 is available)"
        ))),
    }
}
