use crate::errors::{OpError, OpResult};
use crate::mcp::registry::Tool;
use crate::tools::{check_encoding, opt_str, require_str};
use crate::workspace::Workspace;
use async_trait::async_trait;
use serde_json::json;
use std::fs;
use std::sync::Arc;

/// Full file content as text. Decode failure is a generic fault, not a panic.
pub fn read_file(ws: &Workspace, filepath: &str, encoding: &str) -> OpResult<String> {
    check_encoding(encoding)?;
    let target = ws.resolve(filepath)?;
    if !target.exists() {
        return Err(OpError::NotFound { entity: "File", path: filepath.to_string() });
    }
    if target.is_dir() {
        return Err(OpError::WrongType { path: filepath.to_string(), detail: "is a directory, not a file." });
    }
    let bytes = fs::read(&target)?;
    String::from_utf8(bytes)
        .map_err(|_| OpError::Io(format!("'{filepath}' is not valid {encoding} text")))
}

pub struct ReadFileTool { ws: Arc<Workspace> }

impl ReadFileTool {
    pub fn new(ws: Arc<Workspace>) -> Self { Self { ws } }
}

#[async_trait]
impl Tool for ReadFileTool {
    fn name(&self) -> &'static str { "read_file" }
    fn capabilities(&self) -> serde_json::Value {
        json!({"input": {"type":"object","required":["filepath"],"properties": {"filepath": {"type":"string"},"encoding":{"type":"string","default":"utf-8"}}}, "output": {"type":"object","properties": {"content":{"type":"string"}}}})
    }
    async fn call(&self, params: serde_json::Value) -> Result<serde_json::Value, OpError> {
        let filepath = require_str(&params, "filepath")?;
        let encoding = opt_str(&params, "encoding", "utf-8");
        let content = read_file(&self.ws, filepath, encoding)?;
        Ok(json!({"content": content}))
    }
}
