use crate::errors::{OpError, OpResult};
use crate::mcp::registry::Tool;
use crate::tools::{check_encoding, opt_str, require_str};
use crate::workspace::Workspace;
use async_trait::async_trait;
use serde_json::json;
use std::fs;
use std::sync::Arc;

/// Overwrites the file with `content`, creating parent directories as needed.
/// A literal path ending in a separator can never name a regular file, so it
/// is rejected before resolution.
pub fn write_file(ws: &Workspace, filepath: &str, content: &str, encoding: &str) -> OpResult<String> {
    check_encoding(encoding)?;
    if filepath.ends_with('/')
        || filepath.ends_with('\\')
        || filepath.ends_with(std::path::MAIN_SEPARATOR)
    {
        return Err(OpError::WrongType { path: filepath.to_string(), detail: "is a directory. Provide a file name." });
    }
    let target = ws.resolve(filepath)?;
    if target.is_dir() {
        return Err(OpError::WrongType { path: filepath.to_string(), detail: "is a directory. Provide a file name." });
    }
    ws.ensure_parent(&target)?;
    fs::write(&target, content.as_bytes())?;
    Ok(format!("Successfully wrote to '{filepath}'."))
}

pub struct WriteFileTool { ws: Arc<Workspace> }

impl WriteFileTool {
    pub fn new(ws: Arc<Workspace>) -> Self { Self { ws } }
}

#[async_trait]
impl Tool for WriteFileTool {
    fn name(&self) -> &'static str { "write_file" }
    fn capabilities(&self) -> serde_json::Value {
        json!({"input": {"type":"object","required":["filepath","content"],"properties": {"filepath": {"type":"string"},"content":{"type":"string"},"encoding":{"type":"string","default":"utf-8"}}}, "output": {"type":"object","properties": {"message":{"type":"string"}}}})
    }
    async fn call(&self, params: serde_json::Value) -> Result<serde_json::Value, OpError> {
        let filepath = require_str(&params, "filepath")?;
        let content = require_str(&params, "content")?;
        let encoding = opt_str(&params, "encoding", "utf-8");
        let message = write_file(&self.ws, filepath, content, encoding)?;
        Ok(json!({"message": message}))
    }
}
