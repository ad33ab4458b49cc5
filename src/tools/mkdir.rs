use crate::errors::{OpError, OpResult};
use crate::mcp::registry::Tool;
use crate::tools::require_str;
use crate::workspace::Workspace;
use async_trait::async_trait;
use serde_json::json;
use std::fs;
use std::sync::Arc;

/// Creates the directory and any missing intermediates. Idempotent: an
/// already-existing directory is success, not an error.
pub fn make_dir(ws: &Workspace, directory: &str) -> OpResult<String> {
    let target = ws.resolve(directory)?;
    fs::create_dir_all(&target)?;
    Ok(format!("Directory ensured: '{directory}'."))
}

pub struct MakeDirTool { ws: Arc<Workspace> }

impl MakeDirTool {
    pub fn new(ws: Arc<Workspace>) -> Self { Self { ws } }
}

#[async_trait]
impl Tool for MakeDirTool {
    fn name(&self) -> &'static str { "make_dir" }
    fn capabilities(&self) -> serde_json::Value {
        json!({"input": {"type":"object","required":["directory"],"properties": {"directory": {"type":"string"}}}, "output": {"type":"object","properties": {"message":{"type":"string"}}}})
    }
    async fn call(&self, params: serde_json::Value) -> Result<serde_json::Value, OpError> {
        let directory = require_str(&params, "directory")?;
        let message = make_dir(&self.ws, directory)?;
        Ok(json!({"message": message}))
    }
}
