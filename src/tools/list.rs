use crate::errors::{OpError, OpResult};
use crate::mcp::registry::Tool;
use crate::tools::opt_str;
use crate::workspace::Workspace;
use async_trait::async_trait;
use serde_json::json;
use std::fs;
use std::sync::Arc;

/// Immediate entry names of a workspace directory, non-recursive, in whatever
/// order the OS enumerates them.
pub fn list_files(ws: &Workspace, directory: &str) -> OpResult<Vec<String>> {
    let target = ws.resolve(directory)?;
    if !target.exists() {
        return Err(OpError::NotFound { entity: "Directory", path: directory.to_string() });
    }
    if !target.is_dir() {
        return Err(OpError::WrongType { path: directory.to_string(), detail: "is not a directory." });
    }
    let mut names = Vec::new();
    for entry in fs::read_dir(&target)? {
        names.push(entry?.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}

pub struct ListFilesTool { ws: Arc<Workspace> }

impl ListFilesTool {
    pub fn new(ws: Arc<Workspace>) -> Self { Self { ws } }
}

#[async_trait]
impl Tool for ListFilesTool {
    fn name(&self) -> &'static str { "list_files" }
    fn capabilities(&self) -> serde_json::Value {
        json!({"input": {"type":"object","properties": {"directory": {"type":"string","default":"."}}}, "output": {"type":"object","properties": {"entries":{"type":"array","items":{"type":"string"}}}}})
    }
    async fn call(&self, params: serde_json::Value) -> Result<serde_json::Value, OpError> {
        let directory = opt_str(&params, "directory", ".");
        let entries = list_files(&self.ws, directory)?;
        Ok(json!({"entries": entries}))
    }
}
