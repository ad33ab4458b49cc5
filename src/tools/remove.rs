use crate::errors::{OpError, OpResult};
use crate::mcp::registry::Tool;
use crate::tools::{opt_bool, require_str};
use crate::workspace::Workspace;
use async_trait::async_trait;
use serde_json::json;
use std::fs;
use std::io::ErrorKind;
use std::sync::Arc;

/// Removes a single file. Refuses the workspace root outright and refuses
/// directories (those go through `delete_dir`).
pub fn delete_file(ws: &Workspace, filepath: &str) -> OpResult<String> {
    let target = ws.resolve(filepath)?;
    if target == ws.root() {
        return Err(OpError::RootDeletion);
    }
    if !target.exists() {
        return Err(OpError::Missing { path: filepath.to_string() });
    }
    if target.is_dir() {
        return Err(OpError::WrongType { path: filepath.to_string(), detail: "is a directory. Use delete_dir for directories." });
    }
    fs::remove_file(&target)?;
    Ok(format!("Deleted file: '{filepath}'."))
}

/// Removes a directory. Non-recursive removal succeeds only on an empty
/// directory and never partially deletes; recursive removal takes the whole
/// subtree, which is why the root self-deletion guard comes first.
pub fn delete_dir(ws: &Workspace, directory: &str, recursive: bool) -> OpResult<String> {
    let target = ws.resolve(directory)?;
    if target == ws.root() {
        return Err(OpError::RootDeletion);
    }
    if !target.exists() {
        return Err(OpError::Missing { path: directory.to_string() });
    }
    if !target.is_dir() {
        return Err(OpError::WrongType { path: directory.to_string(), detail: "is not a directory." });
    }
    if recursive {
        fs::remove_dir_all(&target)?;
    } else {
        fs::remove_dir(&target).map_err(|e| {
            if e.kind() == ErrorKind::DirectoryNotEmpty {
                OpError::NotEmpty { detail: e.to_string() }
            } else {
                OpError::Io(e.to_string())
            }
        })?;
    }
    Ok(format!("Deleted directory: '{directory}'."))
}

pub struct DeleteFileTool { ws: Arc<Workspace> }

impl DeleteFileTool {
    pub fn new(ws: Arc<Workspace>) -> Self { Self { ws } }
}

#[async_trait]
impl Tool for DeleteFileTool {
    fn name(&self) -> &'static str { "delete_file" }
    fn capabilities(&self) -> serde_json::Value {
        json!({"input": {"type":"object","required":["filepath"],"properties": {"filepath": {"type":"string"}}}, "output": {"type":"object","properties": {"message":{"type":"string"}}}})
    }
    async fn call(&self, params: serde_json::Value) -> Result<serde_json::Value, OpError> {
        let filepath = require_str(&params, "filepath")?;
        let message = delete_file(&self.ws, filepath)?;
        Ok(json!({"message": message}))
    }
}

pub struct DeleteDirTool { ws: Arc<Workspace> }

impl DeleteDirTool {
    pub fn new(ws: Arc<Workspace>) -> Self { Self { ws } }
}

#[async_trait]
impl Tool for DeleteDirTool {
    fn name(&self) -> &'static str { "delete_dir" }
    fn capabilities(&self) -> serde_json::Value {
        json!({"input": {"type":"object","required":["directory"],"properties": {"directory": {"type":"string"},"recursive":{"type":"boolean","default":false}}}, "output": {"type":"object","properties": {"message":{"type":"string"}}}})
    }
    async fn call(&self, params: serde_json::Value) -> Result<serde_json::Value, OpError> {
        let directory = require_str(&params, "directory")?;
        let recursive = opt_bool(&params, "recursive");
        let message = delete_dir(&self.ws, directory, recursive)?;
        Ok(json!({"message": message}))
    }
}
