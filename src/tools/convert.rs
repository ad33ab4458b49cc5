use crate::errors::{OpError, OpResult};
use crate::mcp::registry::Tool;
use crate::tools::require_str;
use crate::workspace::Workspace;
use async_trait::async_trait;
use serde_json::{json, Map, Value};
use std::fs;
use std::sync::Arc;

/// Transcodes a CSV file with a header row into a JSON array of objects,
/// written pretty-printed with non-ASCII text left unescaped. Field order in
/// each object follows the header. Both paths are confined independently.
///
/// Ragged rows: missing trailing cells become empty strings, extra cells are
/// dropped. A header-only or empty source converts to `[]`.
pub fn csv_to_json(ws: &Workspace, csv_file: &str, json_file: &str) -> OpResult<(String, usize)> {
    let src = ws.resolve(csv_file)?;
    let dst = ws.resolve(json_file)?;
    if !src.exists() {
        return Err(OpError::NotFound { entity: "CSV file", path: csv_file.to_string() });
    }
    ws.ensure_parent(&dst)?;

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(&src)
        .map_err(|e| OpError::Io(e.to_string()))?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| OpError::Io(e.to_string()))?
        .iter()
        .map(str::to_owned)
        .collect();

    let mut rows: Vec<Value> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| OpError::Io(e.to_string()))?;
        let mut obj = Map::new();
        for (i, field) in headers.iter().enumerate() {
            obj.insert(field.clone(), Value::String(record.get(i).unwrap_or("").to_string()));
        }
        rows.push(Value::Object(obj));
    }

    let count = rows.len();
    let rendered = serde_json::to_string_pretty(&Value::Array(rows))
        .map_err(|e| OpError::Io(e.to_string()))?;
    fs::write(&dst, rendered)?;
    Ok((format!("Converted '{csv_file}' → '{json_file}' ({count} rows)."), count))
}

pub struct CsvToJsonTool { ws: Arc<Workspace> }

impl CsvToJsonTool {
    pub fn new(ws: Arc<Workspace>) -> Self { Self { ws } }
}

#[async_trait]
impl Tool for CsvToJsonTool {
    fn name(&self) -> &'static str { "csv_to_json" }
    fn capabilities(&self) -> serde_json::Value {
        json!({"input": {"type":"object","required":["csv_file","json_file"],"properties": {"csv_file": {"type":"string"},"json_file":{"type":"string"}}}, "output": {"type":"object","properties": {"message":{"type":"string"},"rows":{"type":"integer"}}}})
    }
    async fn call(&self, params: serde_json::Value) -> Result<serde_json::Value, OpError> {
        let csv_file = require_str(&params, "csv_file")?;
        let json_file = require_str(&params, "json_file")?;
        let (message, rows) = csv_to_json(&self.ws, csv_file, json_file)?;
        Ok(json!({"message": message, "rows": rows}))
    }
}
