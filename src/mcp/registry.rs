use crate::errors::OpError;
use crate::workspace::Workspace;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub type DynTool = Arc<dyn Tool + Send + Sync + 'static>;

#[derive(Clone)]
pub struct ToolRegistry {
    tools: Vec<(String, DynTool)>,
}

impl ToolRegistry {
    pub fn new(ws: Arc<Workspace>) -> Self {
        use crate::tools::{
            convert::CsvToJsonTool,
            list::ListFilesTool,
            mkdir::MakeDirTool,
            read::ReadFileTool,
            remove::{DeleteDirTool, DeleteFileTool},
            write::WriteFileTool,
        };
        let mut tools: Vec<(String, DynTool)> = vec![
            ("list_files".to_string(), Arc::new(ListFilesTool::new(ws.clone()))),
            ("make_dir".to_string(), Arc::new(MakeDirTool::new(ws.clone()))),
            ("read_file".to_string(), Arc::new(ReadFileTool::new(ws.clone()))),
            ("write_file".to_string(), Arc::new(WriteFileTool::new(ws.clone()))),
            ("delete_file".to_string(), Arc::new(DeleteFileTool::new(ws.clone()))),
            ("delete_dir".to_string(), Arc::new(DeleteDirTool::new(ws.clone()))),
            ("csv_to_json".to_string(), Arc::new(CsvToJsonTool::new(ws))),
        ];
        tools.sort_by(|a, b| a.0.cmp(&b.0));
        Self { tools }
    }

    pub fn get(&self, name: &str) -> Option<DynTool> {
        self.tools.iter().find(|(n, _)| n == name).map(|(_, t)| t.clone())
    }

    pub fn list_names(&self) -> Vec<String> {
        self.tools.iter().map(|(n, _)| n.clone()).collect()
    }
}

#[derive(Debug, Deserialize)]
pub struct CallRequest {
    pub id: String,
    pub tool: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

#[derive(Debug, Serialize)]
pub struct CallResponse {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")] pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")] pub error: Option<super::types::ErrorObj>,
}

#[async_trait]
pub trait Tool {
    fn name(&self) -> &'static str;
    fn capabilities(&self) -> serde_json::Value;
    async fn call(&self, params: serde_json::Value) -> Result<serde_json::Value, OpError>;
}
