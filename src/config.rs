use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub workspace: WorkspaceCfg,
    pub server: Server,
    pub limits: Limits,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WorkspaceCfg { pub root_dir: PathBuf }

#[derive(Debug, Deserialize, Clone)]
pub struct Server {
    pub bind_addr: String,
    pub port: u16,
    #[serde(default = "default_base_path")]
    pub base_path: String,
}
fn default_base_path() -> String { "/mcp".to_string() }

#[derive(Debug, Deserialize, Clone)]
pub struct Limits {
    pub max_request_kb: usize,
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)?;
        if path.extension().map(|e| e == "json").unwrap_or(false) {
            Ok(serde_json::from_str(&raw)?)
        } else {
            Ok(toml::from_str(&raw)?)
        }
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.workspace.root_dir.as_os_str().is_empty() {
            anyhow::bail!("root_dir must not be empty");
        }
        // The root is created at startup if absent; an existing non-directory
        // at that path can never become the workspace.
        if self.workspace.root_dir.exists() && !self.workspace.root_dir.is_dir() {
            anyhow::bail!("root_dir exists but is not a directory: {}", self.workspace.root_dir.display());
        }
        if self.server.bind_addr.trim().is_empty() { anyhow::bail!("bind_addr must not be empty"); }
        if self.limits.max_request_kb == 0 { anyhow::bail!("max_request_kb must be > 0"); }
        Ok(())
    }
}
