mod config;
mod errors;
mod logging;
mod mcp;
mod server;
mod tools;
mod workspace;


use crate::config::Config;
use crate::workspace::Workspace;
use anyhow::Context;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let args: Vec<String> = std::env::args().collect();
    let mut config_path = PathBuf::from("coffer.toml");
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                if i >= args.len() { eprintln!("--config requires a path"); std::process::exit(2); }
                config_path = PathBuf::from(&args[i]);
            }
            _ => {}
        }
        i += 1;
    }

    let cfg = Config::load(&config_path).context("loading config")?;
    cfg.validate().context("validating config")?;

    let addr = format!("{}:{}", cfg.server.bind_addr, cfg.server.port);

    // Created if absent, canonicalized once, immutable for the process lifetime.
    let ws = Arc::new(Workspace::open(&cfg.workspace.root_dir).context("opening workspace")?);
    let registry = mcp::registry::ToolRegistry::new(ws.clone());

    info!(addr = %addr, root = %ws.root().display(), tools = ?registry.list_names(), "coffer ready");
    println!(
        "coffer ready addr={} root={} tools=[{}]",
        addr,
        ws.root().display(),
        registry.list_names().join(",")
    );

    server::serve(cfg, registry).await
}
