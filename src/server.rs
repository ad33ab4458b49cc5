use crate::{
    config::Config,
    errors::OpError,
    mcp::{
        registry::{CallRequest, CallResponse, ToolRegistry},
        types::{Capabilities, ErrorObj, ToolInfo},
    },
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<Config>,
    pub registry: Arc<ToolRegistry>,
}

pub async fn serve(cfg: Config, registry: ToolRegistry) -> anyhow::Result<()> {
    let shared = AppState {
        cfg: Arc::new(cfg),
        registry: Arc::new(registry),
    };

    let app = build_router(shared.clone());

    let addr: std::net::SocketAddr =
        format!("{}:{}", shared.cfg.server.bind_addr, shared.cfg.server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(shared: AppState) -> Router {
    let base = shared.cfg.server.base_path.clone();
    use tower_http::limit::RequestBodyLimitLayer;
    let limit_bytes = shared.cfg.limits.max_request_kb * 1024;
    Router::new()
        .route("/healthz", get(health))
        .route(&format!("{base}/capabilities"), get(capabilities))
        .route(
            &format!("{base}/call"),
            post(call).layer(RequestBodyLimitLayer::new(limit_bytes)),
        )
        .with_state(shared)
}

async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status":"ok"})))
}

async fn capabilities(State(state): State<AppState>) -> Response {
    let tools: Vec<ToolInfo> = state
        .registry
        .list_names()
        .into_iter()
        .filter_map(|n| state.registry.get(&n).map(|t| (n, t)))
        .map(|(n, t)| {
            let caps = t.capabilities();
            ToolInfo {
                name: n,
                input_schema: caps["input"].clone(),
                output_schema: caps["output"].clone(),
            }
        })
        .collect();
    let caps = Capabilities {
        mcp_version: "1.0",
        tools,
    };
    (StatusCode::OK, Json(caps)).into_response()
}

async fn call(State(state): State<AppState>, Json(req): Json<CallRequest>) -> Response {
    use std::time::Instant;
    let started = Instant::now();
    let request_id = uuid::Uuid::new_v4().to_string();

    let Some(tool) = state.registry.get(&req.tool) else {
        // Same envelope as a handler failure: the caller always gets
        // {id, error: {code, message}} back from /call.
        let err = OpError::UnknownTool(req.tool.clone());
        let body = CallResponse {
            id: req.id,
            result: None,
            error: Some(ErrorObj { code: err.code().to_string(), message: err.to_string() }),
        };
        let bytes_out = serde_json::to_vec(&body).map(|v| v.len()).unwrap_or(0) as u64;
        audit_end(&request_id, &req.tool, "deny", err.code(), started.elapsed().as_millis() as u64, bytes_out);
        return (err.status(), Json(body)).into_response();
    };

    match tool.call(req.params).await {
        Ok(result) => {
            let payload = CallResponse { id: req.id, result: Some(result), error: None };
            let bytes_out = serde_json::to_vec(&payload).map(|v| v.len()).unwrap_or(0) as u64;
            audit_end(&request_id, &req.tool, "allow", "OK", started.elapsed().as_millis() as u64, bytes_out);
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(e) => {
            // Handler failures are a normal result payload for the caller, not
            // a transport fault.
            let body = CallResponse {
                id: req.id,
                result: None,
                error: Some(ErrorObj { code: e.code().to_string(), message: e.to_string() }),
            };
            let bytes_out = serde_json::to_vec(&body).map(|v| v.len()).unwrap_or(0) as u64;
            audit_end(&request_id, &req.tool, "error", e.code(), started.elapsed().as_millis() as u64, bytes_out);
            (e.status(), Json(body)).into_response()
        }
    }
}

fn audit_end(request_id: &str, tool: &str, decision: &str, code: &str, duration_ms: u64, bytes_out: u64) {
    tracing::info!(
        request_id = request_id,
        tool = tool,
        decision = decision,
        code = code,
        duration_ms = duration_ms,
        bytes_out = bytes_out,
        "audit"
    );
}
