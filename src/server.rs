//! Line-delimited JSON-RPC 2.0 over stdio for tool-calling hosts.
//!
//! Supports the subset hosts need to discover and call tools:
//! `initialize`, `ping`, `tools/list` and `tools/call`. Notifications
//! (requests without an `id`) are accepted and never answered.

use crate::tools::{ToolError, ToolRegistry};
use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::{Value, json};
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// Server name reported in `initialize`.
pub const SERVER_NAME: &str = "bear-app-mcp";

/// Protocol revision offered when the client does not ask for one.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

const PARSE_ERROR: i64 = -32700;
const INVALID_REQUEST: i64 = -32600;
const METHOD_NOT_FOUND: i64 = -32601;
const INVALID_PARAMS: i64 = -32602;

#[derive(Debug, Deserialize)]
struct Request {
    #[serde(default)]
    id: Option<Value>,
    method: String,
    #[serde(default)]
    params: Value,
}

#[derive(Debug, Deserialize)]
struct CallParams {
    name: String,
    #[serde(default)]
    arguments: Value,
}

#[derive(Debug)]
struct RpcError {
    code: i64,
    message: String,
}

impl RpcError {
    fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

// ===========================================
// Serve Loop
// ===========================================

/// Reads one request per line until EOF, writing one response per line.
pub fn serve<R: BufRead, W: Write>(reader: R, mut writer: W, registry: &ToolRegistry) -> Result<()> {
    info!(database = %registry.ops().database_path().display(), "serving tools on stdio");
    for line in reader.lines() {
        let line = line.context("failed to read request")?;
        if line.trim().is_empty() {
            continue;
        }
        if let Some(response) = handle_line(&line, registry) {
            serde_json::to_writer(&mut writer, &response).context("failed to encode response")?;
            writer.write_all(b"\n").context("failed to write response")?;
            writer.flush().context("failed to flush response")?;
        }
    }
    info!("input closed, stopping");
    Ok(())
}

/// Handles one raw message, returning the response to send, if any.
pub fn handle_line(line: &str, registry: &ToolRegistry) -> Option<Value> {
    let message: Value = match serde_json::from_str(line) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "unparseable request");
            return Some(error_response(
                Value::Null,
                RpcError::new(PARSE_ERROR, format!("Parse error: {e}")),
            ));
        }
    };

    let id_hint = message.get("id").cloned().unwrap_or(Value::Null);
    let request: Request = match serde_json::from_value(message) {
        Ok(request) => request,
        Err(e) => {
            return Some(error_response(
                id_hint,
                RpcError::new(INVALID_REQUEST, format!("Invalid request: {e}")),
            ));
        }
    };

    debug!(method = %request.method, "received request");
    let outcome = dispatch(&request, registry);
    let id = request.id?;
    Some(match outcome {
        Ok(result) => json!({ "jsonrpc": "2.0", "id": id, "result": result }),
        Err(err) => error_response(id, err),
    })
}

fn error_response(id: Value, err: RpcError) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": { "code": err.code, "message": err.message },
    })
}

// ===========================================
// Methods
// ===========================================

fn dispatch(request: &Request, registry: &ToolRegistry) -> Result<Value, RpcError> {
    match request.method.as_str() {
        "initialize" => Ok(initialize(&request.params)),
        "ping" => Ok(json!({})),
        "tools/list" => Ok(json!({ "tools": registry.descriptors() })),
        "tools/call" => call_tool(&request.params, registry),
        method if method.starts_with("notifications/") => Ok(Value::Null),
        method => Err(RpcError::new(
            METHOD_NOT_FOUND,
            format!("Method not found: {method}"),
        )),
    }
}

fn initialize(params: &Value) -> Value {
    let version = params
        .get("protocolVersion")
        .and_then(Value::as_str)
        .unwrap_or(PROTOCOL_VERSION);
    json!({
        "protocolVersion": version,
        "capabilities": { "tools": { "listChanged": false } },
        "serverInfo": { "name": SERVER_NAME, "version": env!("CARGO_PKG_VERSION") },
    })
}

fn call_tool(params: &Value, registry: &ToolRegistry) -> Result<Value, RpcError> {
    let params: CallParams = serde_json::from_value(params.clone())
        .map_err(|e| RpcError::new(INVALID_PARAMS, format!("Invalid params: {e}")))?;

    match registry.call(&params.name, params.arguments) {
        Ok(text) => Ok(text_result(text, false)),
        Err(err @ ToolError::InvalidArguments { .. }) => Ok(text_result(err.to_string(), true)),
        Err(err @ ToolError::UnknownTool(_)) => Err(RpcError::new(INVALID_PARAMS, err.to_string())),
    }
}

fn text_result(text: String, is_error: bool) -> Value {
    json!({
        "content": [{ "type": "text", "text": text }],
        "isError": is_error,
    })
}
