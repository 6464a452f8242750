//! Line-delimited JSON-RPC 2.0 over a pair of byte streams.
//!
//! Each inbound line is one message. Requests get exactly one response line;
//! notifications (no `id`) get none.

use eyre::Result;
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use crate::{client::ReservationApi, tools};

pub const SERVER_NAME: &str = "lumen-tools";
pub const DEFAULT_PROTOCOL_VERSION: &str = "2024-11-05";

pub const PARSE_ERROR: i64 = -32700;
pub const INVALID_REQUEST: i64 = -32600;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;

#[derive(Debug, Deserialize)]
struct RpcMessage {
    #[serde(default)]
    jsonrpc: Option<String>,
    #[serde(default)]
    id: Option<Value>,
    method: String,
    #[serde(default)]
    params: Option<Value>,
}

#[derive(Debug, Deserialize)]
struct CallParams {
    name: String,
    #[serde(default)]
    arguments: Option<Value>,
}

fn success(id: Value, result: Value) -> Value {
    json!({ "jsonrpc": "2.0", "id": id, "result": result })
}

fn failure(id: Value, code: i64, message: impl Into<String>) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": { "code": code, "message": message.into() }
    })
}

pub struct ToolServer<A> {
    api: A,
}

impl<A: ReservationApi> ToolServer<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Handles one raw message, returning the response to write, if any.
    pub async fn handle_line(&self, line: &str) -> Option<Value> {
        let value: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => return Some(failure(Value::Null, PARSE_ERROR, format!("Parse error: {}", e))),
        };

        let id = value.get("id").cloned();
        let message: RpcMessage = match serde_json::from_value(value) {
            Ok(message) => message,
            Err(e) => {
                return Some(failure(
                    id.unwrap_or(Value::Null),
                    INVALID_REQUEST,
                    format!("Invalid request: {}", e),
                ));
            }
        };

        if message.jsonrpc.as_deref() != Some("2.0") {
            return message
                .id
                .map(|id| failure(id, INVALID_REQUEST, "Invalid request: jsonrpc must be \"2.0\""));
        }

        match message.id {
            Some(id) => Some(self.handle_request(id, &message.method, message.params).await),
            None => {
                debug!("Ignoring notification {}", message.method);
                None
            }
        }
    }

    async fn handle_request(&self, id: Value, method: &str, params: Option<Value>) -> Value {
        match method {
            "initialize" => {
                let protocol_version = params
                    .as_ref()
                    .and_then(|p| p.get("protocolVersion"))
                    .and_then(Value::as_str)
                    .unwrap_or(DEFAULT_PROTOCOL_VERSION)
                    .to_string();
                success(
                    id,
                    json!({
                        "protocolVersion": protocol_version,
                        "capabilities": { "tools": {} },
                        "serverInfo": {
                            "name": SERVER_NAME,
                            "version": env!("CARGO_PKG_VERSION"),
                        }
                    }),
                )
            }
            "ping" => success(id, json!({})),
            "tools/list" => success(id, json!({ "tools": tools::definitions() })),
            "tools/call" => {
                let params = match params.map(serde_json::from_value::<CallParams>) {
                    Some(Ok(params)) => params,
                    Some(Err(e)) => return failure(id, INVALID_PARAMS, format!("Invalid params: {}", e)),
                    None => return failure(id, INVALID_PARAMS, "Invalid params: missing tool name"),
                };
                let output = tools::call_tool(&self.api, &params.name, params.arguments).await;
                success(id, output.to_json())
            }
            other => {
                warn!("Unknown method {}", other);
                failure(id, METHOD_NOT_FOUND, format!("Method not found: {}", other))
            }
        }
    }

    /// Serves until `reader` reaches end of input.
    pub async fn serve<R, W>(&self, reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            if let Some(response) = self.handle_line(&line).await {
                let mut frame = serde_json::to_vec(&response)?;
                frame.push(b'\n');
                writer.write_all(&frame).await?;
                writer.flush().await?;
            }
        }

        info!("Input closed, shutting down");
        Ok(())
    }
}
