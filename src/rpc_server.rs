//! Bookmarker RPC Server: JSON-RPC over stdin/stdout for an external renderer.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"bookmark.add", "params":{"name":"...","url":"...","confirmed":true}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}
//!
//! Logs go to stderr; stdout carries only protocol messages.

use std::io::{self, BufRead, Write};
use std::sync::Mutex;

use bookmarker::app::App;
use bookmarker::rpc_handler::handle_method;
use bookmarker::telemetry;

use serde_json::{json, Value};

fn send(out: &mut impl Write, message: &Value) -> io::Result<()> {
    writeln!(out, "{}", message)?;
    out.flush()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init();

    let config_path = std::env::var("BOOKMARKER_CONFIG").ok();
    let app = Mutex::new(App::new(config_path)?);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    send(&mut out, &json!({"event":"ready","version":env!("CARGO_PKG_VERSION")}))?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let req: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                send(&mut out, &json!({"id":null,"error":format!("parse error: {}",e)}))?;
                continue;
            }
        };

        let id = req.get("id").cloned().unwrap_or(Value::Null);
        let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
        let params = req.get("params").cloned().unwrap_or(json!({}));

        tracing::debug!(%method, "RPC request");
        let response = match handle_method(&app, method, &params) {
            Ok(val) => json!({"id": id, "result": val}),
            Err(err) => {
                tracing::info!(%method, error = %err, "RPC request failed");
                json!({"id": id, "error": err})
            }
        };
        send(&mut out, &response)?;
    }

    Ok(())
}
