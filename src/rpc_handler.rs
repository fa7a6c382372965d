//! RPC method handler for the Bookmarker JSON-RPC protocol.
//!
//! Extracted from `rpc_server.rs` so it can be unit-tested independently.
//! The renderer on the other end shows its own confirmation dialogs and
//! forwards the answer as a `confirmed` flag; add and delete do nothing
//! unless it is `true`.

use std::sync::Mutex;

use chrono::{Local, NaiveDateTime};
use serde_json::{json, Value};

use crate::app::App;
use crate::managers::bookmark_manager::BookmarkManagerTrait;
use crate::services::settings_engine::SettingsEngineTrait;
use crate::services::validator;
use crate::ui::confirm::Decision;
use crate::ui::flow::{BookmarkFlow, Outcome};
use crate::ui::table;

fn str_param<'a>(params: &'a Value, name: &str) -> Result<&'a str, String> {
    params
        .get(name)
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("missing {}", name))
}

fn index_param(params: &Value) -> Result<usize, String> {
    params
        .get("index")
        .and_then(|v| v.as_u64())
        .map(|i| i as usize)
        .ok_or_else(|| "missing index".to_string())
}

fn decision_param(params: &Value) -> Decision {
    Decision::from(params.get("confirmed").and_then(|v| v.as_bool()).unwrap_or(false))
}

fn outcome_json(outcome: Outcome) -> Result<Value, String> {
    match outcome {
        Outcome::Done(message) => Ok(json!({"ok": true, "message": message})),
        Outcome::Cancelled => Ok(json!({"ok": false, "cancelled": true})),
        Outcome::Failed(message) => Err(message),
    }
}

/// Dispatch a JSON-RPC method call using the current local time.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    handle_method_at(app, method, params, Local::now().naive_local())
}

/// Dispatch a JSON-RPC method call, stamping mutations with `now`.
///
/// Returns `Ok(Value)` on success or `Err(String)` with a user-facing message.
pub fn handle_method_at(
    app: &Mutex<App>,
    method: &str,
    params: &Value,
    now: NaiveDateTime,
) -> Result<Value, String> {
    match method {
        // ─── Bookmarks ───
        "bookmark.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            let rows = table::rows(a.bookmarks.list_bookmarks());
            serde_json::to_value(rows).map_err(|e| e.to_string())
        }
        "bookmark.add" => {
            let name = str_param(params, "name")?;
            let url = str_param(params, "url")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let mut flow = BookmarkFlow::new(&mut a.bookmarks, decision_param(params));
            outcome_json(flow.submit(name, url, now))
        }
        "bookmark.delete" => {
            let index = index_param(params)?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let mut flow = BookmarkFlow::new(&mut a.bookmarks, decision_param(params));
            outcome_json(flow.remove(index))
        }
        "bookmark.visit" => {
            let index = index_param(params)?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let mut flow = BookmarkFlow::new(&mut a.bookmarks, Decision::Dismissed);
            let visit = flow.visit(index, now)?;
            Ok(json!({"url": visit.url, "open_url": visit.open_url}))
        }
        "bookmark.validate" => {
            let name = params.get("name").and_then(|v| v.as_str()).unwrap_or("");
            let url = params.get("url").and_then(|v| v.as_str()).unwrap_or("");
            Ok(json!({
                "name": validator::is_valid_name(name),
                "url": validator::is_valid_url(url),
            }))
        }

        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.settings_engine.get_settings()).map_err(|e| e.to_string())
        }
        "settings.set" => {
            let key = str_param(params, "key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.settings_engine.set_value(key, value).map_err(|e| e.to_string())?;
            if key.starts_with("display.") {
                a.apply_display_settings();
            }
            Ok(json!({"ok": true, "restart_required": key.starts_with("storage.")}))
        }
        "settings.reset" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let storage_before = a.settings_engine.get_settings().storage.clone();
            a.settings_engine.reset().map_err(|e| e.to_string())?;
            a.apply_display_settings();
            let restart_required = a.settings_engine.get_settings().storage != storage_before;
            Ok(json!({"ok": true, "restart_required": restart_required}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
