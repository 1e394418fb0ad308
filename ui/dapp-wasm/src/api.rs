//! Fetch helpers.
//!
//! Plain-text fetch for view markup, JSON-RPC reads against the selected
//! network's endpoint, and the result-panel writers.

use crate::dom;
use gloo_net::http::Request as HttpRequest;
use serde::Deserialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

/// Fetch a URL and return the body as a plain string.
pub async fn fetch_text(url: &str) -> Result<String, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");

    let request = Request::new_with_str_and_init(url, &opts).map_err(|e| error_message(&e))?;

    let resp_value = JsFuture::from(dom::window().fetch_with_request(&request))
        .await
        .map_err(|e| format!("fetch error: {}", error_message(&e)))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| "not a Response".to_string())?;

    if !resp.ok() {
        return Err(format!("{} {}: {}", resp.status(), resp.status_text(), url));
    }

    let text = JsFuture::from(resp.text().map_err(|e| error_message(&e))?)
        .await
        .map_err(|e| format!("text error: {}", error_message(&e)))?;

    Ok(text.as_string().unwrap_or_default())
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<RpcErrorBody>,
}

/// Send a parameterless JSON-RPC call and return its `result`.
pub async fn rpc_call(rpc_url: &str, method: &str) -> Result<serde_json::Value, String> {
    let body = serde_json::json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": method,
        "params": [],
    });

    let resp = HttpRequest::post(rpc_url)
        .json(&body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| format!("fetch error: {e}"))?;

    if !resp.ok() {
        return Err(format!("{} {}", resp.status(), resp.status_text()));
    }

    let parsed: RpcResponse = resp
        .json()
        .await
        .map_err(|e| format!("JSON parse error: {e}"))?;

    match (parsed.result, parsed.error) {
        (_, Some(err)) => Err(format!("rpc error {}: {}", err.code, err.message)),
        (Some(result), None) => Ok(result),
        (None, None) => Err("rpc response carried neither result nor error".to_string()),
    }
}

/// Decode an Ethereum hex quantity (`0x1a`) into an integer.
pub fn parse_quantity(value: &str) -> Option<u128> {
    let digits = value.strip_prefix("0x")?;
    if digits.is_empty() {
        return None;
    }
    u128::from_str_radix(digits, 16).ok()
}

/// Message of a JS `Error`, otherwise the value serialised as JSON.
pub fn error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    js_sys::JSON::stringify(value)
        .ok()
        .and_then(|s| s.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

/// Write a result (JSON) into a `<pre>` element.
pub fn set_result(el: &web_sys::Element, value: &serde_json::Value) {
    let pretty = serde_json::to_string_pretty(value).unwrap_or_else(|_| format!("{:?}", value));
    dom::remove_class(el, "error");
    el.set_text_content(Some(&pretty));
}

/// Write an error string into a `<pre>` element.
pub fn set_result_error(el: &web_sys::Element, msg: &str) {
    dom::add_class(el, "error");
    el.set_text_content(Some(msg));
}
