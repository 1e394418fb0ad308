//! RPC view: read-only JSON-RPC reads against the selected network.
//!
//! Built on first navigation to `/rpc` from fetched markup. Expected markup:
//! buttons carrying `data-rpc-method`, one `.rpc-network` label and one
//! `.rpc-result` `<pre>`.

use crate::api;
use crate::dom;
use crate::state::SharedStore;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Element;

const MARKUP_PATH: &str = "views/rpc.html";

pub async fn load(base: &str, store: SharedStore) -> Result<Element, String> {
    let url = format!("{}{}", dp_router::normalize_base(base), MARKUP_PATH);
    let markup = api::fetch_text(&url).await?;

    let root = dom::create_element("section").map_err(|e| api::error_message(&e))?;
    root.set_id("rpcView");
    root.set_inner_html(&markup);

    bind(&root, store).map_err(|e| api::error_message(&e))?;
    Ok(root)
}

fn bind(root: &Element, store: SharedStore) -> Result<(), JsValue> {
    let result_el = root
        .query_selector(".rpc-result")?
        .ok_or_else(|| JsValue::from_str("rpc view markup lacks .rpc-result"))?;

    if let Some(label) = root.query_selector(".rpc-network")? {
        let current = store.borrow().current_selection();
        dom::set_text(&label, &network_label(current));
        store
            .borrow_mut()
            .subscribe(move |network| dom::set_text(&label, &network_label(network)));
    }

    for button in dom::query_all_within(root, "[data-rpc-method]") {
        let method = button.get_attribute("data-rpc-method").unwrap_or_default();
        let store = store.clone();
        let result_el = result_el.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            let network = *store.borrow().current_selection();
            let method = method.clone();
            let result_el = result_el.clone();
            wasm_bindgen_futures::spawn_local(async move {
                dom::set_text(&result_el, &format!("{method} → {} …", network.display_name));
                match api::rpc_call(network.rpc_url, &method).await {
                    Ok(result) => api::set_result(&result_el, &describe(&method, network.id, result)),
                    Err(e) => api::set_result_error(&result_el, &e),
                }
            });
        }) as Box<dyn FnMut(_)>);
        button.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    Ok(())
}

fn network_label(network: &dp_networks::NetworkDescriptor) -> String {
    format!("{} ({})", network.display_name, network.rpc_url)
}

fn describe(method: &str, expected_chain_id: u64, result: serde_json::Value) -> serde_json::Value {
    let decoded = result.as_str().and_then(api::parse_quantity);
    let mut out = serde_json::json!({
        "method": method,
        "result": result,
    });
    if let Some(value) = decoded {
        out["decoded"] = serde_json::Value::String(value.to_string());
    }
    if method == "eth_chainId" {
        out["matchesSelection"] = serde_json::Value::Bool(decoded == Some(expected_chain_id as u128));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_id_reply_is_checked_against_selection() {
        let out = describe("eth_chainId", 84_532, serde_json::json!("0x14a34"));
        assert_eq!(out["decoded"], "84532");
        assert_eq!(out["matchesSelection"], true);

        let out = describe("eth_chainId", 11_155_111, serde_json::json!("0x14a34"));
        assert_eq!(out["matchesSelection"], false);
    }

    #[test]
    fn non_quantity_results_pass_through() {
        let out = describe("eth_blockNumber", 1, serde_json::json!(null));
        assert!(out.get("decoded").is_none());
        assert!(out.get("matchesSelection").is_none());
    }
}
