//! Network picker and selection badge.

use crate::dom::{self, Elements};
use crate::state::{AppContext, SharedStore};
use dp_networks::NetworkDescriptor;
use wasm_bindgen::prelude::*;

/// Fill the `<select>` with every available network, current one selected.
pub fn render_network_select(els: &Elements, store: &SharedStore) -> Result<(), JsValue> {
    let store = store.borrow();
    let current = store.current_selection();

    els.network_select.set_inner_html("");
    for network in store.available_networks() {
        let opt = dom::create_option(network.key, network.display_name, network.key == current.key)?;
        els.network_select.append_child(&opt)?;
    }
    Ok(())
}

/// Render the badge for `network`. Registered as a store observer.
pub fn render_badge(els: &Elements, network: &NetworkDescriptor) {
    dom::set_text(&els.network_name, network.display_name);
    dom::set_text(&els.network_chain_id, &network.id.to_string());
    dom::set_text(&els.network_rpc, network.rpc_url);
    dom::set_style(&els.network_badge, "--network-color", network.color);

    if network.block_explorer.is_empty() {
        els.network_explorer.remove_attribute("href").ok();
        dom::add_class(&els.network_explorer, "hidden");
    } else {
        els.network_explorer.set_href(network.block_explorer);
        dom::remove_class(&els.network_explorer, "hidden");
    }

    // Keep the picker in step when the selection changes elsewhere.
    if dom::get_select_value(&els.network_select) != network.key {
        els.network_select.set_value(network.key);
    }
}

/// `change` handler for the picker.
pub fn on_network_change(ctx: &AppContext) {
    let key = dom::get_select_value(&ctx.els.network_select);
    let result = ctx.store.borrow_mut().select_network(&key).map(|n| n.key);
    match result {
        Ok(selected) => tracing::debug!(selected, "network picked"),
        Err(err) => {
            tracing::warn!("{}", err);
            let current = ctx.store.borrow().current_selection();
            ctx.els.network_select.set_value(current.key);
        }
    }
}
