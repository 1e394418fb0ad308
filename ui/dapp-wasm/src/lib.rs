//! Testnet dapp WASM front-end.
//!
//! Network picker, a two-route shell (`/` and a lazily fetched `/rpc`) and
//! the one-shot wallet-modal selector, bound to the page served under
//! `/dapp5792/`. Each concern lives in its own module.
//!
//! `build.sh` next to this crate runs `wasm-pack build --target web` into
//! `dist/pkg/` and copies `index.html` and `views/` beside it; point
//! `DAPP_DIST_DIR` at that `dist/` when starting `dapp-server`.

pub mod api;
pub mod dom;
pub mod events;
pub mod logging;
pub mod nav;
pub mod network_picker;
pub mod rpc_view;
pub mod state;
pub mod views;
pub mod wallet_modal;

use dp_api_types::NetworkSummary;
use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();
    logging::init();

    init().await
}

async fn init() -> Result<(), JsValue> {
    let els = dom::Elements::bind()?;
    let ctx = state::AppContext::new(els);

    network_picker::render_network_select(&ctx.els, &ctx.store)?;
    let initial = ctx.store.borrow().current_selection();
    network_picker::render_badge(&ctx.els, initial);
    {
        let els = ctx.els.clone();
        ctx.store
            .borrow_mut()
            .subscribe(move |network| network_picker::render_badge(&els, network));
    }

    nav::set_link_targets(&ctx);
    events::bind_events(&ctx)?;

    nav::navigate(&ctx, &nav::current_path(), false).await;
    Ok(())
}

/// For the connect widget glue: run the wallet-modal scan once.
#[wasm_bindgen(js_name = autoSelectSAManager)]
pub fn auto_select_samanager() -> bool {
    wallet_modal::auto_select_samanager()
}

/// Public descriptor shapes of every available network, in picker order.
#[wasm_bindgen]
pub fn networks() -> Result<JsValue, JsValue> {
    let summaries: Vec<NetworkSummary> = dp_networks::all().iter().map(|n| n.summary()).collect();
    serde_wasm_bindgen::to_value(&summaries).map_err(JsValue::from)
}
