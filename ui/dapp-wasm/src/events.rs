//! Event binding.
//!
//! Wires the picker, navigation links, history and the wallet-modal button.
//! Async handlers are spawned via `wasm_bindgen_futures::spawn_local`.

use crate::nav;
use crate::network_picker;
use crate::state::AppContext;
use crate::wallet_modal;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Bind all UI event listeners. Call once after init.
pub fn bind_events(ctx: &AppContext) -> Result<(), JsValue> {
    // ── Network picker ──
    {
        let ctx2 = ctx.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
            network_picker::on_network_change(&ctx2);
        }) as Box<dyn FnMut(_)>);
        ctx.els
            .network_select
            .add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    // ── Nav links ──
    for link in &ctx.els.nav_links {
        let ctx2 = ctx.clone();
        let target = link.clone();
        let cb = Closure::wrap(Box::new(move |ev: web_sys::MouseEvent| {
            // Let modified clicks open a new tab as usual.
            if ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.button() != 0 {
                return;
            }
            ev.prevent_default();
            let ctx3 = ctx2.clone();
            let path = target.pathname();
            wasm_bindgen_futures::spawn_local(async move {
                nav::navigate(&ctx3, &path, true).await;
            });
        }) as Box<dyn FnMut(_)>);
        link.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    // ── Back / forward ──
    {
        let ctx2 = ctx.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
            let ctx3 = ctx2.clone();
            wasm_bindgen_futures::spawn_local(async move {
                nav::navigate(&ctx3, &nav::current_path(), false).await;
            });
        }) as Box<dyn FnMut(_)>);
        crate::dom::window()
            .add_event_listener_with_callback("popstate", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    // ── Wallet modal ──
    {
        let els = ctx.els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::MouseEvent| {
            wallet_modal::on_auto_select(&els);
        }) as Box<dyn FnMut(_)>);
        ctx.els
            .auto_select_btn
            .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    Ok(())
}
