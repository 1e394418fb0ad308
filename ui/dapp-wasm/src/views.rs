//! Route table and view mounting.

use crate::dom::{self, Elements};
use crate::rpc_view;
use crate::state::SharedStore;
use dp_router::{HOME, RPC, Router};
use wasm_bindgen::prelude::*;
use web_sys::Element;

#[derive(Clone)]
pub enum View {
    Home(Element),
    Rpc(Element),
}

impl View {
    pub fn root(&self) -> &Element {
        match self {
            View::Home(el) | View::Rpc(el) => el,
        }
    }
}

/// `/` is already in the page; `/rpc` is fetched on first visit. `base` is
/// the page's `<base>` path, which the host rewrites to its own base.
pub fn build_router(els: &Elements, store: SharedStore, base: &str) -> Router<View> {
    let markup_base = base.to_owned();
    Router::new(base)
        .eager(HOME, "/", View::Home(els.home_view.clone()))
        .lazy(RPC, "/rpc", move || {
            let store = store.clone();
            let markup_base = markup_base.clone();
            async move { rpc_view::load(&markup_base, store).await.map(View::Rpc) }
        })
}

/// Replace whatever is in the outlet with `view`.
pub fn mount(els: &Elements, view: &View) -> Result<(), JsValue> {
    els.view_outlet.set_inner_html("");
    els.view_outlet.append_child(view.root())?;
    dom::remove_class(view.root(), "hidden");
    Ok(())
}
