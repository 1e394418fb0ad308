//! DOM element bindings.
//!
//! All fields are resolved once at startup. The `Live*` wrappers expose the
//! real document to the wallet-modal scan in `dp-autoselect`.

use dp_autoselect::{ModalDocument, ModalElement};
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlAnchorElement, HtmlElement, HtmlOptionElement, HtmlSelectElement,
};

// ── Helpers ──

pub fn document() -> Document {
    gloo_utils::document()
}

pub fn window() -> web_sys::Window {
    gloo_utils::window()
}

/// Directory of the document's base URL, falling back to the default base.
pub fn document_base() -> String {
    document()
        .base_uri()
        .ok()
        .flatten()
        .map(|url| dp_router::base_from_url(&url))
        .unwrap_or_else(|| dp_router::BASE_PATH.to_owned())
}

pub fn by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

/// Query all matching elements within a parent element.
pub fn query_all_within(parent: &Element, selector: &str) -> Vec<Element> {
    let Ok(nl) = parent.query_selector_all(selector) else {
        return Vec::new();
    };
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn get_select_value(el: &HtmlSelectElement) -> String {
    el.value()
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

pub fn create_element(tag: &str) -> Result<Element, JsValue> {
    document().create_element(tag)
}

pub fn create_option(value: &str, text: &str, selected: bool) -> Result<HtmlOptionElement, JsValue> {
    let opt: HtmlOptionElement = create_element("option")?.dyn_into()?;
    opt.set_value(value);
    opt.set_text_content(Some(text));
    opt.set_selected(selected);
    Ok(opt)
}

pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

// ── Wallet modal access ──

/// The page's live document, as seen by the wallet-modal scan.
pub struct LiveDocument(Document);

impl LiveDocument {
    pub fn current() -> Self {
        Self(document())
    }
}

#[derive(Clone)]
pub struct LiveElement(Element);

impl ModalDocument for LiveDocument {
    type Element = LiveElement;

    fn element_by_id(&self, id: &str) -> Option<LiveElement> {
        self.0.get_element_by_id(id).map(LiveElement)
    }

    fn query_selector(&self, selector: &str) -> Option<LiveElement> {
        self.0.query_selector(selector).ok().flatten().map(LiveElement)
    }
}

impl ModalElement for LiveElement {
    fn query_selector_all(&self, selector: &str) -> Vec<Self> {
        query_all_within(&self.0, selector)
            .into_iter()
            .map(LiveElement)
            .collect()
    }

    fn query_selector(&self, selector: &str) -> Option<Self> {
        self.0.query_selector(selector).ok().flatten().map(LiveElement)
    }

    fn text_content(&self) -> Option<String> {
        self.0.text_content()
    }

    fn click(&self) -> bool {
        match self.0.dyn_ref::<HtmlElement>() {
            Some(html) => {
                html.click();
                true
            }
            None => false,
        }
    }
}

// ── Elements struct ──

/// All DOM element references used by the shell.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    // Network picker / badge
    pub network_select: HtmlSelectElement,
    pub network_badge: Element,
    pub network_name: Element,
    pub network_chain_id: Element,
    pub network_rpc: Element,
    pub network_explorer: HtmlAnchorElement,

    // Navigation
    pub nav_links: Vec<HtmlAnchorElement>,
    pub view_outlet: Element,
    pub view_status: Element,

    // Home view
    pub home_view: Element,
    pub auto_select_btn: HtmlElement,
    pub auto_select_result: Element,
}

macro_rules! get_el {
    ($id:expr) => {
        by_id($id).ok_or_else(|| JsValue::from_str(&format!("missing element #{}", $id)))?
    };
}

macro_rules! get_typed {
    ($ty:ty, $id:expr) => {
        by_id_typed::<$ty>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing {} #{}", stringify!($ty), $id)))?
    };
}

impl Elements {
    /// Resolve all DOM references. Call once after DOMContentLoaded.
    pub fn bind() -> Result<Elements, JsValue> {
        let nav = get_el!("mainNav");
        let nav_links = query_all_within(&nav, "a[data-route]")
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlAnchorElement>().ok())
            .collect();

        Ok(Elements {
            network_select: get_typed!(HtmlSelectElement, "networkSelect"),
            network_badge: get_el!("networkBadge"),
            network_name: get_el!("networkName"),
            network_chain_id: get_el!("networkChainId"),
            network_rpc: get_el!("networkRpc"),
            network_explorer: get_typed!(HtmlAnchorElement, "networkExplorer"),

            nav_links,
            view_outlet: get_el!("viewOutlet"),
            view_status: get_el!("viewStatus"),

            home_view: get_el!("homeView"),
            auto_select_btn: get_typed!(HtmlElement, "autoSelectBtn"),
            auto_select_result: get_el!("autoSelectResult"),
        })
    }
}
