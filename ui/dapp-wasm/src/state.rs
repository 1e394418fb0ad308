//! Application context.
//!
//! Everything the handlers need travels in an explicit [`AppContext`] handed
//! to each listener; the selection store lives behind `Rc<RefCell<_>>` (WASM
//! is single-threaded). Observers registered on the store must not borrow it
//! again, they receive the new network as an argument instead.

use crate::dom::{self, Elements};
use crate::views::{self, View};
use dp_router::Router;
use dp_store::NetworkStore;
use std::cell::RefCell;
use std::rc::Rc;

pub type SharedStore = Rc<RefCell<NetworkStore>>;

#[derive(Clone)]
pub struct AppContext {
    pub els: Elements,
    pub store: SharedStore,
    pub router: Rc<Router<View>>,
}

impl AppContext {
    /// Fresh store on the default network; nothing is restored from storage.
    pub fn new(els: Elements) -> Self {
        let store: SharedStore = Rc::new(RefCell::new(NetworkStore::new()));
        let base = dom::document_base();
        let router = Rc::new(views::build_router(&els, store.clone(), &base));
        Self { els, store, router }
    }
}
