//! One-shot wallet picker for the third-party connect modal.
//!
//! The connect widget renders its own modal; this module looks at whatever
//! is in the document right now, finds the wallet option with a given label
//! and clicks it. A single synchronous pass: if the modal is not there yet the
//! scan simply reports a miss. Nothing is retained between calls.
//!
//! The document is reached through [`ModalDocument`] / [`ModalElement`] so the
//! scan runs the same against `web_sys` and against an in-memory tree.

use tracing::{debug, info, warn};

pub const MODAL_ID: &str = "vd-modal";
pub const MODAL_COLUMN_SELECTOR: &str = ".vd-modal-column";
pub const WALLET_BLOCK_SELECTOR: &str = ".vd-wallet-block";
pub const WALLET_LABEL_SELECTOR: &str = "div";
pub const SAMANAGER: &str = "SAManager";

pub trait ModalDocument {
    type Element: ModalElement;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
    fn query_selector(&self, selector: &str) -> Option<Self::Element>;
}

pub trait ModalElement: Sized {
    /// Descendants matching `selector`, in document order.
    fn query_selector_all(&self, selector: &str) -> Vec<Self>;
    /// First descendant matching `selector`.
    fn query_selector(&self, selector: &str) -> Option<Self>;
    fn text_content(&self) -> Option<String>;
    /// Simulated user click; false when the element cannot be activated.
    fn click(&self) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    NoModal,
    NotListed { blocks: usize },
    /// The block was found but refused the click.
    NotActivatable { index: usize },
    Activated { index: usize },
}

impl ScanOutcome {
    pub fn activated(self) -> bool {
        matches!(self, ScanOutcome::Activated { .. })
    }
}

/// Click the `SAManager` option if the modal is open and lists it.
pub fn try_auto_select<D: ModalDocument>(doc: &D) -> bool {
    scan(doc, SAMANAGER).activated()
}

pub fn try_auto_select_wallet<D: ModalDocument>(doc: &D, wallet_name: &str) -> bool {
    scan(doc, wallet_name).activated()
}

pub fn scan<D: ModalDocument>(doc: &D, wallet_name: &str) -> ScanOutcome {
    let Some(modal) = find_modal(doc) else {
        debug!("wallet modal not present");
        return ScanOutcome::NoModal;
    };

    let blocks = modal.query_selector_all(WALLET_BLOCK_SELECTOR);
    for (index, block) in blocks.iter().enumerate() {
        let label = block
            .query_selector(WALLET_LABEL_SELECTOR)
            .and_then(|el| el.text_content())
            .unwrap_or_default();

        if label.trim() == wallet_name {
            if !block.click() {
                warn!(index, "{} wallet block could not be clicked", wallet_name);
                return ScanOutcome::NotActivatable { index };
            }
            info!("Auto-clicking {} wallet", wallet_name);
            return ScanOutcome::Activated { index };
        }
    }

    debug!(blocks = blocks.len(), "{} not listed in wallet modal", wallet_name);
    ScanOutcome::NotListed {
        blocks: blocks.len(),
    }
}

fn find_modal<D: ModalDocument>(doc: &D) -> Option<D::Element> {
    doc.element_by_id(MODAL_ID)
        .or_else(|| doc.query_selector(MODAL_COLUMN_SELECTOR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Minimal element tree: selectors are either `.class` or a tag name.
    #[derive(Default)]
    struct Node {
        tag: &'static str,
        id: Option<&'static str>,
        class: Option<&'static str>,
        text: Option<&'static str>,
        children: Vec<Rc<Node>>,
        clicks: Cell<u32>,
        inert: bool,
    }

    #[derive(Clone)]
    struct FakeElement(Rc<Node>);

    impl FakeElement {
        fn matches(&self, selector: &str) -> bool {
            match selector.strip_prefix('.') {
                Some(class) => self.0.class == Some(class),
                None => self.0.tag == selector,
            }
        }

        fn descendants(&self, out: &mut Vec<FakeElement>) {
            for child in &self.0.children {
                let child = FakeElement(child.clone());
                out.push(child.clone());
                child.descendants(out);
            }
        }
    }

    impl ModalElement for FakeElement {
        fn query_selector_all(&self, selector: &str) -> Vec<Self> {
            let mut all = Vec::new();
            self.descendants(&mut all);
            all.into_iter().filter(|el| el.matches(selector)).collect()
        }

        fn query_selector(&self, selector: &str) -> Option<Self> {
            self.query_selector_all(selector).into_iter().next()
        }

        fn text_content(&self) -> Option<String> {
            let mut text = self.0.text.unwrap_or_default().to_owned();
            for child in &self.0.children {
                if let Some(inner) = FakeElement(child.clone()).text_content() {
                    text.push_str(&inner);
                }
            }
            Some(text)
        }

        fn click(&self) -> bool {
            if self.0.inert {
                return false;
            }
            self.0.clicks.set(self.0.clicks.get() + 1);
            true
        }
    }

    struct FakeDocument {
        body: FakeElement,
    }

    impl ModalDocument for FakeDocument {
        type Element = FakeElement;

        fn element_by_id(&self, id: &str) -> Option<FakeElement> {
            let mut all = Vec::new();
            self.body.descendants(&mut all);
            all.into_iter().find(|el| el.0.id == Some(id))
        }

        fn query_selector(&self, selector: &str) -> Option<FakeElement> {
            self.body.query_selector(selector)
        }
    }

    fn node(tag: &'static str, class: Option<&'static str>, children: Vec<Rc<Node>>) -> Rc<Node> {
        Rc::new(Node {
            tag,
            class,
            children,
            ..Default::default()
        })
    }

    fn wallet_block(label: &'static str) -> Rc<Node> {
        let name = Rc::new(Node {
            tag: "div",
            text: Some(label),
            ..Default::default()
        });
        node("button", Some("vd-wallet-block"), vec![name])
    }

    fn document(children: Vec<Rc<Node>>) -> FakeDocument {
        FakeDocument {
            body: FakeElement(node("body", None, children)),
        }
    }

    fn modal_with_id(blocks: Vec<Rc<Node>>) -> Rc<Node> {
        Rc::new(Node {
            tag: "div",
            id: Some(MODAL_ID),
            children: blocks,
            ..Default::default()
        })
    }

    #[test]
    fn no_modal_returns_false_without_clicking() {
        let stray = wallet_block("SAManager");
        let doc = document(vec![stray.clone()]);

        assert!(!try_auto_select(&doc));
        assert_eq!(scan(&doc, SAMANAGER), ScanOutcome::NoModal);
        assert_eq!(stray.clicks.get(), 0);
    }

    #[test]
    fn clicks_only_the_matching_block() {
        let metamask = wallet_block("MetaMask");
        let samanager = wallet_block("  SAManager\n");
        let other = wallet_block("SAManager Lite");
        let doc = document(vec![modal_with_id(vec![
            metamask.clone(),
            samanager.clone(),
            other.clone(),
        ])]);

        assert!(try_auto_select(&doc));
        assert_eq!(samanager.clicks.get(), 1);
        assert_eq!(metamask.clicks.get(), 0);
        assert_eq!(other.clicks.get(), 0);
    }

    #[test]
    fn falls_back_to_modal_column_class() {
        let samanager = wallet_block("SAManager");
        let column = node("div", Some("vd-modal-column"), vec![samanager.clone()]);
        let doc = document(vec![column]);

        assert_eq!(scan(&doc, SAMANAGER), ScanOutcome::Activated { index: 0 });
        assert_eq!(samanager.clicks.get(), 1);
    }

    #[test]
    fn modal_without_target_reports_miss() {
        let blocks = vec![wallet_block("MetaMask"), wallet_block("samanager")];
        let doc = document(vec![modal_with_id(blocks.clone())]);

        assert!(!try_auto_select(&doc));
        assert_eq!(scan(&doc, SAMANAGER), ScanOutcome::NotListed { blocks: 2 });
        assert!(blocks.iter().all(|b| b.clicks.get() == 0));
    }

    #[test]
    fn first_match_wins() {
        let first = wallet_block("SAManager");
        let second = wallet_block("SAManager");
        let doc = document(vec![modal_with_id(vec![first.clone(), second.clone()])]);

        assert!(try_auto_select(&doc));
        assert_eq!(first.clicks.get(), 1);
        assert_eq!(second.clicks.get(), 0);
    }

    #[test]
    fn other_wallet_names_can_be_targeted() {
        let metamask = wallet_block("MetaMask");
        let doc = document(vec![modal_with_id(vec![wallet_block("SAManager"), metamask.clone()])]);

        assert!(try_auto_select_wallet(&doc, "MetaMask"));
        assert_eq!(metamask.clicks.get(), 1);
    }

    #[test]
    fn unclickable_match_is_not_reported_as_selected() {
        let label = Rc::new(Node {
            tag: "div",
            text: Some("SAManager"),
            ..Default::default()
        });
        let inert = Rc::new(Node {
            tag: "svg",
            class: Some("vd-wallet-block"),
            children: vec![label],
            inert: true,
            ..Default::default()
        });
        let doc = document(vec![modal_with_id(vec![inert.clone()])]);

        assert!(!try_auto_select(&doc));
        assert_eq!(scan(&doc, SAMANAGER), ScanOutcome::NotActivatable { index: 0 });
        assert_eq!(inert.clicks.get(), 0);
    }
}
