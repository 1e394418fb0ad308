//! Glue between the connect widget's modal and the one-shot wallet scan.

use crate::dom::{self, Elements, LiveDocument};

/// Scan the live document once and click `SAManager` if it is listed.
pub fn auto_select_samanager() -> bool {
    dp_autoselect::try_auto_select(&LiveDocument::current())
}

pub fn on_auto_select(els: &Elements) {
    if auto_select_samanager() {
        dom::remove_class(&els.auto_select_result, "error");
        dom::set_text(&els.auto_select_result, "SAManager selected");
    } else {
        dom::add_class(&els.auto_select_result, "error");
        dom::set_text(
            &els.auto_select_result,
            "wallet modal not open or SAManager not listed",
        );
    }
}
