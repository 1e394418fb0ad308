//! Navigation: resolve a location through the router, mount the view and
//! keep history and the nav links in step.

use crate::api;
use crate::dom;
use crate::state::AppContext;
use crate::views;
use dp_router::RouterError;
use wasm_bindgen::prelude::*;

pub fn current_path() -> String {
    dom::window()
        .location()
        .pathname()
        .unwrap_or_else(|_| "/".to_string())
}

/// Navigate to `path`. `push` adds a history entry (link clicks); popstate
/// and the initial load pass `false`. A navigation overtaken by a later one
/// neither touches history nor mounts anything.
pub async fn navigate(ctx: &AppContext, path: &str, push: bool) {
    let ticket = ctx.router.begin_navigation();
    let result = ctx.router.navigate(path).await;
    if !ctx.router.is_current(ticket) {
        tracing::debug!(path, "navigation superseded");
        return;
    }

    match result {
        Ok(nav) => {
            if push && nav.path != current_path() {
                if let Err(e) = push_state(&nav.path) {
                    tracing::warn!("pushState failed: {}", api::error_message(&e));
                }
            }
            if let Err(e) = views::mount(&ctx.els, &nav.view) {
                api::set_result_error(&ctx.els.view_status, &api::error_message(&e));
                return;
            }
            dom::set_text(&ctx.els.view_status, "");
            dom::remove_class(&ctx.els.view_status, "error");
            mark_active_link(ctx, nav.route);
        }
        Err(err @ RouterError::NoMatch(_)) => {
            tracing::warn!("{}", err);
        }
        Err(err @ RouterError::LoadFailed { .. }) => {
            tracing::error!("{}", err);
            api::set_result_error(&ctx.els.view_status, &err.to_string());
        }
    }
}

fn push_state(path: &str) -> Result<(), JsValue> {
    dom::window()
        .history()?
        .push_state_with_url(&JsValue::NULL, "", Some(path))
}

fn mark_active_link(ctx: &AppContext, route: &str) {
    for link in &ctx.els.nav_links {
        let active = link.get_attribute("data-route").as_deref() == Some(route);
        dom::toggle_class(link, "active", active);
    }
}

/// Point every nav link at its route under the base path.
pub fn set_link_targets(ctx: &AppContext) {
    for link in &ctx.els.nav_links {
        let route = link.get_attribute("data-route").unwrap_or_default();
        if let Some(href) = ctx.router.href(&route) {
            link.set_href(&href);
        }
    }
}
