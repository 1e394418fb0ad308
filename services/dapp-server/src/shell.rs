//! The page shell (`index.html`) with its `<base href>` pointed at the
//! configured base path, so the client router and relative asset URLs follow
//! the host.

use axum::{
    response::{Html, IntoResponse},
    routing::{MethodRouter, get},
};
use std::path::Path;
use std::sync::Arc;
use tracing::warn;

use crate::not_found;

const BASE_TAG: &str = "<base href=\"";
const HEAD_TAG: &str = "<head>";

/// Read `index.html` from `dist` and rewrite its base. `None` when missing.
pub(crate) fn load(dist: &Path, base: &str) -> Option<Arc<str>> {
    let path = dist.join("index.html");
    match std::fs::read_to_string(&path) {
        Ok(html) => Some(Arc::from(rewrite_base(&html, base))),
        Err(err) => {
            warn!("cannot read {}: {}", path.display(), err);
            None
        }
    }
}

/// Replace the first `<base href>` value, or insert one right after `<head>`.
pub(crate) fn rewrite_base(html: &str, base: &str) -> String {
    if let Some(start) = html.find(BASE_TAG) {
        let value_start = start + BASE_TAG.len();
        if let Some(len) = html[value_start..].find('"') {
            return format!(
                "{}{}{}",
                &html[..value_start],
                base,
                &html[value_start + len..]
            );
        }
    }

    match html.find(HEAD_TAG) {
        Some(i) => {
            let at = i + HEAD_TAG.len();
            format!("{}<base href=\"{}\" />{}", &html[..at], base, &html[at..])
        }
        None => format!("<base href=\"{base}\" />{html}"),
    }
}

/// GET handler serving the shell, 404 while the front-end is not built.
pub(crate) fn page(shell: Option<Arc<str>>) -> MethodRouter {
    get(move || {
        let shell = shell.clone();
        async move {
            match shell {
                Some(html) => Html(html.to_string()).into_response(),
                None => not_found("front-end not built").into_response(),
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn existing_base_href_is_replaced() {
        let html = r#"<head><base href="/dapp5792/" /><title>x</title></head>"#;
        assert_eq!(
            rewrite_base(html, "/preview/"),
            r#"<head><base href="/preview/" /><title>x</title></head>"#
        );
    }

    #[test]
    fn base_is_inserted_when_absent() {
        assert_eq!(
            rewrite_base("<html><head><title>x</title></head>", "/preview/"),
            r#"<html><head><base href="/preview/" /><title>x</title></head>"#
        );
        assert_eq!(rewrite_base("<p>bare</p>", "/"), r#"<base href="/" /><p>bare</p>"#);
    }

    #[test]
    fn missing_index_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(dir.path(), "/dapp5792/").is_none());
    }
}
