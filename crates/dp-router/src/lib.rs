//! Path-to-view routing under a fixed base path.
//!
//! A route is either eager (its view exists from startup) or lazy (a loader
//! produces the view on first navigation). Navigations that arrive while a
//! lazy load is in flight wait on that same load. A successful load is cached
//! for the life of the router; a failed one is reported to every waiter and
//! forgotten, so the next navigation calls the loader again. The router never
//! retries on its own.
//!
//! Navigations may finish out of order. Callers take a [`NavigationTicket`]
//! before navigating and only apply the result while
//! [`Router::is_current`] holds for it.

use futures::FutureExt;
use futures::future::Shared;
use std::cell::{Cell, RefCell};
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;
use tracing::{info, warn};

/// Prefix the application is served under by default.
pub const BASE_PATH: &str = "/dapp5792/";

pub const HOME: &str = "home";
pub const RPC: &str = "rpc";

pub type LoadFuture<V> = Pin<Box<dyn Future<Output = Result<V, String>>>>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterError {
    #[error("no route matches {0}")]
    NoMatch(String),
    #[error("failed to load view for route {route}: {message}")]
    LoadFailed { route: &'static str, message: String },
}

/// `/segment/` form; empty input yields `/`.
pub fn normalize_base(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_owned()
    } else {
        format!("/{trimmed}/")
    }
}

/// Base path from a document URL (`document.baseURI`): the directory part of
/// its path.
pub fn base_from_url(url: &str) -> String {
    let rest = url.split_once("://").map(|(_, rest)| rest).unwrap_or(url);
    let path = match rest.find('/') {
        Some(i) => &rest[i..],
        None => "/",
    };
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let dir = match path.rfind('/') {
        Some(i) => &path[..=i],
        None => "/",
    };
    normalize_base(dir)
}

enum LazyState<V> {
    Idle,
    Loading {
        attempt: u64,
        load: Shared<LoadFuture<V>>,
    },
    Loaded(V),
}

enum RouteView<V> {
    Eager(V),
    Lazy {
        loader: Box<dyn Fn() -> LoadFuture<V>>,
        state: RefCell<LazyState<V>>,
        attempts: Cell<u64>,
    },
}

pub struct Route<V> {
    pub name: &'static str,
    pub path: &'static str,
    view: RouteView<V>,
}

impl<V> Route<V> {
    pub fn is_lazy(&self) -> bool {
        matches!(self.view, RouteView::Lazy { .. })
    }

    /// True for eager routes and for lazy routes whose view has been loaded.
    pub fn is_ready(&self) -> bool {
        match &self.view {
            RouteView::Eager(_) => true,
            RouteView::Lazy { state, .. } => matches!(*state.borrow(), LazyState::Loaded(_)),
        }
    }
}

/// Issued by [`Router::begin_navigation`]; newer tickets supersede older ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationTicket(u64);

/// Result of a completed navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation<V> {
    pub route: &'static str,
    pub path: String,
    pub view: V,
}

pub struct Router<V> {
    base: String,
    routes: Vec<Route<V>>,
    latest: Cell<u64>,
}

impl<V: Clone + 'static> Router<V> {
    pub fn new(base: &str) -> Self {
        Self {
            base: normalize_base(base),
            routes: Vec::new(),
            latest: Cell::new(0),
        }
    }

    pub fn eager(mut self, name: &'static str, path: &'static str, view: V) -> Self {
        self.routes.push(Route {
            name,
            path,
            view: RouteView::Eager(view),
        });
        self
    }

    pub fn lazy<F, Fut>(mut self, name: &'static str, path: &'static str, loader: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<V, String>> + 'static,
    {
        self.routes.push(Route {
            name,
            path,
            view: RouteView::Lazy {
                loader: Box::new(move || -> LoadFuture<V> { Box::pin(loader()) }),
                state: RefCell::new(LazyState::Idle),
                attempts: Cell::new(0),
            },
        });
        self
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn routes(&self) -> impl Iterator<Item = &Route<V>> {
        self.routes.iter()
    }

    /// Mark the start of a navigation; any earlier ticket stops being current.
    pub fn begin_navigation(&self) -> NavigationTicket {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        NavigationTicket(next)
    }

    pub fn is_current(&self, ticket: NavigationTicket) -> bool {
        self.latest.get() == ticket.0
    }

    /// Match a browser location path (including the base) to a route.
    pub fn resolve(&self, location_path: &str) -> Result<&Route<V>, RouterError> {
        let path = self
            .relative_path(location_path)
            .ok_or_else(|| RouterError::NoMatch(location_path.to_owned()))?;

        self.routes
            .iter()
            .find(|route| route.path == path)
            .ok_or_else(|| RouterError::NoMatch(location_path.to_owned()))
    }

    /// Full location path for a named route.
    pub fn href(&self, name: &str) -> Option<String> {
        let route = self.routes.iter().find(|route| route.name == name)?;
        Some(format!("{}{}", self.base.trim_end_matches('/'), route.path))
    }

    pub async fn navigate(&self, location_path: &str) -> Result<Navigation<V>, RouterError> {
        let route = self.resolve(location_path)?;
        let path = format!("{}{}", self.base.trim_end_matches('/'), route.path);

        let view = match &route.view {
            RouteView::Eager(view) => view.clone(),
            RouteView::Lazy {
                loader,
                state,
                attempts,
            } => load_once(route.name, loader, state, attempts).await?,
        };

        Ok(Navigation {
            route: route.name,
            path,
            view,
        })
    }

    /// Strip query, fragment and base prefix; trailing slashes are not
    /// significant except for the root.
    fn relative_path<'a>(&self, location_path: &'a str) -> Option<&'a str> {
        let path = location_path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();

        let base_no_slash = self.base.trim_end_matches('/');
        let rest = if base_no_slash.is_empty() {
            path
        } else {
            path.strip_prefix(base_no_slash)?
        };

        if !rest.is_empty() && !rest.starts_with('/') {
            return None;
        }

        let rest = rest.trim_end_matches('/');
        Some(if rest.is_empty() { "/" } else { rest })
    }
}

async fn load_once<V: Clone + 'static>(
    route: &'static str,
    loader: &dyn Fn() -> LoadFuture<V>,
    state: &RefCell<LazyState<V>>,
    attempts: &Cell<u64>,
) -> Result<V, RouterError> {
    let (attempt, load) = {
        let mut current = state.borrow_mut();
        match &*current {
            LazyState::Loaded(view) => return Ok(view.clone()),
            LazyState::Loading { attempt, load } => (*attempt, load.clone()),
            LazyState::Idle => {
                let attempt = attempts.get() + 1;
                attempts.set(attempt);
                info!(route, "loading view");
                let load = loader().shared();
                *current = LazyState::Loading {
                    attempt,
                    load: load.clone(),
                };
                (attempt, load)
            }
        }
    };

    let result = load.await;

    // Only the waiters of the attempt still on record settle the state.
    let mut current = state.borrow_mut();
    let owns_state = matches!(&*current, LazyState::Loading { attempt: a, .. } if *a == attempt);
    match result {
        Ok(view) => {
            if owns_state {
                *current = LazyState::Loaded(view.clone());
            }
            Ok(view)
        }
        Err(message) => {
            if owns_state {
                warn!(route, "view load failed: {}", message);
                *current = LazyState::Idle;
            }
            Err(RouterError::LoadFailed { route, message })
        }
    }
}
