use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

pub(crate) const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub(crate) const DEFAULT_DIST_DIR: &str = "ui/dapp-wasm/dist";

/// Runtime settings, read from `DAPP_*` environment variables.
#[derive(Debug, Clone)]
pub(crate) struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) dist_dir: PathBuf,
    /// Always `/segment/` form.
    pub(crate) base_path: String,
}

impl ServerConfig {
    pub(crate) fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = non_empty("DAPP_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr = bind_addr
            .trim()
            .parse::<SocketAddr>()
            .with_context(|| format!("invalid DAPP_BIND_ADDR: {bind_addr}"))?;

        let dist_dir = non_empty("DAPP_DIST_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));

        let base_path = non_empty("DAPP_BASE_PATH").unwrap_or_else(|| dp_router::BASE_PATH.to_owned());

        Ok(Self {
            bind_addr,
            dist_dir,
            base_path: dp_router::normalize_base(&base_path),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.dist_dir, PathBuf::from(DEFAULT_DIST_DIR));
        assert_eq!(config.base_path, "/dapp5792/");
    }

    #[test]
    fn overrides_are_read_and_normalised() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("DAPP_BIND_ADDR", "127.0.0.1:9000"),
            ("DAPP_DIST_DIR", "/srv/dapp"),
            ("DAPP_BASE_PATH", "preview"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:9000");
        assert_eq!(config.dist_dir, PathBuf::from("/srv/dapp"));
        assert_eq!(config.base_path, "/preview/");
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[("DAPP_BASE_PATH", "  ")])).unwrap();
        assert_eq!(config.base_path, "/dapp5792/");
    }

    #[test]
    fn bad_bind_addr_is_an_error() {
        let err = ServerConfig::from_lookup(lookup(&[("DAPP_BIND_ADDR", "not-an-addr")])).unwrap_err();
        assert!(err.to_string().contains("DAPP_BIND_ADDR"));
    }
}
