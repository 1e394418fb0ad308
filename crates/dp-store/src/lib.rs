//! Network selection state.
//!
//! Holds exactly one selected [`NetworkDescriptor`] and notifies subscribers
//! whenever a selection succeeds. The store is an ordinary owned value: the
//! UI shares it through its own context (see `ui/dapp-wasm`), nothing here is
//! global.

use dp_networks::NetworkDescriptor;
use std::fmt;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("unknown network: {0}")]
    UnknownNetwork(String),
    #[error("unknown chain id: {0}")]
    UnknownChainId(u64),
}

/// Handle returned by [`NetworkStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&NetworkDescriptor)>;

pub struct NetworkStore {
    selected: &'static NetworkDescriptor,
    observers: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
}

impl Default for NetworkStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for NetworkStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetworkStore")
            .field("selected", &self.selected.key)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl NetworkStore {
    /// Starts on the registry default (`baseSepolia`).
    pub fn new() -> Self {
        Self::with_selection(dp_networks::default_network())
    }

    pub fn with_selection(selected: &'static NetworkDescriptor) -> Self {
        Self {
            selected,
            observers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn current_selection(&self) -> &'static NetworkDescriptor {
        self.selected
    }

    pub fn available_networks(&self) -> &'static [NetworkDescriptor] {
        dp_networks::all()
    }

    /// Replace the selection with the network registered under `key`.
    ///
    /// An unknown key leaves the selection untouched, notifies nobody and
    /// reports [`StoreError::UnknownNetwork`].
    pub fn select_network(&mut self, key: &str) -> Result<&'static NetworkDescriptor, StoreError> {
        let network =
            dp_networks::get(key).ok_or_else(|| StoreError::UnknownNetwork(key.to_owned()))?;
        self.apply(network);
        Ok(network)
    }

    pub fn select_chain_id(&mut self, chain_id: u64) -> Result<&'static NetworkDescriptor, StoreError> {
        let network =
            dp_networks::by_chain_id(chain_id).ok_or(StoreError::UnknownChainId(chain_id))?;
        self.apply(network);
        Ok(network)
    }

    /// Register an observer. Observers run in subscription order after every
    /// successful selection, including re-selection of the current network.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&NetworkDescriptor) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    fn apply(&mut self, network: &'static NetworkDescriptor) {
        debug!(from = self.selected.key, to = network.key, "network selected");
        self.selected = network;
        for (_, observer) in self.observers.iter_mut() {
            observer(network);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dp_networks::{ARBITRUM_SEPOLIA, BASE_SEPOLIA, SEPOLIA};
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    #[test]
    fn starts_on_base_sepolia() {
        let store = NetworkStore::new();
        assert_eq!(store.current_selection().key, BASE_SEPOLIA);
        assert_eq!(store.current_selection(), dp_networks::get(BASE_SEPOLIA).unwrap());
    }

    #[test]
    fn select_known_network() {
        let mut store = NetworkStore::new();
        let selected = store.select_network(SEPOLIA).unwrap();
        assert_eq!(selected.key, SEPOLIA);
        assert_eq!(store.current_selection().key, SEPOLIA);
    }

    #[test]
    fn unknown_key_leaves_selection_unchanged() {
        let mut store = NetworkStore::new();
        store.select_network(ARBITRUM_SEPOLIA).unwrap();

        let err = store.select_network("doesNotExist").unwrap_err();
        assert_eq!(err, StoreError::UnknownNetwork("doesNotExist".to_owned()));
        assert_eq!(store.current_selection().key, ARBITRUM_SEPOLIA);
    }

    #[test]
    fn available_networks_match_registry() {
        let store = NetworkStore::new();
        let available: HashSet<_> = store.available_networks().iter().map(|n| n.key).collect();
        let registry: HashSet<_> = dp_networks::all().iter().map(|n| n.key).collect();
        assert_eq!(store.available_networks().len(), 3);
        assert_eq!(available, registry);
    }

    #[test]
    fn observers_see_each_successful_selection() {
        let mut store = NetworkStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = seen.clone();
        store.subscribe(move |network| sink.borrow_mut().push(network.key));

        store.select_network(SEPOLIA).unwrap();
        let _ = store.select_network("nope");
        store.select_network(SEPOLIA).unwrap();
        store.select_chain_id(421_614).unwrap();

        assert_eq!(*seen.borrow(), vec![SEPOLIA, SEPOLIA, ARBITRUM_SEPOLIA]);
    }

    #[test]
    fn observers_run_in_subscription_order() {
        let mut store = NetworkStore::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        for tag in ["first", "second"] {
            let sink = order.clone();
            store.subscribe(move |_| sink.borrow_mut().push(tag));
        }

        store.select_network(SEPOLIA).unwrap();
        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn unsubscribed_observer_is_not_called() {
        let mut store = NetworkStore::new();
        let calls = Rc::new(RefCell::new(0));

        let sink = calls.clone();
        let id = store.subscribe(move |_| *sink.borrow_mut() += 1);
        store.select_network(SEPOLIA).unwrap();

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.select_network(BASE_SEPOLIA).unwrap();

        assert_eq!(*calls.borrow(), 1);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn unknown_chain_id_is_reported() {
        let mut store = NetworkStore::new();
        assert_eq!(store.select_chain_id(1), Err(StoreError::UnknownChainId(1)));
        assert_eq!(store.current_selection().key, BASE_SEPOLIA);
    }
}
