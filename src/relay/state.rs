use std::sync::Arc;

use super::notifier::Notifier;
use crate::storage::LocalStorage;

/// Shared state of the relay service
pub struct State {
    pub storage: LocalStorage,
    pub notifier: Box<dyn Notifier>,
    /// Expected bearer token; requests are not authenticated when empty
    pub anon_key: String,
}

impl State {
    pub fn new(storage: LocalStorage, notifier: Box<dyn Notifier>, anon_key: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            storage,
            notifier,
            anon_key: anon_key.into(),
        })
    }
}
