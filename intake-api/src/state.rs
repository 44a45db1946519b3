//! Shared handler state.
//!
//! The store is injected as a trait object so handlers never touch a global
//! binding; the process hosting the HTTP layer owns the store lifecycle.

use std::sync::Arc;

use storage::KvStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn KvStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }
}
