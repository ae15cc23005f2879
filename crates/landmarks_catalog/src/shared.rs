//! Catalog handle for concurrent hosts.

use crate::catalog::Catalog;
use crate::record::Landmark;
use crate::stats::Statistics;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable handle to one catalog behind a single lock.
///
/// Every add and every query takes the same lock, so a statistics read never
/// sees an add half applied.
#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<Mutex<Catalog>>,
}

impl SharedCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(Mutex::new(catalog)),
        }
    }

    pub fn add(&self, landmark: Landmark) -> bool {
        self.lock().add(landmark)
    }

    pub fn statistics(&self) -> Statistics {
        self.lock().statistics()
    }

    /// Owned copies, since the lock is released on return.
    pub fn by_type(&self, discovery_type: &str) -> Vec<Landmark> {
        self.lock()
            .by_type(discovery_type)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.lock().errors().to_vec()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Run `f` against the catalog while holding the lock.
    pub fn with<R>(&self, f: impl FnOnce(&mut Catalog) -> R) -> R {
        f(&mut self.lock())
    }

    // A panic inside `with` must not wedge the catalog; records are
    // append-only so the data is still consistent.
    fn lock(&self) -> MutexGuard<'_, Catalog> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
