//! Load-once storage for one collection.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

/// Holds a collection after its first successful load.
///
/// Concurrent first callers serialize on `init`, so the loader runs once; every
/// caller after that gets a clone of the same `Arc`. A loader error is returned
/// to its caller and nothing is cached, so the next call tries again.
#[derive(Debug)]
pub struct Slot<V> {
    value: OnceLock<Arc<V>>,
    init: Mutex<()>,
    loads: AtomicUsize,
}

impl<V> Slot<V> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            value: OnceLock::new(),
            init: Mutex::new(()),
            loads: AtomicUsize::new(0),
        }
    }

    /// Return the cached value, running `load` first if nothing is cached yet.
    ///
    /// # Errors
    ///
    /// Returns whatever `load` returns on failure.
    pub fn get_or_try_load<E>(&self, load: impl FnOnce() -> Result<V, E>) -> Result<Arc<V>, E> {
        if let Some(value) = self.value.get() {
            return Ok(Arc::clone(value));
        }

        let _guard = self.init.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(value) = self.value.get() {
            return Ok(Arc::clone(value));
        }

        self.loads.fetch_add(1, Ordering::SeqCst);
        let value = Arc::new(load()?);
        // Only this thread can set the cell while the guard is held.
        let _ = self.value.set(Arc::clone(&value));
        Ok(value)
    }

    /// The cached value, without loading.
    #[must_use]
    pub fn get(&self) -> Option<Arc<V>> {
        self.value.get().cloned()
    }

    /// Number of times the loader has run, including failed runs.
    #[must_use]
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl<V> Default for Slot<V> {
    fn default() -> Self {
        Self::new()
    }
}
