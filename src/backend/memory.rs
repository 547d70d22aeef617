//! In-memory backend for embedded bundles and tests.

use std::collections::HashMap;
use std::sync::atomic::{
    AtomicUsize,
    Ordering,
};

use serde_json::Value;

use super::{
    Backend,
    BackendError,
};

#[derive(Debug, Clone)]
enum Entry {
    Bundle(Value),
    Failure(String),
}

/// Serves bundles from a map keyed by language. The namespace is ignored.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, Entry>,
    reads: AtomicUsize,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_bundle(mut self, lng: impl Into<String>, bundle: Value) -> Self {
        self.entries.insert(lng.into(), Entry::Bundle(bundle));
        self
    }

    /// Make every read of `lng` fail with a transport error.
    #[must_use]
    pub fn with_failure(mut self, lng: impl Into<String>, message: impl Into<String>) -> Self {
        self.entries.insert(lng.into(), Entry::Failure(message.into()));
        self
    }

    /// Number of `read` calls served so far.
    #[must_use]
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::Relaxed)
    }
}

impl Backend for MemoryBackend {
    async fn read(&self, lng: &str, ns: &str) -> Result<Value, BackendError> {
        self.reads.fetch_add(1, Ordering::Relaxed);
        match self.entries.get(lng) {
            Some(Entry::Bundle(value)) => Ok(value.clone()),
            Some(Entry::Failure(message)) => Err(BackendError::Failed(message.clone())),
            None => Err(BackendError::NotFound { path: format!("memory://{lng}/{ns}") }),
        }
    }
}
