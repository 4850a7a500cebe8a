//! Append-only notification log shared between the gateway and its readers.
//!
//! `MessageService` is a cheap handle: clones share one log. Unbounded by
//! default; `bounded` drops the oldest entry once full.

use std::collections::VecDeque;
use std::num::NonZeroUsize;
use std::sync::Arc;

use parking_lot::Mutex;

#[derive(Debug, Clone, Default)]
pub struct MessageService {
    inner: Arc<Mutex<Log>>,
}

#[derive(Debug, Default)]
struct Log {
    entries: VecDeque<String>,
    capacity: Option<NonZeroUsize>,
}

impl MessageService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bounded(capacity: NonZeroUsize) -> Self {
        Self::with_capacity(Some(capacity))
    }

    pub fn with_capacity(capacity: Option<NonZeroUsize>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Log {
                entries: VecDeque::new(),
                capacity,
            })),
        }
    }

    pub fn add(&self, message: impl Into<String>) {
        let mut log = self.inner.lock();
        if let Some(cap) = log.capacity {
            while log.entries.len() >= cap.get() {
                log.entries.pop_front();
            }
        }
        log.entries.push_back(message.into());
    }

    /// Snapshot of the log, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.inner.lock().entries.iter().cloned().collect()
    }

    pub fn clear(&self) {
        self.inner.lock().entries.clear();
    }

    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().entries.is_empty()
    }

    pub fn capacity(&self) -> Option<NonZeroUsize> {
        self.inner.lock().capacity
    }
}
