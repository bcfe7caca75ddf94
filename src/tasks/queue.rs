use std::collections::VecDeque;

use parking_lot::Mutex;

use crate::domain::QueueSnapshot;

/// In-process trigger queue between the cron scheduler and the ingest worker.
/// Draining takes everything at once, so triggers that pile up while a run is
/// in flight coalesce into a single run.
#[derive(Debug)]
pub struct TriggerQueue<T> {
    inner: Mutex<VecDeque<T>>,
}

impl<T> TriggerQueue<T> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(VecDeque::new()),
        }
    }

    pub fn push(&self, value: T) {
        self.inner.lock().push_back(value);
    }

    pub fn drain(&self) -> Vec<T> {
        self.inner.lock().drain(..).collect()
    }

    pub fn snapshot(&self) -> QueueSnapshot {
        QueueSnapshot {
            pending: self.inner.lock().len(),
        }
    }
}
