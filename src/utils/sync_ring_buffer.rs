use parking_lot::Mutex;

use crate::error::IngestResult;
use crate::utils::ring_buffer::{OverflowPolicy, RingBuffer};

/// A `RingBuffer` behind a single mutex.
/// Each call takes the lock for its own duration only, so concurrent callers
/// observe some serial order of whole operations. Element reads hand back
/// clones because references cannot outlive the guard.
#[derive(Debug)]
pub struct SyncRingBuffer<T> {
    inner: Mutex<RingBuffer<T>>,
}

impl<T> SyncRingBuffer<T> {
    pub fn new(capacity: usize, policy: OverflowPolicy) -> IngestResult<Self> {
        Ok(Self::from_inner(RingBuffer::new(capacity, policy)?))
    }

    pub fn evicting(capacity: usize) -> IngestResult<Self> {
        Ok(Self::from_inner(RingBuffer::evicting(capacity)?))
    }

    pub fn from_inner(ring: RingBuffer<T>) -> Self {
        Self {
            inner: Mutex::new(ring),
        }
    }

    pub fn into_inner(self) -> RingBuffer<T> {
        self.inner.into_inner()
    }

    pub fn append(&self, item: T) -> IngestResult<()> {
        self.inner.lock().append(item)
    }

    pub fn remove_oldest(&self) -> IngestResult<T> {
        self.inner.lock().remove_oldest()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.inner.lock().is_full()
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    pub fn policy(&self) -> OverflowPolicy {
        self.inner.lock().policy()
    }

    pub fn clear(&self) {
        self.inner.lock().clear()
    }
}

impl<T: Clone> SyncRingBuffer<T> {
    pub fn with_default(capacity: usize, value: T) -> IngestResult<Self> {
        Ok(Self::from_inner(RingBuffer::with_default(capacity, value)?))
    }

    pub fn get(&self, index: usize) -> IngestResult<T> {
        self.inner.lock().get(index).cloned()
    }

    pub fn peek_oldest(&self) -> Option<T> {
        self.inner.lock().peek_oldest().cloned()
    }

    pub fn peek_newest(&self) -> Option<T> {
        self.inner.lock().peek_newest().cloned()
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.inner.lock().to_vec()
    }
}
