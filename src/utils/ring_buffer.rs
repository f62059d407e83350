use log::{debug, trace};

use crate::error::{IngestError, IngestResult};

/// What `append` does when the buffer is already full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Overwrite the oldest element. The evicted value is dropped.
    #[default]
    EvictOldest,
    /// Fail with `IngestError::Overflow` and leave the buffer untouched.
    Reject,
}

/// Fixed-capacity FIFO over a rotating backing store.
///
/// Live elements sit in the circular window starting at `head` of length
/// `len`; logical index `i` lives at physical slot `(head + i) % capacity`.
/// Index 0 is always the oldest element.
#[derive(Debug)]
pub struct RingBuffer<T> {
    buf: Vec<Option<T>>,
    head: usize,
    len: usize,
    policy: OverflowPolicy,
}

impl<T> RingBuffer<T> {
    pub fn new(capacity: usize, policy: OverflowPolicy) -> IngestResult<Self> {
        if capacity == 0 {
            return Err(IngestError::InvalidCapacity(capacity));
        }
        let mut buf = Vec::with_capacity(capacity);
        buf.resize_with(capacity, || None);
        debug!(
            "ring buffer created: capacity={} policy={:?}",
            capacity, policy
        );
        Ok(Self {
            buf,
            head: 0,
            len: 0,
            policy,
        })
    }

    /// Empty buffer that evicts the oldest element on overflow.
    pub fn evicting(capacity: usize) -> IngestResult<Self> {
        Self::new(capacity, OverflowPolicy::EvictOldest)
    }

    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
    pub fn is_full(&self) -> bool {
        self.len == self.buf.len()
    }
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }
    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    #[inline]
    fn physical(&self, logical: usize) -> usize {
        (self.head + logical) % self.buf.len()
    }

    pub fn append(&mut self, item: T) -> IngestResult<()> {
        let cap = self.buf.len();
        if self.len < cap {
            let tail = self.physical(self.len);
            self.buf[tail] = Some(item);
            self.len += 1;
            return Ok(());
        }
        match self.policy {
            OverflowPolicy::EvictOldest => {
                trace!("ring buffer full, evicting slot {}", self.head);
                self.buf[self.head] = Some(item);
                self.head = (self.head + 1) % cap;
                Ok(())
            }
            OverflowPolicy::Reject => {
                trace!("ring buffer full, rejecting append (capacity {})", cap);
                Err(IngestError::Overflow { capacity: cap })
            }
        }
    }

    pub fn remove_oldest(&mut self) -> IngestResult<T> {
        if self.len == 0 {
            return Err(IngestError::Underflow);
        }
        let idx = self.head;
        let item = self.buf[idx].take().ok_or(IngestError::Underflow)?;
        self.head = (self.head + 1) % self.buf.len();
        self.len -= 1;
        Ok(item)
    }

    pub fn get(&self, index: usize) -> IngestResult<&T> {
        let out_of_range = IngestError::IndexOutOfRange {
            index,
            len: self.len,
        };
        if index >= self.len {
            return Err(out_of_range);
        }
        self.buf[self.physical(index)]
            .as_ref()
            .ok_or(out_of_range)
    }

    pub fn peek_oldest(&self) -> Option<&T> {
        self.get(0).ok()
    }

    pub fn peek_newest(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|i| self.get(i).ok())
    }

    /// Iterates live elements oldest to newest.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { ring: self, pos: 0 }
    }

    /// Drops every live element. Capacity and policy are kept.
    pub fn clear(&mut self) {
        for slot in self.buf.iter_mut() {
            *slot = None;
        }
        self.head = 0;
        self.len = 0;
    }
}

impl<T: Clone> RingBuffer<T> {
    /// Full buffer with `value` in every slot, as if `capacity` copies of it
    /// had been appended. Always evicts on overflow.
    pub fn with_default(capacity: usize, value: T) -> IngestResult<Self> {
        if capacity == 0 {
            return Err(IngestError::InvalidCapacity(capacity));
        }
        debug!("ring buffer created pre-filled: capacity={}", capacity);
        Ok(Self {
            buf: vec![Some(value); capacity],
            head: 0,
            len: capacity,
            policy: OverflowPolicy::EvictOldest,
        })
    }

    /// Owned copy of the live elements, oldest first.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

pub struct Iter<'a, T> {
    ring: &'a RingBuffer<T>,
    pos: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let ring = self.ring;
        if self.pos >= ring.len {
            return None;
        }
        let idx = ring.physical(self.pos);
        self.pos += 1;
        ring.buf[idx].as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.ring.len - self.pos;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
