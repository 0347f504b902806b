use std::sync::{Mutex, MutexGuard, PoisonError};

/// Bounded FIFO that overwrites its oldest entry when full.
///
/// Meant for handing audio samples from the emulation thread to an output
/// callback: the producer never blocks and never fails, and the consumer
/// reads silence (`T::default()`) when it outruns the producer. Share it
/// between threads through an `Arc`.
#[derive(Debug)]
pub struct SampleQueue<T> {
    ring: Mutex<Ring<T>>,
}

#[derive(Debug)]
struct Ring<T> {
    buffer: Box<[T]>,
    /// Next slot to write.
    head: usize,
    /// Oldest unread slot.
    tail: usize,
    /// Disambiguates `head == tail`.
    full: bool,
}

impl<T: Copy + Default> Ring<T> {
    fn capacity(&self) -> usize {
        self.buffer.len()
    }

    fn size(&self) -> usize {
        if self.full {
            self.capacity()
        } else if self.head >= self.tail {
            self.head - self.tail
        } else {
            self.capacity() + self.head - self.tail
        }
    }

    fn is_empty(&self) -> bool {
        !self.full && self.head == self.tail
    }

    /// Returns `true` if an unread item was overwritten.
    fn put(&mut self, item: T) -> bool {
        let overwrote = self.full;
        self.buffer[self.head] = item;
        if self.full {
            self.tail = (self.tail + 1) % self.capacity();
        }
        self.head = (self.head + 1) % self.capacity();
        self.full = self.head == self.tail;
        overwrote
    }

    fn get(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let item = self.buffer[self.tail];
        self.full = false;
        self.tail = (self.tail + 1) % self.capacity();
        Some(item)
    }

    fn reset(&mut self) {
        self.head = self.tail;
        self.full = false;
    }
}

impl<T: Copy + Default> SampleQueue<T> {
    /// Create a queue holding at most `capacity` items.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "SampleQueue capacity must be non-zero");
        Self {
            ring: Mutex::new(Ring {
                buffer: vec![T::default(); capacity].into_boxed_slice(),
                head: 0,
                tail: 0,
                full: false,
            }),
        }
    }

    // Every operation leaves the ring consistent, so a panic on another
    // thread while holding the lock does not corrupt it.
    fn lock(&self) -> MutexGuard<'_, Ring<T>> {
        self.ring.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append an item, overwriting the oldest one if the queue is full.
    pub fn put(&self, item: T) {
        if self.lock().put(item) {
            log::trace!("SampleQueue overrun: oldest sample dropped");
        }
    }

    /// Remove and return the oldest item, or `T::default()` if empty.
    pub fn get(&self) -> T {
        self.lock().get().unwrap_or_default()
    }

    /// Fill `out` from the queue under a single lock, padding with
    /// `T::default()` once the queue runs dry.
    ///
    /// Returns how many real items were copied.
    pub fn drain_into(&self, out: &mut [T]) -> usize {
        let mut ring = self.lock();
        let mut copied = 0;
        for slot in out.iter_mut() {
            match ring.get() {
                Some(item) => {
                    *slot = item;
                    copied += 1;
                }
                None => *slot = T::default(),
            }
        }
        if copied < out.len() {
            log::trace!("SampleQueue underrun: {} of {} samples", copied, out.len());
        }
        copied
    }

    /// Discard all queued items.
    pub fn reset(&self) {
        self.lock().reset();
    }

    pub fn size(&self) -> usize {
        self.lock().size()
    }

    pub fn capacity(&self) -> usize {
        self.lock().capacity()
    }

    pub fn full(&self) -> bool {
        self.lock().full
    }

    pub fn empty(&self) -> bool {
        self.lock().is_empty()
    }
}
