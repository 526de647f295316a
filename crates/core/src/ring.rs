//! Fixed-capacity ring buffer.
//!
//! Backing storage is an inline array of `N` slots; `front` and `len` are the
//! only bookkeeping. The tail slot is derived as `(front + len) % N`, so there
//! is no separate back index that could drift out of sync.

use std::iter::FusedIterator;

#[derive(Debug, Clone)]
pub struct RingBuffer<T: Copy, const N: usize> {
    slots: [Option<T>; N],
    front: usize,
    len: usize,
}

impl<T: Copy, const N: usize> RingBuffer<T, N> {
    pub fn new() -> Self {
        Self {
            slots: [None; N],
            front: 0,
            len: 0,
        }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Append at the tail. Hands the value back if the buffer is full.
    pub fn push_back(&mut self, value: T) -> Result<(), T> {
        if self.is_full() {
            return Err(value);
        }
        let tail = (self.front + self.len) % N;
        self.slots[tail] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the head.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.slots[self.front].take();
        self.front = (self.front + 1) % N;
        self.len -= 1;
        value
    }

    pub fn peek_front(&self) -> Option<&T> {
        self.get(0)
    }

    pub fn peek_back(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|last| self.get(last))
    }

    /// Element at logical position `index` (0 = head).
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.slots[(self.front + index) % N].as_ref()
    }

    pub fn clear(&mut self) {
        self.slots = [None; N];
        self.front = 0;
        self.len = 0;
    }

    /// Iterate head to tail.
    pub fn iter(&self) -> Iter<'_, T, N> {
        Iter {
            ring: self,
            index: 0,
        }
    }
}

impl<T: Copy, const N: usize> Default for RingBuffer<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: Copy, const N: usize> IntoIterator for &'a RingBuffer<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Head-to-tail iterator over a [`RingBuffer`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T: Copy, const N: usize> {
    ring: &'a RingBuffer<T, N>,
    index: usize,
}

impl<'a, T: Copy, const N: usize> Iterator for Iter<'a, T, N> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.ring.get(self.index)?;
        self.index += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.ring.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<T: Copy, const N: usize> ExactSizeIterator for Iter<'_, T, N> {}

impl<T: Copy, const N: usize> FusedIterator for Iter<'_, T, N> {}
