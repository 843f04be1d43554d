//! Fixed-capacity contiguous slot storage.
//!
//! Slots `[0, len)` are live, `[len, capacity)` are uninitialized. Removal
//! from the middle compacts by shifting the survivors left, so relative
//! order is preserved.

use core::fmt;
use core::mem::MaybeUninit;
use core::ptr;

use crate::Full;

/// Fixed-capacity array of items with a live prefix.
///
/// Allocated once at construction; never grows.
///
/// # Example
///
/// ```
/// use nexus_heap::ArrayStore;
///
/// let mut store: ArrayStore<u32> = ArrayStore::with_capacity(4);
/// store.try_append(10).unwrap();
/// store.try_append(20).unwrap();
/// store.try_append(30).unwrap();
///
/// assert_eq!(store.compact_remove(0), 10);
/// assert_eq!(store.as_slice(), &[20, 30]);
/// ```
pub struct ArrayStore<T> {
    slots: Box<[MaybeUninit<T>]>,
    len: usize,
}

impl<T> ArrayStore<T> {
    /// Creates storage with exactly `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");

        let slots = core::iter::repeat_with(MaybeUninit::uninit)
            .take(capacity)
            .collect();

        Self { slots, len: 0 }
    }

    /// Returns the fixed capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of live slots.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no slots are live.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if every slot is live.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Writes `value` into the first free slot.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(value))` if every slot is live.
    #[inline]
    pub fn try_append(&mut self, value: T) -> Result<usize, Full<T>> {
        if self.is_full() {
            return Err(Full(value));
        }

        let pos = self.len;
        self.slots[pos].write(value);
        self.len += 1;
        Ok(pos)
    }

    /// Removes and returns the last live item. O(1).
    #[inline]
    pub fn pop_tail(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        // Safety: slot `len` was live and is now outside the live prefix
        Some(unsafe { self.slots[self.len].assume_init_read() })
    }

    /// Removes the item at `index`, shifting every later item one slot left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    pub fn compact_remove(&mut self, index: usize) -> T {
        assert!(index < self.len, "index {index} out of bounds (len {})", self.len);

        // Safety: index < len, so the slot is live
        let value = unsafe { self.slots[index].assume_init_read() };

        let tail = self.len - index - 1;
        if tail > 0 {
            let base = self.slots.as_mut_ptr();
            // Safety: both ranges lie within [0, len); copy handles overlap
            unsafe { ptr::copy(base.add(index + 1), base.add(index), tail) };
        }
        self.len -= 1;

        value
    }

    /// Exchanges two live slots.
    ///
    /// # Panics
    ///
    /// Panics if either index is `>= len`.
    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }

    /// Returns the live item at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns the live prefix as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // Safety: [0, len) is initialized; MaybeUninit<T> has T's layout
        unsafe { core::slice::from_raw_parts(self.slots.as_ptr().cast::<T>(), self.len) }
    }

    /// Returns the live prefix as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // Safety: [0, len) is initialized; MaybeUninit<T> has T's layout
        unsafe { core::slice::from_raw_parts_mut(self.slots.as_mut_ptr().cast::<T>(), self.len) }
    }

    /// Removes every live item front to back.
    ///
    /// Items the iterator does not yield are dropped with it.
    pub fn drain(&mut self) -> Drain<'_, T> {
        let end = self.len;
        // Ownership of [0, end) moves to the iterator
        self.len = 0;
        Drain {
            store: self,
            next: 0,
            end,
        }
    }

    /// Drops every live item.
    pub fn clear(&mut self) {
        let live: *mut [T] = self.as_mut_slice();
        self.len = 0;
        // Safety: items were live and are no longer reachable through len
        unsafe { ptr::drop_in_place(live) };
    }
}

impl<T> Drop for ArrayStore<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayStore")
            .field("capacity", &self.capacity())
            .field("items", &self.as_slice())
            .finish()
    }
}

/// Front-to-back draining iterator.
///
/// Created by [`ArrayStore::drain`].
pub struct Drain<'a, T> {
    store: &'a mut ArrayStore<T>,
    next: usize,
    end: usize,
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.next == self.end {
            return None;
        }

        let pos = self.next;
        self.next += 1;
        // Safety: pos was live when draining began and is yielded once
        Some(unsafe { self.store.slots[pos].assume_init_read() })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.end - self.next;
        (rem, Some(rem))
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {}

impl<T> Drop for Drain<'_, T> {
    fn drop(&mut self) {
        for pos in self.next..self.end {
            // Safety: remaining slots were live and never yielded
            unsafe { self.store.slots[pos].assume_init_drop() };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Debug)]
    struct DropCounter(Rc<Cell<usize>>);

    impl Drop for DropCounter {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn new_is_empty() {
        let store: ArrayStore<u32> = ArrayStore::with_capacity(3);
        assert!(store.is_empty());
        assert!(!store.is_full());
        assert_eq!(store.capacity(), 3);
        assert_eq!(store.len(), 0);
    }

    #[test]
    #[should_panic(expected = "capacity must be > 0")]
    fn zero_capacity_panics() {
        let _ = ArrayStore::<u32>::with_capacity(0);
    }

    #[test]
    fn append_until_full() {
        let mut store: ArrayStore<u32> = ArrayStore::with_capacity(2);

        assert_eq!(store.try_append(1), Ok(0));
        assert_eq!(store.try_append(2), Ok(1));
        assert!(store.is_full());

        let err = store.try_append(3).unwrap_err();
        assert_eq!(err.into_inner(), 3);
        assert_eq!(store.as_slice(), &[1, 2]);
    }

    #[test]
    fn pop_tail() {
        let mut store: ArrayStore<u32> = ArrayStore::with_capacity(4);
        assert_eq!(store.pop_tail(), None);

        store.try_append(1).unwrap();
        store.try_append(2).unwrap();

        assert_eq!(store.pop_tail(), Some(2));
        assert_eq!(store.pop_tail(), Some(1));
        assert_eq!(store.pop_tail(), None);
    }

    #[test]
    fn compact_remove_preserves_order() {
        let mut store: ArrayStore<u32> = ArrayStore::with_capacity(5);
        for v in [10, 20, 30, 40, 50] {
            store.try_append(v).unwrap();
        }

        assert_eq!(store.compact_remove(1), 20);
        assert_eq!(store.as_slice(), &[10, 30, 40, 50]);

        assert_eq!(store.compact_remove(3), 50);
        assert_eq!(store.as_slice(), &[10, 30, 40]);

        assert_eq!(store.compact_remove(0), 10);
        assert_eq!(store.as_slice(), &[30, 40]);

        // Freed slot is reusable
        store.try_append(60).unwrap();
        assert_eq!(store.as_slice(), &[30, 40, 60]);
    }

    #[test]
    #[should_panic]
    fn compact_remove_out_of_bounds() {
        let mut store: ArrayStore<u32> = ArrayStore::with_capacity(2);
        store.try_append(1).unwrap();
        store.compact_remove(1);
    }

    #[test]
    fn swap_and_get() {
        let mut store: ArrayStore<&str> = ArrayStore::with_capacity(3);
        store.try_append("a").unwrap();
        store.try_append("b").unwrap();

        store.swap(0, 1);
        assert_eq!(store.get(0), Some(&"b"));
        assert_eq!(store.get(1), Some(&"a"));
        assert_eq!(store.get(2), None);
    }

    #[test]
    fn drain_yields_front_to_back() {
        let mut store: ArrayStore<u32> = ArrayStore::with_capacity(4);
        for v in [3, 1, 2] {
            store.try_append(v).unwrap();
        }

        let drained: Vec<_> = store.drain().collect();
        assert_eq!(drained, vec![3, 1, 2]);
        assert!(store.is_empty());
    }

    #[test]
    fn partial_drain_drops_rest() {
        let drops = Rc::new(Cell::new(0));
        let mut store = ArrayStore::with_capacity(4);
        for _ in 0..4 {
            store.try_append(DropCounter(drops.clone())).unwrap();
        }

        {
            let mut drain = store.drain();
            drop(drain.next());
            assert_eq!(drops.get(), 1);
        }
        assert_eq!(drops.get(), 4);
        assert!(store.is_empty());
    }

    #[test]
    fn drop_releases_live_items_only() {
        let drops = Rc::new(Cell::new(0));
        {
            let mut store = ArrayStore::with_capacity(8);
            for _ in 0..3 {
                store.try_append(DropCounter(drops.clone())).unwrap();
            }
            let removed = store.compact_remove(0);
            drop(removed);
            assert_eq!(drops.get(), 1);
        }
        assert_eq!(drops.get(), 3);
    }
}
