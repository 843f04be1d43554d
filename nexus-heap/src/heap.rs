//! Fixed-capacity binary heap with a caller-supplied comparator.
//!
//! The heap owns its items. Anything handed back by a `remove_*` call
//! belongs to the caller again; only items still resident when the heap is
//! torn down reach the free hook.

use core::fmt;

use crate::sift::{self, is_leaf};
use crate::{ArrayStore, Comparator, ConfigError, Full, HeapError, Order};

/// Diagnostic hook that renders one item.
pub type Printer<T> = Box<dyn Fn(&T, &mut dyn fmt::Write) -> fmt::Result>;

/// Release hook run on every item still resident at teardown.
pub type Freer<T> = Box<dyn FnMut(T)>;

/// A bounded min- or max-heap.
///
/// Capacity is fixed at construction; pushing onto a full heap returns the
/// item in [`Full`] instead of growing.
///
/// # Example
///
/// ```
/// use nexus_heap::{Heap, Natural, Order};
///
/// let mut heap = Heap::new(5, Order::Min, Natural).unwrap();
/// for v in [5, 3, 8, 1, 9] {
///     heap.try_push(v).unwrap();
/// }
///
/// // Full: the item comes back
/// assert_eq!(heap.try_push(2).unwrap_err().into_inner(), 2);
///
/// assert_eq!(heap.peek(), Ok(&1));
/// assert_eq!(heap.peek_opposite(), Ok(&9));
/// assert_eq!(heap.remove_root(), Ok(1));
/// assert_eq!(heap.remove_root(), Ok(3));
/// ```
pub struct Heap<T, C> {
    store: ArrayStore<T>,
    order: Order,
    cmp: C,
    printer: Option<Printer<T>>,
    freer: Option<Freer<T>>,
}

impl<T, C: Comparator<T>> Heap<T, C> {
    /// Creates an empty heap.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroCapacity`] if `capacity` is 0.
    pub fn new(capacity: usize, order: Order, cmp: C) -> Result<Self, ConfigError> {
        Self::builder()
            .capacity(capacity)
            .order(order)
            .comparator(cmp)
            .build()
    }

    /// Starts a [`HeapBuilder`].
    #[inline]
    pub fn builder() -> HeapBuilder<T, C> {
        HeapBuilder::new()
    }

    // ========================================================================
    // Insert
    // ========================================================================

    /// Appends `item` and sifts it up to its place.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(item))` if the heap is full. The heap is unchanged.
    pub fn try_push(&mut self, item: T) -> Result<(), Full<T>> {
        match self.store.try_append(item) {
            Ok(pos) => {
                sift::sift_up(&mut self.store, &self.cmp, self.order, pos);
                Ok(())
            }
            Err(full) => {
                log::trace!("heap push rejected: at capacity {}", self.store.capacity());
                Err(full)
            }
        }
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Returns the first resident item, in storage order, that compares
    /// equal to `probe`. The item stays in the heap.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::NotFound`] if nothing matches, including when the
    /// heap is empty.
    pub fn search(&self, probe: &T) -> Result<&T, HeapError> {
        let pos = self.position(probe).ok_or(HeapError::NotFound)?;
        Ok(&self.store.as_slice()[pos])
    }

    /// Returns `true` if some resident item compares equal to `probe`.
    #[inline]
    pub fn contains(&self, probe: &T) -> bool {
        self.position(probe).is_some()
    }

    /// Returns the root, which holds the heap's own extreme.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::Empty`] if the heap is empty.
    #[inline]
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.store.get(0).ok_or(HeapError::Empty)
    }

    /// Returns the item at the other extreme: the maximum of a min-heap or
    /// the minimum of a max-heap.
    ///
    /// Only leaves are examined. Scanning starts at the tail, which is the
    /// first candidate, and a later leaf replaces it only when strictly more
    /// extreme.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::Empty`] if the heap is empty.
    pub fn peek_opposite(&self) -> Result<&T, HeapError> {
        let items = self.store.as_slice();
        let len = items.len();
        let tail = len.checked_sub(1).ok_or(HeapError::Empty)?;
        if len == 1 {
            return Ok(&items[0]);
        }

        let want = self.order.opposite();
        let mut best = tail;
        for pos in (0..tail).rev().take_while(|&pos| is_leaf(pos, len)) {
            if want.prefers(self.cmp.compare(&items[pos], &items[best])) {
                best = pos;
            }
        }

        Ok(&items[best])
    }

    /// Returns the minimum item.
    ///
    /// Answers from the root for a min-heap, from the leaves otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::Empty`] if the heap is empty.
    #[inline]
    pub fn peek_min(&self) -> Result<&T, HeapError> {
        match self.order {
            Order::Min => self.peek(),
            Order::Max => self.peek_opposite(),
        }
    }

    /// Returns the maximum item.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::Empty`] if the heap is empty.
    #[inline]
    pub fn peek_max(&self) -> Result<&T, HeapError> {
        match self.order {
            Order::Max => self.peek(),
            Order::Min => self.peek_opposite(),
        }
    }

    // ========================================================================
    // Remove
    // ========================================================================

    /// Removes and returns the root.
    ///
    /// Survivors shift left one slot and the heap is rebuilt.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::Empty`] if the heap is empty.
    pub fn remove_root(&mut self) -> Result<T, HeapError> {
        if self.store.is_empty() {
            return Err(HeapError::Empty);
        }
        Ok(self.remove_at(0))
    }

    /// Removes and returns the last item in storage order. O(1).
    ///
    /// The tail is always a leaf, so no rebuild is needed.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::Empty`] if the heap is empty.
    #[inline]
    pub fn remove_tail(&mut self) -> Result<T, HeapError> {
        self.store.pop_tail().ok_or(HeapError::Empty)
    }

    /// Removes and returns the first item, in storage order, that compares
    /// equal to `probe`.
    ///
    /// # Errors
    ///
    /// Returns [`HeapError::NotFound`] if nothing matches.
    pub fn remove_item(&mut self, probe: &T) -> Result<T, HeapError> {
        let pos = self.position(probe).ok_or(HeapError::NotFound)?;
        Ok(self.remove_at(pos))
    }

    fn remove_at(&mut self, pos: usize) -> T {
        let item = self.store.compact_remove(pos);
        sift::rebuild(&mut self.store, &self.cmp, self.order);
        item
    }

    fn position(&self, probe: &T) -> Option<usize> {
        self.store
            .as_slice()
            .iter()
            .position(|item| self.cmp.compare(item, probe).is_eq())
    }
}

impl<T, C> Heap<T, C> {
    /// Returns the number of resident items.
    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if no items are resident.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns `true` if the next push would be rejected.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.store.is_full()
    }

    /// Returns the fixed capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Returns which extreme sits at the root.
    #[inline]
    pub fn order(&self) -> Order {
        self.order
    }

    /// Returns the comparator.
    #[inline]
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Resident items in storage (heap layout) order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.store.as_slice()
    }

    /// Iterates resident items in storage order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.store.as_slice().iter()
    }

    /// Writes every resident item through the printer hook, in storage order.
    ///
    /// Writes nothing if no printer was installed.
    pub fn dump(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        let Some(printer) = &self.printer else {
            return Ok(());
        };
        for item in self.store.as_slice() {
            printer(item, &mut *out)?;
        }
        Ok(())
    }

    /// Destroys the heap, passing every resident item to the free hook.
    ///
    /// Returns the number of items released. Dropping the heap does the same
    /// thing; this just makes the point of release explicit.
    pub fn teardown(mut self) -> usize {
        self.release()
    }

    fn release(&mut self) -> usize {
        let resident = self.store.len();
        if resident == 0 {
            return 0;
        }

        match self.freer.as_mut() {
            Some(freer) => {
                for item in self.store.drain() {
                    freer(item);
                }
            }
            None => self.store.clear(),
        }

        log::debug!(
            "heap released {} resident items (free hook: {})",
            resident,
            self.freer.is_some()
        );
        resident
    }
}

impl<T, C> Drop for Heap<T, C> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<'a, T, C> IntoIterator for &'a Heap<T, C> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug, C> fmt::Debug for Heap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap")
            .field("order", &self.order)
            .field("capacity", &self.capacity())
            .field("items", &self.as_slice())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Fluent constructor for [`Heap`].
///
/// Defaults: capacity 0 (must be set), [`Order::Min`], no comparator, no
/// hooks.
///
/// # Example
///
/// ```
/// use nexus_heap::{Heap, Order};
/// use std::fmt::Write;
///
/// let mut heap = Heap::builder()
///     .capacity(4)
///     .order(Order::Max)
///     .comparator(|a: &u32, b: &u32| a.cmp(b))
///     .printer(|v: &u32, out| write!(out, "[{v}]"))
///     .build()
///     .unwrap();
///
/// heap.try_push(2).unwrap();
/// heap.try_push(7).unwrap();
///
/// let mut s = String::new();
/// heap.dump(&mut s).unwrap();
/// assert_eq!(s, "[7][2]");
/// ```
pub struct HeapBuilder<T, C> {
    capacity: usize,
    order: u32,
    cmp: Option<C>,
    printer: Option<Printer<T>>,
    freer: Option<Freer<T>>,
}

impl<T, C> Default for HeapBuilder<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> HeapBuilder<T, C> {
    /// Creates a builder with default settings.
    pub const fn new() -> Self {
        Self {
            capacity: 0,
            order: Order::Min.into_raw(),
            cmp: None,
            printer: None,
            freer: None,
        }
    }

    /// Sets the fixed capacity.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets which extreme sits at the root.
    pub fn order(mut self, order: Order) -> Self {
        self.order = order.into_raw();
        self
    }

    /// Sets the order from its raw form (`0` = min, `1` = max).
    ///
    /// Unknown values are reported by [`build`](Self::build).
    pub fn order_raw(mut self, raw: u32) -> Self {
        self.order = raw;
        self
    }

    /// Sets the comparator.
    pub fn comparator(mut self, cmp: C) -> Self {
        self.cmp = Some(cmp);
        self
    }

    /// Installs the diagnostic print hook used by [`Heap::dump`].
    pub fn printer<F>(mut self, printer: F) -> Self
    where
        F: Fn(&T, &mut dyn fmt::Write) -> fmt::Result + 'static,
    {
        self.printer = Some(Box::new(printer));
        self
    }

    /// Installs the hook that receives items still resident at teardown.
    pub fn freer<F>(mut self, freer: F) -> Self
    where
        F: FnMut(T) + 'static,
    {
        self.freer = Some(Box::new(freer));
        self
    }

    /// Validates the settings and allocates the heap.
    ///
    /// # Errors
    ///
    /// Checked in this order: [`ConfigError::ZeroCapacity`],
    /// [`ConfigError::InvalidOrder`], [`ConfigError::MissingComparator`].
    pub fn build(self) -> Result<Heap<T, C>, ConfigError>
    where
        C: Comparator<T>,
    {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        let order = Order::try_from(self.order)?;
        let cmp = self.cmp.ok_or(ConfigError::MissingComparator)?;

        log::debug!("heap created: capacity {}, order {:?}", self.capacity, order);

        Ok(Heap {
            store: ArrayStore::with_capacity(self.capacity),
            order,
            cmp,
            printer: self.printer,
            freer: self.freer,
        })
    }
}
