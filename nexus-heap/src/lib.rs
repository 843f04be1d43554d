//! Fixed-capacity binary heap over caller-supplied comparators.
//!
//! The heap is built in three layers:
//!
//! ```text
//! Heap (public ops)      - push, search, remove root/tail/item, peeks, teardown
//!     │
//!     ├── sift           - parent/left/right arithmetic, sift-up, rebuild
//!     │
//!     └── ArrayStore     - fixed slots, live prefix, left-shift compaction
//! ```
//!
//! Every mutation goes through [`ArrayStore`] first and then through
//! [`sift`] to restore the ordering invariant before returning.
//!
//! # Quick Start
//!
//! ```
//! use nexus_heap::{Heap, HeapError, Order};
//!
//! let mut heap = Heap::new(4, Order::Max, |a: &i32, b: &i32| a.cmp(b)).unwrap();
//!
//! for v in [2, 2, 7, 1] {
//!     heap.try_push(v).unwrap();
//! }
//! assert!(heap.is_full());
//!
//! assert_eq!(heap.peek(), Ok(&7));           // native extreme, O(1)
//! assert_eq!(heap.peek_opposite(), Ok(&1));  // leaves only
//!
//! assert_eq!(heap.remove_item(&2), Ok(2));
//! assert_eq!(heap.remove_item(&5), Err(HeapError::NotFound));
//! ```
//!
//! # Ownership
//!
//! The heap owns resident items. `remove_root`, `remove_tail` and
//! `remove_item` hand the item back; `search` and the peeks only lend it.
//! Items still resident when the heap is dropped (or [`Heap::teardown`] is
//! called) are passed to the free hook if one was installed, otherwise they
//! are dropped.
//!
//! # Capacity
//!
//! Capacity is fixed at construction. A push onto a full heap returns
//! [`Full`] with the rejected item; nothing reallocates.
//!
//! # Rebuild Strategy
//!
//! Removing the root or an arbitrary item shifts the survivors left one slot
//! (preserving their relative order) and then rebuilds by sifting every
//! position up, tail to root. The sweep repeats until it makes no swap. This
//! is O(n log n) per removal, not the O(log n) of a swap-with-last removal.

#![warn(missing_docs)]

pub mod error;
pub mod heap;
pub mod order;
pub mod sift;
pub mod store;

pub use error::{ConfigError, Full, HeapError};
pub use heap::{Freer, Heap, HeapBuilder, Printer};
pub use order::{Comparator, Natural, Order, Reverse};
pub use store::{ArrayStore, Drain};
