//! Heap index arithmetic and invariant restoration.
//!
//! Positions are 0-based in storage and 1-based in the arithmetic:
//! node `i` sits at rank `i + 1`, its parent at rank `(i + 1) / 2`, its
//! children at ranks `2(i + 1)` and `2(i + 1) + 1`.

use crate::{ArrayStore, Comparator, Order};

/// Parent position of `pos`, or `None` for the root.
///
/// ```
/// use nexus_heap::sift::parent;
///
/// assert_eq!(parent(0), None);
/// assert_eq!(parent(1), Some(0));
/// assert_eq!(parent(2), Some(0));
/// assert_eq!(parent(6), Some(2));
/// ```
#[inline]
pub const fn parent(pos: usize) -> Option<usize> {
    if pos == 0 {
        None
    } else {
        Some(((pos + 1) >> 1) - 1)
    }
}

/// Left child of `pos` within a heap of `len` items.
#[inline]
pub const fn left(pos: usize, len: usize) -> Option<usize> {
    let child = 2 * (pos + 1) - 1;
    if child < len { Some(child) } else { None }
}

/// Right child of `pos` within a heap of `len` items.
#[inline]
pub const fn right(pos: usize, len: usize) -> Option<usize> {
    let child = 2 * (pos + 1);
    if child < len { Some(child) } else { None }
}

/// Returns `true` if `pos` has no left child (and therefore no children).
#[inline]
pub const fn is_leaf(pos: usize, len: usize) -> bool {
    left(pos, len).is_none()
}

/// Moves the item at `pos` toward the root while its parent violates
/// `order` against it. Stops on equality.
///
/// Returns `true` if any swap happened.
pub fn sift_up<T, C>(store: &mut ArrayStore<T>, cmp: &C, order: Order, mut pos: usize) -> bool
where
    C: Comparator<T>,
{
    let mut moved = false;

    while let Some(up) = parent(pos) {
        let items = store.as_slice();
        if order.holds(cmp.compare(&items[up], &items[pos])) {
            break;
        }
        store.swap(up, pos);
        pos = up;
        moved = true;
    }

    moved
}

/// Sifts every position up, from the tail down to the root.
///
/// Returns `true` if any swap happened.
fn sweep<T, C>(store: &mut ArrayStore<T>, cmp: &C, order: Order) -> bool
where
    C: Comparator<T>,
{
    let mut moved = false;
    for pos in (0..store.len()).rev() {
        moved |= sift_up(store, cmp, order, pos);
    }
    moved
}

/// Restores the heap invariant over the whole store.
///
/// Runs tail-to-root sift-up sweeps until a sweep makes no swap. A single
/// sweep can push a displaced ancestor below an already-swept descendant,
/// so one pass is not always enough.
///
/// At most `len + 1` sweeps run. A consistent total order settles well
/// inside that; a comparator that is not one (e.g. cyclic) can keep items
/// moving forever, so the rebuild gives up and leaves the order unspecified.
///
/// Returns the number of sweeps performed.
pub fn rebuild<T, C>(store: &mut ArrayStore<T>, cmp: &C, order: Order) -> usize
where
    C: Comparator<T>,
{
    if store.is_empty() {
        return 0;
    }

    let limit = store.len() + 1;
    let mut sweeps = 1;
    let mut moved = sweep(store, cmp, order);
    while moved && sweeps < limit {
        moved = sweep(store, cmp, order);
        sweeps += 1;
    }

    if moved {
        log::warn!(
            "heap rebuild did not settle after {} sweeps (len {}); comparator is not a total order",
            sweeps,
            store.len()
        );
    } else if sweeps > 2 {
        log::trace!("heap rebuild settled after {} sweeps (len {})", sweeps, store.len());
    }
    sweeps
}

/// Returns `true` if every parent satisfies `order` against its children.
pub fn is_heap<T, C>(items: &[T], cmp: &C, order: Order) -> bool
where
    C: Comparator<T>,
{
    (1..items.len()).all(|pos| match parent(pos) {
        Some(up) => order.holds(cmp.compare(&items[up], &items[pos])),
        None => true,
    })
}
