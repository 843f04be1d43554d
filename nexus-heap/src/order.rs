//! Heap ordering and the comparison capability.

use core::cmp::Ordering;

use crate::ConfigError;

/// Which extreme sits at the root of the heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Order {
    /// Root holds the minimum.
    Min = 0,
    /// Root holds the maximum.
    Max = 1,
}

impl Order {
    /// Returns `true` if a parent comparing as `parent_vs_child` against its
    /// child satisfies this order. Equal items always satisfy it.
    #[inline]
    pub fn holds(self, parent_vs_child: Ordering) -> bool {
        match self {
            Order::Min => parent_vs_child != Ordering::Greater,
            Order::Max => parent_vs_child != Ordering::Less,
        }
    }

    /// Returns `true` if `a_vs_b` means `a` is strictly closer to this
    /// order's extreme than `b`.
    #[inline]
    pub fn prefers(self, a_vs_b: Ordering) -> bool {
        match self {
            Order::Min => a_vs_b == Ordering::Less,
            Order::Max => a_vs_b == Ordering::Greater,
        }
    }

    /// The other order.
    #[inline]
    pub const fn opposite(self) -> Order {
        match self {
            Order::Min => Order::Max,
            Order::Max => Order::Min,
        }
    }

    /// Raw integer representation (`0` = min, `1` = max).
    #[inline]
    pub const fn into_raw(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u32> for Order {
    type Error = ConfigError;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(Order::Min),
            1 => Ok(Order::Max),
            other => Err(ConfigError::InvalidOrder(other)),
        }
    }
}

/// Total order over two items.
///
/// Implemented for any `Fn(&T, &T) -> Ordering`, so closures and plain
/// functions such as `u64::cmp` work directly.
///
/// # Example
///
/// ```
/// use nexus_heap::{Comparator, Natural};
/// use std::cmp::Ordering;
///
/// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
/// assert_eq!(by_len.compare(&"ab", &"abc"), Ordering::Less);
/// assert_eq!(Natural.compare(&3u32, &3u32), Ordering::Equal);
/// ```
pub trait Comparator<T: ?Sized> {
    /// Compares `a` against `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Compares through `T: Ord`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Flips the wrapped comparator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reverse<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reverse<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}
