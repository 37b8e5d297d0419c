use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Priority;

/// Smallest element at the root
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MinOrder;

impl<T: Ord> Priority<T> for MinOrder {
    fn outranks(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Largest element at the root
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MaxOrder;

impl<T: Ord> Priority<T> for MaxOrder {
    fn outranks(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// Ordering picked at runtime, e.g from a [`crate::HeapConfig`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    #[default]
    Min,
    Max,
}

impl Mode {
    pub fn reversed(self) -> Self {
        match self {
            Self::Min => Self::Max,
            Self::Max => Self::Min,
        }
    }
}

impl<T: Ord> Priority<T> for Mode {
    fn outranks(&self, a: &T, b: &T) -> bool {
        match self {
            Self::Min => MinOrder.outranks(a, b),
            Self::Max => MaxOrder.outranks(a, b),
        }
    }
}

/// Caller supplied ordering. The closure answers "does `a` outrank `b`" and must be a strict
/// weak ordering.
///
/// ```
/// use heapwise_heap::{Heap, OrderBy};
///
/// // shortest word first
/// let mut heap = Heap::build(["heap", "a", "tree"], OrderBy(|a: &&str, b: &&str| a.len() < b.len()));
/// assert_eq!(heap.extract_top(), Ok("a"));
/// ```
#[derive(Clone, Copy)]
pub struct OrderBy<F>(pub F);

impl<F> fmt::Debug for OrderBy<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OrderBy(..)")
    }
}

impl<T, F> Priority<T> for OrderBy<F>
where
    F: Fn(&T, &T) -> bool,
{
    fn outranks(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }
}

/// Flips another ordering so its worst element sits at the root. Bounded selection keeps its
/// weakest candidate on top this way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Reversed<O>(pub O);

impl<T, O: Priority<T>> Priority<T> for Reversed<O> {
    fn outranks(&self, a: &T, b: &T) -> bool {
        self.0.outranks(b, a)
    }
}
