use std::num::NonZeroUsize;

use heapwise_heap::{Heap, MaxOrder, MinOrder, Priority, Reversed};

use crate::error::SelectionError;

/// Keeps the `capacity` best elements seen so far under `O`, in O(capacity) space.
///
/// The backing heap runs on the reversed ordering, so its root is the weakest element still
/// retained, which is exactly the k-th best. An incoming element only gets in by beating that
/// root, and then takes its slot through `replace_top`.
#[derive(Debug, Clone)]
pub struct BoundedSelector<T, O> {
    heap: Heap<T, Reversed<O>>,
    capacity: NonZeroUsize,
}

impl<T: Ord> BoundedSelector<T, MinOrder> {
    /// Tracks the k smallest elements, root being the k-th smallest
    pub fn smallest(capacity: NonZeroUsize) -> Self {
        Self::new(capacity, MinOrder)
    }
}

impl<T: Ord> BoundedSelector<T, MaxOrder> {
    /// Tracks the k largest elements, root being the k-th largest
    pub fn largest(capacity: NonZeroUsize) -> Self {
        Self::new(capacity, MaxOrder)
    }
}

impl<T, O: Priority<T>> BoundedSelector<T, O> {
    pub fn new(capacity: NonZeroUsize, order: O) -> Self {
        Self {
            heap: Heap::with_capacity(Reversed(order), capacity.get()),
            capacity,
        }
    }

    /// Bulk loads the first `capacity` items with a linear build, then streams the rest through
    /// [`BoundedSelector::push`].
    #[tracing::instrument(skip_all)]
    pub fn seeded<I>(items: I, capacity: NonZeroUsize, order: O) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut items = items.into_iter();
        let heap = Heap::build(items.by_ref().take(capacity.get()), Reversed(order));
        let mut selector = Self { heap, capacity };
        selector.extend(items);
        selector
    }

    /// Offers `value` to the selector and hands back whatever did not make the cut: `None` while
    /// still filling up, the evicted k-th best when `value` displaced it, or `value` itself.
    pub fn push(&mut self, value: T) -> Option<T> {
        if self.heap.len() < self.capacity.get() {
            self.heap.insert_key(value);
            return None;
        }
        let beats_kth = self
            .heap
            .peek()
            .is_ok_and(|kth| self.heap.order().0.outranks(&value, kth));
        if !beats_kth {
            return Some(value);
        }
        self.heap.replace_top(value).ok()
    }

    /// The k-th best element seen so far. Needs at least k elements.
    #[tracing::instrument(skip_all)]
    pub fn kth(&self) -> Result<&T, SelectionError> {
        self.ensure_full()?;
        Ok(self.heap.peek()?)
    }

    pub fn into_kth(mut self) -> Result<T, SelectionError> {
        self.ensure_full()?;
        Ok(self.heap.extract_top()?)
    }

    fn ensure_full(&self) -> Result<(), SelectionError> {
        if self.is_full() {
            return Ok(());
        }
        tracing::debug!(
            "selector holds {} of {} elements",
            self.heap.len(),
            self.capacity
        );
        Err(SelectionError::Incomplete {
            seen: self.heap.len(),
            capacity: self.capacity.get(),
        })
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.heap.len() == self.capacity.get()
    }

    pub fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    /// Get an iterator over the retained elements (unordered)
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.heap.iter()
    }

    /// Retained elements, best first
    pub fn into_sorted_vec(self) -> Vec<T> {
        // the heap sorts worst first under the reversed ordering
        let mut sorted = self.heap.into_sorted_vec();
        sorted.reverse();
        sorted
    }
}

impl<T, O: Priority<T>> Extend<T> for BoundedSelector<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}
