//! Array backed binary heap.
//!
//! The tree is stored level by level in a `Vec`: the children of position `i` live at `2i + 1`
//! and `2i + 2`, its parent at `(i - 1) / 2`. Which element counts as "best" is decided by the
//! [`Priority`] value the heap is constructed with, so a min-heap and a max-heap are the same
//! structure with a different ordering plugged in.
//!
//! | Operation      | Complexity |
//! |----------------|------------|
//! | `build`        | O(n)       |
//! | `peek`         | O(1)       |
//! | `insert_key`   | O(log n)   |
//! | `extract_top`  | O(log n)   |
//! | `replace_top`  | O(log n)   |
//! | `update_key`   | O(log n)   |
use crate::config::HeapConfig;
use crate::error::HeapError;
use crate::order::{MaxOrder, MinOrder, Mode};
use crate::Priority;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::iter::FusedIterator;
use std::mem;

pub type MinHeap<T> = Heap<T, MinOrder>;
pub type MaxHeap<T> = Heap<T, MaxOrder>;

#[derive(Debug, Clone)]
pub struct Heap<T, O> {
    data: Vec<T>,
    order: O,
}

impl<T, O: Priority<T>> Heap<T, O> {
    pub fn new(order: O) -> Self {
        Self {
            data: Vec::new(),
            order,
        }
    }

    pub fn with_capacity(order: O, capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            order,
        }
    }

    /// Takes ownership of `elements` and heapifies them bottom up, sifting every internal node
    /// down starting from the last one. Linear in the number of elements.
    #[tracing::instrument(skip_all)]
    pub fn build<I>(elements: I, order: O) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut heap = Self {
            data: elements.into_iter().collect(),
            order,
        };
        heap.heapify();
        heap
    }

    fn heapify(&mut self) {
        let len = self.data.len();
        for position in (0..len / 2).rev() {
            self.sift_down_range(position, len);
        }
    }

    /// The best element under the heap's ordering
    #[tracing::instrument(skip_all)]
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or_else(|| {
            tracing::debug!("peek on empty heap");
            HeapError::Empty
        })
    }

    #[tracing::instrument(skip_all)]
    pub fn insert_key(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the root. The last element takes its place and is sifted down.
    #[tracing::instrument(skip_all)]
    pub fn extract_top(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            tracing::debug!("extract_top on empty heap");
            return Err(HeapError::Empty);
        }
        let top = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Ok(top)
    }

    /// Overwrites the root with `value` and sifts it down, returning the previous root. Cheaper
    /// than an extract followed by an insert. On an empty heap `value` is dropped and nothing
    /// changes.
    #[tracing::instrument(skip_all)]
    pub fn replace_top(&mut self, value: T) -> Result<T, HeapError> {
        let Some(root) = self.data.first_mut() else {
            tracing::debug!("replace_top on empty heap");
            return Err(HeapError::Empty);
        };
        let previous = mem::replace(root, value);
        self.sift_down(0);
        Ok(previous)
    }

    /// Inserts `value` then extracts the root in a single sift. Returns `value` untouched when
    /// the heap is empty or nothing in it outranks `value`.
    #[tracing::instrument(skip_all)]
    pub fn push_pop(&mut self, value: T) -> T {
        let displaced = self
            .data
            .first()
            .is_some_and(|root| self.order.outranks(root, &value));
        if !displaced {
            return value;
        }
        let previous = mem::replace(&mut self.data[0], value);
        self.sift_down(0);
        previous
    }

    /// Changes the key stored at `position` (as seen through [`Heap::as_slice`]) and moves it up
    /// or down until the heap is ordered again. Covers both decrease-key and increase-key.
    #[tracing::instrument(skip_all)]
    pub fn update_key(&mut self, position: usize, value: T) -> Result<T, HeapError> {
        let len = self.data.len();
        let Some(slot) = self.data.get_mut(position) else {
            return Err(HeapError::PositionOutOfRange { position, len });
        };
        let previous = mem::replace(slot, value);
        let settled = self.sift_up(position);
        self.sift_down(settled);
        Ok(previous)
    }

    /// Deletes whatever is stored at `position`
    #[tracing::instrument(skip_all)]
    pub fn remove_at(&mut self, position: usize) -> Result<T, HeapError> {
        let len = self.data.len();
        if position >= len {
            return Err(HeapError::PositionOutOfRange { position, len });
        }
        let removed = self.data.swap_remove(position);
        if position < self.data.len() {
            let settled = self.sift_up(position);
            self.sift_down(settled);
        }
        Ok(removed)
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn order(&self) -> &O {
        &self.order
    }

    /// Storage order, which is not priority order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get an iterator over the heap elements (unordered)
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Heapsorts the backing store in place. Best element first: ascending for a min-heap,
    /// descending for a max-heap.
    #[tracing::instrument(skip_all)]
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut end = self.data.len();
        while end > 1 {
            end -= 1;
            self.data.swap(0, end);
            self.sift_down_range(0, end);
        }
        // every pass parks the current best at the tail
        self.data.reverse();
        self.data
    }

    pub fn into_iter_sorted(self) -> IntoIterSorted<T, O> {
        IntoIterSorted { inner: self }
    }

    /// Walks every parent/child pair. O(n)
    pub fn is_heap_ordered(&self) -> bool {
        (1..self.data.len())
            .all(|child| !self.order.outranks(&self.data[child], &self.data[(child - 1) / 2]))
    }

    // returns where the element came to rest
    fn sift_up(&mut self, mut position: usize) -> usize {
        while position > 0 {
            let parent = (position - 1) / 2;
            if !self.order.outranks(&self.data[position], &self.data[parent]) {
                break;
            }
            self.data.swap(position, parent);
            position = parent;
        }
        position
    }

    fn sift_down(&mut self, position: usize) {
        self.sift_down_range(position, self.data.len());
    }

    // only positions below `end` take part
    fn sift_down_range(&mut self, mut position: usize, end: usize) {
        loop {
            let left = 2 * position + 1;
            if left >= end {
                break;
            }
            let right = left + 1;
            // ties go to the left child
            let best = if right < end && self.order.outranks(&self.data[right], &self.data[left]) {
                right
            } else {
                left
            };
            if !self.order.outranks(&self.data[best], &self.data[position]) {
                break;
            }
            self.data.swap(position, best);
            position = best;
        }
    }
}

impl<T: Ord> Heap<T, Mode> {
    /// Empty heap using the configured ordering and capacity
    pub fn from_config(config: &HeapConfig) -> Self {
        Self::with_capacity(config.mode, config.initial_capacity)
    }
}

impl<T, O: Priority<T> + Default> Default for Heap<T, O> {
    fn default() -> Self {
        Self::new(O::default())
    }
}

impl<T, O: Priority<T> + Default> FromIterator<T> for Heap<T, O> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build(iter, O::default())
    }
}

impl<T, O: Priority<T>> Extend<T> for Heap<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert_key(value);
        }
    }
}

/// Drains a heap in priority order, see [`Heap::into_iter_sorted`]
#[derive(Debug, Clone)]
pub struct IntoIterSorted<T, O> {
    inner: Heap<T, O>,
}

impl<T, O: Priority<T>> Iterator for IntoIterSorted<T, O> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.extract_top().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.inner.len(), Some(self.inner.len()))
    }
}

impl<T, O: Priority<T>> ExactSizeIterator for IntoIterSorted<T, O> {}

impl<T, O: Priority<T>> FusedIterator for IntoIterSorted<T, O> {}

#[cfg(feature = "serde")]
#[derive(Serialize)]
struct HeapRef<'a, T, O> {
    data: &'a [T],
    order: &'a O,
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct TempHeap<T, O> {
    data: Vec<T>,
    order: O,
}

#[cfg(feature = "serde")]
impl<T: Serialize, O: Serialize> Serialize for Heap<T, O> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        HeapRef {
            data: &self.data,
            order: &self.order,
        }
        .serialize(serializer)
    }
}

// Stored positions are never trusted, the payload is heapified again on the way in
#[cfg(feature = "serde")]
impl<'de, T, O> Deserialize<'de> for Heap<T, O>
where
    T: Deserialize<'de>,
    O: Deserialize<'de> + Priority<T>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let temp = TempHeap::<T, O>::deserialize(deserializer)?;
        Ok(Self::build(temp.data, temp.order))
    }
}
