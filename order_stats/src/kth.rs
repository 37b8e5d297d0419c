//! k-th order statistic of a sequence. Ranks are 1-based: `k = 1` is the smallest (or largest).
//!
//! Two strategies are offered:
//! - bounded selection ([`kth_smallest`], [`kth_largest`], [`kth_by`]) keeps a k element heap
//!   whose root is the current k-th candidate. O(k + (n - k) log k) time, O(k) space and no
//!   quadratic worst case, unlike partition based quickselect.
//! - full extraction ([`kth_smallest_by_extraction`]) heapifies all n elements and pops k - 1 of
//!   them. O(n + k log n) time, O(n) space.
use std::num::NonZeroUsize;

use heapwise_heap::{MaxOrder, MinHeap, MinOrder, Priority};

use crate::bounded::BoundedSelector;
use crate::error::SelectionError;

#[tracing::instrument(skip_all)]
pub fn kth_smallest<I>(items: I, k: NonZeroUsize) -> Result<I::Item, SelectionError>
where
    I: IntoIterator,
    I::Item: Ord,
{
    kth_by(items, k, MinOrder)
}

#[tracing::instrument(skip_all)]
pub fn kth_largest<I>(items: I, k: NonZeroUsize) -> Result<I::Item, SelectionError>
where
    I: IntoIterator,
    I::Item: Ord,
{
    kth_by(items, k, MaxOrder)
}

/// k-th best element under `order`
pub fn kth_by<I, O>(items: I, k: NonZeroUsize, order: O) -> Result<I::Item, SelectionError>
where
    I: IntoIterator,
    O: Priority<I::Item>,
{
    let selector = BoundedSelector::seeded(items, k, order);
    if !selector.is_full() {
        return Err(rank_out_of_range(k, selector.len()));
    }
    selector.into_kth()
}

#[tracing::instrument(skip_all)]
pub fn kth_smallest_by_extraction<I>(items: I, k: NonZeroUsize) -> Result<I::Item, SelectionError>
where
    I: IntoIterator,
    I::Item: Ord,
{
    let mut heap = MinHeap::build(items, MinOrder);
    if k.get() > heap.len() {
        return Err(rank_out_of_range(k, heap.len()));
    }
    for _ in 1..k.get() {
        heap.extract_top()?;
    }
    Ok(heap.extract_top()?)
}

fn rank_out_of_range(k: NonZeroUsize, len: usize) -> SelectionError {
    tracing::debug!("rank {k} requested from {len} elements");
    SelectionError::RankOutOfRange { rank: k.get(), len }
}
