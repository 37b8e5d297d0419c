use heapwise_heap::{MinHeap, MinOrder};

/// Sorts a sequence in which every element sits at most `k` positions away from where it
/// belongs.
///
/// A min-heap window of `k + 1` elements always contains the smallest element not yet emitted,
/// so each step emits the window minimum and pulls in the next input element. O(n log k) time,
/// O(k) extra space. A window larger than the input simply holds all of it.
#[tracing::instrument(skip_all)]
pub fn sort_k_sorted<I>(input: I, k: usize) -> Vec<I::Item>
where
    I: IntoIterator,
    I::Item: Ord,
{
    let mut input = input.into_iter();
    let window = k.saturating_add(1);
    let mut heap = MinHeap::build(input.by_ref().take(window), MinOrder);

    let mut output = Vec::with_capacity(heap.len() + input.size_hint().0);
    for next in input {
        output.extend(heap.extract_top().ok());
        heap.insert_key(next);
    }
    output.extend(heap.into_iter_sorted());
    output
}
