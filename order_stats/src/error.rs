use heapwise_heap::HeapError;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum SelectionError {
    #[error("Rank {rank} requested from only {len} elements")]
    RankOutOfRange { rank: usize, len: usize },

    #[error("Selector holds {seen} of the {capacity} elements it needs")]
    Incomplete { seen: usize, capacity: usize },

    #[error("Heap error {0}")]
    Heap(#[from] HeapError),
}
