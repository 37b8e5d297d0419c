use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, Eq, PartialEq)]
pub enum HeapError {
    #[error("Heap is empty")]
    Empty,

    #[error("Position {position} is out of range for heap of size {len}")]
    PositionOutOfRange { position: usize, len: usize },
}
