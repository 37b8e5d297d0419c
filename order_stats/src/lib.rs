//! Order statistics built on [`heapwise_heap`]. Every algorithm here drives the heap through its
//! public operations only.
pub mod bounded;
pub mod error;
pub mod kth;
pub mod median;
pub mod nearly_sorted;
#[cfg(test)]
mod tests;

pub use bounded::BoundedSelector;
pub use error::SelectionError;
pub use kth::{kth_by, kth_largest, kth_smallest, kth_smallest_by_extraction};
pub use median::{Median, RunningMedian, running_medians};
pub use nearly_sorted::sort_k_sorted;
