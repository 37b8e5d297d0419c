pub mod config;
pub mod error;
pub mod heap;
pub mod order;
#[cfg(test)]
mod tests;

pub use config::HeapConfig;
pub use error::HeapError;
pub use heap::{Heap, IntoIterSorted, MaxHeap, MinHeap};
pub use order::{MaxOrder, MinOrder, Mode, OrderBy, Reversed};

/// Ranking capability a [`Heap`] is built around.
///
/// Implementations must describe a strict weak ordering: `outranks(a, a)` is always false and
/// `outranks` is transitive. Whatever outranks everything else ends up at the root.
pub trait Priority<T> {
    // true when `a` belongs strictly closer to the root than `b`
    fn outranks(&self, a: &T, b: &T) -> bool;
}
