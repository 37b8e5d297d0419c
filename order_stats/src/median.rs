use std::cmp::Ordering;

use heapwise_heap::{HeapError, MaxHeap, MaxOrder, MinHeap, MinOrder};

/// Middle of the values seen so far. With an even count there are two middles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Median<T> {
    Single(T),
    Pair(T, T),
}

impl<T: Copy> Median<&T> {
    pub fn copied(self) -> Median<T> {
        match self {
            Self::Single(value) => Median::Single(*value),
            Self::Pair(low, high) => Median::Pair(*low, *high),
        }
    }
}

impl<T: Copy + Into<f64>> Median<T> {
    /// Numeric median, averaging the two middles when there are two
    pub fn mean(&self) -> f64 {
        match *self {
            Self::Single(value) => value.into(),
            Self::Pair(low, high) => (low.into() + high.into()) / 2.0,
        }
    }
}

/// Median of a stream, answered after every value.
///
/// The lower half lives in a max-heap and the upper half in a min-heap. Every element of
/// `lower` is <= every element of `upper`, and their sizes differ by at most one, so the median
/// is always sitting on one or both roots.
#[derive(Debug, Clone)]
pub struct RunningMedian<T> {
    lower: MaxHeap<T>,
    upper: MinHeap<T>,
}

impl<T: Ord> Default for RunningMedian<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> RunningMedian<T> {
    pub fn new() -> Self {
        Self {
            lower: MaxHeap::new(MaxOrder),
            upper: MinHeap::new(MinOrder),
        }
    }

    #[tracing::instrument(skip_all)]
    pub fn push(&mut self, value: T) {
        let belongs_low = match self.lower.peek() {
            Ok(lower_top) => value <= *lower_top,
            Err(_) => true,
        };
        if belongs_low {
            self.lower.insert_key(value);
        } else {
            self.upper.insert_key(value);
        }
        self.rebalance();
    }

    // moves one root across when a side gets two ahead
    fn rebalance(&mut self) {
        if self.lower.len() > self.upper.len() + 1 {
            if let Ok(moved) = self.lower.extract_top() {
                tracing::debug!("moving lower root to upper half");
                self.upper.insert_key(moved);
            }
        } else if self.upper.len() > self.lower.len() + 1 {
            if let Ok(moved) = self.upper.extract_top() {
                tracing::debug!("moving upper root to lower half");
                self.lower.insert_key(moved);
            }
        }
    }

    /// Root of the larger half, or both roots when the halves are level. Fails with
    /// [`HeapError::Empty`] before the first value.
    #[tracing::instrument(skip_all)]
    pub fn median(&self) -> Result<Median<&T>, HeapError> {
        match self.lower.len().cmp(&self.upper.len()) {
            Ordering::Greater => Ok(Median::Single(self.lower.peek()?)),
            Ordering::Less => Ok(Median::Single(self.upper.peek()?)),
            Ordering::Equal => Ok(Median::Pair(self.lower.peek()?, self.upper.peek()?)),
        }
    }

    pub fn mean(&self) -> Result<f64, HeapError>
    where
        T: Copy + Into<f64>,
    {
        Ok(self.median()?.copied().mean())
    }

    pub fn len(&self) -> usize {
        self.lower.len() + self.upper.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lower.is_empty() && self.upper.is_empty()
    }
}

impl<T: Ord> Extend<T> for RunningMedian<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

/// Median after each value of `values`, in input order
pub fn running_medians<I>(values: I) -> Result<Vec<f64>, HeapError>
where
    I: IntoIterator,
    I::Item: Ord + Copy + Into<f64>,
{
    let mut median = RunningMedian::new();
    values
        .into_iter()
        .map(|value| {
            median.push(value);
            median.mean()
        })
        .collect()
}
