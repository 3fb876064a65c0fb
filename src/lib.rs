mod entry;
mod iter;
#[cfg(feature = "serde")]
mod serde;
mod sort;

pub use entry::Entry;
pub use iter::{Iter, OwningIter, SortedIter};

use core::fmt;
use std::error::Error;
use std::iter::FromIterator;

/// Priority recorded when the caller does not provide one.
pub const DEFAULT_PRIORITY: i32 = 5;

/// Error returned when dequeueing or peeking an empty queue.
///
/// The failed call leaves the queue untouched; it stays valid and usable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyError;

impl fmt::Display for EmptyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("empty queue")
    }
}

impl Error for EmptyError {}

/// An insertion-ordered priority queue with linear-scan extraction.
///
/// Entries are (value, priority) pairs where a numerically smaller priority
/// is more urgent; entries inserted without an explicit priority get
/// [`DEFAULT_PRIORITY`]. The backing sequence always reflects arrival
/// order — priority order is computed on demand by scanning, never stored.
/// That makes [`enqueue`](ScanQueue::enqueue) and the end peeks O(1), and
/// [`dequeue`](ScanQueue::dequeue)/[`peek`](ScanQueue::peek) O(n).
///
/// When several entries share the minimum priority, the earliest-inserted
/// one is extracted first.
///
/// # Examples
///
/// ```
/// use scanq::ScanQueue;
///
/// let mut queue = ScanQueue::new();
/// queue.enqueue_with("second", 2);
/// queue.enqueue_with("first", 1);
/// queue.enqueue("rand_item");
///
/// assert_eq!(queue.dequeue(), Ok("first"));
/// assert_eq!(queue.len(), 2);
/// ```
#[derive(Clone)]
pub struct ScanQueue<T> {
    pub(crate) entries: Vec<Entry<T>>,
}

impl<T> ScanQueue<T> {
    /// Creates an empty ScanQueue.
    ///
    /// # Examples
    ///
    /// ```
    /// use scanq::ScanQueue;
    ///
    /// let queue: ScanQueue<u32> = ScanQueue::new();
    /// assert!(queue.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates an empty ScanQueue with space for at least `capacity`
    /// entries.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Appends `value` at the tail with [`DEFAULT_PRIORITY`]. O(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use scanq::{ScanQueue, DEFAULT_PRIORITY};
    ///
    /// let mut queue = ScanQueue::new();
    /// queue.enqueue("x");
    /// assert_eq!(queue.peek_rear(), Ok(&"x"));
    /// assert_eq!(queue.iter().next().unwrap().priority(), DEFAULT_PRIORITY);
    /// ```
    #[inline]
    pub fn enqueue(&mut self, value: T) {
        self.enqueue_with(value, DEFAULT_PRIORITY);
    }

    /// Appends `value` at the tail with an explicit priority. O(1).
    ///
    /// Priorities are not validated; negative and zero values are allowed.
    #[inline]
    pub fn enqueue_with(&mut self, value: T, priority: i32) {
        self.entries.push(Entry::new(value, priority));
    }

    /// Removes and returns the value with the smallest priority. O(n).
    ///
    /// Ties go to the earliest-inserted entry; the remaining entries keep
    /// their relative order.
    ///
    /// # Examples
    ///
    /// ```
    /// use scanq::{EmptyError, ScanQueue};
    ///
    /// let mut queue = ScanQueue::new();
    /// queue.enqueue_with("b", 1);
    /// queue.enqueue_with("c", 1);
    /// assert_eq!(queue.dequeue(), Ok("b"));
    /// assert_eq!(queue.dequeue(), Ok("c"));
    /// assert_eq!(queue.dequeue(), Err(EmptyError));
    /// ```
    pub fn dequeue(&mut self) -> Result<T, EmptyError> {
        let index = self.min_index().ok_or(EmptyError)?;
        Ok(self.entries.remove(index).into_value())
    }

    /// Returns the value with the smallest priority without removing it.
    /// O(n).
    pub fn peek(&self) -> Result<&T, EmptyError> {
        let index = self.min_index().ok_or(EmptyError)?;
        Ok(self.entries[index].value())
    }

    /// Returns the earliest-inserted value without removing it. O(1).
    #[inline]
    pub fn peek_front(&self) -> Result<&T, EmptyError> {
        self.entries.first().map(Entry::value).ok_or(EmptyError)
    }

    /// Returns the latest-inserted value without removing it. O(1).
    #[inline]
    pub fn peek_rear(&self) -> Result<&T, EmptyError> {
        self.entries.last().map(Entry::value).ok_or(EmptyError)
    }

    /// Returns the number of entries in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the queue holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries the queue can hold without
    /// reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Removes all entries.
    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates over entry references in insertion order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Iterates over entry references in ascending priority order, using a
    /// stable merge sort: entries of equal priority appear in arrival
    /// order. The queue itself is not reordered.
    ///
    /// # Examples
    ///
    /// ```
    /// use scanq::ScanQueue;
    ///
    /// let mut queue = ScanQueue::new();
    /// queue.enqueue_with('b', 2);
    /// queue.enqueue_with('a', 1);
    /// let order: Vec<char> = queue.iter_sorted().map(|e| *e.value()).collect();
    /// assert_eq!(order, vec!['a', 'b']);
    /// assert_eq!(queue.peek_front(), Ok(&'b'));
    /// ```
    #[inline]
    pub fn iter_sorted(&self) -> SortedIter<'_, T> {
        SortedIter::stable(self)
    }

    /// Iterates over entry references in ascending priority order, using
    /// quicksort: entries of equal priority may appear in any order. The
    /// queue itself is not reordered.
    #[inline]
    pub fn iter_sorted_unstable(&self) -> SortedIter<'_, T> {
        SortedIter::unstable(self)
    }

    // Index of the minimum-priority entry. The candidate is replaced only
    // on a strictly smaller priority, so the earliest-inserted entry wins
    // among equal minima.
    fn min_index(&self) -> Option<usize> {
        if self.entries.is_empty() {
            return None;
        }

        let mut min = 0;
        for i in 1..self.entries.len() {
            if self.entries[i].priority() < self.entries[min].priority() {
                min = i;
            }
        }

        Some(min)
    }
}

impl<T> Default for ScanQueue<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ScanQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for ScanQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<T: Eq> Eq for ScanQueue<T> {}

impl<T> Extend<(T, i32)> for ScanQueue<T> {
    fn extend<I: IntoIterator<Item = (T, i32)>>(&mut self, iter: I) {
        for (value, priority) in iter {
            self.enqueue_with(value, priority);
        }
    }
}

impl<T> FromIterator<(T, i32)> for ScanQueue<T> {
    fn from_iter<I: IntoIterator<Item = (T, i32)>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T> IntoIterator for ScanQueue<T> {
    type Item = Entry<T>;
    type IntoIter = OwningIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        OwningIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a ScanQueue<T> {
    type Item = &'a Entry<T>;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
