use crate::entry::Entry;
use crate::sort;
use crate::ScanQueue;

/// Iterator over a ScanQueue yielding owned entries in insertion order.
///
/// # Examples
///
/// ```
/// use scanq::ScanQueue;
///
/// let mut queue = ScanQueue::new();
/// queue.enqueue_with("hello", 2);
/// queue.enqueue_with("world", 1);
/// let values: Vec<&'static str> = queue.into_iter().map(|e| e.into_value()).collect();
/// assert_eq!(values, vec!["hello", "world"]);
/// ```
pub struct OwningIter<T> {
    inner: std::vec::IntoIter<Entry<T>>,
}

impl<T> OwningIter<T> {
    pub(crate) fn new(queue: ScanQueue<T>) -> Self {
        Self {
            inner: queue.entries.into_iter(),
        }
    }
}

impl<T> Iterator for OwningIter<T> {
    type Item = Entry<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for OwningIter<T> {}

/// Iterator over a ScanQueue yielding entry references in insertion order.
///
/// # Examples
///
/// ```
/// use scanq::ScanQueue;
///
/// let mut queue = ScanQueue::new();
/// queue.enqueue("hello");
/// assert_eq!(queue.iter().count(), 1);
/// ```
pub struct Iter<'a, T> {
    inner: std::slice::Iter<'a, Entry<T>>,
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(queue: &'a ScanQueue<T>) -> Self {
        Self {
            inner: queue.entries.iter(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a Entry<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

/// Iterator over a ScanQueue yielding entry references in ascending
/// priority order.
///
/// The order is computed on a scratch sequence of references; the queue
/// itself keeps its arrival order.
///
/// # Examples
///
/// ```
/// use scanq::ScanQueue;
///
/// let mut queue = ScanQueue::new();
/// queue.enqueue_with("low", 6);
/// queue.enqueue_with("high", 1);
/// let order: Vec<&str> = queue.iter_sorted().map(|e| *e.value()).collect();
/// assert_eq!(order, vec!["high", "low"]);
/// ```
pub struct SortedIter<'a, T> {
    inner: std::vec::IntoIter<&'a Entry<T>>,
}

impl<'a, T> Clone for SortedIter<'a, T> {
    fn clone(&self) -> Self {
        SortedIter {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> SortedIter<'a, T> {
    pub(crate) fn stable(queue: &'a ScanQueue<T>) -> Self {
        let mut scratch: Vec<&Entry<T>> = queue.entries.iter().collect();
        sort::merge_sort(&mut scratch);

        Self {
            inner: scratch.into_iter(),
        }
    }

    pub(crate) fn unstable(queue: &'a ScanQueue<T>) -> Self {
        let mut scratch: Vec<&Entry<T>> = queue.entries.iter().collect();
        sort::quicksort(&mut scratch);

        Self {
            inner: scratch.into_iter(),
        }
    }
}

impl<'a, T> Iterator for SortedIter<'a, T> {
    type Item = &'a Entry<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> ExactSizeIterator for SortedIter<'a, T> {}
