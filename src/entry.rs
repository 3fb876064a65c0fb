use core::fmt;

/// A single stored (value, priority) pair.
///
/// Entries are created by the queue on insertion and dropped on removal;
/// they have no identity beyond their position in the backing sequence.
/// A numerically smaller priority is more urgent.
#[derive(Clone, PartialEq, Eq)]
pub struct Entry<T> {
    value: T,
    priority: i32,
}

impl<T> Entry<T> {
    #[inline]
    pub(crate) fn new(value: T, priority: i32) -> Self {
        Self { value, priority }
    }

    /// Returns a reference to the stored value.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the priority this entry was inserted with.
    #[inline]
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// Returns the value and priority as a pair.
    #[inline]
    pub fn pair(&self) -> (&T, i32) {
        (&self.value, self.priority)
    }

    /// Consumes the entry, returning the stored value.
    #[inline]
    pub fn into_value(self) -> T {
        self.value
    }

    /// Consumes the entry, returning the value and priority.
    #[inline]
    pub fn into_pair(self) -> (T, i32) {
        (self.value, self.priority)
    }
}

impl<T: fmt::Debug> fmt::Debug for Entry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} (priority {})", self.value, self.priority)
    }
}
