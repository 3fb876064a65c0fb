//! The two display-sort strategies. Both operate on a scratch slice of
//! entry references so the queue's arrival order is never disturbed.

use crate::entry::Entry;

/// Recursive merge sort, ascending by priority. Stable: `<=` favors the
/// left run, so entries of equal priority keep their arrival order.
pub(crate) fn merge_sort<T>(entries: &mut [&Entry<T>]) {
    let len = entries.len();
    if len < 2 {
        return;
    }

    let mid = len / 2;
    merge_sort(&mut entries[..mid]);
    merge_sort(&mut entries[mid..]);
    merge(entries, mid);
}

fn merge<T>(entries: &mut [&Entry<T>], mid: usize) {
    let left = entries[..mid].to_vec();
    let right = entries[mid..].to_vec();

    let mut i = 0;
    let mut j = 0;

    for slot in entries.iter_mut() {
        if j == right.len() || (i < left.len() && left[i].priority() <= right[j].priority()) {
            *slot = left[i];
            i += 1;
        } else {
            *slot = right[j];
            j += 1;
        }
    }
}

/// Recursive quicksort with Lomuto partitioning, ascending by priority.
/// Not stable: entries of equal priority may reorder.
pub(crate) fn quicksort<T>(entries: &mut [&Entry<T>]) {
    if entries.len() < 2 {
        return;
    }

    let pivot = partition(entries);
    let (lower, upper) = entries.split_at_mut(pivot);
    quicksort(lower);
    quicksort(&mut upper[1..]);
}

// Lomuto partition around the last element's priority.
fn partition<T>(entries: &mut [&Entry<T>]) -> usize {
    let last = entries.len() - 1;
    let pivot = entries[last].priority();

    let mut store = 0;
    for i in 0..last {
        if entries[i].priority() <= pivot {
            entries.swap(store, i);
            store += 1;
        }
    }

    entries.swap(store, last);
    store
}
