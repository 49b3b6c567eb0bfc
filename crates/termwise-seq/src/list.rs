//! A small general-purpose ordered list.

use std::cmp::Ordering;
use std::fmt;

use crate::merge;

/// A growable list with insertion, deletion, reversal, sorting, and
/// merging.
///
/// The list itself is order-agnostic: `push` appends, and nothing enforces
/// sortedness. The sorted operations (`insert_sorted`, `merge_sorted`)
/// expect the caller to have kept the list sorted, typically by building
/// it through `insert_sorted` or by calling `sort` first.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct SeqList<T> {
    items: Vec<T>,
}

impl<T> SeqList<T> {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Returns true if the list has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the items in storage order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterates over the items in storage order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Appends an item at the end.
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Reverses the list in place.
    pub fn reverse(&mut self) {
        self.items.reverse();
    }

    /// Moves every item of `other` to the end of this list.
    pub fn append(&mut self, other: &mut Self) {
        self.items.append(&mut other.items);
    }
}

impl<T: PartialEq> SeqList<T> {
    /// Removes the first item equal to `value`.
    ///
    /// Returns false when no such item exists; the list is unchanged.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.items.iter().position(|x| x == value) {
            Some(at) => {
                self.items.remove(at);
                true
            }
            None => false,
        }
    }
}

impl<T: Ord> SeqList<T> {
    /// Inserts `value` into an already sorted list, keeping it sorted.
    pub fn insert_sorted(&mut self, value: T) {
        merge::insert_sorted(&mut self.items, value);
    }

    /// Sorts the list by re-inserting every item in sorted position.
    ///
    /// Insertion sort, O(n²); fine at the sizes this list is meant for.
    pub fn sort(&mut self) {
        let mut sorted = Vec::with_capacity(self.items.len());
        for item in self.items.drain(..) {
            merge::insert_sorted(&mut sorted, item);
        }
        self.items = sorted;
    }
}

impl<T: Ord + Clone> SeqList<T> {
    /// Merges two sorted lists into a new sorted list.
    ///
    /// Equal items are all kept, those from `self` first. Both lists must
    /// already be sorted ascending.
    #[must_use]
    pub fn merge_sorted(&self, other: &Self) -> Self {
        let items = merge::merge_resolve(
            &self.items,
            &other.items,
            // Ties go left so the resolver never fires and duplicates survive.
            |a, b| {
                if a <= b {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            },
            |a, _| a.clone(),
        );
        Self { items }
    }
}

impl<T> FromIterator<T> for SeqList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a SeqList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for SeqList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Linked list is empty");
        }

        let rendered: Vec<_> = self.items.iter().map(ToString::to_string).collect();
        write!(f, "{}", rendered.join("\t"))
    }
}
