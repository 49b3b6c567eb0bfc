//! The ordered term store.

use smallvec::SmallVec;

use crate::term::{Coeff, Term};

/// Terms stored inline before spilling to the heap.
///
/// Hand-entered sparse polynomials rarely have more than a handful of
/// terms, so the common case never allocates.
const INLINE_TERMS: usize = 8;

/// An append-only sequence of terms in storage order.
///
/// The store enforces no ordering of its own. Construction routines are
/// expected to append terms in strictly decreasing power order so the
/// polynomial layer can rely on it; see [`crate::Polynomial`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TermList<C: Coeff> {
    terms: SmallVec<[Term<C>; INLINE_TERMS]>,
}

impl<C: Coeff> TermList<C> {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            terms: SmallVec::new(),
        }
    }

    /// Appends a term at the logical end of the sequence.
    ///
    /// Always succeeds; ordering relative to existing terms is the
    /// caller's responsibility.
    pub fn push(&mut self, term: Term<C>) {
        self.terms.push(term);
    }

    /// Returns true if the store holds no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns the terms in storage order.
    #[must_use]
    pub fn as_slice(&self) -> &[Term<C>] {
        &self.terms
    }

    /// Returns the power of the most recently appended term, or `None`
    /// when the store is empty.
    ///
    /// In a well-ordered store this is the smallest power seen so far,
    /// which lets construction code check that the next append keeps the
    /// powers decreasing.
    #[must_use]
    pub fn last_power(&self) -> Option<u32> {
        self.terms.last().map(|t| t.power)
    }

    /// Iterates over the terms in storage order.
    ///
    /// The iterator is finite and can be restarted by calling `iter`
    /// again.
    pub fn iter(&self) -> std::slice::Iter<'_, Term<C>> {
        self.terms.iter()
    }
}

impl<C: Coeff> Default for TermList<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Coeff> FromIterator<Term<C>> for TermList<C> {
    fn from_iter<I: IntoIterator<Item = Term<C>>>(iter: I) -> Self {
        Self {
            terms: iter.into_iter().collect(),
        }
    }
}

impl<'a, C: Coeff> IntoIterator for &'a TermList<C> {
    type Item = &'a Term<C>;
    type IntoIter = std::slice::Iter<'a, Term<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
