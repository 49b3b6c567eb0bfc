//! Sparse univariate polynomials and their operations.

use std::fmt;

use termwise_seq::merge_resolve;

use crate::error::PolyError;
use crate::store::TermList;
use crate::term::{Coeff, Term};

/// A sparse univariate polynomial stored as an ordered term list.
///
/// Well-formed polynomials keep their terms in strictly decreasing power
/// order with at most one term per power. Construction is append-only and
/// unchecked; [`Polynomial::add`] validates the ordering of both operands
/// before merging. Zero-coefficient terms are kept, both on input and when
/// an addition cancels to zero.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Polynomial<C: Coeff> {
    terms: TermList<C>,
}

impl<C: Coeff> Polynomial<C> {
    /// Creates an empty polynomial.
    #[must_use]
    pub fn new() -> Self {
        Self {
            terms: TermList::new(),
        }
    }

    /// Builds a polynomial from `(coefficient, power)` pairs.
    ///
    /// Pairs are appended in the order supplied; nothing is sorted,
    /// merged, or dropped. Supply strictly decreasing powers to get a
    /// well-formed polynomial.
    pub fn from_terms<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (C, u32)>,
    {
        Self {
            terms: pairs
                .into_iter()
                .map(|(coeff, power)| Term::new(coeff, power))
                .collect(),
        }
    }

    /// Builds a polynomial of `term_count` terms, asking `supplier` for
    /// the i-th `(coefficient, power)` pair.
    ///
    /// This is the entry point for interactive construction, where the
    /// supplier reads one term at a time from an input source.
    pub fn create<F>(term_count: usize, supplier: F) -> Self
    where
        F: FnMut(usize) -> (C, u32),
    {
        Self::from_terms((0..term_count).map(supplier))
    }

    /// Appends a single term, unchecked.
    pub fn push_term(&mut self, coeff: C, power: u32) {
        self.terms.push(Term::new(coeff, power));
    }

    /// Returns true if the polynomial has no terms.
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
    pub fn terms(&self) -> &[Term<C>] {
        self.terms.as_slice()
    }

    /// Returns the power of the leading term, or `None` when empty.
    #[must_use]
    pub fn degree(&self) -> Option<u32> {
        self.terms.as_slice().first().map(|t| t.power)
    }

    /// Returns true if the terms are in strictly decreasing power order.
    ///
    /// Empty and single-term polynomials are trivially well-formed.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.ensure_ordered().is_ok()
    }

    fn ensure_ordered(&self) -> Result<(), PolyError> {
        for pair in self.terms.as_slice().windows(2) {
            if pair[1].power >= pair[0].power {
                return Err(PolyError::Malformed {
                    prev: pair[0].power,
                    next: pair[1].power,
                });
            }
        }
        Ok(())
    }

    /// Adds two polynomials, producing a new one.
    ///
    /// A two-cursor merge over the sorted term sequences: the higher power
    /// is copied through, and on equal powers a single term with the
    /// summed coefficients is emitted, even when the sum is zero. Once one
    /// operand runs out the rest of the other is copied verbatim. Runs in
    /// O(`self.len()` + `other.len()`).
    ///
    /// When either operand is empty the result is an owned clone of the
    /// other, never a shared view. Operands are not mutated.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::Malformed`] if either operand is not strictly
    /// decreasing by power; merging unsorted operands would silently
    /// produce wrong sums.
    pub fn add(&self, other: &Self) -> Result<Self, PolyError> {
        self.ensure_ordered()?;
        other.ensure_ordered()?;

        if self.is_empty() {
            return Ok(other.clone());
        }
        if other.is_empty() {
            return Ok(self.clone());
        }

        let merged = merge_resolve(
            self.terms.as_slice(),
            other.terms.as_slice(),
            // Descending by power: the larger power sorts first.
            |a, b| b.power.cmp(&a.power),
            |a, b| Term::new(a.coeff + b.coeff, a.power),
        );

        Ok(Self {
            terms: merged.into_iter().collect(),
        })
    }

    /// Evaluates the polynomial at `x`.
    ///
    /// Computes Σ coeffᵢ · x^powerᵢ with exact arithmetic in `C`, using
    /// exponentiation by squaring per term.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::Empty`] when the polynomial has no terms.
    pub fn evaluate(&self, x: C) -> Result<C, PolyError> {
        if self.is_empty() {
            return Err(PolyError::Empty);
        }

        let mut sum = C::zero();
        for term in &self.terms {
            sum = sum + term.eval(x);
        }
        Ok(sum)
    }
}

impl<C: Coeff> Default for Polynomial<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Coeff> fmt::Display for Polynomial<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Polynomial has no terms");
        }

        let rendered: Vec<_> = self.terms.iter().map(ToString::to_string).collect();
        write!(f, "{}", rendered.join(" + "))
    }
}
