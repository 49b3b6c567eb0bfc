//! # Termwise
//!
//! Sparse polynomials as ordered term lists.
//!
//! A polynomial is an owned sequence of `(power, coefficient)` terms kept
//! in strictly decreasing power order. The heart of the workspace is the
//! merge-based addition: a two-cursor walk over two sorted term sequences
//! that copies the higher power through and sums coefficients when the
//! powers collide.
//!
//! ## Quick Start
//!
//! ```rust
//! use termwise::prelude::*;
//!
//! let p = Polynomial::from_terms([(3i64, 2), (2, 1), (1, 0)]);
//! let q = Polynomial::from_terms([(1i64, 2)]);
//!
//! let sum = p.add(&q)?;
//! assert_eq!(sum.to_string(), "4x^2 + 2x^1 + 1x^0");
//! assert_eq!(p.evaluate(2)?, 17);
//! # Ok::<(), PolyError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use termwise_poly as poly;
pub use termwise_seq as seq;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use termwise_poly::{Coeff, PolyError, Polynomial, Term, TermList};
    pub use termwise_seq::SeqList;
}
