//! # termwise-poly
//!
//! Sparse term-list polynomials for the termwise workspace.
//!
//! This crate provides:
//! - An append-only ordered term store with inline storage for small
//!   polynomials
//! - Merge-based symbolic addition over two sorted term sequences
//! - Exact integer evaluation via exponentiation by squaring
//!
//! ## Ordering contract
//!
//! A well-formed polynomial keeps its terms in strictly decreasing power
//! order with at most one term per power. Construction is append-only and
//! does not sort or validate; callers supply terms in order. [`Polynomial::add`]
//! checks the ordering of both operands up front and rejects violations
//! instead of merging them silently wrong.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod poly;
pub mod store;
pub mod term;

#[cfg(test)]
mod proptests;

pub use error::PolyError;
pub use poly::Polynomial;
pub use store::TermList;
pub use term::{pow_u32, Coeff, Term};
