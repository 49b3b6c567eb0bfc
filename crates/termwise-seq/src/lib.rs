//! # termwise-seq
//!
//! Ordered-sequence primitives for the termwise workspace.
//!
//! This crate provides:
//! - A generic two-cursor sorted merge with a caller-supplied tie resolver
//! - Stable sorted insertion into an already sorted vector
//! - [`SeqList`], a small general-purpose list built on those primitives
//!
//! The polynomial crate reuses the same merge and insertion logic instead
//! of duplicating it for term sequences.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod list;
pub mod merge;

#[cfg(test)]
mod proptests;

pub use list::SeqList;
pub use merge::{insert_sorted, merge_resolve};
