//! # polychain
//!
//! Sparse univariate polynomials stored as ordered (coefficient, exponent)
//! term sequences.
//!
//! This crate provides:
//! - A [`Polynomial`] container holding terms in strictly descending
//!   exponent order
//! - Merge-based addition and subtraction over two descending sequences
//! - Evaluation, canonical-string rendering, and string-based equality
//! - An in-place per-term transform for caller-defined bulk edits
//!
//! ## Representation
//!
//! Terms are stored in a contiguous sequence, leading term first. The
//! descending-exponent invariant is enforced at every construction seam,
//! so addition and subtraction can merge two polynomials in a single
//! lockstep pass.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod poly;
pub mod term;

#[cfg(test)]
mod proptests;

pub use error::PolyError;
pub use poly::Polynomial;
pub use term::{Coeff, Term};
