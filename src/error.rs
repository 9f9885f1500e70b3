//! Error taxonomy for polynomial construction and arithmetic.

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors that can occur while building or combining polynomials.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// Storage for term nodes could not be obtained.
    #[error("failed to allocate storage for polynomial terms")]
    Allocation(#[from] TryReserveError),

    /// An empty polynomial was passed where at least one term is required.
    #[error("operand polynomial has no terms")]
    EmptyOperand,

    /// Exponents are not strictly descending.
    #[error("term exponents must strictly descend: x^{prev} followed by x^{next}")]
    UnorderedTerms {
        /// Exponent of the earlier term.
        prev: u32,
        /// Exponent of the offending later term.
        next: u32,
    },
}
