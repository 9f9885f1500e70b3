//! Single polynomial terms.

use std::fmt;

use num_traits::{Signed, ToPrimitive};

/// A trait alias for usable coefficient types.
///
/// Any signed numeric type that is cheap to copy and printable works;
/// `i32`, `i64`, and `i128` are the intended choices. The caller picks a
/// width large enough for the coefficients the computation will produce.
pub trait Coeff: Signed + Copy + fmt::Display + ToPrimitive {}

impl<T: Signed + Copy + fmt::Display + ToPrimitive> Coeff for T {}

/// One (coefficient, exponent) pair, the atomic unit of a polynomial.
///
/// A zero coefficient is representable and denotes "no term" at the
/// semantic level; such terms arise from cancellation during subtraction
/// and are retained by the arithmetic (see [`crate::Polynomial::sub`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Term<C> {
    /// Signed coefficient.
    pub coeff: C,
    /// Exponent of x.
    pub exp: u32,
}

impl<C: Coeff> Term<C> {
    /// Creates a term `coeff * x^exp`.
    #[must_use]
    pub fn new(coeff: C, exp: u32) -> Self {
        Self { coeff, exp }
    }

    /// Returns true if the coefficient is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeff.is_zero()
    }
}

impl<C: Coeff> fmt::Display for Term<C> {
    /// Renders the term as its signed coefficient (explicit `+` for
    /// non-negative) followed by `x`-notation for the exponent.
    ///
    /// Exponent 0 renders bare, 1 as `x`, anything larger as `x^n`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coeff.is_negative() {
            write!(f, "{}", self.coeff)?;
        } else {
            write!(f, "+{}", self.coeff)?;
        }

        match self.exp {
            0 => Ok(()),
            1 => f.write_str("x"),
            e => write!(f, "x^{e}"),
        }
    }
}
