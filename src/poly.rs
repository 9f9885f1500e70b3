//! Sparse univariate polynomials and the merge-based arithmetic over them.
//!
//! A polynomial owns its terms in strictly descending exponent order.
//! Addition and subtraction walk two such sequences in lockstep, the way
//! merge sort combines two sorted runs, combining coefficients whenever
//! both sides carry the same exponent.

use std::cmp::Ordering;
use std::fmt;

use crate::error::PolyError;
use crate::term::{Coeff, Term};

/// The operation driving a merge pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MergeOp {
    Add,
    Sub,
}

impl MergeOp {
    /// Sign applied to a term contributed by the right operand alone.
    fn apply_rhs<C: Coeff>(self, c: C) -> C {
        match self {
            MergeOp::Add => c,
            MergeOp::Sub => -c,
        }
    }

    /// Combination rule for two terms sharing an exponent.
    fn combine<C: Coeff>(self, a: C, b: C) -> C {
        match self {
            MergeOp::Add => a + b,
            MergeOp::Sub => a - b,
        }
    }
}

/// A sparse univariate polynomial.
///
/// Terms are stored leading-term first, with strictly descending
/// exponents. The invariant is checked at every construction seam, so
/// the merge in [`Polynomial::add`] and [`Polynomial::sub`] can rely
/// on it.
///
/// Equality compares *canonical renderings* (see [`fmt::Display`]):
/// two polynomials are equal iff they render to the same string. A
/// polynomial carrying a redundant zero-coefficient term therefore
/// compares unequal to one without it, even though the two are
/// mathematically identical. Use [`Polynomial::compact`] first when
/// mathematical comparison is wanted.
#[derive(Clone, Debug)]
pub struct Polynomial<C> {
    /// Terms in strictly descending exponent order.
    terms: Vec<Term<C>>,
}

impl<C: Coeff> Polynomial<C> {
    /// Creates the empty polynomial (no terms).
    #[must_use]
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Creates a polynomial from terms already in strictly descending
    /// exponent order.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::UnorderedTerms`] if two adjacent terms fail
    /// the strictly-descending check.
    pub fn from_terms(terms: Vec<Term<C>>) -> Result<Self, PolyError> {
        check_descending(&terms)?;
        Ok(Self { terms })
    }

    /// Appends one term below the current trailing exponent.
    ///
    /// This is the incremental way to build a polynomial, one term at a
    /// time from the leading term down.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::UnorderedTerms`] if `exp` is not strictly
    /// below the last stored exponent, or [`PolyError::Allocation`] if
    /// storage for the new term cannot be obtained.
    pub fn push_term(&mut self, coeff: C, exp: u32) -> Result<(), PolyError> {
        if let Some(last) = self.terms.last() {
            if exp >= last.exp {
                return Err(PolyError::UnorderedTerms {
                    prev: last.exp,
                    next: exp,
                });
            }
        }

        self.terms.try_reserve(1)?;
        self.terms.push(Term::new(coeff, exp));
        Ok(())
    }

    /// Returns the number of terms (zero-coefficient terms included).
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the terms in order.
    #[must_use]
    pub fn terms(&self) -> &[Term<C>] {
        &self.terms
    }

    /// Iterates over the terms, leading term first.
    pub fn iter(&self) -> std::slice::Iter<'_, Term<C>> {
        self.terms.iter()
    }

    /// Returns the leading exponent, or `None` for the empty polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<u32> {
        self.terms.first().map(|t| t.exp)
    }

    /// Returns the leading coefficient, or `None` for the empty polynomial.
    #[must_use]
    pub fn leading_coeff(&self) -> Option<C> {
        self.terms.first().map(|t| t.coeff)
    }

    /// Returns true if the exponents strictly descend front to back.
    ///
    /// Polynomials built through this crate's constructors always are;
    /// a careless [`Polynomial::for_each_mut`] closure can break it.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        check_descending(&self.terms).is_ok()
    }

    /// Evaluates the polynomial at `x`, accumulating in `f64`.
    ///
    /// Terms are summed leading term first, so the rounding behavior is
    /// deterministic. The empty polynomial evaluates to 0.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.terms
            .iter()
            .map(|t| t.coeff.to_f64().unwrap_or(f64::NAN) * x.powf(f64::from(t.exp)))
            .sum()
    }

    /// Adds two polynomials, producing a brand-new term sequence.
    ///
    /// Neither input is mutated. Interior zero-coefficient terms created
    /// by cancellation are retained; only a trailing `(0, 0)` term is
    /// pruned from the result.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::EmptyOperand`] if either operand has no
    /// terms, [`PolyError::UnorderedTerms`] if either operand violates
    /// the descending-exponent invariant, or [`PolyError::Allocation`]
    /// if result storage cannot be obtained.
    pub fn add(&self, other: &Self) -> Result<Self, PolyError> {
        self.merge(other, MergeOp::Add)
    }

    /// Subtracts `other` from `self`, producing a brand-new term sequence.
    ///
    /// Same contract as [`Polynomial::add`]; the right operand's
    /// coefficients are negated as they are merged in.
    ///
    /// # Errors
    ///
    /// See [`Polynomial::add`].
    pub fn sub(&self, other: &Self) -> Result<Self, PolyError> {
        self.merge(other, MergeOp::Sub)
    }

    /// The shared two-pointer merge behind `add` and `sub`.
    fn merge(&self, other: &Self, op: MergeOp) -> Result<Self, PolyError> {
        if self.is_empty() || other.is_empty() {
            return Err(PolyError::EmptyOperand);
        }
        check_descending(&self.terms)?;
        check_descending(&other.terms)?;

        let mut out: Vec<Term<C>> = Vec::new();
        out.try_reserve_exact(self.terms.len() + other.terms.len())?;

        let (mut i, mut j) = (0, 0);
        while i < self.terms.len() && j < other.terms.len() {
            let a = self.terms[i];
            let b = other.terms[j];

            match a.exp.cmp(&b.exp) {
                Ordering::Greater => {
                    out.push(a);
                    i += 1;
                }
                Ordering::Less => {
                    out.push(Term::new(op.apply_rhs(b.coeff), b.exp));
                    j += 1;
                }
                Ordering::Equal => {
                    out.push(Term::new(op.combine(a.coeff, b.coeff), a.exp));
                    i += 1;
                    j += 1;
                }
            }
        }

        // At most one of these drains runs.
        out.extend_from_slice(&self.terms[i..]);
        out.extend(
            other.terms[j..]
                .iter()
                .map(|t| Term::new(op.apply_rhs(t.coeff), t.exp)),
        );

        // Prune the trailing all-zero term the tail combination can leave.
        if out.last().is_some_and(|t| t.is_zero() && t.exp == 0) {
            out.pop();
        }

        Ok(Self { terms: out })
    }

    /// Applies `f` to every term in place, leading term first.
    ///
    /// Single pass, no early exit. The closure may rewrite coefficients
    /// and exponents freely; if the result will feed [`Polynomial::add`]
    /// or [`Polynomial::sub`], the caller must keep the exponents
    /// strictly descending.
    pub fn for_each_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut Term<C>),
    {
        for term in &mut self.terms {
            f(term);
        }
    }

    /// Removes every zero-coefficient term.
    ///
    /// This is the opt-in canonical-form pass: arithmetic never calls it,
    /// so cancellation residue stays visible unless the caller asks for
    /// it to go.
    pub fn compact(&mut self) {
        self.terms.retain(|t| !t.is_zero());
    }
}

impl<C: Coeff> Default for Polynomial<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, C: Coeff> IntoIterator for &'a Polynomial<C> {
    type Item = &'a Term<C>;
    type IntoIter = std::slice::Iter<'a, Term<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<C: Coeff> fmt::Display for Polynomial<C> {
    /// Renders the canonical string: terms in order, space-separated,
    /// each with an explicit sign (see [`Term`]). The empty polynomial
    /// renders as `(empty)`, which is deliberately not a valid term
    /// string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return f.write_str("(empty)");
        }

        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{term}")?;
        }
        Ok(())
    }
}

impl<C: Coeff> PartialEq for Polynomial<C> {
    /// Canonical-string equality: `a == b` iff both render identically.
    ///
    /// Syntactic by contract. Two mathematically equal polynomials that
    /// differ in a redundant zero-coefficient term compare unequal.
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl<C: Coeff> Eq for Polynomial<C> {}

/// Checks the strictly-descending exponent invariant.
fn check_descending<C: Coeff>(terms: &[Term<C>]) -> Result<(), PolyError> {
    for pair in terms.windows(2) {
        if pair[1].exp >= pair[0].exp {
            return Err(PolyError::UnorderedTerms {
                prev: pair[0].exp,
                next: pair[1].exp,
            });
        }
    }
    Ok(())
}
