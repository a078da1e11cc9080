//! Sparse single-variable polynomials.
//!
//! A [`Polynomial`] maps each exponent to its coefficient. Exponents are any
//! `f64` (negative and fractional included), stored unordered in a hash map
//! and sorted only when a rendering needs them in order.
//!
//! Arithmetic mutates in place:
//! - [`Polynomial::add`] / [`Polynomial::sub`] merge terms by exponent
//! - [`Polynomial::mul`] replaces `self` with the full cross product
//! - [`Polynomial::mul_scalar`] scales every coefficient
//!
//! Cancelled terms are kept with a zero coefficient rather than removed;
//! renderings skip them.

pub mod format;
pub mod term;
mod render;

use std::ops::{AddAssign, MulAssign, SubAssign};

use rustc_hash::FxHashMap;

pub use format::{format_grouped, format_number};
pub use term::{Exponent, Term};


#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polynomial {
    terms: FxHashMap<Exponent, f64>,
}

impl Polynomial {
    /// Empty polynomial, evaluates to `0` everywhere.
    pub fn new() -> Self {
        Self { terms: FxHashMap::default() }
    }

    /// Builds a polynomial from `(coefficient, exponent)` pairs.
    ///
    /// When an exponent appears more than once, the first coefficient wins
    /// and later ones are ignored.
    pub fn from_terms(pairs: &[(f64, f64)]) -> Self {
        let mut terms =
            FxHashMap::with_capacity_and_hasher(pairs.len(), Default::default());
        for &(coefficient, exponent) in pairs {
            terms.entry(Exponent::new(exponent)).or_insert(coefficient);
        }
        Self { terms }
    }

    /// Single constant term `c * x^0`.
    pub fn constant(c: f64) -> Self {
        Self::from_terms(&[(c, 0.0)])
    }

    /// Number of stored terms, zero coefficients included.
    pub fn len(&self) -> usize { self.terms.len() }

    pub fn is_empty(&self) -> bool { self.terms.is_empty() }

    /// Stored coefficient at `exponent`, if the term exists.
    pub fn coefficient(&self, exponent: f64) -> Option<f64> {
        self.terms.get(&Exponent::new(exponent)).copied()
    }

    /// All stored terms in ascending exponent order.
    pub fn terms(&self) -> Vec<Term> {
        let mut terms: Vec<Term> = self.terms
            .iter()
            .map(|(exp, &coef)| Term::new(coef, exp.value()))
            .collect();
        terms.sort_by(|a, b| a.exponent.total_cmp(&b.exponent));
        terms
    }

    /// Highest exponent carrying a non-zero coefficient.
    pub fn degree(&self) -> Option<f64> {
        self.terms
            .iter()
            .filter(|(_, coef)| **coef != 0.0)
            .map(|(exp, _)| *exp)
            .max()
            .map(Exponent::value)
    }

    #[inline]
    fn merge(terms: &mut FxHashMap<Exponent, f64>, exponent: Exponent, coefficient: f64) {
        terms
            .entry(exponent)
            .and_modify(|c| *c += coefficient)
            .or_insert(coefficient);
    }

    /// Adds every term of `other` into `self`.
    pub fn add(&mut self, other: &Polynomial) {
        for (&exp, &coef) in &other.terms {
            Self::merge(&mut self.terms, exp, coef);
        }
    }

    /// Adds the single term `coefficient * x^exponent`.
    pub fn add_term(&mut self, coefficient: f64, exponent: f64) {
        Self::merge(&mut self.terms, Exponent::new(exponent), coefficient);
    }

    /// Adds a constant.
    pub fn add_scalar(&mut self, c: f64) {
        self.add_term(c, 0.0);
    }

    /// Subtracts every term of `other` from `self`.
    pub fn sub(&mut self, other: &Polynomial) {
        for (&exp, &coef) in &other.terms {
            Self::merge(&mut self.terms, exp, -coef);
        }
    }

    /// Subtracts the single term `coefficient * x^exponent`.
    ///
    /// Only the coefficient is negated; the exponent is untouched.
    pub fn sub_term(&mut self, coefficient: f64, exponent: f64) {
        Self::merge(&mut self.terms, Exponent::new(exponent), -coefficient);
    }

    /// Subtracts a constant.
    pub fn sub_scalar(&mut self, c: f64) {
        self.sub_term(c, 0.0);
    }

    /// Replaces `self` with `self * other`.
    ///
    /// Every pair of terms contributes `(c1 * c2) x^(e1 + e2)`; pairs landing
    /// on the same exponent accumulate. Pairs are visited in ascending
    /// exponent order so equal operands always give bit-identical products.
    pub fn mul(&mut self, other: &Polynomial) {
        let lhs = self.terms();
        let rhs = other.terms();

        let mut product =
            FxHashMap::with_capacity_and_hasher(lhs.len() * rhs.len(), Default::default());
        for t1 in &rhs {
            for t2 in &lhs {
                Self::merge(
                    &mut product,
                    Exponent::new(t1.exponent + t2.exponent),
                    t1.coefficient * t2.coefficient,
                );
            }
        }
        self.terms = product;
    }

    /// Scales every coefficient by `d`. Exponents are untouched.
    pub fn mul_scalar(&mut self, d: f64) {
        for coef in self.terms.values_mut() {
            *coef *= d;
        }
    }

    /// Sum of `c * x^e` over every stored term, in ascending exponent order.
    ///
    /// `0^0` is `1`, so a constant term survives evaluation at `x = 0`.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.terms().iter().map(|term| term.evaluate(x)).sum()
    }

    /// Evaluates by nested multiplication over ascending exponents.
    ///
    /// ```text
    /// x^e0 * (c0 + x^(e1-e0) * (c1 + x^(e2-e1) * (c2 + ...)))
    /// ```
    pub fn evaluate_horner(&self, x: f64) -> f64 {
        let terms = self.terms();
        let Some(last) = terms.last() else {
            return 0.0;
        };

        let mut acc = last.coefficient;
        for pair in terms.windows(2).rev() {
            let gap = pair[1].exponent - pair[0].exponent;
            acc = pair[0].coefficient + x.powf(gap) * acc;
        }

        acc * x.powf(terms[0].exponent)
    }
}


impl From<f64> for Polynomial {
    fn from(c: f64) -> Self { Self::constant(c) }
}

impl From<Term> for Polynomial {
    fn from(term: Term) -> Self {
        Self::from_terms(&[(term.coefficient, term.exponent)])
    }
}

impl From<&[(f64, f64)]> for Polynomial {
    fn from(pairs: &[(f64, f64)]) -> Self { Self::from_terms(pairs) }
}


impl AddAssign<&Polynomial> for Polynomial {
    fn add_assign(&mut self, rhs: &Polynomial) { self.add(rhs); }
}
impl AddAssign<f64> for Polynomial {
    fn add_assign(&mut self, rhs: f64) { self.add_scalar(rhs); }
}

impl SubAssign<&Polynomial> for Polynomial {
    fn sub_assign(&mut self, rhs: &Polynomial) { self.sub(rhs); }
}
impl SubAssign<f64> for Polynomial {
    fn sub_assign(&mut self, rhs: f64) { self.sub_scalar(rhs); }
}

impl MulAssign<&Polynomial> for Polynomial {
    fn mul_assign(&mut self, rhs: &Polynomial) { self.mul(rhs); }
}
impl MulAssign<f64> for Polynomial {
    fn mul_assign(&mut self, rhs: f64) { self.mul_scalar(rhs); }
}
