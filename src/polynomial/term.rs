//! Exponent keys and the `(coefficient, exponent)` term pair.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Hashable exponent key.
///
/// Exponents are arbitrary `f64` values (negative and fractional included).
/// Equality and hashing follow the bit pattern, with `-0.0` folded into `0.0`
/// so both spellings of the constant exponent land on the same term.
#[derive(Debug, Clone, Copy)]
pub struct Exponent(f64);

impl Exponent {
    pub fn new(v: f64) -> Self {
        // `-0.0 == 0.0` holds, so this folds both zeros
        Self(if v == 0.0 { 0.0 } else { v })
    }

    pub fn value(self) -> f64 { self.0 }
}

impl PartialEq for Exponent {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}
impl Eq for Exponent {}

impl Hash for Exponent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl PartialOrd for Exponent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Exponent {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<f64> for Exponent {
    fn from(v: f64) -> Self { Self::new(v) }
}


/// A single `coefficient * x^exponent` term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
    pub coefficient: f64,
    pub exponent   : f64,
}

impl Term {
    pub fn new(coefficient: f64, exponent: f64) -> Self {
        Self { coefficient, exponent }
    }

    /// `coefficient * x^exponent`
    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficient * x.powf(self.exponent)
    }
}

impl From<(f64, f64)> for Term {
    fn from((coefficient, exponent): (f64, f64)) -> Self {
        Self { coefficient, exponent }
    }
}
