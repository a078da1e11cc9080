//! Expands the Newton form into a standard [`Polynomial`].
//!
//! ```text
//! P(x) = Σ_i a_i Π_{j < i} (x - x_j)
//! ```
//!
//! built only from [`Polynomial::mul`] and [`Polynomial::add`], so like
//! terms are collected by the polynomial's own merge rules.

use log::debug;

use crate::interpolation::divided_difference::DividedDifferenceTable;
use crate::polynomial::Polynomial;


/// Expanded interpolating polynomial for nodes `x` and their table.
///
/// O(n²) polynomial products; terms that cancel stay with coefficient `0`.
pub fn reconstruct(x: &[f64], table: &DividedDifferenceTable) -> Polynomial {
    let mut total = Polynomial::new();

    for (i, a) in table.leading_coefficients().enumerate() {
        let mut product = Polynomial::constant(a);
        for &node in &x[..i] {
            // (x - node)
            product.mul(&Polynomial::from_terms(&[(1.0, 1.0), (-node, 0.0)]));
        }
        total.add(&product);
    }

    debug!(
        "expanded Newton form of {} nodes into {} terms",
        table.len(),
        total.len()
    );
    total
}
