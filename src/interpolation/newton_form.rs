//! Textual Newton form of the interpolating polynomial.
//!
//! ```text
//! a0 + a1(x - x0) + a2(x - x0)(x - x1) + ...
//! ```
//!
//! with `a_i = f[i][0]` from the divided-difference table.

use crate::interpolation::divided_difference::DividedDifferenceTable;
use crate::polynomial::format_number;


/// Renders the Newton form for nodes `x` and their divided-difference table.
///
/// - terms with a zero coefficient are skipped entirely
/// - the first printed term has no operator; later ones print `+ a`, or
///   `- |a|` when `a < 0`
/// - a node at `0` prints as a bare `x`, a negative node as `(x + |x_j|)`
///
/// Renders `0` when every coefficient is zero.
pub fn render(x: &[f64], table: &DividedDifferenceTable) -> String {
    let mut out = String::new();

    for (i, a) in table.leading_coefficients().enumerate() {
        if a == 0.0 {
            continue;
        }

        if out.is_empty() {
            out.push_str(&format_number(a));
        } else if a < 0.0 {
            out.push_str(" - ");
            out.push_str(&format_number(-a));
        } else {
            out.push_str(" + ");
            out.push_str(&format_number(a));
        }

        for &node in &x[..i] {
            if node == 0.0 {
                out.push('x');
            } else if node < 0.0 {
                out.push_str(&format!("(x + {})", format_number(-node)));
            } else {
                out.push_str(&format!("(x - {})", format_number(node)));
            }
        }
    }

    if out.is_empty() {
        out.push('0');
    }
    out
}
