//! Textual renderings of a [`Polynomial`].
//!
//! - standard form via [`std::fmt::Display`] : `f(x) = 2x^3 + 4x + 1`
//! - Horner form via [`Polynomial::horner_form`] : `1 + x(4 + x^2(2))`

use std::fmt;

use super::format::format_number;
use super::Polynomial;


impl Polynomial {
    /// Standard form, same text as the [`fmt::Display`] impl.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Nested Horner form over ascending exponents.
    ///
    /// A constant term leads bare; every other term opens
    /// `x^gap(coefficient` where `gap` is the distance from the previous
    /// exponent (`^gap` omitted unless `gap > 1`), and all of them close
    /// at the end. Zero coefficients are kept so the nesting stays aligned
    /// with the exponents. An empty polynomial renders as `0`.
    pub fn horner_form(&self) -> String {
        let terms = self.terms();
        let Some(first) = terms.first() else {
            return "0".to_string();
        };

        let mut out = String::new();
        let leading_constant = first.exponent == 0.0;
        let nested = if leading_constant {
            out.push_str(&format_number(first.coefficient));
            &terms[1..]
        } else {
            &terms[..]
        };

        let mut reached = 0.0;
        for (i, term) in nested.iter().enumerate() {
            if leading_constant || i > 0 {
                out.push_str(" + ");
            }
            let gap = term.exponent - reached;
            out.push('x');
            if gap > 1.0 {
                out.push('^');
                out.push_str(&format_number(gap));
            }
            out.push('(');
            out.push_str(&format_number(term.coefficient));
            reached = term.exponent;
        }
        out.push_str(&")".repeat(nested.len()));

        out
    }
}

impl fmt::Display for Polynomial {
    /// `f(x) = ` followed by the non-zero terms in descending exponent order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("f(x) = ")?;

        let mut emitted = false;
        for term in self.terms().iter().rev() {
            if term.coefficient == 0.0 {
                continue;
            }
            if emitted {
                f.write_str(" + ")?;
            }

            let coef = format_number(term.coefficient);
            if term.exponent == 0.0 {
                f.write_str(&coef)?;
            } else if term.exponent == 1.0 {
                write!(f, "{coef}x")?;
            } else {
                write!(f, "{coef}x^{}", format_number(term.exponent))?;
            }
            emitted = true;
        }

        if !emitted {
            f.write_str("0")?;
        }
        Ok(())
    }
}
