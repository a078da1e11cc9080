//! Newton (Divided-Difference) Interpolation
//!
//! Implements global polynomial interpolation using the
//! [divided-difference method](https://en.wikipedia.org/wiki/Newton_polynomial).
//!
//! Coefficients come from [`divided_difference::build`] and are evaluated at
//! query points using Horner's scheme over the Newton basis. Query points may
//! lie outside the sampled range; the polynomial is simply extrapolated.
//!
//! [`NewtonInterpolant`] keeps the whole construction around: the table, its
//! Newton form, and the expanded [`Polynomial`].


use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::divided_difference::{self, DividedDifferenceTable, TableDisplay};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::newton_form;
use crate::interpolation::reconstruct::reconstruct;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::traits::Interpolator;
use crate::polynomial::Polynomial;


/// Newton interpolation configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
///
/// # Construction
/// - Use [`NewtonCfg::new`] then optional setters.
///
/// # Defaults
/// - Minimum allowed spacing between any two `x` samples;
///   [`crate::interpolation::config::DEFAULT_X_TOL`] by default.
#[derive(Debug, Clone, Copy)]
pub struct NewtonCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> NewtonCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl Default for NewtonCfg<'_> {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(NewtonCfg<'a>);


/// Evaluates `c[0] + (xq - x[0]) * [ c[1] + (xq - x[1]) * [ ... c[n-1] ] ]`.
#[inline]
fn nested_eval(coeffs: &[f64], x: &[f64], xq: f64) -> f64 {
    let Some((&last, rest)) = coeffs.split_last() else {
        return 0.0;
    };

    let mut p = last;
    for j in (0..rest.len()).rev() {
        p = rest[j] + (xq - x[j]) * p;
    }
    p
}


/// Performs Newton divided-difference interpolation.
///
/// # Behavior
/// - Constructs the divided-difference table to obtain coefficients `c[i]`.
/// - For each evaluation point `xq` in `cfg.common.x_eval()`,
///   evaluates the polynomial using Horner's nested form:
///
/// ```text
/// P(xq) = c[0] + (xq - x[0]) * [ c[1] + (xq - x[1]) * [ ... c[n-1] ... ] ]
/// ```
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"newton"`
/// - `n_provided`     : number of (x, y) data points
/// - `n_evaluated`    : number of evaluation points
/// - `evaluated`      : interpolated values at each evaluation point
///
/// # Errors
/// - [`InterpolationError::EmptyInput`], [`InterpolationError::UnequalLength`]
///   or [`InterpolationError::InsufficientPoints`] if `x`/`y` were never set
///   consistently.
pub fn interpolate(cfg: NewtonCfg) -> Result<InterpolationReport, InterpolationError> {
    cfg.common.validate()?;

    let x     = cfg.common.x();
    let y     = cfg.common.y();
    let evals = cfg.common.x_eval();

    let mut report = InterpolationReport::new(
        Algorithm::Newton,
        x.len(),
        evals.len(),
    );

    let table  = divided_difference::build(x, y);
    let coeffs: Vec<f64> = table.leading_coefficients().collect();

    report.evaluated.extend(evals.iter().map(|&xq| nested_eval(&coeffs, x, xq)));

    Ok(report)
}


/// Checked Newton interpolant over owned samples.
///
/// # Fields
/// - `nodes`      : sample x values, in the order given
/// - `table`      : [`DividedDifferenceTable`] of the samples
/// - `coeffs`     : leading coefficients `f[k][0]`
/// - `polynomial` : the Newton form expanded into a [`Polynomial`]
#[derive(Debug, Clone)]
pub struct NewtonInterpolant {
    nodes     : Vec<f64>,
    table     : DividedDifferenceTable,
    coeffs    : Vec<f64>,
    polynomial: Polynomial,
}

impl NewtonInterpolant {
    /// Validates the samples the same way [`NewtonCfg`] does, then builds
    /// the table and expands it.
    ///
    /// # Errors
    /// Any [`InterpolationError`] raised by the [`NewtonCfg`] setters.
    pub fn new(x: &[f64], fx: &[f64]) -> Result<Self, InterpolationError> {
        let cfg = NewtonCfg::new().set_x(x)?.set_y(fx)?;
        cfg.common.validate()?;

        let table      = divided_difference::build(x, fx);
        let coeffs     = table.leading_coefficients().collect();
        let polynomial = reconstruct(x, &table);

        Ok(Self { nodes: x.to_vec(), table, coeffs, polynomial })
    }

    pub fn nodes(&self) -> &[f64] { &self.nodes }
    pub fn table(&self) -> &DividedDifferenceTable { &self.table }
    pub fn polynomial(&self) -> &Polynomial { &self.polynomial }
    pub fn into_polynomial(self) -> Polynomial { self.polynomial }

    /// See [`newton_form::render`].
    pub fn newton_form(&self) -> String {
        newton_form::render(&self.nodes, &self.table)
    }

    /// Printable triangular layout of the table.
    pub fn table_display(&self) -> TableDisplay<'_> {
        TableDisplay::new(&self.nodes, &self.table)
    }
}

impl Interpolator for NewtonInterpolant {
    fn eval(&self, x: f64) -> Result<f64, InterpolationError> {
        if !x.is_finite() {
            return Err(InterpolationError::NonFinitePoint { got: x });
        }
        Ok(nested_eval(&self.coeffs, &self.nodes, x))
    }
}
