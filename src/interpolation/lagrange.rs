//! Lagrange Interpolation
//!
//! Evaluates the interpolating polynomial at a point directly from the
//! [Lagrange basis](https://en.wikipedia.org/wiki/Lagrange_polynomial),
//! without building any table:
//!
//! ```text
//! P(t) = Σ_i fx[i] * Π_{j != i} (t - x[j]) / (x[i] - x[j])
//! ```


use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;


/// Lagrange interpolation configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
///
/// # Construction
/// - Use [`LagrangeCfg::new`] then optional setters.
#[derive(Debug, Clone, Copy)]
pub struct LagrangeCfg<'a> {
    common: CommonCfg<'a>,
}
impl<'a> LagrangeCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new() }
    }
}
impl Default for LagrangeCfg<'_> {
    fn default() -> Self { Self::new() }
}
impl_common_cfg!(LagrangeCfg<'a>);


/// Interpolated value at `target` from samples `(x[i], fx[i])`.
///
/// O(n²), no validation: coincident x values divide by zero and give a
/// non-finite result.
pub fn evaluate(x: &[f64], fx: &[f64], target: f64) -> f64 {
    let mut sum = 0.0;

    for (i, (&xi, &fi)) in x.iter().zip(fx).enumerate() {
        let mut basis = 1.0;
        for (j, &xj) in x.iter().enumerate() {
            if j != i {
                basis *= (target - xj) / (xi - xj);
            }
        }
        sum += fi * basis;
    }

    sum
}


/// Performs Lagrange interpolation over the data in [`CommonCfg`].
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"lagrange"`
/// - `n_provided`     : number of (x, y) data points
/// - `n_evaluated`    : number of evaluation points
/// - `evaluated`      : interpolated values at each evaluation point
///
/// # Errors
/// - [`InterpolationError::EmptyInput`], [`InterpolationError::UnequalLength`]
///   or [`InterpolationError::InsufficientPoints`] if `x`/`y` were never set
///   consistently.
pub fn interpolate(cfg: LagrangeCfg) -> Result<InterpolationReport, InterpolationError> {
    cfg.common.validate()?;

    let x     = cfg.common.x();
    let y     = cfg.common.y();
    let evals = cfg.common.x_eval();

    let mut report = InterpolationReport::new(
        Algorithm::Lagrange,
        x.len(),
        evals.len(),
    );

    report.evaluated.extend(evals.iter().map(|&xq| evaluate(x, y, xq)));

    Ok(report)
}
