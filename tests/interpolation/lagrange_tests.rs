use polyinterp::interpolation::errors::InterpolationError;
use polyinterp::interpolation::lagrange::{evaluate, interpolate, LagrangeCfg};
use polyinterp::interpolation::newton::{self, NewtonCfg};

type InterpResult = Result<(), InterpolationError>;

const ATOL: f64 = 1e-12;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL
}

#[test]
fn cubic_midpoint() {
    // f(x) = x^3 + 1
    let x  = [0.0, 1.0, 2.0, 3.0];
    let fx = [1.0, 2.0, 9.0, 28.0];

    let got = evaluate(&x, &fx, 1.5);
    assert!(approx_eq(got, 4.375), "got {got}");
}

#[test]
fn sample_points_reproduced_exactly() {
    let x  = [-1.0, 0.5, 2.0, 4.0];
    let fx = [3.0, -2.0, 7.5, 0.25];

    for (&xi, &fi) in x.iter().zip(fx.iter()) {
        assert_eq!(evaluate(&x, &fx, xi), fi);
    }
}

#[test]
fn unordered_samples() {
    // f(x) = 2x - 1
    let x  = [3.0, -1.0, 0.0];
    let fx = [5.0, -3.0, -1.0];

    assert!(approx_eq(evaluate(&x, &fx, 10.0), 19.0));
}

#[test]
fn single_sample_is_constant() {
    assert_eq!(evaluate(&[2.0], &[7.0], -100.0), 7.0);
}

#[test]
fn no_samples_is_zero() {
    assert_eq!(evaluate(&[], &[], 1.0), 0.0);
}

#[test]
fn coincident_x_is_non_finite() {
    let x  = [1.0, 1.0];
    let fx = [2.0, 3.0];

    assert!(!evaluate(&x, &fx, 0.5).is_finite());
    assert!(!evaluate(&x, &fx, 1.0).is_finite());
}

#[test]
fn checked_interpolation() -> InterpResult {
    let x      = [0.0, 1.0, 2.0, 3.0];
    let fx     = [1.0, 2.0, 9.0, 28.0];
    let x_eval = [0.5, 1.5, 4.0];

    let cfg = LagrangeCfg::new()
        .set_x(&x)?
        .set_y(&fx)?
        .set_x_eval(&x_eval)?;
    let rep = interpolate(cfg)?;

    assert_eq!(rep.algorithm_name, "lagrange");
    assert_eq!(rep.n_provided, 4);
    assert_eq!(rep.n_evaluated, 3);
    assert!(approx_eq(rep.evaluated[0], 1.125));
    assert!(approx_eq(rep.evaluated[1], 4.375));
    assert!(approx_eq(rep.evaluated[2], 65.0));
    Ok(())
}

#[test]
fn agrees_with_newton() -> InterpResult {
    let x      = [0.0, 1.0, 3.0, 6.0, 10.0];
    let fx     = [0.0, 2.0, 3.0, 3.0, 8.0];
    let x_eval = [0.5, 2.0, 4.5, 8.0, 9.75];

    let lagrange = interpolate(
        LagrangeCfg::new().set_x(&x)?.set_y(&fx)?.set_x_eval(&x_eval)?,
    )?;
    let newton = newton::interpolate(
        NewtonCfg::new().set_x(&x)?.set_y(&fx)?.set_x_eval(&x_eval)?,
    )?;

    for (l, n) in lagrange.evaluated.iter().zip(newton.evaluated.iter()) {
        assert!((l - n).abs() <= 1e-9, "lagrange={l}, newton={n}");
    }
    Ok(())
}

#[test]
fn duplicate_x_rejected() {
    let x = [0.0, 2.0, 0.0];
    let err = LagrangeCfg::new().set_x(&x).unwrap_err();
    assert!(matches!(err, InterpolationError::DuplicateX { .. }));
}
