//! Property-based tests for interpolation exactness
//!
//! Samples are taken from integer-coefficient polynomials on distinct
//! integer nodes, so every interpolant must reproduce the generator.

use std::collections::BTreeSet;

use polyinterp::interpolation::divided_difference::build;
use polyinterp::interpolation::lagrange;
use polyinterp::interpolation::reconstruct::reconstruct;
use proptest::prelude::*;

fn generator(coeffs: &[i32], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c as f64)
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * (1.0 + b.abs())
}

/// Distinct nodes plus one coefficient per node (degree n - 1).
fn samples_strategy() -> impl Strategy<Value = (Vec<f64>, Vec<i32>)> {
    prop::collection::btree_set(-6i32..6, 2..6).prop_flat_map(|nodes: BTreeSet<i32>| {
        let n = nodes.len();
        let x: Vec<f64> = nodes.into_iter().map(f64::from).collect();
        (Just(x), prop::collection::vec(-5i32..5, n))
    })
}

proptest! {
    #[test]
    fn table_is_triangular((x, coeffs) in samples_strategy()) {
        let fx: Vec<f64> = x.iter().map(|&xi| generator(&coeffs, xi)).collect();
        let table = build(&x, &fx);

        prop_assert_eq!(table.len(), x.len());
        for (k, row) in table.rows().iter().enumerate() {
            prop_assert_eq!(row.len(), x.len() - k);
        }
    }

    #[test]
    fn lagrange_reproduces_generator((x, coeffs) in samples_strategy(), t in -6.0f64..6.0) {
        let fx: Vec<f64> = x.iter().map(|&xi| generator(&coeffs, xi)).collect();

        for (&xi, &fi) in x.iter().zip(fx.iter()) {
            prop_assert!(close(lagrange::evaluate(&x, &fx, xi), fi));
        }
        prop_assert!(close(lagrange::evaluate(&x, &fx, t), generator(&coeffs, t)));
    }

    #[test]
    fn reconstruction_reproduces_generator((x, coeffs) in samples_strategy(), t in -6.0f64..6.0) {
        let fx: Vec<f64> = x.iter().map(|&xi| generator(&coeffs, xi)).collect();
        let p = reconstruct(&x, &build(&x, &fx));

        for (&xi, &fi) in x.iter().zip(fx.iter()) {
            prop_assert!(close(p.evaluate(xi), fi));
        }
        prop_assert!(close(p.evaluate(t), generator(&coeffs, t)));

        for (exp, &c) in coeffs.iter().enumerate() {
            let got = p.coefficient(exp as f64).unwrap_or(0.0);
            prop_assert!(close(got, c as f64), "x^{}: {} vs {}", exp, got, c);
        }
    }
}
