//! Property-based tests for polynomial arithmetic
//!
//! Coefficients are small integers so sums and products stay exact and
//! results can be compared term for term.

use polyinterp::polynomial::Polynomial;
use proptest::prelude::*;

fn poly_strategy() -> impl Strategy<Value = Polynomial> {
    prop::collection::vec((-10i32..10, 0u8..6), 0..6).prop_map(|pairs| {
        let pairs: Vec<(f64, f64)> = pairs
            .into_iter()
            .map(|(c, e)| (f64::from(c), f64::from(e)))
            .collect();
        Polynomial::from_terms(&pairs)
    })
}

fn sum(p: &Polynomial, q: &Polynomial) -> Polynomial {
    let mut out = p.clone();
    out.add(q);
    out
}

fn product(p: &Polynomial, q: &Polynomial) -> Polynomial {
    let mut out = p.clone();
    out.mul(q);
    out
}

proptest! {
    #[test]
    fn add_is_associative(p in poly_strategy(), q in poly_strategy(), r in poly_strategy()) {
        let lhs = sum(&sum(&p, &q), &r);
        let rhs = sum(&p, &sum(&q, &r));
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn add_is_commutative(p in poly_strategy(), q in poly_strategy()) {
        prop_assert_eq!(sum(&p, &q), sum(&q, &p));
    }

    #[test]
    fn mul_is_commutative(p in poly_strategy(), q in poly_strategy()) {
        prop_assert_eq!(product(&p, &q), product(&q, &p));
    }

    #[test]
    fn mul_by_one_is_identity(p in poly_strategy()) {
        prop_assert_eq!(product(&p, &Polynomial::constant(1.0)), p);
    }

    #[test]
    fn self_subtraction_is_zero(p in poly_strategy(), x in -3.0f64..3.0) {
        let mut d = p.clone();
        d.sub(&p);

        prop_assert_eq!(d.len(), p.len());
        prop_assert_eq!(d.evaluate(x), 0.0);
        prop_assert_eq!(d.to_string(), "f(x) = 0");
    }

    #[test]
    fn product_evaluates_as_product(p in poly_strategy(), q in poly_strategy(), x in -2.0f64..2.0) {
        let expected = p.evaluate(x) * q.evaluate(x);
        let got = product(&p, &q).evaluate(x);
        prop_assert!((got - expected).abs() <= 1e-9 * (1.0 + expected.abs()));
    }

    #[test]
    fn horner_agrees_with_direct(p in poly_strategy(), x in -2.0f64..2.0) {
        let direct = p.evaluate(x);
        let nested = p.evaluate_horner(x);
        prop_assert!((direct - nested).abs() <= 1e-9 * (1.0 + direct.abs()));
    }
}
