use polyinterp::polynomial::Polynomial;

#[test]
fn only_zero_term_renders_zero() {
    let p = Polynomial::from_terms(&[(0.0, 5.0)]);
    assert_eq!(p.to_string(), "f(x) = 0");
    assert_eq!(Polynomial::new().to_string(), "f(x) = 0");
}

#[test]
fn descending_exponents() {
    let p = Polynomial::from_terms(&[(1.0, 0.0), (3.0, 2.0), (2.0, 1.0)]);
    assert_eq!(p.to_string(), "f(x) = 3x^2 + 2x + 1");
}

#[test]
fn constant_only() {
    assert_eq!(Polynomial::constant(7.0).to_string(), "f(x) = 7");
    assert_eq!(Polynomial::constant(-2.5).render(), "f(x) = -2.5");
}

#[test]
fn zero_terms_skipped_between() {
    let p = Polynomial::from_terms(&[(1.0, 3.0), (0.0, 2.0), (0.0, 1.0), (4.0, 0.0)]);
    assert_eq!(p.to_string(), "f(x) = 1x^3 + 4");
}

#[test]
fn fractional_values() {
    let p = Polynomial::from_terms(&[(0.5, 2.5), (1.0 / 3.0, 1.0)]);
    assert_eq!(p.to_string(), "f(x) = 0.5x^2.5 + 0.33333x");
}

#[test]
fn negative_coefficients_keep_plus_join() {
    let p = Polynomial::from_terms(&[(-2.0, 1.0), (3.0, 2.0)]);
    assert_eq!(p.to_string(), "f(x) = 3x^2 + -2x");
}

#[test]
fn constant_followed_by_negative_exponent() {
    let p = Polynomial::from_terms(&[(1.0, 0.0), (4.0, -1.0)]);
    assert_eq!(p.to_string(), "f(x) = 1 + 4x^-1");
}

#[test]
fn render_matches_display() {
    let p = Polynomial::from_terms(&[(2.0, 3.0), (1.0, 0.0)]);
    assert_eq!(p.render(), format!("{p}"));
}
