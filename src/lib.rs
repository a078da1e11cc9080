//! Sparse single-variable polynomials and polynomial interpolation.
//!
//! - [`polynomial`]    : [`polynomial::Polynomial`] algebra and rendering
//! - [`interpolation`] : Lagrange evaluation, Newton divided differences,
//!                       sample loading

pub mod interpolation;
pub mod polynomial;
