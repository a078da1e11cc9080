pub mod algorithms;
pub mod config;
pub mod errors;
pub mod report;
pub mod traits;
pub use traits::Interpolator;

pub mod divided_difference;
pub mod lagrange;
pub mod newton;
pub mod newton_form;
pub mod reconstruct;
pub mod samples;
