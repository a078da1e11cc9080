//! Sample loading.
//!
//! Samples are two lines of whitespace-separated reals: the x values on the
//! first line, f(x) on the second. Anything after the second line is ignored.
//!
//! ```text
//! 0 1 2 3
//! 1 2 9 28
//! ```
//!
//! Loading either yields both sequences or a [`SampleError`]; partial data
//! is never returned.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::debug;

use crate::interpolation::errors::{InterpolationError, SampleError};
use crate::interpolation::newton::NewtonInterpolant;


#[derive(Debug, Clone, PartialEq)]
pub struct Samples {
    pub x : Vec<f64>,
    pub fx: Vec<f64>,
}

impl Samples {
    pub fn len(&self) -> usize { self.x.len() }

    pub fn is_empty(&self) -> bool { self.x.is_empty() }

    /// Checked [`NewtonInterpolant`] over these samples.
    pub fn newton(&self) -> Result<NewtonInterpolant, InterpolationError> {
        NewtonInterpolant::new(&self.x, &self.fx)
    }
}

impl FromStr for Samples {
    type Err = SampleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_samples(s)
    }
}


fn parse_line(line: Option<&str>, number: usize) -> Result<Vec<f64>, SampleError> {
    let line = match line {
        Some(l) if !l.trim().is_empty() => l,
        _ => return Err(SampleError::MissingLine { line: number }),
    };

    line.split_whitespace()
        .map(|token| {
            token.parse::<f64>().map_err(|_| SampleError::InvalidNumber {
                line : number,
                token: token.to_string(),
            })
        })
        .collect()
}

/// Parses samples from text.
///
/// # Errors
/// - [`SampleError::MissingLine`]   if either line is absent or blank
/// - [`SampleError::InvalidNumber`] on the first token that is not a real
/// - [`SampleError::UnequalLength`] if the lines disagree in length
pub fn parse_samples(input: &str) -> Result<Samples, SampleError> {
    let mut lines = input.lines();
    let x  = parse_line(lines.next(), 1)?;
    let fx = parse_line(lines.next(), 2)?;

    if x.len() != fx.len() {
        return Err(SampleError::UnequalLength { x_len: x.len(), fx_len: fx.len() });
    }

    debug!("parsed {} samples", x.len());
    Ok(Samples { x, fx })
}

/// Reads and parses samples from the file at `path`.
///
/// # Errors
/// [`SampleError::Io`] if the file cannot be read, otherwise as
/// [`parse_samples`].
pub fn load_samples(path: impl AsRef<Path>) -> Result<Samples, SampleError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let samples = parse_samples(&contents)?;
    debug!("loaded {} samples from {}", samples.len(), path.display());
    Ok(samples)
}
