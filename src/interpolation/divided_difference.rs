//! Newton divided-difference table.
//!
//! Row `0` holds the sample values, row `k` holds the `k`-th order divided
//! differences:
//!
//! ```text
//! f[k][j] = (f[k-1][j+1] - f[k-1][j]) / (x[k+j] - x[j])
//! ```
//!
//! so row `k` has `n - k` entries and the last row a single one. The first
//! entry of each row is a coefficient of the Newton form.

use std::fmt;

use log::{debug, trace};

use crate::polynomial::format_grouped;


/// Triangular table of divided differences, immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct DividedDifferenceTable {
    rows: Vec<Vec<f64>>,
}

impl DividedDifferenceTable {
    /// All rows, longest first.
    pub fn rows(&self) -> &[Vec<f64>] { &self.rows }

    pub fn row(&self, k: usize) -> Option<&[f64]> {
        self.rows.get(k).map(Vec::as_slice)
    }

    /// Number of rows, equal to the number of samples.
    pub fn len(&self) -> usize { self.rows.len() }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// `f[k][0]` for every row `k`: the Newton form coefficients.
    pub fn leading_coefficients(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().filter_map(|row| row.first().copied())
    }

    pub fn into_rows(self) -> Vec<Vec<f64>> { self.rows }
}


/// Builds the divided-difference table for samples `(x[i], fx[i])`.
///
/// O(n²) time and space. `x` must be pairwise distinct; coincident values
/// are not rejected and leave non-finite entries in the table.
pub fn build(x: &[f64], fx: &[f64]) -> DividedDifferenceTable {
    let n = fx.len();
    let mut rows: Vec<Vec<f64>> = Vec::with_capacity(n);
    if n == 0 {
        return DividedDifferenceTable { rows };
    }

    rows.push(fx.to_vec());
    for k in 1..n {
        let prev = &rows[k - 1];
        let row: Vec<f64> = (0..n - k)
            .map(|j| (prev[j + 1] - prev[j]) / (x[k + j] - x[j]))
            .collect();
        trace!("divided differences of order {k}: {row:?}");
        rows.push(row);
    }

    debug!("built divided-difference table with {n} rows");
    DividedDifferenceTable { rows }
}


const X_WIDTH: usize    = 20;
const CELL_WIDTH: usize = 40;
const RULE: &str        = "===================|";

/// Triangular printout of a [`DividedDifferenceTable`] next to its nodes.
///
/// ```text
/// x                   f(x)                f1                  f2
/// ===================|===================|===================|===================|
/// 0                   1
///
///                                         1
///
/// 1                   2                                       3
/// ...
/// ```
///
/// Sample lines carry `x[i]` and `f(x[i])`; the lines between them carry the
/// odd-order differences, and even-order differences sit on the sample lines,
/// so each difference lands between the two entries it was computed from.
pub struct TableDisplay<'a> {
    x    : &'a [f64],
    table: &'a DividedDifferenceTable,
}

impl<'a> TableDisplay<'a> {
    pub fn new(x: &'a [f64], table: &'a DividedDifferenceTable) -> Self {
        Self { x, table }
    }
}

impl fmt::Display for TableDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.table.rows();
        let n = rows.first().map_or(0, Vec::len);

        // header
        write!(f, "{:<w$}{:<w$}", "x", "f(x)", w = X_WIDTH)?;
        for order in 1..n {
            write!(f, "{:<w$}", format!("f{order}"), w = X_WIDTH)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", RULE.repeat(n + 1))?;

        let mut on_line = 0usize;
        for line in 0..2 * n {
            let sample_line = line % 2 == 0;
            if line < n && !sample_line {
                on_line += 1;
            } else if line >= n && sample_line {
                on_line -= 1;
            }

            if sample_line {
                write!(
                    f,
                    "{:<xw$}{:<cw$}",
                    format_grouped(self.x[line / 2]),
                    format_grouped(rows[0][line / 2]),
                    xw = X_WIDTH,
                    cw = CELL_WIDTH,
                )?;
            } else {
                write!(f, "{:<cw$}", "", cw = CELL_WIDTH)?;
            }

            for k in 0..on_line {
                let value = if sample_line {
                    rows[2 * k + 2][line / 2 - k - 1]
                } else {
                    rows[2 * k + 1][line / 2 - k]
                };
                write!(f, "{:<cw$}", format_grouped(value), cw = CELL_WIDTH)?;
            }

            write!(f, "\n\n")?;
        }

        Ok(())
    }
}
