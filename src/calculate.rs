//! Row, column and whole-matrix statistics.
//!
//! [`calculate`] reshapes nine values into a [`Matrix3`] and returns a
//! [`StatsResult`] holding eighteen fields: six statistics for each of the
//! three rows, the same six for each of the three columns, and the six over
//! all nine values taken together.
//!
//! | Statistic | Rows | Columns | Whole matrix |
//! |---|---|---|---|
//! | mean | `row_means` | `col_means` | `mean` |
//! | population variance | `row_variances` | `col_variances` | `variance` |
//! | population std. dev. | `row_stds` | `col_stds` | `std` |
//! | maximum | `row_maxs` | `col_maxs` | `max` |
//! | minimum | `row_mins` | `col_mins` | `min` |
//! | sum | `row_sums` | `col_sums` | `sum` |

use std::fmt;

use crate::error::InvalidInputError;
use crate::matrix::{Matrix3, DIM};
use crate::stats::Summary;

/// The eighteen result keys, in canonical order.
pub const KEYS: [&str; 18] = [
    "row_means",
    "row_variances",
    "row_stds",
    "row_maxs",
    "row_mins",
    "row_sums",
    "col_means",
    "col_variances",
    "col_stds",
    "col_maxs",
    "col_mins",
    "col_sums",
    "mean",
    "variance",
    "std",
    "max",
    "min",
    "sum",
];

/// All statistics for one matrix.
///
/// Per-line fields are indexed by row (or column) number. Field names equal
/// the keys in [`KEYS`], so the `serde` feature serializes this struct as the
/// canonical key/value mapping.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatsResult {
    pub row_means: [f64; DIM],
    pub row_variances: [f64; DIM],
    pub row_stds: [f64; DIM],
    pub row_maxs: [f64; DIM],
    pub row_mins: [f64; DIM],
    pub row_sums: [f64; DIM],
    pub col_means: [f64; DIM],
    pub col_variances: [f64; DIM],
    pub col_stds: [f64; DIM],
    pub col_maxs: [f64; DIM],
    pub col_mins: [f64; DIM],
    pub col_sums: [f64; DIM],
    pub mean: f64,
    pub variance: f64,
    pub std: f64,
    pub max: f64,
    pub min: f64,
    pub sum: f64,
}

/// One value of a [`StatsResult`], as seen through its key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatValue {
    /// One number per row or per column.
    Lines([f64; DIM]),
    /// A whole-matrix aggregate.
    Scalar(f64),
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Lines([a, b, c]) => write!(f, "[{a:?}, {b:?}, {c:?}]"),
            StatValue::Scalar(x) => write!(f, "{x:?}"),
        }
    }
}

impl StatsResult {
    /// Looks up a field by its key; `None` for unknown keys.
    ///
    /// # Examples
    /// ```
    /// use u_matstats::{calculate, StatValue};
    /// let r = calculate(&[1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
    /// assert_eq!(r.get("row_sums"), Some(StatValue::Lines([6.0, 15.0, 24.0])));
    /// assert_eq!(r.get("max"), Some(StatValue::Scalar(9.0)));
    /// assert_eq!(r.get("median"), None);
    /// ```
    pub fn get(&self, key: &str) -> Option<StatValue> {
        use StatValue::{Lines, Scalar};
        let value = match key {
            "row_means" => Lines(self.row_means),
            "row_variances" => Lines(self.row_variances),
            "row_stds" => Lines(self.row_stds),
            "row_maxs" => Lines(self.row_maxs),
            "row_mins" => Lines(self.row_mins),
            "row_sums" => Lines(self.row_sums),
            "col_means" => Lines(self.col_means),
            "col_variances" => Lines(self.col_variances),
            "col_stds" => Lines(self.col_stds),
            "col_maxs" => Lines(self.col_maxs),
            "col_mins" => Lines(self.col_mins),
            "col_sums" => Lines(self.col_sums),
            "mean" => Scalar(self.mean),
            "variance" => Scalar(self.variance),
            "std" => Scalar(self.std),
            "max" => Scalar(self.max),
            "min" => Scalar(self.min),
            "sum" => Scalar(self.sum),
            _ => return None,
        };
        Some(value)
    }

    /// Iterates over `(key, value)` pairs in [`KEYS`] order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, StatValue)> + '_ {
        KEYS.into_iter()
            .filter_map(move |key| self.get(key).map(|value| (key, value)))
    }
}

/// Renders the mapping form, e.g. `{'row_means': [2.0, 5.0, 8.0], ..., 'sum': 45.0}`.
impl fmt::Display for StatsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{key}': {value}")?;
        }
        f.write_str("}")
    }
}

/// Computes row, column and whole-matrix statistics for nine values given
/// in row-major order.
///
/// Integer inputs are widened to `f64` before any arithmetic.
///
/// # Errors
/// Returns [`InvalidInputError::SizeMismatch`] if `data.len() != 9`; no
/// statistics are computed in that case.
///
/// # Examples
/// ```
/// use u_matstats::calculate;
///
/// let r = calculate(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]).unwrap();
/// assert_eq!(r.row_means, [2.0, 5.0, 8.0]);
/// assert_eq!(r.col_means, [4.0, 5.0, 6.0]);
/// assert_eq!((r.mean, r.sum, r.max, r.min), (5.0, 45.0, 9.0, 1.0));
///
/// assert!(calculate(&[1, 2, 3]).is_err());
/// ```
pub fn calculate<T>(data: &[T]) -> Result<StatsResult, InvalidInputError>
where
    T: Copy + Into<f64>,
{
    let matrix = Matrix3::from_slice(data)?;
    Ok(calculate_matrix(&matrix))
}

/// Computes the statistics of an already-shaped matrix.
pub fn calculate_matrix(matrix: &Matrix3) -> StatsResult {
    let rows = matrix.rows().map(|line| Summary::of_array(&line));
    let cols = matrix.cols().map(|line| Summary::of_array(&line));
    let whole = Summary::of_array(&matrix.to_flat());

    log::trace!(
        "3x3 stats: mean={} variance={} sum={}",
        whole.mean,
        whole.variance,
        whole.sum
    );

    StatsResult {
        row_means: rows.map(|s| s.mean),
        row_variances: rows.map(|s| s.variance),
        row_stds: rows.map(|s| s.std),
        row_maxs: rows.map(|s| s.max),
        row_mins: rows.map(|s| s.min),
        row_sums: rows.map(|s| s.sum),
        col_means: cols.map(|s| s.mean),
        col_variances: cols.map(|s| s.variance),
        col_stds: cols.map(|s| s.std),
        col_maxs: cols.map(|s| s.max),
        col_mins: cols.map(|s| s.min),
        col_sums: cols.map(|s| s.sum),
        mean: whole.mean,
        variance: whole.variance,
        std: whole.std,
        max: whole.max,
        min: whole.min,
        sum: whole.sum,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
