//! # u-matstats
//!
//! Descriptive statistics over a fixed 3x3 numeric matrix.
//!
//! A flat sequence of exactly nine numbers is reshaped row-major into a
//! [`Matrix3`], and six statistics (mean, population variance, population
//! standard deviation, max, min, sum) are computed per row, per column and
//! over the whole matrix. All eighteen results come back in one
//! [`StatsResult`].
//!
//! ## Modules
//!
//! - [`stats`] — Slice-level primitives (Kahan sum, Welford variance, extrema)
//! - [`matrix`] — The fixed 3x3 grid and its row/column views
//! - [`calculate`](mod@calculate) — The [`calculate`](calculate::calculate) entry point and its result
//! - [`error`] — [`InvalidInputError`]
//!
//! ## Example
//!
//! ```
//! use u_matstats::calculate;
//!
//! let result = calculate(&[1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
//! assert_eq!(result.row_means, [2.0, 5.0, 8.0]);
//! assert_eq!(result.col_sums, [12.0, 15.0, 18.0]);
//! assert_eq!(result.sum, 45.0);
//! ```
//!
//! ## Design Philosophy
//!
//! - **Population statistics**: variance divides by `n`, never `n − 1`
//! - **Fixed shape**: per-line results are `[f64; 3]`, not vectors or maps
//! - **Pure**: no state is kept between calls; safe to call from any thread
//! - **Property-based testing**: invariants verified via proptest

pub mod calculate;
pub mod error;
pub mod matrix;
pub mod stats;

pub use calculate::{calculate, calculate_matrix, StatValue, StatsResult, KEYS};
pub use error::InvalidInputError;
pub use matrix::Matrix3;
