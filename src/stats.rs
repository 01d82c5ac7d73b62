//! Slice-level descriptive statistics.
//!
//! Every function here works on an arbitrary `&[f64]` and returns `None`
//! only for empty input. Non-finite values are not rejected: they flow
//! through IEEE-754 arithmetic, so a NaN anywhere yields NaN and an
//! infinity yields an infinite sum or extremum with a NaN variance.
//!
//! # Algorithms
//!
//! - **Sum/Mean**: Kahan–Neumaier compensated summation.
//! - **Variance/StdDev**: Welford's online algorithm, population form
//!   (denominator `n`).
//!   Reference: Welford (1962), "Note on a Method for Calculating
//!   Corrected Sums of Squares and Products", *Technometrics* 4(3).

/// Computes the sum using Kahan–Neumaier compensated summation.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Examples
/// ```
/// use u_matstats::stats::kahan_sum;
/// assert_eq!(kahan_sum(&[1.0, 2.0, 3.0]), 6.0);
/// assert_eq!(kahan_sum(&[]), 0.0);
/// ```
pub fn kahan_sum(data: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for &x in data {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }
    // An infinite total makes the compensation NaN; the plain sum is exact then.
    if sum.is_finite() {
        sum + c
    } else {
        sum
    }
}

/// Computes the arithmetic mean, `kahan_sum(data) / n`.
///
/// # Returns
/// - `None` if `data` is empty.
///
/// # Examples
/// ```
/// use u_matstats::stats::mean;
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), Some(3.0));
/// assert_eq!(mean(&[]), None);
/// ```
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    Some(kahan_sum(data) / data.len() as f64)
}

/// Computes the population variance (denominator `n`).
///
/// # Returns
/// - `None` if `data` is empty.
///
/// # Examples
/// ```
/// use u_matstats::stats::population_variance;
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert!((population_variance(&v).unwrap() - 4.0).abs() < 1e-12);
/// ```
pub fn population_variance(data: &[f64]) -> Option<f64> {
    let mut acc = WelfordAccumulator::new();
    for &x in data {
        acc.update(x);
    }
    acc.population_variance()
}

/// Computes the population standard deviation.
///
/// Equivalent to `sqrt(population_variance(data))`.
///
/// # Returns
/// - `None` if `data` is empty.
pub fn population_std_dev(data: &[f64]) -> Option<f64> {
    population_variance(data).map(f64::sqrt)
}

/// Returns the minimum value in the slice.
///
/// # Returns
/// - `None` if `data` is empty.
/// - `Some(NaN)` if any element is NaN.
///
/// # Examples
/// ```
/// use u_matstats::stats::min;
/// assert_eq!(min(&[3.0, 1.0, 4.0, 1.0, 5.0]), Some(1.0));
/// assert!(min(&[3.0, f64::NAN, 1.0]).unwrap().is_nan());
/// ```
pub fn min(data: &[f64]) -> Option<f64> {
    let (&first, rest) = data.split_first()?;
    Some(rest.iter().copied().fold(first, nan_min))
}

/// Returns the maximum value in the slice.
///
/// # Returns
/// - `None` if `data` is empty.
/// - `Some(NaN)` if any element is NaN.
///
/// # Examples
/// ```
/// use u_matstats::stats::max;
/// assert_eq!(max(&[3.0, 1.0, 4.0, 1.0, 5.0]), Some(5.0));
/// ```
pub fn max(data: &[f64]) -> Option<f64> {
    let (&first, rest) = data.split_first()?;
    Some(rest.iter().copied().fold(first, nan_max))
}

// `f64::min`/`f64::max` skip NaN; these keep it.
fn nan_min(acc: f64, x: f64) -> f64 {
    if acc.is_nan() || x.is_nan() {
        f64::NAN
    } else {
        acc.min(x)
    }
}

fn nan_max(acc: f64, x: f64) -> f64 {
    if acc.is_nan() || x.is_nan() {
        f64::NAN
    } else {
        acc.max(x)
    }
}

// ---------------------------------------------------------------------------
// Welford online accumulator
// ---------------------------------------------------------------------------

/// Streaming accumulator for mean and population variance.
///
/// Maintains a running mean and the sum of squared deviations M₂ in a
/// single pass with O(1) memory, avoiding the catastrophic cancellation
/// of `Var = E[X²] − (E[X])²`.
///
/// # Examples
/// ```
/// use u_matstats::stats::WelfordAccumulator;
/// let mut acc = WelfordAccumulator::new();
/// for &x in &[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     acc.update(x);
/// }
/// assert!((acc.mean().unwrap() - 5.0).abs() < 1e-12);
/// assert!((acc.population_variance().unwrap() - 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct WelfordAccumulator {
    count: u64,
    mean_acc: f64,
    m2: f64,
}

impl WelfordAccumulator {
    /// Creates a new empty accumulator.
    pub fn new() -> Self {
        Self {
            count: 0,
            mean_acc: 0.0,
            m2: 0.0,
        }
    }

    /// Feeds a new sample into the accumulator.
    ///
    /// The first sample only initializes the mean, which keeps a lone
    /// huge value (e.g. `1e200`) from overflowing `delta²`.
    pub fn update(&mut self, value: f64) {
        let n1 = self.count;
        self.count += 1;

        if n1 == 0 {
            self.mean_acc = value;
            return;
        }

        let delta = value - self.mean_acc;
        let delta_n = delta / self.count as f64;
        self.m2 += delta * delta_n * n1 as f64;
        self.mean_acc += delta_n;
    }

    /// Returns the number of samples seen so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Returns the running mean, or `None` if no samples have been added.
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.mean_acc)
        }
    }

    /// Returns the population variance (n denominator), or `None` if no
    /// samples have been added.
    pub fn population_variance(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.m2 / self.count as f64)
        }
    }

    /// Returns the population standard deviation, or `None` if no samples
    /// have been added.
    pub fn population_std_dev(&self) -> Option<f64> {
        self.population_variance().map(f64::sqrt)
    }
}

impl Default for WelfordAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Six-statistic summary
// ---------------------------------------------------------------------------

/// The six statistics reported for every row, column and the whole matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    pub mean: f64,
    pub variance: f64,
    pub std: f64,
    pub max: f64,
    pub min: f64,
    pub sum: f64,
}

impl Summary {
    /// Summarizes a slice, or returns `None` if it is empty.
    ///
    /// # Examples
    /// ```
    /// use u_matstats::stats::Summary;
    /// let s = Summary::of(&[1.0, 2.0, 3.0]).unwrap();
    /// assert_eq!(s.mean, 2.0);
    /// assert_eq!(s.sum, 6.0);
    /// assert!((s.variance - 2.0 / 3.0).abs() < 1e-15);
    /// assert!(Summary::of(&[]).is_none());
    /// ```
    pub fn of(data: &[f64]) -> Option<Self> {
        let (&first, _) = data.split_first()?;
        Some(Self::from_nonempty(first, data))
    }

    /// Summarizes a fixed-size, non-empty array.
    ///
    /// Zero-length arrays are rejected at compile time.
    pub fn of_array<const N: usize>(data: &[f64; N]) -> Self {
        const { assert!(N > 0, "cannot summarize an empty array") };
        Self::from_nonempty(data[0], data)
    }

    fn from_nonempty(first: f64, data: &[f64]) -> Self {
        let mut acc = WelfordAccumulator::new();
        for &x in data {
            acc.update(x);
        }
        let sum = kahan_sum(data);
        let variance = acc.m2 / acc.count as f64;
        Self {
            mean: sum / data.len() as f64,
            variance,
            std: variance.sqrt(),
            max: data[1..].iter().copied().fold(first, nan_max),
            min: data[1..].iter().copied().fold(first, nan_min),
            sum,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // --- kahan_sum ---

    #[test]
    fn test_kahan_sum_basic() {
        assert_eq!(kahan_sum(&[1.0, 2.0, 3.0, 4.0]), 10.0);
    }

    #[test]
    fn test_kahan_sum_precision() {
        // 1.0 followed by many tiny values; naive summation loses them.
        let mut data = vec![1.0];
        data.extend(std::iter::repeat(1e-16).take(10_000));
        let s = kahan_sum(&data);
        assert!((s - (1.0 + 1e-12)).abs() < 1e-15, "got {s}");
    }

    #[test]
    fn test_kahan_sum_infinite() {
        assert_eq!(kahan_sum(&[1.0, f64::INFINITY, 2.0]), f64::INFINITY);
        assert_eq!(
            kahan_sum(&[-1.0, f64::NEG_INFINITY]),
            f64::NEG_INFINITY
        );
    }

    // --- mean ---

    #[test]
    fn test_mean_basic() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), Some(3.0));
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_mean_nan_propagates() {
        assert!(mean(&[1.0, f64::NAN]).unwrap().is_nan());
    }

    // --- variance ---

    #[test]
    fn test_population_variance_basic() {
        let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((population_variance(&v).unwrap() - 4.0).abs() < 1e-12);
        assert!((population_std_dev(&v).unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_population_variance_single() {
        assert_eq!(population_variance(&[42.0]), Some(0.0));
    }

    #[test]
    fn test_population_variance_empty() {
        assert_eq!(population_variance(&[]), None);
        assert_eq!(population_std_dev(&[]), None);
    }

    #[test]
    fn test_population_variance_constant() {
        assert_eq!(population_variance(&[5.0; 9]), Some(0.0));
    }

    #[test]
    fn test_population_variance_infinite_is_nan() {
        assert!(population_variance(&[1.0, f64::INFINITY]).unwrap().is_nan());
    }

    #[test]
    fn test_variance_large_offset() {
        // Welford avoids cancellation on data far from zero.
        let offset = 1e9;
        let data: Vec<f64> = [1.0, 2.0, 3.0].iter().map(|x| x + offset).collect();
        let var = population_variance(&data).unwrap();
        assert!((var - 2.0 / 3.0).abs() < 1e-6, "got {var}");
    }

    // --- min / max ---

    #[test]
    fn test_min_max() {
        let v = [3.0, -1.0, 4.0, 1.0, 5.0];
        assert_eq!(min(&v), Some(-1.0));
        assert_eq!(max(&v), Some(5.0));
    }

    #[test]
    fn test_min_max_empty() {
        assert_eq!(min(&[]), None);
        assert_eq!(max(&[]), None);
    }

    #[test]
    fn test_min_max_nan_propagates() {
        assert!(min(&[f64::NAN, 1.0]).unwrap().is_nan());
        assert!(max(&[1.0, f64::NAN, 2.0]).unwrap().is_nan());
    }

    #[test]
    fn test_min_max_infinite() {
        assert_eq!(max(&[1.0, f64::INFINITY]), Some(f64::INFINITY));
        assert_eq!(min(&[1.0, f64::NEG_INFINITY]), Some(f64::NEG_INFINITY));
    }

    // --- WelfordAccumulator ---

    #[test]
    fn test_welford_empty() {
        let acc = WelfordAccumulator::new();
        assert_eq!(acc.count(), 0);
        assert_eq!(acc.mean(), None);
        assert_eq!(acc.population_variance(), None);
        assert_eq!(acc.population_std_dev(), None);
    }

    #[test]
    fn test_welford_single() {
        let mut acc = WelfordAccumulator::default();
        acc.update(7.0);
        assert_eq!(acc.count(), 1);
        assert_eq!(acc.mean(), Some(7.0));
        assert_eq!(acc.population_variance(), Some(0.0));
    }

    #[test]
    fn test_welford_huge_single_value() {
        let mut acc = WelfordAccumulator::new();
        acc.update(1e200);
        assert_eq!(acc.population_variance(), Some(0.0));
    }

    // --- Summary ---

    #[test]
    fn test_summary_line() {
        let s = Summary::of_array(&[1.0, 4.0, 7.0]);
        assert_eq!(s.mean, 4.0);
        assert_eq!(s.variance, 6.0);
        assert_eq!(s.std, 6.0_f64.sqrt());
        assert_eq!(s.max, 7.0);
        assert_eq!(s.min, 1.0);
        assert_eq!(s.sum, 12.0);
    }

    #[test]
    fn test_summary_matches_slice_functions() {
        let data = [0.5, -3.25, 8.0, 1.0, 2.0];
        let s = Summary::of(&data).unwrap();
        assert_eq!(Some(s.mean), mean(&data));
        assert_eq!(Some(s.variance), population_variance(&data));
        assert_eq!(Some(s.std), population_std_dev(&data));
        assert_eq!(Some(s.max), max(&data));
        assert_eq!(Some(s.min), min(&data));
        assert_eq!(s.sum, kahan_sum(&data));
    }

    #[test]
    fn test_summary_empty() {
        assert_eq!(Summary::of(&[]), None);
    }

    #[test]
    fn test_summary_nan_line() {
        let s = Summary::of_array(&[1.0, f64::NAN, 3.0]);
        assert!(s.mean.is_nan());
        assert!(s.variance.is_nan());
        assert!(s.std.is_nan());
        assert!(s.max.is_nan());
        assert!(s.min.is_nan());
        assert!(s.sum.is_nan());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating finite f64 vectors of reasonable size.
    fn finite_vec(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
        proptest::collection::vec(-1e6_f64..1e6, min_len..=max_len)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn variance_non_negative(data in finite_vec(1, 100)) {
            let var = population_variance(&data).unwrap();
            prop_assert!(var >= 0.0, "variance must be >= 0, got {}", var);
        }

        #[test]
        fn variance_of_constant_is_zero(value in -1e12_f64..1e12, n in 1_usize..50) {
            let data = vec![value; n];
            let var = population_variance(&data).unwrap();
            prop_assert!(var.abs() < 1e-10, "variance of constant should be ~0, got {}", var);
        }

        #[test]
        fn std_dev_is_sqrt_of_variance(data in finite_vec(1, 100)) {
            let var = population_variance(&data).unwrap();
            let sd = population_std_dev(&data).unwrap();
            prop_assert_eq!(sd, var.sqrt());
        }

        // Two-pass reference: mean of squared deviations.
        #[test]
        fn welford_matches_two_pass(data in finite_vec(1, 100)) {
            let m = mean(&data).unwrap();
            let two_pass = data.iter().map(|x| (x - m).powi(2)).sum::<f64>() / data.len() as f64;
            let var = population_variance(&data).unwrap();
            prop_assert!(
                (var - two_pass).abs() < 1e-8 * two_pass.max(1.0),
                "welford={} two_pass={}", var, two_pass
            );
        }

        #[test]
        fn min_le_mean_le_max(data in finite_vec(1, 100)) {
            let s = Summary::of(&data).unwrap();
            let tol = 1e-9 * s.max.abs().max(s.min.abs()).max(1.0);
            prop_assert!(s.min <= s.mean + tol);
            prop_assert!(s.mean <= s.max + tol);
        }

        #[test]
        fn summary_mean_is_sum_over_count(data in finite_vec(1, 100)) {
            let s = Summary::of(&data).unwrap();
            prop_assert_eq!(s.mean, s.sum / data.len() as f64);
        }
    }
}
