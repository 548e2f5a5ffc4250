//! Percentile and dispersion statistics over arbitrary iterators.
//!
//! Each reducer maps the source through a key selector to `f64` keys, collects
//! them once and computes its result from that buffer. The source is pulled to
//! the end.
//!
//! # Percentiles
//!
//! For `n` keys sorted ascending, `x[1..=n]`, and a fraction `p`, a 1-based rank is
//! computed and the result interpolated linearly between `x[floor(rank)]` and
//! `x[floor(rank) + 1]` by the fractional part of the rank:
//!
//! - **Exclusive** method: `rank = p * (n + 1)`, defined for `1 < rank < n`.
//! - **Inclusive** method: `rank = p * (n - 1) + 1`, defined for `0 <= p <= 1`.
//!
//! # Variance
//!
//! Two-pass: the mean first, then the sum of squared deviations, divided by `n`
//! (population) or `n - 1` (sample).

use num_traits::AsPrimitive;
use seqx_common::{Error, Result, verify_arg, verify_state};

/// Extension trait providing statistical reducers on any iterator.
pub trait StatisticsExt: Iterator + Sized {
    /// Percentile by the exclusive method, `rank = p * (n + 1)`.
    ///
    /// Fails with an error naming `percentile` unless `p` lies strictly inside
    /// `(1 / (n + 1), n / (n + 1))`, so a single element never qualifies. Fails
    /// with an invalid operation error when the sequence is empty.
    fn percentile_exclusive<K, F>(self, key: F, percentile: f64) -> Result<f64>
    where
        F: FnMut(Self::Item) -> K,
        K: AsPrimitive<f64>,
    {
        let keys = sorted_keys(self, key, "percentile_exclusive")?;
        let n = keys.len() as f64;
        let rank = percentile * (n + 1.0);
        verify_arg!(percentile, rank > 1.0 && rank < n);
        Ok(interpolate(&keys, rank))
    }

    /// Percentile by the inclusive method, `rank = p * (n - 1) + 1`.
    ///
    /// Fails with an error naming `percentile` when `p` lies outside `[0, 1]`, and
    /// with an invalid operation error when the sequence is empty.
    fn percentile_inclusive<K, F>(self, key: F, percentile: f64) -> Result<f64>
    where
        F: FnMut(Self::Item) -> K,
        K: AsPrimitive<f64>,
    {
        verify_arg!(percentile, (0.0..=1.0).contains(&percentile));
        let keys = sorted_keys(self, key, "percentile_inclusive")?;
        let rank = percentile * (keys.len() - 1) as f64 + 1.0;
        Ok(interpolate(&keys, rank))
    }

    /// Same as [`StatisticsExt::percentile_inclusive`].
    fn percentile<K, F>(self, key: F, percentile: f64) -> Result<f64>
    where
        F: FnMut(Self::Item) -> K,
        K: AsPrimitive<f64>,
    {
        self.percentile_inclusive(key, percentile)
    }

    /// Mean squared deviation from the mean, divided by `n`.
    ///
    /// Fails on an empty sequence.
    fn variance_population<K, F>(self, key: F) -> Result<f64>
    where
        F: FnMut(Self::Item) -> K,
        K: AsPrimitive<f64>,
    {
        let keys = collect_keys(self, key);
        verify_state!("variance_population", !keys.is_empty());
        Ok(sum_of_squared_deviations(&keys) / keys.len() as f64)
    }

    /// Sum of squared deviations from the mean, divided by `n - 1`.
    ///
    /// Fails when the sequence has fewer than two elements.
    fn variance_sample<K, F>(self, key: F) -> Result<f64>
    where
        F: FnMut(Self::Item) -> K,
        K: AsPrimitive<f64>,
    {
        let keys = collect_keys(self, key);
        verify_state!("variance_sample", keys.len() > 1);
        Ok(sum_of_squared_deviations(&keys) / (keys.len() - 1) as f64)
    }

    /// Same as [`StatisticsExt::variance_sample`].
    fn variance<K, F>(self, key: F) -> Result<f64>
    where
        F: FnMut(Self::Item) -> K,
        K: AsPrimitive<f64>,
    {
        self.variance_sample(key)
    }

    /// Square root of [`StatisticsExt::variance_population`].
    fn standard_deviation_population<K, F>(self, key: F) -> Result<f64>
    where
        F: FnMut(Self::Item) -> K,
        K: AsPrimitive<f64>,
    {
        self.variance_population(key).map(f64::sqrt)
    }

    /// Square root of [`StatisticsExt::variance_sample`].
    fn standard_deviation_sample<K, F>(self, key: F) -> Result<f64>
    where
        F: FnMut(Self::Item) -> K,
        K: AsPrimitive<f64>,
    {
        self.variance_sample(key).map(f64::sqrt)
    }

    /// Same as [`StatisticsExt::standard_deviation_sample`].
    fn standard_deviation<K, F>(self, key: F) -> Result<f64>
    where
        F: FnMut(Self::Item) -> K,
        K: AsPrimitive<f64>,
    {
        self.standard_deviation_sample(key)
    }
}

impl<I: Iterator> StatisticsExt for I {}

fn collect_keys<I, K, F>(source: I, mut key: F) -> Vec<f64>
where
    I: Iterator,
    F: FnMut(I::Item) -> K,
    K: AsPrimitive<f64>,
{
    source.map(|item| key(item).as_()).collect()
}

fn sorted_keys<I, K, F>(source: I, key: F, operation: &str) -> Result<Vec<f64>>
where
    I: Iterator,
    F: FnMut(I::Item) -> K,
    K: AsPrimitive<f64>,
{
    let mut keys = collect_keys(source, key);
    if keys.is_empty() {
        return Err(Error::invalid_operation(
            operation,
            "sequence contains no elements",
        ));
    }
    keys.sort_unstable_by(f64::total_cmp);
    Ok(keys)
}

/// Value at 1-based `rank` within `sorted`, interpolated between neighbors.
///
/// `rank` must lie in `[1, sorted.len()]`.
fn interpolate(sorted: &[f64], rank: f64) -> f64 {
    let floor = rank.floor();
    let index = floor as usize - 1;
    let lower = sorted[index];
    let fraction = rank - floor;
    match sorted.get(index + 1) {
        Some(&upper) if fraction > 0.0 => lower + fraction * (upper - lower),
        _ => lower,
    }
}

fn sum_of_squared_deviations(keys: &[f64]) -> f64 {
    let mean = keys.iter().sum::<f64>() / keys.len() as f64;
    keys.iter().map(|&x| (x - mean) * (x - mean)).sum()
}
