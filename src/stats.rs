//! Mean, median and mode over a list of integers.

use std::collections::HashMap;

/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[i64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sum: i128 = values.iter().map(|&v| v as i128).sum();
    sum as f64 / values.len() as f64
}

/// Computes the median of a slice of values. Returns 0.0 for empty input.
///
/// Works on a sorted copy; the caller's slice is left untouched.
pub fn median(values: &[i64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort();

    let len = sorted.len();
    if len % 2 == 1 {
        sorted[len / 2] as f64
    } else {
        (sorted[len / 2 - 1] as f64 + sorted[len / 2] as f64) / 2.0
    }
}

/// Returns the most frequent value(s) in ascending order.
///
/// The result is empty for empty input, and also when every distinct value
/// occurs the same number of times (there is no meaningful mode then).
pub fn mode(values: &[i64]) -> Vec<i64> {
    if values.is_empty() {
        return Vec::new();
    }

    let mut frequencies: HashMap<i64, usize> = HashMap::new();
    for &v in values {
        *frequencies.entry(v).or_default() += 1;
    }

    let max_count = frequencies.values().copied().max().unwrap_or(0);

    let mut modes: Vec<i64> = frequencies
        .iter()
        .filter(|&(_, &count)| count == max_count)
        .map(|(&value, _)| value)
        .collect();

    // every distinct value tied for the maximum
    if modes.len() == frequencies.len() {
        return Vec::new();
    }

    modes.sort_unstable();
    modes
}

/// An owned list of integers read from the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    values: Vec<i64>,
}

impl Dataset {
    pub fn new(values: Vec<i64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn mean(&self) -> f64 {
        mean(&self.values)
    }

    pub fn median(&self) -> f64 {
        median(&self.values)
    }

    pub fn mode(&self) -> Vec<i64> {
        mode(&self.values)
    }

    /// Computes all three statistics at once.
    pub fn summarize(&self) -> Summary {
        Summary {
            count: self.len(),
            mean: self.mean(),
            median: self.median(),
            modes: self.mode(),
        }
    }
}

impl From<Vec<i64>> for Dataset {
    fn from(values: Vec<i64>) -> Self {
        Self::new(values)
    }
}

/// The computed statistics for a [`Dataset`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// Ascending; empty when there is no mode.
    pub modes: Vec<i64>,
}

impl Summary {
    pub fn has_mode(&self) -> bool {
        !self.modes.is_empty()
    }
}
