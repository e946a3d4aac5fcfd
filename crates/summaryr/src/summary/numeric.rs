//! Descriptive statistics for numeric and temporal columns.

use chrono::{DateTime, NaiveDateTime};
use serde::Serialize;

use crate::dataset::DType;

/// Welford accumulator for mean and variance in a single pass.
#[derive(Debug, Clone, Default)]
struct RunningMoments {
    count: usize,
    mean: f64,
    m2: f64,
}

impl RunningMoments {
    fn add(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (value - self.mean);
    }

    fn mean(&self) -> Option<f64> {
        (self.count > 0).then_some(self.mean)
    }

    /// Sample standard deviation (n - 1 denominator).
    fn std(&self) -> Option<f64> {
        (self.count > 1).then(|| (self.m2 / (self.count - 1) as f64).sqrt())
    }
}

/// Linear interpolation between the closest ranks of a sorted slice.
fn quantile_position(len: usize, p: f64) -> (usize, usize, f64) {
    let pos = p * (len - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    (lo, hi.min(len - 1), pos - lo as f64)
}

fn quantile(sorted: &[f64], p: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let (lo, hi, frac) = quantile_position(sorted.len(), p);
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

fn quantile_micros(sorted: &[i64], p: f64) -> Option<i64> {
    if sorted.is_empty() {
        return None;
    }
    let (lo, hi, frac) = quantile_position(sorted.len(), p);
    let span = (i128::from(sorted[hi]) - i128::from(sorted[lo])) as f64;
    let offset = (span * frac).round() as i128;
    i64::try_from(i128::from(sorted[lo]) + offset).ok()
}

/// Statistics of a numeric column.
///
/// Statistics that are undefined for the column (everything when all
/// values are missing, `std` for fewer than two values) are `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericSummary {
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    #[serde(rename = "25%")]
    pub q1: Option<f64>,
    #[serde(rename = "50%")]
    pub median: Option<f64>,
    #[serde(rename = "75%")]
    pub q3: Option<f64>,
    pub max: Option<f64>,
    /// Missing-value count, present only when non-zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nulls: Option<usize>,
    pub dtype: DType,
}

impl NumericSummary {
    /// Summarize values; `None` and `NaN` are missing.
    pub fn from_values(values: impl IntoIterator<Item = Option<f64>>, dtype: DType) -> Self {
        let mut moments = RunningMoments::default();
        let mut sorted = Vec::new();
        let mut missing = 0;

        for value in values {
            match value {
                Some(v) if !v.is_nan() => {
                    moments.add(v);
                    sorted.push(v);
                }
                _ => missing += 1,
            }
        }
        sorted.sort_by(f64::total_cmp);

        Self {
            count: moments.count,
            mean: moments.mean(),
            std: moments.std(),
            min: sorted.first().copied(),
            q1: quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.5),
            q3: quantile(&sorted, 0.75),
            max: sorted.last().copied(),
            nulls: (missing > 0).then_some(missing),
            dtype,
        }
    }
}

/// Statistics of a date/time column, computed on the timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemporalSummary {
    pub count: usize,
    pub mean: Option<NaiveDateTime>,
    pub min: Option<NaiveDateTime>,
    #[serde(rename = "25%")]
    pub q1: Option<NaiveDateTime>,
    #[serde(rename = "50%")]
    pub median: Option<NaiveDateTime>,
    #[serde(rename = "75%")]
    pub q3: Option<NaiveDateTime>,
    pub max: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nulls: Option<usize>,
    pub dtype: DType,
}

impl TemporalSummary {
    pub fn from_values<'a>(values: impl IntoIterator<Item = &'a Option<NaiveDateTime>>, dtype: DType) -> Self {
        let mut sorted: Vec<i64> = Vec::new();
        let mut missing = 0;
        for value in values {
            match value {
                Some(dt) => sorted.push(dt.and_utc().timestamp_micros()),
                None => missing += 1,
            }
        }
        sorted.sort_unstable();

        let mean = (!sorted.is_empty()).then(|| {
            let total: i128 = sorted.iter().map(|&m| m as i128).sum();
            (total / sorted.len() as i128) as i64
        });

        Self {
            count: sorted.len(),
            mean: mean.and_then(from_micros),
            min: sorted.first().copied().and_then(from_micros),
            q1: quantile_micros(&sorted, 0.25).and_then(from_micros),
            median: quantile_micros(&sorted, 0.5).and_then(from_micros),
            q3: quantile_micros(&sorted, 0.75).and_then(from_micros),
            max: sorted.last().copied().and_then(from_micros),
            nulls: (missing > 0).then_some(missing),
            dtype,
        }
    }
}

fn from_micros(micros: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp_micros(micros).map(|dt| dt.naive_utc())
}
