use serde::{Deserialize, Serialize};

use crate::core::scale::{Scale, Ticks, linear_ticks, validate_domain_and_range};
use crate::error::{SceneError, SceneResult};

/// Base-10 logarithmic mapping; both domain bounds must be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
    #[serde(default)]
    clamp: bool,
}

impl LogScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> SceneResult<Self> {
        validate_domain_and_range(domain, range)?;
        if domain.0 <= 0.0 || domain.1 <= 0.0 {
            return Err(SceneError::InvalidData(
                "log scale requires a strictly positive domain".to_owned(),
            ));
        }

        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
            clamp: false,
        })
    }

    /// When set, inputs are clamped into the domain before the log transform,
    /// so values at or below the lower bound land on the range start.
    #[must_use]
    pub fn with_clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    #[must_use]
    pub fn is_clamped(self) -> bool {
        self.clamp
    }

    #[must_use]
    pub fn domain_to_pixel(self, value: f64) -> f64 {
        let value = if self.clamp && !value.is_nan() {
            let (lo, hi) = ordered(self.domain_start, self.domain_end);
            value.clamp(lo, hi)
        } else {
            value
        };

        let log_start = self.domain_start.log10();
        let span = self.domain_end.log10() - log_start;
        if span == 0.0 {
            return if value.is_nan() {
                f64::NAN
            } else {
                (self.range_start + self.range_end) / 2.0
            };
        }

        // log10 of a non-positive input is NaN or -inf; both drop out downstream.
        let normalized = (value.log10() - log_start) / span;
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    #[must_use]
    pub fn ticks(self, count: usize) -> Ticks {
        let ladder = log_ladder_ticks(self.domain_start, self.domain_end, count);
        if ladder.is_empty() {
            return linear_ticks(self.domain_start, self.domain_end, count);
        }
        ladder
    }
}

impl Scale for LogScale {
    fn domain(&self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    fn range(&self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    fn domain_to_pixel(&self, value: f64) -> f64 {
        LogScale::domain_to_pixel(*self, value)
    }

    fn ticks(&self, count: usize) -> Ticks {
        LogScale::ticks(*self, count)
    }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

/// 1-2-5 decade ladder inside the domain, thinned to about `tick_count` values.
fn log_ladder_ticks(start: f64, end: f64, tick_count: usize) -> Ticks {
    if tick_count == 0 {
        return Ticks::new();
    }

    let ascending = start <= end;
    let (min, max) = ordered(start, end);
    let min_exp = min.log10().floor() as i32;
    let max_exp = max.log10().ceil() as i32;

    let mut ticks = Vec::new();
    for exp in min_exp..=max_exp {
        let decade = 10_f64.powi(exp);
        for multiplier in [1.0, 2.0, 5.0] {
            let candidate = decade * multiplier;
            if candidate >= min && candidate <= max {
                ticks.push(candidate);
            }
        }
    }

    let mut sampled: Ticks = if ticks.len() > tick_count {
        evenly_sample_ticks(&ticks, tick_count).into_iter().collect()
    } else {
        ticks.into_iter().collect()
    };
    if !ascending {
        sampled.reverse();
    }
    sampled
}

/// Picks `target` values spread across `ticks`, always keeping decades.
fn evenly_sample_ticks(ticks: &[f64], target: usize) -> Vec<f64> {
    let decades: Vec<f64> = ticks
        .iter()
        .copied()
        .filter(|value| is_power_of_ten(*value))
        .collect();
    if decades.len() >= target || target <= 1 {
        return decades;
    }

    let last_index = ticks.len() - 1;
    let mut sampled = decades;
    for step in 0..target {
        if sampled.len() >= target {
            break;
        }
        let ratio = (step as f64) / ((target - 1) as f64);
        let index = (ratio * (last_index as f64)).round() as usize;
        let value = ticks[index.min(last_index)];
        if !sampled.iter().any(|existing| approx_equal(*existing, value)) {
            sampled.push(value);
        }
    }

    sampled.sort_by(|lhs, rhs| lhs.total_cmp(rhs));
    sampled
}

fn is_power_of_ten(value: f64) -> bool {
    let exponent = value.log10().round();
    approx_equal(value, 10_f64.powf(exponent))
}

fn approx_equal(lhs: f64, rhs: f64) -> bool {
    let scale = lhs.abs().max(rhs.abs()).max(1.0);
    (lhs - rhs).abs() <= scale * 1e-12
}
