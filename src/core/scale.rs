use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{SceneError, SceneResult};

/// Tick values produced for one axis.
pub type Ticks = SmallVec<[f64; 16]>;

/// Mapping from a data domain to a pixel range.
///
/// Scales are value objects built per render. Mapping is total: a NaN input
/// maps to NaN and callers decide whether to drop the resulting geometry.
pub trait Scale {
    fn domain(&self) -> (f64, f64);

    fn range(&self) -> (f64, f64);

    fn domain_to_pixel(&self, value: f64) -> f64;

    /// Human-friendly tick values inside the domain, about `count` of them.
    fn ticks(&self, count: usize) -> Ticks;
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
    #[serde(default)]
    clamp: bool,
}

impl LinearScale {
    /// Creates a scale mapping `domain` onto `range`.
    ///
    /// A zero-span domain is accepted and maps every value to the middle of
    /// the range.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> SceneResult<Self> {
        validate_domain_and_range(domain, range)?;
        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
            clamp: false,
        })
    }

    /// Restricts output to the range when `clamp` is set.
    #[must_use]
    pub fn with_clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn domain_to_pixel(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        if span == 0.0 {
            return if value.is_nan() {
                f64::NAN
            } else {
                (self.range_start + self.range_end) / 2.0
            };
        }

        let mut normalized = (value - self.domain_start) / span;
        if self.clamp {
            normalized = normalized.clamp(0.0, 1.0);
        }
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    #[must_use]
    pub fn pixel_to_domain(self, pixel: f64) -> f64 {
        let span = self.range_end - self.range_start;
        if span == 0.0 {
            return self.domain_start;
        }

        let normalized = (pixel - self.range_start) / span;
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }

    #[must_use]
    pub fn ticks(self, count: usize) -> Ticks {
        linear_ticks(self.domain_start, self.domain_end, count)
    }
}

impl Scale for LinearScale {
    fn domain(&self) -> (f64, f64) {
        LinearScale::domain(*self)
    }

    fn range(&self) -> (f64, f64) {
        LinearScale::range(*self)
    }

    fn domain_to_pixel(&self, value: f64) -> f64 {
        LinearScale::domain_to_pixel(*self, value)
    }

    fn ticks(&self, count: usize) -> Ticks {
        LinearScale::ticks(*self, count)
    }
}

pub(crate) fn validate_domain_and_range(domain: (f64, f64), range: (f64, f64)) -> SceneResult<()> {
    if !domain.0.is_finite() || !domain.1.is_finite() {
        return Err(SceneError::InvalidData(
            "scale domain must be finite".to_owned(),
        ));
    }
    if !range.0.is_finite() || !range.1.is_finite() {
        return Err(SceneError::InvalidData(
            "scale range must be finite".to_owned(),
        ));
    }
    Ok(())
}

/// Round tick values on a 1-2-5 ladder covering `[start, end]`.
pub(crate) fn linear_ticks(start: f64, end: f64, count: usize) -> Ticks {
    let mut ticks = Ticks::new();
    if count == 0 || !start.is_finite() || !end.is_finite() {
        return ticks;
    }
    if start == end {
        ticks.push(start);
        return ticks;
    }

    let reverse = end < start;
    let (lo, hi) = if reverse { (end, start) } else { (start, end) };
    let step = tick_increment(lo, hi, count);
    if !step.is_finite() || step == 0.0 {
        return ticks;
    }

    if step > 0.0 {
        let first = (lo / step).ceil() as i64;
        let last = (hi / step).floor() as i64;
        for index in first..=last {
            ticks.push(index as f64 * step);
        }
    } else {
        // Negative increments encode `1 / step` to keep sub-unit ticks exact.
        let inverse = -step;
        let first = (lo * inverse).ceil() as i64;
        let last = (hi * inverse).floor() as i64;
        for index in first..=last {
            ticks.push(index as f64 / inverse);
        }
    }

    if reverse {
        ticks.reverse();
    }
    ticks
}

fn tick_increment(start: f64, end: f64, count: usize) -> f64 {
    const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
    const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
    const E2: f64 = std::f64::consts::SQRT_2;

    let step = (end - start) / count.max(1) as f64;
    let power = step.log10().floor();
    let error = step / 10_f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    if power >= 0.0 {
        factor * 10_f64.powf(power)
    } else {
        -(10_f64.powf(-power)) / factor
    }
}

#[cfg(test)]
mod tests {
    use super::linear_ticks;

    #[test]
    fn decade_domain_ticks_on_fives() {
        let ticks = linear_ticks(1952.0, 2007.0, 10);
        assert_eq!(ticks.first().copied(), Some(1955.0));
        assert_eq!(ticks.last().copied(), Some(2005.0));
        assert_eq!(ticks.len(), 11);
    }

    #[test]
    fn sub_unit_ticks_are_exact() {
        let ticks = linear_ticks(0.0, 1.0, 5);
        assert_eq!(ticks.as_slice(), &[0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn reversed_domain_yields_descending_ticks() {
        let ticks = linear_ticks(10.0, 0.0, 2);
        assert_eq!(ticks.as_slice(), &[10.0, 5.0, 0.0]);
    }

    #[test]
    fn non_finite_bounds_yield_no_ticks() {
        assert!(linear_ticks(f64::NAN, 1.0, 5).is_empty());
        assert!(linear_ticks(0.0, 1.0, 0).is_empty());
    }
}
