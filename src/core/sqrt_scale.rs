use serde::{Deserialize, Serialize};

use crate::core::scale::{Scale, Ticks, linear_ticks, validate_domain_and_range};
use crate::error::SceneResult;

/// Square-root mapping, used to size marks so that area grows linearly with
/// the input value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SqrtScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl SqrtScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> SceneResult<Self> {
        validate_domain_and_range(domain, range)?;
        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        })
    }

    #[must_use]
    pub fn domain_to_pixel(self, value: f64) -> f64 {
        let sqrt_start = signed_sqrt(self.domain_start);
        let span = signed_sqrt(self.domain_end) - sqrt_start;
        if span == 0.0 {
            return if value.is_nan() {
                f64::NAN
            } else {
                (self.range_start + self.range_end) / 2.0
            };
        }

        let normalized = (signed_sqrt(value) - sqrt_start) / span;
        self.range_start + normalized * (self.range_end - self.range_start)
    }
}

impl Scale for SqrtScale {
    fn domain(&self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    fn range(&self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    fn domain_to_pixel(&self, value: f64) -> f64 {
        SqrtScale::domain_to_pixel(*self, value)
    }

    fn ticks(&self, count: usize) -> Ticks {
        linear_ticks(self.domain_start, self.domain_end, count)
    }
}

fn signed_sqrt(value: f64) -> f64 {
    if value < 0.0 {
        -(-value).sqrt()
    } else {
        value.sqrt()
    }
}
