//! Browser-independent animation engine.
//!
//! Every generator here is plain data plus timers obtained from a
//! [`scheduler::Scheduler`], so the components in `crate::components` only
//! translate engine state into markup.

pub mod carousel;
pub mod comet;
pub mod field;
pub mod image;
pub mod parallax;
pub mod scheduler;
pub mod shower;
pub mod stagger;

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("parallax multiplier {0} is outside (0, 1]")]
    Multiplier(f64),
    #[error("{name} range {min}..{max} is empty")]
    EmptyRange {
        name: &'static str,
        min: f64,
        max: f64,
    },
    #[error("{0} must be greater than zero")]
    Zero(&'static str),
    #[error("{name} value {value} exceeds {limit}")]
    TooLarge {
        name: &'static str,
        value: f64,
        limit: f64,
    },
    #[error("could not parse effects config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A closed-open range of floats used for every randomized quantity.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Uniform sample in `[min, max)`. A degenerate span returns `min`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.min < self.max {
            rng.gen_range(self.min..self.max)
        } else {
            self.min
        }
    }

    /// Uniform sample in `[min, max]`.
    pub fn sample_inclusive<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.gen_range(self.min..=self.max)
    }

    /// Rejects inverted spans and spans too wide to sample uniformly.
    pub fn validate(&self, name: &'static str) -> Result<(), EngineError> {
        // rand divides the width by just under one, so leave it headroom.
        if self.min <= self.max && self.max - self.min <= f64::MAX / 2.0 {
            Ok(())
        } else {
            Err(EngineError::EmptyRange {
                name,
                min: self.min,
                max: self.max,
            })
        }
    }
}

pub(crate) fn ensure_nonzero(name: &'static str, value: u32) -> Result<(), EngineError> {
    if value == 0 {
        return Err(EngineError::Zero(name));
    }
    Ok(())
}

/// Browsers store timer delays as a signed 32-bit count and fire anything
/// larger immediately.
pub const MAX_DELAY_MS: u32 = i32::MAX as u32;

pub(crate) fn ensure_delay(name: &'static str, value: u32) -> Result<(), EngineError> {
    ensure_at_most(name, f64::from(value), f64::from(MAX_DELAY_MS))
}

pub(crate) fn ensure_at_most(name: &'static str, value: f64, limit: f64) -> Result<(), EngineError> {
    if value > limit {
        return Err(EngineError::TooLarge { name, value, limit });
    }
    Ok(())
}

/// Fresh random source for one mounted generator.
pub fn entropy() -> Box<dyn RngCore> {
    Box::new(SmallRng::from_entropy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;

    #[test]
    fn span_samples_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let span = Span::new(2.0, 5.0);
        for _ in 0..500 {
            let v = span.sample(&mut rng);
            assert!((2.0..5.0).contains(&v));
        }
        assert_eq!(Span::new(3.0, 3.0).sample(&mut rng), 3.0);
    }

    #[test]
    fn inverted_span_is_rejected() {
        let err = Span::new(5.0, 1.0).validate("size").unwrap_err();
        assert!(matches!(err, EngineError::EmptyRange { name: "size", .. }));
        assert!(Span::new(f64::NAN, 1.0).validate("size").is_err());
        assert!(Span::new(1.0, 1.0).validate("size").is_ok());
    }

    #[test]
    fn span_too_wide_to_sample_is_rejected() {
        let span = Span::new(-1e308, 1e308);
        assert!(matches!(
            span.validate("size"),
            Err(EngineError::EmptyRange { name: "size", .. })
        ));
        assert!(Span::new(f64::NEG_INFINITY, 0.0).validate("size").is_err());
        assert!(Span::new(0.0, f64::MAX).validate("size").is_err());
        assert!(Span::new(-1e300, 1e300).validate("size").is_ok());
    }

    #[test]
    fn delays_past_the_browser_limit_are_rejected() {
        assert!(ensure_delay("grace_ms", MAX_DELAY_MS).is_ok());
        assert!(matches!(
            ensure_delay("grace_ms", u32::MAX),
            Err(EngineError::TooLarge { name: "grace_ms", .. })
        ));
    }
}
