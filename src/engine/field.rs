use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{EngineError, Span};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub count: usize,
    /// Pixels.
    pub size: Span,
    /// Viewport width percent.
    pub left: Span,
    /// Viewport height percent; negative values start above the fold.
    pub top: Span,
    pub duration: Span,
    pub delay: Span,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: 40,
            size: Span::new(2.0, 5.0),
            left: Span::new(0.0, 100.0),
            top: Span::new(-20.0, 100.0),
            duration: Span::new(5.0, 12.0),
            delay: Span::new(0.0, 12.0),
        }
    }
}

impl FieldConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        self.size.validate("size")?;
        self.left.validate("left")?;
        self.top.validate("top")?;
        self.duration.validate("duration")?;
        self.delay.validate("delay")
    }
}

/// One falling star of the backdrop.
#[derive(Clone, Debug, PartialEq)]
pub struct Mote {
    pub size: f64,
    pub left: f64,
    pub top: f64,
    pub duration: f64,
    pub delay: f64,
}

impl Mote {
    pub fn style(&self) -> String {
        format!(
            "width: {size:.2}px; height: {size:.2}px; left: {:.2}vw; top: {:.2}vh; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.left,
            self.top,
            self.duration,
            self.delay,
            size = self.size,
        )
    }
}

/// Write-once pool of background motes.
#[derive(Debug, Default, PartialEq)]
pub struct AmbientField {
    motes: Vec<Mote>,
}

impl AmbientField {
    pub fn mount<R: Rng + ?Sized>(rng: &mut R, config: &FieldConfig) -> Self {
        let motes = (0..config.count)
            .map(|_| Mote {
                size: config.size.sample(rng),
                left: config.left.sample(rng),
                top: config.top.sample(rng),
                duration: config.duration.sample(rng),
                delay: config.delay.sample(rng),
            })
            .collect();
        Self { motes }
    }

    pub fn unmount(&mut self) {
        self.motes.clear();
    }

    pub fn motes(&self) -> &[Mote] {
        &self.motes
    }

    pub fn len(&self) -> usize {
        self.motes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.motes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn mount_fills_the_pool_and_unmount_empties_it() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut field = AmbientField::mount(&mut rng, &FieldConfig::default());
        assert_eq!(field.len(), 40);

        field.unmount();
        assert!(field.is_empty());
    }

    #[test]
    fn motes_respect_their_ranges() {
        let mut rng = StdRng::seed_from_u64(5);
        let config = FieldConfig {
            count: 500,
            ..FieldConfig::default()
        };
        let field = AmbientField::mount(&mut rng, &config);
        for mote in field.motes() {
            assert!((2.0..5.0).contains(&mote.size));
            assert!((0.0..100.0).contains(&mote.left));
            assert!((-20.0..100.0).contains(&mote.top));
            assert!((5.0..12.0).contains(&mote.duration));
            assert!((0.0..12.0).contains(&mote.delay));
        }
        assert!(field.motes().iter().any(|m| m.top < 0.0));
    }

    #[test]
    fn style_carries_size_and_timing() {
        let mote = Mote {
            size: 3.0,
            left: 10.0,
            top: -5.5,
            duration: 7.25,
            delay: 1.0,
        };
        assert_eq!(
            mote.style(),
            "width: 3.00px; height: 3.00px; left: 10.00vw; top: -5.50vh; animation-duration: 7.25s; animation-delay: 1.00s;"
        );
    }
}
