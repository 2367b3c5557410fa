use super::EngineError;

/// Pointer displacement from the viewport centre, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offset {
    pub dx: f64,
    pub dy: f64,
}

pub fn pointer_offset(client_x: f64, client_y: f64, width: f64, height: f64) -> Offset {
    Offset {
        dx: client_x - width / 2.0,
        dy: client_y - height / 2.0,
    }
}

/// A blurred blob that follows the pointer, damped by its multiplier.
#[derive(Clone, Debug, PartialEq)]
pub struct SplashLayer {
    /// Pixels.
    pub size: f64,
    /// Viewport percent.
    pub top: f64,
    pub left: f64,
    multiplier: f64,
}

impl SplashLayer {
    pub fn new(size: f64, top: f64, left: f64, multiplier: f64) -> Result<Self, EngineError> {
        check_multiplier(multiplier)?;
        Ok(Self {
            size,
            top,
            left,
            multiplier,
        })
    }

    /// Centred on its base position.
    pub fn centered(size: f64, multiplier: f64) -> Result<Self, EngineError> {
        Self::new(size, 50.0, 50.0, multiplier)
    }

    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    pub fn translation(&self, offset: Offset) -> Offset {
        Offset {
            dx: offset.dx * self.multiplier,
            dy: offset.dy * self.multiplier,
        }
    }

    /// The scaled offset added on top of the centring transform.
    pub fn transform(&self, offset: Offset) -> String {
        let moved = self.translation(offset);
        format!(
            "translate(calc(-50% + {:.2}px), calc(-50% + {:.2}px))",
            moved.dx, moved.dy
        )
    }
}

pub fn check_multiplier(multiplier: f64) -> Result<(), EngineError> {
    if multiplier > 0.0 && multiplier <= 1.0 {
        Ok(())
    } else {
        Err(EngineError::Multiplier(multiplier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_measured_from_the_centre() {
        let offset = pointer_offset(700.0, 100.0, 1000.0, 800.0);
        assert_eq!(offset, Offset { dx: 200.0, dy: -300.0 });
        assert_eq!(pointer_offset(500.0, 400.0, 1000.0, 800.0), Offset::default());
    }

    #[test]
    fn each_layer_scales_the_offset_independently() {
        let offset = Offset { dx: 200.0, dy: -100.0 };
        let layers: Vec<SplashLayer> = [0.15, 0.1, 0.06]
            .into_iter()
            .map(|m| SplashLayer::centered(100.0, m).unwrap())
            .collect();

        for layer in &layers {
            let moved = layer.translation(offset);
            assert!((moved.dx - 200.0 * layer.multiplier()).abs() < 1e-9);
            assert!((moved.dy + 100.0 * layer.multiplier()).abs() < 1e-9);
        }
        // Smaller multipliers lag behind larger ones.
        assert!(layers[2].translation(offset).dx < layers[0].translation(offset).dx);
    }

    #[test]
    fn transform_keeps_the_centring() {
        let layer = SplashLayer::centered(220.0, 0.5).unwrap();
        assert_eq!(
            layer.transform(Offset { dx: 10.0, dy: -4.0 }),
            "translate(calc(-50% + 5.00px), calc(-50% + -2.00px))"
        );
    }

    #[test]
    fn multipliers_outside_unit_interval_are_rejected() {
        assert!(SplashLayer::centered(10.0, 0.0).is_err());
        assert!(SplashLayer::centered(10.0, 1.5).is_err());
        assert!(SplashLayer::centered(10.0, f64::NAN).is_err());
        assert!(SplashLayer::centered(10.0, 1.0).is_ok());
    }
}
