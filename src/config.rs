use std::rc::Rc;

use log::{warn, Level};
use serde::{Deserialize, Serialize};
use web_sys::window;
use yew::prelude::*;

use crate::engine::comet::CometConfig;
use crate::engine::field::FieldConfig;
use crate::engine::parallax::check_multiplier;
use crate::engine::shower::ShowerConfig;
use crate::engine::EngineError;

/// localStorage key holding JSON overrides for [`EffectsConfig`].
pub const EFFECTS_KEY: &str = "effects";

/// Shown when a remote image cannot be loaded.
pub const HERO_PLACEHOLDER: &str =
    "https://storage.googleapis.com/a1aa/image/709461d3-fdf5-4644-bad6-73a230660719.jpg";

pub const CONTACT_PHONE: &str = "+919506060787";
pub const CONTACT_EMAIL: &str = "chris@webrocket.studio";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(debug_assertions)]
pub fn allow_overrides() -> bool {
    true // tune effects from devtools while developing
}

#[cfg(not(debug_assertions))]
pub fn allow_overrides() -> bool {
    false
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectsConfig {
    pub shower: ShowerConfig,
    pub field: FieldConfig,
    pub comet: CometConfig,
    /// One per purple splash, front to back.
    pub splash_multipliers: Vec<f64>,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            shower: ShowerConfig::default(),
            field: FieldConfig::default(),
            comet: CometConfig::default(),
            splash_multipliers: vec![0.15, 0.1, 0.06],
        }
    }
}

impl EffectsConfig {
    pub fn from_json(raw: &str) -> Result<Self, EngineError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        self.shower.validate()?;
        self.field.validate()?;
        self.comet.validate()?;
        self.splash_multipliers
            .iter()
            .try_for_each(|m| check_multiplier(*m))
    }
}

/// Effects tuning for this page load; defaults unless a valid override is
/// stored in debug builds.
pub fn load_effects() -> EffectsConfig {
    if !allow_overrides() {
        return EffectsConfig::default();
    }
    let raw = window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item(EFFECTS_KEY).ok())
        .flatten();
    match raw {
        Some(raw) => EffectsConfig::from_json(&raw).unwrap_or_else(|e| {
            warn!("Ignoring stored effects config: {}", e);
            EffectsConfig::default()
        }),
        None => EffectsConfig::default(),
    }
}

#[hook]
pub fn use_effects() -> Rc<EffectsConfig> {
    use_context::<Rc<EffectsConfig>>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_the_other_defaults() {
        let config =
            EffectsConfig::from_json(r#"{"field": {"count": 12}, "splash_multipliers": [0.3]}"#)
                .unwrap();
        assert_eq!(config.field.count, 12);
        assert_eq!(config.field.size, FieldConfig::default().size);
        assert_eq!(config.shower, ShowerConfig::default());
        assert_eq!(config.splash_multipliers, vec![0.3]);
    }

    #[test]
    fn out_of_range_multiplier_is_rejected() {
        let err = EffectsConfig::from_json(r#"{"splash_multipliers": [0.1, 2.0]}"#).unwrap_err();
        assert!(matches!(err, EngineError::Multiplier(m) if m == 2.0));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = EffectsConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, EngineError::Parse(_)));
    }

    #[test]
    fn inverted_duration_is_rejected() {
        let raw = r#"{"shower": {"duration": {"min": 3.0, "max": 1.5}}}"#;
        assert!(matches!(
            EffectsConfig::from_json(raw),
            Err(EngineError::EmptyRange { name: "duration", .. })
        ));
    }

    #[test]
    fn drift_beyond_the_host_box_is_rejected() {
        let err = EffectsConfig::from_json(r#"{"shower": {"drift": 1e308}}"#).unwrap_err();
        assert!(matches!(err, EngineError::TooLarge { name: "drift", .. }));
        assert!(EffectsConfig::from_json(r#"{"shower": {"drift": 100.0}}"#).is_ok());
    }

    #[test]
    fn unsampleable_field_span_is_rejected() {
        let raw = r#"{"field": {"size": {"min": -1e308, "max": 1e308}}}"#;
        assert!(matches!(
            EffectsConfig::from_json(raw),
            Err(EngineError::EmptyRange { name: "size", .. })
        ));
    }

    #[test]
    fn comet_gap_past_the_timer_limit_is_rejected() {
        let raw = r#"{"comet": {"gap_ms": {"min": 1, "max": 1e12}}}"#;
        assert!(matches!(
            EffectsConfig::from_json(raw),
            Err(EngineError::TooLarge { name: "gap_ms", .. })
        ));
        let raw = r#"{"shower": {"grace_ms": 4294967295}}"#;
        assert!(matches!(
            EffectsConfig::from_json(raw),
            Err(EngineError::TooLarge { name: "grace_ms", .. })
        ));
    }

    #[test]
    fn accepted_overrides_sample_without_panicking() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        use crate::engine::field::AmbientField;
        use crate::engine::shower::launch;

        let raw = r#"{
            "shower": {"drift": 100.0, "duration": {"min": 0.0, "max": 1e300}},
            "field": {"count": 50, "size": {"min": -1e300, "max": 1e300}}
        }"#;
        let config = EffectsConfig::from_json(raw).unwrap();
        let mut rng = StdRng::seed_from_u64(4);
        for id in 0..200 {
            launch(&mut rng, id, &config.shower);
        }
        assert_eq!(AmbientField::mount(&mut rng, &config.field).len(), 50);
    }

    #[test]
    fn defaults_are_valid() {
        assert!(EffectsConfig::default().validate().is_ok());
    }
}
