use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::*;
use crate::easing::CustomEase;
use crate::error::WheelError;

/// Timing of the alpha dip played on the winning wedge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PulseConfig {
    #[validate(range(min = 0.0))]
    pub delay: f64,
    pub duration: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub min_alpha: f64,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self {
            delay: PULSE_DELAY_SECS,
            duration: PULSE_DURATION_SECS,
            min_alpha: PULSE_MIN_ALPHA,
        }
    }
}

/// Tunables for a wheel instance. Every field has a default, so an empty
/// JSON object is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct WheelConfig {
    /// Seconds from spin start to settle.
    pub spin_duration: f64,
    /// Whole turns added to every spin before the landing correction.
    #[validate(range(min = 10.0, max = 1000.0))]
    pub base_turns: f64,
    /// Screen angle of the fixed pointer, radians.
    pub pointer_angle: f64,
    #[validate(range(min = 1.0))]
    pub radius: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub label_radius_ratio: f64,
    pub ease_path: String,
    #[validate]
    pub pulse: PulseConfig,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            spin_duration: SPIN_DURATION_SECS,
            base_turns: DEFAULT_BASE_TURNS,
            pointer_angle: POINTER_ANGLE,
            radius: WHEEL_RADIUS,
            label_radius_ratio: LABEL_RADIUS_RATIO,
            ease_path: WHEEL_EASE_PATH.to_string(),
            pulse: PulseConfig::default(),
        }
    }
}

impl WheelConfig {
    pub fn from_json(json: &str) -> Result<Self, WheelError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| WheelError::InvalidConfig(e.to_string()))?;
        config.check()?;
        Ok(config)
    }

    /// Field ranges plus the rules `validator` can't express.
    pub fn check(&self) -> Result<(), WheelError> {
        self.validate()
            .map_err(|e| WheelError::InvalidConfig(e.to_string()))?;

        if self.spin_duration <= 0.0 || !self.spin_duration.is_finite() {
            return Err(WheelError::InvalidConfig(format!(
                "spin_duration must be positive, got {}",
                self.spin_duration
            )));
        }
        if !(MIN_BASE_TURNS..=MAX_BASE_TURNS).contains(&self.base_turns) {
            return Err(WheelError::InvalidConfig(format!(
                "base_turns must be between {} and {}, got {}",
                MIN_BASE_TURNS, MAX_BASE_TURNS, self.base_turns
            )));
        }
        if self.pulse.duration <= 0.0 || self.pulse.duration.is_nan() {
            return Err(WheelError::InvalidConfig(format!(
                "pulse.duration must be positive, got {}",
                self.pulse.duration
            )));
        }
        if !self.pointer_angle.is_finite() {
            return Err(WheelError::InvalidConfig("pointer_angle must be finite".to_string()));
        }
        CustomEase::parse(&self.ease_path)?;
        Ok(())
    }

    pub fn base_spin(&self) -> f64 {
        self.base_turns * TOTAL_ANGLE
    }

    pub fn ease(&self) -> Result<CustomEase, WheelError> {
        CustomEase::parse(&self.ease_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_defaults() {
        let config = WheelConfig::default();
        assert!(config.check().is_ok());
        assert_eq!(config.spin_duration, 8.0);
        assert_eq!(config.radius, 225.0);
        assert!((config.base_spin() - 20.0 * PI).abs() < 1e-9);
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(WheelConfig::from_json("{}").unwrap(), WheelConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let config = WheelConfig::from_json(r#"{"spin_duration": 5.5, "pulse": {"min_alpha": 0.2}}"#).unwrap();
        assert_eq!(config.spin_duration, 5.5);
        assert_eq!(config.pulse.min_alpha, 0.2);
        assert_eq!(config.pulse.duration, PULSE_DURATION_SECS);
        assert_eq!(config.base_turns, DEFAULT_BASE_TURNS);
    }

    #[test]
    fn test_rejects_short_spins() {
        let err = WheelConfig::from_json(r#"{"base_turns": 3}"#).unwrap_err();
        assert!(matches!(err, WheelError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_huge_spins() {
        let err = WheelConfig::from_json(r#"{"base_turns": 1e17}"#).unwrap_err();
        assert!(matches!(err, WheelError::InvalidConfig(_)));

        let config = WheelConfig {
            base_turns: MAX_BASE_TURNS + 1.0,
            ..WheelConfig::default()
        };
        assert!(config.check().is_err());

        let config = WheelConfig {
            base_turns: MAX_BASE_TURNS,
            ..WheelConfig::default()
        };
        assert!(config.check().is_ok());
    }

    #[test]
    fn test_rejects_bad_duration_and_ease() {
        assert!(WheelConfig::from_json(r#"{"spin_duration": 0}"#).is_err());
        assert!(WheelConfig::from_json(r#"{"spin_duration": -2}"#).is_err());
        assert!(WheelConfig::from_json(r#"{"ease_path": "M0,0 L1,1"}"#).is_err());
        assert!(WheelConfig::from_json(r#"{"pulse": {"min_alpha": 1.5}}"#).is_err());
        assert!(WheelConfig::from_json("not json").is_err());
    }
}
