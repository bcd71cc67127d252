//! Per-tick simulation settings.

use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

/// How the integrator advances bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimMode {
    /// Sub-steps each body from impact to impact along its swept path.
    #[default]
    Continuous,
    /// Moves each body the full step, then fixes overlaps. Tunnels through thin obstacles.
    Discrete,
}

/// Settings read by [`step`](crate::integration::step) every tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub mode: SimMode,
    /// Multiplier applied to launch speed when bodies are fired. Does not affect bodies in flight.
    pub speed_scale: f64,
    /// Fraction of velocity kept after each bounce. Range (0, 1].
    pub restitution: f64,
    /// Maximum impacts resolved per body per tick in continuous mode.
    pub max_sub_steps: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            mode: SimMode::Continuous,
            speed_scale: 1.0,
            restitution: 0.9,
            max_sub_steps: Self::DEFAULT_MAX_SUB_STEPS,
        }
    }
}

impl SimConfig {
    pub const DEFAULT_MAX_SUB_STEPS: u32 = 10;

    pub fn continuous() -> Self {
        Self::default()
    }

    pub fn discrete() -> Self {
        Self {
            mode: SimMode::Discrete,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_restitution(mut self, restitution: f64) -> Self {
        self.restitution = restitution;
        self
    }

    #[must_use]
    pub fn with_max_sub_steps(mut self, max_sub_steps: u32) -> Self {
        self.max_sub_steps = max_sub_steps;
        self
    }

    /// Checks every field against its documented range.
    pub fn validate(&self) -> SimResult<()> {
        validate_restitution(self.restitution)?;
        validate_speed_scale(self.speed_scale)?;
        validate_sub_steps(self.max_sub_steps)?;
        Ok(())
    }

    /// Parses a (possibly partial) JSON document; missing fields take their defaults.
    pub fn from_json(json: &str) -> SimResult<Self> {
        let config: SimConfig = serde_json::from_str(json).map_err(|e| SimError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Restitution forced into (0, 1], so stepping stays total for hand-built configs.
    pub(crate) fn effective_restitution(&self) -> f64 {
        if self.restitution.is_finite() && self.restitution > 0.0 {
            self.restitution.min(1.0)
        } else {
            1.0
        }
    }
}

pub(crate) fn validate_restitution(restitution: f64) -> SimResult<()> {
    if restitution.is_finite() && restitution > 0.0 && restitution <= 1.0 {
        Ok(())
    } else {
        Err(SimError::InvalidRestitution(restitution))
    }
}

pub(crate) fn validate_speed_scale(speed_scale: f64) -> SimResult<()> {
    if speed_scale.is_finite() && speed_scale > 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidSpeedScale(speed_scale))
    }
}

pub(crate) fn validate_sub_steps(max_sub_steps: u32) -> SimResult<()> {
    if max_sub_steps >= 1 {
        Ok(())
    } else {
        Err(SimError::InvalidSubSteps(max_sub_steps))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = SimConfig::default();
        assert_eq!(config.mode, SimMode::Continuous);
        assert_eq!(config.max_sub_steps, SimConfig::DEFAULT_MAX_SUB_STEPS);
        assert!(config.validate().is_ok());
        assert_eq!(SimConfig::discrete().mode, SimMode::Discrete);
    }

    #[test]
    fn test_config_validate_ranges() {
        assert_eq!(
            SimConfig::default().with_restitution(0.0).validate(),
            Err(SimError::InvalidRestitution(0.0))
        );
        assert!(SimConfig::default().with_restitution(1.2).validate().is_err());
        assert!(SimConfig::default().with_restitution(1.0).validate().is_ok());
        assert_eq!(
            SimConfig::default().with_max_sub_steps(0).validate(),
            Err(SimError::InvalidSubSteps(0))
        );

        let config = SimConfig {
            speed_scale: -2.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(SimError::InvalidSpeedScale(-2.0)));
    }

    #[test]
    fn test_config_from_partial_json() {
        let config = SimConfig::from_json(r#"{ "mode": "discrete", "restitution": 0.5 }"#).expect("valid json");
        assert_eq!(config.mode, SimMode::Discrete);
        assert_eq!(config.restitution, 0.5);
        assert_eq!(config.speed_scale, 1.0);
        assert_eq!(config.max_sub_steps, 10);
    }

    #[test]
    fn test_config_from_json_rejects_bad_input() {
        assert!(matches!(SimConfig::from_json("{ mode: "), Err(SimError::Config(_))));
        assert!(matches!(
            SimConfig::from_json(r#"{ "restitution": 2.0 }"#),
            Err(SimError::InvalidRestitution(_))
        ));
        assert!(SimConfig::from_json(r#"{ "mode": "sideways" }"#).is_err());
    }

    #[test]
    fn test_effective_restitution_is_clamped() {
        assert_eq!(SimConfig::default().with_restitution(0.7).effective_restitution(), 0.7);
        assert_eq!(SimConfig::default().with_restitution(3.0).effective_restitution(), 1.0);
        assert_eq!(SimConfig::default().with_restitution(-1.0).effective_restitution(), 1.0);
    }
}
