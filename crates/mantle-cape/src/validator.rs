//! Cape config validation.
//!
//! Dimensions are validated when they are built; this catches the
//! remaining non-physical values before a cape is created from them.

use mantle_cloth::AnchorCurve;
use mantle_types::{MantleError, MantleResult};

use crate::config::{CapeConfig, PhysicalProperties};

/// Validates a cape config.
///
/// Checks:
/// - All values are finite
/// - Drag, damping, and stretch threshold lie in `[0, 1]`
/// - Drag variance lies in `[0, 1)`, so a jittered force never flips sign
/// - Constraint passes and anchor scrunch are non-negative
pub fn validate_config(config: &CapeConfig) -> MantleResult<()> {
    if !config.offset.is_finite() {
        return Err(invalid("Cape offset must be finite"));
    }
    unit_interval("default_damping", config.default_damping)?;
    if config.constraint_passes < 0 {
        return Err(MantleError::InvalidConfig(format!(
            "constraint_passes must be non-negative, got {}",
            config.constraint_passes
        )));
    }

    validate_anchor(&config.anchor)?;
    validate_physical(&config.physical)?;

    Ok(())
}

fn validate_anchor(anchor: &AnchorCurve) -> MantleResult<()> {
    let finite = anchor.start_point.is_finite()
        && anchor.end_point.is_finite()
        && anchor.start_tangent.is_finite()
        && anchor.end_tangent.is_finite()
        && anchor.direction.is_finite();
    if !finite {
        return Err(invalid("Anchor curve points and tangents must be finite"));
    }
    if !(anchor.scrunch >= 0.0 && anchor.scrunch.is_finite()) {
        return Err(MantleError::InvalidConfig(format!(
            "Anchor scrunch must be non-negative, got {}",
            anchor.scrunch
        )));
    }
    Ok(())
}

fn validate_physical(physical: &PhysicalProperties) -> MantleResult<()> {
    unit_interval("drag", physical.drag)?;
    unit_interval("stretch_threshold", physical.stretch_threshold)?;

    let variance = physical.segment_drag_variance;
    if !(0.0..1.0).contains(&variance) {
        return Err(MantleError::InvalidConfig(format!(
            "segment_drag_variance must be in [0, 1), got {variance}"
        )));
    }

    let wind = &physical.wind;
    let finite = physical.gravity_factor.is_finite()
        && wind.wind_factor.is_finite()
        && wind.flutter_speed.is_finite()
        && wind.flutter_strength.is_finite();
    if !finite {
        return Err(invalid("Gravity and wind properties must be finite"));
    }

    Ok(())
}

fn unit_interval(name: &str, value: f32) -> MantleResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(MantleError::InvalidConfig(format!(
            "{name} must be in [0, 1], got {value}"
        )))
    }
}

fn invalid(message: &str) -> MantleError {
    MantleError::InvalidConfig(message.into())
}
