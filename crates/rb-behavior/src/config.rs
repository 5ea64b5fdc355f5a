//! Tunables for the bundled behaviors.
//!
//! With the `serde` feature, missing fields fall back to the defaults, so a
//! config file only needs to name what it changes.

use rb_core::Heading;

use crate::{BehaviorError, BehaviorResult};

fn require_finite(what: &str, value: f64) -> BehaviorResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(BehaviorError::Config(format!("{what} must be finite, got {value}")))
    }
}

fn require_positive(what: &str, value: f64) -> BehaviorResult<()> {
    require_finite(what, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(BehaviorError::Config(format!("{what} must be positive, got {value}")))
    }
}

/// Settings for [`PatrolAndFire`][crate::PatrolAndFire].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct PatrolConfig {
    /// Right turn issued every tick, in degrees.  Default: 20.
    pub sweep_degrees: f64,
    /// Bullet power fired at every scanned robot.  Default: 1.
    pub fire_power:    f64,
}

impl Default for PatrolConfig {
    fn default() -> Self {
        Self { sweep_degrees: 20.0, fire_power: 1.0 }
    }
}

impl PatrolConfig {
    pub fn validate(&self) -> BehaviorResult<()> {
        require_finite("sweep_degrees", self.sweep_degrees)?;
        require_positive("fire_power", self.fire_power)
    }
}

/// Settings for [`ReactiveEvasion`][crate::ReactiveEvasion].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct EvasionConfig {
    /// Body heading to assume during setup.  Default: 90 (east).
    pub reference_heading: f64,
    /// Right turn of the gun during setup.  Default: 90.
    pub gun_offset:        f64,
    /// Forward move at the start of every tick.  Default: 20.
    pub advance_distance:  f64,
    /// Right turn issued on ticks with no hit reaction pending.  Default: 10.
    pub sweep_degrees:     f64,
    /// Bullet power fired at every scanned robot.  Default: 1.
    pub fire_power:        f64,
}

impl Default for EvasionConfig {
    fn default() -> Self {
        Self {
            reference_heading: 90.0,
            gun_offset:        90.0,
            advance_distance:  20.0,
            sweep_degrees:     10.0,
            fire_power:        1.0,
        }
    }
}

impl EvasionConfig {
    pub fn validate(&self) -> BehaviorResult<()> {
        Heading::try_new(self.reference_heading)?;
        require_finite("gun_offset", self.gun_offset)?;
        require_finite("advance_distance", self.advance_distance)?;
        require_finite("sweep_degrees", self.sweep_degrees)?;
        require_positive("fire_power", self.fire_power)
    }

    pub fn reference(&self) -> Heading {
        Heading::new(self.reference_heading)
    }
}
