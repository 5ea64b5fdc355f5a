//! Patrol-and-fire: sweep the body every tick, shoot whatever the radar sees.

use rb_actuator::Actuator;
use rb_core::ScannedRobotEvent;
use tracing::trace;

use crate::{BehaviorResult, PatrolConfig, RobotBehavior};

/// Turns right by a fixed angle every tick and fires one bullet at every
/// scanned robot.  Holds no state beyond its configuration.
#[derive(Clone, Debug, Default)]
pub struct PatrolAndFire {
    config: PatrolConfig,
}

impl PatrolAndFire {
    pub fn new(config: PatrolConfig) -> BehaviorResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PatrolConfig {
        &self.config
    }
}

impl RobotBehavior for PatrolAndFire {
    fn tick(&mut self, robot: &mut dyn Actuator) -> BehaviorResult<()> {
        robot.turn_right(self.config.sweep_degrees)?;
        Ok(())
    }

    fn on_scanned_robot(&mut self, robot: &mut dyn Actuator, event: &ScannedRobotEvent) -> BehaviorResult<()> {
        let bullet = robot.fire_bullet(self.config.fire_power)?;
        trace!(target_name = %event.name, fired = bullet.is_some(), "fired at scanned robot");
        Ok(())
    }
}
