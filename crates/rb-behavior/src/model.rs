//! The `RobotBehavior` trait — the extension point for decision policies.

use rb_actuator::Actuator;
use rb_core::{
    BattleEndedEvent, BulletHitBulletEvent, BulletHitEvent, BulletMissedEvent, DeathEvent,
    HitByBulletEvent, HitRobotEvent, HitWallEvent, RobotDeathEvent, RobotEvent, RoundEndedEvent,
    ScannedRobotEvent, StatusEvent, WinEvent,
};

use crate::BehaviorResult;

/// A robot's decision policy, written purely against the capability contract.
///
/// Every callback receives the robot as `&mut dyn Actuator`.  The behavior
/// cannot tell whether that is the live host or a substitute, and must not
/// try to.
///
/// # Required methods
///
/// Only [`tick`][Self::tick] is required.  Setup and every event hook default
/// to doing nothing.
///
/// # Call order
///
/// The host calls `setup` once, then `tick` repeatedly.  Event hooks arrive
/// between ticks and each runs to completion before the host continues, so a
/// behavior never sees two callbacks at once.
///
/// # Example
///
/// ```rust,ignore
/// struct Spinner;
///
/// impl RobotBehavior for Spinner {
///     fn tick(&mut self, robot: &mut dyn Actuator) -> BehaviorResult<()> {
///         robot.turn_right(45.0)?;
///         Ok(())
///     }
/// }
/// ```
pub trait RobotBehavior: Send {
    /// One-time setup before the first tick.
    fn setup(&mut self, _robot: &mut dyn Actuator) -> BehaviorResult<()> {
        Ok(())
    }

    /// One decision step.  The host calls this for as long as the round runs.
    fn tick(&mut self, robot: &mut dyn Actuator) -> BehaviorResult<()>;

    fn on_scanned_robot(&mut self, _robot: &mut dyn Actuator, _event: &ScannedRobotEvent) -> BehaviorResult<()> {
        Ok(())
    }

    fn on_hit_by_bullet(&mut self, _robot: &mut dyn Actuator, _event: &HitByBulletEvent) -> BehaviorResult<()> {
        Ok(())
    }

    fn on_hit_wall(&mut self, _robot: &mut dyn Actuator, _event: &HitWallEvent) -> BehaviorResult<()> {
        Ok(())
    }

    fn on_hit_robot(&mut self, _robot: &mut dyn Actuator, _event: &HitRobotEvent) -> BehaviorResult<()> {
        Ok(())
    }

    fn on_bullet_hit(&mut self, _robot: &mut dyn Actuator, _event: &BulletHitEvent) -> BehaviorResult<()> {
        Ok(())
    }

    fn on_bullet_hit_bullet(&mut self, _robot: &mut dyn Actuator, _event: &BulletHitBulletEvent) -> BehaviorResult<()> {
        Ok(())
    }

    fn on_bullet_missed(&mut self, _robot: &mut dyn Actuator, _event: &BulletMissedEvent) -> BehaviorResult<()> {
        Ok(())
    }

    fn on_robot_death(&mut self, _robot: &mut dyn Actuator, _event: &RobotDeathEvent) -> BehaviorResult<()> {
        Ok(())
    }

    fn on_death(&mut self, _robot: &mut dyn Actuator, _event: &DeathEvent) -> BehaviorResult<()> {
        Ok(())
    }

    fn on_win(&mut self, _robot: &mut dyn Actuator, _event: &WinEvent) -> BehaviorResult<()> {
        Ok(())
    }

    fn on_round_ended(&mut self, _robot: &mut dyn Actuator, _event: &RoundEndedEvent) -> BehaviorResult<()> {
        Ok(())
    }

    fn on_battle_ended(&mut self, _robot: &mut dyn Actuator, _event: &BattleEndedEvent) -> BehaviorResult<()> {
        Ok(())
    }

    fn on_status(&mut self, _robot: &mut dyn Actuator, _event: &StatusEvent) -> BehaviorResult<()> {
        Ok(())
    }
}

/// Route `event` to the matching hook on `behavior`.
pub fn dispatch<B: RobotBehavior + ?Sized>(
    behavior: &mut B,
    robot:    &mut dyn Actuator,
    event:    &RobotEvent,
) -> BehaviorResult<()> {
    match event {
        RobotEvent::ScannedRobot(e)    => behavior.on_scanned_robot(robot, e),
        RobotEvent::HitByBullet(e)     => behavior.on_hit_by_bullet(robot, e),
        RobotEvent::HitWall(e)         => behavior.on_hit_wall(robot, e),
        RobotEvent::HitRobot(e)        => behavior.on_hit_robot(robot, e),
        RobotEvent::BulletHit(e)       => behavior.on_bullet_hit(robot, e),
        RobotEvent::BulletHitBullet(e) => behavior.on_bullet_hit_bullet(robot, e),
        RobotEvent::BulletMissed(e)    => behavior.on_bullet_missed(robot, e),
        RobotEvent::RobotDeath(e)      => behavior.on_robot_death(robot, e),
        RobotEvent::Death(e)           => behavior.on_death(robot, e),
        RobotEvent::Win(e)             => behavior.on_win(robot, e),
        RobotEvent::RoundEnded(e)      => behavior.on_round_ended(robot, e),
        RobotEvent::BattleEnded(e)     => behavior.on_battle_ended(robot, e),
        RobotEvent::Status(e)          => behavior.on_status(robot, e),
    }
}
