//! Reactive evasion: keep moving, and turn about after being hit.
//!
//! A hit never triggers a rotation directly.  It only plans one (the
//! opposite of the believed heading); the next tick carries it out through
//! [`ReactiveEvasion::choose_direction`], which announces the turn, requests
//! it, and commits the new heading.

use rb_actuator::Actuator;
use rb_core::{Heading, HitByBulletEvent, ScannedRobotEvent};
use tracing::debug;

use crate::{
    BehaviorResult, ChooseDirectionEvent, EvasionConfig, ListenerId, NavigationState,
    RobotBehavior, TurnEvent, TurnListener, TurnNotifier,
};

pub struct ReactiveEvasion {
    config: EvasionConfig,
    nav:    NavigationState,
    turns:  TurnNotifier,
}

impl ReactiveEvasion {
    /// A fresh robot believing it faces north (0°).
    pub fn new(config: EvasionConfig) -> BehaviorResult<Self> {
        Self::with_navigation(config, NavigationState::new(Heading::NORTH))
    }

    /// Start from an explicit navigation state.
    pub fn with_navigation(config: EvasionConfig, nav: NavigationState) -> BehaviorResult<Self> {
        config.validate()?;
        Ok(Self { config, nav, turns: TurnNotifier::new() })
    }

    pub fn config(&self) -> &EvasionConfig {
        &self.config
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.nav
    }

    /// Subscribe to turn announcements.
    pub fn on_turn<L: TurnListener + 'static>(&mut self, listener: L) -> ListenerId {
        self.turns.subscribe(listener)
    }

    /// The turn channel itself, e.g. to drop a listener again.
    pub fn turns_mut(&mut self) -> &mut TurnNotifier {
        &mut self.turns
    }

    /// Turn onto `event.next_heading()` and commit it as the believed heading.
    ///
    /// The rotation is the signed difference from the believed heading,
    /// canonicalized to `(-180, 180]` and requested as a right turn.  If the
    /// actuator refuses the turn, nothing is committed.
    pub fn choose_direction(
        &mut self,
        robot: &mut dyn Actuator,
        event: ChooseDirectionEvent,
    ) -> BehaviorResult<()> {
        let target = event.next_heading();
        self.rotate_body(robot, self.nav.current(), target)?;
        self.nav.commit_to(target);
        Ok(())
    }

    fn rotate_body(&mut self, robot: &mut dyn Actuator, from: Heading, to: Heading) -> BehaviorResult<()> {
        self.turns.publish(&TurnEvent::new(to));
        robot.turn_right(from.turn_to(to))?;
        Ok(())
    }
}

impl RobotBehavior for ReactiveEvasion {
    fn setup(&mut self, robot: &mut dyn Actuator) -> BehaviorResult<()> {
        let sensed = Heading::new(robot.heading()?);
        let reference = self.config.reference();
        self.rotate_body(robot, sensed, reference)?;
        robot.turn_gun_right(self.config.gun_offset)?;
        self.nav.reset(reference);
        Ok(())
    }

    fn tick(&mut self, robot: &mut dyn Actuator) -> BehaviorResult<()> {
        robot.ahead(self.config.advance_distance)?;
        let event = self.nav.direction_event(self.config.sweep_degrees);
        self.choose_direction(robot, event)
    }

    fn on_hit_by_bullet(&mut self, _robot: &mut dyn Actuator, event: &HitByBulletEvent) -> BehaviorResult<()> {
        self.nav.react_to_hit();
        debug!(
            bearing = event.bearing,
            current = %self.nav.current(),
            next    = %self.nav.next(),
            "hit by bullet, reversing on next tick"
        );
        Ok(())
    }

    fn on_scanned_robot(&mut self, robot: &mut dyn Actuator, _event: &ScannedRobotEvent) -> BehaviorResult<()> {
        robot.fire(self.config.fire_power)?;
        Ok(())
    }
}
