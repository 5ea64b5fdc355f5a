//! Unit tests for rb-behavior.

use std::sync::{Arc, Mutex};

use rb_actuator::{Actuator, ActuatorError, Call, RecordingActuator, SensorReadings};
use rb_core::{
    Bullet, DeathEvent, Heading, HitByBulletEvent, HitWallEvent, RobotEvent, RoundEndedEvent,
    ScannedRobotEvent, WinEvent,
};

use crate::{
    Agent, BehaviorError, BehaviorResult, ChooseDirectionEvent, EvasionConfig, Lifecycle,
    NavigationState, PatrolAndFire, PatrolConfig, ReactiveEvasion, RobotBehavior, TurnEvent,
    TurnLog, TurnNotifier,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn scanned() -> ScannedRobotEvent {
    ScannedRobotEvent {
        name:     "name".to_owned(),
        energy:   1.0,
        bearing:  0.0,
        distance: 20.0,
        heading:  30.0,
        velocity: 10.0,
    }
}

fn hit() -> HitByBulletEvent {
    HitByBulletEvent {
        bearing: 0.0,
        bullet:  Bullet {
            id:      1,
            heading: 180.0,
            x:       10.0,
            y:       20.0,
            power:   2.0,
            owner:   String::new(),
            victim:  None,
            active:  true,
        },
    }
}

fn evasion_at(degrees: f64) -> ReactiveEvasion {
    ReactiveEvasion::with_navigation(
        EvasionConfig::default(),
        NavigationState::new(Heading::new(degrees)),
    )
    .unwrap()
}

fn readings_with_heading(heading: f64) -> SensorReadings {
    SensorReadings { heading, ..SensorReadings::default() }
}

// ── NavigationState ───────────────────────────────────────────────────────────

#[cfg(test)]
mod navigation_tests {
    use super::*;

    #[test]
    fn starts_with_nothing_pending() {
        let nav = NavigationState::new(Heading::EAST);
        assert_eq!(nav.current(), nav.next());
        assert!(!nav.has_pending_turn());
        assert_eq!(nav.pending_turn(), 0.0);
    }

    #[test]
    fn hit_from_north_plans_south() {
        let mut nav = NavigationState::new(Heading::NORTH);
        nav.react_to_hit();
        assert_eq!(nav.next(), Heading::new(0.0 - 180.0));
        assert_eq!(nav.next().degrees(), 180.0);
        assert_eq!(nav.current(), Heading::NORTH);
    }

    #[test]
    fn repeated_hits_before_commit_do_not_compound() {
        let mut nav = NavigationState::new(Heading::NORTH);
        nav.react_to_hit();
        let first = nav.next();
        nav.react_to_hit();
        assert_eq!(nav.next(), first);
    }

    #[test]
    fn hits_after_commit_react_from_the_new_heading() {
        let mut nav = NavigationState::new(Heading::NORTH);
        nav.react_to_hit();
        nav.commit_to(nav.next());
        nav.react_to_hit();
        assert_eq!(nav.next(), Heading::NORTH);
    }

    #[test]
    fn direction_event_prefers_pending_reaction() {
        let mut nav = NavigationState::new(Heading::new(350.0));
        assert_eq!(nav.direction_event(20.0).next_heading(), Heading::new(10.0));
        nav.react_to_hit();
        assert_eq!(nav.direction_event(20.0).next_heading(), Heading::new(170.0));
        assert_eq!(ChooseDirectionEvent::from_state(&nav).next_heading(), Heading::new(170.0));
    }

    #[test]
    fn reset_discards_pending_reaction() {
        let mut nav = NavigationState::new(Heading::NORTH);
        nav.react_to_hit();
        nav.reset(Heading::EAST);
        assert_eq!(nav.current(), Heading::EAST);
        assert!(!nav.has_pending_turn());
    }
}

// ── Turn notifications ────────────────────────────────────────────────────────

#[cfg(test)]
mod turn_tests {
    use super::*;

    #[test]
    fn listeners_run_in_subscription_order() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let mut notifier = TurnNotifier::new();
        for tag in ["a", "b", "c"] {
            let order = Arc::clone(&order);
            notifier.subscribe(move |e: &TurnEvent| {
                order.lock().unwrap().push((tag, e.new_heading()));
            });
        }
        notifier.publish(&TurnEvent::new(Heading::WEST));
        let seen = order.lock().unwrap().clone();
        assert_eq!(seen, vec![("a", Heading::WEST), ("b", Heading::WEST), ("c", Heading::WEST)]);
    }

    #[test]
    fn unsubscribe_removes_only_that_listener() {
        let first = TurnLog::new();
        let second = TurnLog::new();
        let mut notifier = TurnNotifier::new();
        let id = notifier.subscribe(first.clone());
        notifier.subscribe(second.clone());

        assert!(notifier.unsubscribe(id));
        assert!(!notifier.unsubscribe(id));
        assert_eq!(notifier.len(), 1);

        notifier.publish(&TurnEvent::new(Heading::EAST));
        assert!(first.is_empty());
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn publish_with_no_listeners_is_harmless() {
        let mut notifier = TurnNotifier::new();
        assert!(notifier.is_empty());
        notifier.publish(&TurnEvent::new(Heading::NORTH));
    }

    #[test]
    fn turn_log_drain_empties_buffer() {
        let log = TurnLog::new();
        let mut notifier = TurnNotifier::new();
        notifier.subscribe(log.clone());
        notifier.publish(&TurnEvent::new(Heading::EAST));
        notifier.publish(&TurnEvent::new(Heading::SOUTH));
        let drained = log.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[1].new_heading(), Heading::SOUTH);
        assert!(log.is_empty());
    }
}

// ── PatrolAndFire ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod patrol_tests {
    use super::*;

    #[test]
    fn scanned_robot_fires_exactly_once_with_configured_power() {
        let recorder = RecordingActuator::new();
        let mut agent = Agent::with_substitute(recorder.clone(), PatrolAndFire::default());
        agent.setup().unwrap();

        agent.deliver(&RobotEvent::ScannedRobot(scanned())).unwrap();

        assert_eq!(recorder.count(|c| matches!(c, Call::FireBullet(_))), 1);
        assert_eq!(recorder.calls(), vec![Call::FireBullet(1.0)]);
    }

    #[test]
    fn tick_sweeps_body_right() {
        let recorder = RecordingActuator::new();
        let config = PatrolConfig { sweep_degrees: 15.0, fire_power: 2.0 };
        let mut agent = Agent::with_substitute(recorder.clone(), PatrolAndFire::new(config).unwrap());
        agent.setup().unwrap();
        agent.tick().unwrap();
        agent.tick().unwrap();
        assert_eq!(recorder.calls(), vec![Call::TurnRight(15.0), Call::TurnRight(15.0)]);
    }

    #[test]
    fn rejects_non_positive_power() {
        let config = PatrolConfig { fire_power: 0.0, ..PatrolConfig::default() };
        assert!(matches!(PatrolAndFire::new(config), Err(BehaviorError::Config(_))));
    }

    #[test]
    fn fire_failure_surfaces_to_caller() {
        let recorder = RecordingActuator::new();
        let mut agent = Agent::with_substitute(recorder.clone(), PatrolAndFire::default());
        agent.setup().unwrap();

        recorder.fail_next(ActuatorError::GunOverheated { heat: 1.2 });
        let result = agent.deliver(&RobotEvent::ScannedRobot(scanned()));
        assert_eq!(
            result,
            Err(BehaviorError::Actuator(ActuatorError::GunOverheated { heat: 1.2 }))
        );
    }
}

// ── ReactiveEvasion ───────────────────────────────────────────────────────────

#[cfg(test)]
mod evasion_tests {
    use super::*;

    #[test]
    fn hit_plans_opposite_heading_without_acting() {
        let mut robot = RecordingActuator::new();
        let mut evasion = evasion_at(0.0);

        evasion.on_hit_by_bullet(&mut robot, &hit()).unwrap();

        let nav = evasion.navigation();
        assert_eq!(nav.next(), Heading::new(nav.current().degrees() - 180.0));
        assert!(robot.calls().is_empty());
    }

    #[test]
    fn unsubscribed_listener_hears_no_more_turns() {
        let mut robot = RecordingActuator::new();
        let mut evasion = evasion_at(0.0);
        let log = TurnLog::new();
        let id = evasion.on_turn(log.clone());

        evasion.tick(&mut robot).unwrap();
        assert!(evasion.turns_mut().unsubscribe(id));
        evasion.tick(&mut robot).unwrap();

        let headings: Vec<Heading> = log.events().iter().map(TurnEvent::new_heading).collect();
        assert_eq!(headings, vec![Heading::new(10.0)]);
        assert!(evasion.turns_mut().is_empty());
        assert_eq!(evasion.navigation().current(), Heading::new(20.0));
    }

    #[test]
    fn choose_direction_commits() {
        let mut robot = RecordingActuator::new();
        let mut evasion = evasion_at(0.0);
        evasion.on_hit_by_bullet(&mut robot, &hit()).unwrap();

        let event = ChooseDirectionEvent::from_state(evasion.navigation());
        evasion.choose_direction(&mut robot, event).unwrap();

        let nav = evasion.navigation();
        assert_eq!(nav.current(), nav.next());
        assert_eq!(nav.current(), Heading::SOUTH);
        assert_eq!(robot.calls(), vec![Call::TurnRight(180.0)]);
    }

    #[test]
    fn choose_direction_without_hit_keeps_heading() {
        let mut robot = RecordingActuator::new();
        let mut evasion = evasion_at(0.0);
        let event = ChooseDirectionEvent::from_state(evasion.navigation());
        evasion.choose_direction(&mut robot, event).unwrap();
        assert_eq!(evasion.navigation().current(), Heading::NORTH);
        assert_eq!(robot.calls(), vec![Call::TurnRight(0.0)]);
    }

    #[test]
    fn east_reverses_to_west() {
        let mut robot = RecordingActuator::new();
        let mut evasion = evasion_at(90.0);
        evasion.on_hit_by_bullet(&mut robot, &hit()).unwrap();
        let event = ChooseDirectionEvent::from_state(evasion.navigation());
        evasion.choose_direction(&mut robot, event).unwrap();

        let nav = evasion.navigation();
        assert_eq!(nav.current(), nav.next());
        assert_eq!(nav.current().degrees(), 270.0);
    }

    #[test]
    fn refused_turn_is_not_committed() {
        let mut robot = RecordingActuator::new();
        let mut evasion = evasion_at(0.0);
        evasion.on_hit_by_bullet(&mut robot, &hit()).unwrap();

        robot.fail_next(ActuatorError::Host("busy".into()));
        let event = ChooseDirectionEvent::from_state(evasion.navigation());
        let result = evasion.choose_direction(&mut robot, event);

        assert_eq!(result, Err(BehaviorError::Actuator(ActuatorError::Host("busy".into()))));
        assert_eq!(evasion.navigation().current(), Heading::NORTH);
        assert!(evasion.navigation().has_pending_turn());
    }

    #[test]
    fn turn_is_announced_before_it_is_requested() {
        let recorder = RecordingActuator::new();
        let mut evasion = evasion_at(0.0);

        let probe = recorder.clone();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        evasion.on_turn(move |e: &TurnEvent| {
            sink.lock().unwrap().push((e.new_heading(), probe.calls().last().cloned()));
        });

        let mut robot = recorder.clone();
        evasion.on_hit_by_bullet(&mut robot, &hit()).unwrap();
        evasion.tick(&mut robot).unwrap();

        let seen = seen.lock().unwrap().clone();
        assert_eq!(seen, vec![(Heading::SOUTH, Some(Call::Ahead(20.0)))]);
        assert_eq!(recorder.calls(), vec![Call::Ahead(20.0), Call::TurnRight(180.0)]);
    }

    #[test]
    fn tick_without_hit_sweeps_and_tracks_heading() {
        let mut robot = RecordingActuator::new();
        let mut evasion = evasion_at(355.0);
        evasion.tick(&mut robot).unwrap();
        assert_eq!(robot.calls(), vec![Call::Ahead(20.0), Call::TurnRight(10.0)]);
        assert_eq!(evasion.navigation().current(), Heading::new(5.0));
    }

    #[test]
    fn setup_points_body_at_reference_and_offsets_gun() {
        let recorder = RecordingActuator::with_readings(readings_with_heading(30.0));
        let log = TurnLog::new();
        let mut evasion = ReactiveEvasion::new(EvasionConfig::default()).unwrap();
        evasion.on_turn(log.clone());

        let mut agent = Agent::with_substitute(recorder.clone(), evasion);
        agent.setup().unwrap();

        assert_eq!(
            recorder.calls(),
            vec![
                Call::Read(rb_actuator::Sensor::Heading),
                Call::TurnRight(60.0),
                Call::TurnGunRight(90.0),
            ]
        );
        assert_eq!(agent.behavior().navigation().current(), Heading::EAST);
        assert_eq!(log.events(), vec![TurnEvent::new(Heading::EAST)]);
    }

    #[test]
    fn setup_takes_short_way_round() {
        let recorder = RecordingActuator::with_readings(readings_with_heading(300.0));
        let mut agent = Agent::with_substitute(recorder.clone(), ReactiveEvasion::new(EvasionConfig::default()).unwrap());
        agent.setup().unwrap();
        assert_eq!(recorder.calls()[1], Call::TurnRight(150.0));
    }

    #[test]
    fn scanned_robot_fires() {
        let mut robot = RecordingActuator::new();
        let mut evasion = evasion_at(0.0);
        evasion.on_scanned_robot(&mut robot, &scanned()).unwrap();
        assert_eq!(robot.calls(), vec![Call::Fire(1.0)]);
    }

    #[test]
    fn rejects_non_finite_reference() {
        let config = EvasionConfig { reference_heading: f64::NAN, ..EvasionConfig::default() };
        assert!(matches!(ReactiveEvasion::new(config), Err(BehaviorError::Core(_))));
    }

    #[test]
    fn full_scenario_through_agent() {
        let recorder = RecordingActuator::new();
        let config = EvasionConfig { reference_heading: 0.0, ..EvasionConfig::default() };
        let mut agent = Agent::with_substitute(recorder.clone(), ReactiveEvasion::new(config).unwrap());
        agent.setup().unwrap();
        assert_eq!(agent.behavior().navigation().current(), Heading::NORTH);

        agent.deliver(&RobotEvent::HitByBullet(hit())).unwrap();
        let nav = *agent.behavior().navigation();
        assert_eq!(nav.next(), Heading::new(nav.current().degrees() - 180.0));

        agent.tick().unwrap();
        let nav = *agent.behavior().navigation();
        assert_eq!(nav.current(), nav.next());
        assert_eq!(nav.current(), Heading::SOUTH);
    }
}

// ── Agent lifecycle ───────────────────────────────────────────────────────────

#[cfg(test)]
mod agent_tests {
    use super::*;

    #[test]
    fn tick_before_setup_is_rejected() {
        let mut agent = Agent::with_substitute(RecordingActuator::new(), PatrolAndFire::default());
        assert_eq!(
            agent.tick(),
            Err(BehaviorError::Lifecycle { op: "tick", state: Lifecycle::Created })
        );
        assert!(agent.deliver(&RobotEvent::Win(WinEvent)).is_err());
    }

    #[test]
    fn walks_through_every_state() {
        let mut agent = Agent::with_substitute(RecordingActuator::new(), PatrolAndFire::default());
        assert_eq!(agent.lifecycle(), Lifecycle::Created);
        agent.setup().unwrap();
        assert_eq!(agent.lifecycle(), Lifecycle::Initialized);
        agent.tick().unwrap();
        agent.tick().unwrap();
        assert_eq!(agent.lifecycle(), Lifecycle::Ticking);
        assert_eq!(agent.ticks(), 2);
        agent.terminate();
        agent.terminate();
        assert_eq!(agent.lifecycle(), Lifecycle::Terminated);
    }

    #[test]
    fn nothing_runs_after_termination() {
        let recorder = RecordingActuator::new();
        let mut agent = Agent::with_substitute(recorder.clone(), PatrolAndFire::default());
        agent.setup().unwrap();
        agent.terminate();
        assert!(agent.tick().is_err());
        assert!(agent.deliver(&RobotEvent::ScannedRobot(scanned())).is_err());
        assert!(recorder.calls().is_empty());
    }

    #[test]
    fn setup_runs_once() {
        let mut agent = Agent::with_substitute(RecordingActuator::new(), PatrolAndFire::default());
        agent.setup().unwrap();
        assert_eq!(
            agent.setup(),
            Err(BehaviorError::Lifecycle { op: "run setup", state: Lifecycle::Initialized })
        );
    }

    #[test]
    fn failed_setup_stays_created() {
        let recorder = RecordingActuator::new();
        recorder.fail_next(ActuatorError::Host("not ready".into()));
        let mut agent = Agent::with_substitute(recorder, ReactiveEvasion::new(EvasionConfig::default()).unwrap());
        assert!(agent.setup().is_err());
        assert_eq!(agent.lifecycle(), Lifecycle::Created);
    }

    #[test]
    fn live_agent_without_peer_fails_fast() {
        let mut agent = Agent::live(ReactiveEvasion::new(EvasionConfig::default()).unwrap());
        assert_eq!(
            agent.setup(),
            Err(BehaviorError::Actuator(ActuatorError::PeerNotAttached))
        );
    }

    #[test]
    fn live_and_substitute_issue_identical_calls() {
        fn drive(agent: &mut Agent<ReactiveEvasion>) {
            agent.setup().unwrap();
            agent.tick().unwrap();
            agent.deliver(&RobotEvent::HitByBullet(hit())).unwrap();
            agent.deliver(&RobotEvent::ScannedRobot(scanned())).unwrap();
            agent.tick().unwrap();
        }

        let peer = RecordingActuator::with_readings(readings_with_heading(200.0));
        let mut live = Agent::live(ReactiveEvasion::new(EvasionConfig::default()).unwrap());
        live.attach_peer(Box::new(peer.clone())).unwrap();
        drive(&mut live);

        let sub = RecordingActuator::with_readings(readings_with_heading(200.0));
        let mut test = Agent::with_substitute(sub.clone(), ReactiveEvasion::new(EvasionConfig::default()).unwrap());
        drive(&mut test);

        assert!(!live.robot().is_test_mode());
        assert!(test.robot().is_test_mode());
        assert_eq!(peer.calls(), sub.calls());
        assert_eq!(live.behavior().navigation(), test.behavior().navigation());
    }

    #[test]
    fn attach_peer_in_test_mode_is_rejected() {
        let mut agent = Agent::with_substitute(RecordingActuator::new(), PatrolAndFire::default());
        assert_eq!(
            agent.attach_peer(Box::new(RecordingActuator::new())),
            Err(BehaviorError::Actuator(ActuatorError::PeerInTestMode))
        );
    }

    /// Counts how many times each hook fired.
    #[derive(Default)]
    struct HookCounter {
        walls:  usize,
        deaths: usize,
        ends:   usize,
    }

    impl RobotBehavior for HookCounter {
        fn tick(&mut self, _robot: &mut dyn Actuator) -> BehaviorResult<()> {
            Ok(())
        }
        fn on_hit_wall(&mut self, _r: &mut dyn Actuator, _e: &HitWallEvent) -> BehaviorResult<()> {
            self.walls += 1;
            Ok(())
        }
        fn on_death(&mut self, _r: &mut dyn Actuator, _e: &DeathEvent) -> BehaviorResult<()> {
            self.deaths += 1;
            Ok(())
        }
        fn on_round_ended(&mut self, _r: &mut dyn Actuator, _e: &RoundEndedEvent) -> BehaviorResult<()> {
            self.ends += 1;
            Ok(())
        }
    }

    #[test]
    fn deliver_routes_to_matching_hook() {
        let mut agent = Agent::with_substitute(RecordingActuator::new(), HookCounter::default());
        agent.setup().unwrap();
        agent.deliver(&RobotEvent::HitWall(HitWallEvent { bearing: 90.0 })).unwrap();
        agent.deliver(&RobotEvent::HitWall(HitWallEvent { bearing: -90.0 })).unwrap();
        agent.deliver(&RobotEvent::Death(DeathEvent)).unwrap();
        // Unhandled kinds fall through to the no-op defaults.
        agent.deliver(&RobotEvent::ScannedRobot(scanned())).unwrap();

        let counts = agent.behavior();
        assert_eq!((counts.walls, counts.deaths, counts.ends), (2, 1, 0));
    }
}
