//! Seeded event scripts.
//!
//! A script stands in for the parts of a battle the sandbox does not
//! simulate: enemies showing up on radar, incoming fire, wall contacts.
//! Each turn rolls once per event kind; the same seed always yields the
//! same script.

use rb_core::{
    BattleRng, Bullet, HitByBulletEvent, HitWallEvent, RobotEvent, ScannedRobotEvent, Tick,
};

use crate::{HostError, HostResult};

/// Per-turn probability of each scripted event kind.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EventRates {
    pub scanned_robot: f64,
    pub hit_by_bullet: f64,
    pub hit_wall:      f64,
    /// Name reported for the scripted opponent.
    pub opponent:      String,
}

impl Default for EventRates {
    fn default() -> Self {
        Self {
            scanned_robot: 0.2,
            hit_by_bullet: 0.05,
            hit_wall:      0.0,
            opponent:      "opponent".into(),
        }
    }
}

impl EventRates {
    pub fn validate(&self) -> HostResult<()> {
        for (what, p) in [
            ("scanned_robot", self.scanned_robot),
            ("hit_by_bullet", self.hit_by_bullet),
            ("hit_wall", self.hit_wall),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(HostError::Config(format!(
                    "event rate {what} must be in [0, 1], got {p}"
                )));
            }
        }
        Ok(())
    }
}

/// Roll a script covering ticks `0..ticks`.
///
/// Output is ordered by tick, and within a tick: scan, hit, wall.
pub fn scripted_events(
    rng:   &mut BattleRng,
    ticks: u64,
    rates: &EventRates,
) -> Vec<(Tick, RobotEvent)> {
    let mut out = Vec::new();
    let mut bullet_id = 0u32;

    for t in 0..ticks {
        let tick = Tick(t);

        if rng.gen_bool(rates.scanned_robot) {
            out.push((tick, RobotEvent::ScannedRobot(ScannedRobotEvent {
                name:     rates.opponent.clone(),
                energy:   rng.gen_range(0.0..=100.0),
                bearing:  rng.gen_range(-180.0..180.0),
                distance: rng.gen_range(50.0..600.0),
                heading:  rng.gen_range(0.0..360.0),
                velocity: rng.gen_range(-8.0..=8.0),
            })));
        }

        if rng.gen_bool(rates.hit_by_bullet) {
            bullet_id += 1;
            let bearing: f64 = rng.gen_range(-180.0..180.0);
            out.push((tick, RobotEvent::HitByBullet(HitByBulletEvent {
                bearing,
                bullet: Bullet {
                    id:      bullet_id,
                    heading: rng.gen_range(0.0..360.0),
                    x:       0.0,
                    y:       0.0,
                    power:   rng.gen_range(0.1..=3.0),
                    owner:   rates.opponent.clone(),
                    victim:  None,
                    active:  false,
                },
            })));
        }

        if rng.gen_bool(rates.hit_wall) {
            out.push((tick, RobotEvent::HitWall(HitWallEvent {
                bearing: rng.gen_range(-180.0..180.0),
            })));
        }
    }

    out
}
