//! Notifications the host delivers to a robot.
//!
//! Each payload is a plain value handed to exactly one named callback.
//! Angles are left as the host reported them (unbounded signed degrees);
//! consumers canonicalize through [`Heading`][crate::Heading] when they
//! compare or store them.

use crate::{Heading, Tick};

/// A bullet in flight (or spent), as reported by the host.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bullet {
    pub id:      u32,
    /// Direction of travel, raw host degrees.
    pub heading: f64,
    pub x:       f64,
    pub y:       f64,
    pub power:   f64,
    pub owner:   String,
    /// Robot that was hit, if any.
    pub victim:  Option<String>,
    pub active:  bool,
}

impl Bullet {
    /// Canonical direction of travel.
    #[inline]
    pub fn travel_heading(&self) -> Heading {
        Heading::new(self.heading)
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScannedRobotEvent {
    pub name:     String,
    pub energy:   f64,
    /// Bearing relative to our body heading, raw degrees.
    pub bearing:  f64,
    pub distance: f64,
    /// The scanned robot's own heading, raw degrees.
    pub heading:  f64,
    pub velocity: f64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitByBulletEvent {
    /// Bearing of the incoming bullet relative to our body heading.
    pub bearing: f64,
    pub bullet:  Bullet,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitWallEvent {
    pub bearing: f64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitRobotEvent {
    pub name:        String,
    pub bearing:     f64,
    pub energy:      f64,
    /// `true` if we were moving toward the other robot.
    pub is_my_fault: bool,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BulletHitEvent {
    /// The robot our bullet hit.
    pub name:   String,
    /// Its energy after the hit.
    pub energy: f64,
    pub bullet: Bullet,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BulletHitBulletEvent {
    pub bullet:     Bullet,
    pub hit_bullet: Bullet,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BulletMissedEvent {
    pub bullet: Bullet,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RobotDeathEvent {
    pub name: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeathEvent;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WinEvent;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundEndedEvent {
    pub round:       u32,
    pub turns:       u64,
    pub total_turns: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleEndedEvent {
    pub aborted: bool,
}

/// Snapshot of the robot's own state at one host turn.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RobotStatus {
    pub time:        Tick,
    pub energy:      f64,
    pub x:           f64,
    pub y:           f64,
    pub heading:     Heading,
    pub gun_heading: Heading,
    pub gun_heat:    f64,
    pub velocity:    f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusEvent {
    pub status: RobotStatus,
}

// ── RobotEvent ────────────────────────────────────────────────────────────────

/// Any host notification, for queues and dispatch tables.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RobotEvent {
    ScannedRobot(ScannedRobotEvent),
    HitByBullet(HitByBulletEvent),
    HitWall(HitWallEvent),
    HitRobot(HitRobotEvent),
    BulletHit(BulletHitEvent),
    BulletHitBullet(BulletHitBulletEvent),
    BulletMissed(BulletMissedEvent),
    RobotDeath(RobotDeathEvent),
    Death(DeathEvent),
    Win(WinEvent),
    RoundEnded(RoundEndedEvent),
    BattleEnded(BattleEndedEvent),
    Status(StatusEvent),
}

impl RobotEvent {
    /// Short stable name, used in logs and output rows.
    pub fn kind(&self) -> &'static str {
        match self {
            RobotEvent::ScannedRobot(_)    => "scanned_robot",
            RobotEvent::HitByBullet(_)     => "hit_by_bullet",
            RobotEvent::HitWall(_)         => "hit_wall",
            RobotEvent::HitRobot(_)        => "hit_robot",
            RobotEvent::BulletHit(_)       => "bullet_hit",
            RobotEvent::BulletHitBullet(_) => "bullet_hit_bullet",
            RobotEvent::BulletMissed(_)    => "bullet_missed",
            RobotEvent::RobotDeath(_)      => "robot_death",
            RobotEvent::Death(_)           => "death",
            RobotEvent::Win(_)             => "win",
            RobotEvent::RoundEnded(_)      => "round_ended",
            RobotEvent::BattleEnded(_)     => "battle_ended",
            RobotEvent::Status(_)          => "status",
        }
    }

    /// `true` for notifications after which the host stops ticking the robot.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RobotEvent::Death(_) | RobotEvent::RoundEnded(_) | RobotEvent::BattleEnded(_)
        )
    }
}
