//! `rb-core` — foundational types shared by every `rb-*` crate.
//!
//! It has no `rb-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`heading`]   | `Heading`, absolute / relative angle canonicalization      |
//! | [`time`]      | `Tick`                                                     |
//! | [`color`]     | `Color`                                                    |
//! | [`events`]    | Host notification payloads and the `RobotEvent` enum       |
//! | [`rng`]       | `BattleRng`                                                |
//! | [`error`]     | `CoreError`, `CoreResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod color;
pub mod error;
pub mod events;
pub mod heading;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use color::Color;
pub use error::{CoreError, CoreResult};
pub use events::{
    BattleEndedEvent, Bullet, BulletHitBulletEvent, BulletHitEvent, BulletMissedEvent,
    DeathEvent, HitByBulletEvent, HitRobotEvent, HitWallEvent, RobotDeathEvent, RobotEvent,
    RobotStatus, RoundEndedEvent, ScannedRobotEvent, StatusEvent, WinEvent,
};
pub use heading::{Heading, normalize_absolute, normalize_relative};
pub use rng::BattleRng;
pub use time::Tick;
