//! `rb-behavior` — robot decision policies and the state they keep.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                        |
//! |----------------|-----------------------------------------------------------------|
//! | [`model`]      | `RobotBehavior` trait, event `dispatch`                         |
//! | [`agent`]      | `Agent<B>` — behavior + actuator selector + lifecycle           |
//! | [`navigation`] | `NavigationState`, `ChooseDirectionEvent`                       |
//! | [`turn`]       | `TurnEvent`, `TurnListener`, `TurnNotifier`, `TurnLog`          |
//! | [`patrol`]     | `PatrolAndFire` — sweep and shoot                               |
//! | [`evasion`]    | `ReactiveEvasion` — advance, and turn about when hit            |
//! | [`config`]     | `PatrolConfig`, `EvasionConfig`                                 |
//! | [`error`]      | `BehaviorError`, `BehaviorResult<T>`                            |
//!
//! # Design notes
//!
//! Behaviors see the robot only as `&mut dyn Actuator`.  The same behavior
//! value runs unchanged against the live host or a
//! [`RecordingActuator`][rb_actuator::RecordingActuator]; the choice is made
//! when the [`Agent`] is constructed.

pub mod agent;
pub mod config;
pub mod error;
pub mod evasion;
pub mod model;
pub mod navigation;
pub mod patrol;
pub mod turn;

#[cfg(test)]
mod tests;

pub use agent::{Agent, Lifecycle};
pub use config::{EvasionConfig, PatrolConfig};
pub use error::{BehaviorError, BehaviorResult};
pub use evasion::ReactiveEvasion;
pub use model::{RobotBehavior, dispatch};
pub use navigation::{ChooseDirectionEvent, NavigationState};
pub use patrol::PatrolAndFire;
pub use turn::{ListenerId, TurnEvent, TurnListener, TurnLog, TurnNotifier};
