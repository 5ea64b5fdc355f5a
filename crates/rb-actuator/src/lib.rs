//! `rb-actuator` — the capability contract and the testable facade.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                         |
//! |---------------|------------------------------------------------------------------|
//! | [`contract`]  | `Actuator` trait — every action and sensor a robot may use       |
//! | [`facade`]    | `ActuatorSelector` — binds live or substitute once, forwards all |
//! | [`live`]      | `LiveActuator` — default binding, forwards to the host's peer    |
//! | [`recording`] | `RecordingActuator` — substitute that logs calls for tests       |
//! | [`error`]     | `ActuatorError`, `ActuatorResult<T>`                             |
//!
//! # Design notes
//!
//! Agents depend on `&mut dyn Actuator` and nothing else.  Swapping the
//! simulator for a test double is a construction-time decision made by
//! whoever builds the [`ActuatorSelector`]; no agent code branches on it.

#[macro_use]
mod forward;

pub mod contract;
pub mod error;
pub mod facade;
pub mod live;
pub mod recording;


pub use contract::Actuator;
pub use error::{ActuatorError, ActuatorResult};
pub use facade::ActuatorSelector;
pub use live::LiveActuator;
pub use recording::{Call, RecordingActuator, Sensor, SensorReadings};
