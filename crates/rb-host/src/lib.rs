//! `rb-host` — a pull-model host harness for robot battle agents.
//!
//! The battle engine proper is out of scope; this crate is the minimal
//! host needed to exercise an [`Agent`][rb_behavior::Agent] end-to-end:
//! it sets the agent up, ticks it, delivers queued notifications, and
//! ends the round.
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`config`]   | `RunConfig`, `ErrorPolicy`                            |
//! | [`queue`]    | `EventQueue` — events keyed by delivery tick          |
//! | [`runner`]   | `BattleRunner` — the tick loop                        |
//! | [`builder`]  | `RunnerBuilder`                                       |
//! | [`observer`] | `RunObserver`, `NoopObserver`                         |
//! | [`sandbox`]  | `SandboxPeer`, `SandboxHandle`, `ArenaConfig`         |
//! | [`script`]   | `EventRates`, `scripted_events`                       |
//! | [`error`]    | `HostError`, `HostResult`                             |

pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod queue;
pub mod runner;
pub mod sandbox;
pub mod script;


pub use builder::RunnerBuilder;
pub use config::{ErrorPolicy, RunConfig};
pub use error::{HostError, HostResult};
pub use observer::{NoopObserver, RunObserver};
pub use queue::EventQueue;
pub use runner::BattleRunner;
pub use sandbox::{ArenaConfig, SandboxHandle, SandboxPeer, sandbox};
pub use script::{EventRates, scripted_events};
