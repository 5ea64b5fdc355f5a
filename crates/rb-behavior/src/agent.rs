//! `Agent<B>` — a behavior bound to its actuator selector, with a lifecycle.
//!
//! ```text
//!   Created ──setup()──▶ Initialized ──tick()──▶ Ticking ──┐
//!      │                      │                    ▲ tick() │
//!      │                      │                    └────────┘
//!      └──────────────────────┴───── terminate() ─────────▶ Terminated
//! ```
//!
//! The host owns the loop: it calls [`Agent::setup`] once, then
//! [`Agent::tick`] for as long as it likes, interleaving
//! [`Agent::deliver`] for events.  The agent never loops on its own and
//! never ends its own run.

use std::fmt;

use rb_actuator::{Actuator, ActuatorSelector};
use rb_core::RobotEvent;
use tracing::{debug, trace};

use crate::model::dispatch;
use crate::{BehaviorError, BehaviorResult, RobotBehavior};

/// Where an agent is in its run.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Lifecycle {
    Created,
    Initialized,
    Ticking,
    Terminated,
}

impl fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Lifecycle::Created     => "created",
            Lifecycle::Initialized => "initialized",
            Lifecycle::Ticking     => "ticking",
            Lifecycle::Terminated  => "terminated",
        };
        f.write_str(s)
    }
}

/// A robot: one [`RobotBehavior`] driving one [`ActuatorSelector`].
pub struct Agent<B: RobotBehavior> {
    robot:     ActuatorSelector,
    behavior:  B,
    lifecycle: Lifecycle,
    ticks:     u64,
}

impl<B: RobotBehavior> Agent<B> {
    pub fn new(robot: ActuatorSelector, behavior: B) -> Self {
        Self {
            robot,
            behavior,
            lifecycle: Lifecycle::Created,
            ticks:     0,
        }
    }

    /// An agent on the default live actuator; the host attaches its peer
    /// with [`attach_peer`][Self::attach_peer] before setup.
    pub fn live(behavior: B) -> Self {
        Self::new(ActuatorSelector::new(), behavior)
    }

    /// An agent in test mode, driving `substitute` instead of a host.
    pub fn with_substitute<A: Actuator + 'static>(substitute: A, behavior: B) -> Self {
        Self::new(ActuatorSelector::with_substitute(substitute), behavior)
    }

    /// Host wiring for live agents.  Allowed only before setup.
    pub fn attach_peer(&mut self, peer: Box<dyn Actuator>) -> BehaviorResult<()> {
        self.require("attach a peer", &[Lifecycle::Created])?;
        self.robot.attach_peer(peer)?;
        Ok(())
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Number of ticks run so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn behavior(&self) -> &B {
        &self.behavior
    }

    pub fn behavior_mut(&mut self) -> &mut B {
        &mut self.behavior
    }

    pub fn robot(&self) -> &ActuatorSelector {
        &self.robot
    }

    pub fn robot_mut(&mut self) -> &mut ActuatorSelector {
        &mut self.robot
    }

    // ── Host entry points ─────────────────────────────────────────────────

    /// Run the behavior's one-time setup.
    ///
    /// On failure the agent stays `Created` and the error goes to the host.
    pub fn setup(&mut self) -> BehaviorResult<()> {
        self.require("run setup", &[Lifecycle::Created])?;
        self.behavior.setup(&mut self.robot)?;
        debug!(test_mode = self.robot.is_test_mode(), "agent initialized");
        self.lifecycle = Lifecycle::Initialized;
        Ok(())
    }

    /// Run one decision step.
    pub fn tick(&mut self) -> BehaviorResult<()> {
        self.require("tick", &[Lifecycle::Initialized, Lifecycle::Ticking])?;
        if self.lifecycle == Lifecycle::Initialized {
            debug!("agent ticking");
            self.lifecycle = Lifecycle::Ticking;
        }
        self.ticks += 1;
        self.behavior.tick(&mut self.robot)
    }

    /// Hand a host notification to the matching behavior hook.
    pub fn deliver(&mut self, event: &RobotEvent) -> BehaviorResult<()> {
        self.require("deliver an event", &[Lifecycle::Initialized, Lifecycle::Ticking])?;
        trace!(kind = event.kind(), tick = self.ticks, "delivering event");
        dispatch(&mut self.behavior, &mut self.robot, event)
    }

    /// The host ended the run.  Idempotent.
    pub fn terminate(&mut self) {
        if self.lifecycle != Lifecycle::Terminated {
            debug!(ticks = self.ticks, "agent terminated");
            self.lifecycle = Lifecycle::Terminated;
        }
    }

    fn require(&self, op: &'static str, allowed: &[Lifecycle]) -> BehaviorResult<()> {
        if allowed.contains(&self.lifecycle) {
            Ok(())
        } else {
            Err(BehaviorError::Lifecycle { op, state: self.lifecycle })
        }
    }
}
