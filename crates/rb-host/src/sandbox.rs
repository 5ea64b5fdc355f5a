//! `SandboxPeer` — a bookkeeping-only stand-in for a real battle engine.
//!
//! The sandbox does no physics: movement and rotation complete instantly,
//! nothing collides, and bullets never fly.  It exists so a live agent can
//! run end-to-end without a real host.  What it does track:
//!
//! - body / gun / radar headings, honoring the three adjust flags;
//! - position, clamped so the robot's bounding box stays on the field;
//! - energy and gun heat (firing costs `power` energy and adds
//!   `1 + power / 5` heat; the host cools the gun each turn);
//! - colors, and the turn counter exposed in status snapshots.
//!
//! [`sandbox`] returns a peer (moved into the agent) and a handle (kept by
//! the runner), both viewing the same state.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rb_actuator::{Actuator, ActuatorError, ActuatorResult};
use rb_core::{Bullet, Color, Heading, RobotStatus, Tick};

pub const MIN_FIRE_POWER: f64 = 0.1;
pub const MAX_FIRE_POWER: f64 = 3.0;

// ── ArenaConfig ───────────────────────────────────────────────────────────────

/// Static battlefield and robot parameters for a sandbox run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ArenaConfig {
    pub name:             String,
    pub field_width:      f64,
    pub field_height:     f64,
    /// Robot bounding box edge length; the robot is square.
    pub robot_size:       f64,
    pub start_x:          f64,
    pub start_y:          f64,
    pub start_heading:    f64,
    pub start_energy:     f64,
    /// Gun heat removed per turn.
    pub gun_cooling_rate: f64,
    /// Gun heat at the start of the round.
    pub start_gun_heat:   f64,
    pub others:           u32,
    pub num_rounds:       u32,
    pub round_num:        u32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            name:             "sandbox".into(),
            field_width:      800.0,
            field_height:     600.0,
            robot_size:       36.0,
            start_x:          400.0,
            start_y:          300.0,
            start_heading:    0.0,
            start_energy:     100.0,
            gun_cooling_rate: 0.1,
            start_gun_heat:   0.0,
            others:           1,
            num_rounds:       1,
            round_num:        0,
        }
    }
}

// ── Shared state ──────────────────────────────────────────────────────────────

#[derive(Debug)]
struct ArenaState {
    config:        ArenaConfig,
    time:          Tick,
    x:             f64,
    y:             f64,
    heading:       Heading,
    gun_heading:   Heading,
    radar_heading: Heading,
    energy:        f64,
    gun_heat:      f64,
    body_color:    Color,
    bullet_color:  Color,
    gun_color:     Color,
    radar_color:   Color,
    scan_color:    Color,
    gun_independent:         bool,
    radar_independent_gun:   bool,
    radar_independent_robot: bool,
    next_bullet:   u32,
}

impl ArenaState {
    fn new(config: ArenaConfig) -> Self {
        let heading = Heading::new(config.start_heading);
        let mut state = Self {
            time:          Tick::ZERO,
            x:             config.start_x,
            y:             config.start_y,
            heading,
            gun_heading:   heading,
            radar_heading: heading,
            energy:        config.start_energy,
            gun_heat:      config.start_gun_heat,
            body_color:    Color::BLACK,
            bullet_color:  Color::WHITE,
            gun_color:     Color::BLACK,
            radar_color:   Color::BLACK,
            scan_color:    Color::BLUE,
            gun_independent:         false,
            radar_independent_gun:   false,
            radar_independent_robot: false,
            next_bullet:   0,
            config,
        };
        state.clamp_position();
        state
    }

    fn clamp_position(&mut self) {
        let half = self.config.robot_size / 2.0;
        self.x = clamp_axis(self.x, half, self.config.field_width - half);
        self.y = clamp_axis(self.y, half, self.config.field_height - half);
    }

    /// Move along the body heading; negative distances move backwards.
    /// 0° is north (+y), 90° is east (+x).
    fn advance(&mut self, distance: f64) -> ActuatorResult<()> {
        let distance = finite("distance", distance)?;
        let rad = self.heading.degrees().to_radians();
        self.x += distance * rad.sin();
        self.y += distance * rad.cos();
        self.clamp_position();
        Ok(())
    }

    fn rotate_body(&mut self, degrees: f64) -> ActuatorResult<()> {
        let degrees = finite("degrees", degrees)?;
        self.heading = self.heading.rotated(degrees);
        if !self.gun_independent {
            self.gun_heading = self.gun_heading.rotated(degrees);
        }
        if !self.radar_independent_robot {
            self.radar_heading = self.radar_heading.rotated(degrees);
        }
        Ok(())
    }

    fn rotate_gun(&mut self, degrees: f64) -> ActuatorResult<()> {
        let degrees = finite("degrees", degrees)?;
        self.gun_heading = self.gun_heading.rotated(degrees);
        if !self.radar_independent_gun {
            self.radar_heading = self.radar_heading.rotated(degrees);
        }
        Ok(())
    }

    fn rotate_radar(&mut self, degrees: f64) -> ActuatorResult<()> {
        let degrees = finite("degrees", degrees)?;
        self.radar_heading = self.radar_heading.rotated(degrees);
        Ok(())
    }

    /// Spend energy and heat the gun.  Power above the remaining energy is
    /// clipped to what is left.
    fn shoot(&mut self, power: f64) -> ActuatorResult<Bullet> {
        if !power.is_finite() || !(MIN_FIRE_POWER..=MAX_FIRE_POWER).contains(&power) {
            return Err(ActuatorError::InvalidArgument { what: "power", value: power });
        }
        if self.gun_heat > 0.0 {
            return Err(ActuatorError::GunOverheated { heat: self.gun_heat });
        }
        let power = power.min(self.energy);
        if power <= 0.0 {
            return Err(ActuatorError::Host("robot is disabled".into()));
        }
        self.energy -= power;
        self.gun_heat = 1.0 + power / 5.0;
        self.next_bullet += 1;
        Ok(Bullet {
            id:      self.next_bullet,
            heading: self.gun_heading.degrees(),
            x:       self.x,
            y:       self.y,
            power,
            owner:   self.config.name.clone(),
            victim:  None,
            active:  true,
        })
    }

    fn status(&self) -> RobotStatus {
        RobotStatus {
            time:        self.time,
            energy:      self.energy,
            x:           self.x,
            y:           self.y,
            heading:     self.heading,
            gun_heading: self.gun_heading,
            gun_heat:    self.gun_heat,
            velocity:    0.0,
        }
    }
}

fn clamp_axis(value: f64, lo: f64, hi: f64) -> f64 {
    // A field narrower than the robot pins it to the centre line.
    if lo > hi { (lo + hi) / 2.0 } else { value.clamp(lo, hi) }
}

fn finite(what: &'static str, value: f64) -> ActuatorResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ActuatorError::InvalidArgument { what, value })
    }
}

fn lock(state: &Mutex<ArenaState>) -> MutexGuard<'_, ArenaState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

// ── Peer and handle ───────────────────────────────────────────────────────────

/// Create a sandbox peer and the runner-side handle onto the same state.
pub fn sandbox(config: ArenaConfig) -> (SandboxPeer, SandboxHandle) {
    let state = Arc::new(Mutex::new(ArenaState::new(config)));
    (SandboxPeer { state: Arc::clone(&state) }, SandboxHandle { state })
}

/// The [`Actuator`] half of a sandbox, attached to a live agent.
pub struct SandboxPeer {
    state: Arc<Mutex<ArenaState>>,
}

impl SandboxPeer {
    fn with<T>(&self, f: impl FnOnce(&ArenaState) -> T) -> ActuatorResult<T> {
        let guard = lock(&self.state);
        Ok(f(&*guard))
    }

    fn with_mut<T>(
        &mut self,
        f: impl FnOnce(&mut ArenaState) -> ActuatorResult<T>,
    ) -> ActuatorResult<T> {
        let mut guard = lock(&self.state);
        f(&mut *guard)
    }

    fn update(&mut self, f: impl FnOnce(&mut ArenaState)) -> ActuatorResult<()> {
        let mut guard = lock(&self.state);
        f(&mut *guard);
        Ok(())
    }
}

/// The runner's view of a sandbox: turn advancement and status snapshots.
#[derive(Clone)]
pub struct SandboxHandle {
    state: Arc<Mutex<ArenaState>>,
}

impl SandboxHandle {
    /// End the current turn: cool the gun and advance the clock.
    pub fn end_turn(&self) {
        let mut s = lock(&self.state);
        s.gun_heat = (s.gun_heat - s.config.gun_cooling_rate).max(0.0);
        s.time = s.time.next();
    }

    pub fn status(&self) -> RobotStatus {
        lock(&self.state).status()
    }

    pub fn radar_heading(&self) -> Heading {
        lock(&self.state).radar_heading
    }

    pub fn config(&self) -> ArenaConfig {
        lock(&self.state).config.clone()
    }
}

impl Actuator for SandboxPeer {
    // ── Movement and rotation ─────────────────────────────────────────────

    fn ahead(&mut self, distance: f64) -> ActuatorResult<()> {
        self.with_mut(|s| s.advance(distance))
    }

    fn back(&mut self, distance: f64) -> ActuatorResult<()> {
        self.with_mut(|s| s.advance(-distance))
    }

    // Movement completes instantly, so there is never anything to stop or
    // resume.
    fn stop(&mut self) -> ActuatorResult<()> {
        Ok(())
    }

    fn resume(&mut self) -> ActuatorResult<()> {
        Ok(())
    }

    fn do_nothing(&mut self) -> ActuatorResult<()> {
        Ok(())
    }

    fn turn_left(&mut self, degrees: f64) -> ActuatorResult<()> {
        self.with_mut(|s| s.rotate_body(-degrees))
    }

    fn turn_right(&mut self, degrees: f64) -> ActuatorResult<()> {
        self.with_mut(|s| s.rotate_body(degrees))
    }

    fn turn_gun_left(&mut self, degrees: f64) -> ActuatorResult<()> {
        self.with_mut(|s| s.rotate_gun(-degrees))
    }

    fn turn_gun_right(&mut self, degrees: f64) -> ActuatorResult<()> {
        self.with_mut(|s| s.rotate_gun(degrees))
    }

    fn turn_radar_left(&mut self, degrees: f64) -> ActuatorResult<()> {
        self.with_mut(|s| s.rotate_radar(-degrees))
    }

    fn turn_radar_right(&mut self, degrees: f64) -> ActuatorResult<()> {
        self.with_mut(|s| s.rotate_radar(degrees))
    }

    // ── Gun and radar ─────────────────────────────────────────────────────

    fn fire(&mut self, power: f64) -> ActuatorResult<()> {
        self.with_mut(|s| s.shoot(power).map(|_| ()))
    }

    fn fire_bullet(&mut self, power: f64) -> ActuatorResult<Option<Bullet>> {
        self.with_mut(|s| s.shoot(power).map(Some))
    }

    fn scan(&mut self) -> ActuatorResult<()> {
        Ok(())
    }

    // ── Appearance ────────────────────────────────────────────────────────

    fn set_all_colors(&mut self, color: Color) -> ActuatorResult<()> {
        self.update(|s| {
            s.body_color = color;
            s.bullet_color = color;
            s.gun_color = color;
            s.radar_color = color;
            s.scan_color = color;
        })
    }

    fn set_colors(&mut self, body: Color, gun: Color, radar: Color) -> ActuatorResult<()> {
        self.update(|s| {
            s.body_color = body;
            s.gun_color = gun;
            s.radar_color = radar;
        })
    }

    fn body_color(&self) -> ActuatorResult<Color> {
        self.with(|s| s.body_color)
    }

    fn set_body_color(&mut self, color: Color) -> ActuatorResult<()> {
        self.update(|s| s.body_color = color)
    }

    fn bullet_color(&self) -> ActuatorResult<Color> {
        self.with(|s| s.bullet_color)
    }

    fn set_bullet_color(&mut self, color: Color) -> ActuatorResult<()> {
        self.update(|s| s.bullet_color = color)
    }

    fn gun_color(&self) -> ActuatorResult<Color> {
        self.with(|s| s.gun_color)
    }

    fn set_gun_color(&mut self, color: Color) -> ActuatorResult<()> {
        self.update(|s| s.gun_color = color)
    }

    fn radar_color(&self) -> ActuatorResult<Color> {
        self.with(|s| s.radar_color)
    }

    fn set_radar_color(&mut self, color: Color) -> ActuatorResult<()> {
        self.update(|s| s.radar_color = color)
    }

    fn scan_color(&self) -> ActuatorResult<Color> {
        self.with(|s| s.scan_color)
    }

    fn set_scan_color(&mut self, color: Color) -> ActuatorResult<()> {
        self.update(|s| s.scan_color = color)
    }

    // ── Adjust flags ──────────────────────────────────────────────────────

    fn is_adjust_gun_for_robot_turn(&self) -> ActuatorResult<bool> {
        self.with(|s| s.gun_independent)
    }

    fn set_adjust_gun_for_robot_turn(&mut self, independent: bool) -> ActuatorResult<()> {
        self.update(|s| s.gun_independent = independent)
    }

    fn is_adjust_radar_for_gun_turn(&self) -> ActuatorResult<bool> {
        self.with(|s| s.radar_independent_gun)
    }

    fn set_adjust_radar_for_gun_turn(&mut self, independent: bool) -> ActuatorResult<()> {
        self.update(|s| s.radar_independent_gun = independent)
    }

    fn is_adjust_radar_for_robot_turn(&self) -> ActuatorResult<bool> {
        self.with(|s| s.radar_independent_robot)
    }

    fn set_adjust_radar_for_robot_turn(&mut self, independent: bool) -> ActuatorResult<()> {
        self.update(|s| s.radar_independent_robot = independent)
    }

    // ── Sensors ───────────────────────────────────────────────────────────

    fn battle_field_width(&self) -> ActuatorResult<f64> {
        self.with(|s| s.config.field_width)
    }

    fn battle_field_height(&self) -> ActuatorResult<f64> {
        self.with(|s| s.config.field_height)
    }

    fn energy(&self) -> ActuatorResult<f64> {
        self.with(|s| s.energy)
    }

    fn gun_cooling_rate(&self) -> ActuatorResult<f64> {
        self.with(|s| s.config.gun_cooling_rate)
    }

    fn gun_heading(&self) -> ActuatorResult<f64> {
        self.with(|s| s.gun_heading.degrees())
    }

    fn gun_heat(&self) -> ActuatorResult<f64> {
        self.with(|s| s.gun_heat)
    }

    fn heading(&self) -> ActuatorResult<f64> {
        self.with(|s| s.heading.degrees())
    }

    fn width(&self) -> ActuatorResult<f64> {
        self.with(|s| s.config.robot_size)
    }

    fn height(&self) -> ActuatorResult<f64> {
        self.with(|s| s.config.robot_size)
    }

    fn velocity(&self) -> ActuatorResult<f64> {
        Ok(0.0)
    }

    fn x(&self) -> ActuatorResult<f64> {
        self.with(|s| s.x)
    }

    fn y(&self) -> ActuatorResult<f64> {
        self.with(|s| s.y)
    }

    fn name(&self) -> ActuatorResult<String> {
        self.with(|s| s.config.name.clone())
    }

    fn num_rounds(&self) -> ActuatorResult<u32> {
        self.with(|s| s.config.num_rounds)
    }

    fn others(&self) -> ActuatorResult<u32> {
        self.with(|s| s.config.others)
    }

    fn round_num(&self) -> ActuatorResult<u32> {
        self.with(|s| s.config.round_num)
    }
}
