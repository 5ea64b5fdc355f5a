//! The capability contract — every action and sensor a robot may use.

use rb_core::{Bullet, Color};

use crate::ActuatorResult;

/// Everything a robot can do to, or read from, the battle host.
///
/// Agent behavior is written against `&mut dyn Actuator` only.  Whether the
/// calls land on the live host or on a test double is decided once, when the
/// [`ActuatorSelector`][crate::ActuatorSelector] is constructed.
///
/// # Blocking semantics
///
/// Actions are synchronous: `ahead(100.0)` returns when the host reports the
/// move complete (or interrupted by a collision).  Waiting is the actuator's
/// business, never the caller's.
///
/// # Errors
///
/// Every method is fallible.  Range checks, overheating, and "host not ready"
/// conditions belong to the implementation; callers propagate with `?`.
pub trait Actuator: Send {
    // ── Movement ──────────────────────────────────────────────────────────

    /// Move forward by `distance` pixels.  Negative values move backward.
    fn ahead(&mut self, distance: f64) -> ActuatorResult<()>;

    /// Move backward by `distance` pixels.  Negative values move forward.
    fn back(&mut self, distance: f64) -> ActuatorResult<()>;

    /// Halt any movement in progress, remembering it for [`resume`][Self::resume].
    fn stop(&mut self) -> ActuatorResult<()>;

    /// Resume the movement interrupted by [`stop`][Self::stop], if any.
    fn resume(&mut self) -> ActuatorResult<()>;

    /// Spend one turn without acting.
    fn do_nothing(&mut self) -> ActuatorResult<()>;

    // ── Rotation ──────────────────────────────────────────────────────────

    /// Rotate the body counter-clockwise by `degrees`.
    fn turn_left(&mut self, degrees: f64) -> ActuatorResult<()>;

    /// Rotate the body clockwise by `degrees`.
    fn turn_right(&mut self, degrees: f64) -> ActuatorResult<()>;

    /// Rotate the gun by `degrees`, counter-clockwise or clockwise.
    fn turn_gun_left(&mut self, degrees: f64) -> ActuatorResult<()>;
    fn turn_gun_right(&mut self, degrees: f64) -> ActuatorResult<()>;

    /// Rotate the radar by `degrees`, counter-clockwise or clockwise.
    fn turn_radar_left(&mut self, degrees: f64) -> ActuatorResult<()>;
    fn turn_radar_right(&mut self, degrees: f64) -> ActuatorResult<()>;

    // ── Weapons and radar ─────────────────────────────────────────────────

    /// Fire a bullet with `power` energy.
    fn fire(&mut self, power: f64) -> ActuatorResult<()>;

    /// Fire a bullet with `power` energy and return a handle to it.
    ///
    /// `Ok(None)` means the host accepted the call but no bullet left the
    /// gun (for example because the robot is disabled).
    fn fire_bullet(&mut self, power: f64) -> ActuatorResult<Option<Bullet>>;

    /// Sweep the radar once without turning it.
    fn scan(&mut self) -> ActuatorResult<()>;

    // ── Paint ─────────────────────────────────────────────────────────────

    fn set_all_colors(&mut self, color: Color) -> ActuatorResult<()>;
    fn set_colors(&mut self, body: Color, gun: Color, radar: Color) -> ActuatorResult<()>;

    fn body_color(&self) -> ActuatorResult<Color>;
    fn set_body_color(&mut self, color: Color) -> ActuatorResult<()>;
    fn bullet_color(&self) -> ActuatorResult<Color>;
    fn set_bullet_color(&mut self, color: Color) -> ActuatorResult<()>;
    fn gun_color(&self) -> ActuatorResult<Color>;
    fn set_gun_color(&mut self, color: Color) -> ActuatorResult<()>;
    fn radar_color(&self) -> ActuatorResult<Color>;
    fn set_radar_color(&mut self, color: Color) -> ActuatorResult<()>;
    fn scan_color(&self) -> ActuatorResult<Color>;
    fn set_scan_color(&mut self, color: Color) -> ActuatorResult<()>;

    // ── Turret coupling flags ─────────────────────────────────────────────

    /// Whether the gun stays put while the body turns.
    fn is_adjust_gun_for_robot_turn(&self) -> ActuatorResult<bool>;
    fn set_adjust_gun_for_robot_turn(&mut self, independent: bool) -> ActuatorResult<()>;
    /// Whether the radar stays put while the gun turns.
    fn is_adjust_radar_for_gun_turn(&self) -> ActuatorResult<bool>;
    fn set_adjust_radar_for_gun_turn(&mut self, independent: bool) -> ActuatorResult<()>;
    /// Whether the radar stays put while the body turns.
    fn is_adjust_radar_for_robot_turn(&self) -> ActuatorResult<bool>;
    fn set_adjust_radar_for_robot_turn(&mut self, independent: bool) -> ActuatorResult<()>;

    // ── Sensors ───────────────────────────────────────────────────────────

    fn battle_field_width(&self) -> ActuatorResult<f64>;
    fn battle_field_height(&self) -> ActuatorResult<f64>;

    fn energy(&self) -> ActuatorResult<f64>;

    /// Heat shed per turn.
    fn gun_cooling_rate(&self) -> ActuatorResult<f64>;
    /// Gun direction in compass degrees.
    fn gun_heading(&self) -> ActuatorResult<f64>;
    /// The gun can fire only when this is zero.
    fn gun_heat(&self) -> ActuatorResult<f64>;
    /// Body direction in compass degrees.
    fn heading(&self) -> ActuatorResult<f64>;

    fn width(&self) -> ActuatorResult<f64>;
    fn height(&self) -> ActuatorResult<f64>;
    fn velocity(&self) -> ActuatorResult<f64>;
    fn x(&self) -> ActuatorResult<f64>;
    fn y(&self) -> ActuatorResult<f64>;

    fn name(&self) -> ActuatorResult<String>;
    fn num_rounds(&self) -> ActuatorResult<u32>;
    /// Opponents still alive.
    fn others(&self) -> ActuatorResult<u32>;
    /// Zero-based index of the current round.
    fn round_num(&self) -> ActuatorResult<u32>;
}
