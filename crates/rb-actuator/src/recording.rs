//! `RecordingActuator` — a substitute that logs every call it receives.
//!
//! Clones share one log, so a test keeps a clone, hands another to the
//! selector, and inspects the log afterwards:
//!
//! ```rust,ignore
//! let recorder = RecordingActuator::new();
//! let mut agent = Agent::new(ActuatorSelector::with_substitute(recorder.clone()), behavior);
//! agent.deliver(&scanned)?;
//! assert_eq!(recorder.count(|c| matches!(c, Call::FireBullet(_))), 1);
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rb_core::{Bullet, Color};

use crate::{Actuator, ActuatorError, ActuatorResult};

// ── Call log entries ──────────────────────────────────────────────────────────

/// A sensor read, as recorded in [`Call::Read`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Sensor {
    BodyColor,
    BulletColor,
    GunColor,
    RadarColor,
    ScanColor,
    AdjustGunForRobotTurn,
    AdjustRadarForGunTurn,
    AdjustRadarForRobotTurn,
    BattleFieldWidth,
    BattleFieldHeight,
    Energy,
    GunCoolingRate,
    GunHeading,
    GunHeat,
    Heading,
    Width,
    Height,
    Velocity,
    X,
    Y,
    Name,
    NumRounds,
    Others,
    RoundNum,
}

/// One call received by a [`RecordingActuator`], with its arguments.
#[derive(Clone, PartialEq, Debug)]
pub enum Call {
    Ahead(f64),
    Back(f64),
    Stop,
    Resume,
    DoNothing,
    TurnLeft(f64),
    TurnRight(f64),
    TurnGunLeft(f64),
    TurnGunRight(f64),
    TurnRadarLeft(f64),
    TurnRadarRight(f64),
    Fire(f64),
    FireBullet(f64),
    Scan,
    SetAllColors(Color),
    SetColors { body: Color, gun: Color, radar: Color },
    SetBodyColor(Color),
    SetBulletColor(Color),
    SetGunColor(Color),
    SetRadarColor(Color),
    SetScanColor(Color),
    SetAdjustGunForRobotTurn(bool),
    SetAdjustRadarForGunTurn(bool),
    SetAdjustRadarForRobotTurn(bool),
    Read(Sensor),
}

impl Call {
    /// `true` for body, gun, or radar rotations.
    pub fn is_rotation(&self) -> bool {
        matches!(
            self,
            Call::TurnLeft(_)
                | Call::TurnRight(_)
                | Call::TurnGunLeft(_)
                | Call::TurnGunRight(_)
                | Call::TurnRadarLeft(_)
                | Call::TurnRadarRight(_)
        )
    }
}

// ── Scripted sensor values ────────────────────────────────────────────────────

/// The values a [`RecordingActuator`] reports from its sensors.
///
/// Setters on the actuator (colors, adjust flags) write through to these.
/// Actions do not: moving or turning a recorder changes nothing it reports.
#[derive(Clone, PartialEq, Debug)]
pub struct SensorReadings {
    pub battle_field_width:  f64,
    pub battle_field_height: f64,
    pub energy:              f64,
    pub gun_cooling_rate:    f64,
    pub gun_heading:         f64,
    pub gun_heat:            f64,
    pub heading:             f64,
    pub width:               f64,
    pub height:              f64,
    pub velocity:            f64,
    pub x:                   f64,
    pub y:                   f64,
    pub name:                String,
    pub num_rounds:          u32,
    pub others:              u32,
    pub round_num:           u32,
    pub body_color:          Color,
    pub bullet_color:        Color,
    pub gun_color:           Color,
    pub radar_color:         Color,
    pub scan_color:          Color,
    pub adjust_gun_for_robot_turn:   bool,
    pub adjust_radar_for_gun_turn:   bool,
    pub adjust_radar_for_robot_turn: bool,
}

impl Default for SensorReadings {
    fn default() -> Self {
        Self {
            battle_field_width:  800.0,
            battle_field_height: 600.0,
            energy:              100.0,
            gun_cooling_rate:    0.1,
            gun_heading:         0.0,
            gun_heat:            0.0,
            heading:             0.0,
            width:               36.0,
            height:              36.0,
            velocity:            0.0,
            x:                   400.0,
            y:                   300.0,
            name:                "substitute".to_owned(),
            num_rounds:          1,
            others:              1,
            round_num:           0,
            body_color:          Color::BLACK,
            bullet_color:        Color::WHITE,
            gun_color:           Color::BLACK,
            radar_color:         Color::BLACK,
            scan_color:          Color::BLUE,
            adjust_gun_for_robot_turn:   false,
            adjust_radar_for_gun_turn:   false,
            adjust_radar_for_robot_turn: false,
        }
    }
}

// ── RecordingActuator ─────────────────────────────────────────────────────────

#[derive(Default)]
struct State {
    calls:       Vec<Call>,
    readings:    SensorReadings,
    fail_next:   Option<ActuatorError>,
    bullets:     u32,
}

/// A substitute actuator that records calls and replays scripted readings.
#[derive(Clone, Default)]
pub struct RecordingActuator {
    state: Arc<Mutex<State>>,
}

impl RecordingActuator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_readings(readings: SensorReadings) -> Self {
        let recorder = Self::new();
        recorder.lock().readings = readings;
        recorder
    }

    /// Snapshot of every call received so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.lock().calls.clone()
    }

    /// Number of recorded calls matching `pred`.
    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.lock().calls.iter().filter(|c| pred(c)).count()
    }

    /// Forget all recorded calls.  Readings are kept.
    pub fn clear(&self) {
        self.lock().calls.clear();
    }

    pub fn readings(&self) -> SensorReadings {
        self.lock().readings.clone()
    }

    /// Replace the scripted readings; later sensor calls report these.
    pub fn set_readings(&self, readings: SensorReadings) {
        self.lock().readings = readings;
    }

    /// Make the next call of any kind fail with `error`.
    ///
    /// The failing call is still recorded.  Setters that fail leave the
    /// readings unchanged.
    pub fn fail_next(&self, error: ActuatorError) {
        self.lock().fail_next = Some(error);
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn act(&self, call: Call) -> ActuatorResult<()> {
        self.act_with(call, |_| ())
    }

    /// Record `call`; unless a failure is armed, apply `effect` to the readings.
    fn act_with<T>(&self, call: Call, effect: impl FnOnce(&mut State) -> T) -> ActuatorResult<T> {
        let mut state = self.lock();
        state.calls.push(call);
        match state.fail_next.take() {
            Some(err) => Err(err),
            None      => Ok(effect(&mut state)),
        }
    }

    fn read<T>(&self, sensor: Sensor, value: impl FnOnce(&SensorReadings) -> T) -> ActuatorResult<T> {
        self.act_with(Call::Read(sensor), |state| value(&state.readings))
    }
}

impl Actuator for RecordingActuator {
    fn ahead(&mut self, distance: f64) -> ActuatorResult<()> {
        self.act(Call::Ahead(distance))
    }

    fn back(&mut self, distance: f64) -> ActuatorResult<()> {
        self.act(Call::Back(distance))
    }

    fn stop(&mut self) -> ActuatorResult<()> {
        self.act(Call::Stop)
    }

    fn resume(&mut self) -> ActuatorResult<()> {
        self.act(Call::Resume)
    }

    fn do_nothing(&mut self) -> ActuatorResult<()> {
        self.act(Call::DoNothing)
    }

    fn turn_left(&mut self, degrees: f64) -> ActuatorResult<()> {
        self.act(Call::TurnLeft(degrees))
    }

    fn turn_right(&mut self, degrees: f64) -> ActuatorResult<()> {
        self.act(Call::TurnRight(degrees))
    }

    fn turn_gun_left(&mut self, degrees: f64) -> ActuatorResult<()> {
        self.act(Call::TurnGunLeft(degrees))
    }

    fn turn_gun_right(&mut self, degrees: f64) -> ActuatorResult<()> {
        self.act(Call::TurnGunRight(degrees))
    }

    fn turn_radar_left(&mut self, degrees: f64) -> ActuatorResult<()> {
        self.act(Call::TurnRadarLeft(degrees))
    }

    fn turn_radar_right(&mut self, degrees: f64) -> ActuatorResult<()> {
        self.act(Call::TurnRadarRight(degrees))
    }

    fn fire(&mut self, power: f64) -> ActuatorResult<()> {
        self.act(Call::Fire(power))
    }

    fn fire_bullet(&mut self, power: f64) -> ActuatorResult<Option<Bullet>> {
        self.act_with(Call::FireBullet(power), |state| {
            state.bullets += 1;
            let r = &state.readings;
            Some(Bullet {
                id:      state.bullets,
                heading: r.gun_heading,
                x:       r.x,
                y:       r.y,
                power,
                owner:   r.name.clone(),
                victim:  None,
                active:  true,
            })
        })
    }

    fn scan(&mut self) -> ActuatorResult<()> {
        self.act(Call::Scan)
    }

    fn set_all_colors(&mut self, color: Color) -> ActuatorResult<()> {
        self.act_with(Call::SetAllColors(color), |state| {
            let r = &mut state.readings;
            r.body_color = color;
            r.gun_color = color;
            r.radar_color = color;
            r.bullet_color = color;
            r.scan_color = color;
        })
    }

    fn set_colors(&mut self, body: Color, gun: Color, radar: Color) -> ActuatorResult<()> {
        self.act_with(Call::SetColors { body, gun, radar }, |state| {
            let r = &mut state.readings;
            r.body_color = body;
            r.gun_color = gun;
            r.radar_color = radar;
        })
    }

    fn body_color(&self) -> ActuatorResult<Color> {
        self.read(Sensor::BodyColor, |r| r.body_color)
    }

    fn set_body_color(&mut self, color: Color) -> ActuatorResult<()> {
        self.act_with(Call::SetBodyColor(color), |s| s.readings.body_color = color)
    }

    fn bullet_color(&self) -> ActuatorResult<Color> {
        self.read(Sensor::BulletColor, |r| r.bullet_color)
    }

    fn set_bullet_color(&mut self, color: Color) -> ActuatorResult<()> {
        self.act_with(Call::SetBulletColor(color), |s| s.readings.bullet_color = color)
    }

    fn gun_color(&self) -> ActuatorResult<Color> {
        self.read(Sensor::GunColor, |r| r.gun_color)
    }

    fn set_gun_color(&mut self, color: Color) -> ActuatorResult<()> {
        self.act_with(Call::SetGunColor(color), |s| s.readings.gun_color = color)
    }

    fn radar_color(&self) -> ActuatorResult<Color> {
        self.read(Sensor::RadarColor, |r| r.radar_color)
    }

    fn set_radar_color(&mut self, color: Color) -> ActuatorResult<()> {
        self.act_with(Call::SetRadarColor(color), |s| s.readings.radar_color = color)
    }

    fn scan_color(&self) -> ActuatorResult<Color> {
        self.read(Sensor::ScanColor, |r| r.scan_color)
    }

    fn set_scan_color(&mut self, color: Color) -> ActuatorResult<()> {
        self.act_with(Call::SetScanColor(color), |s| s.readings.scan_color = color)
    }

    fn is_adjust_gun_for_robot_turn(&self) -> ActuatorResult<bool> {
        self.read(Sensor::AdjustGunForRobotTurn, |r| r.adjust_gun_for_robot_turn)
    }

    fn set_adjust_gun_for_robot_turn(&mut self, independent: bool) -> ActuatorResult<()> {
        self.act_with(Call::SetAdjustGunForRobotTurn(independent), |s| {
            s.readings.adjust_gun_for_robot_turn = independent
        })
    }

    fn is_adjust_radar_for_gun_turn(&self) -> ActuatorResult<bool> {
        self.read(Sensor::AdjustRadarForGunTurn, |r| r.adjust_radar_for_gun_turn)
    }

    fn set_adjust_radar_for_gun_turn(&mut self, independent: bool) -> ActuatorResult<()> {
        self.act_with(Call::SetAdjustRadarForGunTurn(independent), |s| {
            s.readings.adjust_radar_for_gun_turn = independent
        })
    }

    fn is_adjust_radar_for_robot_turn(&self) -> ActuatorResult<bool> {
        self.read(Sensor::AdjustRadarForRobotTurn, |r| r.adjust_radar_for_robot_turn)
    }

    fn set_adjust_radar_for_robot_turn(&mut self, independent: bool) -> ActuatorResult<()> {
        self.act_with(Call::SetAdjustRadarForRobotTurn(independent), |s| {
            s.readings.adjust_radar_for_robot_turn = independent
        })
    }

    fn battle_field_width(&self) -> ActuatorResult<f64> {
        self.read(Sensor::BattleFieldWidth, |r| r.battle_field_width)
    }

    fn battle_field_height(&self) -> ActuatorResult<f64> {
        self.read(Sensor::BattleFieldHeight, |r| r.battle_field_height)
    }

    fn energy(&self) -> ActuatorResult<f64> {
        self.read(Sensor::Energy, |r| r.energy)
    }

    fn gun_cooling_rate(&self) -> ActuatorResult<f64> {
        self.read(Sensor::GunCoolingRate, |r| r.gun_cooling_rate)
    }

    fn gun_heading(&self) -> ActuatorResult<f64> {
        self.read(Sensor::GunHeading, |r| r.gun_heading)
    }

    fn gun_heat(&self) -> ActuatorResult<f64> {
        self.read(Sensor::GunHeat, |r| r.gun_heat)
    }

    fn heading(&self) -> ActuatorResult<f64> {
        self.read(Sensor::Heading, |r| r.heading)
    }

    fn width(&self) -> ActuatorResult<f64> {
        self.read(Sensor::Width, |r| r.width)
    }

    fn height(&self) -> ActuatorResult<f64> {
        self.read(Sensor::Height, |r| r.height)
    }

    fn velocity(&self) -> ActuatorResult<f64> {
        self.read(Sensor::Velocity, |r| r.velocity)
    }

    fn x(&self) -> ActuatorResult<f64> {
        self.read(Sensor::X, |r| r.x)
    }

    fn y(&self) -> ActuatorResult<f64> {
        self.read(Sensor::Y, |r| r.y)
    }

    fn name(&self) -> ActuatorResult<String> {
        self.read(Sensor::Name, |r| r.name.clone())
    }

    fn num_rounds(&self) -> ActuatorResult<u32> {
        self.read(Sensor::NumRounds, |r| r.num_rounds)
    }

    fn others(&self) -> ActuatorResult<u32> {
        self.read(Sensor::Others, |r| r.others)
    }

    fn round_num(&self) -> ActuatorResult<u32> {
        self.read(Sensor::RoundNum, |r| r.round_num)
    }
}
