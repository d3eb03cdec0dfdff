//! Pin tables: one struct per group plus the combined [`PinConfig`].
//!
//! Tables are plain `const` data. A group is swapped as a whole by
//! [`PinConfig::resolve`]; there is no per-role override.

use serde::{Deserialize, Serialize};

use super::group::{OverrideFlags, PinGroup};
use super::pin::{all_distinct, all_valid, Pin};
use super::role::PinRole;
use super::{defaults, overrides};
use crate::consts::{ENCODER_SENSOR_COUNT, QTR_SENSOR_COUNT};

/// A pin group table that can enumerate its role assignments.
pub trait PinTable {
    /// Group this table fills.
    const GROUP: PinGroup;

    /// `(role, pin)` pairs in table order.
    fn assignments(&self) -> Vec<(PinRole, Pin)>;
}

// ─── Motor ──────────────────────────────────────────────────────────

/// Drive motor pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MotorPins {
    /// Left motor PWM speed control.
    pub left_pwm: Pin,
    /// Left motor direction control.
    pub left_dir: Pin,
    /// Left motor enable.
    pub left_en: Pin,
    /// Right motor PWM speed control.
    pub right_pwm: Pin,
    /// Right motor direction control.
    pub right_dir: Pin,
    /// Right motor enable.
    pub right_en: Pin,
}

impl MotorPins {
    pub const fn pins(&self) -> [Pin; 6] {
        [
            self.left_pwm,
            self.left_dir,
            self.left_en,
            self.right_pwm,
            self.right_dir,
            self.right_en,
        ]
    }
}

impl PinTable for MotorPins {
    const GROUP: PinGroup = PinGroup::Motor;

    fn assignments(&self) -> Vec<(PinRole, Pin)> {
        Self::GROUP.roles().into_iter().zip(self.pins()).collect()
    }
}

// ─── Relay ──────────────────────────────────────────────────────────

/// Relay coil driver pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelayPins {
    pub k1: Pin,
    pub k2: Pin,
}

impl RelayPins {
    pub const fn pins(&self) -> [Pin; 2] {
        [self.k1, self.k2]
    }
}

impl PinTable for RelayPins {
    const GROUP: PinGroup = PinGroup::Relay;

    fn assignments(&self) -> Vec<(PinRole, Pin)> {
        Self::GROUP.roles().into_iter().zip(self.pins()).collect()
    }
}

// ─── Task sensors ───────────────────────────────────────────────────

/// Task sensor suite pins.
///
/// `rd`, `int` and `cs` drive a MAX153 waveform ADC whose data lines
/// sit on PORTB (D0–D7 are used as well but not assigned by role).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskPins {
    /// Physical hit switch.
    pub hit_switch: Pin,
    /// Capacitance sensor: samples the cap voltage (analog).
    pub cr1: Pin,
    /// Capacitance sensor: discharges the capacitor (digital).
    pub cr2: Pin,
    /// Capacitance sensor: charges the capacitor (digital).
    pub cr3: Pin,
    /// Voltage measurement (analog).
    pub volt: Pin,
    /// Temperature sensor.
    pub temp: Pin,
    /// MAX153 RD.
    pub rd: Pin,
    /// MAX153 INT.
    pub int: Pin,
    /// MAX153 CS.
    pub cs: Pin,
}

impl TaskPins {
    pub const fn pins(&self) -> [Pin; 9] {
        [
            self.hit_switch,
            self.cr1,
            self.cr2,
            self.cr3,
            self.volt,
            self.temp,
            self.rd,
            self.int,
            self.cs,
        ]
    }
}

impl PinTable for TaskPins {
    const GROUP: PinGroup = PinGroup::Task;

    fn assignments(&self) -> Vec<(PinRole, Pin)> {
        Self::GROUP.roles().into_iter().zip(self.pins()).collect()
    }
}

// ─── QTR ────────────────────────────────────────────────────────────

/// Line-following sensor pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QtrPins {
    /// Front reflectance array, left to right. Index = physical position.
    pub front: [Pin; QTR_SENSOR_COUNT],
    /// Left wheel encoder sensor.
    pub left_encoder: [Pin; ENCODER_SENSOR_COUNT],
    /// Right wheel encoder sensor.
    pub right_encoder: [Pin; ENCODER_SENSOR_COUNT],
}

/// Pins in the QTR group: front array plus both encoders.
pub const QTR_PIN_COUNT: usize = QTR_SENSOR_COUNT + 2 * ENCODER_SENSOR_COUNT;

impl QtrPins {
    pub const fn pins(&self) -> [Pin; QTR_PIN_COUNT] {
        let mut out = [Pin::Digital(0); QTR_PIN_COUNT];
        let mut i = 0;
        while i < QTR_SENSOR_COUNT {
            out[i] = self.front[i];
            i += 1;
        }
        let mut j = 0;
        while j < ENCODER_SENSOR_COUNT {
            out[QTR_SENSOR_COUNT + j] = self.left_encoder[j];
            out[QTR_SENSOR_COUNT + ENCODER_SENSOR_COUNT + j] = self.right_encoder[j];
            j += 1;
        }
        out
    }
}

impl PinTable for QtrPins {
    const GROUP: PinGroup = PinGroup::Qtr;

    fn assignments(&self) -> Vec<(PinRole, Pin)> {
        Self::GROUP.roles().into_iter().zip(self.pins()).collect()
    }
}

// ─── PinConfig ──────────────────────────────────────────────────────

/// The complete pin map: one table per group.
///
/// # TOML Example
///
/// ```toml
/// [motor]
/// left_pwm = 5
/// left_dir = "D38"
/// # ...
///
/// [task]
/// cr1 = "A1"
/// # ...
///
/// [qtr]
/// front = [12, 11, 10, 9, 8, 7, 6, 33, 35, 37, 39, 41, 43, 45]
/// left_encoder = [46]
/// right_encoder = [48]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PinConfig {
    pub motor: MotorPins,
    pub relay: RelayPins,
    pub task: TaskPins,
    pub qtr: QtrPins,
}

impl PinConfig {
    /// Board default for every group.
    pub const DEFAULT: Self = Self::resolve(OverrideFlags::empty());

    /// Override values for every group.
    pub const OVERRIDE: Self = Self::resolve(OverrideFlags::all());

    /// The table this build resolves to.
    pub const ACTIVE: Self = Self::resolve(OverrideFlags::BUILD);

    /// Pick each group from the override or the default table.
    pub const fn resolve(flags: OverrideFlags) -> Self {
        Self {
            motor: if flags.contains(OverrideFlags::MOTOR) {
                overrides::MOTOR
            } else {
                defaults::MOTOR
            },
            relay: if flags.contains(OverrideFlags::RELAY) {
                overrides::RELAY
            } else {
                defaults::RELAY
            },
            task: if flags.contains(OverrideFlags::TASK) {
                overrides::TASK
            } else {
                defaults::TASK
            },
            qtr: if flags.contains(OverrideFlags::QTR) {
                overrides::QTR
            } else {
                defaults::QTR
            },
        }
    }

    /// `(role, pin)` pairs of one group.
    pub fn group(&self, group: PinGroup) -> Vec<(PinRole, Pin)> {
        match group {
            PinGroup::Motor => self.motor.assignments(),
            PinGroup::Relay => self.relay.assignments(),
            PinGroup::Task => self.task.assignments(),
            PinGroup::Qtr => self.qtr.assignments(),
        }
    }

    /// Iterate all `(role, pin)` pairs in table order.
    pub fn assignments(&self) -> impl Iterator<Item = (PinRole, Pin)> + '_ {
        PinGroup::ALL.into_iter().flat_map(move |g| self.group(g))
    }

    /// Pin assigned to `role`, or `None` for an array index past the end.
    pub fn pin(&self, role: PinRole) -> Option<Pin> {
        let pin = match role {
            PinRole::LeftPwm => self.motor.left_pwm,
            PinRole::LeftDir => self.motor.left_dir,
            PinRole::LeftEn => self.motor.left_en,
            PinRole::RightPwm => self.motor.right_pwm,
            PinRole::RightDir => self.motor.right_dir,
            PinRole::RightEn => self.motor.right_en,
            PinRole::RelayK1 => self.relay.k1,
            PinRole::RelayK2 => self.relay.k2,
            PinRole::HitSwitch => self.task.hit_switch,
            PinRole::Cr1 => self.task.cr1,
            PinRole::Cr2 => self.task.cr2,
            PinRole::Cr3 => self.task.cr3,
            PinRole::Volt => self.task.volt,
            PinRole::Temp => self.task.temp,
            PinRole::WaveRd => self.task.rd,
            PinRole::WaveInt => self.task.int,
            PinRole::WaveCs => self.task.cs,
            PinRole::LineSensor(n) => return self.qtr.front.get(usize::from(n)).copied(),
            PinRole::LeftEncoder(n) => return self.qtr.left_encoder.get(usize::from(n)).copied(),
            PinRole::RightEncoder(n) => {
                return self.qtr.right_encoder.get(usize::from(n)).copied();
            }
        };
        Some(pin)
    }

    /// Every pin exists on the board.
    pub const fn is_in_range(&self) -> bool {
        all_valid(&self.motor.pins())
            && all_valid(&self.relay.pins())
            && all_valid(&self.task.pins())
            && all_valid(&self.qtr.pins())
    }

    /// No two roles in the same group share a physical line.
    pub const fn groups_are_distinct(&self) -> bool {
        all_distinct(&self.motor.pins())
            && all_distinct(&self.relay.pins())
            && all_distinct(&self.task.pins())
            && all_distinct(&self.qtr.pins())
    }
}

impl Default for PinConfig {
    fn default() -> Self {
        Self::ACTIVE
    }
}
