//! Pin role types.
//!
//! `PinRole` names what a pin is used for. Consumers never see pin
//! numbers, only roles (through the flat constants in [`crate::pins::active`]).
//! Each role belongs to exactly one [`PinGroup`] and has an expected
//! electrical usage ([`PinMode`]).

use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use super::group::PinGroup;
use crate::consts::{ENCODER_SENSOR_COUNT, QTR_SENSOR_COUNT};

// ─── PinMode ────────────────────────────────────────────────────────

/// Expected electrical usage of a pin role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PinMode {
    /// Timer-driven PWM output.
    Pwm,
    DigitalOut,
    DigitalIn,
    /// Direction switched at run time (QTR RC sensors, 1-wire bus).
    DigitalIo,
    /// Read through the ADC. Must be an analog pin.
    AnalogIn,
}

impl fmt::Display for PinMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pwm => write!(f, "pwm"),
            Self::DigitalOut => write!(f, "digital out"),
            Self::DigitalIn => write!(f, "digital in"),
            Self::DigitalIo => write!(f, "digital io"),
            Self::AnalogIn => write!(f, "analog in"),
        }
    }
}

// ─── PinRole ────────────────────────────────────────────────────────

/// Symbolic hardware role of a pin.
///
/// Array roles carry their 0-based position; for the line sensor the
/// position is the physical left-to-right element index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PinRole {
    // ── Motor ───────────────────────
    LeftPwm,
    LeftDir,
    LeftEn,
    RightPwm,
    RightDir,
    RightEn,

    // ── Relay ───────────────────────
    RelayK1,
    RelayK2,

    // ── Task sensors ────────────────
    HitSwitch,
    /// Capacitance sensor: samples the capacitor voltage.
    Cr1,
    /// Capacitance sensor: discharges the capacitor.
    Cr2,
    /// Capacitance sensor: charges the capacitor.
    Cr3,
    Volt,
    Temp,
    /// MAX153 waveform ADC read strobe.
    WaveRd,
    /// MAX153 conversion-done interrupt.
    WaveInt,
    /// MAX153 chip select.
    WaveCs,

    // ── Line sensor (QTR) ───────────
    LineSensor(u8),
    LeftEncoder(u8),
    RightEncoder(u8),
}

impl PinRole {
    /// Group the role belongs to.
    pub const fn group(&self) -> PinGroup {
        match self {
            Self::LeftPwm
            | Self::LeftDir
            | Self::LeftEn
            | Self::RightPwm
            | Self::RightDir
            | Self::RightEn => PinGroup::Motor,
            Self::RelayK1 | Self::RelayK2 => PinGroup::Relay,
            Self::HitSwitch
            | Self::Cr1
            | Self::Cr2
            | Self::Cr3
            | Self::Volt
            | Self::Temp
            | Self::WaveRd
            | Self::WaveInt
            | Self::WaveCs => PinGroup::Task,
            Self::LineSensor(_) | Self::LeftEncoder(_) | Self::RightEncoder(_) => PinGroup::Qtr,
        }
    }

    /// Expected electrical usage.
    pub const fn mode(&self) -> PinMode {
        match self {
            Self::LeftPwm | Self::RightPwm => PinMode::Pwm,
            Self::LeftDir
            | Self::LeftEn
            | Self::RightDir
            | Self::RightEn
            | Self::RelayK1
            | Self::RelayK2
            | Self::Cr2
            | Self::Cr3
            | Self::WaveRd
            | Self::WaveCs => PinMode::DigitalOut,
            Self::HitSwitch | Self::WaveInt | Self::LeftEncoder(_) | Self::RightEncoder(_) => {
                PinMode::DigitalIn
            }
            Self::Temp | Self::LineSensor(_) => PinMode::DigitalIo,
            Self::Cr1 | Self::Volt => PinMode::AnalogIn,
        }
    }

    /// Array position for array roles, else `None`.
    pub const fn index(&self) -> Option<u8> {
        match self {
            Self::LineSensor(n) | Self::LeftEncoder(n) | Self::RightEncoder(n) => Some(*n),
            _ => None,
        }
    }

    /// Name of the constant consumers read for this role.
    pub fn constant_name(&self) -> String {
        match self {
            Self::LeftPwm => "LEFT_PWM_PIN".into(),
            Self::LeftDir => "LEFT_DIR_PIN".into(),
            Self::LeftEn => "LEFT_EN_PIN".into(),
            Self::RightPwm => "RIGHT_PWM_PIN".into(),
            Self::RightDir => "RIGHT_DIR_PIN".into(),
            Self::RightEn => "RIGHT_EN_PIN".into(),
            Self::RelayK1 => "RELAY_K1_PIN".into(),
            Self::RelayK2 => "RELAY_K2_PIN".into(),
            Self::HitSwitch => "HIT_SWITCH_PIN".into(),
            Self::Cr1 => "PIN_CR1".into(),
            Self::Cr2 => "PIN_CR2".into(),
            Self::Cr3 => "PIN_CR3".into(),
            Self::Volt => "PIN_VOLT".into(),
            Self::Temp => "PIN_TEMP".into(),
            Self::WaveRd => "PIN_RD".into(),
            Self::WaveInt => "PIN_INT".into(),
            Self::WaveCs => "PIN_CS".into(),
            Self::LineSensor(n) => format!("F_SENSOR_PINS[{n}]"),
            Self::LeftEncoder(n) => format!("L_ENCODER_PINS[{n}]"),
            Self::RightEncoder(n) => format!("R_ENCODER_PINS[{n}]"),
        }
    }

    /// Every role in table order: motor, relay, task, QTR.
    pub fn all() -> Vec<PinRole> {
        [PinGroup::Motor, PinGroup::Relay, PinGroup::Task, PinGroup::Qtr]
            .into_iter()
            .flat_map(|g| g.roles())
            .collect()
    }
}

// ─── Role string parser ─────────────────────────────────────────────

/// Split a role string into (prefix, optional_index).
///
/// `"LineSensor3"` → `("LineSensor", Some(3))`
/// `"RelayK1"`     → `("RelayK", Some(1))`
fn split_role_str(s: &str) -> (&str, Option<u8>) {
    let digit_start = s
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i);

    match digit_start {
        Some(i) if i > 0 => match s[i..].parse::<u8>() {
            Ok(n) => (&s[..i], Some(n)),
            Err(_) => (s, None),
        },
        _ => (s, None),
    }
}

impl FromStr for PinRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Scalar roles first; some of them end in a digit themselves.
        let scalar = match s {
            "LeftPwm" => Some(Self::LeftPwm),
            "LeftDir" => Some(Self::LeftDir),
            "LeftEn" => Some(Self::LeftEn),
            "RightPwm" => Some(Self::RightPwm),
            "RightDir" => Some(Self::RightDir),
            "RightEn" => Some(Self::RightEn),
            "RelayK1" => Some(Self::RelayK1),
            "RelayK2" => Some(Self::RelayK2),
            "HitSwitch" => Some(Self::HitSwitch),
            "Cr1" => Some(Self::Cr1),
            "Cr2" => Some(Self::Cr2),
            "Cr3" => Some(Self::Cr3),
            "Volt" => Some(Self::Volt),
            "Temp" => Some(Self::Temp),
            "WaveRd" => Some(Self::WaveRd),
            "WaveInt" => Some(Self::WaveInt),
            "WaveCs" => Some(Self::WaveCs),
            _ => None,
        };
        if let Some(role) = scalar {
            return Ok(role);
        }

        let (prefix, index) = split_role_str(s);
        let Some(n) = index else {
            return Err(format!("unknown pin role: {s:?}"));
        };
        let (role, len) = match prefix {
            "LineSensor" => (Self::LineSensor(n), QTR_SENSOR_COUNT),
            "LeftEncoder" => (Self::LeftEncoder(n), ENCODER_SENSOR_COUNT),
            "RightEncoder" => (Self::RightEncoder(n), ENCODER_SENSOR_COUNT),
            _ => return Err(format!("unknown pin role: {s:?}")),
        };
        if usize::from(n) >= len {
            return Err(format!("pin role {s:?} out of range (array has {len} entries)"));
        }
        Ok(role)
    }
}

impl TryFrom<String> for PinRole {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<PinRole> for String {
    fn from(role: PinRole) -> Self {
        role.to_string()
    }
}

impl fmt::Display for PinRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LeftPwm => write!(f, "LeftPwm"),
            Self::LeftDir => write!(f, "LeftDir"),
            Self::LeftEn => write!(f, "LeftEn"),
            Self::RightPwm => write!(f, "RightPwm"),
            Self::RightDir => write!(f, "RightDir"),
            Self::RightEn => write!(f, "RightEn"),
            Self::RelayK1 => write!(f, "RelayK1"),
            Self::RelayK2 => write!(f, "RelayK2"),
            Self::HitSwitch => write!(f, "HitSwitch"),
            Self::Cr1 => write!(f, "Cr1"),
            Self::Cr2 => write!(f, "Cr2"),
            Self::Cr3 => write!(f, "Cr3"),
            Self::Volt => write!(f, "Volt"),
            Self::Temp => write!(f, "Temp"),
            Self::WaveRd => write!(f, "WaveRd"),
            Self::WaveInt => write!(f, "WaveInt"),
            Self::WaveCs => write!(f, "WaveCs"),
            Self::LineSensor(n) => write!(f, "LineSensor{n}"),
            Self::LeftEncoder(n) => write!(f, "LeftEncoder{n}"),
            Self::RightEncoder(n) => write!(f, "RightEncoder{n}"),
        }
    }
}
