//! Pin groups and their build-time override flags.

use bitflags::bitflags;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use super::role::PinRole;
use crate::consts::{ENCODER_SENSOR_COUNT, QTR_SENSOR_COUNT};

// ─── PinGroup ───────────────────────────────────────────────────────

/// One of the four independently overridable pin groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PinGroup {
    Motor,
    Relay,
    Task,
    Qtr,
}

impl PinGroup {
    pub const ALL: [PinGroup; 4] = [Self::Motor, Self::Relay, Self::Task, Self::Qtr];

    /// Override flag controlling this group.
    pub const fn flag(self) -> OverrideFlags {
        match self {
            Self::Motor => OverrideFlags::MOTOR,
            Self::Relay => OverrideFlags::RELAY,
            Self::Task => OverrideFlags::TASK,
            Self::Qtr => OverrideFlags::QTR,
        }
    }

    /// Cargo feature that switches this group to its override values.
    pub const fn feature(self) -> &'static str {
        match self {
            Self::Motor => "overwrite-motor-pins",
            Self::Relay => "overwrite-relay-pins",
            Self::Task => "overwrite-task-pins",
            Self::Qtr => "overwrite-qtr-pins",
        }
    }

    /// Roles of this group in table order.
    pub fn roles(self) -> Vec<PinRole> {
        match self {
            Self::Motor => vec![
                PinRole::LeftPwm,
                PinRole::LeftDir,
                PinRole::LeftEn,
                PinRole::RightPwm,
                PinRole::RightDir,
                PinRole::RightEn,
            ],
            Self::Relay => vec![PinRole::RelayK1, PinRole::RelayK2],
            Self::Task => vec![
                PinRole::HitSwitch,
                PinRole::Cr1,
                PinRole::Cr2,
                PinRole::Cr3,
                PinRole::Volt,
                PinRole::Temp,
                PinRole::WaveRd,
                PinRole::WaveInt,
                PinRole::WaveCs,
            ],
            Self::Qtr => {
                let sensors = (0..QTR_SENSOR_COUNT as u8).map(PinRole::LineSensor);
                let left = (0..ENCODER_SENSOR_COUNT as u8).map(PinRole::LeftEncoder);
                let right = (0..ENCODER_SENSOR_COUNT as u8).map(PinRole::RightEncoder);
                sensors.chain(left).chain(right).collect()
            }
        }
    }
}

impl fmt::Display for PinGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Motor => write!(f, "motor"),
            Self::Relay => write!(f, "relay"),
            Self::Task => write!(f, "task"),
            Self::Qtr => write!(f, "qtr"),
        }
    }
}

impl FromStr for PinGroup {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "motor" => Ok(Self::Motor),
            "relay" => Ok(Self::Relay),
            "task" => Ok(Self::Task),
            "qtr" => Ok(Self::Qtr),
            _ => Err(format!("unknown PinGroup: {s:?}")),
        }
    }
}

// ─── OverrideFlags ──────────────────────────────────────────────────

bitflags! {
    /// Groups resolving to the override table instead of the board default.
    ///
    /// Fixed at build time; see [`OverrideFlags::BUILD`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct OverrideFlags: u8 {
        /// `overwrite-motor-pins`
        const MOTOR = 0x01;
        /// `overwrite-relay-pins`
        const RELAY = 0x02;
        /// `overwrite-task-pins`
        const TASK  = 0x04;
        /// `overwrite-qtr-pins`
        const QTR   = 0x08;
    }
}

impl OverrideFlags {
    /// Flags selected by the Cargo features of this build.
    pub const BUILD: Self = Self::from_bits_truncate(
        (if cfg!(feature = "overwrite-motor-pins") { Self::MOTOR.bits() } else { 0 })
            | (if cfg!(feature = "overwrite-relay-pins") { Self::RELAY.bits() } else { 0 })
            | (if cfg!(feature = "overwrite-task-pins") { Self::TASK.bits() } else { 0 })
            | (if cfg!(feature = "overwrite-qtr-pins") { Self::QTR.bits() } else { 0 }),
    );

    /// Returns true if `group` uses its override values.
    #[inline]
    pub const fn overrides(&self, group: PinGroup) -> bool {
        self.contains(group.flag())
    }
}

impl Default for OverrideFlags {
    fn default() -> Self {
        Self::empty()
    }
}
