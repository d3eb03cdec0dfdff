//! Pin identifier type.
//!
//! `Pin` keeps the digital (`D5`) and analog (`A1`) namespaces apart.
//! On the Mega both map onto one physical line space where `An` is
//! `D(54+n)`; [`Pin::line`] exposes that number for overlap checks.

use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::consts::{ANALOG_LINE_BASE, ANALOG_PIN_COUNT, DIGITAL_PIN_COUNT, PWM_PIN_RANGES};

// ─── PinKind ────────────────────────────────────────────────────────

/// Pin namespace discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum PinKind {
    Digital = 0,
    Analog = 1,
}

impl fmt::Display for PinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digital => write!(f, "digital"),
            Self::Analog => write!(f, "analog"),
        }
    }
}

// ─── Pin ────────────────────────────────────────────────────────────

/// A physical I/O line on the controller.
///
/// Text form is `D<n>` or `A<n>`; a bare number is a digital pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawPin", into = "String")]
pub enum Pin {
    Digital(u8),
    Analog(u8),
}

impl Pin {
    /// Shorthand for `Pin::Digital(n)` usable in `const` tables.
    pub const fn d(n: u8) -> Self {
        Self::Digital(n)
    }

    /// Shorthand for `Pin::Analog(n)` usable in `const` tables.
    pub const fn a(n: u8) -> Self {
        Self::Analog(n)
    }

    /// Pin number within its own namespace (`A3` → 3).
    pub const fn number(self) -> u8 {
        match self {
            Self::Digital(n) | Self::Analog(n) => n,
        }
    }

    pub const fn kind(self) -> PinKind {
        match self {
            Self::Digital(_) => PinKind::Digital,
            Self::Analog(_) => PinKind::Analog,
        }
    }

    pub const fn is_analog(self) -> bool {
        matches!(self, Self::Analog(_))
    }

    /// Physical line number: digital pins map to themselves, `An` to `54 + n`.
    ///
    /// Only meaningful for pins where [`Pin::is_valid`] holds.
    pub const fn line(self) -> u8 {
        match self {
            Self::Digital(n) => n,
            Self::Analog(n) => ANALOG_LINE_BASE.saturating_add(n),
        }
    }

    /// True when the pin exists on the board.
    pub const fn is_valid(self) -> bool {
        match self {
            Self::Digital(n) => n < DIGITAL_PIN_COUNT,
            Self::Analog(n) => n < ANALOG_PIN_COUNT,
        }
    }

    /// True when the pin is driven by a hardware PWM timer.
    pub const fn is_pwm_capable(self) -> bool {
        let Self::Digital(n) = self else {
            return false;
        };
        let mut i = 0;
        while i < PWM_PIN_RANGES.len() {
            let (lo, hi) = PWM_PIN_RANGES[i];
            if n >= lo && n <= hi {
                return true;
            }
            i += 1;
        }
        false
    }

    /// True when both pins resolve to the same physical line.
    pub const fn same_line(self, other: Pin) -> bool {
        self.line() == other.line()
    }
}

/// True when every pin in `pins` exists on the board.
pub const fn all_valid(pins: &[Pin]) -> bool {
    let mut i = 0;
    while i < pins.len() {
        if !pins[i].is_valid() {
            return false;
        }
        i += 1;
    }
    true
}

/// True when no two pins in `pins` share a physical line.
pub const fn all_distinct(pins: &[Pin]) -> bool {
    let mut i = 0;
    while i < pins.len() {
        let mut j = i + 1;
        while j < pins.len() {
            if pins[i].same_line(pins[j]) {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digital(n) => write!(f, "D{n}"),
            Self::Analog(n) => write!(f, "A{n}"),
        }
    }
}

impl FromStr for Pin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (ctor, digits): (fn(u8) -> Pin, &str) = match s.as_bytes().first() {
            Some(b'D' | b'd') => (Pin::Digital, &s[1..]),
            Some(b'A' | b'a') => (Pin::Analog, &s[1..]),
            Some(c) if c.is_ascii_digit() => (Pin::Digital, s),
            _ => return Err(format!("unknown pin: {s:?}")),
        };
        digits
            .parse::<u8>()
            .map(ctor)
            .map_err(|_| format!("unknown pin: {s:?}, expected e.g. \"D5\" or \"A1\""))
    }
}

impl From<Pin> for String {
    fn from(pin: Pin) -> Self {
        pin.to_string()
    }
}

/// Wire form accepted when deserializing a [`Pin`]: `5` or `"A1"`.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum RawPin {
    Number(u8),
    Token(String),
}

impl TryFrom<RawPin> for Pin {
    type Error = String;

    fn try_from(raw: RawPin) -> Result<Self, Self::Error> {
        match raw {
            RawPin::Number(n) => Ok(Pin::Digital(n)),
            RawPin::Token(s) => s.parse(),
        }
    }
}
