//! Board-wide constants for the robot controller (ATmega2560, Mega pinout).
//!
//! Single source of truth for pin ranges and array sizes.
//! Imported by all modules, no duplication permitted.

/// Number of digital I/O lines (D0–D53).
pub const DIGITAL_PIN_COUNT: u8 = 54;

/// Number of analog input lines (A0–A15).
pub const ANALOG_PIN_COUNT: u8 = 16;

/// Physical line number of A0. Analog line `An` is digital line `54 + n`.
pub const ANALOG_LINE_BASE: u8 = DIGITAL_PIN_COUNT;

/// Total number of physical I/O lines.
pub const PHYSICAL_LINE_COUNT: usize = DIGITAL_PIN_COUNT as usize + ANALOG_PIN_COUNT as usize;

/// Digital lines driven by a hardware timer (PWM capable).
///
/// D2–D13 and D44–D46 on the Mega.
pub const PWM_PIN_RANGES: [(u8, u8); 2] = [(2, 13), (44, 46)];

/// Number of reflectance elements in the front QTR line sensor.
pub const QTR_SENSOR_COUNT: usize = 14;

/// Number of sensor elements per wheel encoder.
pub const ENCODER_SENSOR_COUNT: usize = 1;

/// Default path for the `robot_pinctl` tool configuration.
pub const DEFAULT_CONFIG_PATH: &str = "pinctl.toml";
