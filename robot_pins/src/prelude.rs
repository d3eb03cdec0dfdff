//! Prelude module for common re-exports.
//!
//! ```rust
//! use robot_pins::prelude::*;
//! ```

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{ConfigError, ConfigLoader, LogLevel, SharedConfig};

// ─── Board Constants ────────────────────────────────────────────────
pub use crate::consts::{ENCODER_SENSOR_COUNT, QTR_SENSOR_COUNT};

// ─── Pins ───────────────────────────────────────────────────────────
pub use crate::pins::group::{OverrideFlags, PinGroup};
pub use crate::pins::pin::{Pin, PinKind};
pub use crate::pins::registry::{PinBinding, PinMapError, PinOverlap, PinRegistry};
pub use crate::pins::role::{PinMode, PinRole};
pub use crate::pins::table::{MotorPins, PinConfig, PinTable, QtrPins, RelayPins, TaskPins};
