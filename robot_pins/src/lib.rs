//! Robot pin configuration
//!
//! Compile-time pin table for the line-following robot controller.
//! Subsystems read named constants and never hard-code pin numbers.
//!
//! # Module Structure
//!
//! - [`pins`] - Pin type, roles, default/override tables, resolved constants, registry
//! - [`config`] - TOML configuration loading for the tooling
//! - [`consts`] - Board limits
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Override features
//!
//! Each group resolves to its override values when the matching feature is
//! enabled (all four are on by default):
//!
//! | feature | group |
//! |---|---|
//! | `overwrite-motor-pins` | motor |
//! | `overwrite-relay-pins` | relay |
//! | `overwrite-task-pins` | task sensors |
//! | `overwrite-qtr-pins` | QTR line sensor + encoders |
//!
//! # Usage
//!
//! ```rust
//! use robot_pins::{LEFT_PWM_PIN, F_SENSOR_PINS};
//!
//! let pwm = LEFT_PWM_PIN.number();
//! assert_eq!(F_SENSOR_PINS.len(), 14);
//! # let _ = pwm;
//! ```

pub mod config;
pub mod consts;
pub mod pins;
pub mod prelude;

pub use pins::active::*;
