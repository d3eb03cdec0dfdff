//! Resolved pin constants for this build.
//!
//! These are what the motor driver, relay controller, task sensor suite
//! and line follower read. Each group comes from the override table when
//! its `overwrite-*-pins` feature is on, else from the board default.

use super::pin::Pin;
use super::table::PinConfig;
use crate::consts::{ENCODER_SENSOR_COUNT, QTR_SENSOR_COUNT};

const ACTIVE: PinConfig = PinConfig::ACTIVE;

// ─── Motor ──────────────────────────────────────────────────────────

/// (PWM) Left motor PWM speed control.
pub const LEFT_PWM_PIN: Pin = ACTIVE.motor.left_pwm;
/// (DIG) Left motor direction control.
pub const LEFT_DIR_PIN: Pin = ACTIVE.motor.left_dir;
/// (DIG) Left motor enable control.
pub const LEFT_EN_PIN: Pin = ACTIVE.motor.left_en;
/// (PWM) Right motor PWM speed control.
pub const RIGHT_PWM_PIN: Pin = ACTIVE.motor.right_pwm;
/// (DIG) Right motor direction control.
pub const RIGHT_DIR_PIN: Pin = ACTIVE.motor.right_dir;
/// (DIG) Right motor enable control.
pub const RIGHT_EN_PIN: Pin = ACTIVE.motor.right_en;

// ─── Relay ──────────────────────────────────────────────────────────

pub const RELAY_K1_PIN: Pin = ACTIVE.relay.k1;
pub const RELAY_K2_PIN: Pin = ACTIVE.relay.k2;

// ─── Task sensors ───────────────────────────────────────────────────

/// (DIG) Physical hit switch.
pub const HIT_SWITCH_PIN: Pin = ACTIVE.task.hit_switch;
/// (ANA) Samples the capacitor voltage.
pub const PIN_CR1: Pin = ACTIVE.task.cr1;
/// (DIG) Discharges the capacitor.
pub const PIN_CR2: Pin = ACTIVE.task.cr2;
/// (DIG) Charges the capacitor.
pub const PIN_CR3: Pin = ACTIVE.task.cr3;
/// (ANA) Voltage measurement.
pub const PIN_VOLT: Pin = ACTIVE.task.volt;
/// (DIG) Temperature measurement.
pub const PIN_TEMP: Pin = ACTIVE.task.temp;
/// (DIG) MAX153 RD.
pub const PIN_RD: Pin = ACTIVE.task.rd;
/// (DIG) MAX153 INT.
pub const PIN_INT: Pin = ACTIVE.task.int;
/// (DIG) MAX153 CS.
pub const PIN_CS: Pin = ACTIVE.task.cs;

// ─── QTR ────────────────────────────────────────────────────────────

/// Main line sensor, left to right.
pub const F_SENSOR_PINS: [Pin; QTR_SENSOR_COUNT] = ACTIVE.qtr.front;
/// Left encoder sensor.
pub const L_ENCODER_PINS: [Pin; ENCODER_SENSOR_COUNT] = ACTIVE.qtr.left_encoder;
/// Right encoder sensor.
pub const R_ENCODER_PINS: [Pin; ENCODER_SENSOR_COUNT] = ACTIVE.qtr.right_encoder;
