//! Override pin table.
//!
//! Enabled per group by the `overwrite-*-pins` Cargo features.
//!
//! Pins D8–D11 appear both in [`TASK`] (`temp`, `rd`, `int`, `cs`) and in
//! [`QTR`]`.front`. Kept as wired; the registry reports the overlap and it
//! is left to hardware review whether the lines are time-multiplexed.

use static_assertions::const_assert;

use super::pin::{all_distinct, all_valid, Pin};
use super::table::{MotorPins, QtrPins, RelayPins, TaskPins};

pub const MOTOR: MotorPins = MotorPins {
    left_pwm: Pin::d(5),
    left_dir: Pin::d(38),
    left_en: Pin::d(36),
    right_pwm: Pin::d(2),
    right_dir: Pin::d(3),
    right_en: Pin::d(4),
};

pub const RELAY: RelayPins = RelayPins {
    k1: Pin::d(52),
    k2: Pin::d(53),
};

pub const TASK: TaskPins = TaskPins {
    hit_switch: Pin::d(40),
    cr1: Pin::a(1),
    cr2: Pin::a(2),
    cr3: Pin::a(3),
    volt: Pin::a(0),
    temp: Pin::d(11),
    // MAX153 data bus is D0–D7 (PORTB).
    rd: Pin::d(8),
    int: Pin::d(9),
    cs: Pin::d(10),
};

pub const QTR: QtrPins = QtrPins {
    front: [
        Pin::d(12),
        Pin::d(11),
        Pin::d(10),
        Pin::d(9),
        Pin::d(8),
        Pin::d(7),
        Pin::d(6),
        Pin::d(33),
        Pin::d(35),
        Pin::d(37),
        Pin::d(39),
        Pin::d(41),
        Pin::d(43),
        Pin::d(45),
    ],
    left_encoder: [Pin::d(46)],
    right_encoder: [Pin::d(48)],
};

const_assert!(all_valid(&MOTOR.pins()));
const_assert!(all_valid(&RELAY.pins()));
const_assert!(all_valid(&TASK.pins()));
const_assert!(all_valid(&QTR.pins()));

const_assert!(all_distinct(&MOTOR.pins()));
const_assert!(all_distinct(&RELAY.pins()));
const_assert!(all_distinct(&TASK.pins()));
const_assert!(all_distinct(&QTR.pins()));

const_assert!(MOTOR.left_pwm.is_pwm_capable() && MOTOR.right_pwm.is_pwm_capable());
const_assert!(TASK.cr1.is_analog() && TASK.volt.is_analog());
