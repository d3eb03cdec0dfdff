//! Board default pin table.
//!
//! Used by every group whose `overwrite-*-pins` feature is off. Every line
//! here is one the override table leaves free, so any mix of overridden and
//! default groups shares no line except where both override groups do.
//! Motors sit on the D22–D25 header block with PWM on D44/D13, encoders on
//! the external interrupt lines D18/D19, and the task block on A8–A15.

use static_assertions::const_assert;

use super::pin::{all_distinct, all_valid, Pin};
use super::table::{MotorPins, QtrPins, RelayPins, TaskPins};

pub const MOTOR: MotorPins = MotorPins {
    left_pwm: Pin::d(44),
    left_dir: Pin::d(22),
    left_en: Pin::d(24),
    right_pwm: Pin::d(13),
    right_dir: Pin::d(23),
    right_en: Pin::d(25),
};

pub const RELAY: RelayPins = RelayPins {
    k1: Pin::d(26),
    k2: Pin::d(27),
};

pub const TASK: TaskPins = TaskPins {
    hit_switch: Pin::d(28),
    cr1: Pin::a(8),
    cr2: Pin::a(9),
    cr3: Pin::a(10),
    volt: Pin::a(11),
    temp: Pin::a(12),
    rd: Pin::a(13),
    int: Pin::a(14),
    cs: Pin::a(15),
};

pub const QTR: QtrPins = QtrPins {
    front: [
        Pin::d(14),
        Pin::d(15),
        Pin::d(16),
        Pin::d(17),
        Pin::d(20),
        Pin::d(21),
        Pin::d(29),
        Pin::d(30),
        Pin::d(31),
        Pin::d(32),
        Pin::d(34),
        Pin::d(42),
        Pin::d(47),
        Pin::d(49),
    ],
    left_encoder: [Pin::d(18)],
    right_encoder: [Pin::d(19)],
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
