//! Pin table selection tests.
//!
//! Exercise every override combination through `PinConfig::resolve`, so
//! the results hold whatever feature set the crate is built with.

use robot_pins::config::{ConfigError, ConfigLoader};
use robot_pins::pins::{defaults, overrides};
use robot_pins::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Every subset of the four override flags.
fn all_flag_sets() -> impl Iterator<Item = OverrideFlags> {
    (0u8..16).map(OverrideFlags::from_bits_truncate)
}

#[test]
fn each_group_follows_its_own_flag() {
    for flags in all_flag_sets() {
        let cfg = PinConfig::resolve(flags);

        let motor = if flags.contains(OverrideFlags::MOTOR) {
            overrides::MOTOR
        } else {
            defaults::MOTOR
        };
        let relay = if flags.contains(OverrideFlags::RELAY) {
            overrides::RELAY
        } else {
            defaults::RELAY
        };
        let task = if flags.contains(OverrideFlags::TASK) {
            overrides::TASK
        } else {
            defaults::TASK
        };
        let qtr = if flags.contains(OverrideFlags::QTR) {
            overrides::QTR
        } else {
            defaults::QTR
        };

        assert_eq!(cfg.motor, motor, "flags {flags:?}");
        assert_eq!(cfg.relay, relay, "flags {flags:?}");
        assert_eq!(cfg.task, task, "flags {flags:?}");
        assert_eq!(cfg.qtr, qtr, "flags {flags:?}");
    }
}

#[test]
fn toggling_one_flag_leaves_other_groups_alone() {
    for flags in all_flag_sets() {
        let before = PinConfig::resolve(flags);
        for group in PinGroup::ALL {
            let after = PinConfig::resolve(flags ^ group.flag());
            for other in PinGroup::ALL.into_iter().filter(|g| *g != group) {
                assert_eq!(
                    before.group(other),
                    after.group(other),
                    "toggling {group} changed {other} (flags {flags:?})"
                );
            }
            assert_ne!(before.group(group), after.group(group));
        }
    }
}

#[test]
fn override_values_are_literal() {
    let cfg = PinConfig::OVERRIDE;

    assert_eq!(cfg.motor.left_pwm, Pin::d(5));
    assert_eq!(cfg.motor.left_dir, Pin::d(38));
    assert_eq!(cfg.motor.left_en, Pin::d(36));
    assert_eq!(cfg.motor.right_pwm, Pin::d(2));
    assert_eq!(cfg.motor.right_dir, Pin::d(3));
    assert_eq!(cfg.motor.right_en, Pin::d(4));

    assert_eq!(cfg.relay.k1, Pin::d(52));
    assert_eq!(cfg.relay.k2, Pin::d(53));

    assert_eq!(cfg.task.hit_switch, Pin::d(40));
    assert_eq!(cfg.task.cr1, Pin::a(1));
    assert_eq!(cfg.task.cr2, Pin::a(2));
    assert_eq!(cfg.task.cr3, Pin::a(3));
    assert_eq!(cfg.task.volt, Pin::a(0));
    assert_eq!(cfg.task.temp, Pin::d(11));
    assert_eq!(cfg.task.rd, Pin::d(8));
    assert_eq!(cfg.task.int, Pin::d(9));
    assert_eq!(cfg.task.cs, Pin::d(10));

    let front: Vec<u8> = cfg.qtr.front.iter().map(|p| p.number()).collect();
    assert_eq!(front, vec![12, 11, 10, 9, 8, 7, 6, 33, 35, 37, 39, 41, 43, 45]);
    assert_eq!(cfg.qtr.left_encoder, [Pin::d(46)]);
    assert_eq!(cfg.qtr.right_encoder, [Pin::d(48)]);
}

#[test]
fn line_sensor_arrays_have_fixed_shape() {
    for cfg in [PinConfig::DEFAULT, PinConfig::OVERRIDE, PinConfig::ACTIVE] {
        assert_eq!(cfg.qtr.front.len(), 14);
        assert!(cfg.qtr.front.iter().all(|p| p.kind() == PinKind::Digital && p.is_valid()));
        assert_eq!(cfg.qtr.left_encoder.len(), 1);
        assert_eq!(cfg.qtr.right_encoder.len(), 1);
    }
}

#[test]
fn no_group_reuses_a_line() {
    for flags in all_flag_sets() {
        let cfg = PinConfig::resolve(flags);
        assert!(cfg.is_in_range());
        assert!(cfg.groups_are_distinct());
        PinRegistry::from_config(&cfg).unwrap();
    }
}

#[test]
fn task_and_qtr_overrides_share_d8_to_d11() {
    let reg = PinRegistry::from_config(&PinConfig::OVERRIDE).unwrap();
    let shared: Vec<u8> = reg.overlaps().iter().map(|o| o.pin.number()).collect();
    assert_eq!(shared, vec![8, 9, 10, 11]);
    for overlap in reg.overlaps() {
        assert_eq!(overlap.groups(), vec![PinGroup::Task, PinGroup::Qtr]);
    }
}

#[test]
fn only_task_and_qtr_overrides_together_share_lines() {
    let both = OverrideFlags::TASK | OverrideFlags::QTR;
    for flags in all_flag_sets() {
        let reg = PinRegistry::from_config(&PinConfig::resolve(flags)).unwrap();
        let shared: Vec<Pin> = reg.overlaps().iter().map(|o| o.pin).collect();
        if flags.contains(both) {
            assert_eq!(
                shared,
                vec![Pin::d(8), Pin::d(9), Pin::d(10), Pin::d(11)],
                "flags {flags:?}"
            );
        } else {
            assert!(shared.is_empty(), "flags {flags:?}: {shared:?}");
        }
    }
}

#[test]
fn default_lines_are_untouched_by_overrides() {
    let override_lines: Vec<u8> = PinConfig::OVERRIDE
        .assignments()
        .map(|(_, pin)| pin.line())
        .collect();
    for (role, pin) in PinConfig::DEFAULT.assignments() {
        assert!(
            !override_lines.contains(&pin.line()),
            "default {} on {pin} is also an override line",
            role.constant_name()
        );
    }
}

#[test]
fn active_constants_match_build_flags() {
    let expected = PinConfig::resolve(OverrideFlags::BUILD);
    assert_eq!(robot_pins::LEFT_PWM_PIN, expected.motor.left_pwm);
    assert_eq!(robot_pins::RIGHT_EN_PIN, expected.motor.right_en);
    assert_eq!(robot_pins::RELAY_K1_PIN, expected.relay.k1);
    assert_eq!(robot_pins::PIN_VOLT, expected.task.volt);
    assert_eq!(robot_pins::F_SENSOR_PINS, expected.qtr.front);
    assert_eq!(robot_pins::L_ENCODER_PINS, expected.qtr.left_encoder);
    assert_eq!(robot_pins::R_ENCODER_PINS, expected.qtr.right_encoder);
}

#[cfg(all(
    feature = "overwrite-motor-pins",
    feature = "overwrite-relay-pins",
    feature = "overwrite-task-pins",
    feature = "overwrite-qtr-pins"
))]
#[test]
fn default_features_select_every_override() {
    assert_eq!(OverrideFlags::BUILD, OverrideFlags::all());
    assert_eq!(PinConfig::ACTIVE, PinConfig::OVERRIDE);
    assert_eq!(robot_pins::LEFT_PWM_PIN, Pin::d(5));
}

#[test]
fn candidate_table_loads_from_toml_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pins.toml");
    fs::write(&path, toml::to_string(&PinConfig::DEFAULT).unwrap()).unwrap();

    let loaded = PinConfig::load(&path).unwrap();
    assert_eq!(loaded, PinConfig::DEFAULT);
}

#[test]
fn candidate_table_with_unknown_field_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pins.toml");
    let mut text = toml::to_string(&PinConfig::OVERRIDE).unwrap();
    text.push_str("\n[buzzer]\npin = 7\n");
    fs::write(&path, text).unwrap();

    assert!(matches!(PinConfig::load(&path), Err(ConfigError::ParseError(_))));
}

#[test]
fn candidate_table_conflict_is_reported_not_fixed() {
    let text = toml::to_string(&PinConfig::OVERRIDE)
        .unwrap()
        .replace("k2 = \"D53\"", "k2 = \"D52\"");
    let cfg = PinConfig::from_toml(&text).unwrap();
    assert_eq!(cfg.relay.k2, Pin::d(52));

    let err = PinRegistry::from_config(&cfg).unwrap_err();
    assert!(matches!(err, PinMapError::PinDuplicate { group: PinGroup::Relay, .. }));
}
