//! Pin Registry: role-based lookup and validation over a [`PinConfig`].
//!
//! Built from a resolved table. Immutable after construction.
//! The table itself is never corrected here: intra-group conflicts are
//! errors, lines shared across groups are collected as [`PinOverlap`]s
//! for hardware review.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use thiserror::Error;
use tracing::{debug, warn};

use super::group::PinGroup;
use super::pin::Pin;
use super::role::{PinMode, PinRole};
use super::table::PinConfig;

// ─── Error Types ────────────────────────────────────────────────────

/// Pin map validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PinMapError {
    /// Pin number does not exist on the board.
    #[error("{role} is assigned {pin}, which does not exist on the board")]
    PinOutOfRange { role: PinRole, pin: Pin },

    /// Two roles of the same group resolve to one physical line.
    #[error("duplicate pin {pin} in {group} group: {role_a} and {role_b}")]
    PinDuplicate {
        group: PinGroup,
        pin: Pin,
        role_a: PinRole,
        role_b: PinRole,
    },

    /// PWM role on a pin without a hardware timer.
    #[error("{role} needs a PWM-capable pin, got {pin}")]
    PwmUnsupported { role: PinRole, pin: Pin },

    /// Analog input role on a digital-only pin.
    #[error("{role} is an analog input but is assigned digital pin {pin}")]
    AnalogRoleOnDigitalPin { role: PinRole, pin: Pin },

    /// Line shared across groups, raised only by strict checking.
    #[error("shared pin: {0}")]
    SharedPin(PinOverlap),

    /// Lookup key is neither a role nor a pin.
    #[error("unknown role or pin: {0:?}")]
    UnknownKey(String),
}

// ─── PinOverlap ─────────────────────────────────────────────────────

/// One physical line used by roles from more than one group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinOverlap {
    /// The shared pin.
    pub pin: Pin,
    /// Roles on that line, in table order.
    pub roles: Vec<PinRole>,
}

impl PinOverlap {
    /// Groups involved, in table order.
    pub fn groups(&self) -> Vec<PinGroup> {
        let mut groups: Vec<PinGroup> = self.roles.iter().map(|r| r.group()).collect();
        groups.dedup();
        groups
    }
}

impl fmt::Display for PinOverlap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} used by ", self.pin)?;
        for (i, role) in self.roles.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} ({})", role.constant_name(), role.group())?;
        }
        Ok(())
    }
}

// ─── PinBinding ─────────────────────────────────────────────────────

/// Resolved binding of a role to its physical pin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinBinding {
    pub role: PinRole,
    pub group: PinGroup,
    pub pin: Pin,
    /// Expected electrical usage of the role.
    pub mode: PinMode,
}

// ─── PinRegistry ────────────────────────────────────────────────────

/// Runtime pin registry. Maps `PinRole` to `PinBinding` for O(1) lookup.
#[derive(Debug, Clone)]
pub struct PinRegistry {
    bindings: HashMap<PinRole, PinBinding>,
    by_line: BTreeMap<u8, Vec<PinRole>>,
    overlaps: Vec<PinOverlap>,
}

impl PinRegistry {
    /// Build the registry from a `PinConfig`, running all validation rules.
    ///
    /// Returns the first validation error encountered. Cross-group
    /// overlaps are not errors; see [`PinRegistry::overlaps`].
    pub fn from_config(config: &PinConfig) -> Result<Self, PinMapError> {
        let mut bindings = HashMap::new();
        let mut by_line: BTreeMap<u8, Vec<PinRole>> = BTreeMap::new();

        for group in PinGroup::ALL {
            // line → first role of this group on it
            let mut seen: HashMap<u8, PinRole> = HashMap::new();

            for (role, pin) in config.group(group) {
                if !pin.is_valid() {
                    return Err(PinMapError::PinOutOfRange { role, pin });
                }

                if let Some(prev) = seen.get(&pin.line()) {
                    return Err(PinMapError::PinDuplicate {
                        group,
                        pin,
                        role_a: *prev,
                        role_b: role,
                    });
                }
                seen.insert(pin.line(), role);

                match role.mode() {
                    PinMode::Pwm if !pin.is_pwm_capable() => {
                        return Err(PinMapError::PwmUnsupported { role, pin });
                    }
                    PinMode::AnalogIn if !pin.is_analog() => {
                        return Err(PinMapError::AnalogRoleOnDigitalPin { role, pin });
                    }
                    _ => {}
                }

                by_line.entry(pin.line()).or_default().push(role);
                bindings.insert(
                    role,
                    PinBinding {
                        role,
                        group,
                        pin,
                        mode: role.mode(),
                    },
                );
            }
        }

        let overlaps: Vec<PinOverlap> = by_line
            .values()
            .filter(|roles| roles.len() > 1)
            .map(|roles| PinOverlap {
                pin: bindings[&roles[0]].pin,
                roles: roles.clone(),
            })
            .collect();

        for overlap in &overlaps {
            warn!("pin overlap across groups: {overlap}");
        }
        debug!(
            "pin registry built: {} roles on {} lines, {} overlaps",
            bindings.len(),
            by_line.len(),
            overlaps.len()
        );

        Ok(Self {
            bindings,
            by_line,
            overlaps,
        })
    }

    /// Build and, when `strict`, reject any cross-group overlap.
    pub fn check(config: &PinConfig, strict: bool) -> Result<Self, PinMapError> {
        let registry = Self::from_config(config)?;
        if strict {
            if let Some(overlap) = registry.overlaps.first() {
                return Err(PinMapError::SharedPin(overlap.clone()));
            }
        }
        Ok(registry)
    }

    /// Look up a binding by role.
    pub fn get(&self, role: &PinRole) -> Option<&PinBinding> {
        self.bindings.get(role)
    }

    /// Pin bound to `role`.
    pub fn pin(&self, role: &PinRole) -> Option<Pin> {
        self.bindings.get(role).map(|b| b.pin)
    }

    /// Roles sharing the physical line of `pin`.
    pub fn roles_on(&self, pin: Pin) -> &[PinRole] {
        self.by_line
            .get(&pin.line())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Resolve a role name (`"LeftPwm"`) or a pin label (`"D8"`) to bindings.
    pub fn lookup(&self, key: &str) -> Result<Vec<&PinBinding>, PinMapError> {
        if let Ok(role) = key.parse::<PinRole>() {
            return Ok(self.get(&role).into_iter().collect());
        }
        if let Ok(pin) = key.parse::<Pin>() {
            return Ok(self
                .roles_on(pin)
                .iter()
                .filter_map(|r| self.bindings.get(r))
                .collect());
        }
        Err(PinMapError::UnknownKey(key.to_string()))
    }

    /// Lines used by more than one group.
    pub fn overlaps(&self) -> &[PinOverlap] {
        &self.overlaps
    }

    /// All bindings in table order.
    pub fn bindings(&self) -> Vec<&PinBinding> {
        let mut out: Vec<&PinBinding> = self.bindings.values().collect();
        out.sort_by_key(|b| b.role);
        out
    }

    /// Number of registered role bindings.
    pub fn role_count(&self) -> usize {
        self.bindings.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_is_clean() {
        let reg = PinRegistry::check(&PinConfig::DEFAULT, true).unwrap();
        assert_eq!(reg.role_count(), PinRole::all().len());
        assert!(reg.overlaps().is_empty());
    }

    #[test]
    fn override_table_reports_shared_lines() {
        let reg = PinRegistry::from_config(&PinConfig::OVERRIDE).unwrap();
        let pins: Vec<Pin> = reg.overlaps().iter().map(|o| o.pin).collect();
        assert_eq!(pins, vec![Pin::d(8), Pin::d(9), Pin::d(10), Pin::d(11)]);

        let d8 = &reg.overlaps()[0];
        assert_eq!(d8.roles, vec![PinRole::WaveRd, PinRole::LineSensor(4)]);
        assert_eq!(d8.groups(), vec![PinGroup::Task, PinGroup::Qtr]);

        let d11 = &reg.overlaps()[3];
        assert_eq!(d11.roles, vec![PinRole::Temp, PinRole::LineSensor(1)]);
    }

    #[test]
    fn strict_check_rejects_override_table() {
        let err = PinRegistry::check(&PinConfig::OVERRIDE, true).unwrap_err();
        assert!(matches!(err, PinMapError::SharedPin(ref o) if o.pin == Pin::d(8)));
    }

    #[test]
    fn duplicate_within_group_is_error() {
        let mut cfg = PinConfig::OVERRIDE;
        cfg.relay.k2 = cfg.relay.k1;
        let err = PinRegistry::from_config(&cfg).unwrap_err();
        assert_eq!(
            err,
            PinMapError::PinDuplicate {
                group: PinGroup::Relay,
                pin: Pin::d(52),
                role_a: PinRole::RelayK1,
                role_b: PinRole::RelayK2,
            }
        );
    }

    #[test]
    fn out_of_range_is_error() {
        let mut cfg = PinConfig::DEFAULT;
        cfg.task.volt = Pin::a(16);
        let err = PinRegistry::from_config(&cfg).unwrap_err();
        assert_eq!(
            err,
            PinMapError::PinOutOfRange {
                role: PinRole::Volt,
                pin: Pin::a(16)
            }
        );
    }

    #[test]
    fn pwm_role_needs_timer_pin() {
        let mut cfg = PinConfig::OVERRIDE;
        cfg.motor.left_pwm = Pin::d(30);
        let err = PinRegistry::from_config(&cfg).unwrap_err();
        assert!(matches!(err, PinMapError::PwmUnsupported { role: PinRole::LeftPwm, .. }));
    }

    #[test]
    fn analog_role_needs_analog_pin() {
        let mut cfg = PinConfig::OVERRIDE;
        cfg.task.cr1 = Pin::d(20);
        let err = PinRegistry::from_config(&cfg).unwrap_err();
        assert!(matches!(err, PinMapError::AnalogRoleOnDigitalPin { role: PinRole::Cr1, .. }));
    }

    #[test]
    fn lookup_by_role_and_pin() {
        let reg = PinRegistry::from_config(&PinConfig::OVERRIDE).unwrap();

        let hits = reg.lookup("LeftPwm").unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].pin, Pin::d(5));
        assert_eq!(hits[0].mode, PinMode::Pwm);

        let hits = reg.lookup("D9").unwrap();
        let roles: Vec<PinRole> = hits.iter().map(|b| b.role).collect();
        assert_eq!(roles, vec![PinRole::WaveInt, PinRole::LineSensor(3)]);

        assert!(reg.lookup("D50").unwrap().is_empty());
        assert!(matches!(reg.lookup("bogus"), Err(PinMapError::UnknownKey(_))));
    }

    #[test]
    fn bindings_in_table_order() {
        let reg = PinRegistry::from_config(&PinConfig::OVERRIDE).unwrap();
        let roles: Vec<PinRole> = reg.bindings().iter().map(|b| b.role).collect();
        assert_eq!(roles, PinRole::all());
    }

    #[test]
    fn overlap_display_names_constants() {
        let reg = PinRegistry::from_config(&PinConfig::OVERRIDE).unwrap();
        assert_eq!(
            reg.overlaps()[0].to_string(),
            "D8 used by PIN_RD (task), F_SENSOR_PINS[4] (qtr)"
        );
    }
}
