//! Text renderings of the pin map for `robot_pinctl`.

use clap::ValueEnum;
use robot_pins::prelude::*;
use serde::Serialize;
use std::fmt::Write;

/// Output format for `show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns for humans.
    #[default]
    Table,
    /// A complete pin map, loadable again with `check --file`.
    Toml,
    /// One object per role.
    Json,
}

/// One role of the resolved table, as emitted by `show --format json`.
#[derive(Debug, Clone, Serialize)]
pub struct PinRow {
    pub group: PinGroup,
    pub role: PinRole,
    pub constant: String,
    pub pin: Pin,
    pub mode: PinMode,
}

/// Rows of `config`, optionally limited to one group.
pub fn rows(config: &PinConfig, group: Option<PinGroup>) -> Vec<PinRow> {
    config
        .assignments()
        .filter(|(role, _)| group.is_none_or(|g| role.group() == g))
        .map(|(role, pin)| PinRow {
            group: role.group(),
            role,
            constant: role.constant_name(),
            pin,
            mode: role.mode(),
        })
        .collect()
}

/// Render `config` in the requested format.
pub fn render_config(
    config: &PinConfig,
    group: Option<PinGroup>,
    format: OutputFormat,
) -> Result<String, Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Table => Ok(render_table(&rows(config, group))),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&rows(config, group))?),
        OutputFormat::Toml => {
            if group.is_some() {
                return Err("--group cannot be combined with --format toml".into());
            }
            Ok(toml::to_string(config)?)
        }
    }
}

pub fn render_table(rows: &[PinRow]) -> String {
    let width = rows
        .iter()
        .map(|r| r.constant.len())
        .max()
        .unwrap_or(0)
        .max("CONSTANT".len());

    let mut out = String::new();
    let _ = writeln!(out, "{:<6} {:<width$} {:<4} MODE", "GROUP", "CONSTANT", "PIN");
    for row in rows {
        let _ = writeln!(
            out,
            "{:<6} {:<width$} {:<4} {}",
            row.group.to_string(),
            row.constant,
            row.pin.to_string(),
            row.mode
        );
    }
    out
}

/// Which groups use override values under `flags`.
pub fn render_flags(flags: OverrideFlags) -> String {
    let mut out = String::new();
    for group in PinGroup::ALL {
        let state = if flags.overrides(group) {
            "override"
        } else {
            "default"
        };
        let _ = writeln!(out, "{:<6} {:<8} ({})", group.to_string(), state, group.feature());
    }
    out
}

/// Default vs override value for every role; `*` marks the value in use.
pub fn render_compare(flags: OverrideFlags) -> String {
    let width = PinRole::all()
        .iter()
        .map(|r| r.constant_name().len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(out, "{:<width$} {:<8} {:<8}", "CONSTANT", "DEFAULT", "OVERRIDE");
    for role in PinRole::all() {
        let (Some(default), Some(over)) =
            (PinConfig::DEFAULT.pin(role), PinConfig::OVERRIDE.pin(role))
        else {
            continue;
        };
        let used_override = flags.overrides(role.group());
        let mark = |is_active: bool, pin: Pin| {
            if is_active {
                format!("{pin}*")
            } else {
                pin.to_string()
            }
        };
        let _ = writeln!(
            out,
            "{:<width$} {:<8} {:<8}",
            role.constant_name(),
            mark(!used_override, default),
            mark(used_override, over)
        );
    }
    out
}

/// Human summary of a registry: overlap list or an all-clear line.
pub fn render_report(registry: &PinRegistry) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} roles checked", registry.role_count());
    if registry.overlaps().is_empty() {
        let _ = writeln!(out, "no pins shared across groups");
    } else {
        let _ = writeln!(
            out,
            "{} pin(s) shared across groups (review wiring):",
            registry.overlaps().len()
        );
        for overlap in registry.overlaps() {
            let _ = writeln!(out, "  {overlap}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_filter_by_group() {
        let motor = rows(&PinConfig::OVERRIDE, Some(PinGroup::Motor));
        assert_eq!(motor.len(), 6);
        assert_eq!(motor[0].constant, "LEFT_PWM_PIN");
        assert_eq!(motor[0].pin, Pin::d(5));

        let all = rows(&PinConfig::OVERRIDE, None);
        assert_eq!(all.len(), PinRole::all().len());
    }

    #[test]
    fn table_lists_constants() {
        let text = render_config(&PinConfig::OVERRIDE, Some(PinGroup::Relay), OutputFormat::Table)
            .unwrap();
        assert!(text.starts_with("GROUP"));
        assert!(text.contains("RELAY_K1_PIN"));
        assert!(text.contains("D53"));
        assert!(!text.contains("LEFT_PWM_PIN"));
    }

    #[test]
    fn json_rows_use_text_pins() {
        let text =
            render_config(&PinConfig::OVERRIDE, Some(PinGroup::Task), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[1]["role"], "Cr1");
        assert_eq!(value[1]["pin"], "A1");
        assert_eq!(value[1]["mode"], "analog_in");
        assert_eq!(value[1]["group"], "task");
    }

    #[test]
    fn toml_output_loads_back() {
        let text = render_config(&PinConfig::DEFAULT, None, OutputFormat::Toml).unwrap();
        let back = PinConfig::from_toml(&text).unwrap();
        assert_eq!(back, PinConfig::DEFAULT);

        assert!(render_config(&PinConfig::DEFAULT, Some(PinGroup::Qtr), OutputFormat::Toml).is_err());
    }

    #[test]
    fn flags_name_features() {
        let text = render_flags(OverrideFlags::MOTOR);
        assert!(text.contains("motor  override (overwrite-motor-pins)"));
        assert!(text.contains("qtr    default  (overwrite-qtr-pins)"));
    }

    #[test]
    fn compare_marks_active_side() {
        let text = render_compare(OverrideFlags::MOTOR);
        let line = text.lines().find(|l| l.starts_with("LEFT_PWM_PIN ")).unwrap();
        assert!(line.contains("D44 "));
        assert!(line.contains("D5*"));

        let line = text.lines().find(|l| l.starts_with("RELAY_K1_PIN ")).unwrap();
        assert!(line.contains("D26*"));
        assert!(line.contains("D52"));
        assert!(!line.contains("D52*"));
    }

    #[test]
    fn report_lists_overlaps() {
        let reg = PinRegistry::from_config(&PinConfig::OVERRIDE).unwrap();
        let text = render_report(&reg);
        assert!(text.contains("4 pin(s) shared across groups"));
        assert!(text.contains("D11 used by PIN_TEMP (task), F_SENSOR_PINS[1] (qtr)"));

        let reg = PinRegistry::from_config(&PinConfig::DEFAULT).unwrap();
        assert!(render_report(&reg).contains("no pins shared across groups"));
    }
}
