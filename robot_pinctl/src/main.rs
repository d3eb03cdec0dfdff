//! # Robot pin map tool
//!
//! Prints and checks the pin configuration table compiled into this build.
//!
//! # Usage
//!
//! ```bash
//! # Resolved table of this build
//! robot_pinctl show
//! robot_pinctl show --group qtr --format json
//!
//! # Which groups use override values
//! robot_pinctl flags
//!
//! # Default vs override, active side marked
//! robot_pinctl compare
//!
//! # Validate this build, or a candidate map; --strict fails on shared pins
//! robot_pinctl check
//! robot_pinctl check --file pins.toml --strict
//!
//! # Role or pin lookup
//! robot_pinctl lookup LeftPwm
//! robot_pinctl lookup D8
//!
//! # Build without the motor override
//! cargo run -p robot_pinctl --no-default-features \
//!     --features overwrite-relay-pins,overwrite-task-pins,overwrite-qtr-pins -- flags
//! ```

#![deny(warnings)]

mod render;

use clap::{Parser, Subcommand};
use render::{render_compare, render_config, render_flags, render_report, OutputFormat};
use robot_pins::config::{ConfigLoader, LogLevel, SharedConfig};
use robot_pins::consts::DEFAULT_CONFIG_PATH;
use robot_pins::prelude::*;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

/// Robot pin map tool - inspect and validate the compiled pin table
#[derive(Parser, Debug)]
#[command(name = "robot_pinctl")]
#[command(version)]
#[command(about = "Inspect and validate the robot pin configuration table")]
#[command(long_about = None)]
struct Args {
    /// Tool configuration file (`[shared]` log_level, service_name).
    /// Defaults to ./pinctl.toml when that file exists.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the resolved pin table of this build
    Show {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Limit output to one group (motor, relay, task, qtr)
        #[arg(short, long)]
        group: Option<PinGroup>,
    },

    /// Print which groups use override values in this build
    Flags,

    /// Print default and override values side by side
    Compare,

    /// Validate this build's table, or a candidate table from a TOML file
    Check {
        /// Candidate pin map (same layout as `show --format toml`)
        #[arg(short, long, value_name = "FILE")]
        file: Option<PathBuf>,

        /// Treat pins shared across groups as errors
        #[arg(long)]
        strict: bool,
    },

    /// Find the pin of a role (`LeftPwm`) or the roles on a pin (`D8`)
    Lookup { key: String },
}

/// `robot_pinctl` settings file.
#[derive(Debug, Deserialize)]
struct PinctlConfig {
    shared: SharedConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = run() {
        error!("robot_pinctl failed: {}", e);
        eprintln!("error: {e}");
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Explicit --config, else ./pinctl.toml when present.
    let config_path = args.config.clone().or_else(|| {
        let fallback = PathBuf::from(DEFAULT_CONFIG_PATH);
        fallback.exists().then_some(fallback)
    });

    // Tracing comes up before a load error is returned, so `main` can log it.
    let loaded = config_path.as_deref().map(load_settings).transpose();
    let configured = loaded.as_ref().ok().and_then(Option::as_ref).map(|s| s.log_level);
    setup_tracing(&args, configured);
    let shared = loaded?;

    if let Some(shared) = &shared {
        info!("robot_pinctl v{} ({})", env!("CARGO_PKG_VERSION"), shared.service_name);
    }

    match args.command {
        Command::Show { format, group } => {
            print!("{}", render_config(&PinConfig::ACTIVE, group, format)?);
        }
        Command::Flags => {
            print!("{}", render_flags(OverrideFlags::BUILD));
        }
        Command::Compare => {
            print!("{}", render_compare(OverrideFlags::BUILD));
        }
        Command::Check { file, strict } => {
            let config = match &file {
                Some(path) => {
                    info!("Checking candidate pin map {}", path.display());
                    PinConfig::load(path).map_err(|e| format!("{}: {e}", path.display()))?
                }
                None => {
                    info!("Checking compiled pin map (flags {:?})", OverrideFlags::BUILD);
                    PinConfig::ACTIVE
                }
            };
            let registry = PinRegistry::check(&config, strict)?;
            print!("{}", render_report(&registry));
        }
        Command::Lookup { key } => {
            let registry = PinRegistry::from_config(&PinConfig::ACTIVE)?;
            let hits = registry.lookup(&key)?;
            if hits.is_empty() {
                println!("{key}: unassigned");
            }
            for b in hits {
                println!("{} = {} ({}, {})", b.role.constant_name(), b.pin, b.group, b.mode);
            }
        }
    }

    Ok(())
}

/// Load and validate the `[shared]` settings table.
fn load_settings(path: &Path) -> Result<SharedConfig, String> {
    let cfg = PinctlConfig::load(path).map_err(|e| format!("{}: {e}", path.display()))?;
    cfg.shared
        .validate()
        .map_err(|e| format!("{}: {e}", path.display()))?;
    Ok(cfg.shared)
}

/// Setup tracing subscriber from CLI arguments and the optional settings file.
fn setup_tracing(args: &Args, configured: Option<LogLevel>) {
    let level = if args.verbose {
        Level::DEBUG
    } else {
        configured.map(Level::from).unwrap_or(Level::WARN)
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if args.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn parse_show_with_group() {
        let args = Args::parse_from(["robot_pinctl", "show", "--group", "qtr", "--format", "json"]);
        match args.command {
            Command::Show { format, group } => {
                assert_eq!(format, OutputFormat::Json);
                assert_eq!(group, Some(PinGroup::Qtr));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parse_check_strict_file() {
        let args = Args::parse_from(["robot_pinctl", "-v", "check", "--strict", "--file", "p.toml"]);
        assert!(args.verbose);
        match args.command {
            Command::Check { file, strict } => {
                assert!(strict);
                assert_eq!(file, Some(PathBuf::from("p.toml")));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn unknown_group_is_rejected() {
        assert!(Args::try_parse_from(["robot_pinctl", "show", "--group", "wheels"]).is_err());
    }

    #[test]
    fn settings_file_parses() {
        let cfg = PinctlConfig::from_toml("[shared]\nservice_name = \"bench\"\nlog_level = \"debug\"\n")
            .unwrap();
        assert_eq!(cfg.shared.log_level, LogLevel::Debug);
        assert_eq!(cfg.shared.service_name, "bench");
    }
}
