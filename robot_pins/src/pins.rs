//! Pin configuration table.
//!
//! Maps robot subsystems (drive motors, relays, task sensors, line
//! sensors) to controller pins. Four groups, each switched between the
//! board default table and the override table by a Cargo feature.
//! Consumers read the flat constants in [`active`].

pub mod active;
pub mod defaults;
pub mod group;
pub mod overrides;
pub mod pin;
pub mod registry;
pub mod role;
pub mod table;
