//! Configuration module for Mission Control
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (MISSION_CONTROL_*)
//! 3. Project config (./mission-control.toml)
//! 4. User config (~/.config/mission-control/config.toml)
//! 5. Built-in defaults (lowest priority)
//!
//! Sprint values in a config file override the key/value rows that ship
//! inside the snapshot.

mod env_validator;
mod loader;
mod types;

pub use env_validator::{levenshtein, EnvVarValidator};
pub use loader::{apply_overrides, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{ColorMode, Config, MissionConfig, OutputConfig, OutputFormat, SprintOverrides};
