//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::MissionSelector;
use crate::error::MissionResult;

use super::loader::{self, ConfigWarning};

/// Sprint settings that override the snapshot's key/value rows
///
/// ```toml
/// [sprint]
/// start_year = 2024
/// start_month = 3
/// total_months = 6
/// total_target = 120000
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct SprintOverrides {
    #[serde(default)]
    pub start_year: Option<i32>,

    #[serde(default)]
    pub start_month: Option<u32>,

    #[serde(default)]
    pub total_months: Option<u32>,

    #[serde(default)]
    pub total_target: Option<f64>,
}

/// Which secondary mission the dashboards follow
///
/// `id` wins over `keyword`; with neither set the `echodeck` keyword is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MissionConfig {
    #[serde(default)]
    pub id: Option<u64>,

    #[serde(default)]
    pub keyword: Option<String>,
}

impl MissionConfig {
    pub fn selector(&self) -> MissionSelector {
        match (self.id, self.keyword.as_deref()) {
            (Some(id), _) => MissionSelector::Id(id),
            (None, Some(keyword)) if !keyword.trim().is_empty() => {
                MissionSelector::Keyword(keyword.trim().to_string())
            }
            _ => MissionSelector::default(),
        }
    }
}

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting and the notification formatter
    Json,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub sprint: SprintOverrides,

    #[serde(default)]
    pub mission: MissionConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> MissionResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (MISSION_CONTROL_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Selector for the active secondary mission
    pub fn mission_selector(&self) -> MissionSelector {
        self.mission.selector()
    }
}
