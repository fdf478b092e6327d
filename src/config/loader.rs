//! Configuration loading

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{MissionError, MissionResult};

use super::env_validator::{levenshtein, EnvVarValidator};
use super::types::{ColorMode, Config, OutputFormat};

/// Project-level config file name
pub const PROJECT_CONFIG_FILE: &str = "mission-control.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> MissionResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| MissionError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
///
/// Broken files are skipped with a warning rather than aborting.
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    let candidates = project_root
        .map(|root| root.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(dirs_config_dir().map(|dir| dir.join("mission-control/config.toml")));

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match load_with_warnings(&path) {
            Ok((config, warnings)) => {
                for warning in &warnings {
                    warn!("{}", warning);
                }
                debug!(path = %path.display(), "loaded config");
                return with_env_overrides(config);
            }
            Err(err) => warn!(path = %path.display(), "ignoring config: {}", err),
        }
    }

    with_env_overrides(Config::default())
}

/// Apply environment variable overrides (MISSION_CONTROL_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |name| std::env::var(name).ok(), &mut std::io::stderr())
}

/// Apply overrides from an arbitrary variable lookup (for testing)
pub fn apply_overrides<F, W>(mut config: Config, lookup: F, writer: &mut W) -> Config
where
    F: Fn(&str) -> Option<String>,
    W: Write,
{
    // MISSION_CONTROL_FORMAT
    if let Some(format) = lookup("MISSION_CONTROL_FORMAT") {
        config.output.format = EnvVarValidator::new("MISSION_CONTROL_FORMAT", &["text", "json"])
            .parse_with_writer(
                &format,
                |s| match s.trim().to_lowercase().as_str() {
                    "text" => Some(OutputFormat::Text),
                    "json" => Some(OutputFormat::Json),
                    _ => None,
                },
                config.output.format,
                writer,
            );
    }

    // MISSION_CONTROL_COLOR
    if let Some(color) = lookup("MISSION_CONTROL_COLOR") {
        config.output.color =
            EnvVarValidator::new("MISSION_CONTROL_COLOR", &["auto", "always", "never"])
                .parse_with_writer(
                    &color,
                    |s| match s.trim().to_lowercase().as_str() {
                        "auto" => Some(ColorMode::Auto),
                        "always" => Some(ColorMode::Always),
                        "never" => Some(ColorMode::Never),
                        _ => None,
                    },
                    config.output.color,
                    writer,
                );
    }

    // MISSION_CONTROL_MISSION (numeric id or name keyword)
    if let Some(mission) = lookup("MISSION_CONTROL_MISSION") {
        let mission = mission.trim();
        if let Ok(id) = mission.parse::<u64>() {
            config.mission.id = Some(id);
            config.mission.keyword = None;
        } else if !mission.is_empty() {
            config.mission.id = None;
            config.mission.keyword = Some(mission.to_string());
        }
    }

    // NO_COLOR is honoured regardless of the configured mode
    if lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
        config.output.color = ColorMode::Never;
    }

    config
}

/// Get XDG config directory
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".config"))
        })
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "sprint",
        "start_year",
        "start_month",
        "total_months",
        "total_target",
        "mission",
        "id",
        "keyword",
        "output",
        "format",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}
