//! Sprint settings from a generic key/value table
//!
//! The data source keeps sprint settings as rows of `{ key, value }` where the
//! value is usually a string. Known keys are `sprintStartYear`,
//! `sprintStartMonth`, `totalMonths` and `totalTarget`; anything else is
//! ignored. Config-file overrides take precedence over the rows.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::config::SprintOverrides;
use crate::domain::entities::Founder;
use crate::domain::value_objects::{SprintConfig, SprintSettings};
use crate::error::{MissionError, MissionResult};

pub const KEY_START_YEAR: &str = "sprintStartYear";
pub const KEY_START_MONTH: &str = "sprintStartMonth";
pub const KEY_TOTAL_MONTHS: &str = "totalMonths";
pub const KEY_TOTAL_TARGET: &str = "totalTarget";

/// One row of the key/value config table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigRow {
    pub key: String,
    pub value: Value,
}

impl ConfigRow {
    pub fn new(key: &str, value: impl Into<Value>) -> Self {
        Self {
            key: key.to_string(),
            value: value.into(),
        }
    }
}

/// Resolve sprint settings from rows, overrides and founders
///
/// A missing `totalTarget` falls back to the sum of founder targets.
pub fn resolve_settings(
    rows: &[ConfigRow],
    overrides: &SprintOverrides,
    founders: &[Founder],
) -> MissionResult<SprintSettings> {
    let start_year = match overrides.start_year {
        Some(year) => year,
        None => {
            let raw = require(rows, KEY_START_YEAR)?;
            whole_number(KEY_START_YEAR, raw)
                .and_then(|n| i32::try_from(n).map_err(|_| invalid(KEY_START_YEAR, raw)))?
        }
    };

    let start_month = match overrides.start_month {
        Some(month) => month,
        None => month_value(rows, KEY_START_MONTH)?,
    };
    if !(1..=12).contains(&start_month) {
        return Err(MissionError::InvalidSetting {
            key: KEY_START_MONTH.to_string(),
            value: start_month.to_string(),
        });
    }

    let total_months = match overrides.total_months {
        Some(months) => months,
        None => month_value(rows, KEY_TOTAL_MONTHS)?,
    };
    if total_months < 1 {
        return Err(MissionError::InvalidSetting {
            key: KEY_TOTAL_MONTHS.to_string(),
            value: total_months.to_string(),
        });
    }

    let total_target = match overrides.total_target {
        Some(target) => target,
        None => match lookup(rows, KEY_TOTAL_TARGET) {
            Some(raw) => number(raw).ok_or_else(|| invalid(KEY_TOTAL_TARGET, raw))?,
            None => {
                let sum: f64 = founders.iter().map(|f| f.target).sum();
                debug!(total_target = sum, "no totalTarget row, using sum of founder targets");
                sum
            }
        },
    };

    Ok(SprintSettings {
        sprint: SprintConfig::new(start_year, start_month, total_months),
        total_target,
    })
}

fn lookup<'a>(rows: &'a [ConfigRow], key: &str) -> Option<&'a Value> {
    rows.iter().find(|row| row.key == key).map(|row| &row.value)
}

fn require<'a>(rows: &'a [ConfigRow], key: &str) -> MissionResult<&'a Value> {
    lookup(rows, key).ok_or_else(|| MissionError::MissingSetting {
        key: key.to_string(),
    })
}

fn month_value(rows: &[ConfigRow], key: &str) -> MissionResult<u32> {
    let raw = require(rows, key)?;
    whole_number(key, raw).and_then(|n| u32::try_from(n).map_err(|_| invalid(key, raw)))
}

/// Numbers arrive either as JSON numbers or as numeric strings
fn number(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|n| n.is_finite())
}

fn whole_number(key: &str, value: &Value) -> MissionResult<i64> {
    match number(value) {
        Some(n) if n.fract() == 0.0 => Ok(n as i64),
        _ => Err(invalid(key, value)),
    }
}

fn invalid(key: &str, value: &Value) -> MissionError {
    let value = match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    MissionError::InvalidSetting {
        key: key.to_string(),
        value,
    }
}
