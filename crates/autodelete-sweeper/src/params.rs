//! Task parameters as delivered by the scheduler's execute-task event

use crate::SweepError;
use autodelete_domain::{SweepConfig, TimeUnit};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::path::Path;

/// Parameters of one scheduled autodelete task
///
/// # Examples
///
/// ```
/// use autodelete_domain::TimeUnit;
/// use autodelete_sweeper::TaskParams;
///
/// let params = serde_json::json!({
///     "folder_path": "images/tmp",
///     "older_than": "12",
///     "time_unit": "hours",
/// });
/// let params = TaskParams::from_json(&params).unwrap();
/// assert_eq!(params.older_than, 12);
/// assert_eq!(params.time_unit, TimeUnit::Hours);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskParams {
    /// Folder to sweep, relative to the root
    pub folder_path: String,

    /// Threshold magnitude
    pub older_than: u64,

    /// Threshold unit
    pub time_unit: TimeUnit,
}

impl TaskParams {
    /// Read parameters from the event's `params` object.
    ///
    /// Form values arrive loosely typed, so `older_than` is coerced the way an
    /// integer cast would: numeric strings use their leading digits, anything
    /// unparsable is 0, and negatives clamp to 0.
    pub fn from_json(params: &Value) -> Result<Self, SweepError> {
        let object = params
            .as_object()
            .ok_or_else(|| SweepError::Config("task params must be an object".to_string()))?;

        let folder_path = match object.get("folder_path") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => String::new(),
        };

        let time_unit = object
            .get("time_unit")
            .and_then(Value::as_str)
            .map(TimeUnit::from_param)
            .unwrap_or_default();

        Ok(Self {
            folder_path,
            older_than: coerce_int(object.get("older_than")),
            time_unit,
        })
    }

    /// Build the sweep configuration for these parameters under `root`
    pub fn into_config(self, root: &Path) -> SweepConfig {
        SweepConfig::new(root, self.folder_path, self.older_than, self.time_unit)
    }
}

/// Deserialize a threshold magnitude with the same coercion as [`TaskParams`]
pub(crate) fn deserialize_older_than<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce_int(Some(&value)))
}

fn coerce_int(value: Option<&Value>) -> u64 {
    match value {
        Some(Value::Number(n)) => {
            if let Some(v) = n.as_u64() {
                v
            } else if let Some(f) = n.as_f64() {
                // Negative and non-finite values end up as 0
                if f.is_finite() && f > 0.0 {
                    f.trunc() as u64
                } else {
                    0
                }
            } else {
                0
            }
        }
        Some(Value::String(s)) => leading_int(s),
        Some(Value::Bool(true)) => 1,
        _ => 0,
    }
}

fn leading_int(s: &str) -> u64 {
    let s = s.trim_start();
    if s.starts_with('-') {
        return 0;
    }
    let digits = s.strip_prefix('+').unwrap_or(s);
    digits
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .fold(0u64, |acc, c| {
            acc.saturating_mul(10)
                .saturating_add(u64::from(c as u8 - b'0'))
        })
}
