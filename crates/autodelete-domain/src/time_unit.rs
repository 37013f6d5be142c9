//! Time units and the age threshold derived from them

use std::fmt;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 60 * 60;
const SECS_PER_DAY: u64 = 24 * 60 * 60;

/// Unit in which a retention threshold is expressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeUnit {
    /// Threshold value counts minutes
    Minutes,

    /// Threshold value counts hours
    Hours,

    /// Threshold value counts days
    #[default]
    Days,
}

impl TimeUnit {
    /// Get the unit name as used in task parameters
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Minutes => "minutes",
            TimeUnit::Hours => "hours",
            TimeUnit::Days => "days",
        }
    }

    /// Parse a unit from a task parameter.
    ///
    /// Never fails: any value other than `minutes` or `hours` is treated as days.
    ///
    /// # Examples
    ///
    /// ```
    /// use autodelete_domain::TimeUnit;
    ///
    /// assert_eq!(TimeUnit::from_param("hours"), TimeUnit::Hours);
    /// assert_eq!(TimeUnit::from_param("fortnights"), TimeUnit::Days);
    /// ```
    pub fn from_param(s: &str) -> Self {
        match s {
            "minutes" => TimeUnit::Minutes,
            "hours" => TimeUnit::Hours,
            _ => TimeUnit::Days,
        }
    }

    /// Number of seconds in one unit
    pub fn seconds(&self) -> u64 {
        match self {
            TimeUnit::Minutes => SECS_PER_MINUTE,
            TimeUnit::Hours => SECS_PER_HOUR,
            TimeUnit::Days => SECS_PER_DAY,
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maximum allowed file age, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Threshold(u64);

impl Threshold {
    /// Build a threshold from a (value, unit) pair
    ///
    /// # Examples
    ///
    /// ```
    /// use autodelete_domain::{Threshold, TimeUnit};
    ///
    /// assert_eq!(Threshold::new(2, TimeUnit::Days).as_secs(), 172_800);
    /// ```
    pub fn new(value: u64, unit: TimeUnit) -> Self {
        Self(value.saturating_mul(unit.seconds()))
    }

    /// Create a threshold directly from seconds
    pub fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    /// Get the threshold in seconds
    pub fn as_secs(&self) -> u64 {
        self.0
    }

    /// Whether a file of the given age is past the threshold.
    ///
    /// Strict comparison: an age equal to the threshold is kept.
    pub fn is_exceeded_by(&self, age_secs: u64) -> bool {
        age_secs > self.0
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}
