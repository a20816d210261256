use chrono::NaiveTime;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::errors::CoreError;

/// Display format for lesson times: hour without padding, e.g. `9:00`.
const TIME_FORMAT: &str = "%-H:%M";

/// Begin/end pair of a lesson.
///
/// Deserializing goes through [`TimePeriod::new`], so a decoded period never
/// ends before it begins.
#[derive(Debug, Clone, Copy, Serialize, JsonSchema, PartialEq, Eq)]
pub struct TimePeriod {
    pub begin: NaiveTime,
    pub end: NaiveTime,
}

impl TimePeriod {
    /// Build a period, rejecting one that ends before it begins.
    pub fn new(begin: NaiveTime, end: NaiveTime) -> Result<Self, CoreError> {
        if end < begin {
            return Err(CoreError::Validation(format!(
                "period ends at {} before it begins at {}",
                end.format(TIME_FORMAT),
                begin.format(TIME_FORMAT)
            )));
        }
        Ok(Self { begin, end })
    }

    /// Build a period from hour/minute pairs.
    pub fn from_hm(begin: (u32, u32), end: (u32, u32)) -> Result<Self, CoreError> {
        let at = |(h, m): (u32, u32)| {
            NaiveTime::from_hms_opt(h, m, 0)
                .ok_or_else(|| CoreError::Validation(format!("invalid time {h}:{m:02}")))
        };
        Self::new(at(begin)?, at(end)?)
    }

    #[must_use]
    pub fn begin_text(&self) -> String {
        self.begin.format(TIME_FORMAT).to_string()
    }

    #[must_use]
    pub fn end_text(&self) -> String {
        self.end.format(TIME_FORMAT).to_string()
    }
}

impl<'de> Deserialize<'de> for TimePeriod {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Unchecked {
            begin: NaiveTime,
            end: NaiveTime,
        }

        let Unchecked { begin, end } = Unchecked::deserialize(deserializer)?;
        Self::new(begin, end).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.begin.format(TIME_FORMAT), self.end.format(TIME_FORMAT))
    }
}
