//! Turning a week type option into the concrete week to display.
//!
//! [`resolve`] and [`label`] are the pure pair; [`Resolution::new`] runs both
//! against the same inputs so the subtitle can never disagree with the view.

use mmcs_core::enums::{WeekType, WeekTypeOption};

use crate::error::ScheduleError;

/// Concrete week type for `option`. `current` is only consulted for `Current`.
#[must_use]
pub const fn resolve(option: WeekTypeOption, current: WeekType) -> WeekType {
    match option {
        WeekTypeOption::Current => current,
        WeekTypeOption::Full => WeekType::Full,
        WeekTypeOption::Upper => WeekType::Upper,
        WeekTypeOption::Lower => WeekType::Lower,
    }
}

/// Subtitle for `option`.
///
/// `Current` wraps the live week's short name in a fixed phrase; the fixed
/// options show their short name alone, which is empty for `Full`.
#[must_use]
pub fn label(option: WeekTypeOption, current: WeekType) -> String {
    match option {
        WeekTypeOption::Current => format!("текущая \"{}\"", current.short_name()),
        WeekTypeOption::Full | WeekTypeOption::Upper | WeekTypeOption::Lower => {
            resolve(option, current).short_name().to_string()
        }
    }
}

/// A resolved week type together with its matching subtitle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub week_type: WeekType,
    pub label: String,
}

impl Resolution {
    /// Resolve `option` against a possibly not yet fetched current week.
    ///
    /// Fixed options never need `current`. `Current` without a known week is
    /// [`ScheduleError::CurrentWeekUnknown`].
    pub fn new(option: WeekTypeOption, current: Option<WeekType>) -> Result<Self, ScheduleError> {
        let current = match (option.fixed(), current) {
            (Some(fixed), _) => fixed,
            (None, Some(current)) => current,
            (None, None) => return Err(ScheduleError::CurrentWeekUnknown),
        };
        Ok(Self {
            week_type: resolve(option, current),
            label: label(option, current),
        })
    }
}
