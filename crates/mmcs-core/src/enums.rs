//! Week rotation enums.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! and round-trip through `as_str()` / `FromStr`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// WeekType
// ---------------------------------------------------------------------------

/// Biweekly rotation a lesson is pinned to.
///
/// `Full` lessons happen every week, `Upper` and `Lower` only in the
/// matching half of the rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WeekType {
    Full,
    Upper,
    Lower,
}

impl WeekType {
    pub const ALL: [Self; 3] = [Self::Full, Self::Upper, Self::Lower];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Upper => "upper",
            Self::Lower => "lower",
        }
    }

    /// Short qualifier shown in the subtitle. Every-week has no qualifier.
    #[must_use]
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::Full => "",
            Self::Upper => "верхняя",
            Self::Lower => "нижняя",
        }
    }

    /// Label attached to a single displayed lesson.
    #[must_use]
    pub const fn lesson_label(self) -> &'static str {
        match self {
            Self::Full => "",
            Self::Upper => "верхняя неделя",
            Self::Lower => "нижняя неделя",
        }
    }

    /// Whether a lesson of this type is shown when viewing `filter` weeks.
    ///
    /// The `Full` view shows everything; the `Upper` and `Lower` views drop
    /// lessons pinned to the opposite rotation.
    #[must_use]
    pub const fn matches(self, filter: Self) -> bool {
        match (self, filter) {
            (_, Self::Full)
            | (Self::Full, _)
            | (Self::Upper, Self::Upper)
            | (Self::Lower, Self::Lower) => true,
            (Self::Upper, Self::Lower) | (Self::Lower, Self::Upper) => false,
        }
    }
}

impl fmt::Display for WeekType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeekType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|week| week.as_str() == s)
            .ok_or_else(|| CoreError::UnknownVariant {
                kind: "week type",
                value: s.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// WeekTypeOption
// ---------------------------------------------------------------------------

/// The user's preferred default view.
///
/// `Current` defers to whatever week the server reports; the other three
/// pin the view regardless of the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WeekTypeOption {
    #[default]
    Current,
    Full,
    Upper,
    Lower,
}

impl WeekTypeOption {
    pub const ALL: [Self; 4] = [Self::Current, Self::Full, Self::Upper, Self::Lower];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Full => "full",
            Self::Upper => "upper",
            Self::Lower => "lower",
        }
    }

    /// The fixed week type this option pins, or `None` for `Current`.
    #[must_use]
    pub const fn fixed(self) -> Option<WeekType> {
        match self {
            Self::Current => None,
            Self::Full => Some(WeekType::Full),
            Self::Upper => Some(WeekType::Upper),
            Self::Lower => Some(WeekType::Lower),
        }
    }
}

impl fmt::Display for WeekTypeOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeekTypeOption {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| CoreError::UnknownVariant {
                kind: "week type option",
                value: s.to_string(),
            })
    }
}
