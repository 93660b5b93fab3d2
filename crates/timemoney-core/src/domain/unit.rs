use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

pub const MILLISECONDS_PER_SECOND: i64 = 1_000;
pub const MILLISECONDS_PER_MINUTE: i64 = 60 * MILLISECONDS_PER_SECOND;
pub const MILLISECONDS_PER_HOUR: i64 = 60 * MILLISECONDS_PER_MINUTE;
pub const MILLISECONDS_PER_DAY: i64 = 24 * MILLISECONDS_PER_HOUR;
pub const MONTHS_PER_QUARTER: i64 = 3;
pub const MONTHS_PER_YEAR: i64 = 12;

/// Base family of a [`TimeUnit`].
///
/// A day can be expressed exactly in milliseconds but a month cannot, so the
/// two families never convert into each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitFamily {
    /// Millisecond based units, up to and including the day.
    SubDay,
    /// Month based units.
    Calendar,
}

impl UnitFamily {
    pub const fn base_unit(self) -> TimeUnit {
        match self {
            Self::SubDay => TimeUnit::Millisecond,
            Self::Calendar => TimeUnit::Month,
        }
    }
}

impl Display for UnitFamily {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SubDay => f.write_str("sub-day"),
            Self::Calendar => f.write_str("calendar"),
        }
    }
}

/// Unit of time a [`Duration`](crate::Duration) is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Month,
    Quarter,
    Year,
}

/// Family and base-unit conversion factor, indexed by `TimeUnit as usize`.
const UNIT_TABLE: [(UnitFamily, i64); 8] = [
    (UnitFamily::SubDay, 1),
    (UnitFamily::SubDay, MILLISECONDS_PER_SECOND),
    (UnitFamily::SubDay, MILLISECONDS_PER_MINUTE),
    (UnitFamily::SubDay, MILLISECONDS_PER_HOUR),
    (UnitFamily::SubDay, MILLISECONDS_PER_DAY),
    (UnitFamily::Calendar, 1),
    (UnitFamily::Calendar, MONTHS_PER_QUARTER),
    (UnitFamily::Calendar, MONTHS_PER_YEAR),
];

/// Family the unit belongs to.
pub const fn family_of(unit: TimeUnit) -> UnitFamily {
    UNIT_TABLE[unit as usize].0
}

/// Multiple of the family's base unit that one `unit` represents.
pub const fn conversion_factor(unit: TimeUnit) -> i64 {
    UNIT_TABLE[unit as usize].1
}

/// Whether quantities in `a` and `b` can be added or compared directly.
pub fn are_convertible(a: TimeUnit, b: TimeUnit) -> bool {
    family_of(a) == family_of(b)
}

impl TimeUnit {
    pub const ALL: [Self; 8] = [
        Self::Millisecond,
        Self::Second,
        Self::Minute,
        Self::Hour,
        Self::Day,
        Self::Month,
        Self::Quarter,
        Self::Year,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Millisecond => "millisecond",
            Self::Second => "second",
            Self::Minute => "minute",
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::Year => "year",
        }
    }

    pub const fn family(self) -> UnitFamily {
        family_of(self)
    }

    pub const fn base_unit(self) -> TimeUnit {
        family_of(self).base_unit()
    }

    pub const fn conversion_factor(self) -> i64 {
        conversion_factor(self)
    }

    pub fn is_convertible_to(self, other: TimeUnit) -> bool {
        are_convertible(self, other)
    }

    pub fn is_convertible_to_milliseconds(self) -> bool {
        are_convertible(self, TimeUnit::Millisecond)
    }
}

impl Display for TimeUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeUnit {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        let singular = normalized.strip_suffix('s').unwrap_or(&normalized);
        Self::ALL
            .into_iter()
            .find(|unit| unit.as_str() == singular)
            .ok_or(ValidationError::UnknownTimeUnit { value: normalized })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_declaration_order() {
        assert_eq!(conversion_factor(TimeUnit::Millisecond), 1);
        assert_eq!(conversion_factor(TimeUnit::Hour), 3_600_000);
        assert_eq!(conversion_factor(TimeUnit::Day), 86_400_000);
        assert_eq!(conversion_factor(TimeUnit::Month), 1);
        assert_eq!(conversion_factor(TimeUnit::Quarter), 3);
        assert_eq!(conversion_factor(TimeUnit::Year), 12);
    }

    #[test]
    fn day_belongs_to_sub_day_family() {
        assert_eq!(TimeUnit::Day.family(), UnitFamily::SubDay);
        assert_eq!(TimeUnit::Day.base_unit(), TimeUnit::Millisecond);
        assert_eq!(TimeUnit::Quarter.base_unit(), TimeUnit::Month);
    }

    #[test]
    fn families_do_not_convert() {
        assert!(TimeUnit::Hour.is_convertible_to(TimeUnit::Second));
        assert!(TimeUnit::Year.is_convertible_to(TimeUnit::Month));
        assert!(!TimeUnit::Month.is_convertible_to(TimeUnit::Day));
        assert!(!TimeUnit::Quarter.is_convertible_to_milliseconds());
    }

    #[test]
    fn parses_singular_and_plural_names() {
        assert_eq!(TimeUnit::from_str("Minutes").expect("must parse"), TimeUnit::Minute);
        assert_eq!(TimeUnit::from_str("year").expect("must parse"), TimeUnit::Year);
    }

    #[test]
    fn rejects_unknown_unit() {
        let err = TimeUnit::from_str("fortnight").expect_err("must fail");
        assert!(matches!(err, ValidationError::UnknownTimeUnit { .. }));
    }
}
