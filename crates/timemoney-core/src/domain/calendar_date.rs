use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::{Date, Month, Weekday};

use crate::clock::TimeSource;
use crate::domain::{pattern, Instant};
use crate::ValidationError;

pub const MIN_YEAR: i32 = 0;
pub const MAX_YEAR: i32 = 9999;

const DISPLAY_PATTERN: &str = "dd-MMM-yyyy";

/// Date with day precision where the time of day carries no meaning.
///
/// Months are 1-based. The day is only checked against the generic 1..=31
/// range, so `2021-02-30` can be constructed; such dates roll forward into the
/// next month whenever calendar arithmetic is applied to them (`2021-02-30`
/// behaves as `2021-03-02`). Use [`CalendarDate::is_valid_day_of_month`] to
/// detect them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CalendarDate {
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, ValidationError> {
        if !(1..=31).contains(&day) {
            return Err(ValidationError::DayOutOfRange { day });
        }
        if !(1..=12).contains(&month) {
            return Err(ValidationError::MonthOutOfRange { month });
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(ValidationError::YearOutOfRange {
                year,
                min: MIN_YEAR,
                max: MAX_YEAR,
            });
        }

        Ok(Self { year, month, day })
    }

    pub fn from_date(date: Date) -> Result<Self, ValidationError> {
        Self::new(date.year(), u8::from(date.month()), date.day())
    }

    /// UTC calendar day containing `instant`.
    pub fn from_instant(instant: Instant) -> Result<Self, ValidationError> {
        Self::from_date(instant.to_offset_datetime()?.date())
    }

    pub fn today(source: &dyn TimeSource) -> Result<Self, ValidationError> {
        Self::from_instant(source.now())
    }

    /// Parse `input` against a date pattern; see [`Instant::parse`] for the
    /// accepted pattern syntax. Any time component is discarded.
    pub fn parse(input: &str, pattern: &str) -> Result<Self, ValidationError> {
        Self::from_instant(Instant::parse(input, pattern)?)
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Whether the day exists in this month, e.g. `false` for `2021-02-30`.
    pub fn is_valid_day_of_month(&self) -> bool {
        match Month::try_from(self.month) {
            Ok(month) => self.day <= days_in_month(self.year, month),
            Err(_) => false,
        }
    }

    /// Equivalent `time::Date`, rolling out-of-month days forward.
    pub fn to_date(&self) -> Date {
        // Field ranges are checked at construction: day 1..=31 from the first of
        // any month in 0..=9999 never leaves the supported range.
        let month = Month::try_from(self.month).expect("month is validated at construction");
        Date::from_calendar_date(self.year, month, 1)
            .expect("year is validated at construction")
            .checked_add(time::Duration::days(i64::from(self.day) - 1))
            .expect("day is validated at construction")
    }

    /// Midnight UTC at the start of this date.
    pub fn to_instant(&self) -> Instant {
        Instant::from_primitive(self.to_date().midnight())
    }

    pub fn weekday(&self) -> Weekday {
        self.to_date().weekday()
    }

    /// Strictly earlier than `other`. A missing operand is never after.
    pub fn is_before<'a>(&self, other: impl Into<Option<&'a CalendarDate>>) -> bool {
        other.into().is_some_and(|other| self < other)
    }

    /// Strictly later than `other`. A missing operand is never before.
    pub fn is_after<'a>(&self, other: impl Into<Option<&'a CalendarDate>>) -> bool {
        other.into().is_some_and(|other| self > other)
    }

    pub fn next_day(&self) -> Result<Self, ValidationError> {
        self.plus_days(1)
    }

    pub fn previous_day(&self) -> Result<Self, ValidationError> {
        self.plus_days(-1)
    }

    pub fn plus_days(&self, days: i64) -> Result<Self, ValidationError> {
        let shifted = self
            .to_date()
            .checked_add(time::Duration::days(days))
            .ok_or(ValidationError::DateOutOfRange)?;

        Self::from_date(shifted)
    }

    /// Shift by whole months, clamping the day to the target month's length:
    /// `2012-01-31` plus one month is `2012-02-29`.
    pub fn plus_months(&self, months: i32) -> Result<Self, ValidationError> {
        let date = self.to_date();
        let month_index = i64::from(date.year()) * 12 + i64::from(u8::from(date.month())) - 1;
        let target = month_index + i64::from(months);

        let year =
            i32::try_from(target.div_euclid(12)).map_err(|_| ValidationError::DateOutOfRange)?;
        let month_number = (target.rem_euclid(12) + 1) as u8;
        let month = Month::try_from(month_number)
            .map_err(|_| ValidationError::MonthOutOfRange { month: month_number })?;
        let day = date.day().min(days_in_month(year, month));

        Self::new(year, month_number, day)
    }

    pub fn plus_years(&self, years: i32) -> Result<Self, ValidationError> {
        let months = years
            .checked_mul(12)
            .ok_or(ValidationError::Overflow { operation: "plus_years" })?;
        self.plus_months(months)
    }

    pub fn first_day_of_month(&self) -> Self {
        let date = self.to_date();
        Self {
            year: date.year(),
            month: u8::from(date.month()),
            day: 1,
        }
    }

    pub fn last_day_of_month(&self) -> Self {
        let date = self.to_date();
        Self {
            year: date.year(),
            month: u8::from(date.month()),
            day: days_in_month(date.year(), date.month()),
        }
    }

    /// Render with a date pattern, e.g. `"yyyy-MM-dd"` or `"[year]/[month]"`.
    pub fn format(&self, pattern: &str) -> Result<String, ValidationError> {
        let description = pattern::to_format_description(pattern)?;
        let items = time::format_description::parse(&description).map_err(|_| {
            ValidationError::InvalidPattern {
                pattern: pattern.to_owned(),
            }
        })?;

        self.to_date()
            .format(items.as_slice())
            .map_err(|_| ValidationError::InvalidPattern {
                pattern: pattern.to_owned(),
            })
    }
}

pub(crate) fn days_in_month(year: i32, month: Month) -> u8 {
    match month {
        Month::February if time::util::is_leap_year(year) => 29,
        Month::February => 28,
        Month::April | Month::June | Month::September | Month::November => 30,
        _ => 31,
    }
}

/// Renders as `DD-Mon-YYYY`, e.g. `01-Jan-2010`.
impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let formatted = self.format(DISPLAY_PATTERN).map_err(|_| std::fmt::Error)?;
        f.write_str(&formatted)
    }
}

/// Parses the ISO `YYYY-MM-DD` form without checking the day against the
/// month's length, mirroring [`CalendarDate::new`].
impl FromStr for CalendarDate {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let unparseable = || ValidationError::UnparseableDate {
            value: value.to_owned(),
            pattern: "yyyy-MM-dd".to_owned(),
        };

        let mut parts = value.trim().splitn(3, '-');
        let mut next_field = || parts.next().ok_or_else(unparseable);
        let year = next_field()?.parse::<i32>().map_err(|_| unparseable())?;
        let month = next_field()?.parse::<u8>().map_err(|_| unparseable())?;
        let day = next_field()?.parse::<u8>().map_err(|_| unparseable())?;

        Self::new(year, month, day)
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value)
    }
}

impl From<CalendarDate> for String {
    fn from(value: CalendarDate) -> Self {
        format!("{:04}-{:02}-{:02}", value.year, value.month, value.day)
    }
}
