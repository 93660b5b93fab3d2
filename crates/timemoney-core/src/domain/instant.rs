use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::{Date, Month, OffsetDateTime, PrimitiveDateTime, Time};

use crate::domain::pattern;
use crate::ValidationError;

const NANOS_PER_MILLISECOND: i128 = 1_000_000;

/// Absolute point in time with millisecond precision, counted from the Unix
/// epoch. Negative values lie before the epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Instant(i64);

impl Instant {
    pub const EPOCH: Self = Self(0);

    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn millis(self) -> i64 {
        self.0
    }

    pub fn at_midnight(year: i32, month: u8, day: u8) -> Result<Self, ValidationError> {
        Self::at(year, month, day, 0, 0, 0, 0)
    }

    /// Instant for a UTC wall-clock reading. Every field is range checked,
    /// including the day against the month's length.
    pub fn at(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        millisecond: u16,
    ) -> Result<Self, ValidationError> {
        let month_of_year =
            Month::try_from(month).map_err(|_| ValidationError::MonthOutOfRange { month })?;
        let date = Date::from_calendar_date(year, month_of_year, day).map_err(|err| {
            if err.name() == "year" {
                ValidationError::YearOutOfRange {
                    year,
                    min: time::Date::MIN.year(),
                    max: time::Date::MAX.year(),
                }
            } else {
                ValidationError::DayOutOfRange { day }
            }
        })?;

        if hour > 23 {
            return Err(ValidationError::HourOutOfRange { hour });
        }
        if minute > 59 {
            return Err(ValidationError::MinuteOutOfRange { minute });
        }
        if second > 59 {
            return Err(ValidationError::SecondOutOfRange { second });
        }
        let time = Time::from_hms_milli(hour, minute, second, millisecond)
            .map_err(|_| ValidationError::MillisecondOutOfRange { millisecond })?;

        Ok(Self::from_primitive(PrimitiveDateTime::new(date, time)))
    }

    /// Parse `input` against a date pattern, interpreting the result as UTC.
    /// Patterns without a time component resolve to midnight. Two-digit
    /// years (`yy`) are only supported for formatting and are rejected here
    /// with [`ValidationError::InvalidPattern`].
    pub fn parse(input: &str, pattern: &str) -> Result<Self, ValidationError> {
        let description = pattern::to_parse_description(pattern)?;
        let items = time::format_description::parse(&description).map_err(|_| {
            ValidationError::InvalidPattern {
                pattern: pattern.to_owned(),
            }
        })?;

        let unparseable = || ValidationError::UnparseableDate {
            value: input.to_owned(),
            pattern: pattern.to_owned(),
        };
        let date_time = match PrimitiveDateTime::parse(input, items.as_slice()) {
            Ok(date_time) => date_time,
            Err(_) => Date::parse(input, items.as_slice())
                .map_err(|_| unparseable())?
                .midnight(),
        };

        Ok(Self::from_primitive(date_time))
    }

    pub fn from_offset_datetime(value: OffsetDateTime) -> Self {
        let millis = value.unix_timestamp_nanos().div_euclid(NANOS_PER_MILLISECOND);
        // OffsetDateTime spans roughly +/-10_000 years, well inside i64 milliseconds.
        Self(millis as i64)
    }

    pub(crate) fn from_primitive(value: PrimitiveDateTime) -> Self {
        Self::from_offset_datetime(value.assume_utc())
    }

    pub fn to_offset_datetime(self) -> Result<OffsetDateTime, ValidationError> {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(self.0) * NANOS_PER_MILLISECOND)
            .map_err(|_| ValidationError::InstantOutOfRange { millis: self.0 })
    }

    pub fn is_before(self, other: Instant) -> bool {
        self.0 < other.0
    }

    pub fn is_after(self, other: Instant) -> bool {
        self.0 > other.0
    }

    pub fn format_rfc3339(self) -> Result<String, ValidationError> {
        self.to_offset_datetime()?
            .format(&Rfc3339)
            .map_err(|_| ValidationError::InstantOutOfRange { millis: self.0 })
    }
}

impl Display for Instant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.format_rfc3339() {
            Ok(formatted) => f.write_str(&formatted),
            Err(_) => write!(f, "{}ms", self.0),
        }
    }
}

impl From<OffsetDateTime> for Instant {
    fn from(value: OffsetDateTime) -> Self {
        Self::from_offset_datetime(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midnight_of_epoch_day_is_zero() {
        let instant = Instant::at_midnight(1970, 1, 1).expect("valid date");
        assert_eq!(instant, Instant::EPOCH);
    }

    #[test]
    fn millis_before_epoch_are_negative() {
        let instant = Instant::at(1969, 12, 31, 23, 59, 59, 999).expect("valid");
        assert_eq!(instant.millis(), -1);
    }

    #[test]
    fn parses_letter_pattern() {
        let parsed = Instant::parse("2010/01/01", "yyyy/MM/dd").expect("must parse");
        assert_eq!(parsed, Instant::at_midnight(2010, 1, 1).expect("valid"));
    }

    #[test]
    fn parses_time_components() {
        let parsed =
            Instant::parse("2010-01-01 13:45:30", "yyyy-MM-dd HH:mm:ss").expect("must parse");
        assert_eq!(parsed, Instant::at(2010, 1, 1, 13, 45, 30, 0).expect("valid"));
    }

    #[test]
    fn rejects_unparseable_input() {
        let err = Instant::parse("yesterday", "yyyy-MM-dd").expect_err("must fail");
        assert!(matches!(err, ValidationError::UnparseableDate { .. }));
    }

    #[test]
    fn rejects_out_of_range_fields() {
        assert_eq!(
            Instant::at(2011, 13, 1, 0, 0, 0, 0).expect_err("must fail"),
            ValidationError::MonthOutOfRange { month: 13 }
        );
        assert_eq!(
            Instant::at(2011, 2, 29, 0, 0, 0, 0).expect_err("must fail"),
            ValidationError::DayOutOfRange { day: 29 }
        );
        assert_eq!(
            Instant::at(2011, 2, 1, 24, 0, 0, 0).expect_err("must fail"),
            ValidationError::HourOutOfRange { hour: 24 }
        );
    }

    #[test]
    fn orders_by_millis() {
        let jan = Instant::at_midnight(2010, 1, 1).expect("valid");
        let feb = Instant::at_midnight(2010, 2, 1).expect("valid");

        assert!(jan.is_before(feb));
        assert!(feb.is_after(jan));
        assert!(!jan.is_before(jan));
        assert!(!jan.is_after(jan));
    }

    #[test]
    fn renders_rfc3339() {
        let instant = Instant::at(2024, 1, 1, 0, 0, 0, 0).expect("valid");
        assert_eq!(instant.to_string(), "2024-01-01T00:00:00Z");
    }
}
