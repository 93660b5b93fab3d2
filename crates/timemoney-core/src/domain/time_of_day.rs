use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Half of the day on a 12-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Meridiem {
    Am,
    Pm,
}

/// Hour of the day on a 24-hour clock, 0..=23.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HourOfDay(u8);

impl HourOfDay {
    pub fn new(hour: u8) -> Result<Self, ValidationError> {
        if hour > 23 {
            return Err(ValidationError::HourOutOfRange { hour });
        }
        Ok(Self(hour))
    }

    /// 12 AM is hour 0 and 12 PM is hour 12.
    pub fn from_12_hour(hour: u8, meridiem: Meridiem) -> Result<Self, ValidationError> {
        if !(1..=12).contains(&hour) {
            return Err(ValidationError::TwelveHourOutOfRange { hour });
        }

        let hour = match meridiem {
            Meridiem::Am => hour % 12,
            Meridiem::Pm => hour % 12 + 12,
        };
        Ok(Self(hour))
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub fn is_before(self, other: HourOfDay) -> bool {
        self < other
    }

    pub fn is_after(self, other: HourOfDay) -> bool {
        self > other
    }
}

impl Display for HourOfDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// Minute of the hour, 0..=59.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MinuteOfHour(u8);

impl MinuteOfHour {
    pub fn new(minute: u8) -> Result<Self, ValidationError> {
        if minute > 59 {
            return Err(ValidationError::MinuteOutOfRange { minute });
        }
        Ok(Self(minute))
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub fn is_before(self, other: MinuteOfHour) -> bool {
        self < other
    }

    pub fn is_after(self, other: MinuteOfHour) -> bool {
        self > other
    }
}

impl Display for MinuteOfHour {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// Wall-clock reading without a date, ordered by hour then minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: HourOfDay,
    minute: MinuteOfHour,
}

impl TimeOfDay {
    pub const MIDNIGHT: Self = Self {
        hour: HourOfDay(0),
        minute: MinuteOfHour(0),
    };
    pub const MIDDAY: Self = Self {
        hour: HourOfDay(12),
        minute: MinuteOfHour(0),
    };

    pub const fn new(hour: HourOfDay, minute: MinuteOfHour) -> Self {
        Self { hour, minute }
    }

    pub fn hour_and_minute(hour: u8, minute: u8) -> Result<Self, ValidationError> {
        Ok(Self::new(HourOfDay::new(hour)?, MinuteOfHour::new(minute)?))
    }

    pub fn hour_and_minute_12(
        hour: u8,
        minute: u8,
        meridiem: Meridiem,
    ) -> Result<Self, ValidationError> {
        Ok(Self::new(
            HourOfDay::from_12_hour(hour, meridiem)?,
            MinuteOfHour::new(minute)?,
        ))
    }

    pub const fn hour(self) -> HourOfDay {
        self.hour
    }

    pub const fn minute(self) -> MinuteOfHour {
        self.minute
    }

    pub fn is_before(self, other: TimeOfDay) -> bool {
        self < other
    }

    pub fn is_after(self, other: TimeOfDay) -> bool {
        self > other
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidTimeOfDay {
            value: value.to_owned(),
        };

        let (hour, minute) = value.trim().split_once(':').ok_or_else(invalid)?;
        let hour = hour.parse::<u8>().map_err(|_| invalid())?;
        let minute = minute.parse::<u8>().map_err(|_| invalid())?;

        Self::hour_and_minute(hour, minute)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value)
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}
