use thiserror::Error;

/// Validation and contract errors exposed by `timemoney-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("day of the month must be between 1 and 31: {day}")]
    DayOutOfRange { day: u8 },
    #[error("month of the year must be between 1 and 12: {month}")]
    MonthOutOfRange { month: u8 },
    #[error("year must be between {min} and {max}: {year}")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    #[error("hour of day {hour} is not between 0 and 23")]
    HourOutOfRange { hour: u8 },
    #[error("hour of day {hour} is not between 1 and 12")]
    TwelveHourOutOfRange { hour: u8 },
    #[error("minute of hour {minute} is not between 0 and 59")]
    MinuteOutOfRange { minute: u8 },
    #[error("second {second} is not between 0 and 59")]
    SecondOutOfRange { second: u8 },
    #[error("millisecond {millisecond} is not between 0 and 999")]
    MillisecondOutOfRange { millisecond: u16 },
    #[error("time of day must be HH:MM: '{value}'")]
    InvalidTimeOfDay { value: String },

    #[error("unknown time unit '{value}'")]
    UnknownTimeUnit { value: String },
    #[error("duration cannot be negative: {amount}")]
    NegativeDuration { amount: i128 },
    #[error("{right} is not compatible with {left}")]
    IncompatibleQuantities { left: String, right: String },
    #[error("{operation} is not supported for {kind}")]
    UnsupportedOperation {
        operation: &'static str,
        kind: &'static str,
    },
    #[error("arithmetic overflow in {operation}")]
    Overflow { operation: &'static str },

    #[error("0 business day offset from a holiday or weekend is not valid: {date}")]
    ZeroOffsetFromNonBusinessDay { date: String },

    #[error("currency must be a 3-letter ISO code: '{value}'")]
    InvalidCurrency { value: String },
    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },

    #[error("invalid date pattern '{pattern}'")]
    InvalidPattern { pattern: String },
    #[error("'{value}' does not match pattern '{pattern}'")]
    UnparseableDate { value: String, pattern: String },
    #[error("date is outside the supported calendar range")]
    DateOutOfRange,
    #[error("instant {millis}ms is outside the supported calendar range")]
    InstantOutOfRange { millis: i64 },
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
