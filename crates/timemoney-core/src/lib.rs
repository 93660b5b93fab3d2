//! Core value types for time and money.
//!
//! This crate contains:
//! - Immutable temporal values (instants, calendar dates, times of day)
//! - Durations measured in convertible unit families
//! - Currency-scaled monetary amounts
//! - A holiday-aware business calendar and its configuration
//! - Structured validation errors

pub mod business_calendar;
pub mod clock;
pub mod domain;
pub mod error;
pub mod holiday_policy;
pub mod quantity;

pub use business_calendar::{BusinessCalendar, BusinessCalendarBuilder};
pub use clock::{FixedClock, SystemClock, TimeSource};
pub use domain::{
    CalendarDate, Currency, Duration, HourOfDay, Instant, Meridiem, MinuteOfHour, Money,
    RoundingMode, TimeOfDay, TimeUnit, UnitFamily,
};
pub use error::{CoreError, ValidationError};
pub use holiday_policy::HolidayPolicy;
pub use quantity::Quantity;
pub use rust_decimal::Decimal;
