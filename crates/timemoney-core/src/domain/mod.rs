//! # Domain Values
//!
//! Immutable temporal and monetary values with validation at construction.
//!
//! ## Values
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Instant`] | Point on the UTC timeline, millisecond precision |
//! | [`CalendarDate`] | Year, month and day without a time |
//! | [`TimeOfDay`] | Hour and minute without a date |
//! | [`HourOfDay`] / [`MinuteOfHour`] | Validated clock components |
//! | [`TimeUnit`] | Unit of a [`Duration`], grouped into convertible families |
//! | [`Duration`] | Non-negative length of time in one unit |
//! | [`Currency`] | ISO 4217 currency code |
//! | [`Money`] | Decimal amount in a single currency |
//!
//! ## Parsing
//!
//! [`Instant::parse`] and [`CalendarDate::parse`] accept letter patterns such
//! as `yyyy-MM-dd HH:mm` as well as `time` format descriptions such as
//! `[year]-[month]-[day]`:
//!
//! ```rust
//! use timemoney_core::{CalendarDate, ValidationError};
//!
//! let date = CalendarDate::parse("2010-01-01", "yyyy-MM-dd")?;
//! assert_eq!(date.to_string(), "01-Jan-2010");
//! # Ok::<(), ValidationError>(())
//! ```

mod calendar_date;
mod currency;
mod duration;
mod instant;
mod money;
pub(crate) mod pattern;
mod time_of_day;
pub mod unit;

pub use calendar_date::{CalendarDate, MAX_YEAR, MIN_YEAR};
pub use currency::Currency;
pub use duration::Duration;
pub use instant::Instant;
pub use money::{Money, RoundingMode, DEFAULT_ROUNDING};
pub use time_of_day::{HourOfDay, Meridiem, MinuteOfHour, TimeOfDay};
pub use unit::{TimeUnit, UnitFamily};
