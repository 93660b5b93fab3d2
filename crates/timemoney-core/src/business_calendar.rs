//! Business-day arithmetic over [`CalendarDate`].
//!
//! A business day is any day that is neither a Saturday, a Sunday nor one of
//! the calendar's holidays. Weekends are derived from the date itself; only
//! holidays are stored.

use std::collections::HashSet;

use time::Weekday;
use tracing::{debug, trace};

use crate::holiday_policy::HolidayPolicy;
use crate::{CalendarDate, ValidationError};

/// Holiday-aware calendar answering business-day questions.
///
/// The holiday set is policy state owned by the calendar: build it once,
/// adjust it with [`add_holidays`](Self::add_holidays) /
/// [`remove_holidays`](Self::remove_holidays), then share the calendar
/// read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusinessCalendar {
    holidays: HashSet<CalendarDate>,
}

impl BusinessCalendar {
    pub fn new(holidays: impl IntoIterator<Item = CalendarDate>) -> Self {
        Self {
            holidays: holidays.into_iter().collect(),
        }
    }

    pub fn builder() -> BusinessCalendarBuilder {
        BusinessCalendarBuilder::new()
    }

    /// Holidays in chronological order.
    pub fn holidays(&self) -> Vec<CalendarDate> {
        let mut holidays: Vec<CalendarDate> = self.holidays.iter().copied().collect();
        holidays.sort_unstable();
        holidays
    }

    pub fn add_holidays(&mut self, days: impl IntoIterator<Item = CalendarDate>) {
        let before = self.holidays.len();
        self.holidays.extend(days);
        debug!(
            target: "timemoney::calendar",
            added = self.holidays.len() - before,
            total = self.holidays.len(),
            "holidays added"
        );
    }

    pub fn remove_holidays<'a>(&mut self, days: impl IntoIterator<Item = &'a CalendarDate>) {
        let before = self.holidays.len();
        for day in days {
            self.holidays.remove(day);
        }
        debug!(
            target: "timemoney::calendar",
            removed = before - self.holidays.len(),
            total = self.holidays.len(),
            "holidays removed"
        );
    }

    pub fn is_holiday(&self, day: &CalendarDate) -> bool {
        self.holidays.contains(day)
    }

    pub fn is_weekend(&self, day: &CalendarDate) -> bool {
        matches!(day.weekday(), Weekday::Saturday | Weekday::Sunday)
    }

    pub fn is_business_day(&self, day: &CalendarDate) -> bool {
        !self.is_weekend(day) && !self.is_holiday(day)
    }

    pub fn next_business_day(&self, from: &CalendarDate) -> Result<CalendarDate, ValidationError> {
        self.plus_business_days(from, 1)
    }

    pub fn previous_business_day(
        &self,
        from: &CalendarDate,
    ) -> Result<CalendarDate, ValidationError> {
        self.minus_business_days(from, 1)
    }

    /// Move `business_days` business days away from `from`, backwards when
    /// negative. `from` itself is never counted. A zero offset is only valid
    /// when `from` is a business day, in which case it is returned unchanged.
    pub fn plus_business_days(
        &self,
        from: &CalendarDate,
        business_days: i32,
    ) -> Result<CalendarDate, ValidationError> {
        if business_days == 0 && !self.is_business_day(from) {
            return Err(ValidationError::ZeroOffsetFromNonBusinessDay {
                date: from.to_string(),
            });
        }

        let mut remaining = business_days.unsigned_abs();
        let mut cursor = *from;
        while remaining > 0 {
            cursor = if business_days > 0 {
                cursor.next_day()?
            } else {
                cursor.previous_day()?
            };
            if self.is_business_day(&cursor) {
                remaining -= 1;
            }
        }

        trace!(
            target: "timemoney::calendar",
            %from,
            business_days,
            landed = %cursor,
            "stepped business days"
        );
        Ok(cursor)
    }

    pub fn minus_business_days(
        &self,
        from: &CalendarDate,
        business_days: i32,
    ) -> Result<CalendarDate, ValidationError> {
        let negated = business_days
            .checked_neg()
            .ok_or(ValidationError::Overflow {
                operation: "minus_business_days",
            })?;
        self.plus_business_days(from, negated)
    }

    /// Calendar days between the two dates, regardless of order.
    pub fn number_of_days_between(&self, from: &CalendarDate, to: &CalendarDate) -> i64 {
        (to.to_date() - from.to_date()).whole_days().abs()
    }

    /// Business days in `[earlier, later)`, regardless of argument order.
    pub fn number_of_business_days_between(
        &self,
        from: &CalendarDate,
        to: &CalendarDate,
    ) -> Result<u32, ValidationError> {
        let (mut cursor, later) = if from.to_date() <= to.to_date() {
            (*from, *to)
        } else {
            (*to, *from)
        };

        let end = later.to_date();
        let mut count = 0;
        while cursor.to_date() < end {
            if self.is_business_day(&cursor) {
                count += 1;
            }
            cursor = cursor.next_day()?;
        }

        Ok(count)
    }

    pub fn first_day_of_month(&self, date: &CalendarDate) -> CalendarDate {
        date.first_day_of_month()
    }

    pub fn last_day_of_month(&self, date: &CalendarDate) -> CalendarDate {
        date.last_day_of_month()
    }

    pub fn first_business_day_of_month(
        &self,
        date: &CalendarDate,
    ) -> Result<CalendarDate, ValidationError> {
        let first = self.first_day_of_month(date);
        if self.is_business_day(&first) {
            return Ok(first);
        }
        self.next_business_day(&first)
    }

    pub fn last_business_day_of_month(
        &self,
        date: &CalendarDate,
    ) -> Result<CalendarDate, ValidationError> {
        let last = self.last_day_of_month(date);
        if self.is_business_day(&last) {
            return Ok(last);
        }
        self.previous_business_day(&last)
    }
}

impl From<HolidayPolicy> for BusinessCalendar {
    fn from(policy: HolidayPolicy) -> Self {
        BusinessCalendarBuilder::new().with_policy(policy).build()
    }
}

/// Builder for seeding a [`BusinessCalendar`] with its initial holidays.
///
/// # Example
///
/// ```rust
/// use timemoney_core::{BusinessCalendar, CalendarDate};
///
/// let independence_day = CalendarDate::new(2011, 7, 4)?;
/// let calendar = BusinessCalendar::builder()
///     .with_holiday(independence_day)
///     .build();
///
/// assert!(calendar.is_holiday(&independence_day));
/// # Ok::<(), timemoney_core::ValidationError>(())
/// ```
#[derive(Debug, Default)]
pub struct BusinessCalendarBuilder {
    holidays: HashSet<CalendarDate>,
}

impl BusinessCalendarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_holiday(mut self, day: CalendarDate) -> Self {
        self.holidays.insert(day);
        self
    }

    pub fn with_holidays(mut self, days: impl IntoIterator<Item = CalendarDate>) -> Self {
        self.holidays.extend(days);
        self
    }

    /// Merge every holiday listed by `policy`.
    pub fn with_policy(mut self, policy: HolidayPolicy) -> Self {
        debug!(
            target: "timemoney::calendar",
            policy = %policy.name,
            holidays = policy.holidays.len(),
            "loading holiday policy"
        );
        self.holidays.extend(policy.holidays);
        self
    }

    pub fn build(self) -> BusinessCalendar {
        BusinessCalendar {
            holidays: self.holidays,
        }
    }
}
