use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::unit::{TimeUnit, UnitFamily};
use crate::quantity::Quantity;
use crate::ValidationError;

/// Unsigned span of time measured in a [`TimeUnit`].
///
/// Two durations are equal when their magnitudes agree once converted to the
/// family's base unit, so `10 years == 120 months` and `1 day == 24 hours`.
/// A zero duration is compatible with every unit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "RawDuration")]
pub struct Duration {
    amount: u64,
    unit: TimeUnit,
}

#[derive(Deserialize)]
struct RawDuration {
    amount: i128,
    unit: TimeUnit,
}

impl TryFrom<RawDuration> for Duration {
    type Error = ValidationError;

    fn try_from(value: RawDuration) -> Result<Self, Self::Error> {
        let amount = u64::try_from(value.amount).map_err(|_| {
            if value.amount < 0 {
                ValidationError::NegativeDuration {
                    amount: value.amount,
                }
            } else {
                ValidationError::Overflow {
                    operation: "deserialize",
                }
            }
        })?;
        Ok(Self::of(amount, value.unit))
    }
}

impl Duration {
    pub const NONE: Self = Self::of(0, TimeUnit::Millisecond);

    /// Validating constructor for signed input.
    pub fn new(amount: i64, unit: TimeUnit) -> Result<Self, ValidationError> {
        let amount = u64::try_from(amount).map_err(|_| ValidationError::NegativeDuration {
            amount: i128::from(amount),
        })?;
        Ok(Self::of(amount, unit))
    }

    pub const fn of(amount: u64, unit: TimeUnit) -> Self {
        Self { amount, unit }
    }

    pub const fn milliseconds(amount: u64) -> Self {
        Self::of(amount, TimeUnit::Millisecond)
    }

    pub const fn seconds(amount: u64) -> Self {
        Self::of(amount, TimeUnit::Second)
    }

    pub const fn minutes(amount: u64) -> Self {
        Self::of(amount, TimeUnit::Minute)
    }

    pub const fn hours(amount: u64) -> Self {
        Self::of(amount, TimeUnit::Hour)
    }

    pub const fn days(amount: u64) -> Self {
        Self::of(amount, TimeUnit::Day)
    }

    pub const fn months(amount: u64) -> Self {
        Self::of(amount, TimeUnit::Month)
    }

    pub const fn quarters(amount: u64) -> Self {
        Self::of(amount, TimeUnit::Quarter)
    }

    pub const fn years(amount: u64) -> Self {
        Self::of(amount, TimeUnit::Year)
    }

    pub const fn amount(&self) -> u64 {
        self.amount
    }

    pub const fn time_unit(&self) -> TimeUnit {
        self.unit
    }

    pub const fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Magnitude expressed in the family's base unit (milliseconds or months).
    pub fn in_base_units(&self) -> u128 {
        u128::from(self.amount) * self.unit.conversion_factor() as u128
    }

    pub fn has_convertible_unit(&self, other: &Duration) -> bool {
        if self.is_zero() || other.is_zero() {
            return true;
        }

        self.unit.is_convertible_to(other.unit)
    }

    fn from_base_units(base_units: u128, unit: TimeUnit) -> Result<Self, ValidationError> {
        let amount =
            u64::try_from(base_units).map_err(|_| ValidationError::Overflow { operation: "duration" })?;
        Ok(Self::of(amount, unit))
    }
}

impl Quantity for Duration {
    type Unit = UnitFamily;

    fn unit(&self) -> UnitFamily {
        self.unit.family()
    }

    fn is_compatible_with(&self, other: &Self) -> bool {
        self.has_convertible_unit(other)
    }

    fn negate(&self) -> Result<Self, ValidationError> {
        Err(ValidationError::UnsupportedOperation {
            operation: "negate",
            kind: "duration",
        })
    }

    fn plus(&self, other: &Self) -> Result<Self, ValidationError> {
        self.ensure_compatible(other)?;

        let total = self
            .in_base_units()
            .checked_add(other.in_base_units())
            .ok_or(ValidationError::Overflow { operation: "plus" })?;
        let unit = if self.is_zero() {
            other.unit.base_unit()
        } else {
            self.unit.base_unit()
        };

        Self::from_base_units(total, unit)
    }

    fn minus(&self, other: &Self) -> Result<Self, ValidationError> {
        self.ensure_compatible(other)?;

        let (left, right) = (self.in_base_units(), other.in_base_units());
        let difference = left
            .checked_sub(right)
            .ok_or(ValidationError::NegativeDuration {
                amount: left as i128 - right as i128,
            })?;

        Self::from_base_units(difference, self.unit.base_unit())
    }

    fn times(&self, multiplier: Decimal) -> Result<Self, ValidationError> {
        let product = Decimal::from(self.amount)
            .checked_mul(multiplier)
            .ok_or(ValidationError::Overflow { operation: "times" })?
            .trunc();

        if product.is_sign_negative() && !product.is_zero() {
            return Err(ValidationError::NegativeDuration {
                amount: product.to_i128().unwrap_or(i128::MIN),
            });
        }

        let amount = product
            .to_u64()
            .ok_or(ValidationError::Overflow { operation: "times" })?;
        Ok(Self::of(amount, self.unit))
    }

    fn compare(&self, other: &Self) -> Result<Ordering, ValidationError> {
        self.ensure_compatible(other)?;
        Ok(self.in_base_units().cmp(&other.in_base_units()))
    }
}

impl PartialEq for Duration {
    fn eq(&self, other: &Self) -> bool {
        self.has_convertible_unit(other) && self.in_base_units() == other.in_base_units()
    }
}

impl Eq for Duration {}

impl Hash for Duration {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let base_units = self.in_base_units();
        // Zero equals zero in every family.
        if base_units != 0 {
            self.unit.family().hash(state);
        }
        base_units.hash(state);
    }
}

impl PartialOrd for Duration {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).ok()
    }
}

impl Display for Duration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.unit)
    }
}
