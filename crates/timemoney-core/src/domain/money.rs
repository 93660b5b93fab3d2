use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::domain::Currency;
use crate::quantity::Quantity;
use crate::ValidationError;

/// Rounding applied when an amount is brought to its currency's scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Away from zero.
    Up,
    /// Towards zero.
    Down,
    Ceiling,
    Floor,
    HalfUp,
    HalfDown,
    /// Banker's rounding.
    HalfEven,
}

impl From<RoundingMode> for RoundingStrategy {
    fn from(value: RoundingMode) -> Self {
        match value {
            RoundingMode::Up => Self::AwayFromZero,
            RoundingMode::Down => Self::ToZero,
            RoundingMode::Ceiling => Self::ToPositiveInfinity,
            RoundingMode::Floor => Self::ToNegativeInfinity,
            RoundingMode::HalfUp => Self::MidpointAwayFromZero,
            RoundingMode::HalfDown => Self::MidpointTowardZero,
            RoundingMode::HalfEven => Self::MidpointNearestEven,
        }
    }
}

pub const DEFAULT_ROUNDING: RoundingMode = RoundingMode::HalfEven;

/// Amount of a single currency, held at the currency's minor-unit scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMoney")]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

#[derive(Deserialize)]
struct RawMoney {
    amount: Decimal,
    currency: Currency,
}

impl TryFrom<RawMoney> for Money {
    type Error = ValidationError;

    fn try_from(value: RawMoney) -> Result<Self, Self::Error> {
        Self::at_currency_scale(value.amount, value.currency, "deserialize")
    }
}

impl Money {
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self::with_rounding(amount, currency, DEFAULT_ROUNDING)
    }

    /// Round `amount` to the currency's fraction digits.
    ///
    /// A `Decimal` holds at most 28 significant digits, so amounts with more
    /// than `28 - fraction_digits` integer digits keep a smaller scale here.
    /// The fallible operations (`plus`, `minus`, `times`, `from_f64` and
    /// deserialization) report that case as [`ValidationError::Overflow`].
    pub fn with_rounding(amount: Decimal, currency: Currency, rounding: RoundingMode) -> Self {
        let scale = currency.fraction_digits();
        let mut amount = amount.round_dp_with_strategy(scale, rounding.into());
        amount.rescale(scale);

        Self { amount, currency }
    }

    fn at_currency_scale(
        amount: Decimal,
        currency: Currency,
        operation: &'static str,
    ) -> Result<Self, ValidationError> {
        let money = Self::new(amount, currency);
        if money.amount.scale() != currency.fraction_digits() {
            return Err(ValidationError::Overflow { operation });
        }
        Ok(money)
    }

    pub fn of(amount: impl Into<Decimal>, currency: Currency) -> Self {
        Self::new(amount.into(), currency)
    }

    pub fn from_f64(
        amount: f64,
        currency: Currency,
        rounding: RoundingMode,
    ) -> Result<Self, ValidationError> {
        let amount = Decimal::try_from(amount)
            .map_err(|_| ValidationError::NonFiniteValue { field: "amount" })?;
        let money = Self::with_rounding(amount, currency, rounding);
        if money.amount.scale() != currency.fraction_digits() {
            return Err(ValidationError::Overflow { operation: "from_f64" });
        }
        Ok(money)
    }

    pub fn dollars(amount: impl Into<Decimal>) -> Self {
        Self::of(amount, Currency::USD)
    }

    pub fn zero(currency: Currency) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    pub const fn currency(&self) -> Currency {
        self.currency
    }

    pub fn has_same_currency(&self, other: &Money) -> bool {
        self.currency == other.currency
    }
}

impl Quantity for Money {
    type Unit = Currency;

    fn unit(&self) -> Currency {
        self.currency
    }

    fn is_compatible_with(&self, other: &Self) -> bool {
        self.has_same_currency(other)
    }

    fn negate(&self) -> Result<Self, ValidationError> {
        Ok(Self::new(-self.amount, self.currency))
    }

    fn plus(&self, other: &Self) -> Result<Self, ValidationError> {
        self.ensure_compatible(other)?;

        let total = self
            .amount
            .checked_add(other.amount)
            .ok_or(ValidationError::Overflow { operation: "plus" })?;
        Self::at_currency_scale(total, self.currency, "plus")
    }

    fn minus(&self, other: &Self) -> Result<Self, ValidationError> {
        self.plus(&other.negate()?)
    }

    fn times(&self, multiplier: Decimal) -> Result<Self, ValidationError> {
        let product = self
            .amount
            .checked_mul(multiplier)
            .ok_or(ValidationError::Overflow { operation: "times" })?;
        Self::at_currency_scale(product, self.currency, "times")
    }

    fn compare(&self, other: &Self) -> Result<Ordering, ValidationError> {
        self.ensure_compatible(other)?;
        Ok(self.amount.cmp(&other.amount))
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).ok()
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.currency, self.amount)
    }
}
