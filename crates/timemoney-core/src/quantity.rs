//! Arithmetic contract shared by measurable quantities.
//!
//! A quantity is a magnitude paired with a unit of comparison. Two quantities
//! can only be added, subtracted or compared when their units are compatible;
//! each implementor decides what compatible means (same time-unit family for
//! [`Duration`](crate::Duration), same currency for [`Money`](crate::Money)).

use std::cmp::Ordering;
use std::fmt::Display;

use rust_decimal::Decimal;

use crate::ValidationError;

pub trait Quantity: Sized + Display {
    /// Unit of comparison used to decide compatibility.
    type Unit;

    fn unit(&self) -> Self::Unit;

    /// Whether `self` and `other` may be combined or compared.
    fn is_compatible_with(&self, other: &Self) -> bool;

    fn negate(&self) -> Result<Self, ValidationError>;

    fn plus(&self, other: &Self) -> Result<Self, ValidationError>;

    fn minus(&self, other: &Self) -> Result<Self, ValidationError>;

    fn times(&self, multiplier: Decimal) -> Result<Self, ValidationError>;

    /// Three-way comparison; fails when the operands are not compatible.
    fn compare(&self, other: &Self) -> Result<Ordering, ValidationError>;

    fn ensure_compatible(&self, other: &Self) -> Result<(), ValidationError> {
        if self.is_compatible_with(other) {
            return Ok(());
        }

        Err(ValidationError::IncompatibleQuantities {
            left: self.to_string(),
            right: other.to_string(),
        })
    }

    fn is_less_than(&self, other: &Self) -> Result<bool, ValidationError> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    fn is_greater_than(&self, other: &Self) -> Result<bool, ValidationError> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    fn is_equal_to(&self, other: &Self) -> Result<bool, ValidationError> {
        Ok(self.compare(other)? == Ordering::Equal)
    }
}
