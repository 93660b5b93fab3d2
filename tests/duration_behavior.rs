//! Behavior-driven tests for durations
//!
//! These tests verify HOW durations in different units are compared and
//! combined, and that unit families never mix.

use proptest::prelude::*;
use timemoney_tests::{Decimal, Duration, Quantity, TimeUnit, ValidationError};

// =============================================================================
// Duration: Equality Across Units
// =============================================================================

#[test]
fn when_units_share_a_family_durations_compare_by_magnitude() {
    assert_eq!(Duration::years(10), Duration::months(120));
    assert_eq!(Duration::quarters(4), Duration::years(1));
    assert_eq!(Duration::days(1), Duration::hours(24));
    assert_eq!(Duration::minutes(1), Duration::milliseconds(60_000));
    assert!(Duration::hours(2) > Duration::minutes(119));
}

#[test]
fn when_units_are_from_different_families_durations_are_unordered() {
    // Given: Thirty days and one month
    let days = Duration::days(30);
    let month = Duration::months(1);

    // Then: They are neither equal nor ordered
    assert_ne!(days, month);
    assert_eq!(days.partial_cmp(&month), None);

    // And: Explicit comparison reports the incompatibility
    let err = days.compare(&month).expect_err("must fail");
    assert!(matches!(err, ValidationError::IncompatibleQuantities { .. }));
}

#[test]
fn when_adding_across_families_the_operation_fails() {
    let err = Duration::months(10)
        .plus(&Duration::milliseconds(100))
        .expect_err("must fail");
    assert_eq!(
        err,
        ValidationError::IncompatibleQuantities {
            left: "10 month".to_owned(),
            right: "100 millisecond".to_owned(),
        }
    );
    assert!(Duration::hours(100) > Duration::minutes(100));
}

#[test]
fn when_a_calendar_zero_meets_a_sub_day_duration_the_sum_is_unchanged() {
    let zero_years = Duration::of(0, TimeUnit::Year);
    let ninety_minutes = Duration::minutes(90);

    let sum = zero_years.plus(&ninety_minutes).expect("zero is compatible");
    assert_eq!(sum, ninety_minutes);
    assert_eq!(sum.time_unit(), TimeUnit::Millisecond);

    let sum = ninety_minutes.plus(&zero_years).expect("zero is compatible");
    assert_eq!(sum, ninety_minutes);
}

#[test]
fn when_duration_is_zero_it_is_compatible_with_any_unit() {
    assert!(Duration::NONE.is_compatible_with(&Duration::years(1)));
    assert_eq!(Duration::NONE, Duration::of(0, TimeUnit::Quarter));
    assert_eq!(
        Duration::NONE.plus(&Duration::years(1)).expect("compatible"),
        Duration::months(12)
    );
}

// =============================================================================
// Duration: Arithmetic
// =============================================================================

#[test]
fn when_adding_mixed_units_result_is_in_the_base_unit() {
    let total = Duration::hours(1).plus(&Duration::minutes(30)).expect("compatible");

    assert_eq!(total.time_unit(), TimeUnit::Millisecond);
    assert_eq!(total.amount(), 5_400_000);
    assert_eq!(total, Duration::minutes(90));
}

#[test]
fn when_subtracting_past_zero_a_negative_duration_error_is_returned() {
    let err = Duration::minutes(1)
        .minus(&Duration::seconds(61))
        .expect_err("must fail");
    assert_eq!(err, ValidationError::NegativeDuration { amount: -1_000 });
}

#[test]
fn when_multiplying_fractional_results_are_truncated() {
    let scaled = Duration::days(3).times(Decimal::new(15, 1)).expect("in range");
    assert_eq!(scaled, Duration::days(4));

    assert!(Duration::days(3).times(Decimal::NEGATIVE_ONE).is_err());
}

#[test]
fn when_negated_a_duration_refuses() {
    assert!(matches!(
        Duration::days(1).negate().expect_err("must fail"),
        ValidationError::UnsupportedOperation { .. }
    ));
}

#[test]
fn when_built_from_a_negative_amount_construction_fails() {
    assert!(matches!(
        Duration::new(-5, TimeUnit::Day).expect_err("must fail"),
        ValidationError::NegativeDuration { amount: -5 }
    ));
}

#[test]
fn when_unit_text_is_singular_or_plural_it_parses() {
    assert_eq!("days".parse::<TimeUnit>().expect("valid"), TimeUnit::Day);
    assert_eq!("quarter".parse::<TimeUnit>().expect("valid"), TimeUnit::Quarter);
    assert!("fortnight".parse::<TimeUnit>().is_err());
}

// =============================================================================
// Duration: Properties
// =============================================================================

fn sub_day_unit() -> impl Strategy<Value = TimeUnit> {
    prop_oneof![
        Just(TimeUnit::Millisecond),
        Just(TimeUnit::Second),
        Just(TimeUnit::Minute),
        Just(TimeUnit::Hour),
        Just(TimeUnit::Day),
    ]
}

fn any_unit() -> impl Strategy<Value = TimeUnit> {
    proptest::sample::select(TimeUnit::ALL.to_vec())
}

proptest! {
    #[test]
    fn base_units_divided_by_the_factor_restore_the_amount(
        amount in 0u64..1_000_000_000,
        unit in any_unit(),
    ) {
        let duration = Duration::of(amount, unit);
        let factor = unit.conversion_factor() as u128;

        prop_assert_eq!(duration.in_base_units() / factor, u128::from(amount));
        prop_assert_eq!(duration.in_base_units() % factor, 0);
    }

    #[test]
    fn adding_then_subtracting_restores_the_magnitude(
        a in 0u64..1_000_000,
        b in 0u64..1_000_000,
        unit_a in sub_day_unit(),
        unit_b in sub_day_unit(),
    ) {
        let left = Duration::of(a, unit_a);
        let right = Duration::of(b, unit_b);

        let round_trip = left.plus(&right).and_then(|sum| sum.minus(&right));

        prop_assert_eq!(round_trip, Ok(left));
    }

    #[test]
    fn zero_of_any_unit_is_the_additive_identity(
        amount in 0u64..1_000_000,
        unit in any_unit(),
        zero_unit in any_unit(),
    ) {
        let value = Duration::of(amount, unit);
        let zero = Duration::of(0, zero_unit);

        prop_assert_eq!(zero.plus(&value), Ok(value));
        prop_assert_eq!(value.plus(&zero), Ok(value));
    }

    #[test]
    fn addition_is_commutative(
        a in 0u64..1_000_000,
        b in 0u64..1_000_000,
        unit_a in sub_day_unit(),
        unit_b in sub_day_unit(),
    ) {
        let left = Duration::of(a, unit_a);
        let right = Duration::of(b, unit_b);

        prop_assert_eq!(left.plus(&right), right.plus(&left));
    }
}
