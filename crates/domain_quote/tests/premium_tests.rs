//! Premium Rating Tests
//!
//! This module contains tests for the rating profiles:
//! - Concrete premium amounts under both profiles
//! - Age bracket boundaries and monotonicity
//! - The unknown-type fallback to the life rate
//! - Parse and validation failures
//! - Determinism (property-based)
//!
//! # Test Organization
//!
//! - `monthly_fraction_tests` - USD-style profile amounts
//! - `rounded_thousands_tests` - VND-style profile amounts
//! - `fallback_tests` - unknown insurance type behavior
//! - `input_tests` - parse and validation errors
//! - `property_tests` - determinism and bracket ordering

use domain_quote::{QuoteError, RateProfile};
use proptest::prelude::*;
use rust_decimal_macros::dec;

// ============================================================================
// MONTHLY-FRACTION PROFILE TESTS
// ============================================================================

mod monthly_fraction_tests {
    use super::*;

    /// Verifies the reference case: 100000 * 0.005 * 1.0 / 12 = 41.67
    #[test]
    fn test_life_100k_age_30() {
        let premium = RateProfile::MonthlyFraction
            .premium("life", "100000", 30)
            .unwrap();
        assert_eq!(premium, dec!(41.67), "life/100000/30 should quote 41.67");
    }

    #[test]
    fn test_auto_50k_age_22() {
        // 50000 * 0.015 * 1.2 / 12 = 75.00
        let premium = RateProfile::MonthlyFraction
            .premium("auto", "50000", 22)
            .unwrap();
        assert_eq!(premium, dec!(75.00));
    }

    #[test]
    fn test_home_200k_age_40() {
        // 200000 * 0.003 * 1.1 / 12 = 55.00
        let premium = RateProfile::MonthlyFraction
            .premium("home", "200000", 40)
            .unwrap();
        assert_eq!(premium, dec!(55.00));
    }

    #[test]
    fn test_health_75k_age_55() {
        // 75000 * 0.008 * 1.3 / 12 = 65.00
        let premium = RateProfile::MonthlyFraction
            .premium("health", "75000", 55)
            .unwrap();
        assert_eq!(premium, dec!(65.00));
    }

    /// Sub-cent raw amounts round half-up, not banker's
    #[test]
    fn test_rounds_half_up_to_two_places() {
        // 1000 * 0.005 * 1.0 / 12 = 0.41666... -> 0.42
        let premium = RateProfile::MonthlyFraction
            .premium("life", "1000", 30)
            .unwrap();
        assert_eq!(premium, dec!(0.42));
    }

    #[test]
    fn test_zero_coverage_quotes_zero() {
        let premium = RateProfile::MonthlyFraction.premium("life", "0", 30).unwrap();
        assert_eq!(premium, dec!(0.00));
    }
}

// ============================================================================
// ROUNDED-THOUSANDS PROFILE TESTS
// ============================================================================

mod rounded_thousands_tests {
    use super::*;

    /// Verifies the reference case: 50000 * 0.0125 * 1.2 = 750 -> 1000
    #[test]
    fn test_auto_50k_age_22_rounds_up_to_thousand() {
        let premium = RateProfile::RoundedThousands
            .premium("auto", "50000", 22)
            .unwrap();
        assert_eq!(premium, dec!(1000), "raw 750 should round to 1000");
    }

    #[test]
    fn test_life_100m_age_30() {
        // 100_000_000 * 0.0042 * 1.0 = 420000, already a whole thousand
        let premium = RateProfile::RoundedThousands
            .premium("life", "100000000", 30)
            .unwrap();
        assert_eq!(premium, dec!(420000));
    }

    #[test]
    fn test_rounds_down_below_midpoint() {
        // 100000 * 0.0028 * 1.1 = 308 -> 0
        let premium = RateProfile::RoundedThousands
            .premium("home", "100000", 40)
            .unwrap();
        assert_eq!(premium, dec!(0));
    }

    #[test]
    fn test_result_is_integral() {
        let premium = RateProfile::RoundedThousands
            .premium("health", "73500000", 51)
            .unwrap();
        assert_eq!(premium % dec!(1000), dec!(0), "quote must be a whole thousand");
    }
}

// ============================================================================
// FALLBACK TESTS
// ============================================================================

mod fallback_tests {
    use super::*;

    /// Unknown types never error; they rate as life insurance
    #[test]
    fn test_unknown_type_uses_life_rate() {
        let life = RateProfile::MonthlyFraction
            .premium("life", "100000", 30)
            .unwrap();
        let unknown = RateProfile::MonthlyFraction
            .premium("travel", "100000", 30)
            .unwrap();
        assert_eq!(unknown, life, "unrecognized type should fall back to life rate");
    }

    #[test]
    fn test_empty_type_uses_life_rate() {
        let life = RateProfile::RoundedThousands
            .premium("life", "50000000", 40)
            .unwrap();
        let blank = RateProfile::RoundedThousands
            .premium("", "50000000", 40)
            .unwrap();
        assert_eq!(blank, life);
    }

    /// The fallback is case-sensitive, matching the original lookup
    #[test]
    fn test_uppercase_code_is_unknown() {
        let life = RateProfile::MonthlyFraction
            .premium("life", "100000", 30)
            .unwrap();
        let upper = RateProfile::MonthlyFraction
            .premium("AUTO", "100000", 30)
            .unwrap();
        assert_eq!(upper, life);
    }
}

// ============================================================================
// INPUT TESTS
// ============================================================================

mod input_tests {
    use super::*;

    #[test]
    fn test_non_integer_coverage_is_parse_error() {
        let err = RateProfile::MonthlyFraction
            .premium("life", "a lot", 30)
            .unwrap_err();
        assert!(matches!(err, QuoteError::ParseError { .. }));
    }

    #[test]
    fn test_decimal_coverage_is_parse_error() {
        let err = RateProfile::MonthlyFraction
            .premium("life", "100000.50", 30)
            .unwrap_err();
        assert!(matches!(err, QuoteError::ParseError { .. }));
    }

    #[test]
    fn test_parse_error_names_wire_field() {
        let err = RateProfile::MonthlyFraction
            .premium("life", "??", 30)
            .unwrap_err();
        assert_eq!(err, QuoteError::parse("coverageAmount", "??"));
    }

    #[test]
    fn test_negative_coverage_rejected() {
        let err = RateProfile::MonthlyFraction
            .premium("life", "-100000", 30)
            .unwrap_err();
        assert!(matches!(err, QuoteError::Validation(_)));
    }

    #[test]
    fn test_negative_age_rejected() {
        let err = RateProfile::MonthlyFraction
            .premium("life", "100000", -1)
            .unwrap_err();
        assert!(matches!(err, QuoteError::Validation(_)));
    }

    /// Surrounding whitespace is tolerated, as the original parseInt was
    #[test]
    fn test_coverage_with_whitespace_parses() {
        let premium = RateProfile::MonthlyFraction
            .premium("life", " 100000 ", 30)
            .unwrap();
        assert_eq!(premium, dec!(41.67));
    }
}

// ============================================================================
// PROPERTY TESTS
// ============================================================================

mod property_tests {
    use super::*;

    fn any_profile() -> impl Strategy<Value = RateProfile> {
        prop_oneof![
            Just(RateProfile::MonthlyFraction),
            Just(RateProfile::RoundedThousands),
        ]
    }

    fn any_type() -> impl Strategy<Value = &'static str> {
        prop_oneof![
            Just("life"),
            Just("auto"),
            Just("home"),
            Just("health"),
            Just("unknown"),
        ]
    }

    proptest! {
        /// Repeated calls with identical input yield identical output
        #[test]
        fn premium_is_deterministic(
            profile in any_profile(),
            insurance_type in any_type(),
            coverage in 0i64..1_000_000_000,
            age in 0i32..120,
        ) {
            let coverage = coverage.to_string();
            let first = profile.premium(insurance_type, &coverage, age).unwrap();
            let second = profile.premium(insurance_type, &coverage, age).unwrap();
            prop_assert_eq!(first, second);
        }

        /// The 18 and 70 brackets are never cheaper than the 30 bracket.
        /// Coverage is kept large enough that the bracket gap always exceeds
        /// the rounded-thousands rounding width.
        #[test]
        fn bracket_ordering_holds(
            profile in any_profile(),
            insurance_type in any_type(),
            coverage in 10_000_000i64..1_000_000_000,
        ) {
            let coverage = coverage.to_string();
            let at_18 = profile.premium(insurance_type, &coverage, 18).unwrap();
            let at_30 = profile.premium(insurance_type, &coverage, 30).unwrap();
            let at_70 = profile.premium(insurance_type, &coverage, 70).unwrap();
            prop_assert!(at_18 > at_30, "age 18 ({}) should exceed age 30 ({})", at_18, at_30);
            prop_assert!(at_70 > at_30, "age 70 ({}) should exceed age 30 ({})", at_70, at_30);
        }

        /// Premiums are never negative for valid input
        #[test]
        fn premium_is_non_negative(
            profile in any_profile(),
            insurance_type in any_type(),
            coverage in 0i64..1_000_000_000,
            age in 0i32..120,
        ) {
            let premium = profile
                .premium(insurance_type, &coverage.to_string(), age)
                .unwrap();
            prop_assert!(premium >= rust_decimal::Decimal::ZERO);
        }
    }
}
