//! Premium rating
//!
//! A `RateProfile` pairs a rate table with a rounding policy. Two profiles
//! exist because the service ships in two deployments with different
//! currencies: a USD-style profile that quotes a monthly fraction of the
//! annual premium to two decimal places, and a VND-style profile that quotes
//! whole thousands. The profile is selected once at startup; rating itself is
//! a pure function and produces bit-identical output for identical input.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::QuoteError;

/// Recognized insurance product types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsuranceType {
    Life,
    Auto,
    Home,
    Health,
}

impl InsuranceType {
    /// The type whose rate is used when an applicant submits an
    /// unrecognized insurance type. Unknown types never error; they rate
    /// as life insurance. This fallback is load-bearing wire behavior.
    pub const DEFAULT: InsuranceType = InsuranceType::Life;

    /// Parses a wire-format type code, returning `None` for unknown codes.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "life" => Some(InsuranceType::Life),
            "auto" => Some(InsuranceType::Auto),
            "home" => Some(InsuranceType::Home),
            "health" => Some(InsuranceType::Health),
            _ => None,
        }
    }

    /// Returns the wire-format code
    pub fn code(&self) -> &'static str {
        match self {
            InsuranceType::Life => "life",
            InsuranceType::Auto => "auto",
            InsuranceType::Home => "home",
            InsuranceType::Health => "health",
        }
    }
}

/// A rate table + rounding policy pair
///
/// The profile determines both the per-type base rates and how the raw
/// premium is reduced to a quoted amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RateProfile {
    /// Annual rate divided by 12, rounded half-up to 2 decimal places
    MonthlyFraction,
    /// Monthly rate, rounded half-up to the nearest 1000 currency units
    RoundedThousands,
}

impl RateProfile {
    /// Returns the base rate (fraction of coverage) for an insurance type
    pub fn base_rate(&self, insurance_type: InsuranceType) -> Decimal {
        match self {
            RateProfile::MonthlyFraction => match insurance_type {
                InsuranceType::Life => dec!(0.005),
                InsuranceType::Auto => dec!(0.015),
                InsuranceType::Home => dec!(0.003),
                InsuranceType::Health => dec!(0.008),
            },
            RateProfile::RoundedThousands => match insurance_type {
                InsuranceType::Life => dec!(0.0042),
                InsuranceType::Auto => dec!(0.0125),
                InsuranceType::Home => dec!(0.0028),
                InsuranceType::Health => dec!(0.0068),
            },
        }
    }

    /// Looks up the base rate for a wire-format type code, falling back to
    /// the default (life) rate for unrecognized codes.
    pub fn base_rate_for_code(&self, code: &str) -> Decimal {
        let insurance_type = InsuranceType::from_code(code).unwrap_or(InsuranceType::DEFAULT);
        self.base_rate(insurance_type)
    }

    /// Computes the quoted premium for an application.
    ///
    /// # Arguments
    ///
    /// * `insurance_type` - Wire-format type code; unknown codes rate as life
    /// * `coverage_amount` - String-encoded integer coverage amount
    /// * `age` - Applicant age in years
    ///
    /// # Errors
    ///
    /// Returns `QuoteError::ParseError` if `coverage_amount` is not an
    /// integer, or `QuoteError::Validation` for negative coverage or age.
    pub fn premium(
        &self,
        insurance_type: &str,
        coverage_amount: &str,
        age: i32,
    ) -> Result<Decimal, QuoteError> {
        let coverage: i64 = coverage_amount
            .trim()
            .parse()
            .map_err(|_| QuoteError::parse("coverageAmount", coverage_amount))?;
        if coverage < 0 {
            return Err(QuoteError::Validation(
                "coverage amount must not be negative".to_string(),
            ));
        }
        if age < 0 {
            return Err(QuoteError::Validation("age must not be negative".to_string()));
        }

        let raw = Decimal::from(coverage) * self.base_rate_for_code(insurance_type) * age_factor(age);

        Ok(match self {
            RateProfile::MonthlyFraction => (raw / dec!(12))
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
            RateProfile::RoundedThousands => (raw / dec!(1000))
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                * dec!(1000),
        })
    }
}

impl FromStr for RateProfile {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monthly-fraction" | "monthly_fraction" => Ok(RateProfile::MonthlyFraction),
            "rounded-thousands" | "rounded_thousands" => Ok(RateProfile::RoundedThousands),
            other => Err(QuoteError::UnknownProfile(other.to_string())),
        }
    }
}

/// Returns the age-bracket multiplier applied to the base premium
pub fn age_factor(age: i32) -> Decimal {
    if age < 25 {
        dec!(1.2)
    } else if age < 35 {
        dec!(1.0)
    } else if age < 50 {
        dec!(1.1)
    } else {
        dec!(1.3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_factor_brackets() {
        assert_eq!(age_factor(18), dec!(1.2));
        assert_eq!(age_factor(24), dec!(1.2));
        assert_eq!(age_factor(25), dec!(1.0));
        assert_eq!(age_factor(34), dec!(1.0));
        assert_eq!(age_factor(35), dec!(1.1));
        assert_eq!(age_factor(49), dec!(1.1));
        assert_eq!(age_factor(50), dec!(1.3));
        assert_eq!(age_factor(80), dec!(1.3));
    }

    #[test]
    fn test_unknown_code_rates_as_life() {
        let profile = RateProfile::MonthlyFraction;
        assert_eq!(
            profile.base_rate_for_code("pet"),
            profile.base_rate(InsuranceType::Life)
        );
    }

    #[test]
    fn test_profile_from_str() {
        assert_eq!(
            "monthly-fraction".parse::<RateProfile>().unwrap(),
            RateProfile::MonthlyFraction
        );
        assert_eq!(
            "rounded_thousands".parse::<RateProfile>().unwrap(),
            RateProfile::RoundedThousands
        );
        assert!("annual".parse::<RateProfile>().is_err());
    }
}
