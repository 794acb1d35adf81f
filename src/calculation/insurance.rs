//! Social insurance deductions, employee share.
//!
//! Four schemes off the insurable monthly income: national pension
//! (base clamped between floor and cap), health insurance (uncapped),
//! long-term care (a percentage of the health premium, not of income),
//! and employment insurance (base capped). Each line rounds to the won
//! independently.

use crate::models::{InsuranceBreakdown, InsuranceOptions, Money};
use crate::rates::RateTable;

/// Calculates the four insurance lines for an insurable income.
///
/// Disabled schemes contribute zero; disabling health insurance also
/// zeroes long-term care since the levy has no base without a health
/// premium.
pub fn calculate_insurance(
    insurable_income: Money,
    options: &InsuranceOptions,
    rates: &RateTable,
) -> InsuranceBreakdown {
    let income = insurable_income.floor_at_zero();

    let national_pension = if options.apply_national_pension {
        income
            .clamp_to(rates.pension_base_floor, rates.pension_base_cap)
            .mul_rounded(rates.pension_rate)
    } else {
        Money::ZERO
    };

    let health_insurance = if options.apply_health_insurance {
        income.mul_rounded(rates.health_rate)
    } else {
        Money::ZERO
    };

    let long_term_care = if options.apply_health_insurance && options.apply_long_term_care {
        health_insurance.mul_rounded(rates.long_term_care_rate)
    } else {
        Money::ZERO
    };

    let employment_insurance = if options.apply_employment_insurance {
        income
            .clamp_to(Money::ZERO, rates.employment_base_cap)
            .mul_rounded(rates.employment_rate)
    } else {
        Money::ZERO
    };

    InsuranceBreakdown {
        national_pension,
        health_insurance,
        long_term_care,
        employment_insurance,
        total: national_pension + health_insurance + long_term_care + employment_insurance,
    }
}
