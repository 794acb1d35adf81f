//! Calculation options: absence policy, insurance toggles, and inclusive
//! wage contracts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Money;

/// How absence from scheduled work days affects pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AbsencePolicy {
    /// Deduct the daily wage for each absent day and forfeit weekly
    /// holiday pay for each week containing an absence.
    #[default]
    Strict,
    /// Forfeit weekly holiday pay for absent weeks but keep the daily
    /// wage.
    Moderate,
    /// No absence consequences.
    Lenient,
}

/// Per-scheme social insurance enrollment toggles.
///
/// Disabling health insurance also disables the long-term care levy,
/// which is assessed as a percentage of the health premium.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceOptions {
    /// National pension enrollment.
    #[serde(default = "default_true")]
    pub apply_national_pension: bool,
    /// Health insurance enrollment.
    #[serde(default = "default_true")]
    pub apply_health_insurance: bool,
    /// Long-term care levy (only effective while health insurance is on).
    #[serde(default = "default_true")]
    pub apply_long_term_care: bool,
    /// Employment insurance enrollment.
    #[serde(default = "default_true")]
    pub apply_employment_insurance: bool,
}

fn default_true() -> bool {
    true
}

impl Default for InsuranceOptions {
    fn default() -> Self {
        InsuranceOptions {
            apply_national_pension: true,
            apply_health_insurance: true,
            apply_long_term_care: true,
            apply_employment_insurance: true,
        }
    }
}

/// Inclusive wage (포괄임금) contract terms.
///
/// When enabled, a fixed overtime amount replaces the shift-derived
/// overtime line for monthly-salaried employees.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InclusiveWageOptions {
    /// Whether the contract is an inclusive wage contract.
    #[serde(default)]
    pub enabled: bool,
    /// The agreed hourly rate for the fixed overtime component.
    #[serde(default)]
    pub fixed_overtime_hourly_rate: Money,
    /// The number of overtime hours the fixed component covers per month.
    #[serde(default)]
    pub monthly_expected_overtime_hours: Decimal,
}

impl InclusiveWageOptions {
    /// The fixed monthly overtime amount: rate x 1.5 x expected hours.
    pub fn monthly_fixed_overtime_pay(&self) -> Money {
        self.fixed_overtime_hourly_rate
            .mul_rounded(Decimal::new(15, 1) * self.monthly_expected_overtime_hours)
    }
}
