//! Wage structure types and the monthly-hours convention.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Money;

/// How the contracted pay is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "wage_type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WageType {
    /// A fixed monthly salary covering the contracted schedule.
    #[serde(alias = "MONTHLY")]
    MonthlyFixed {
        /// The contracted monthly base salary.
        base_salary: Money,
    },
    /// An hourly wage paid against actual worked shifts.
    #[serde(alias = "HOURLY")]
    HourlyMonthly {
        /// The contracted hourly wage.
        hourly_wage: Money,
    },
    /// A monthly contract amount backed by an hourly wage formula. The
    /// engine derives the legal minimum from the hourly wage and tops the
    /// difference up with a guarantee allowance.
    HourlyBasedMonthly {
        /// The contracted hourly wage.
        hourly_wage: Money,
        /// The agreed monthly contract amount.
        contract_monthly_salary: Money,
    },
}

impl WageType {
    /// A short label for logs and summaries.
    pub fn label(&self) -> &'static str {
        match self {
            WageType::MonthlyFixed { .. } => "MONTHLY_FIXED",
            WageType::HourlyMonthly { .. } => "HOURLY_MONTHLY",
            WageType::HourlyBasedMonthly { .. } => "HOURLY_BASED_MONTHLY",
        }
    }
}

/// The monthly-hours convention used to derive an hourly rate from a
/// monthly salary.
///
/// `Separated174` treats weekly holiday pay as a separate line and divides
/// by 174 hours; `Folded209` folds it into the salary and divides by 209.
/// The convention changes the derived hourly wage presentation, not the
/// statutory formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HoursMode {
    /// Weekly holiday pay separated out; 174 hour divisor.
    #[default]
    #[serde(rename = "174")]
    Separated174,
    /// Weekly holiday pay folded in; 209 hour divisor.
    #[serde(rename = "209")]
    Folded209,
}

impl HoursMode {
    /// The monthly-hours divisor for the convention.
    pub fn divisor(&self) -> Decimal {
        match self {
            HoursMode::Separated174 => Decimal::from(174),
            HoursMode::Folded209 => Decimal::from(209),
        }
    }
}
