//! Legal rate tables by year.
//!
//! Each supported year carries the minimum wage, the employee-share social
//! insurance rates with their statutory base clamps, and the non-taxable
//! allowance ceiling. The tables are fixed constants of the engine; an
//! unsupported year is an error, never a silent fallback.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::Money;

/// Average weeks per month used by the statutory monthly formulas
/// (365 / 7 / 12, truncated to three decimals).
pub fn weeks_per_month() -> Decimal {
    Decimal::new(4345, 3)
}

/// The legal rates in force for one calendar year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateTable {
    /// The calendar year the table applies to.
    pub year: i32,
    /// Statutory minimum hourly wage.
    pub minimum_hourly_wage: Money,
    /// National pension employee rate.
    pub pension_rate: Decimal,
    /// Lower clamp on the monthly income base for pension.
    pub pension_base_floor: Money,
    /// Upper clamp on the monthly income base for pension.
    pub pension_base_cap: Money,
    /// Health insurance employee rate (no base cap).
    pub health_rate: Decimal,
    /// Long-term care rate, applied to the health premium amount.
    pub long_term_care_rate: Decimal,
    /// Employment insurance employee rate.
    pub employment_rate: Decimal,
    /// Upper clamp on the monthly income base for employment insurance.
    pub employment_base_cap: Money,
    /// Monthly ceiling on the tax exemption of a non-taxable allowance.
    pub non_taxable_allowance_ceiling: Money,
}

/// Returns the rate table for a calendar year.
///
/// # Example
///
/// ```
/// use paykit_engine::rates::rates_for;
///
/// let rates = rates_for(2026).unwrap();
/// assert_eq!(rates.minimum_hourly_wage.amount(), 10_320);
/// assert!(rates_for(2019).is_err());
/// ```
pub fn rates_for(year: i32) -> EngineResult<RateTable> {
    match year {
        2025 => Ok(RateTable {
            year,
            minimum_hourly_wage: Money::won(10_030),
            pension_rate: Decimal::new(45, 3),
            pension_base_floor: Money::won(390_000),
            pension_base_cap: Money::won(6_170_000),
            health_rate: Decimal::new(3545, 5),
            long_term_care_rate: Decimal::new(1295, 4),
            employment_rate: Decimal::new(9, 3),
            employment_base_cap: Money::won(13_500_000),
            non_taxable_allowance_ceiling: Money::won(200_000),
        }),
        2026 => Ok(RateTable {
            year,
            minimum_hourly_wage: Money::won(10_320),
            pension_rate: Decimal::new(475, 4),
            pension_base_floor: Money::won(390_000),
            pension_base_cap: Money::won(5_900_000),
            health_rate: Decimal::new(3595, 5),
            long_term_care_rate: Decimal::new(1314, 4),
            employment_rate: Decimal::new(9, 3),
            employment_base_cap: Money::won(13_500_000),
            non_taxable_allowance_ceiling: Money::won(200_000),
        }),
        _ => Err(EngineError::RatesNotFound { year }),
    }
}

/// Parses a `YYYY-MM` calculation month into `(year, month)`.
pub fn parse_month(value: &str) -> EngineResult<(i32, u32)> {
    let invalid = || EngineError::InvalidMonth {
        value: value.to_string(),
    };

    let (year_part, month_part) = value.split_once('-').ok_or_else(invalid)?;
    if year_part.len() != 4 || month_part.len() != 2 {
        return Err(invalid());
    }
    let year: i32 = year_part.parse().map_err(|_| invalid())?;
    let month: u32 = month_part.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&month) {
        return Err(invalid());
    }
    Ok((year, month))
}
