//! Wage-type resolution: turns the contracted wage structure plus worked
//! shifts into the components of gross pay.
//!
//! Three structures are supported. A fixed monthly salary pays the
//! contracted schedule and loses pay only through absence. An hourly wage
//! pays actual worked minutes plus an explicit weekly holiday line. An
//! hourly-backed monthly contract is reconstructed from its hourly
//! formula; when the contract exceeds the computed legal minimum the
//! difference becomes a guarantee allowance, and when it falls short the
//! statement is flagged invalid.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::calculation::absence::{calculate_absence, scheduled_dates};
use crate::calculation::premium::calculate_premiums;
use crate::calculation::weekly_holiday::{calculate_weekly_holiday, weekly_holiday_formula};
use crate::models::{
    AbsenceBreakdown, AbsencePolicy, Allowance, Employee, HoursMode, InclusiveWageOptions, Money,
    PremiumBreakdown, WageType, WorkShift, WorkingHours,
};
use crate::rates::weeks_per_month;

/// The gross pay components resolved from a wage structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrossComputation {
    /// Base pay for the month, absence-adjusted where that applies.
    pub base_salary: Money,
    /// The regular wage: contracted base plus regular-wage allowances.
    pub regular_wage: Money,
    /// The ordinary hourly wage (통상시급).
    pub hourly_wage: Money,
    /// Statutory premium lines.
    pub premiums: PremiumBreakdown,
    /// The explicit weekly holiday pay line (zero for monthly salaries,
    /// where the salary already covers the rest day).
    pub weekly_holiday_pay: Money,
    /// Guarantee allowance topping the contract up over the legal
    /// minimum, when one applies.
    pub guarantee_allowance: Option<Money>,
    /// Absence accounting, present for monthly salaries with shifts.
    pub absence: Option<AbsenceBreakdown>,
    /// The computed legal minimum for hourly-backed contracts.
    pub legal_minimum: Option<Money>,
    /// Amount by which the contract falls short of the legal minimum.
    pub contract_shortfall: Money,
    /// The contracted monthly base used for the minimum wage comparison.
    pub minimum_wage_base: Money,
    /// Contracted monthly hours backing the comparison base.
    pub monthly_hours: Decimal,
}

/// Contracted monthly base hours: `min(weeklyHours, 40) x 4.345`.
fn monthly_base_hours(weekly_contracted_hours: u32) -> Decimal {
    Decimal::from(weekly_contracted_hours.min(40)) * weeks_per_month()
}

fn regular_allowance_total(allowances: &[Allowance]) -> Money {
    allowances
        .iter()
        .filter(|a| a.is_included_in_regular_wage)
        .map(|a| a.amount)
        .sum()
}

/// Resolves the gross pay components for a calculation month.
pub fn resolve_gross(
    wage_type: &WageType,
    employee: &Employee,
    shifts: &[WorkShift],
    allowances: &[Allowance],
    month: (i32, u32),
    policy: AbsencePolicy,
    hours_mode: HoursMode,
    inclusive: &InclusiveWageOptions,
) -> GrossComputation {
    let (year, month_number) = month;
    let weekly_hours = employee.weekly_contracted_hours();
    let scheduled = scheduled_dates(
        year,
        month_number,
        employee.scheduled_work_days,
        employee.company_size,
    );

    match *wage_type {
        WageType::MonthlyFixed { base_salary } => {
            let regular_wage = base_salary + regular_allowance_total(allowances);
            let hourly_wage = Money::from_decimal(regular_wage.as_decimal() / hours_mode.divisor());

            let mut premiums = calculate_premiums(
                shifts,
                hourly_wage,
                employee.scheduled_work_days,
                employee.company_size,
            );
            if inclusive.enabled {
                // An inclusive wage contract fixes the overtime line at the
                // agreed amount regardless of worked shifts.
                premiums.overtime_pay = inclusive.monthly_fixed_overtime_pay();
                premiums.overtime_hours = WorkingHours::from_minutes(
                    (inclusive.monthly_expected_overtime_hours * Decimal::from(60))
                        .to_i64()
                        .unwrap_or(0),
                );
            }

            let weekly =
                calculate_weekly_holiday(shifts, hourly_wage, weekly_hours, &scheduled, policy);

            // The salary covers the rest day already, so absence realizes
            // the forfeiture as a reduction of base pay rather than
            // through a separate weekly holiday line.
            let absence = (!shifts.is_empty()).then(|| {
                calculate_absence(shifts, &scheduled, base_salary, policy, weekly.per_week)
            });
            let absence_reduction = absence
                .as_ref()
                .map(|a| a.wage_deduction + a.holiday_pay_loss)
                .unwrap_or(Money::ZERO);

            GrossComputation {
                base_salary: (base_salary - absence_reduction).floor_at_zero(),
                regular_wage,
                hourly_wage,
                premiums,
                weekly_holiday_pay: Money::ZERO,
                guarantee_allowance: None,
                absence,
                legal_minimum: None,
                contract_shortfall: Money::ZERO,
                minimum_wage_base: base_salary,
                monthly_hours: hours_mode.divisor(),
            }
        }

        WageType::HourlyMonthly { hourly_wage } => {
            // Base pay covers every non-holiday worked minute at 1.0x;
            // holiday shifts are paid entirely through the holiday line.
            let base_minutes: i64 = shifts
                .iter()
                .filter(|s| !s.is_holiday_work)
                .map(WorkShift::worked_minutes)
                .sum();
            let base_salary =
                hourly_wage.mul_rounded(Decimal::from(base_minutes) / Decimal::from(60));

            let premiums = calculate_premiums(
                shifts,
                hourly_wage,
                employee.scheduled_work_days,
                employee.company_size,
            );
            let weekly =
                calculate_weekly_holiday(shifts, hourly_wage, weekly_hours, &scheduled, policy);

            let hours = monthly_base_hours(weekly_hours);
            GrossComputation {
                base_salary,
                regular_wage: base_salary + regular_allowance_total(allowances),
                hourly_wage,
                premiums,
                weekly_holiday_pay: weekly.amount,
                guarantee_allowance: None,
                absence: None,
                legal_minimum: None,
                contract_shortfall: Money::ZERO,
                minimum_wage_base: hourly_wage.mul_rounded(hours),
                monthly_hours: hours,
            }
        }

        WageType::HourlyBasedMonthly {
            hourly_wage,
            contract_monthly_salary,
        } => {
            let hours = monthly_base_hours(weekly_hours);
            let base_salary = hourly_wage.mul_rounded(hours);

            // The schedule pre-commits any contracted hours past 40 per
            // week, so the overtime gradient is formulaic.
            let contracted_overtime_hours =
                Decimal::from(weekly_hours.saturating_sub(40)) * weeks_per_month();
            let contract_overtime_pay = hourly_wage
                .mul_rounded(Decimal::new(5, 1) * contracted_overtime_hours);

            let formula_weekly = weekly_holiday_formula(weekly_hours, hourly_wage);
            let weekly_holiday_pay = if shifts.is_empty() {
                formula_weekly
            } else {
                calculate_weekly_holiday(shifts, hourly_wage, weekly_hours, &scheduled, policy)
                    .amount
            };

            // Night and holiday premiums remain shift-driven.
            let mut premiums = calculate_premiums(
                shifts,
                hourly_wage,
                employee.scheduled_work_days,
                employee.company_size,
            );
            premiums.overtime_pay = contract_overtime_pay;
            premiums.overtime_hours = WorkingHours::from_minutes(
                (contracted_overtime_hours * Decimal::from(60)).to_i64().unwrap_or(0),
            );

            let legal_minimum = base_salary + formula_weekly + contract_overtime_pay;
            let guarantee = (contract_monthly_salary - legal_minimum).floor_at_zero();
            let shortfall = (legal_minimum - contract_monthly_salary).floor_at_zero();

            GrossComputation {
                base_salary,
                regular_wage: base_salary + regular_allowance_total(allowances),
                hourly_wage,
                premiums,
                weekly_holiday_pay,
                guarantee_allowance: guarantee.is_positive().then_some(guarantee),
                absence: None,
                legal_minimum: Some(legal_minimum),
                contract_shortfall: shortfall,
                minimum_wage_base: base_salary,
                monthly_hours: hours,
            }
        }
    }
}
