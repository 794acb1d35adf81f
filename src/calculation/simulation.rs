//! Annual simulation: replays the forward pipeline over each month of a
//! year for reporting.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::calculation::engine::{calculate, CalculationRequest};
use crate::error::EngineResult;
use crate::models::{Money, WorkShift};

/// One month's headline figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyFigures {
    /// The month, `YYYY-MM`.
    pub month: String,
    /// Total gross pay.
    pub gross_total: Money,
    /// Total deductions.
    pub deductions_total: Money,
    /// Net pay.
    pub net_pay: Money,
}

/// Twelve months of headline figures with annual totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnualSimulation {
    /// The simulated year.
    pub year: i32,
    /// Per-month figures, January through December.
    pub months: Vec<MonthlyFigures>,
    /// Sum of monthly gross totals.
    pub annual_gross: Money,
    /// Sum of monthly deduction totals.
    pub annual_deductions: Money,
    /// Sum of monthly net pay.
    pub annual_net: Money,
}

/// Replays the request over every month of `year`.
///
/// The template's shifts are partitioned by calendar month, so a full
/// year of shifts can ride in one request. Months without shifts run as
/// shiftless calculations.
pub fn simulate_year(
    year: i32,
    template: &CalculationRequest,
) -> EngineResult<AnnualSimulation> {
    let mut months = Vec::with_capacity(12);
    let mut annual_gross = Money::ZERO;
    let mut annual_deductions = Money::ZERO;
    let mut annual_net = Money::ZERO;

    for month_number in 1..=12u32 {
        let mut request = template.clone();
        request.calculation_month = format!("{:04}-{:02}", year, month_number);
        request.work_shifts = template
            .work_shifts
            .iter()
            .filter(|s: &&WorkShift| s.date.year() == year && s.date.month() == month_number)
            .cloned()
            .collect();

        let result = calculate(&request)?;
        annual_gross += result.gross.total;
        annual_deductions += result.deductions.total;
        annual_net += result.net_pay;
        months.push(MonthlyFigures {
            month: request.calculation_month,
            gross_total: result.gross.total,
            deductions_total: result.deductions.total,
            net_pay: result.net_pay,
        });
    }

    Ok(AnnualSimulation {
        year,
        months,
        annual_gross,
        annual_deductions,
        annual_net,
    })
}
