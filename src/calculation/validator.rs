//! Compliance validation: labor-standards checks over the computed
//! statement and its shifts.
//!
//! Violations never abort a calculation; they attach as warnings so the
//! caller always gets the statement together with what is wrong with it.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{ComplianceWarning, InclusiveWageOptions, Money, WorkShift};
use crate::rates::RateTable;

/// Weekly worked-minute ceiling (52 hours).
const WEEKLY_LIMIT_MINUTES: i64 = 52 * 60;

/// Single-shift worked-minute ceiling (12 hours).
const DAILY_SHIFT_LIMIT_MINUTES: i64 = 12 * 60;

/// Everything the validator inspects.
pub struct ValidationContext<'a> {
    /// Worked shifts for the month.
    pub shifts: &'a [WorkShift],
    /// Contracted monthly base pay for the minimum wage comparison.
    pub minimum_wage_base: Money,
    /// Allowances that count toward the minimum wage.
    pub includable_allowance_total: Money,
    /// Contracted monthly hours backing the comparison base.
    pub monthly_hours: Decimal,
    /// Total gross pay of the statement.
    pub gross_total: Money,
    /// The base pay line of the statement.
    pub base_salary: Money,
    /// Shortfall of an hourly-backed contract against its legal minimum.
    pub contract_shortfall: Money,
    /// Inclusive wage contract terms.
    pub inclusive: &'a InclusiveWageOptions,
    /// The legal rates in force.
    pub rates: &'a RateTable,
}

fn effective_hourly(base: Money, hours: Decimal) -> Option<Decimal> {
    if hours <= Decimal::ZERO {
        return None;
    }
    Some(base.as_decimal() / hours)
}

/// Runs every compliance check, returning warnings most severe first.
pub fn validate_compliance(ctx: &ValidationContext<'_>) -> Vec<ComplianceWarning> {
    let mut warnings = Vec::new();
    let minimum = ctx.rates.minimum_hourly_wage.as_decimal();

    // Minimum wage on the contracted base plus includable allowances.
    if let Some(hourly) =
        effective_hourly(ctx.minimum_wage_base + ctx.includable_allowance_total, ctx.monthly_hours)
    {
        if hourly < minimum {
            warnings.push(
                ComplianceWarning::critical("최저임금 미달").with_detail(format!(
                    "시간당 {}원 < 최저임금 {}원",
                    Money::from_decimal(hourly).amount(),
                    ctx.rates.minimum_hourly_wage.amount()
                )),
            );
        }
    }

    // Inclusive wage contracts must clear the minimum over base plus the
    // fixed overtime component and its covered hours.
    if ctx.inclusive.enabled {
        let total = ctx.minimum_wage_base + ctx.inclusive.monthly_fixed_overtime_pay();
        let hours = ctx.monthly_hours + ctx.inclusive.monthly_expected_overtime_hours;
        if let Some(hourly) = effective_hourly(total, hours) {
            if hourly < minimum {
                warnings.push(
                    ComplianceWarning::critical("포괄임금 최저임금 미달").with_detail(format!(
                        "고정 연장수당 포함 시간당 {}원 < 최저임금 {}원",
                        Money::from_decimal(hourly).amount(),
                        ctx.rates.minimum_hourly_wage.amount()
                    )),
                );
            }
        }
    }

    if ctx.contract_shortfall.is_positive() {
        warnings.push(
            ComplianceWarning::critical("계약 월급이 법정 최저 계산액에 미달")
                .with_detail(format!("부족액 {}", ctx.contract_shortfall.formatted())),
        );
    }

    // Weekly 52 hour ceiling across all shifts.
    let mut minutes_by_week: BTreeMap<(i32, u32), i64> = BTreeMap::new();
    for shift in ctx.shifts {
        let iso = shift.date.iso_week();
        *minutes_by_week.entry((iso.year(), iso.week())).or_insert(0) += shift.worked_minutes();
    }
    let over_limit_weeks: Vec<String> = minutes_by_week
        .iter()
        .filter(|&(_, &minutes)| minutes > WEEKLY_LIMIT_MINUTES)
        .map(|((year, week), _)| format!("{}년 {}주차", year, week))
        .collect();
    if !over_limit_weeks.is_empty() {
        warnings.push(
            ComplianceWarning::warning("주 52시간 초과")
                .with_detail(over_limit_weeks.join(", ")),
        );
    }

    // Single shifts past twelve hours.
    let long_shifts: Vec<NaiveDate> = ctx
        .shifts
        .iter()
        .filter(|s| s.worked_minutes() > DAILY_SHIFT_LIMIT_MINUTES)
        .map(|s| s.date)
        .collect();
    if !long_shifts.is_empty() {
        warnings.push(
            ComplianceWarning::warning("1일 12시간 초과 근무").with_detail(
                long_shifts
                    .iter()
                    .map(NaiveDate::to_string)
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
        );
    }

    // Statutory rest breaks: 30 minutes past four worked hours, 60 past
    // eight.
    let short_breaks: Vec<NaiveDate> = ctx
        .shifts
        .iter()
        .filter(|s| {
            let span = s.span_minutes();
            let required = if span > 480 {
                60
            } else if span > 240 {
                30
            } else {
                0
            };
            i64::from(s.break_minutes) < required
        })
        .map(|s| s.date)
        .collect();
    if !short_breaks.is_empty() {
        warnings.push(
            ComplianceWarning::warning("휴게시간 미달").with_detail(
                short_breaks
                    .iter()
                    .map(NaiveDate::to_string)
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
        );
    }

    if let Some(run) = longest_consecutive_run(ctx.shifts) {
        if run >= 7 {
            warnings.push(
                ComplianceWarning::warning("7일 이상 연속 근무")
                    .with_detail(format!("최장 {}일 연속", run)),
            );
        }
    }

    // Allowance-heavy pay mixes are worth a look even when legal.
    if ctx.base_salary.is_positive() {
        let non_base = ctx.gross_total - ctx.base_salary;
        if non_base.as_decimal() > ctx.base_salary.as_decimal() * Decimal::new(5, 1) {
            warnings.push(
                ComplianceWarning::info("기본급 대비 수당 비중 50% 초과").with_detail(format!(
                    "기본급 {} / 기본급 외 {}",
                    ctx.base_salary.formatted(),
                    non_base.formatted()
                )),
            );
        }
    }

    warnings.sort_by_key(|w| w.level);
    warnings
}

fn longest_consecutive_run(shifts: &[WorkShift]) -> Option<u32> {
    let mut dates: Vec<NaiveDate> = shifts.iter().map(|s| s.date).collect();
    dates.sort();
    dates.dedup();

    let mut longest = 0u32;
    let mut current = 0u32;
    let mut previous: Option<NaiveDate> = None;
    for date in dates {
        current = match previous {
            Some(p) if date == p.succ_opt()? => current + 1,
            _ => 1,
        };
        longest = longest.max(current);
        previous = Some(date);
    }
    (longest > 0).then_some(longest)
}
