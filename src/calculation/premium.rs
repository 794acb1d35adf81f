//! Statutory premium pay: overtime, night, and holiday work.
//!
//! Premiums are additive gradients on top of base pay. The 1.0x base for
//! overtime and night hours is already inside regular pay, so those lines
//! carry only the 0.5x statutory gradient. Holiday shifts are excluded
//! from base pay and the holiday line carries the full 1.5x (2.0x past
//! eight hours at workplaces of five or more).

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::models::{CompanySize, Money, PremiumBreakdown, WorkShift, WorkingHours};

/// Daily ordinary-hours limit in minutes (8 hours).
const DAILY_LIMIT_MINUTES: i64 = 480;

/// The statutory premium gradient (0.5x).
fn half() -> Decimal {
    Decimal::new(5, 1)
}

fn pay_for_minutes(hourly_wage: Money, minutes: i64, multiplier: Decimal) -> Money {
    hourly_wage.mul_rounded(multiplier * Decimal::from(minutes) / Decimal::from(60))
}

/// Overtime minutes for one calendar week of regular shifts.
///
/// The first `scheduled_work_days` shifts of the week split at the daily
/// eight hour limit; any further shifts are overtime in full. Minutes
/// paid at the ordinary rate are then capped at the weekly limit of
/// `min(scheduled_work_days x 8, 40)` hours, the excess joining overtime.
fn weekly_overtime_minutes(week_shifts: &[&WorkShift], scheduled_work_days: u8) -> i64 {
    let mut ordinary = 0i64;
    let mut overtime = 0i64;

    for (index, shift) in week_shifts.iter().enumerate() {
        let worked = shift.worked_minutes();
        if index < usize::from(scheduled_work_days) {
            ordinary += worked.min(DAILY_LIMIT_MINUTES);
            overtime += (worked - DAILY_LIMIT_MINUTES).max(0);
        } else {
            overtime += worked;
        }
    }

    let weekly_limit = i64::from(scheduled_work_days.min(5)) * DAILY_LIMIT_MINUTES;
    if ordinary > weekly_limit {
        overtime += ordinary - weekly_limit;
    }
    overtime
}

/// Calculates the three premium lines from a month of shifts.
///
/// Categories overlap by summing: an overnight holiday shift earns both
/// its holiday multiplier and the night gradient on the overlapping
/// minutes.
pub fn calculate_premiums(
    shifts: &[WorkShift],
    hourly_wage: Money,
    scheduled_work_days: u8,
    company_size: CompanySize,
) -> PremiumBreakdown {
    // Overtime: regular shifts only, grouped by ISO week, ordered by date.
    let mut weeks: BTreeMap<(i32, u32), Vec<&WorkShift>> = BTreeMap::new();
    for shift in shifts.iter().filter(|s| !s.is_holiday_work) {
        let iso = chrono::Datelike::iso_week(&shift.date);
        weeks
            .entry((iso.year(), iso.week()))
            .or_default()
            .push(shift);
    }

    let mut overtime_minutes = 0i64;
    for week_shifts in weeks.values_mut() {
        week_shifts.sort_by_key(|s| s.date);
        overtime_minutes += weekly_overtime_minutes(week_shifts, scheduled_work_days);
    }

    // Night: every shift, holiday work included.
    let night_minutes: i64 = shifts.iter().map(WorkShift::night_minutes).sum();

    // Holiday: first eight hours per holiday shift at 1.5x, the excess at
    // 2.0x for workplaces of five or more, 1.5x otherwise.
    let mut holiday_first_minutes = 0i64;
    let mut holiday_excess_minutes = 0i64;
    for shift in shifts.iter().filter(|s| s.is_holiday_work) {
        let worked = shift.worked_minutes();
        holiday_first_minutes += worked.min(DAILY_LIMIT_MINUTES);
        holiday_excess_minutes += (worked - DAILY_LIMIT_MINUTES).max(0);
    }
    let excess_multiplier = match company_size {
        CompanySize::Over5 => Decimal::new(2, 0),
        CompanySize::Under5 => Decimal::new(15, 1),
    };
    let holiday_pay = pay_for_minutes(hourly_wage, holiday_first_minutes, Decimal::new(15, 1))
        + pay_for_minutes(hourly_wage, holiday_excess_minutes, excess_multiplier);

    PremiumBreakdown {
        overtime_pay: pay_for_minutes(hourly_wage, overtime_minutes, half()),
        overtime_hours: WorkingHours::from_minutes(overtime_minutes),
        night_pay: pay_for_minutes(hourly_wage, night_minutes, half()),
        night_hours: WorkingHours::from_minutes(night_minutes),
        holiday_pay,
        holiday_hours: WorkingHours::from_minutes(holiday_first_minutes + holiday_excess_minutes),
    }
}
