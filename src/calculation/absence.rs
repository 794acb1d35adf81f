//! Absence accounting against the scheduled calendar.
//!
//! The scheduled calendar for a month takes the first
//! `scheduled_work_days` weekdays of each week (Monday onward) and drops
//! statutory holidays. A scheduled date without a shift is an absence;
//! what an absence costs depends on the absence policy.

use std::collections::BTreeSet;

use chrono::{Datelike, Days, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{AbsenceBreakdown, AbsencePolicy, CompanySize, Money, WorkShift};
use crate::rates::statutory_holidays;

/// The scheduled work dates of a calculation month.
pub fn scheduled_dates(
    year: i32,
    month: u32,
    scheduled_work_days: u8,
    company_size: CompanySize,
) -> BTreeSet<NaiveDate> {
    let holidays = statutory_holidays(year, company_size);
    let mut dates = BTreeSet::new();

    let Some(mut day) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return dates;
    };
    while day.month() == month {
        let weekday_index = day.weekday().num_days_from_monday() as u8;
        if weekday_index < scheduled_work_days && !holidays.contains(&day) {
            dates.insert(day);
        }
        match day.checked_add_days(Days::new(1)) {
            Some(next) => day = next,
            None => break,
        }
    }
    dates
}

/// Accounts for absences in a month of shifts.
///
/// The daily wage is the base salary over the scheduled day count. The
/// strict policy deducts it per absent day; the moderate policy keeps the
/// wage but still forfeits weekly holiday pay; the lenient policy
/// forfeits nothing. `holiday_pay_loss` reports the forfeited weekly
/// holiday pay for absent weeks; the forfeiture itself is realized inside
/// the weekly holiday line, never deducted again from gross.
pub fn calculate_absence(
    shifts: &[WorkShift],
    scheduled: &BTreeSet<NaiveDate>,
    base_salary: Money,
    policy: AbsencePolicy,
    per_week_holiday_pay: Money,
) -> AbsenceBreakdown {
    let worked_dates: BTreeSet<NaiveDate> = shifts
        .iter()
        .filter(|s| !s.is_holiday_work)
        .map(|s| s.date)
        .collect();

    let scheduled_count = scheduled.len() as u32;
    let actual: u32 = scheduled.intersection(&worked_dates).count() as u32;
    let absent_dates: Vec<NaiveDate> = scheduled.difference(&worked_dates).copied().collect();
    let absent = absent_dates.len() as u32;

    let daily_wage = if scheduled_count == 0 {
        Money::ZERO
    } else {
        Money::from_decimal(base_salary.as_decimal() / Decimal::from(scheduled_count))
    };

    let wage_deduction = match policy {
        AbsencePolicy::Strict => daily_wage.mul_rounded(Decimal::from(absent)),
        AbsencePolicy::Moderate | AbsencePolicy::Lenient => Money::ZERO,
    };

    let absent_weeks: BTreeSet<(i32, u32)> = absent_dates
        .iter()
        .map(|d| {
            let iso = d.iso_week();
            (iso.year(), iso.week())
        })
        .collect();
    let holiday_pay_loss = match policy {
        AbsencePolicy::Strict | AbsencePolicy::Moderate => {
            per_week_holiday_pay.mul_rounded(Decimal::from(absent_weeks.len() as u32))
        }
        AbsencePolicy::Lenient => Money::ZERO,
    };

    AbsenceBreakdown {
        scheduled_days: scheduled_count,
        actual_work_days: actual,
        absent_days: absent,
        daily_wage,
        wage_deduction,
        holiday_pay_loss,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn shift_on(day: NaiveDate) -> WorkShift {
        WorkShift {
            date: day,
            start_time: NaiveTime::parse_from_str("09:00", "%H:%M").unwrap(),
            end_time: NaiveTime::parse_from_str("18:00", "%H:%M").unwrap(),
            break_minutes: 60,
            is_holiday_work: false,
        }
    }

    #[test]
    fn test_scheduled_dates_january_2026_five_day_week() {
        // January 2026: 22 weekdays, 1월 1일 is a statutory holiday.
        let dates = scheduled_dates(2026, 1, 5, CompanySize::Over5);
        assert_eq!(dates.len(), 21);
        assert!(!dates.contains(&date("2026-01-01")));
        assert!(dates.contains(&date("2026-01-02")));
        assert!(!dates.contains(&date("2026-01-03"))); // Saturday
    }

    #[test]
    fn test_scheduled_dates_small_workplace_keeps_public_holidays() {
        // Under five employees only Labor Day is a paid holiday, so
        // 1월 1일 stays scheduled.
        let dates = scheduled_dates(2026, 1, 5, CompanySize::Under5);
        assert!(dates.contains(&date("2026-01-01")));
        assert_eq!(dates.len(), 22);
    }

    #[test]
    fn test_scheduled_dates_three_day_week() {
        let dates = scheduled_dates(2026, 1, 3, CompanySize::Over5);
        // Mon/Tue/Wed only.
        assert!(dates.contains(&date("2026-01-05")));
        assert!(dates.contains(&date("2026-01-07")));
        assert!(!dates.contains(&date("2026-01-08"))); // Thursday
    }

    #[test]
    fn test_full_attendance_has_no_absence() {
        let scheduled = scheduled_dates(2026, 1, 5, CompanySize::Over5);
        let shifts: Vec<WorkShift> = scheduled.iter().map(|&d| shift_on(d)).collect();
        let result = calculate_absence(
            &shifts,
            &scheduled,
            Money::won(2_100_000),
            AbsencePolicy::Strict,
            Money::won(82_560),
        );
        assert_eq!(result.absent_days, 0);
        assert_eq!(result.wage_deduction, Money::ZERO);
        assert_eq!(result.holiday_pay_loss, Money::ZERO);
        assert_eq!(result.daily_wage, Money::won(100_000));
    }

    #[test]
    fn test_strict_policy_deducts_daily_wage() {
        let scheduled = scheduled_dates(2026, 1, 5, CompanySize::Over5);
        let shifts: Vec<WorkShift> = scheduled
            .iter()
            .filter(|&&d| d != date("2026-01-14") && d != date("2026-01-15"))
            .map(|&d| shift_on(d))
            .collect();
        let result = calculate_absence(
            &shifts,
            &scheduled,
            Money::won(2_100_000),
            AbsencePolicy::Strict,
            Money::won(82_560),
        );
        assert_eq!(result.absent_days, 2);
        assert_eq!(result.wage_deduction, Money::won(200_000));
        // Both absences fall in one ISO week.
        assert_eq!(result.holiday_pay_loss, Money::won(82_560));
    }

    #[test]
    fn test_moderate_policy_keeps_wage_but_reports_holiday_loss() {
        let scheduled = scheduled_dates(2026, 1, 5, CompanySize::Over5);
        let shifts: Vec<WorkShift> = scheduled
            .iter()
            .filter(|&&d| d != date("2026-01-14"))
            .map(|&d| shift_on(d))
            .collect();
        let result = calculate_absence(
            &shifts,
            &scheduled,
            Money::won(2_100_000),
            AbsencePolicy::Moderate,
            Money::won(82_560),
        );
        assert_eq!(result.wage_deduction, Money::ZERO);
        assert_eq!(result.holiday_pay_loss, Money::won(82_560));
    }

    #[test]
    fn test_lenient_policy_forfeits_nothing() {
        let scheduled = scheduled_dates(2026, 1, 5, CompanySize::Over5);
        let result = calculate_absence(
            &[],
            &scheduled,
            Money::won(2_100_000),
            AbsencePolicy::Lenient,
            Money::won(82_560),
        );
        assert_eq!(result.absent_days, 21);
        assert_eq!(result.wage_deduction, Money::ZERO);
        assert_eq!(result.holiday_pay_loss, Money::ZERO);
    }

    #[test]
    fn test_absences_in_two_weeks_double_the_holiday_loss() {
        let scheduled = scheduled_dates(2026, 1, 5, CompanySize::Over5);
        let shifts: Vec<WorkShift> = scheduled
            .iter()
            .filter(|&&d| d != date("2026-01-14") && d != date("2026-01-21"))
            .map(|&d| shift_on(d))
            .collect();
        let result = calculate_absence(
            &shifts,
            &scheduled,
            Money::won(2_100_000),
            AbsencePolicy::Strict,
            Money::won(82_560),
        );
        assert_eq!(result.holiday_pay_loss, Money::won(165_120));
    }
}
