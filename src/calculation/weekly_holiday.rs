//! Weekly holiday pay (주휴수당).
//!
//! Employees contracted for fifteen or more hours per week earn one paid
//! rest day per fully-attended week: `min(weeklyHours, 40) / 40 x 8` hours
//! at the ordinary hourly wage. The monthly amount scales by 4.345 weeks
//! and, when shifts are available, by the ratio of qualifying weeks to
//! observed weeks.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{AbsencePolicy, Money, WorkShift};
use crate::rates::weeks_per_month;

/// Minimum contracted weekly hours for eligibility.
const ELIGIBILITY_WEEKLY_HOURS: u32 = 15;

/// Minimum worked minutes for a week to count toward the ratio.
const MINIMUM_WEEKLY_MINUTES: i64 = 900;

/// The outcome of the weekly holiday pay calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyHolidayResult {
    /// The monthly weekly holiday pay line.
    pub amount: Money,
    /// Pay for one fully-attended week.
    pub per_week: Money,
    /// Weeks that earned the rest day.
    pub qualifying_weeks: u32,
    /// Weeks counted in the attendance ratio.
    pub observed_weeks: u32,
}

impl WeeklyHolidayResult {
    fn zero() -> Self {
        WeeklyHolidayResult {
            amount: Money::ZERO,
            per_week: Money::ZERO,
            qualifying_weeks: 0,
            observed_weeks: 0,
        }
    }
}

fn per_week_decimal(weekly_contracted_hours: u32, hourly_wage: Money) -> Decimal {
    let capped = Decimal::from(weekly_contracted_hours.min(40));
    capped / Decimal::from(40) * Decimal::from(8) * hourly_wage.as_decimal()
}

/// The formulaic monthly amount assuming full attendance.
///
/// # Example
///
/// ```
/// use paykit_engine::calculation::weekly_holiday_formula;
/// use paykit_engine::models::Money;
///
/// // 15h/week at 10,320원: 3h x 10,320 x 4.345 = 134,521원
/// assert_eq!(
///     weekly_holiday_formula(15, Money::won(10_320)),
///     Money::won(134_521)
/// );
/// assert_eq!(weekly_holiday_formula(14, Money::won(10_320)), Money::ZERO);
/// ```
pub fn weekly_holiday_formula(weekly_contracted_hours: u32, hourly_wage: Money) -> Money {
    if weekly_contracted_hours < ELIGIBILITY_WEEKLY_HOURS {
        return Money::ZERO;
    }
    Money::from_decimal(per_week_decimal(weekly_contracted_hours, hourly_wage) * weeks_per_month())
}

fn iso_week_key(date: NaiveDate) -> (i32, u32) {
    let iso = date.iso_week();
    (iso.year(), iso.week())
}

/// Calculates the monthly weekly holiday pay from actual attendance.
///
/// Weeks with fewer than fifteen worked hours drop out of the ratio
/// entirely. A counted week qualifies unless it contains an absence from
/// a scheduled date; the lenient policy waives forfeiture.
pub fn calculate_weekly_holiday(
    shifts: &[WorkShift],
    hourly_wage: Money,
    weekly_contracted_hours: u32,
    scheduled_dates: &BTreeSet<NaiveDate>,
    policy: AbsencePolicy,
) -> WeeklyHolidayResult {
    if weekly_contracted_hours < ELIGIBILITY_WEEKLY_HOURS {
        return WeeklyHolidayResult::zero();
    }

    let per_week = per_week_decimal(weekly_contracted_hours, hourly_wage);

    let mut minutes_by_week: BTreeMap<(i32, u32), i64> = BTreeMap::new();
    let mut dates_by_week: BTreeMap<(i32, u32), BTreeSet<NaiveDate>> = BTreeMap::new();
    for shift in shifts.iter().filter(|s| !s.is_holiday_work) {
        let key = iso_week_key(shift.date);
        *minutes_by_week.entry(key).or_insert(0) += shift.worked_minutes();
        dates_by_week.entry(key).or_default().insert(shift.date);
    }

    let mut scheduled_by_week: BTreeMap<(i32, u32), BTreeSet<NaiveDate>> = BTreeMap::new();
    for &date in scheduled_dates {
        scheduled_by_week
            .entry(iso_week_key(date))
            .or_default()
            .insert(date);
    }

    let mut observed = 0u32;
    let mut qualifying = 0u32;
    for (week, minutes) in &minutes_by_week {
        if *minutes < MINIMUM_WEEKLY_MINUTES {
            continue;
        }
        observed += 1;

        let worked = &dates_by_week[week];
        let fully_attended = scheduled_by_week
            .get(week)
            .map(|scheduled| scheduled.is_subset(worked))
            .unwrap_or(true);
        if fully_attended || policy == AbsencePolicy::Lenient {
            qualifying += 1;
        }
    }

    if observed == 0 {
        return WeeklyHolidayResult {
            per_week: Money::from_decimal(per_week),
            ..WeeklyHolidayResult::zero()
        };
    }

    let ratio = Decimal::from(qualifying) / Decimal::from(observed);
    WeeklyHolidayResult {
        amount: Money::from_decimal(per_week * weeks_per_month() * ratio),
        per_week: Money::from_decimal(per_week),
        qualifying_weeks: qualifying,
        observed_weeks: observed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    const HOURLY: Money = Money::won(10_320);

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn shift(day: &str, start: &str, end: &str) -> WorkShift {
        WorkShift {
            date: date(day),
            start_time: NaiveTime::parse_from_str(start, "%H:%M").unwrap(),
            end_time: NaiveTime::parse_from_str(end, "%H:%M").unwrap(),
            break_minutes: 0,
            is_holiday_work: false,
        }
    }

    /// Mon-Fri scheduled dates for the first two full weeks of 2026-01.
    fn two_weeks_schedule() -> BTreeSet<NaiveDate> {
        (5..=9)
            .chain(12..=16)
            .map(|day| date(&format!("2026-01-{:02}", day)))
            .collect()
    }

    fn full_attendance() -> Vec<WorkShift> {
        (5..=9)
            .chain(12..=16)
            .map(|day| shift(&format!("2026-01-{:02}", day), "09:00", "17:00"))
            .collect()
    }

    // ==========================================================================
    // WH-001: the full-attendance formula
    // ==========================================================================
    #[test]
    fn test_wh_001_formula_for_15_hour_week() {
        assert_eq!(weekly_holiday_formula(15, HOURLY), Money::won(134_521));
    }

    // ==========================================================================
    // WH-002: under 15 contracted hours earns nothing
    // ==========================================================================
    #[test]
    fn test_wh_002_under_fifteen_hours_ineligible() {
        assert_eq!(weekly_holiday_formula(14, HOURLY), Money::ZERO);
        let result = calculate_weekly_holiday(
            &full_attendance(),
            HOURLY,
            14,
            &two_weeks_schedule(),
            AbsencePolicy::Strict,
        );
        assert_eq!(result.amount, Money::ZERO);
    }

    // ==========================================================================
    // WH-003: contracted hours cap at 40 for the rest-day formula
    // ==========================================================================
    #[test]
    fn test_wh_003_hours_cap_at_forty() {
        assert_eq!(weekly_holiday_formula(48, HOURLY), weekly_holiday_formula(40, HOURLY));
        // 8h x 10,320 x 4.345 = 358,723.2 -> 358,723
        assert_eq!(weekly_holiday_formula(40, HOURLY), Money::won(358_723));
    }

    // ==========================================================================
    // WH-004: full attendance earns the full formula amount
    // ==========================================================================
    #[test]
    fn test_wh_004_full_attendance() {
        let result = calculate_weekly_holiday(
            &full_attendance(),
            HOURLY,
            40,
            &two_weeks_schedule(),
            AbsencePolicy::Strict,
        );
        assert_eq!(result.observed_weeks, 2);
        assert_eq!(result.qualifying_weeks, 2);
        assert_eq!(result.amount, Money::won(358_723));
    }

    // ==========================================================================
    // WH-005: an absent week forfeits its share
    // ==========================================================================
    #[test]
    fn test_wh_005_absence_forfeits_week() {
        let mut shifts = full_attendance();
        shifts.retain(|s| s.date != date("2026-01-14")); // absent Wednesday
        let result = calculate_weekly_holiday(
            &shifts,
            HOURLY,
            40,
            &two_weeks_schedule(),
            AbsencePolicy::Strict,
        );
        assert_eq!(result.observed_weeks, 2);
        assert_eq!(result.qualifying_weeks, 1);
        // Half of 358,723.2 -> 179,362 (rounded once at the end)
        assert_eq!(result.amount, Money::won(179_362));
    }

    // ==========================================================================
    // WH-006: the lenient policy waives forfeiture
    // ==========================================================================
    #[test]
    fn test_wh_006_lenient_policy_keeps_absent_week() {
        let mut shifts = full_attendance();
        shifts.retain(|s| s.date != date("2026-01-14"));
        let result = calculate_weekly_holiday(
            &shifts,
            HOURLY,
            40,
            &two_weeks_schedule(),
            AbsencePolicy::Lenient,
        );
        assert_eq!(result.qualifying_weeks, 2);
        assert_eq!(result.amount, Money::won(358_723));
    }

    // ==========================================================================
    // WH-007: a week under fifteen worked hours drops from the ratio
    // ==========================================================================
    #[test]
    fn test_wh_007_thin_week_not_counted() {
        let shifts = vec![
            shift("2026-01-05", "09:00", "17:00"),
            shift("2026-01-06", "09:00", "17:00"),
            // Second week: a single 2 hour shift, under the 15h floor.
            shift("2026-01-12", "09:00", "11:00"),
        ];
        let scheduled: BTreeSet<NaiveDate> =
            [date("2026-01-05"), date("2026-01-06"), date("2026-01-12")]
                .into_iter()
                .collect();
        let result =
            calculate_weekly_holiday(&shifts, HOURLY, 16, &scheduled, AbsencePolicy::Strict);
        assert_eq!(result.observed_weeks, 1);
        assert_eq!(result.qualifying_weeks, 1);
    }

    // ==========================================================================
    // WH-008: no shifts means no attendance-based pay
    // ==========================================================================
    #[test]
    fn test_wh_008_no_shifts() {
        let result = calculate_weekly_holiday(
            &[],
            HOURLY,
            40,
            &two_weeks_schedule(),
            AbsencePolicy::Strict,
        );
        assert_eq!(result.amount, Money::ZERO);
        assert_eq!(result.observed_weeks, 0);
    }

    #[test]
    fn test_holiday_shifts_do_not_count_as_attendance() {
        let shifts = vec![WorkShift {
            is_holiday_work: true,
            ..shift("2026-01-05", "09:00", "17:00")
        }];
        let result = calculate_weekly_holiday(
            &shifts,
            HOURLY,
            40,
            &two_weeks_schedule(),
            AbsencePolicy::Strict,
        );
        assert_eq!(result.observed_weeks, 0);
    }
}
