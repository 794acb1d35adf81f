//! Statutory paid holiday calendar.

use chrono::{Datelike, NaiveDate};

use crate::models::CompanySize;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    // All entries are hardcoded valid calendar dates.
    NaiveDate::from_ymd_opt(year, month, day).expect("valid holiday date")
}

/// Public holidays observed in 2026, Labor Day excluded.
fn public_holidays_2026() -> Vec<NaiveDate> {
    vec![
        date(2026, 1, 1),   // 신정
        date(2026, 2, 16),  // 설날 연휴
        date(2026, 2, 17),
        date(2026, 2, 18),
        date(2026, 3, 1),   // 삼일절
        date(2026, 5, 5),   // 어린이날
        date(2026, 5, 24),  // 석가탄신일
        date(2026, 6, 6),   // 현충일
        date(2026, 8, 15),  // 광복절
        date(2026, 9, 24),  // 추석 연휴
        date(2026, 9, 25),
        date(2026, 9, 26),
        date(2026, 10, 3),  // 개천절
        date(2026, 10, 9),  // 한글날
        date(2026, 12, 25), // 성탄절
    ]
}

/// The statutory paid holidays for a year and workplace size.
///
/// Public holidays are paid holidays only at workplaces of five or more
/// employees; Labor Day (May 1) is a paid holiday everywhere. Years
/// without a curated calendar fall back to Labor Day alone.
pub fn statutory_holidays(year: i32, company_size: CompanySize) -> Vec<NaiveDate> {
    let labor_day = date(year, 5, 1);
    match company_size {
        CompanySize::Over5 => {
            let mut holidays = match year {
                2026 => public_holidays_2026(),
                _ => Vec::new(),
            };
            holidays.push(labor_day);
            holidays.sort();
            holidays
        }
        CompanySize::Under5 => vec![labor_day],
    }
}

/// Whether a date is a statutory paid holiday for the workplace.
pub fn is_statutory_holiday(day: NaiveDate, company_size: CompanySize) -> bool {
    statutory_holidays(day.year(), company_size).contains(&day)
}
