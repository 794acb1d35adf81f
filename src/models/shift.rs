//! Work shift model and CSV shift import/export.
//!
//! This module defines the WorkShift struct for representing a single day's
//! attendance record, including overnight shifts and the night-work window
//! used for night premium pay.

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::WorkingHours;

/// Start of the statutory night-work window, minutes from midnight (22:00).
const NIGHT_WINDOW_START: i64 = 22 * 60;
/// End of the statutory night-work window, minutes from midnight (06:00).
const NIGHT_WINDOW_END: i64 = 6 * 60;

/// Minutes in a day.
const DAY_MINUTES: i64 = 24 * 60;

/// CSV header for shift import/export.
const CSV_HEADER: &str = "date,start_time,end_time,break_minutes,is_holiday_work";

/// Serde helper for `HH:MM` clock times.
mod hhmm {
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse(&s).map_err(serde::de::Error::custom)
    }

    pub fn parse(s: &str) -> Result<NaiveTime, String> {
        NaiveTime::parse_from_str(s, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
            .map_err(|_| format!("invalid time '{}': expected HH:MM", s))
    }
}

/// A single day's work record.
///
/// An end time at or before the start time means the shift runs past
/// midnight into the next day; `22:00` to `06:00` is an eight hour
/// overnight shift. An end time equal to the start time is a zero-length
/// shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkShift {
    /// The date the shift starts on.
    pub date: NaiveDate,
    /// Clock-in time.
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    /// Clock-out time. Earlier than `start_time` means overnight.
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    /// Unpaid break minutes within the shift.
    #[serde(default)]
    pub break_minutes: u32,
    /// Whether this shift is holiday work (paid at the holiday premium
    /// instead of contributing to base pay).
    #[serde(default)]
    pub is_holiday_work: bool,
}

impl WorkShift {
    /// The wall-clock span of the shift in minutes, with overnight wrap.
    pub fn span_minutes(&self) -> i64 {
        let start = minutes_from_midnight(self.start_time);
        let end = minutes_from_midnight(self.end_time);
        let diff = end - start;
        if diff < 0 { diff + DAY_MINUTES } else { diff }
    }

    /// Worked minutes: span minus unpaid breaks, floored at zero.
    pub fn worked_minutes(&self) -> i64 {
        (self.span_minutes() - i64::from(self.break_minutes)).max(0)
    }

    /// Worked time as a [`WorkingHours`] duration.
    pub fn worked_hours(&self) -> WorkingHours {
        WorkingHours::from_minutes(self.worked_minutes())
    }

    /// Minutes of the shift that fall inside the statutory night window
    /// `[22:00, 06:00)`.
    ///
    /// Break placement within the shift is not recorded, so the overlap is
    /// computed against the full span and then capped at the worked
    /// minutes. A 22:00 to 06:00 shift with a 60 minute break therefore
    /// counts 420 night minutes.
    pub fn night_minutes(&self) -> i64 {
        let start = minutes_from_midnight(self.start_time);
        let end = start + self.span_minutes();

        // Night window occurrences covering a shift that may cross up to
        // two midnights: [0,360), [1320,1800), [2760,3240).
        let windows = [
            (0, NIGHT_WINDOW_END),
            (NIGHT_WINDOW_START, DAY_MINUTES + NIGHT_WINDOW_END),
            (DAY_MINUTES + NIGHT_WINDOW_START, 2 * DAY_MINUTES + NIGHT_WINDOW_END),
        ];

        let overlap: i64 = windows
            .iter()
            .map(|&(w_start, w_end)| (end.min(w_end) - start.max(w_start)).max(0))
            .sum();

        overlap.min(self.worked_minutes())
    }

    /// Validates internal consistency of the shift record.
    pub fn validate(&self) -> EngineResult<()> {
        if i64::from(self.break_minutes) > self.span_minutes() && self.span_minutes() > 0 {
            return Err(EngineError::InvalidShift {
                date: self.date.to_string(),
                message: "break exceeds shift length".to_string(),
            });
        }
        Ok(())
    }

    /// Renders the shift as one CSV row in the import/export schema.
    fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.date.format("%Y-%m-%d"),
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M"),
            self.break_minutes,
            self.is_holiday_work
        )
    }
}

fn minutes_from_midnight(time: NaiveTime) -> i64 {
    i64::from(time.hour()) * 60 + i64::from(time.minute())
}

/// Serializes shifts to the CSV interchange format.
///
/// The output starts with a UTF-8 byte-order mark so spreadsheet tools
/// open it with the right encoding, followed by the header row.
pub fn shifts_to_csv(shifts: &[WorkShift]) -> String {
    let mut out = String::from("\u{feff}");
    out.push_str(CSV_HEADER);
    out.push('\n');
    for shift in shifts {
        out.push_str(&shift.to_csv_row());
        out.push('\n');
    }
    out
}

/// Parses shifts from the CSV interchange format.
///
/// Accepts input with or without a leading byte-order mark and with or
/// without the header row. Blank lines are skipped.
pub fn shifts_from_csv(data: &str) -> EngineResult<Vec<WorkShift>> {
    let data = data.strip_prefix('\u{feff}').unwrap_or(data);
    let mut shifts = Vec::new();

    for (index, line) in data.lines().enumerate() {
        let line_number = index + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed == CSV_HEADER {
            continue;
        }

        let fields: Vec<&str> = trimmed.split(',').map(str::trim).collect();
        if fields.len() != 5 {
            return Err(EngineError::CsvParseError {
                line: line_number,
                message: format!("expected 5 columns, found {}", fields.len()),
            });
        }

        let date = NaiveDate::parse_from_str(fields[0], "%Y-%m-%d").map_err(|_| {
            EngineError::CsvParseError {
                line: line_number,
                message: format!("invalid date '{}': expected YYYY-MM-DD", fields[0]),
            }
        })?;
        let start_time = hhmm::parse(fields[1]).map_err(|message| EngineError::CsvParseError {
            line: line_number,
            message,
        })?;
        let end_time = hhmm::parse(fields[2]).map_err(|message| EngineError::CsvParseError {
            line: line_number,
            message,
        })?;
        let break_minutes: u32 = fields[3].parse().map_err(|_| EngineError::CsvParseError {
            line: line_number,
            message: format!("invalid break minutes '{}'", fields[3]),
        })?;
        let is_holiday_work = match fields[4].to_ascii_lowercase().as_str() {
            "true" | "1" => true,
            "false" | "0" => false,
            other => {
                return Err(EngineError::CsvParseError {
                    line: line_number,
                    message: format!("invalid boolean '{}'", other),
                });
            }
        };

        let shift = WorkShift {
            date,
            start_time,
            end_time,
            break_minutes,
            is_holiday_work,
        };
        shift.validate()?;
        shifts.push(shift);
    }

    Ok(shifts)
}
