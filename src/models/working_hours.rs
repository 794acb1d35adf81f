//! Worked-time durations.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use rust_decimal::Decimal;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// A non-negative duration of worked time, stored as whole minutes.
///
/// Serializes as an object with an hour/minute split, the raw minute count,
/// and a Korean display string:
///
/// ```
/// use paykit_engine::models::WorkingHours;
///
/// let json = serde_json::to_string(&WorkingHours::from_minutes(510)).unwrap();
/// assert_eq!(
///     json,
///     r#"{"hours":8,"minutes":30,"total_minutes":510,"formatted":"8시간 30분"}"#
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct WorkingHours {
    total_minutes: i64,
}

impl WorkingHours {
    /// Zero minutes.
    pub const ZERO: WorkingHours = WorkingHours { total_minutes: 0 };

    /// Creates a duration from a minute count, flooring negatives at zero.
    pub fn from_minutes(minutes: i64) -> Self {
        WorkingHours {
            total_minutes: minutes.max(0),
        }
    }

    /// The whole-hour part of the duration.
    pub const fn hours(&self) -> i64 {
        self.total_minutes / 60
    }

    /// The remaining minutes past the whole hours.
    pub const fn minutes(&self) -> i64 {
        self.total_minutes % 60
    }

    /// The full duration in minutes.
    pub const fn total_minutes(&self) -> i64 {
        self.total_minutes
    }

    /// The duration as fractional hours, for rate arithmetic.
    pub fn as_decimal_hours(&self) -> Decimal {
        Decimal::from(self.total_minutes) / Decimal::from(60)
    }

    /// Returns true if no time was worked.
    pub const fn is_zero(&self) -> bool {
        self.total_minutes == 0
    }

    /// Formats as `H시간 M분`, dropping the minute part when it is zero.
    pub fn formatted(&self) -> String {
        if self.minutes() == 0 {
            format!("{}시간", self.hours())
        } else {
            format!("{}시간 {}분", self.hours(), self.minutes())
        }
    }
}

impl fmt::Display for WorkingHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

impl Add for WorkingHours {
    type Output = WorkingHours;

    fn add(self, rhs: WorkingHours) -> WorkingHours {
        WorkingHours {
            total_minutes: self.total_minutes + rhs.total_minutes,
        }
    }
}

impl Sum for WorkingHours {
    fn sum<I: Iterator<Item = WorkingHours>>(iter: I) -> WorkingHours {
        iter.fold(WorkingHours::ZERO, Add::add)
    }
}

impl Serialize for WorkingHours {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("WorkingHours", 4)?;
        state.serialize_field("hours", &self.hours())?;
        state.serialize_field("minutes", &self.minutes())?;
        state.serialize_field("total_minutes", &self.total_minutes)?;
        state.serialize_field("formatted", &self.formatted())?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for WorkingHours {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HoursVisitor;

        impl<'de> Visitor<'de> for HoursVisitor {
            type Value = WorkingHours;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a minute count or an object with a `total_minutes` field")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<WorkingHours, E> {
                Ok(WorkingHours::from_minutes(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<WorkingHours, E> {
                i64::try_from(v)
                    .map(WorkingHours::from_minutes)
                    .map_err(|_| E::custom("minute count out of range"))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<WorkingHours, A::Error> {
                let mut total: Option<i64> = None;
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "total_minutes" => total = Some(map.next_value()?),
                        _ => {
                            map.next_value::<de::IgnoredAny>()?;
                        }
                    }
                }
                total
                    .map(WorkingHours::from_minutes)
                    .ok_or_else(|| de::Error::missing_field("total_minutes"))
            }
        }

        deserializer.deserialize_any(HoursVisitor)
    }
}
