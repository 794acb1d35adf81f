//! Monetary amounts in Korean won.
//!
//! All line items in a pay statement are whole-won amounts. Intermediate
//! arithmetic (rates, hour fractions) happens in [`Decimal`] and is rounded
//! half-up to the nearest won at the moment a line item is produced. Line
//! items are rounded individually and then summed, never the other way
//! around.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// A whole-won monetary amount.
///
/// Serializes as an object carrying both the raw amount and a display
/// string with thousands separators:
///
/// ```
/// use paykit_engine::models::Money;
///
/// let json = serde_json::to_string(&Money::won(1_234_567)).unwrap();
/// assert_eq!(json, r#"{"amount":1234567,"formatted":"1,234,567원"}"#);
/// ```
///
/// Deserialization accepts either the object form or a bare integer, so
/// request payloads can send plain numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Zero won.
    pub const ZERO: Money = Money(0);

    /// Creates an amount from a whole number of won.
    pub const fn won(amount: i64) -> Self {
        Money(amount)
    }

    /// Returns the raw amount in won.
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Rounds a decimal value half-up to the nearest won.
    ///
    /// This is the single rounding point in the engine: every pay line,
    /// deduction, and tax amount passes through here exactly once.
    ///
    /// # Examples
    ///
    /// ```
    /// use paykit_engine::models::Money;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(Money::from_decimal(Decimal::new(15, 1)), Money::won(2)); // 1.5
    /// assert_eq!(Money::from_decimal(Decimal::new(14, 1)), Money::won(1)); // 1.4
    /// ```
    pub fn from_decimal(value: Decimal) -> Self {
        let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        // Won amounts fit comfortably in i64; saturate rather than panic on
        // absurd inputs.
        Money(rounded.to_i64().unwrap_or(i64::MAX))
    }

    /// Returns the amount as a [`Decimal`] for intermediate arithmetic.
    pub fn as_decimal(&self) -> Decimal {
        Decimal::from(self.0)
    }

    /// Multiplies by a decimal factor and rounds the product to whole won.
    pub fn mul_rounded(&self, factor: Decimal) -> Money {
        Money::from_decimal(self.as_decimal() * factor)
    }

    /// Returns true if the amount is exactly zero.
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns true if the amount is greater than zero.
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Returns true if the amount is less than zero.
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Clamps the amount into `[floor, cap]`.
    pub fn clamp_to(self, floor: Money, cap: Money) -> Money {
        Money(self.0.clamp(floor.0, cap.0))
    }

    /// Returns the amount floored at zero.
    pub fn floor_at_zero(self) -> Money {
        Money(self.0.max(0))
    }

    /// Formats the amount with thousands separators and the won suffix,
    /// e.g. `1,234,567원`.
    pub fn formatted(&self) -> String {
        let negative = self.0 < 0;
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
        let offset = digits.len() % 3;
        for (i, c) in digits.chars().enumerate() {
            if i != 0 && (i + 3 - offset) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }
        if negative {
            format!("-{}원", grouped)
        } else {
            format!("{}원", grouped)
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Money {
        Money(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Money", 2)?;
        state.serialize_field("amount", &self.0)?;
        state.serialize_field("formatted", &self.formatted())?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MoneyVisitor;

        impl<'de> Visitor<'de> for MoneyVisitor {
            type Value = Money;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer won amount or an object with an `amount` field")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
                Ok(Money(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
                i64::try_from(v)
                    .map(Money)
                    .map_err(|_| E::custom("won amount out of range"))
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Money, A::Error> {
                let mut amount: Option<i64> = None;
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "amount" => amount = Some(map.next_value()?),
                        // The display string is derived; ignore it on input.
                        _ => {
                            map.next_value::<de::IgnoredAny>()?;
                        }
                    }
                }
                amount
                    .map(Money)
                    .ok_or_else(|| de::Error::missing_field("amount"))
            }
        }

        deserializer.deserialize_any(MoneyVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_rounds_half_up_at_midpoint() {
        assert_eq!(Money::from_decimal(dec("100.5")), Money::won(101));
        assert_eq!(Money::from_decimal(dec("100.49")), Money::won(100));
        assert_eq!(Money::from_decimal(dec("0.5")), Money::won(1));
    }

    #[test]
    fn test_negative_rounding_is_symmetric() {
        assert_eq!(Money::from_decimal(dec("-100.5")), Money::won(-101));
        assert_eq!(Money::from_decimal(dec("-100.4")), Money::won(-100));
    }

    #[test]
    fn test_formatted_groups_thousands() {
        assert_eq!(Money::won(0).formatted(), "0원");
        assert_eq!(Money::won(999).formatted(), "999원");
        assert_eq!(Money::won(1_000).formatted(), "1,000원");
        assert_eq!(Money::won(2_500_000).formatted(), "2,500,000원");
        assert_eq!(Money::won(-134_521).formatted(), "-134,521원");
    }

    #[test]
    fn test_arithmetic_and_sum() {
        let total: Money = [Money::won(100), Money::won(250), Money::won(-50)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::won(300));
        assert_eq!(Money::won(100) - Money::won(250), Money::won(-150));
    }

    #[test]
    fn test_clamp_to_applies_floor_and_cap() {
        let floor = Money::won(390_000);
        let cap = Money::won(5_900_000);
        assert_eq!(Money::won(100_000).clamp_to(floor, cap), floor);
        assert_eq!(Money::won(7_000_000).clamp_to(floor, cap), cap);
        assert_eq!(Money::won(3_000_000).clamp_to(floor, cap), Money::won(3_000_000));
    }

    #[test]
    fn test_mul_rounded_rounds_once() {
        // 10,320 * 0.5 * 7 = 36,120
        let hourly = Money::won(10_320);
        assert_eq!(hourly.mul_rounded(dec("3.5")), Money::won(36_120));
        // 10,030 * 65.175 = 653,705.25 -> 653,705
        assert_eq!(Money::won(10_030).mul_rounded(dec("65.175")), Money::won(653_705));
        // 10,030 * 65.15 = 653,454.5, a true midpoint, rounds up
        assert_eq!(Money::won(10_030).mul_rounded(dec("65.15")), Money::won(653_455));
    }

    #[test]
    fn test_serializes_amount_and_formatted() {
        let json = serde_json::to_string(&Money::won(1_234_567)).unwrap();
        assert_eq!(json, r#"{"amount":1234567,"formatted":"1,234,567원"}"#);
    }

    #[test]
    fn test_deserializes_bare_integer() {
        let money: Money = serde_json::from_str("2500000").unwrap();
        assert_eq!(money, Money::won(2_500_000));
    }

    #[test]
    fn test_deserializes_object_form() {
        let money: Money =
            serde_json::from_str(r#"{"amount":2500000,"formatted":"2,500,000원"}"#).unwrap();
        assert_eq!(money, Money::won(2_500_000));
    }

    #[test]
    fn test_roundtrip_through_json() {
        let original = Money::won(807_127);
        let json = serde_json::to_string(&original).unwrap();
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(original, back);
    }
}
