//! Simplified monthly withholding tax table (간이세액표).
//!
//! A coarse rendition of the National Tax Service table: income brackets
//! by effective dependent count. The table is an approximation by design;
//! year-end settlement reconciles the difference.

use crate::models::Money;

/// Maximum dependent column in the table.
const MAX_DEPENDENT_COLUMN: usize = 11;

/// One income bracket: `[lower, upper)` in won and the withholding amount
/// per effective dependent count (columns for 1 through 11 dependents).
struct TaxBracket {
    lower: i64,
    upper: i64,
    by_dependents: [i64; MAX_DEPENDENT_COLUMN],
}

#[rustfmt::skip]
const BRACKETS: [TaxBracket; 15] = [
    TaxBracket { lower: 0, upper: 1_060_000, by_dependents: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0] },
    TaxBracket { lower: 1_060_000, upper: 1_510_000, by_dependents: [6_880, 4_170, 1_460, 0, 0, 0, 0, 0, 0, 0, 0] },
    TaxBracket { lower: 1_510_000, upper: 2_060_000, by_dependents: [17_490, 11_670, 5_840, 0, 0, 0, 0, 0, 0, 0, 0] },
    TaxBracket { lower: 2_060_000, upper: 2_560_000, by_dependents: [31_290, 22_920, 14_550, 6_180, 0, 0, 0, 0, 0, 0, 0] },
    TaxBracket { lower: 2_560_000, upper: 3_060_000, by_dependents: [49_090, 38_170, 27_250, 16_330, 5_410, 0, 0, 0, 0, 0, 0] },
    TaxBracket { lower: 3_060_000, upper: 3_560_000, by_dependents: [70_890, 57_420, 43_950, 30_480, 17_010, 3_540, 0, 0, 0, 0, 0] },
    TaxBracket { lower: 3_560_000, upper: 4_060_000, by_dependents: [96_690, 80_670, 64_650, 48_630, 32_610, 16_590, 570, 0, 0, 0, 0] },
    TaxBracket { lower: 4_060_000, upper: 4_560_000, by_dependents: [126_490, 107_920, 89_350, 70_780, 52_210, 33_640, 15_070, 0, 0, 0, 0] },
    TaxBracket { lower: 4_560_000, upper: 5_060_000, by_dependents: [160_290, 139_170, 118_050, 96_930, 75_810, 54_690, 33_570, 12_450, 0, 0, 0] },
    TaxBracket { lower: 5_060_000, upper: 6_060_000, by_dependents: [204_090, 179_420, 154_750, 130_080, 105_410, 80_740, 56_070, 31_400, 6_730, 0, 0] },
    TaxBracket { lower: 6_060_000, upper: 7_060_000, by_dependents: [273_890, 244_670, 215_450, 186_230, 157_010, 127_790, 98_570, 69_350, 40_130, 10_910, 0] },
    TaxBracket { lower: 7_060_000, upper: 8_060_000, by_dependents: [353_690, 319_920, 286_150, 252_380, 218_610, 184_840, 151_070, 117_300, 83_530, 49_760, 15_990] },
    TaxBracket { lower: 8_060_000, upper: 9_060_000, by_dependents: [443_490, 405_170, 366_850, 328_530, 290_210, 251_890, 213_570, 175_250, 136_930, 98_610, 60_290] },
    TaxBracket { lower: 9_060_000, upper: 10_000_000, by_dependents: [543_290, 500_420, 457_550, 414_680, 371_810, 328_940, 286_070, 243_200, 200_330, 157_460, 114_590] },
    TaxBracket { lower: 10_000_000, upper: i64::MAX, by_dependents: [643_090, 595_670, 548_250, 500_830, 453_410, 405_990, 358_570, 311_150, 263_730, 216_310, 168_890] },
];

/// Looks up the monthly income tax withholding.
///
/// `effective_dependents` already includes the per-child addition (each
/// child under 20 acts as one extra dependent); values are clamped into
/// the table's 1 to 11 column range. Non-positive income withholds
/// nothing.
///
/// # Example
///
/// ```
/// use paykit_engine::models::Money;
/// use paykit_engine::rates::lookup_income_tax;
///
/// assert_eq!(
///     lookup_income_tax(Money::won(2_800_000), 2),
///     Money::won(38_170)
/// );
/// ```
pub fn lookup_income_tax(taxable_income: Money, effective_dependents: u32) -> Money {
    let income = taxable_income.amount();
    if income <= 0 {
        return Money::ZERO;
    }
    let column = (effective_dependents.clamp(1, MAX_DEPENDENT_COLUMN as u32) - 1) as usize;

    for bracket in &BRACKETS {
        if income >= bracket.lower && income < bracket.upper {
            return Money::won(bracket.by_dependents[column]);
        }
    }
    // Unreachable: the last bracket is open-ended.
    Money::won(BRACKETS[BRACKETS.len() - 1].by_dependents[column])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_income_below_first_threshold_withholds_nothing() {
        assert_eq!(lookup_income_tax(Money::won(1_000_000), 1), Money::ZERO);
        assert_eq!(lookup_income_tax(Money::ZERO, 1), Money::ZERO);
        assert_eq!(lookup_income_tax(Money::won(-50_000), 1), Money::ZERO);
    }

    #[test]
    fn test_bracket_bounds_are_half_open() {
        // 2,560,000 belongs to the next bracket up
        assert_eq!(lookup_income_tax(Money::won(2_559_999), 1), Money::won(31_290));
        assert_eq!(lookup_income_tax(Money::won(2_560_000), 1), Money::won(49_090));
    }

    #[test]
    fn test_known_withholding_amounts() {
        assert_eq!(lookup_income_tax(Money::won(2_800_000), 1), Money::won(49_090));
        assert_eq!(lookup_income_tax(Money::won(2_800_000), 2), Money::won(38_170));
        assert_eq!(lookup_income_tax(Money::won(3_200_000), 3), Money::won(43_950));
    }

    #[test]
    fn test_dependents_reduce_withholding() {
        let income = Money::won(4_000_000);
        let mut previous = lookup_income_tax(income, 1);
        for dependents in 2..=8 {
            let current = lookup_income_tax(income, dependents);
            assert!(current <= previous);
            previous = current;
        }
    }

    #[test]
    fn test_dependents_clamp_to_table_columns() {
        let income = Money::won(8_500_000);
        assert_eq!(
            lookup_income_tax(income, 0),
            lookup_income_tax(income, 1)
        );
        assert_eq!(
            lookup_income_tax(income, 15),
            lookup_income_tax(income, 11)
        );
    }

    #[test]
    fn test_top_bracket_is_open_ended() {
        assert_eq!(
            lookup_income_tax(Money::won(10_000_000), 1),
            Money::won(643_090)
        );
        assert_eq!(
            lookup_income_tax(Money::won(250_000_000), 1),
            Money::won(643_090)
        );
    }
}
