//! Withholding tax: simplified-table income tax plus local income tax.

use rust_decimal::Decimal;

use crate::models::{Money, TaxBreakdown};
use crate::rates::lookup_income_tax;

/// Calculates monthly withholding for a taxable income.
///
/// Each child under 20 adds one effective dependent to the table lookup.
/// Local income tax is 10% of the income tax, rounded to the won.
pub fn calculate_tax(taxable_income: Money, dependents: u32, children_under_20: u32) -> TaxBreakdown {
    let taxable = taxable_income.floor_at_zero();
    let effective_dependents = dependents + children_under_20;

    let income_tax = lookup_income_tax(taxable, effective_dependents);
    let local_income_tax = income_tax.mul_rounded(Decimal::new(1, 1));

    TaxBreakdown {
        taxable_income: taxable,
        income_tax,
        local_income_tax,
        total: income_tax + local_income_tax,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // TX-001: single earner at 2,800,000원
    // ==========================================================================
    #[test]
    fn test_tx_001_single_earner() {
        let result = calculate_tax(Money::won(2_800_000), 1, 0);
        assert_eq!(result.income_tax, Money::won(49_090));
        assert_eq!(result.local_income_tax, Money::won(4_909));
        assert_eq!(result.total, Money::won(53_999));
    }

    // ==========================================================================
    // TX-002: dependents lower the withholding
    // ==========================================================================
    #[test]
    fn test_tx_002_two_dependents() {
        let result = calculate_tax(Money::won(2_800_000), 2, 0);
        assert_eq!(result.income_tax, Money::won(38_170));
        assert_eq!(result.local_income_tax, Money::won(3_817));
    }

    // ==========================================================================
    // TX-003: a child under 20 acts as an extra dependent
    // ==========================================================================
    #[test]
    fn test_tx_003_child_adds_effective_dependent() {
        let with_child = calculate_tax(Money::won(2_800_000), 2, 1);
        let three_dependents = calculate_tax(Money::won(2_800_000), 3, 0);
        assert_eq!(with_child.income_tax, three_dependents.income_tax);
        assert_eq!(with_child.income_tax, Money::won(27_250));
    }

    // ==========================================================================
    // TX-004: low income withholds nothing
    // ==========================================================================
    #[test]
    fn test_tx_004_low_income_zero_withholding() {
        let result = calculate_tax(Money::won(1_000_000), 1, 0);
        assert_eq!(result.income_tax, Money::ZERO);
        assert_eq!(result.local_income_tax, Money::ZERO);
        assert_eq!(result.total, Money::ZERO);
    }

    #[test]
    fn test_negative_taxable_income_floors_at_zero() {
        let result = calculate_tax(Money::won(-500_000), 1, 0);
        assert_eq!(result.taxable_income, Money::ZERO);
        assert_eq!(result.total, Money::ZERO);
    }

    #[test]
    fn test_local_tax_rounds_half_up() {
        // Income tax 17,490 -> local 1,749 exactly; 6,880 -> 688.
        let result = calculate_tax(Money::won(1_600_000), 1, 0);
        assert_eq!(result.income_tax, Money::won(17_490));
        assert_eq!(result.local_income_tax, Money::won(1_749));

        // 31,290 x 0.1 = 3,129
        let result = calculate_tax(Money::won(2_100_000), 1, 0);
        assert_eq!(result.local_income_tax, Money::won(3_129));
    }
}
