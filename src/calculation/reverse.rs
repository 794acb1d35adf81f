//! Reverse calculation: finds the contracted wage that produces a target
//! net pay.
//!
//! Deductions are stepwise, so there is no closed form. The solver
//! bisects the wage parameter of the request's wage structure, keeping
//! the best candidate seen, and stops once the net lands within one won
//! of the target or the iteration cap is reached.

use crate::calculation::engine::{calculate, CalculationRequest};
use crate::error::{EngineError, EngineResult};
use crate::models::{
    CalculationResult, ComplianceWarning, Money, ReverseCalculationResult, WageType,
};

/// Iteration cap for the bisection.
const MAX_ITERATIONS: u32 = 50;

/// Acceptable distance from the target in won.
const TOLERANCE: i64 = 1;

/// How many times the upper bound may double before giving up on
/// bracketing the target.
const MAX_BOUND_EXPANSIONS: u32 = 5;

fn with_wage_parameter(template: &CalculationRequest, value: Money) -> CalculationRequest {
    let mut request = template.clone();
    request.wage_type = match request.wage_type {
        WageType::MonthlyFixed { .. } => WageType::MonthlyFixed { base_salary: value },
        WageType::HourlyMonthly { .. } => WageType::HourlyMonthly { hourly_wage: value },
        WageType::HourlyBasedMonthly { hourly_wage, .. } => WageType::HourlyBasedMonthly {
            hourly_wage,
            contract_monthly_salary: value,
        },
    };
    request
}

/// Solves for the wage parameter that yields `target_net_pay`.
///
/// The varied parameter follows the wage structure: the base salary for a
/// fixed monthly wage, the hourly wage for an hourly wage, and the
/// contracted monthly salary for an hourly-backed contract. When the
/// target cannot be met within one won, the closest candidate is returned
/// with a non-convergence warning on the result.
pub fn solve_net_to_gross(
    target_net_pay: Money,
    template: &CalculationRequest,
) -> EngineResult<ReverseCalculationResult> {
    if !target_net_pay.is_positive() {
        return Err(EngineError::InvalidRequest {
            message: format!(
                "target net pay must be positive, got {}",
                target_net_pay.amount()
            ),
        });
    }

    let net_for = |value: Money| -> EngineResult<CalculationResult> {
        calculate(&with_wage_parameter(template, value))
    };

    let mut low = Money::won(1);
    let mut high = Money::from_decimal(
        target_net_pay.as_decimal() * rust_decimal::Decimal::new(15, 1),
    );

    // Grow the upper bound until its net covers the target. An hourly
    // parameter sits orders of magnitude below a monthly one, so the
    // bound only ever needs to move up.
    let mut expansions = 0;
    while net_for(high)?.net_pay < target_net_pay {
        if expansions == MAX_BOUND_EXPANSIONS {
            break;
        }
        high = Money::won(high.amount() * 2);
        expansions += 1;
    }

    let mut iterations = 0;
    let mut best_value = high;
    let mut best = net_for(high)?;
    while iterations < MAX_ITERATIONS {
        iterations += 1;
        let mid = Money::won((low.amount() + high.amount()) / 2);
        let candidate = net_for(mid)?;

        let diff = candidate.net_pay.amount() - target_net_pay.amount();
        if diff.abs() < (best.net_pay.amount() - target_net_pay.amount()).abs() {
            best = candidate.clone();
            best_value = mid;
        }
        if diff.abs() <= TOLERANCE {
            break;
        }
        if diff < 0 {
            low = mid;
        } else {
            high = mid;
        }
        if high.amount() - low.amount() <= 1 {
            break;
        }
    }

    let difference = best.net_pay - target_net_pay;
    let mut warnings = Vec::new();
    if difference.amount().abs() > TOLERANCE {
        warnings.push(ComplianceWarning::warning("역산 미수렴").with_detail(format!(
            "목표 실수령액과 {}원 차이",
            difference.amount().abs()
        )));
    }

    Ok(ReverseCalculationResult {
        target_net_pay,
        required_base_salary: best_value,
        actual_net_pay: best.net_pay,
        difference,
        iterations,
        warnings,
        calculation_result: best,
    })
}
