//! The calculation entry point: takes a full request and produces a
//! monthly net pay statement.
//!
//! Orchestration order is fixed. Inputs validate first, then the wage
//! structure resolves into gross components, then deductions come off the
//! insurable income, and compliance checks run over the finished
//! statement.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::insurance::calculate_insurance;
use crate::calculation::resolver::resolve_gross;
use crate::calculation::tax::calculate_tax;
use crate::calculation::validator::{validate_compliance, ValidationContext};
use crate::error::EngineResult;
use crate::models::{
    AbsencePolicy, Allowance, AllowanceLine, CalculationMetadata, CalculationResult,
    ComplianceWarning, DeductionsBreakdown, Employee, GrossBreakdown, HoursMode,
    InclusiveWageOptions, InsuranceOptions, Money, WageType, WorkShift, WorkSummary,
    GUARANTEE_ALLOWANCE_NAME,
};
use crate::rates::{parse_month, rates_for};

/// A complete monthly calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The employee and their contracted schedule.
    pub employee: Employee,
    /// The contracted wage structure.
    #[serde(flatten)]
    pub wage_type: WageType,
    /// Contracted allowances on top of the wage.
    #[serde(default)]
    pub allowances: Vec<Allowance>,
    /// Worked shifts for the month.
    #[serde(default)]
    pub work_shifts: Vec<WorkShift>,
    /// The calculation month as `YYYY-MM`.
    pub calculation_month: String,
    /// How absence affects pay.
    #[serde(default)]
    pub absence_policy: AbsencePolicy,
    /// Which monthly hours divisor presents the hourly wage.
    #[serde(default)]
    pub hours_mode: HoursMode,
    /// Which insurance schemes apply.
    #[serde(default)]
    pub insurance_options: InsuranceOptions,
    /// Inclusive wage contract terms.
    #[serde(default)]
    pub inclusive_wage_options: InclusiveWageOptions,
}

impl CalculationRequest {
    fn validate(&self) -> EngineResult<()> {
        self.employee.validate()?;
        for allowance in &self.allowances {
            allowance.validate()?;
        }
        for shift in &self.work_shifts {
            shift.validate()?;
        }
        Ok(())
    }
}

/// Runs a monthly net pay calculation.
///
/// # Examples
///
/// ```
/// use paykit_engine::calculation::{calculate, CalculationRequest};
/// use paykit_engine::models::{
///     CompanySize, Employee, EmploymentType, Money, WageType,
/// };
///
/// let request = CalculationRequest {
///     employee: Employee {
///         name: None,
///         employment_type: EmploymentType::FullTime,
///         company_size: CompanySize::Over5,
///         scheduled_work_days: 5,
///         daily_work_hours: 8,
///         dependents: 1,
///         children_under_20: 0,
///     },
///     wage_type: WageType::MonthlyFixed {
///         base_salary: Money::won(3_000_000),
///     },
///     allowances: Vec::new(),
///     work_shifts: Vec::new(),
///     calculation_month: "2026-03".to_string(),
///     absence_policy: Default::default(),
///     hours_mode: Default::default(),
///     insurance_options: Default::default(),
///     inclusive_wage_options: Default::default(),
/// };
///
/// let result = calculate(&request).unwrap();
/// assert_eq!(result.gross.total, Money::won(3_000_000));
/// assert!(result.net_pay < result.gross.total);
/// ```
pub fn calculate(request: &CalculationRequest) -> EngineResult<CalculationResult> {
    request.validate()?;

    let month = parse_month(&request.calculation_month)?;
    let rates = rates_for(month.0)?;

    // Synthetic lines from an earlier statement must not feed back in as
    // contracted allowances.
    let allowances: Vec<Allowance> = request
        .allowances
        .iter()
        .filter(|a| !a.is_synthetic())
        .cloned()
        .collect();

    let computed = resolve_gross(
        &request.wage_type,
        &request.employee,
        &request.work_shifts,
        &allowances,
        month,
        request.absence_policy,
        request.hours_mode,
        &request.inclusive_wage_options,
    );

    let taxable_allowances: Vec<AllowanceLine> = allowances
        .iter()
        .filter(|a| a.is_taxable)
        .map(|a| AllowanceLine {
            name: a.name.clone(),
            amount: a.amount,
        })
        .collect();
    let mut non_taxable_allowances: Vec<AllowanceLine> = allowances
        .iter()
        .filter(|a| !a.is_taxable)
        .map(|a| AllowanceLine {
            name: a.name.clone(),
            amount: a.amount,
        })
        .collect();

    // A non-taxable allowance is exempt only up to the statutory ceiling;
    // anything above it remains insurable and taxable. The guarantee
    // allowance is a top-up to the legal construction and stays fully
    // exempt.
    let mut exempt: Money = non_taxable_allowances
        .iter()
        .map(|line| line.amount.min(rates.non_taxable_allowance_ceiling))
        .sum();
    if let Some(guarantee) = computed.guarantee_allowance {
        non_taxable_allowances.push(AllowanceLine {
            name: GUARANTEE_ALLOWANCE_NAME.to_string(),
            amount: guarantee,
        });
        exempt += guarantee;
    }

    let allowance_total: Money = taxable_allowances
        .iter()
        .chain(non_taxable_allowances.iter())
        .map(|line| line.amount)
        .sum();

    let gross_total = computed.base_salary
        + computed.premiums.total()
        + computed.weekly_holiday_pay
        + allowance_total;
    let insurable_income = (gross_total - exempt).floor_at_zero();

    let insurance = calculate_insurance(insurable_income, &request.insurance_options, &rates);
    let tax = calculate_tax(
        insurable_income,
        request.employee.dependents,
        request.employee.children_under_20,
    );
    let deductions = DeductionsBreakdown {
        total: insurance.total + tax.total,
        insurance,
        tax,
    };
    let net_pay = gross_total - deductions.total;

    let includable_allowance_total: Money = allowances
        .iter()
        .filter(|a| a.is_includable_in_minimum_wage)
        .map(|a| a.amount)
        .sum();
    let warnings: Vec<ComplianceWarning> = validate_compliance(&ValidationContext {
        shifts: &request.work_shifts,
        minimum_wage_base: computed.minimum_wage_base,
        includable_allowance_total,
        monthly_hours: computed.monthly_hours,
        gross_total,
        base_salary: computed.base_salary,
        contract_shortfall: computed.contract_shortfall,
        inclusive: &request.inclusive_wage_options,
        rates: &rates,
    });
    let is_valid = computed.contract_shortfall.is_zero();

    let work_summary = (!request.work_shifts.is_empty()).then(|| WorkSummary {
        shift_count: request.work_shifts.len(),
        total_worked: request.work_shifts.iter().map(WorkShift::worked_hours).sum(),
    });

    Ok(CalculationResult {
        gross: GrossBreakdown {
            base_salary: computed.base_salary,
            regular_wage: computed.regular_wage,
            hourly_wage: computed.hourly_wage,
            premiums: computed.premiums,
            weekly_holiday_pay: computed.weekly_holiday_pay,
            taxable_allowances,
            non_taxable_allowances,
            total: gross_total,
        },
        deductions,
        net_pay,
        work_summary,
        absence: computed.absence,
        is_valid,
        warnings,
        metadata: CalculationMetadata {
            calculation_id: Uuid::new_v4(),
            employee_name: request.employee.name.clone(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            calculation_month: request.calculation_month.clone(),
            rate_year: rates.year,
        },
    })
}
