//! Calculation result structures: the full monthly pay statement.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Money, WorkingHours};

/// A named allowance amount on the pay statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowanceLine {
    /// Display name of the allowance.
    pub name: String,
    /// Monthly amount.
    pub amount: Money,
}

/// Statutory premium pay lines derived from worked shifts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PremiumBreakdown {
    /// Overtime premium (0.5x gradient on hours past the daily or weekly
    /// limit; the 1.0x base for those hours sits in regular pay).
    pub overtime_pay: Money,
    /// Hours that attracted the overtime premium.
    pub overtime_hours: WorkingHours,
    /// Night premium (0.5x gradient on work inside 22:00-06:00).
    pub night_pay: Money,
    /// Hours that attracted the night premium.
    pub night_hours: WorkingHours,
    /// Holiday work pay (1.5x for the first eight hours per holiday
    /// shift, 2.0x past that at workplaces of five or more).
    pub holiday_pay: Money,
    /// Hours worked on holiday shifts.
    pub holiday_hours: WorkingHours,
}

impl PremiumBreakdown {
    /// Sum of the three premium lines.
    pub fn total(&self) -> Money {
        self.overtime_pay + self.night_pay + self.holiday_pay
    }
}

/// The gross side of the pay statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrossBreakdown {
    /// Base pay for the month (after any absence wage deduction).
    pub base_salary: Money,
    /// The regular wage: base plus allowances counted into the ordinary
    /// rate.
    pub regular_wage: Money,
    /// The derived ordinary hourly wage (통상시급).
    pub hourly_wage: Money,
    /// Statutory premium lines.
    pub premiums: PremiumBreakdown,
    /// Weekly holiday pay (주휴수당) for the month.
    pub weekly_holiday_pay: Money,
    /// Allowances that enter taxable income.
    pub taxable_allowances: Vec<AllowanceLine>,
    /// Allowances exempt from tax up to the statutory ceiling.
    pub non_taxable_allowances: Vec<AllowanceLine>,
    /// Total gross pay: the sum of every line above.
    pub total: Money,
}

/// Social insurance deductions (employee share).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceBreakdown {
    /// National pension contribution.
    pub national_pension: Money,
    /// Health insurance premium.
    pub health_insurance: Money,
    /// Long-term care levy (percentage of the health premium).
    pub long_term_care: Money,
    /// Employment insurance contribution.
    pub employment_insurance: Money,
    /// Sum of the four lines.
    pub total: Money,
}

/// Withholding tax deductions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    /// The monthly taxable income the table was entered with.
    pub taxable_income: Money,
    /// Simplified-table income tax withholding.
    pub income_tax: Money,
    /// Local income tax: 10% of the income tax, rounded.
    pub local_income_tax: Money,
    /// Sum of the two taxes.
    pub total: Money,
}

/// All deductions from gross pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionsBreakdown {
    /// Social insurance deductions.
    pub insurance: InsuranceBreakdown,
    /// Withholding tax deductions.
    pub tax: TaxBreakdown,
    /// Insurance total plus tax total.
    pub total: Money,
}

/// Absence accounting for the month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsenceBreakdown {
    /// Scheduled work days in the calculation month (statutory holidays
    /// excluded).
    pub scheduled_days: u32,
    /// Scheduled days actually worked.
    pub actual_work_days: u32,
    /// Scheduled days with no shift.
    pub absent_days: u32,
    /// The daily wage used for deductions: base salary over scheduled
    /// days.
    pub daily_wage: Money,
    /// Wage deducted for absent days (strict policy only).
    pub wage_deduction: Money,
    /// Weekly holiday pay forfeited through absent weeks (informational;
    /// the forfeiture is realized inside the weekly holiday line).
    pub holiday_pay_loss: Money,
}

/// Severity of a compliance warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WarningLevel {
    /// A legal violation.
    Critical,
    /// A likely problem that needs review.
    Warning,
    /// Informational observation.
    Info,
}

/// A compliance warning attached to a calculation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceWarning {
    /// Severity of the finding.
    pub level: WarningLevel,
    /// Short human-readable message.
    pub message: String,
    /// Optional supporting detail (dates, amounts).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ComplianceWarning {
    /// Creates a critical warning.
    pub fn critical(message: impl Into<String>) -> Self {
        ComplianceWarning {
            level: WarningLevel::Critical,
            message: message.into(),
            detail: None,
        }
    }

    /// Creates a warning-level finding.
    pub fn warning(message: impl Into<String>) -> Self {
        ComplianceWarning {
            level: WarningLevel::Warning,
            message: message.into(),
            detail: None,
        }
    }

    /// Creates an informational finding.
    pub fn info(message: impl Into<String>) -> Self {
        ComplianceWarning {
            level: WarningLevel::Info,
            message: message.into(),
            detail: None,
        }
    }

    /// Attaches supporting detail.
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Summary of the shifts that backed the calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkSummary {
    /// Number of shifts in the month.
    pub shift_count: usize,
    /// Total worked time across all shifts.
    pub total_worked: WorkingHours,
}

/// Identification and provenance of a calculation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationMetadata {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// The employee's name, when the request carried one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the result.
    pub engine_version: String,
    /// The calculation month, `YYYY-MM`.
    pub calculation_month: String,
    /// The legal rate year applied.
    pub rate_year: i32,
}

/// The complete monthly pay statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Gross pay and its composition.
    pub gross: GrossBreakdown,
    /// Insurance and tax deductions.
    pub deductions: DeductionsBreakdown,
    /// Net pay: gross total minus deductions total.
    pub net_pay: Money,
    /// Shift summary, present when shifts were supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_summary: Option<WorkSummary>,
    /// Absence accounting, present when shifts were supplied for a
    /// salaried employee.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub absence: Option<AbsenceBreakdown>,
    /// False when the contracted pay falls below the computed legal
    /// minimum.
    pub is_valid: bool,
    /// Compliance warnings, most severe first.
    pub warnings: Vec<ComplianceWarning>,
    /// Calculation provenance.
    pub metadata: CalculationMetadata,
}

/// The result of the reverse net-to-gross search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReverseCalculationResult {
    /// The net pay that was asked for.
    pub target_net_pay: Money,
    /// The base amount the search settled on (base salary, hourly wage,
    /// or contract amount depending on the wage type).
    pub required_base_salary: Money,
    /// The net pay the settled base actually produces.
    pub actual_net_pay: Money,
    /// `actual_net_pay - target_net_pay`.
    pub difference: Money,
    /// Bisection iterations used.
    pub iterations: u32,
    /// Warnings about the search itself, such as non-convergence. The
    /// forward statement's compliance warnings stay on
    /// `calculation_result`.
    pub warnings: Vec<ComplianceWarning>,
    /// The full forward statement at the settled base.
    pub calculation_result: CalculationResult,
}
