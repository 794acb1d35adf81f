//! Core data models for the payroll calculation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod allowance;
mod employee;
mod money;
mod options;
mod result;
mod shift;
mod wage_type;
mod working_hours;

pub use allowance::{Allowance, GUARANTEE_ALLOWANCE_NAME, RESIDUAL_ALLOWANCE_NAME};
pub use employee::{CompanySize, Employee, EmploymentType};
pub use money::Money;
pub use options::{AbsencePolicy, InclusiveWageOptions, InsuranceOptions};
pub use result::{
    AbsenceBreakdown, AllowanceLine, CalculationMetadata, CalculationResult, ComplianceWarning,
    DeductionsBreakdown, GrossBreakdown, InsuranceBreakdown, PremiumBreakdown,
    ReverseCalculationResult, TaxBreakdown, WarningLevel, WorkSummary,
};
pub use shift::{WorkShift, shifts_from_csv, shifts_to_csv};
pub use wage_type::{HoursMode, WageType};
pub use working_hours::WorkingHours;
