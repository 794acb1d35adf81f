//! Employee model and related types.
//!
//! This module defines the Employee struct with the contracted working
//! arrangement and the household profile used for tax withholding.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The type of employment arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentType {
    /// Regular full-time employment.
    FullTime,
    /// Part-time employment.
    PartTime,
}

/// Statutory company size band.
///
/// Workplaces with fewer than five employees are exempt from part of the
/// premium pay rules; the band changes the holiday-excess multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanySize {
    /// Fewer than five employees.
    #[serde(rename = "UNDER_5")]
    Under5,
    /// Five or more employees.
    #[serde(rename = "OVER_5")]
    Over5,
}

/// An employee's contracted working arrangement and household profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Display name, echoed into the statement metadata when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The type of employment arrangement.
    pub employment_type: EmploymentType,
    /// Statutory size band of the workplace.
    pub company_size: CompanySize,
    /// Contracted work days per week, counted from Monday.
    pub scheduled_work_days: u8,
    /// Contracted work hours per scheduled day.
    pub daily_work_hours: u8,
    /// Income-tax dependents, including the employee (minimum 1).
    #[serde(default = "default_dependents")]
    pub dependents: u32,
    /// Children under 20 among the dependents.
    #[serde(default)]
    pub children_under_20: u32,
}

fn default_dependents() -> u32 {
    1
}

impl Employee {
    /// Contracted hours per week.
    pub fn weekly_contracted_hours(&self) -> u32 {
        u32::from(self.scheduled_work_days) * u32::from(self.daily_work_hours)
    }

    /// Validates the contracted arrangement.
    pub fn validate(&self) -> EngineResult<()> {
        if !(1..=7).contains(&self.scheduled_work_days) {
            return Err(EngineError::InvalidEmployee {
                field: "scheduled_work_days".to_string(),
                message: "must be between 1 and 7".to_string(),
            });
        }
        if !(1..=24).contains(&self.daily_work_hours) {
            return Err(EngineError::InvalidEmployee {
                field: "daily_work_hours".to_string(),
                message: "must be between 1 and 24".to_string(),
            });
        }
        if self.dependents < 1 {
            return Err(EngineError::InvalidEmployee {
                field: "dependents".to_string(),
                message: "must include the employee (minimum 1)".to_string(),
            });
        }
        if self.children_under_20 > self.dependents {
            return Err(EngineError::InvalidEmployee {
                field: "children_under_20".to_string(),
                message: "cannot exceed total dependents".to_string(),
            });
        }
        Ok(())
    }
}
