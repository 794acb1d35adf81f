//! Request types for the payroll engine API.
//!
//! This module defines the JSON request envelopes for the
//! `/salary/calculate` and `/salary/reverse-calculate` endpoints.

use serde::{Deserialize, Serialize};

use crate::calculation::CalculationRequest;
use crate::error::EngineResult;
use crate::models::{shifts_from_csv, Money};

/// Request body for the `/salary/calculate` endpoint.
///
/// Shifts may ride either as structured JSON in `work_shifts` or as a CSV
/// payload in `work_shifts_csv`; when both are present the CSV rows are
/// appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculateRequest {
    /// The calculation inputs.
    #[serde(flatten)]
    pub calculation: CalculationRequest,
    /// Shifts as CSV text, in the import schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_shifts_csv: Option<String>,
}

impl CalculateRequest {
    /// Converts the envelope into a domain request, parsing any CSV
    /// shifts.
    pub fn into_domain(self) -> EngineResult<CalculationRequest> {
        let mut request = self.calculation;
        if let Some(csv) = self.work_shifts_csv {
            request.work_shifts.extend(shifts_from_csv(&csv)?);
        }
        Ok(request)
    }
}

/// Request body for the `/salary/reverse-calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReverseCalculateRequest {
    /// The net pay to hit.
    pub target_net_pay: Money,
    /// The calculation inputs; the wage parameter acts as the search
    /// variable and its request value is ignored.
    #[serde(flatten)]
    pub calculation: CalculationRequest,
    /// Shifts as CSV text, in the import schema.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_shifts_csv: Option<String>,
}

impl ReverseCalculateRequest {
    /// Converts the envelope into the target and a domain request.
    pub fn into_domain(self) -> EngineResult<(Money, CalculationRequest)> {
        let envelope = CalculateRequest {
            calculation: self.calculation,
            work_shifts_csv: self.work_shifts_csv,
        };
        Ok((self.target_net_pay, envelope.into_domain()?))
    }
}
