//! Allowance line items.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::Money;

/// Name of the synthetic guarantee allowance produced when a contract
/// salary exceeds the computed legal minimum.
pub const GUARANTEE_ALLOWANCE_NAME: &str = "기타수당(차액)";

/// Name of the synthetic residual allowance emitted by the reverse solver
/// when a target pay cannot be expressed through base salary alone.
pub const RESIDUAL_ALLOWANCE_NAME: &str = "직무수당(임의)";

/// A recurring monthly allowance on top of base pay.
///
/// Classification flags drive three independent concerns: tax withholding
/// (`is_taxable`), the minimum wage comparison base
/// (`is_includable_in_minimum_wage`), and the regular wage used to derive
/// the hourly rate (`is_included_in_regular_wage`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allowance {
    /// Display name, e.g. `식대` or `직책수당`.
    pub name: String,
    /// Monthly amount.
    pub amount: Money,
    /// Whether the allowance enters taxable income. Non-taxable
    /// allowances are exempt only up to the statutory monthly ceiling.
    pub is_taxable: bool,
    /// Whether the allowance counts toward the minimum wage comparison.
    #[serde(default)]
    pub is_includable_in_minimum_wage: bool,
    /// Whether the allowance is paid at a fixed amount every month.
    #[serde(default = "default_true")]
    pub is_fixed: bool,
    /// Whether the allowance is part of the regular wage that derives
    /// the hourly rate.
    #[serde(default = "default_true")]
    pub is_included_in_regular_wage: bool,
}

fn default_true() -> bool {
    true
}

impl Allowance {
    /// A taxable allowance counted into the regular wage.
    pub fn taxable(name: impl Into<String>, amount: Money) -> Self {
        Allowance {
            name: name.into(),
            amount,
            is_taxable: true,
            is_includable_in_minimum_wage: true,
            is_fixed: true,
            is_included_in_regular_wage: true,
        }
    }

    /// A meal allowance: non-taxable up to the statutory ceiling and
    /// outside the regular wage.
    pub fn meal(amount: Money) -> Self {
        Allowance {
            name: "식대".to_string(),
            amount,
            is_taxable: false,
            is_includable_in_minimum_wage: false,
            is_fixed: true,
            is_included_in_regular_wage: false,
        }
    }

    /// The guarantee allowance topping a contract salary up over the
    /// computed legal minimum.
    pub fn guarantee(amount: Money) -> Self {
        Allowance {
            name: GUARANTEE_ALLOWANCE_NAME.to_string(),
            amount,
            is_taxable: false,
            is_includable_in_minimum_wage: false,
            is_fixed: true,
            is_included_in_regular_wage: false,
        }
    }

    /// Whether the allowance is one of the engine-generated synthetic
    /// entries. Synthetic entries in a request are discarded and
    /// recomputed.
    pub fn is_synthetic(&self) -> bool {
        self.name == GUARANTEE_ALLOWANCE_NAME || self.name == RESIDUAL_ALLOWANCE_NAME
    }

    /// Validates the allowance entry.
    pub fn validate(&self) -> EngineResult<()> {
        if self.name.trim().is_empty() {
            return Err(EngineError::InvalidAllowance {
                name: self.name.clone(),
                message: "name must not be empty".to_string(),
            });
        }
        if self.amount.is_negative() {
            return Err(EngineError::InvalidAllowance {
                name: self.name.clone(),
                message: "amount must not be negative".to_string(),
            });
        }
        Ok(())
    }
}
