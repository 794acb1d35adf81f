//! Monthly net-pay calculation engine for Korean labor-standards payroll.
//!
//! This crate computes a full monthly pay statement for a single employee:
//! gross pay from the contracted wage structure and worked shifts (statutory
//! premiums and weekly holiday pay included), social insurance and withholding
//! tax deductions, compliance warnings, and the resulting net pay. A reverse
//! solver finds the base salary that produces a target net amount.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod error;
pub mod models;
pub mod rates;
