//! Calculation logic for the payroll engine.
//!
//! This module contains the full monthly pipeline: statutory premium pay,
//! weekly holiday pay, absence accounting, wage-type resolution, social
//! insurance, withholding tax, compliance validation, the forward
//! orchestrator, the reverse net-to-gross solver, and the annual
//! simulation.

mod absence;
mod engine;
mod insurance;
mod premium;
mod resolver;
mod reverse;
mod simulation;
mod tax;
mod validator;
mod weekly_holiday;

pub use absence::{calculate_absence, scheduled_dates};
pub use engine::{CalculationRequest, calculate};
pub use insurance::calculate_insurance;
pub use premium::calculate_premiums;
pub use resolver::{GrossComputation, resolve_gross};
pub use reverse::solve_net_to_gross;
pub use simulation::{AnnualSimulation, MonthlyFigures, simulate_year};
pub use tax::calculate_tax;
pub use validator::{ValidationContext, validate_compliance};
pub use weekly_holiday::{
    WeeklyHolidayResult, calculate_weekly_holiday, weekly_holiday_formula,
};
