//! Legal rates: yearly rate tables, the withholding tax table, and the
//! statutory holiday calendar.

mod holidays;
mod table;
mod tax_table;

pub use holidays::{is_statutory_holiday, statutory_holidays};
pub use table::{RateTable, parse_month, rates_for, weeks_per_month};
pub use tax_table::lookup_income_tax;
