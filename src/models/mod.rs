//! Core data models for the Expense Settlement Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod expense;
mod rates;
mod work_type;

pub use attendance::{AttendanceEntry, AttendanceGroup, AttendanceSheet};
pub use expense::{CUSTOMER_BILLING_NONE, ExpenseLedger, ExpenseRow, LEDGER_CSV_HEADER};
pub use rates::{HomeChargeRate, RateCategory, TransportationRate};
pub use work_type::WorkType;
