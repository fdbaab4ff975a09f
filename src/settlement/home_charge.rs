//! Home-office charge generation.
//!
//! This module produces the flat daily charge row for days worked entirely
//! from home.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{CUSTOMER_BILLING_NONE, ExpenseLedger, ExpenseRow};
use crate::rates::RateProvider;

/// Reason label for the home-office charge.
pub const HOME_CHARGE_REASON: &str = "在宅チャージ";

/// Round-trip label for rows where a round trip is not applicable.
///
/// Distinguishes "not applicable" from an actual round trip in the output
/// sheet.
pub const ROUND_TRIP_NOT_APPLICABLE: &str = "--";

/// Generates the single home-office charge row for one off-site day.
///
/// The charge is a per-day flat rate: exactly one row is emitted however
/// many off-site entries the day holds. Departure, destination and transport
/// mode stay blank; the round-trip column carries the
/// [`ROUND_TRIP_NOT_APPLICABLE`] sentinel.
///
/// # Errors
///
/// [`crate::error::EngineError::HomeChargeNotFound`] from the provider when
/// no home-charge record is configured.
pub fn generate_home_charge_expense(
    work_date: NaiveDate,
    provider: &dyn RateProvider,
) -> EngineResult<ExpenseLedger> {
    let home_charge = provider.home_charge()?;

    debug!(
        work_date = %work_date,
        amount = home_charge.amount,
        "generated home-office charge"
    );

    let mut expenses = ExpenseLedger::new();
    expenses.push(ExpenseRow {
        work_date,
        departure: String::new(),
        destination: String::new(),
        round_trip: ROUND_TRIP_NOT_APPLICABLE.to_string(),
        amount: home_charge.amount,
        customer_billing: CUSTOMER_BILLING_NONE.to_string(),
        reason: HOME_CHARGE_REASON.to_string(),
        transport: String::new(),
        note: String::new(),
    });

    Ok(expenses)
}
