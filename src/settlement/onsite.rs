//! On-site expense generation.
//!
//! This module produces commute and client-site fare rows for days worked
//! at a company or client location.

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceGroup, CUSTOMER_BILLING_NONE, ExpenseLedger, ExpenseRow, WorkType,
};
use crate::rates::RateProvider;

use super::location::resolve_location;

/// Reason label for client-site transportation.
pub const CLIENT_SITE_REASON: &str = "顧客先交通費";

/// Reason label for the standard commute.
pub const COMMUTE_REASON: &str = "通勤費(通常勤務地)";

/// Round-trip label carried by every fare row.
pub const ROUND_TRIP: &str = "往復";

/// Transport mode carried by every fare row.
pub const TRANSPORT_TRAIN: &str = "電車";

/// Generates one fare row per on-site attendance entry.
///
/// The group must already be filtered to on-site work types (client or
/// company); the orchestrator guarantees this. Entries are processed in
/// source order and each yields exactly one row, so a split day with
/// multiple on-site entries yields multiple rows.
///
/// Client-site entries resolve their fare against the customer rates with
/// the customer default as fallback; company entries resolve against the
/// company rates the same way. Resolution uses the entry memo
/// (longest-substring match, see [`resolve_location`]).
///
/// # Errors
///
/// - [`EngineError::UnexpectedWorkType`] when a non-on-site entry slipped
///   through the caller's filter. This is a programming-contract violation
///   and fails loudly rather than being skipped.
/// - [`EngineError::RateNotFound`] from the provider when a category has
///   no default rate.
pub fn generate_onsite_expenses(
    group: &AttendanceGroup,
    provider: &dyn RateProvider,
) -> EngineResult<ExpenseLedger> {
    let mut expenses = ExpenseLedger::new();

    for entry in group.entries() {
        let (transportation, reason) = match entry.work_type {
            WorkType::ClientOnsite => {
                let candidates = provider.customer_rates()?;
                let default = provider.default_customer_rate()?;
                (
                    resolve_location(entry.memo.as_deref(), &candidates, &default),
                    CLIENT_SITE_REASON,
                )
            }
            WorkType::CompanyOnsite => {
                let candidates = provider.company_rates()?;
                let default = provider.default_company_rate()?;
                (
                    resolve_location(entry.memo.as_deref(), &candidates, &default),
                    COMMUTE_REASON,
                )
            }
            other => {
                return Err(EngineError::UnexpectedWorkType {
                    work_type: other.code().to_string(),
                });
            }
        };

        debug!(
            work_date = %group.work_date(),
            location = %transportation.location,
            amount = transportation.amount,
            "resolved on-site fare"
        );

        expenses.push(ExpenseRow {
            work_date: group.work_date(),
            departure: transportation.departure,
            destination: transportation.destination,
            round_trip: ROUND_TRIP.to_string(),
            amount: transportation.amount,
            customer_billing: CUSTOMER_BILLING_NONE.to_string(),
            reason: reason.to_string(),
            transport: TRANSPORT_TRAIN.to_string(),
            note: String::new(),
        });
    }

    Ok(expenses)
}
