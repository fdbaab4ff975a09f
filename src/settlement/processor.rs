//! The attendance-to-expense transformation orchestrator.
//!
//! This module walks the attendance sheet date by date, classifies each
//! day's work pattern and dispatches to the matching expense generator.

use tracing::debug;

use crate::error::EngineResult;
use crate::models::{AttendanceSheet, ExpenseLedger, WorkType};
use crate::rates::RateProvider;

use super::home_charge::generate_home_charge_expense;
use super::onsite::generate_onsite_expenses;
use super::pattern::{WorkPattern, classify_pattern};

/// Transforms an attendance sheet into the expense ledger.
///
/// Entries are grouped by work date in first-seen order; each group is
/// classified and handled by pattern:
///
/// - `Onsite` — the group is filtered to on-site entries and every one of
///   them yields a fare row via the on-site generator.
/// - `Offsite` — one flat home-office charge row for the day.
/// - `Holiday` — no rows; the day is intentionally skipped.
///
/// Ledger order follows date grouping order, then generation order within a
/// date. A failure in any group aborts the whole transformation; no partial
/// ledger is returned.
///
/// # Example
///
/// ```
/// use seisan_engine::config::ConfigLoader;
/// use seisan_engine::models::AttendanceSheet;
/// use seisan_engine::settlement::process_attendance;
///
/// let provider = ConfigLoader::from_yaml_str(
///     "company:\n\
///      \x20 - location: 本社\n\
///      \x20   departure: 自宅\n\
///      \x20   destination: 本社\n\
///      \x20   amount: 500\n\
///      \x20   is_default: true\n",
/// )
/// .unwrap();
///
/// let tsv = "年月日\t勤務区分\t開始\tメモ\n20240401\t10\t\t\n";
/// let sheet = AttendanceSheet::from_tsv(tsv).unwrap();
///
/// let ledger = process_attendance(&sheet, &provider).unwrap();
/// assert_eq!(ledger.len(), 1);
/// assert_eq!(ledger.rows()[0].amount, 500);
/// ```
pub fn process_attendance(
    sheet: &AttendanceSheet,
    provider: &dyn RateProvider,
) -> EngineResult<ExpenseLedger> {
    let mut expenses = ExpenseLedger::new();

    for group in sheet.group_by_date() {
        let pattern = classify_pattern(&group);
        debug!(work_date = %group.work_date(), pattern = %pattern, "classified day");

        match pattern {
            WorkPattern::Onsite => {
                let onsite_rows =
                    group.filter_by_work_type(&[WorkType::ClientOnsite, WorkType::CompanyOnsite]);
                expenses.extend(generate_onsite_expenses(&onsite_rows, provider)?);
            }
            WorkPattern::Offsite => {
                expenses.extend(generate_home_charge_expense(group.work_date(), provider)?);
            }
            WorkPattern::Holiday => {}
        }
    }

    Ok(expenses)
}
