//! Expense ledger models and CSV serialization.
//!
//! This module defines the ExpenseRow produced by the expense generators and
//! the append-only ExpenseLedger that is serialized to the reimbursement CSV
//! handed to downstream consumers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The CSV header of the expense ledger.
///
/// Column labels and their order are a compatibility contract with the
/// downstream reimbursement sheet and must be reproduced verbatim.
pub const LEDGER_CSV_HEADER: [&str; 9] = [
    "日付",
    "出発",
    "到着",
    "往復",
    "金額/Km",
    "客先請求",
    "申請理由",
    "交通機関",
    "備考",
];

/// The default customer-billing flag ("none").
pub const CUSTOMER_BILLING_NONE: &str = "なし";

/// One reimbursable expense row.
///
/// Produced only by the expense generators; immutable once created. Ledger
/// order follows the date grouping of the attendance input, then generation
/// order within a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRow {
    /// The work date the expense was incurred on.
    pub work_date: NaiveDate,
    /// Departure station or place. Blank for home-office charges.
    pub departure: String,
    /// Arrival station or place. Blank for home-office charges.
    pub destination: String,
    /// Round-trip label: `往復` for fares, `--` when not applicable.
    pub round_trip: String,
    /// Amount in whole currency units.
    pub amount: i64,
    /// Customer-billing flag.
    pub customer_billing: String,
    /// Application reason label.
    pub reason: String,
    /// Transport mode. Blank for home-office charges.
    pub transport: String,
    /// Free-text note.
    pub note: String,
}

/// The ordered sequence of expense rows for one invocation.
///
/// Append-only during construction; rows are additive per generating event
/// and never deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseLedger {
    rows: Vec<ExpenseRow>,
}

impl ExpenseLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one row to the ledger.
    pub fn push(&mut self, row: ExpenseRow) {
        self.rows.push(row);
    }

    /// Appends all rows of another ledger, preserving their order.
    pub fn extend(&mut self, other: ExpenseLedger) {
        self.rows.extend(other.rows);
    }

    /// Returns the rows in ledger order.
    pub fn rows(&self) -> &[ExpenseRow] {
        &self.rows
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true when the ledger holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Serializes the ledger to CSV text.
    ///
    /// The header row, column order and labels follow
    /// [`LEDGER_CSV_HEADER`]; dates are formatted `YYYY/MM/DD` and records
    /// are terminated with a bare `\n` regardless of platform.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::LedgerSerialize`] if the CSV writer fails.
    ///
    /// # Example
    ///
    /// ```
    /// use seisan_engine::models::ExpenseLedger;
    ///
    /// let csv = ExpenseLedger::new().to_csv_text().unwrap();
    /// assert_eq!(csv, "日付,出発,到着,往復,金額/Km,客先請求,申請理由,交通機関,備考\n");
    /// ```
    pub fn to_csv_text(&self) -> EngineResult<String> {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer
            .write_record(LEDGER_CSV_HEADER)
            .map_err(|e| EngineError::LedgerSerialize {
                message: e.to_string(),
            })?;

        for row in &self.rows {
            writer
                .write_record([
                    row.work_date.format("%Y/%m/%d").to_string().as_str(),
                    row.departure.as_str(),
                    row.destination.as_str(),
                    row.round_trip.as_str(),
                    row.amount.to_string().as_str(),
                    row.customer_billing.as_str(),
                    row.reason.as_str(),
                    row.transport.as_str(),
                    row.note.as_str(),
                ])
                .map_err(|e| EngineError::LedgerSerialize {
                    message: e.to_string(),
                })?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| EngineError::LedgerSerialize {
                message: e.to_string(),
            })?;

        String::from_utf8(bytes).map_err(|e| EngineError::LedgerSerialize {
            message: e.to_string(),
        })
    }
}
