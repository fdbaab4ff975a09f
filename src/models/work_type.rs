//! Work-type codes and their semantic tags.
//!
//! This module defines the WorkType enum and the fixed mapping between the
//! short codes used in attendance files and their semantic meaning.

use serde::{Deserialize, Serialize};

/// The kind of work (or leave) recorded for one attendance entry.
///
/// Attendance files carry these as opaque short codes; the code table is a
/// compatibility contract with the attendance system and must not change.
///
/// # Example
///
/// ```
/// use seisan_engine::models::WorkType;
///
/// assert_eq!(WorkType::from_code("01"), WorkType::ClientOnsite);
/// assert_eq!(WorkType::ClientOnsite.code(), "01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkType {
    /// Work performed at a client location (code "01").
    ClientOnsite,
    /// Client-related work performed from home (code "02").
    ClientOffsite,
    /// Work performed at the company office (code "10").
    CompanyOnsite,
    /// Company work performed from home (code "11").
    CompanyOffsite,
    /// Absence (code "03").
    Absence,
    /// Paid holiday (code "04").
    PaidHoliday,
    /// Half-day paid holiday (code "05").
    PaidHolidayHalf,
    /// Compensatory holiday (code "06").
    CompensatoryHoliday,
    /// Summer vacation (code "08").
    SummerVacation,
    /// Special leave (code "09").
    SpecialLeave,
    /// Blank or unrecognized work-type field.
    Blank,
}

/// The fixed code table mapping attendance codes to work types.
///
/// `Blank` is intentionally absent: it is the fallback for the empty string
/// and for any code outside this table.
const CODE_TABLE: &[(&str, WorkType)] = &[
    ("01", WorkType::ClientOnsite),
    ("02", WorkType::ClientOffsite),
    ("10", WorkType::CompanyOnsite),
    ("11", WorkType::CompanyOffsite),
    ("03", WorkType::Absence),
    ("04", WorkType::PaidHoliday),
    ("05", WorkType::PaidHolidayHalf),
    ("06", WorkType::CompensatoryHoliday),
    ("08", WorkType::SummerVacation),
    ("09", WorkType::SpecialLeave),
];

impl WorkType {
    /// Maps an attendance code to its work type.
    ///
    /// Unknown or blank codes map to [`WorkType::Blank`] rather than an
    /// error; attendance rows with unrecognized codes carry no expense
    /// semantics but must not fail the whole invocation.
    ///
    /// # Example
    ///
    /// ```
    /// use seisan_engine::models::WorkType;
    ///
    /// assert_eq!(WorkType::from_code("10"), WorkType::CompanyOnsite);
    /// assert_eq!(WorkType::from_code(""), WorkType::Blank);
    /// assert_eq!(WorkType::from_code("99"), WorkType::Blank);
    /// ```
    pub fn from_code(code: &str) -> WorkType {
        CODE_TABLE
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, work_type)| *work_type)
            .unwrap_or(WorkType::Blank)
    }

    /// Returns the attendance code for this work type.
    pub fn code(&self) -> &'static str {
        CODE_TABLE
            .iter()
            .find(|(_, work_type)| work_type == self)
            .map(|(code, _)| *code)
            .unwrap_or("")
    }

    /// Returns true for work types performed away from home (on-site).
    pub fn is_onsite(&self) -> bool {
        matches!(self, WorkType::ClientOnsite | WorkType::CompanyOnsite)
    }

    /// Returns true for work types performed from home (off-site).
    pub fn is_offsite(&self) -> bool {
        matches!(self, WorkType::ClientOffsite | WorkType::CompanyOffsite)
    }
}
