//! Attendance models and TSV parsing.
//!
//! This module defines the AttendanceEntry struct and the AttendanceSheet
//! collection parsed from the tab-separated attendance log, together with
//! the date grouping and work-type filtering operations the settlement
//! pipeline is built on.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::WorkType;

/// One row of the attendance log.
///
/// Identity is positional within the source file; multiple entries may share
/// a work date (split days). Entries are immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    /// The calendar date the entry was recorded for.
    pub work_date: NaiveDate,
    /// The work type, decoded from the attendance code.
    pub work_type: WorkType,
    /// The recorded start time, if any. Carried through but not interpreted.
    pub start_time: Option<String>,
    /// Free-text memo. Used only for location resolution.
    pub memo: Option<String>,
}

/// A raw attendance row as it appears in the TSV input.
///
/// Column headers are the attendance system's labels; additional columns are
/// ignored.
#[derive(Debug, Deserialize)]
struct RawAttendanceRow {
    #[serde(rename = "年月日")]
    work_date: String,
    #[serde(rename = "勤務区分")]
    work_type: Option<String>,
    #[serde(rename = "開始")]
    start_time: Option<String>,
    #[serde(rename = "メモ")]
    memo: Option<String>,
}

/// An ordered collection of attendance entries for one reporting period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSheet {
    entries: Vec<AttendanceEntry>,
}

impl AttendanceSheet {
    /// Creates a sheet from already-parsed entries, preserving their order.
    pub fn new(entries: Vec<AttendanceEntry>) -> Self {
        Self { entries }
    }

    /// Parses an attendance sheet from tab-separated text.
    ///
    /// The input must carry a header row naming the columns `年月日`
    /// (date, `YYYYMMDD`), `勤務区分` (work-type code), `開始` (start time)
    /// and `メモ` (memo). Unknown or blank work-type codes decode to
    /// [`WorkType::Blank`]; a malformed date or row shape fails the whole
    /// parse.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::AttendanceParse`] with the offending line
    /// number when a row cannot be decoded.
    ///
    /// # Example
    ///
    /// ```
    /// use seisan_engine::models::{AttendanceSheet, WorkType};
    ///
    /// let tsv = "年月日\t勤務区分\t開始\tメモ\n20240401\t10\t09:00\t\n";
    /// let sheet = AttendanceSheet::from_tsv(tsv).unwrap();
    /// assert_eq!(sheet.len(), 1);
    /// assert_eq!(sheet.entries()[0].work_type, WorkType::CompanyOnsite);
    /// ```
    pub fn from_tsv(tsv: &str) -> EngineResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .flexible(false)
            .from_reader(tsv.as_bytes());

        let mut entries = Vec::new();

        for (index, row) in reader.deserialize::<RawAttendanceRow>().enumerate() {
            // Header occupies line 1, so the first record is line 2.
            let line = (index + 2) as u64;

            let raw = row.map_err(|e| EngineError::AttendanceParse {
                line: e
                    .position()
                    .map(|position| position.line())
                    .unwrap_or(line),
                message: e.to_string(),
            })?;

            let work_date = NaiveDate::parse_from_str(&raw.work_date, "%Y%m%d").map_err(|_| {
                EngineError::AttendanceParse {
                    line,
                    message: format!("invalid date '{}'", raw.work_date),
                }
            })?;

            let work_type = raw
                .work_type
                .as_deref()
                .map(WorkType::from_code)
                .unwrap_or(WorkType::Blank);

            entries.push(AttendanceEntry {
                work_date,
                work_type,
                start_time: raw.start_time,
                memo: raw.memo,
            });
        }

        Ok(Self { entries })
    }

    /// Returns the entries in source order.
    pub fn entries(&self) -> &[AttendanceEntry] {
        &self.entries
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the sheet holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Groups the entries by work date, preserving first-seen date order.
    ///
    /// One stable pass: a later entry for an already-seen date joins that
    /// date's existing group. Output row order downstream depends on this
    /// ordering, so it is part of the external contract.
    ///
    /// # Example
    ///
    /// ```
    /// use seisan_engine::models::AttendanceSheet;
    ///
    /// let tsv = "年月日\t勤務区分\t開始\tメモ\n\
    ///            20240402\t10\t\t\n\
    ///            20240401\t01\t\t\n\
    ///            20240402\t01\t\t\n";
    /// let sheet = AttendanceSheet::from_tsv(tsv).unwrap();
    /// let groups = sheet.group_by_date();
    /// assert_eq!(groups.len(), 2);
    /// assert_eq!(groups[0].entries().len(), 2); // both 2024-04-02 entries
    /// ```
    pub fn group_by_date(&self) -> Vec<AttendanceGroup> {
        let mut groups: Vec<AttendanceGroup> = Vec::new();

        for entry in &self.entries {
            match groups
                .iter_mut()
                .find(|group| group.work_date() == entry.work_date)
            {
                Some(group) => group.entries.push(entry.clone()),
                None => groups.push(AttendanceGroup {
                    work_date: entry.work_date,
                    entries: vec![entry.clone()],
                }),
            }
        }

        groups
    }
}

/// The attendance entries sharing a single work date.
///
/// Invariant: every entry's `work_date` equals the group's `work_date`.
/// Created by [`AttendanceSheet::group_by_date`] and consumed once per date
/// by the settlement processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceGroup {
    work_date: NaiveDate,
    entries: Vec<AttendanceEntry>,
}

impl AttendanceGroup {
    /// Returns the shared work date of the group.
    pub fn work_date(&self) -> NaiveDate {
        self.work_date
    }

    /// Returns the entries in source order.
    pub fn entries(&self) -> &[AttendanceEntry] {
        &self.entries
    }

    /// Returns a group restricted to the given work types, order preserved.
    pub fn filter_by_work_type(&self, work_types: &[WorkType]) -> AttendanceGroup {
        AttendanceGroup {
            work_date: self.work_date,
            entries: self
                .entries
                .iter()
                .filter(|entry| work_types.contains(&entry.work_type))
                .cloned()
                .collect(),
        }
    }
}
