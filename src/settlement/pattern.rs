//! Work-pattern classification logic.
//!
//! This module decides, for one day's attendance entries, whether the day
//! counts as on-site work, off-site (home) work, or a non-billable day.

use serde::{Deserialize, Serialize};

use crate::models::AttendanceGroup;

/// The day-level work pattern derived from the work types present that day.
///
/// Computed per attendance group, never stored.
///
/// # Example
///
/// ```
/// use seisan_engine::settlement::WorkPattern;
///
/// let pattern = WorkPattern::Onsite;
/// assert_eq!(format!("{:?}", pattern), "Onsite");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkPattern {
    /// At least one entry was worked at a company or client location.
    Onsite,
    /// All work happened from home.
    Offsite,
    /// No billable work: holiday, absence, leave, or blank entries only.
    Holiday,
}

impl std::fmt::Display for WorkPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkPattern::Onsite => write!(f, "onsite"),
            WorkPattern::Offsite => write!(f, "offsite"),
            WorkPattern::Holiday => write!(f, "holiday"),
        }
    }
}

/// Classifies one day's attendance group into its work pattern.
///
/// Priority order, highest first:
/// 1. Any on-site entry (client or company) makes the day [`WorkPattern::Onsite`].
/// 2. Otherwise any home entry makes it [`WorkPattern::Offsite`].
/// 3. Otherwise the day is [`WorkPattern::Holiday`].
///
/// On-site deliberately wins over off-site when one day mixes both, e.g. a
/// morning at the client followed by an afternoon from home: the commute
/// happened, so the day bills as on-site.
///
/// Pure and total, including groups with no entries.
///
/// # Example
///
/// ```
/// use seisan_engine::models::AttendanceSheet;
/// use seisan_engine::settlement::{WorkPattern, classify_pattern};
///
/// let tsv = "年月日\t勤務区分\t開始\tメモ\n\
///            20240401\t11\t\t\n\
///            20240401\t01\t\t\n";
/// let sheet = AttendanceSheet::from_tsv(tsv).unwrap();
/// let groups = sheet.group_by_date();
/// assert_eq!(classify_pattern(&groups[0]), WorkPattern::Onsite);
/// ```
pub fn classify_pattern(group: &AttendanceGroup) -> WorkPattern {
    let entries = group.entries();

    if entries.iter().any(|entry| entry.work_type.is_onsite()) {
        WorkPattern::Onsite
    } else if entries.iter().any(|entry| entry.work_type.is_offsite()) {
        WorkPattern::Offsite
    } else {
        WorkPattern::Holiday
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AttendanceSheet;
    use proptest::prelude::*;

    fn group_of(codes: &[&str]) -> AttendanceGroup {
        let mut tsv = String::from("年月日\t勤務区分\t開始\tメモ\n");
        for code in codes {
            tsv.push_str(&format!("20240401\t{}\t\t\n", code));
        }
        let sheet = AttendanceSheet::from_tsv(&tsv).unwrap();
        let mut groups = sheet.group_by_date();
        groups.remove(0)
    }

    fn empty_group() -> AttendanceGroup {
        // Filtering away every entry leaves a group with an empty entry set.
        group_of(&["04"]).filter_by_work_type(&[crate::models::WorkType::ClientOnsite])
    }

    /// PC-001: client on-site day classifies Onsite
    #[test]
    fn test_pc_001_client_onsite() {
        assert_eq!(classify_pattern(&group_of(&["01"])), WorkPattern::Onsite);
    }

    /// PC-002: company on-site day classifies Onsite
    #[test]
    fn test_pc_002_company_onsite() {
        assert_eq!(classify_pattern(&group_of(&["10"])), WorkPattern::Onsite);
    }

    /// PC-003: pure home day classifies Offsite
    #[test]
    fn test_pc_003_offsite() {
        assert_eq!(classify_pattern(&group_of(&["02"])), WorkPattern::Offsite);
        assert_eq!(classify_pattern(&group_of(&["11"])), WorkPattern::Offsite);
    }

    /// PC-004: on-site wins over off-site on a mixed day
    #[test]
    fn test_pc_004_onsite_precedence() {
        assert_eq!(
            classify_pattern(&group_of(&["11", "01"])),
            WorkPattern::Onsite
        );
        assert_eq!(
            classify_pattern(&group_of(&["02", "10"])),
            WorkPattern::Onsite
        );
    }

    /// PC-005: holiday and leave codes classify Holiday
    #[test]
    fn test_pc_005_holiday_codes() {
        for code in ["03", "04", "05", "06", "08", "09"] {
            assert_eq!(
                classify_pattern(&group_of(&[code])),
                WorkPattern::Holiday,
                "code {code}"
            );
        }
    }

    /// PC-006: blank and unknown codes classify Holiday
    #[test]
    fn test_pc_006_blank_is_holiday() {
        assert_eq!(classify_pattern(&group_of(&[""])), WorkPattern::Holiday);
        assert_eq!(classify_pattern(&group_of(&["42"])), WorkPattern::Holiday);
    }

    /// PC-007: holiday plus a home entry classifies Offsite
    #[test]
    fn test_pc_007_half_holiday_half_home() {
        assert_eq!(
            classify_pattern(&group_of(&["05", "11"])),
            WorkPattern::Offsite
        );
    }

    #[test]
    fn test_empty_group_is_holiday() {
        assert_eq!(classify_pattern(&empty_group()), WorkPattern::Holiday);
    }

    #[test]
    fn test_work_pattern_display() {
        assert_eq!(WorkPattern::Onsite.to_string(), "onsite");
        assert_eq!(WorkPattern::Offsite.to_string(), "offsite");
        assert_eq!(WorkPattern::Holiday.to_string(), "holiday");
    }

    const ALL_CODES: &[&str] = &[
        "01", "02", "10", "11", "03", "04", "05", "06", "08", "09", "", "99",
    ];

    proptest! {
        /// Classification is total: every combination of codes yields
        /// exactly one pattern, and any on-site code forces Onsite.
        #[test]
        fn prop_classification_total_with_onsite_precedence(
            codes in proptest::collection::vec(
                proptest::sample::select(ALL_CODES),
                1..8,
            )
        ) {
            let group = group_of(&codes);
            let pattern = classify_pattern(&group);

            let has_onsite = codes.iter().any(|c| *c == "01" || *c == "10");
            let has_offsite = codes.iter().any(|c| *c == "02" || *c == "11");

            if has_onsite {
                prop_assert_eq!(pattern, WorkPattern::Onsite);
            } else if has_offsite {
                prop_assert_eq!(pattern, WorkPattern::Offsite);
            } else {
                prop_assert_eq!(pattern, WorkPattern::Holiday);
            }
        }
    }
}
