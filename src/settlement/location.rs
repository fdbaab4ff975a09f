//! Location resolution against attendance memos.
//!
//! This module finds the transportation rate whose location identifier best
//! matches the free-text memo of an attendance entry, falling back to the
//! category default.

use crate::models::TransportationRate;

/// Resolves the transportation rate for a memo by longest-substring match.
///
/// A candidate matches when its location name occurs as a substring of the
/// memo; among matches the longest location name wins. Equal-length ties go
/// to the first-encountered candidate, i.e. the resolution is stable with
/// respect to candidate order.
///
/// Shortcuts, mirroring how the rate tables are used in practice:
/// - An empty or absent memo resolves to the default immediately.
/// - A candidate set of exactly one rate resolves to the default
///   immediately; with a single configured rate the default is always the
///   right answer, so no matching is attempted.
///
/// Total: some rate is always returned, the default being the guaranteed
/// fallback.
///
/// # Example
///
/// ```
/// use seisan_engine::models::TransportationRate;
/// use seisan_engine::settlement::resolve_location;
///
/// let rate = |location: &str, amount: i64| TransportationRate {
///     location: location.to_string(),
///     departure: "Home".to_string(),
///     destination: location.to_string(),
///     amount,
///     is_default: false,
/// };
///
/// let candidates = vec![rate("Tokyo", 500), rate("TokyoStation", 650)];
/// let resolved = resolve_location(Some("at TokyoStationFront"), &candidates, &candidates[0]);
/// assert_eq!(resolved.location, "TokyoStation"); // longest match wins
/// ```
pub fn resolve_location(
    memo: Option<&str>,
    candidates: &[TransportationRate],
    default: &TransportationRate,
) -> TransportationRate {
    let memo = match memo {
        Some(memo) if !memo.is_empty() => memo,
        _ => return default.clone(),
    };

    if candidates.len() == 1 {
        return default.clone();
    }

    let mut matched = default;
    let mut max_length = 0;

    for candidate in candidates {
        let length = candidate.location.chars().count();
        if memo.contains(&candidate.location) && length > max_length {
            matched = candidate;
            max_length = length;
        }
    }

    matched.clone()
}
