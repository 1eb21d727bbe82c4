//! Post-generation policy filter.
//!
//! A secondary refinement layered on the validity gate, applied by the
//! caller rather than the engine. The gate never enforces overlap, so
//! when the user toggles a policy flag this filter re-derives the
//! visible candidate list from an existing generation result without
//! re-running the search.

use crate::models::{CandidateSchedule, GeneratorOptions};

/// Largest tolerated overlap (minutes) under `allow_overlap`.
///
/// Superseded by `allow_unlimited_overlap`.
pub const OVERLAP_TOLERANCE_MIN: i32 = 30;

/// Whether a candidate survives the given policy flags.
///
/// Keeps a candidate iff its overlap is permitted (unlimited, within
/// tolerance under `allow_overlap`, or zero) and the free-day
/// requirement, if set, is met.
pub fn retains(candidate: &CandidateSchedule, options: &GeneratorOptions) -> bool {
    let overlap_ok = options.allow_unlimited_overlap
        || (options.allow_overlap && candidate.max_overlap_min <= OVERLAP_TOLERANCE_MIN)
        || candidate.max_overlap_min == 0;
    let free_day_ok = !options.require_free_day || candidate.has_free_day;
    overlap_ok && free_day_ok
}

/// Filters a candidate list by the current policy flags.
///
/// Order-preserving and pure; re-runnable on every toggle change.
pub fn apply_filter(
    candidates: &[CandidateSchedule],
    options: &GeneratorOptions,
) -> Vec<CandidateSchedule> {
    candidates
        .iter()
        .filter(|c| retains(c, options))
        .cloned()
        .collect()
}
