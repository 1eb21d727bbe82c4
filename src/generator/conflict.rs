//! Conflict evaluation: admission, classification, and the validity gate.
//!
//! Two independent predicate families with different lifetimes:
//!
//! - **Admission** prunes branches during the search, before they are
//!   explored. Under a permissive overlap policy it never rejects on time
//!   grounds, so overlap magnitude stays measurable afterwards.
//! - **Classification** and the **validity gate** run once per complete
//!   assignment, when the full day-by-day ordering is known.

use std::collections::BTreeMap;

use crate::models::{
    intervals_overlap, GeneratorOptions, ScheduleSlot, TimeBlock, Weekday, WEEKDAYS,
};

/// Minimum gap between consecutive classes in different buildings before
/// the day is flagged as a building conflict.
pub const MIN_BUILDING_GAP_MIN: i32 = 60;

/// Conflict metrics derived from one complete assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConflictMetrics {
    /// Largest inter-subject overlap in the week (minutes, 0 if none).
    pub max_overlap_min: i32,
    /// Whether any day has an under-60-minute building change.
    pub has_building_conflict: bool,
    /// Whether at least one of Monday–Friday carries zero slots.
    pub has_free_day: bool,
}

/// Admission predicate for a batch of new slots against the partial
/// schedule.
///
/// With either overlap flag set, time conflicts never reject — overlap is
/// deferred entirely to classification and filtering. In strict mode the
/// batch is rejected if any new slot shares a day with an existing slot
/// and their half-open intervals intersect.
pub fn admits(
    existing: &[ScheduleSlot],
    incoming: &[ScheduleSlot],
    options: &GeneratorOptions,
) -> bool {
    if options.overlap_permitted() {
        return true;
    }
    incoming.iter().all(|new| {
        existing.iter().all(|old| {
            new.day != old.day
                || !intervals_overlap(new.start_min, new.end_min, old.start_min, old.end_min)
        })
    })
}

/// Computes conflict metrics for one complete assignment.
pub fn classify(slots: &[ScheduleSlot]) -> ConflictMetrics {
    let by_day = group_by_day(slots);

    let mut max_overlap_min = 0;
    let mut has_building_conflict = false;

    for day_slots in by_day.values() {
        for pair in day_slots.windows(2) {
            let (earlier, later) = (pair[0], pair[1]);

            if earlier.subject_id != later.subject_id && earlier.end_min > later.start_min {
                max_overlap_min = max_overlap_min.max(earlier.end_min - later.start_min);
            }

            if earlier.building != later.building
                && later.start_min - earlier.end_min < MIN_BUILDING_GAP_MIN
            {
                has_building_conflict = true;
            }
        }
    }

    let has_free_day = WEEKDAYS.iter().any(|d| !by_day.contains_key(d));

    ConflictMetrics {
        max_overlap_min,
        has_building_conflict,
        has_free_day,
    }
}

/// Validity gate applied once per complete assignment, before acceptance.
///
/// Rejects on a building conflict under `avoid_building_change`, on a
/// missing free day under `require_free_day`, and on any slot touching a
/// same-day blocked interval. Overlap is never enforced here — that is
/// the post-generation filter's job.
pub fn passes_validity_gate(
    slots: &[ScheduleSlot],
    metrics: &ConflictMetrics,
    options: &GeneratorOptions,
    blocks: &[TimeBlock],
) -> bool {
    if options.avoid_building_change && metrics.has_building_conflict {
        return false;
    }
    if options.require_free_day && !metrics.has_free_day {
        return false;
    }
    slots.iter().all(|slot| {
        blocks
            .iter()
            .all(|b| !b.conflicts_with(slot.day, slot.start_min, slot.end_min))
    })
}

/// Groups slots by day, each day sorted by start time.
fn group_by_day(slots: &[ScheduleSlot]) -> BTreeMap<Weekday, Vec<&ScheduleSlot>> {
    let mut by_day: BTreeMap<Weekday, Vec<&ScheduleSlot>> = BTreeMap::new();
    for slot in slots {
        by_day.entry(slot.day).or_default().push(slot);
    }
    for day_slots in by_day.values_mut() {
        day_slots.sort_by_key(|s| s.start_min);
    }
    by_day
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(day: Weekday, start: i32, end: i32, subject: &str, building: &str) -> ScheduleSlot {
        ScheduleSlot {
            day,
            start_min: start,
            end_min: end,
            subject_id: subject.to_string(),
            subject_name: subject.to_string(),
            commission: "A".to_string(),
            building: building.to_string(),
            room: String::new(),
            date_range: None,
        }
    }

    #[test]
    fn test_strict_admission_rejects_same_day_overlap() {
        let existing = vec![slot(Weekday::Monday, 480, 600, "S1", "")];
        let incoming = vec![slot(Weekday::Monday, 540, 660, "S2", "")];
        assert!(!admits(&existing, &incoming, &GeneratorOptions::default()));
    }

    #[test]
    fn test_strict_admission_accepts_touching_intervals() {
        let existing = vec![slot(Weekday::Monday, 480, 600, "S1", "")];
        let incoming = vec![slot(Weekday::Monday, 600, 720, "S2", "")];
        assert!(admits(&existing, &incoming, &GeneratorOptions::default()));
    }

    #[test]
    fn test_strict_admission_ignores_other_days() {
        let existing = vec![slot(Weekday::Monday, 480, 600, "S1", "")];
        let incoming = vec![slot(Weekday::Tuesday, 480, 600, "S2", "")];
        assert!(admits(&existing, &incoming, &GeneratorOptions::default()));
    }

    #[test]
    fn test_permissive_admission_never_rejects_on_time() {
        let existing = vec![slot(Weekday::Monday, 480, 600, "S1", "")];
        let incoming = vec![slot(Weekday::Monday, 480, 600, "S2", "")];
        let capped = GeneratorOptions::new().with_allow_overlap(true);
        let unlimited = GeneratorOptions::new().with_allow_unlimited_overlap(true);
        assert!(admits(&existing, &incoming, &capped));
        assert!(admits(&existing, &incoming, &unlimited));
    }

    #[test]
    fn test_classify_no_overlap() {
        let slots = vec![
            slot(Weekday::Monday, 480, 600, "S1", ""),
            slot(Weekday::Monday, 600, 720, "S2", ""),
        ];
        let m = classify(&slots);
        assert_eq!(m.max_overlap_min, 0);
    }

    #[test]
    fn test_classify_overlap_between_subjects() {
        // S2 starts 20 minutes before S1 ends.
        let slots = vec![
            slot(Weekday::Monday, 480, 600, "S1", ""),
            slot(Weekday::Monday, 580, 700, "S2", ""),
        ];
        assert_eq!(classify(&slots).max_overlap_min, 20);
    }

    #[test]
    fn test_classify_same_subject_overlap_not_counted() {
        let slots = vec![
            slot(Weekday::Monday, 480, 600, "S1", ""),
            slot(Weekday::Monday, 540, 660, "S1", ""),
        ];
        assert_eq!(classify(&slots).max_overlap_min, 0);
    }

    #[test]
    fn test_classify_takes_max_across_days() {
        let slots = vec![
            slot(Weekday::Monday, 480, 600, "S1", ""),
            slot(Weekday::Monday, 590, 700, "S2", ""),
            slot(Weekday::Thursday, 480, 600, "S1", ""),
            slot(Weekday::Thursday, 555, 700, "S3", ""),
        ];
        assert_eq!(classify(&slots).max_overlap_min, 45);
    }

    #[test]
    fn test_classify_building_conflict_under_gap() {
        // 30-minute gap between different buildings.
        let slots = vec![
            slot(Weekday::Monday, 480, 600, "S1", "North"),
            slot(Weekday::Monday, 630, 720, "S2", "South"),
        ];
        assert!(classify(&slots).has_building_conflict);
    }

    #[test]
    fn test_classify_building_ok_with_enough_gap() {
        let slots = vec![
            slot(Weekday::Monday, 480, 600, "S1", "North"),
            slot(Weekday::Monday, 660, 720, "S2", "South"),
        ];
        assert!(!classify(&slots).has_building_conflict);
    }

    #[test]
    fn test_classify_same_building_never_conflicts() {
        let slots = vec![
            slot(Weekday::Monday, 480, 600, "S1", "North"),
            slot(Weekday::Monday, 600, 720, "S2", "North"),
        ];
        assert!(!classify(&slots).has_building_conflict);
    }

    #[test]
    fn test_classify_free_day() {
        let mwf = vec![
            slot(Weekday::Monday, 480, 600, "S1", ""),
            slot(Weekday::Wednesday, 480, 600, "S1", ""),
            slot(Weekday::Friday, 480, 600, "S1", ""),
        ];
        assert!(classify(&mwf).has_free_day);

        let all_week: Vec<ScheduleSlot> = WEEKDAYS
            .iter()
            .map(|&d| slot(d, 480, 600, "S1", ""))
            .collect();
        assert!(!classify(&all_week).has_free_day);
    }

    #[test]
    fn test_classify_weekend_does_not_affect_free_day() {
        let slots = vec![slot(Weekday::Saturday, 480, 600, "S1", "")];
        assert!(classify(&slots).has_free_day);
    }

    #[test]
    fn test_classify_empty() {
        let m = classify(&[]);
        assert_eq!(m.max_overlap_min, 0);
        assert!(!m.has_building_conflict);
        assert!(m.has_free_day);
    }

    #[test]
    fn test_gate_building_change() {
        let slots = vec![
            slot(Weekday::Monday, 480, 600, "S1", "North"),
            slot(Weekday::Monday, 630, 720, "S2", "South"),
        ];
        let metrics = classify(&slots);
        let strict = GeneratorOptions::new().with_avoid_building_change(true);
        assert!(!passes_validity_gate(&slots, &metrics, &strict, &[]));
        assert!(passes_validity_gate(
            &slots,
            &metrics,
            &GeneratorOptions::default(),
            &[]
        ));
    }

    #[test]
    fn test_gate_free_day() {
        let all_week: Vec<ScheduleSlot> = WEEKDAYS
            .iter()
            .map(|&d| slot(d, 480, 600, "S1", ""))
            .collect();
        let metrics = classify(&all_week);
        let options = GeneratorOptions::new().with_require_free_day(true);
        assert!(!passes_validity_gate(&all_week, &metrics, &options, &[]));
    }

    #[test]
    fn test_gate_blocked_time() {
        let slots = vec![slot(Weekday::Monday, 480, 600, "S1", "")];
        let metrics = classify(&slots);
        let options = GeneratorOptions::default();

        let clash = vec![TimeBlock::new(Weekday::Monday, 540, 700)];
        assert!(!passes_validity_gate(&slots, &metrics, &options, &clash));

        // Touching block is fine (half-open intervals).
        let touching = vec![TimeBlock::new(Weekday::Monday, 600, 700)];
        assert!(passes_validity_gate(&slots, &metrics, &options, &touching));

        // Same times on another day are fine.
        let other_day = vec![TimeBlock::new(Weekday::Tuesday, 540, 700)];
        assert!(passes_validity_gate(&slots, &metrics, &options, &other_day));
    }
}
