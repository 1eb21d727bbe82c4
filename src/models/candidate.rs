//! Candidate schedule (solution) model.
//!
//! A candidate schedule is one complete combination of commission
//! choices, exactly one per subject, with conflict metrics derived at
//! generation time. Candidates are produced fresh on every generation
//! call and fully replaced when any input changes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::subject::DateRange;
use super::time::{Weekday, WEEKDAYS};

/// One materialized class placement.
///
/// Carries subject identity so downstream stages need no back-reference
/// to the [`Subject`](super::Subject) it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    /// Day of the week.
    pub day: Weekday,
    /// Start time (minutes since midnight, inclusive).
    pub start_min: i32,
    /// End time (minutes since midnight, exclusive).
    pub end_min: i32,
    /// Owning subject ID.
    pub subject_id: String,
    /// Owning subject display name.
    pub subject_name: String,
    /// Chosen commission name.
    pub commission: String,
    /// Building where the class meets.
    pub building: String,
    /// Room within the building.
    pub room: String,
    /// Course date range inherited from the subject.
    pub date_range: Option<DateRange>,
}

impl ScheduleSlot {
    /// Slot duration in minutes.
    #[inline]
    pub fn duration_min(&self) -> i32 {
        self.end_min - self.start_min
    }
}

/// A complete timetable candidate with derived conflict metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSchedule {
    /// Materialized slots, in subject input order then entry order.
    pub slots: Vec<ScheduleSlot>,
    /// Largest inter-subject overlap anywhere in the week (minutes).
    /// `0` = no inter-subject overlap at all.
    pub max_overlap_min: i32,
    /// Whether any day has an under-60-minute gap between consecutive
    /// classes in different buildings.
    pub has_building_conflict: bool,
    /// Whether at least one of Monday–Friday carries zero slots.
    pub has_free_day: bool,
}

impl CandidateSchedule {
    /// Number of slots.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Returns all slots belonging to a subject.
    pub fn slots_for_subject(&self, subject_id: &str) -> Vec<&ScheduleSlot> {
        self.slots
            .iter()
            .filter(|s| s.subject_id == subject_id)
            .collect()
    }

    /// Days on which at least one class meets, sorted Monday-first.
    pub fn days_used(&self) -> BTreeSet<Weekday> {
        self.slots.iter().map(|s| s.day).collect()
    }

    /// Weekdays (Mon–Fri) with zero slots.
    pub fn free_weekdays(&self) -> Vec<Weekday> {
        let used = self.days_used();
        WEEKDAYS
            .iter()
            .copied()
            .filter(|d| !used.contains(d))
            .collect()
    }

    /// Total scheduled class time per week (minutes).
    pub fn weekly_minutes(&self) -> i32 {
        self.slots.iter().map(|s| s.duration_min()).sum()
    }
}
