//! Slot materialization.

use crate::models::{Commission, ScheduleSlot, Subject};

/// Expands a chosen commission into atomic schedule slots.
///
/// One slot per schedule entry, entry order preserved. Subject identity
/// (id, name, date range) is copied onto every slot so later stages need
/// no back-reference to the subject.
///
/// Pure and validation-free: malformed entries materialize into
/// malformed slots. Integrity checks belong to [`crate::validation`].
pub fn materialize(subject: &Subject, commission: &Commission) -> Vec<ScheduleSlot> {
    commission
        .entries
        .iter()
        .map(|entry| ScheduleSlot {
            day: entry.day,
            start_min: entry.start_min,
            end_min: entry.end_min,
            subject_id: subject.id.clone(),
            subject_name: subject.name.clone(),
            commission: commission.name.clone(),
            building: entry.building.clone(),
            room: entry.room.clone(),
            date_range: subject.date_range.clone(),
        })
        .collect()
}
