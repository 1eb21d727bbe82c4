//! Blocked time model.
//!
//! A blocked time is a user-declared weekly interval in which no class
//! may be placed (work hours, commute, lunch). Blocks are hard: the
//! validity gate rejects any complete assignment with a slot touching
//! one, regardless of the overlap policy flags.

use serde::{Deserialize, Serialize};

use super::time::{intervals_overlap, parse_time, TimeError, Weekday};

/// A user-declared interval with no classes allowed.
///
/// Half-open `[start_min, end_min)` on a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBlock {
    /// Day of the week.
    pub day: Weekday,
    /// Start time (minutes since midnight, inclusive).
    pub start_min: i32,
    /// End time (minutes since midnight, exclusive).
    pub end_min: i32,
    /// Display label (e.g., `"Work"`). `None` = unlabeled.
    pub label: Option<String>,
}

impl TimeBlock {
    /// Creates a block from pre-resolved minute values.
    pub fn new(day: Weekday, start_min: i32, end_min: i32) -> Self {
        Self {
            day,
            start_min,
            end_min,
            label: None,
        }
    }

    /// Creates a block from `HH:MM` time strings.
    pub fn parse(day: Weekday, start: &str, end: &str) -> Result<Self, TimeError> {
        Ok(Self::new(day, parse_time(start)?, parse_time(end)?))
    }

    /// Sets the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Whether a same-day half-open interval intersects this block.
    pub fn conflicts_with(&self, day: Weekday, start_min: i32, end_min: i32) -> bool {
        self.day == day && intervals_overlap(self.start_min, self.end_min, start_min, end_min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_parse() {
        let b = TimeBlock::parse(Weekday::Monday, "09:00", "17:00")
            .unwrap()
            .with_label("Work");
        assert_eq!(b.start_min, 540);
        assert_eq!(b.end_min, 1020);
        assert_eq!(b.label.as_deref(), Some("Work"));
    }

    #[test]
    fn test_conflicts_same_day_only() {
        let b = TimeBlock::new(Weekday::Monday, 540, 1020);
        assert!(b.conflicts_with(Weekday::Monday, 600, 720));
        assert!(!b.conflicts_with(Weekday::Tuesday, 600, 720));
    }

    #[test]
    fn test_conflicts_half_open() {
        let b = TimeBlock::new(Weekday::Monday, 540, 600);
        // Touching intervals do not conflict.
        assert!(!b.conflicts_with(Weekday::Monday, 600, 720));
        assert!(!b.conflicts_with(Weekday::Monday, 480, 540));
        assert!(b.conflicts_with(Weekday::Monday, 480, 541));
    }
}
