//! Subject (course) and commission models.
//!
//! A subject is a course the student has selected for the term. It offers
//! one or more commissions (sections), each with its own weekly time
//! slots. The generator picks exactly one commission per subject.
//!
//! Catalog data is assumed pre-validated upstream; these types perform no
//! integrity checks beyond eager time-string parsing (see
//! [`crate::validation`] for the advisory checks).

use serde::{Deserialize, Serialize};

use super::time::{parse_time, TimeError, Weekday};

/// First and last day of a course, as ISO `YYYY-MM-DD` strings.
///
/// Opaque to the generator; carried onto slots so consumers need no
/// back-reference to the subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of classes.
    pub start: String,
    /// Last day of classes.
    pub end: String,
}

impl DateRange {
    /// Creates a new date range.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// One weekly occurrence of a commission.
///
/// Times are minutes since midnight, half-open `[start_min, end_min)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Day of the week.
    pub day: Weekday,
    /// Start time (minutes since midnight, inclusive).
    pub start_min: i32,
    /// End time (minutes since midnight, exclusive).
    pub end_min: i32,
    /// Building where the class meets. Empty = unknown.
    pub building: String,
    /// Room within the building. Empty = unknown.
    pub room: String,
}

impl ScheduleEntry {
    /// Creates an entry from pre-resolved minute values.
    pub fn new(day: Weekday, start_min: i32, end_min: i32) -> Self {
        Self {
            day,
            start_min,
            end_min,
            building: String::new(),
            room: String::new(),
        }
    }

    /// Creates an entry from `HH:MM` time strings.
    ///
    /// Fails fast on malformed times rather than materializing slots
    /// with invalid comparisons.
    pub fn parse(day: Weekday, start: &str, end: &str) -> Result<Self, TimeError> {
        Ok(Self::new(day, parse_time(start)?, parse_time(end)?))
    }

    /// Sets the building.
    pub fn with_building(mut self, building: impl Into<String>) -> Self {
        self.building = building.into();
        self
    }

    /// Sets the room.
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = room.into();
        self
    }

    /// Entry duration in minutes.
    #[inline]
    pub fn duration_min(&self) -> i32 {
        self.end_min - self.start_min
    }
}

/// A commission: one section of a subject with its own weekly slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commission {
    /// Commission name, unique within its subject (e.g., `"A"`, `"Curso 02"`).
    pub name: String,
    /// Weekly occurrences, in catalog order.
    pub entries: Vec<ScheduleEntry>,
}

impl Commission {
    /// Creates a commission with no entries.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Builder: appends a schedule entry.
    pub fn with_entry(mut self, entry: ScheduleEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Whether this commission has no scheduled occurrences.
    pub fn is_unscheduled(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A course to be placed on the timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Unique subject identifier (catalog code).
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Credit weight.
    pub credits: i32,
    /// Candidate commissions, in catalog order.
    pub commissions: Vec<Commission>,
    /// Year/semester tag (e.g., `"2026-1C"`). `None` = untagged.
    pub term: Option<String>,
    /// Course date range. `None` = whole term.
    pub date_range: Option<DateRange>,
}

impl Subject {
    /// Creates a subject with the given ID and no commissions.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            credits: 0,
            commissions: Vec::new(),
            term: None,
            date_range: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the credit weight.
    pub fn with_credits(mut self, credits: i32) -> Self {
        self.credits = credits;
        self
    }

    /// Builder: appends a commission.
    pub fn with_commission(mut self, commission: Commission) -> Self {
        self.commissions.push(commission);
        self
    }

    /// Sets the year/semester tag.
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    /// Sets the course date range.
    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }
}

/// Which commissions of a subject the generator may choose from.
///
/// The `"any"` string sentinel of older catalog formats is replaced by a
/// tagged variant: absence of an explicit subset is a distinct state, not
/// a magic name mixed into the list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SelectionPolicy {
    /// The engine may pick any one commission.
    #[default]
    Any,
    /// Only the named commissions are eligible.
    ///
    /// A subset matching none of the subject's commissions behaves as
    /// [`SelectionPolicy::Any`].
    Commissions(Vec<String>),
}

impl SelectionPolicy {
    /// Creates an explicit subset policy.
    pub fn commissions<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Commissions(names.into_iter().map(Into::into).collect())
    }
}
