//! Timetabling domain models.
//!
//! Core data types for representing a term's course selection and the
//! generated timetable candidates.
//!
//! # Domain Mapping
//!
//! | timetabler | University catalog |
//! |------------|--------------------|
//! | Subject | Course/Materia |
//! | Commission | Section/Comisión |
//! | ScheduleEntry | Weekly class meeting |
//! | TimeBlock | User-blocked period |
//! | CandidateSchedule | One complete timetable |

mod block;
mod candidate;
mod options;
mod subject;
mod time;

pub use block::TimeBlock;
pub use candidate::{CandidateSchedule, ScheduleSlot};
pub use options::{GeneratorOptions, DEFAULT_MAX_EXPLORED_NODES};
pub use subject::{Commission, DateRange, ScheduleEntry, SelectionPolicy, Subject};
pub use time::{format_time, intervals_overlap, parse_time, TimeError, Weekday, WEEKDAYS};
