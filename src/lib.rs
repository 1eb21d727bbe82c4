//! Combinatorial course-timetable generation.
//!
//! Given a set of selected subjects, each offering one or more candidate
//! commissions with weekly time slots, enumerates every valid weekly
//! timetable under a policy of hard and soft constraints (time
//! conflicts, building changes, a free-day requirement, user-blocked
//! intervals) and classifies each candidate by conflict metrics for
//! downstream ranking.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Subject`, `Commission`,
//!   `ScheduleEntry`, `SelectionPolicy`, `TimeBlock`,
//!   `GeneratorOptions`, `ScheduleSlot`, `CandidateSchedule`
//! - **`generator`**: Backtracking enumeration — resolver,
//!   materializer, conflict evaluator, search
//! - **`filter`**: Live post-generation policy filter
//! - **`validation`**: Advisory input integrity checks
//!
//! # Architecture
//!
//! The crate is the algorithmic core of a timetable planner. Catalog
//! fetch, persistence, and rendering are external collaborators: they
//! supply subject/commission/blocked-time data and consume the
//! candidate list. Everything here is pure, synchronous computation
//! with no I/O and no process-wide state.

pub mod filter;
pub mod generator;
pub mod models;
pub mod validation;
