//! Timetable generation engine.
//!
//! Enumerates every valid weekly timetable for a set of subjects via
//! depth-first backtracking over per-subject commission choices.
//!
//! # Pipeline
//!
//! 1. **Resolver** — which commissions of a subject to try
//!    ([`resolve_commissions`]).
//! 2. **Materializer** — chosen commission → atomic slots
//!    ([`materialize`]).
//! 3. **Conflict evaluator** — admission during the search,
//!    classification and the validity gate at the terminal state
//!    ([`admits`], [`classify`], [`passes_validity_gate`]).
//! 4. **Search** — the backtracking loop itself ([`generate`]).
//!
//! The engine is single-threaded, synchronous, and pure: no I/O, no
//! shared state, re-enumerates from scratch on every call. Callers that
//! must not block a UI thread can run it on a background worker as-is.

mod conflict;
mod resolver;
mod search;
mod slots;

pub use conflict::{
    admits, classify, passes_validity_gate, ConflictMetrics, MIN_BUILDING_GAP_MIN,
};
pub use resolver::resolve_commissions;
pub use search::{generate, GenerationRequest, GenerationResult};
pub use slots::materialize;
