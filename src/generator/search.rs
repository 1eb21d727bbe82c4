//! Backtracking enumeration over per-subject commission choices.
//!
//! # Algorithm
//!
//! Depth-first search over states `(partial slot list, subject index)`.
//! From subject `i`, each commission the resolver returns is materialized
//! and, if admission accepts it against the partial schedule, the search
//! descends to subject `i + 1`. At the terminal state (all subjects
//! placed) the assignment is classified, gated, and emitted.
//!
//! The partial schedule lives in a single mutable slot buffer with
//! explicit push/truncate on branch enter/leave — no per-branch clones.
//!
//! # Ordering
//!
//! Emission order is deterministic: subject input order, then resolver
//! order, left to right. It carries no ranking semantics.
//!
//! # Complexity
//!
//! Worst case is the product of per-subject eligible-commission counts.
//! Realistic selections stay small, but the explored-state budget in
//! [`GeneratorOptions`] bounds pathological inputs, returning a partial
//! result with the `truncated` flag set instead of failing.

use std::collections::HashMap;

use crate::models::{
    CandidateSchedule, GeneratorOptions, ScheduleSlot, SelectionPolicy, Subject, TimeBlock,
};

use super::conflict::{admits, classify, passes_validity_gate};
use super::resolver::resolve_commissions;
use super::slots::materialize;

/// Input container for one generation call.
///
/// Inputs are read-only per invocation; the engine holds no state
/// between calls.
#[derive(Debug, Clone, Default)]
pub struct GenerationRequest {
    /// Subjects to place, in input order.
    pub subjects: Vec<Subject>,
    /// Per-subject selection policy, keyed by subject ID.
    /// Missing = [`SelectionPolicy::Any`].
    pub policies: HashMap<String, SelectionPolicy>,
    /// User-blocked intervals.
    pub blocks: Vec<TimeBlock>,
    /// Policy options.
    pub options: GeneratorOptions,
}

impl GenerationRequest {
    /// Creates a request with default options, no policies, no blocks.
    pub fn new(subjects: Vec<Subject>) -> Self {
        Self {
            subjects,
            ..Self::default()
        }
    }

    /// Sets the selection policy for one subject.
    pub fn with_policy(mut self, subject_id: impl Into<String>, policy: SelectionPolicy) -> Self {
        self.policies.insert(subject_id.into(), policy);
        self
    }

    /// Adds a blocked interval.
    pub fn with_block(mut self, block: TimeBlock) -> Self {
        self.blocks.push(block);
        self
    }

    /// Sets the policy options.
    pub fn with_options(mut self, options: GeneratorOptions) -> Self {
        self.options = options;
        self
    }

    fn policy_for(&self, subject_id: &str) -> &SelectionPolicy {
        static ANY: SelectionPolicy = SelectionPolicy::Any;
        self.policies.get(subject_id).unwrap_or(&ANY)
    }
}

/// Result of one generation call.
///
/// An empty candidate list is a normal outcome, covering both "no
/// subject had a usable commission" and "every complete assignment
/// failed the validity gate" — the two are not distinguished.
#[derive(Debug, Clone, Default)]
pub struct GenerationResult {
    /// Valid candidates in DFS emission order.
    pub candidates: Vec<CandidateSchedule>,
    /// Whether the explored-state budget was hit before the search
    /// space was exhausted. The candidates found so far are still valid.
    pub truncated: bool,
}

impl GenerationResult {
    /// Number of candidates found.
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }
}

/// Enumerates every valid timetable for the request.
///
/// Deterministic and total: identical inputs produce the identical
/// ordered candidate list, and "no schedules found" is an empty result,
/// never an error.
///
/// # Examples
///
/// ```
/// use timetabler::generator::{generate, GenerationRequest};
/// use timetabler::models::{Commission, ScheduleEntry, Subject, Weekday};
///
/// let subjects = vec![
///     Subject::new("S1").with_commission(
///         Commission::new("A").with_entry(ScheduleEntry::new(Weekday::Monday, 480, 600)),
///     ),
///     Subject::new("S2").with_commission(
///         Commission::new("A").with_entry(ScheduleEntry::new(Weekday::Monday, 600, 720)),
///     ),
/// ];
///
/// let result = generate(&GenerationRequest::new(subjects));
/// assert_eq!(result.candidate_count(), 1);
/// assert_eq!(result.candidates[0].max_overlap_min, 0);
/// ```
pub fn generate(request: &GenerationRequest) -> GenerationResult {
    let mut result = GenerationResult::default();
    let mut arena: Vec<ScheduleSlot> = Vec::new();
    let mut explored: u64 = 0;
    descend(request, 0, &mut arena, &mut explored, &mut result);
    result
}

fn descend(
    request: &GenerationRequest,
    index: usize,
    arena: &mut Vec<ScheduleSlot>,
    explored: &mut u64,
    result: &mut GenerationResult,
) {
    let budget = request.options.max_explored_nodes;
    if budget > 0 && *explored >= budget {
        result.truncated = true;
        return;
    }
    *explored += 1;

    if index == request.subjects.len() {
        let metrics = classify(arena);
        if passes_validity_gate(arena, &metrics, &request.options, &request.blocks) {
            result.candidates.push(CandidateSchedule {
                slots: arena.clone(),
                max_overlap_min: metrics.max_overlap_min,
                has_building_conflict: metrics.has_building_conflict,
                has_free_day: metrics.has_free_day,
            });
        }
        return;
    }

    let subject = &request.subjects[index];
    let policy = request.policy_for(&subject.id);

    for commission in resolve_commissions(subject, policy) {
        let batch = materialize(subject, commission);
        if !admits(arena, &batch, &request.options) {
            continue;
        }
        let mark = arena.len();
        arena.extend(batch);
        descend(request, index + 1, arena, explored, result);
        arena.truncate(mark);
        if result.truncated {
            return;
        }
    }
}
