//! Commission resolution against a selection policy.

use crate::models::{Commission, SelectionPolicy, Subject};

/// Returns the commissions of a subject eligible for the search, in
/// catalog declaration order.
///
/// [`SelectionPolicy::Any`] returns all commissions. An explicit subset
/// returns exactly the matching ones; a subset matching none falls back
/// to all commissions, so a stale saved selection degrades to "any"
/// instead of silently excluding the subject.
///
/// Commissions with empty schedules are never filtered here — excluding
/// unscheduled subjects before invocation is the caller's responsibility.
pub fn resolve_commissions<'a>(
    subject: &'a Subject,
    policy: &SelectionPolicy,
) -> Vec<&'a Commission> {
    match policy {
        SelectionPolicy::Any => subject.commissions.iter().collect(),
        SelectionPolicy::Commissions(names) => {
            let matched: Vec<&Commission> = subject
                .commissions
                .iter()
                .filter(|c| names.iter().any(|n| n == &c.name))
                .collect();
            if matched.is_empty() {
                subject.commissions.iter().collect()
            } else {
                matched
            }
        }
    }
}
