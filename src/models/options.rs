//! Generation policy options.
//!
//! Policy flags are passed explicitly into every generation call; the
//! engine holds no process-wide state.

use serde::{Deserialize, Serialize};

/// Default explored-state budget for a single generation call.
pub const DEFAULT_MAX_EXPLORED_NODES: u64 = 200_000;

/// Hard/soft constraint toggles for a generation call.
///
/// Overlap flags soften the time-conflict constraint: with either set,
/// the search admits overlapping slots and defers overlap to post-hoc
/// classification and filtering, so its magnitude stays measurable even
/// when permitted. `allow_unlimited_overlap` supersedes the 30-minute
/// tolerance implied by `allow_overlap`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorOptions {
    /// Admit overlapping slots; the post-generation filter keeps
    /// candidates with at most 30 overlapping minutes.
    pub allow_overlap: bool,
    /// Admit overlapping slots with no cap. Supersedes `allow_overlap`.
    pub allow_unlimited_overlap: bool,
    /// Reject candidates with an under-60-minute gap between classes in
    /// different buildings on the same day.
    pub avoid_building_change: bool,
    /// Reject candidates using all five weekdays.
    pub require_free_day: bool,
    /// Explored-state budget; exceeding it truncates the result.
    /// `0` disables the bound.
    pub max_explored_nodes: u64,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            allow_overlap: false,
            allow_unlimited_overlap: false,
            avoid_building_change: false,
            require_free_day: false,
            max_explored_nodes: DEFAULT_MAX_EXPLORED_NODES,
        }
    }
}

impl GeneratorOptions {
    /// Creates options with every constraint at its default (strict
    /// overlap, no building/free-day requirement, default node budget).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the capped-overlap flag.
    pub fn with_allow_overlap(mut self, allow: bool) -> Self {
        self.allow_overlap = allow;
        self
    }

    /// Sets the unlimited-overlap flag.
    pub fn with_allow_unlimited_overlap(mut self, allow: bool) -> Self {
        self.allow_unlimited_overlap = allow;
        self
    }

    /// Sets the building-change constraint.
    pub fn with_avoid_building_change(mut self, avoid: bool) -> Self {
        self.avoid_building_change = avoid;
        self
    }

    /// Sets the free-day requirement.
    pub fn with_require_free_day(mut self, require: bool) -> Self {
        self.require_free_day = require;
        self
    }

    /// Sets the explored-state budget (`0` = unbounded).
    pub fn with_max_explored_nodes(mut self, max: u64) -> Self {
        self.max_explored_nodes = max;
        self
    }

    /// Whether admission may accept overlapping slots.
    #[inline]
    pub fn overlap_permitted(&self) -> bool {
        self.allow_overlap || self.allow_unlimited_overlap
    }
}
