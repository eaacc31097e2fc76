//! The four-criteria search cost.
//!
//! # Two orders
//!
//! Fewer turns, more moves left, more health and more fuel are all better,
//! but no criterion can be traded for another.  `Cost` therefore carries two
//! relations:
//!
//! - a **partial order** (Pareto dominance): `a` is at least as good as `b`
//!   when it is at least as good in every criterion.  [`Cost::comparable`]
//!   tells whether either direction holds.  It is not transitive.
//! - a **total order** ([`Ord`]) used only to schedule the priority queue and
//!   to pick the best of several results: turns ascending, then moves left,
//!   health and fuel descending.  For comparable costs the two orders agree.

use std::cmp::Ordering;

use wf_core::MoveFrags;

/// Accumulated cost of reaching a search vertex.
///
/// Validity (alive, fuelled) is enforced by the rules that build costs, not
/// by the type.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cost {
    /// Turn changes since the search root.
    pub turns: u32,
    pub moves_left: MoveFrags,
    pub health: i32,
    pub fuel_left: i32,
}

impl Cost {
    pub fn new(turns: u32, moves_left: MoveFrags, health: i32, fuel_left: i32) -> Self {
        Self { turns, moves_left, health, fuel_left }
    }

    /// `true` if one of the costs is at least as good as the other in all
    /// four criteria.
    pub fn comparable(&self, other: &Cost) -> bool {
        // Positive means `self` does better on that criterion.
        let a = other.turns as i64 - self.turns as i64;
        let b = self.moves_left as i64 - other.moves_left as i64;
        let c = self.health as i64 - other.health as i64;
        let d = self.fuel_left as i64 - other.fuel_left as i64;
        (a <= 0 && b <= 0 && c <= 0 && d <= 0) || (a >= 0 && b >= 0 && c >= 0 && d >= 0)
    }

    /// `true` if `self` is at least as good as `other` everywhere and
    /// strictly better somewhere.
    pub fn dominates(&self, other: &Cost) -> bool {
        self.comparable(other) && self < other
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.turns
            .cmp(&other.turns)
            .then_with(|| other.moves_left.cmp(&self.moves_left))
            .then_with(|| other.health.cmp(&self.health))
            .then_with(|| other.fuel_left.cmp(&self.fuel_left))
    }
}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
