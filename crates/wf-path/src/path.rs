//! Search results.

use std::fmt;

use wf_core::{Order, TileId, UnitId};

use crate::Cost;

/// One order of a path and the unit's state once it is executed.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step {
    /// Where the unit stands after the order.
    pub tile: TileId,
    /// The transport carrying the unit after the order.
    pub loaded: Option<UnitId>,
    pub order: Order,
    /// Cost accumulated from the start of the path up to this step.
    pub cost: Cost,
}

impl Step {
    #[inline]
    pub fn turns(&self) -> u32 {
        self.cost.turns
    }
}

/// An ordered list of steps from the unit's position to a destination.
///
/// An empty path means "no path" (or nothing to do); it is not an error.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    steps: Vec<Step>,
}

impl Path {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn first(&self) -> Option<&Step> {
        self.steps.first()
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// Turns needed to complete the path; `0` for an empty path.
    pub fn turns(&self) -> u32 {
        self.last().map_or(0, Step::turns)
    }

    /// Tile reached by the last step.
    pub fn destination(&self) -> Option<TileId> {
        self.last().map(|s| s.tile)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// One order per line: `turn 0: move e`.
impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.steps.is_empty() {
            return f.write_str("(no path)");
        }
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "turn {}: {}", step.cost.turns, step.order)?;
        }
        Ok(())
    }
}
