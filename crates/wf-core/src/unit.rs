//! Unit state snapshots.
//!
//! [`UnitState`] is both the unit as the world stores it and the transient
//! *probe* the path finder synthesizes for every legality query: it copies
//! the base unit and overwrites the fields a search vertex tracks.  The type
//! is `Copy` and holds no heap data, so building a probe is a few register
//! moves.

use crate::{TileId, UnitId, UnitKindId};

/// Movement points are counted in fragments so terrain can cost fractions of
/// a full move.
pub type MoveFrags = i32;

/// Number of fragments in one full move.
pub const SINGLE_MOVE: MoveFrags = 3;

/// Everything about a unit that path finding reads.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitState {
    pub id: UnitId,
    pub kind: UnitKindId,
    pub tile: TileId,
    /// The transport carrying this unit, if any.
    pub transporter: Option<UnitId>,
    /// Whether a move order was already executed this turn.
    pub moved: bool,
    pub moves_left: MoveFrags,
    pub hp: i32,
    /// Remaining fuel in turns.  Ignored for kinds without fuel.
    pub fuel: i32,
    /// Frozen in place (e.g. by a scenario); such units never get a path.
    pub stay: bool,
}

impl UnitState {
    /// A fresh, unloaded unit with full stats that has not moved yet.
    pub fn new(id: UnitId, kind: UnitKindId, tile: TileId, moves_left: MoveFrags, hp: i32, fuel: i32) -> Self {
        Self {
            id,
            kind,
            tile,
            transporter: None,
            moved: false,
            moves_left,
            hp,
            fuel,
            stay: false,
        }
    }

    #[inline]
    pub fn is_transported(&self) -> bool {
        self.transporter.is_some()
    }

    /// Builder-style setter for remaining movement.
    pub fn with_moves(mut self, moves_left: MoveFrags) -> Self {
        self.moves_left = moves_left;
        self
    }
}
