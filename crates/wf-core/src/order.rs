//! Orders — the single actions that take a unit from one path step to the
//! next.
//!
//! A path is a list of orders the consumer issues one at a time.  Every
//! order carries enough information to be executed without re-running the
//! search: a direction for moves, a target tile for transport actions.

use std::fmt;

use crate::{Direction, TileId};

/// The two disembark actions a ruleset can enable independently.
///
/// They differ only in which situations the ruleset allows them; the path
/// finder tries both for every adjacent tile.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DisembarkKind {
    /// Leaving a transport that sits on terrain the cargo could stand on.
    FromNative,
    /// Leaving a transport that sits on terrain hostile to the cargo (a boat
    /// at sea, an airlifter in flight).
    FromNonNative,
}

/// Transport-related actions.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// Load into a transport on the same tile.
    Board,
    /// Move onto an adjacent tile and load into a transport there.
    Embark,
    /// Unload on the current tile.
    Alight,
    /// Unload onto an adjacent tile.
    Disembark(DisembarkKind),
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Board                                 => "board",
            Action::Embark                                => "embark",
            Action::Alight                                => "alight",
            Action::Disembark(DisembarkKind::FromNative)    => "disembark",
            Action::Disembark(DisembarkKind::FromNonNative) => "disembark-2",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One order of a path.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Order {
    /// Step to the neighbouring tile in `Direction`.
    Move(Direction),
    /// Stay in place until movement points are full again (ends the turn).
    FullMoves,
    /// Perform a transport action targeting `target`.
    Perform { action: Action, target: TileId },
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Order::Move(dir)                  => write!(f, "move {dir}"),
            Order::FullMoves                  => f.write_str("full-moves"),
            Order::Perform { action, target } => write!(f, "{action} @{}", target.0),
        }
    }
}
