//! Search vertices.
//!
//! A vertex is the unit's path-relevant state at one point of a candidate
//! path plus a link to the vertex it was reached from.  Links are
//! [`VertexId`]s into the arena owned by the [`Frontier`](crate::Frontier),
//! so evicting a vertex from its bucket never invalidates its descendants.

use std::fmt;

use wf_core::{Order, TileId, UnitId, UnitState};

use crate::Cost;

/// Index of a vertex in the search arena.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct VertexId(pub u32);

impl VertexId {
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VertexId({})", self.0)
    }
}

/// How a vertex was reached: its parent and the order executed there.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Link {
    pub parent: VertexId,
    pub order: Order,
}

/// One search node.
///
/// Equality compares the unit state and cost only; two vertices reached by
/// different orders are the same vertex.
#[derive(Copy, Clone, Debug)]
pub struct Vertex {
    pub location: TileId,
    /// The transport carrying the unit, if any.
    pub loaded: Option<UnitId>,
    /// A move order was already used this turn.
    pub moved: bool,
    pub cost: Cost,
    /// `None` only for the search root.
    pub link: Option<Link>,
}

impl Vertex {
    /// The search root: the unit as it stands, zero turns elapsed.
    pub fn root(unit: &UnitState) -> Self {
        Self {
            location: unit.tile,
            loaded:   unit.transporter,
            moved:    unit.moved,
            cost:     Cost::new(0, unit.moves_left, unit.hp, unit.fuel),
            link:     None,
        }
    }

    /// `true` when the unit states match and one cost is at least as good as
    /// the other everywhere.  Vertices that are not comparable are distinct
    /// frontier entries (e.g. different transports, or moved vs. not moved).
    pub fn comparable(&self, other: &Vertex) -> bool {
        self.location == other.location
            && self.loaded == other.loaded
            && self.moved == other.moved
            && self.cost.comparable(&other.cost)
    }

    #[inline]
    pub fn parent(&self) -> Option<VertexId> {
        self.link.map(|l| l.parent)
    }

    #[inline]
    pub fn order(&self) -> Option<Order> {
        self.link.map(|l| l.order)
    }

    /// Build the probe handed to the rules: `base` with every field this
    /// vertex tracks overwritten.  Fields the search does not track (id,
    /// kind, …) keep the base unit's values.
    pub fn probe(&self, base: &UnitState) -> UnitState {
        UnitState {
            tile:        self.location,
            transporter: self.loaded,
            moved:       self.moved,
            moves_left:  self.cost.moves_left,
            hp:          self.cost.health,
            fuel:        self.cost.fuel_left,
            ..*base
        }
    }

    /// A copy of this vertex reached from `parent` (this vertex's id) by
    /// `order`.  The caller adjusts location, cost and flags.
    #[inline]
    pub(crate) fn child(&self, parent: VertexId, order: Order) -> Vertex {
        Vertex { link: Some(Link { parent, order }), ..*self }
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.location == other.location
            && self.loaded == other.loaded
            && self.moved == other.moved
            && self.cost == other.cost
    }
}

impl Eq for Vertex {}
