//! The `Rules` trait — every question the path finder asks the game.
//!
//! # Pluggability
//!
//! The path finder never reads map or ruleset state directly.  It builds a
//! *probe* ([`UnitState`]) describing the unit as it would be at a search
//! vertex and asks a [`Rules`] implementation what that unit could do.  The
//! world is passed explicitly to every query, so tests can plug in a
//! hand-written mock and applications their real game state.  [`GridWorld`]
//! is the reference implementation.
//!
//! [`GridWorld`]: crate::GridWorld
//!
//! # Cost units
//!
//! All movement values are in fragments ([`MoveFrags`]); a full move is
//! [`wf_core::SINGLE_MOVE`] fragments.

use wf_core::{Action, Direction, DisembarkKind, MoveFrags, TileId, UnitId, UnitState};

/// Map topology and legality oracles consumed by the path finder.
///
/// Every `probe` argument is a transient snapshot: implementations must not
/// assume the probe matches any unit actually stored in the world.
pub trait Rules {
    // ── Topology ──────────────────────────────────────────────────────────

    /// `true` if `tile` is a valid tile of this world.
    fn contains(&self, tile: TileId) -> bool;

    /// Neighbouring tiles of `tile`, each with the direction reaching it.
    fn neighbors(&self, tile: TileId) -> impl Iterator<Item = (TileId, Direction)> + '_;

    /// Whether the unit's owner knows what is on `tile`.  Unknown tiles are
    /// skipped by the move rule.
    fn is_known(&self, _tile: TileId) -> bool {
        true
    }

    // ── Movement ──────────────────────────────────────────────────────────

    /// Full movement allowance of a unit in the probe's state.
    fn move_rate(&self, probe: &UnitState) -> MoveFrags;

    /// Whether the probe may step onto the adjacent `target`.
    fn can_move_to(&self, probe: &UnitState, target: TileId) -> bool;

    /// Movement fragments the probe pays to step onto `target`.  The path
    /// finder caps this at the probe's remaining moves.
    fn move_cost(&self, probe: &UnitState, target: TileId) -> MoveFrags;

    // ── Transport ─────────────────────────────────────────────────────────

    /// A transport on `tile` able to take the probe, if any.  Never the
    /// transport already carrying the probe.
    fn transport_at(&self, probe: &UnitState, tile: TileId) -> Option<UnitId>;

    /// Whether the probe may load into `transport` on its own tile.
    fn can_board(&self, probe: &UnitState, transport: UnitId) -> bool;

    /// Whether the probe may move onto adjacent `target` and load into
    /// `transport` there.
    fn can_embark(&self, probe: &UnitState, transport: UnitId, target: TileId) -> bool;

    /// Whether the (transported) probe may unload on its current tile.
    fn can_alight(&self, probe: &UnitState) -> bool;

    /// Whether the (transported) probe may unload onto adjacent `target`
    /// using the given disembark action.
    fn can_disembark(&self, probe: &UnitState, target: TileId, kind: DisembarkKind) -> bool;

    /// Movement fragments the action itself costs, on top of any terrain cost
    /// for tile-changing actions.
    fn action_move_cost(&self, _probe: &UnitState, _action: Action) -> MoveFrags {
        0
    }

    // ── Turn change ───────────────────────────────────────────────────────

    /// Whether the probe's position refills its fuel.
    fn is_refuel_point(&self, probe: &UnitState) -> bool;

    /// Fuel capacity of the probe's kind; `0` for kinds without fuel.
    fn fuel_capacity(&self, probe: &UnitState) -> i32;

    /// Hit points the probe has after a turn change at its position.
    /// Values `<= 0` mean the unit dies.
    fn restore_health(&self, probe: &UnitState) -> i32;
}
