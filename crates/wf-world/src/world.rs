//! `GridWorld` — reference [`Rules`] implementation over a [`GridMap`].
//!
//! # Rules summary
//!
//! | Question          | Answer                                                        |
//! |-------------------|---------------------------------------------------------------|
//! | Native tiles      | Land: any land tile.  Sea: ocean or a base.  Air: anything.    |
//! | Move              | Unloaded, moves left, adjacent, native target.                 |
//! | Move cost         | Land pays terrain cost, sea and air pay one move.             |
//! | Transport         | Unloaded unit whose kind carries the cargo's domain and has room, other than the current carrier. |
//! | Alight            | Transported and the current tile is native.                    |
//! | Disembark         | Transported, moves left, adjacent native target.  `FromNative` when the current tile is native, `FromNonNative` otherwise. |
//! | Refuel            | On a base, or transported.                                     |
//! | Health            | Full in a base.  Otherwise `hp_loss` unless transported, then `regen` if the unit did not move. |
//! | Move rate         | `move_rate`, scaled by `hp / max_hp` for kinds slowed by damage (at least one move). |

use wf_core::{Direction, DisembarkKind, MoveFrags, SINGLE_MOVE, TileId, UnitId, UnitKindId, UnitState};

use crate::{Domain, GridMap, Rules, Terrain, UnitKind, WorldError, WorldResult};

/// A map, a kind registry and the units standing on the map.
///
/// Transports never move during a search, so the path finder reads their
/// positions straight from `units`.
#[derive(Clone, Debug)]
pub struct GridWorld {
    map:   GridMap,
    kinds: Vec<UnitKind>,
    units: Vec<UnitState>,
}

impl GridWorld {
    pub fn new(map: GridMap) -> Self {
        Self { map, kinds: Vec::new(), units: Vec::new() }
    }

    pub fn map(&self) -> &GridMap {
        &self.map
    }

    // ── Kinds ─────────────────────────────────────────────────────────────

    /// Register a unit kind and return its id (sequential from 0).
    pub fn add_kind(&mut self, kind: UnitKind) -> UnitKindId {
        let id = UnitKindId(self.kinds.len() as u16);
        self.kinds.push(kind);
        id
    }

    pub fn kind(&self, id: UnitKindId) -> WorldResult<&UnitKind> {
        self.kinds.get(id.index()).ok_or(WorldError::KindNotFound(id))
    }

    /// Kind of a probe.  Probes are always derived from units placed through
    /// [`add_unit`](Self::add_unit), which validated the kind.
    #[inline]
    fn kind_of(&self, probe: &UnitState) -> &UnitKind {
        &self.kinds[probe.kind.index()]
    }

    // ── Units ─────────────────────────────────────────────────────────────

    /// Place a fresh unit of `kind` at `(x, y)` with full moves, hit points
    /// and fuel.
    pub fn add_unit(&mut self, kind: UnitKindId, x: u32, y: u32) -> WorldResult<UnitId> {
        let tile = self
            .map
            .tile_at(x as i64, y as i64)
            .ok_or(WorldError::OutOfBounds { x, y, width: self.map.width(), height: self.map.height() })?;
        let k = self.kind(kind)?;
        if !self.is_native(k, tile) {
            return Err(WorldError::NotNative { kind, tile });
        }
        let id = UnitId(self.units.len() as u32);
        let unit = UnitState::new(id, kind, tile, k.move_rate, k.max_hp, k.fuel);
        self.units.push(unit);
        Ok(id)
    }

    pub fn unit(&self, id: UnitId) -> WorldResult<&UnitState> {
        self.units.get(id.index()).ok_or(WorldError::UnitNotFound(id))
    }

    /// Mutable access for callers that play out orders or tweak a unit
    /// before planning (damage, spent moves, …).
    pub fn unit_mut(&mut self, id: UnitId) -> WorldResult<&mut UnitState> {
        self.units.get_mut(id.index()).ok_or(WorldError::UnitNotFound(id))
    }

    pub fn units(&self) -> &[UnitState] {
        &self.units
    }

    /// Put `cargo` inside `transport`, moving it onto the transport's tile.
    pub fn load(&mut self, cargo: UnitId, transport: UnitId) -> WorldResult<()> {
        let probe = *self.unit(cargo)?;
        let carrier = *self.unit(transport)?;
        if !self.can_carry(&carrier, &probe) {
            return Err(WorldError::CannotLoad { cargo, transport });
        }
        let unit = self.unit_mut(cargo)?;
        unit.tile = carrier.tile;
        unit.transporter = Some(transport);
        Ok(())
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn is_native(&self, kind: &UnitKind, tile: TileId) -> bool {
        match kind.domain {
            Domain::Land => self.map.terrain(tile).is_land(),
            Domain::Sea  => self.map.terrain(tile) == Terrain::Ocean || self.map.has_base(tile),
            Domain::Air  => true,
        }
    }

    /// Units inside `transport`, not counting `probe` itself.
    fn cargo_count(&self, transport: UnitId, probe: UnitId) -> usize {
        self.units
            .iter()
            .filter(|u| u.id != probe && u.transporter == Some(transport))
            .count()
    }

    fn can_carry(&self, carrier: &UnitState, cargo: &UnitState) -> bool {
        let ck = self.kind_of(carrier);
        carrier.id != cargo.id
            && !carrier.is_transported()
            && ck.carries == Some(self.kind_of(cargo).domain)
            && self.cargo_count(carrier.id, cargo.id) < ck.capacity as usize
    }

    fn carrier(&self, transport: UnitId) -> Option<&UnitState> {
        self.units.get(transport.index())
    }
}

impl Rules for GridWorld {
    fn contains(&self, tile: TileId) -> bool {
        self.map.contains(tile)
    }

    fn neighbors(&self, tile: TileId) -> impl Iterator<Item = (TileId, Direction)> + '_ {
        self.map.neighbors(tile)
    }

    fn is_known(&self, tile: TileId) -> bool {
        self.map.is_known(tile)
    }

    fn move_rate(&self, probe: &UnitState) -> MoveFrags {
        let kind = self.kind_of(probe);
        if !kind.slowed_by_damage || kind.max_hp <= 0 {
            return kind.move_rate;
        }
        let scaled = kind.move_rate * probe.hp.clamp(0, kind.max_hp) / kind.max_hp;
        scaled.max(SINGLE_MOVE.min(kind.move_rate))
    }

    fn can_move_to(&self, probe: &UnitState, target: TileId) -> bool {
        !probe.is_transported()
            && probe.moves_left > 0
            && self.map.contains(target)
            && self.map.is_adjacent(probe.tile, target)
            && self.is_native(self.kind_of(probe), target)
    }

    fn move_cost(&self, probe: &UnitState, target: TileId) -> MoveFrags {
        match self.kind_of(probe).domain {
            Domain::Land => self.map.terrain(target).move_cost(),
            Domain::Sea | Domain::Air => SINGLE_MOVE,
        }
    }

    fn transport_at(&self, probe: &UnitState, tile: TileId) -> Option<UnitId> {
        self.units
            .iter()
            .filter(|u| Some(u.id) != probe.transporter)
            .find(|u| u.tile == tile && self.can_carry(u, probe))
            .map(|u| u.id)
    }

    fn can_board(&self, probe: &UnitState, transport: UnitId) -> bool {
        self.carrier(transport).is_some_and(|t| {
            t.tile == probe.tile && probe.transporter != Some(transport) && self.can_carry(t, probe)
        })
    }

    fn can_embark(&self, probe: &UnitState, transport: UnitId, target: TileId) -> bool {
        probe.moves_left > 0
            && probe.transporter != Some(transport)
            && self.map.is_adjacent(probe.tile, target)
            && self
                .carrier(transport)
                .is_some_and(|t| t.tile == target && self.can_carry(t, probe))
    }

    fn can_alight(&self, probe: &UnitState) -> bool {
        probe.is_transported() && self.is_native(self.kind_of(probe), probe.tile)
    }

    fn can_disembark(&self, probe: &UnitState, target: TileId, kind: DisembarkKind) -> bool {
        let unit_kind = self.kind_of(probe);
        let from_native = self.is_native(unit_kind, probe.tile);
        let variant_ok = match kind {
            DisembarkKind::FromNative    => from_native,
            DisembarkKind::FromNonNative => !from_native,
        };
        probe.is_transported()
            && probe.moves_left > 0
            && variant_ok
            && self.map.contains(target)
            && self.map.is_adjacent(probe.tile, target)
            && self.is_native(unit_kind, target)
    }

    fn is_refuel_point(&self, probe: &UnitState) -> bool {
        self.map.has_base(probe.tile) || probe.is_transported()
    }

    fn fuel_capacity(&self, probe: &UnitState) -> i32 {
        self.kind_of(probe).fuel
    }

    fn restore_health(&self, probe: &UnitState) -> i32 {
        let kind = self.kind_of(probe);
        if self.map.has_base(probe.tile) {
            return kind.max_hp;
        }
        let mut hp = probe.hp;
        if !probe.is_transported() {
            hp -= kind.hp_loss;
        }
        if !probe.moved {
            hp += kind.regen;
        }
        hp.min(kind.max_hp)
    }
}
