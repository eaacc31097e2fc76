//! Unit kinds — the static parameters shared by every unit of a type.

use wf_core::{MoveFrags, SINGLE_MOVE};

/// Where a unit kind can stand on its own.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Domain {
    Land,
    Sea,
    Air,
}

/// Static unit type parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitKind {
    pub name: String,
    pub domain: Domain,
    /// Full movement allowance at full health.
    pub move_rate: MoveFrags,
    pub max_hp: i32,
    /// Fuel capacity in turns; `0` means the kind does not use fuel.
    pub fuel: i32,
    /// Number of units this kind can carry.
    pub capacity: u8,
    /// Domain of the cargo this kind carries, if it is a transport.
    pub carries: Option<Domain>,
    /// Hit points recovered per turn when the unit did not move.
    pub regen: i32,
    /// Hit points lost per turn outside a base and not transported.
    pub hp_loss: i32,
    /// Movement allowance shrinks with damage.
    pub slowed_by_damage: bool,
}

impl UnitKind {
    /// A kind with `moves` whole moves, `max_hp` hit points and no special
    /// properties.
    pub fn new(name: impl Into<String>, domain: Domain, moves: i32, max_hp: i32) -> Self {
        Self {
            name: name.into(),
            domain,
            move_rate: moves * SINGLE_MOVE,
            max_hp,
            fuel: 0,
            capacity: 0,
            carries: None,
            regen: 0,
            hp_loss: 0,
            slowed_by_damage: false,
        }
    }

    pub fn with_fuel(mut self, turns: i32) -> Self {
        self.fuel = turns;
        self
    }

    pub fn with_cargo(mut self, carries: Domain, capacity: u8) -> Self {
        self.carries = Some(carries);
        self.capacity = capacity;
        self
    }

    pub fn with_regen(mut self, regen: i32) -> Self {
        self.regen = regen;
        self
    }

    pub fn with_hp_loss(mut self, hp_loss: i32) -> Self {
        self.hp_loss = hp_loss;
        self
    }

    pub fn slowed_by_damage(mut self) -> Self {
        self.slowed_by_damage = true;
        self
    }

    #[inline]
    pub fn uses_fuel(&self) -> bool {
        self.fuel > 0
    }

    // ── Presets ───────────────────────────────────────────────────────────

    /// One-move foot soldier that heals when resting.
    pub fn warriors() -> Self {
        UnitKind::new("Warriors", Domain::Land, 1, 10).with_regen(1).slowed_by_damage()
    }

    /// Three-move boat carrying two land units.
    pub fn trireme() -> Self {
        UnitKind::new("Trireme", Domain::Sea, 3, 10).with_cargo(Domain::Land, 2)
    }

    /// Fast aircraft that must return to a base every other turn.
    pub fn fighter() -> Self {
        UnitKind::new("Fighter", Domain::Air, 10, 20).with_fuel(2)
    }

    /// Aircraft without fuel that loses health every turn away from a base.
    pub fn helicopter() -> Self {
        UnitKind::new("Helicopter", Domain::Air, 6, 20).with_hp_loss(2)
    }
}
