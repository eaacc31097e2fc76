//! Turn-boundary transition.
//!
//! A candidate whose movement is used up does not stay at zero moves: the
//! search rolls it over into the next turn before admission.  Fuel and
//! health are settled in the order given by [`TurnPolicy`]; each step sees a
//! probe reflecting the updates made by the steps before it.

use std::fmt;

use wf_core::{TurnPolicy, UnitState};
use wf_world::Rules;

use crate::Vertex;

/// Why a turn-boundary transition failed.  The candidate is pruned.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Death {
    /// Fuel ran out away from a refuel point.
    OutOfFuel,
    /// Hit points reached zero.
    NoHealth,
}

impl fmt::Display for Death {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Death::OutOfFuel => "out of fuel",
            Death::NoHealth  => "no health",
        })
    }
}

/// Advance `v` by one turn.
pub(crate) fn end_turn<W: Rules>(
    rules: &W,
    base: &UnitState,
    policy: TurnPolicy,
    mut v: Vertex,
) -> Result<Vertex, Death> {
    v.cost.turns += 1;
    v.cost.moves_left = rules.move_rate(&v.probe(base));

    match policy {
        TurnPolicy::FuelFirst => {
            settle_fuel(rules, base, &mut v)?;
            settle_health(rules, base, &mut v)?;
        }
        TurnPolicy::HealthFirst => {
            settle_health(rules, base, &mut v)?;
            settle_fuel(rules, base, &mut v)?;
        }
    }

    v.moved = false;
    Ok(v)
}

fn settle_fuel<W: Rules>(rules: &W, base: &UnitState, v: &mut Vertex) -> Result<(), Death> {
    let probe = v.probe(base);
    let capacity = rules.fuel_capacity(&probe);
    if capacity <= 0 {
        return Ok(());
    }
    if rules.is_refuel_point(&probe) {
        v.cost.fuel_left = capacity;
    } else if v.cost.fuel_left <= 1 {
        return Err(Death::OutOfFuel);
    } else {
        v.cost.fuel_left -= 1;
    }
    Ok(())
}

fn settle_health<W: Rules>(rules: &W, base: &UnitState, v: &mut Vertex) -> Result<(), Death> {
    let hp = rules.restore_health(&v.probe(base));
    if hp <= 0 {
        return Err(Death::NoHealth);
    }
    v.cost.health = hp;
    Ok(())
}
