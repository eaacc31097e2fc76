//! Unit tests for wf-core primitives.

#[cfg(test)]
mod ids {
    use crate::{TileId, UnitId, UnitKindId};

    #[test]
    fn index_matches_inner() {
        assert_eq!(TileId(42).index(), 42);
        assert_eq!(UnitKindId(u16::MAX).index(), 65_535);
    }

    #[test]
    fn display_uses_short_prefix() {
        assert_eq!(TileId(12).to_string(), "t12");
        assert_eq!(UnitId(7).to_string(), "u7");
        assert_eq!(UnitKindId(0).to_string(), "k0");
    }
}

#[cfg(test)]
mod direction {
    use crate::{CoreError, Direction};

    #[test]
    fn offsets_are_unit_steps_clockwise() {
        assert_eq!(Direction::ALL[0].offset(), (0, -1));
        for d in Direction::ALL {
            let (dx, dy) = d.offset();
            assert!(dx.abs() <= 1 && dy.abs() <= 1 && (dx, dy) != (0, 0), "{d}");
        }
        assert_eq!(Direction::ALL[2], Direction::East);
    }

    #[test]
    fn display_parse_roundtrip() {
        for d in Direction::ALL {
            assert_eq!(d.to_string().parse::<Direction>(), Ok(d));
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("NE".parse::<Direction>(), Ok(Direction::NorthEast));
        assert_eq!("w".parse::<Direction>(), Ok(Direction::West));
        assert_eq!(
            "up".parse::<Direction>(),
            Err(CoreError::UnknownDirection("up".into()))
        );
    }
}

#[cfg(test)]
mod order {
    use crate::{Action, Direction, DisembarkKind, Order, TileId};

    #[test]
    fn disembark_variants_have_distinct_labels() {
        assert_eq!(Action::Disembark(DisembarkKind::FromNative).to_string(), "disembark");
        assert_eq!(Action::Disembark(DisembarkKind::FromNonNative).to_string(), "disembark-2");
    }

    #[test]
    fn display() {
        assert_eq!(Order::Move(Direction::SouthWest).to_string(), "move sw");
        assert_eq!(Order::FullMoves.to_string(), "full-moves");
        let o = Order::Perform { action: Action::Embark, target: TileId(12) };
        assert_eq!(o.to_string(), "embark @12");
    }
}

#[cfg(test)]
mod config {
    use crate::{SearchConfig, TurnPolicy};

    #[test]
    fn default_is_fuel_first() {
        assert_eq!(SearchConfig::default().turn_policy, TurnPolicy::FuelFirst);
    }

    #[test]
    fn policy_parse_roundtrip() {
        for p in [TurnPolicy::FuelFirst, TurnPolicy::HealthFirst] {
            assert_eq!(p.as_str().parse::<TurnPolicy>(), Ok(p));
        }
        assert_eq!("Health".parse::<TurnPolicy>(), Ok(TurnPolicy::HealthFirst));
        assert!("random".parse::<TurnPolicy>().is_err());
    }

    #[test]
    fn builder_setter() {
        let c = SearchConfig::default().with_turn_policy(TurnPolicy::HealthFirst);
        assert_eq!(c.turn_policy, TurnPolicy::HealthFirst);
    }
}

#[cfg(test)]
mod unit {
    use crate::{SINGLE_MOVE, TileId, UnitId, UnitKindId, UnitState};

    #[test]
    fn new_unit_is_unloaded_and_fresh() {
        let u = UnitState::new(UnitId(0), UnitKindId(1), TileId(5), 3 * SINGLE_MOVE, 10, 0);
        assert!(!u.is_transported());
        assert!(!u.moved);
        assert!(!u.stay);
        let tired = u.with_moves(0);
        assert_eq!(tired.moves_left, 0);
        assert_eq!(tired.hp, 10);
    }
}
