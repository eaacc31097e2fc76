//! Expansion rules — the successors a settled vertex opens.
//!
//! Every rule reads the source vertex through a probe and emits raw
//! candidates into a caller-owned buffer.  Candidates are *not* yet rolled
//! over to the next turn or checked against the frontier; the driver does
//! both for every candidate it drains from the buffer.
//!
//! | Rule        | Orders produced                         | Requires           |
//! |-------------|-----------------------------------------|--------------------|
//! | `Move`      | `Move(dir)` to each known, legal neighbour | not loaded      |
//! | `FullMoves` | `FullMoves` in place                    | —                  |
//! | `Load`      | `Board` in place, `Embark` onto a neighbour | a transport    |
//! | `Unload`    | `Alight` in place, both `Disembark`s onto a neighbour | loaded |

use wf_core::{Action, DisembarkKind, Order, TileId, UnitState};
use wf_world::Rules;

use crate::{Vertex, VertexId};

/// The closed set of expansion rules.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Rule {
    Move,
    FullMoves,
    Load,
    Unload,
}

impl Rule {
    /// All rules, in the order the driver applies them.
    pub const ALL: [Rule; 4] = [Rule::Move, Rule::FullMoves, Rule::Load, Rule::Unload];

    /// Push this rule's candidate successors of `source` (stored as
    /// `source_id`) onto `out`.
    pub fn expand<W: Rules>(
        self,
        rules: &W,
        base: &UnitState,
        source_id: VertexId,
        source: &Vertex,
        out: &mut Vec<Vertex>,
    ) {
        match self {
            Rule::Move      => expand_move(rules, base, source_id, source, out),
            Rule::FullMoves => expand_full_moves(source_id, source, out),
            Rule::Load      => expand_load(rules, base, source_id, source, out),
            Rule::Unload    => expand_unload(rules, base, source_id, source, out),
        }
    }
}

// ── Rules ─────────────────────────────────────────────────────────────────────

fn expand_move<W: Rules>(
    rules: &W,
    base: &UnitState,
    source_id: VertexId,
    source: &Vertex,
    out: &mut Vec<Vertex>,
) {
    if source.loaded.is_some() {
        return;
    }
    let probe = source.probe(base);

    for (target, dir) in rules.neighbors(source.location) {
        if !rules.is_known(target) || !rules.can_move_to(&probe, target) {
            continue;
        }
        let cost = rules.move_cost(&probe, target).min(probe.moves_left);

        let mut next = source.child(source_id, Order::Move(dir));
        next.location = target;
        next.moved = true;
        next.cost.moves_left -= cost;
        out.push(next);
    }
}

/// Waiting for full movement zeroes the moves so the driver ends the turn.
fn expand_full_moves(source_id: VertexId, source: &Vertex, out: &mut Vec<Vertex>) {
    let mut next = source.child(source_id, Order::FullMoves);
    next.cost.moves_left = 0;
    out.push(next);
}

fn expand_load<W: Rules>(
    rules: &W,
    base: &UnitState,
    source_id: VertexId,
    source: &Vertex,
    out: &mut Vec<Vertex>,
) {
    // Also tried when already loaded, to switch transports.
    let probe = source.probe(base);

    if let Some(transport) = rules.transport_at(&probe, source.location) {
        if rules.can_board(&probe, transport) {
            let mut next = act(rules, &probe, source_id, source, Action::Board, source.location);
            next.loaded = Some(transport);
            out.push(next);
        }
    }

    for (target, _) in rules.neighbors(source.location) {
        let Some(transport) = rules.transport_at(&probe, target) else {
            continue;
        };
        if !rules.can_embark(&probe, transport, target) {
            continue;
        }
        let mut next = act(rules, &probe, source_id, source, Action::Embark, target);
        next.location = target;
        next.cost.moves_left -= rules.move_cost(&probe, target);
        next.moved = true;
        next.loaded = Some(transport);
        out.push(next);
    }
}

fn expand_unload<W: Rules>(
    rules: &W,
    base: &UnitState,
    source_id: VertexId,
    source: &Vertex,
    out: &mut Vec<Vertex>,
) {
    if source.loaded.is_none() {
        return;
    }
    let probe = source.probe(base);

    if rules.can_alight(&probe) {
        let mut next = act(rules, &probe, source_id, source, Action::Alight, source.location);
        next.loaded = None;
        out.push(next);
    }

    for (target, _) in rules.neighbors(source.location) {
        for kind in [DisembarkKind::FromNative, DisembarkKind::FromNonNative] {
            if !rules.can_disembark(&probe, target, kind) {
                continue;
            }
            let mut next = act(rules, &probe, source_id, source, Action::Disembark(kind), target);
            next.location = target;
            next.cost.moves_left -= rules.move_cost(&probe, target);
            next.moved = true;
            next.loaded = None;
            out.push(next);
        }
    }
}

/// Child of `source` performing `action` on `target`, with the action's own
/// move cost already paid.
fn act<W: Rules>(
    rules: &W,
    probe: &UnitState,
    source_id: VertexId,
    source: &Vertex,
    action: Action,
    target: TileId,
) -> Vertex {
    let mut next = source.child(source_id, Order::Perform { action, target });
    next.cost.moves_left -= rules.action_move_cost(probe, action);
    next
}
