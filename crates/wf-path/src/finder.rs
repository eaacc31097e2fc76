//! `PathFinder` — the Dijkstra-style search driver.
//!
//! # Algorithm
//!
//! Dijkstra over search vertices rather than tiles, ordered by the total
//! [`Cost`] order.  A tile keeps a *set* of non-dominated vertices (the
//! [`Frontier`]) instead of a single distance, because a path that arrives
//! later with more fuel may be the only one that goes on.
//!
//! Queue entries are `(cost, id)` pairs; an entry whose vertex was evicted
//! from its bucket after being queued is stale and skipped when popped.
//!
//! # Reuse
//!
//! Frontier and queue survive across [`find_path`](PathFinder::find_path)
//! calls for the same unit.  A query stops as soon as the destination is
//! settled and leaves that vertex *in* the queue, so a later query for a
//! farther tile resumes where the previous one stopped.  After the unit
//! changes, call [`unit_changed`](PathFinder::unit_changed) (or
//! [`invalidate`](PathFinder::invalidate) if the snapshot is still right
//! but the world changed).

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::{debug, error, trace};
use wf_core::{SearchConfig, TileId, UnitState};
use wf_world::Rules;

use crate::turn::end_turn;
use crate::{
    Admission, Cost, Frontier, NoopObserver, Path, Rule, SearchObserver, Step, Vertex, VertexId,
};

/// Multi-criteria path finder for one unit.
///
/// The world is not stored: every query takes the [`Rules`] to search
/// against, and the caller must pass an equivalent world each time (or
/// invalidate).
pub struct PathFinder {
    unit:     UnitState,
    config:   SearchConfig,
    frontier: Frontier,
    queue:    BinaryHeap<Reverse<(Cost, VertexId)>>,
    /// Candidate buffer reused by every expansion.
    scratch:  Vec<Vertex>,
}

impl PathFinder {
    /// A path finder for `unit` with the default configuration.  The search
    /// itself starts lazily on the first query.
    pub fn new(unit: UnitState) -> Self {
        Self::with_config(unit, SearchConfig::default())
    }

    pub fn with_config(unit: UnitState, config: SearchConfig) -> Self {
        let mut finder = Self {
            unit,
            config,
            frontier: Frontier::new(),
            queue: BinaryHeap::new(),
            scratch: Vec::new(),
        };
        finder.seed();
        finder
    }

    pub fn unit(&self) -> &UnitState {
        &self.unit
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Current search state, for inspection.
    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Queue entries, stale ones included.
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    // ── Reset ─────────────────────────────────────────────────────────────

    /// Discard all search state and restart from the captured unit.
    pub fn invalidate(&mut self) {
        debug!(
            unit = self.unit.id.0,
            vertices = self.frontier.vertex_count(),
            queued = self.queue.len(),
            "path search invalidated"
        );
        self.frontier.clear();
        self.queue.clear();
        self.seed();
    }

    /// Replace the unit snapshot and restart from it.
    pub fn unit_changed(&mut self, unit: UnitState) {
        self.unit = unit;
        self.invalidate();
    }

    fn seed(&mut self) {
        let root = Vertex::root(&self.unit);
        if let Admission::Admitted { id, .. } = self.frontier.admit(root) {
            self.queue.push(Reverse((root.cost, id)));
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Cheapest path to `destination`, or an empty path if there is none,
    /// the unit already stands there, or the unit cannot move at all.
    pub fn find_path<W: Rules>(&mut self, rules: &W, destination: TileId) -> Path {
        self.find_path_observed(rules, destination, &mut NoopObserver)
    }

    /// [`find_path`](Self::find_path) reporting search events to `observer`.
    pub fn find_path_observed<W: Rules, O: SearchObserver>(
        &mut self,
        rules: &W,
        destination: TileId,
        observer: &mut O,
    ) -> Path {
        debug_assert!(rules.contains(destination), "destination {destination} is not on the map");
        if !rules.contains(destination) {
            error!(unit = self.unit.id.0, tile = destination.0, "path requested to a tile off the map");
            return Path::empty();
        }

        if self.unit.stay || self.unit.tile == destination {
            return Path::empty();
        }

        let found = self.run_search(rules, destination, observer);
        observer.on_search_end(destination, found);
        debug!(
            unit = self.unit.id.0,
            tile = destination.0,
            found,
            vertices = self.frontier.vertex_count(),
            admitted = self.frontier.admitted_count(),
            queued = self.queue.len(),
            "path search finished"
        );

        if found { self.extract(destination) } else { Path::empty() }
    }

    // ── Search ────────────────────────────────────────────────────────────

    /// Run until `destination` is settled.  Returns `false` once the queue
    /// is exhausted.
    fn run_search<W: Rules, O: SearchObserver>(
        &mut self,
        rules: &W,
        destination: TileId,
        observer: &mut O,
    ) -> bool {
        // Reached by an earlier query, and nothing queued can still beat it.
        if let Some(best) = self.frontier.best_at(destination) {
            let best = self.frontier.vertex(best).cost;
            match self.queue.peek() {
                Some(Reverse((top, _))) if *top < best => {}
                _ => return true,
            }
        }

        let mut scratch = std::mem::take(&mut self.scratch);
        let mut found = false;

        while let Some(&Reverse((_, id))) = self.queue.peek() {
            let vertex = *self.frontier.vertex(id);
            if vertex.location == destination {
                found = true;
                break;
            }
            self.queue.pop();

            if !self.frontier.is_admitted(id) {
                observer.on_stale(&vertex);
                continue;
            }
            observer.on_expand(id, &vertex);

            for rule in Rule::ALL {
                rule.expand(rules, &self.unit, id, &vertex, &mut scratch);
            }
            for candidate in scratch.drain(..) {
                self.maybe_insert(rules, candidate, observer);
            }
        }

        self.scratch = scratch;
        found
    }

    /// Roll `candidate` over to the next turn if its moves are spent, then
    /// offer it to the frontier and queue it if admitted.
    fn maybe_insert<W: Rules, O: SearchObserver>(
        &mut self,
        rules: &W,
        candidate: Vertex,
        observer: &mut O,
    ) {
        let candidate = if candidate.cost.moves_left <= 0 {
            match end_turn(rules, &self.unit, self.config.turn_policy, candidate) {
                Ok(v) => v,
                Err(why) => {
                    trace!(tile = candidate.location.0, turns = candidate.cost.turns, %why, "dead end");
                    observer.on_dead_end(&candidate, why);
                    return;
                }
            }
        } else {
            candidate
        };

        match self.frontier.admit(candidate) {
            Admission::Admitted { id, evicted } => {
                observer.on_admit(id, &candidate, evicted);
                self.queue.push(Reverse((candidate.cost, id)));
            }
            Admission::Dominated => observer.on_reject(&candidate),
        }
    }

    /// Follow parent links back from the best vertex at `destination`.
    fn extract(&self, destination: TileId) -> Path {
        let Some(mut id) = self.frontier.best_at(destination) else {
            return Path::empty();
        };

        let mut steps = Vec::new();
        loop {
            let v = self.frontier.vertex(id);
            let Some(link) = v.link else { break };
            steps.push(Step { tile: v.location, loaded: v.loaded, order: link.order, cost: v.cost });
            id = link.parent;
        }
        steps.reverse();
        Path::new(steps)
    }
}
