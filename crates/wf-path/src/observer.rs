//! `SearchObserver` trait — hooks into the search loop.
//!
//! All methods have default no-op implementations, so implementors only
//! override what they need.  The observer is passed by `&mut` reference to
//! [`PathFinder::find_path_observed`](crate::PathFinder::find_path_observed)
//! and is never stored.

use wf_core::TileId;

use crate::{Death, Vertex, VertexId};

/// Callbacks invoked by the path finder while it searches.
pub trait SearchObserver {
    /// Called when a vertex is popped and about to be expanded.
    fn on_expand(&mut self, _id: VertexId, _vertex: &Vertex) {}

    /// Called after a candidate entered the frontier, with the number of
    /// vertices it evicted.
    fn on_admit(&mut self, _id: VertexId, _vertex: &Vertex, _evicted: usize) {}

    /// Called when a candidate was dominated by an admitted vertex.
    fn on_reject(&mut self, _vertex: &Vertex) {}

    /// Called when a candidate could not survive a turn boundary.
    fn on_dead_end(&mut self, _vertex: &Vertex, _why: Death) {}

    /// Called when a popped queue entry was evicted after it was queued.
    fn on_stale(&mut self, _vertex: &Vertex) {}

    /// Called once per destination query, after the search loop stopped.
    fn on_search_end(&mut self, _destination: TileId, _found: bool) {}
}

/// A zero-sized observer that does nothing.  Use when no observation is
/// needed.
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// Counting observer.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub expanded:    usize,
    pub admitted:    usize,
    pub evicted:     usize,
    pub rejected:    usize,
    pub out_of_fuel: usize,
    pub no_health:   usize,
    pub stale:       usize,
    pub searches:    usize,
    pub found:       usize,
}

impl SearchStats {
    /// Candidates pruned at a turn boundary, for any reason.
    pub fn dead_ends(&self) -> usize {
        self.out_of_fuel + self.no_health
    }
}

impl SearchObserver for SearchStats {
    fn on_expand(&mut self, _id: VertexId, _vertex: &Vertex) {
        self.expanded += 1;
    }

    fn on_admit(&mut self, _id: VertexId, _vertex: &Vertex, evicted: usize) {
        self.admitted += 1;
        self.evicted += evicted;
    }

    fn on_reject(&mut self, _vertex: &Vertex) {
        self.rejected += 1;
    }

    fn on_dead_end(&mut self, _vertex: &Vertex, why: Death) {
        match why {
            Death::OutOfFuel => self.out_of_fuel += 1,
            Death::NoHealth  => self.no_health += 1,
        }
    }

    fn on_stale(&mut self, _vertex: &Vertex) {
        self.stale += 1;
    }

    fn on_search_end(&mut self, _destination: TileId, found: bool) {
        self.searches += 1;
        if found {
            self.found += 1;
        }
    }
}
