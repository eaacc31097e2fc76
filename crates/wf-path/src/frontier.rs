//! The Pareto frontier: per-tile sets of non-dominated vertices.
//!
//! # Storage
//!
//! Every vertex ever admitted lives in `arena` for the lifetime of the
//! search, indexed by [`VertexId`].  `buckets` maps a tile to the ids of the
//! vertices currently admitted there.  Eviction only removes an id from its
//! bucket; the arena entry stays so child links keep resolving.
//!
//! Evicted entries are never reclaimed.  The arena only shrinks on
//! [`clear`](Frontier::clear), so a path finder reused across many queries
//! keeps every vertex it ever admitted until it is invalidated.  Ids are
//! `u32`, which bounds a single search at `u32::MAX` vertices.
//!
//! # Invariant
//!
//! No two vertices in a bucket are comparable: whenever one is at least as
//! good as another in every criterion (same transport and moved flag), the
//! worse one is either rejected on arrival or evicted.

use rustc_hash::FxHashMap;
use wf_core::TileId;

use crate::{Vertex, VertexId};

/// Result of offering a candidate to the frontier.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Admission {
    /// The candidate was stored; `evicted` vertices it dominates were
    /// removed from the bucket.
    Admitted { id: VertexId, evicted: usize },
    /// An admitted vertex is at least as good; the candidate was dropped.
    Dominated,
}

/// Vertex arena plus per-tile buckets of currently-best vertices.
#[derive(Default)]
pub struct Frontier {
    arena:   Vec<Vertex>,
    buckets: FxHashMap<TileId, Vec<VertexId>>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every vertex.  Ids handed out earlier become meaningless.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.buckets.clear();
    }

    /// Offer `candidate`, evicting the admitted vertices it dominates.
    pub fn admit(&mut self, candidate: Vertex) -> Admission {
        let arena = &self.arena;
        let bucket = self.buckets.entry(candidate.location).or_default();

        // Any comparable entry that the candidate does not strictly improve
        // on is at least as good as the candidate.
        if bucket.iter().any(|&id| {
            let e = &arena[id.index()];
            e.comparable(&candidate) && candidate.cost >= e.cost
        }) {
            return Admission::Dominated;
        }

        // Whatever is still comparable is strictly worse.
        let before = bucket.len();
        bucket.retain(|&id| !arena[id.index()].comparable(&candidate));
        let evicted = before - bucket.len();

        debug_assert!(self.arena.len() < u32::MAX as usize, "vertex arena exhausted the id space");
        let id = VertexId(self.arena.len() as u32);
        bucket.push(id);
        self.arena.push(candidate);
        Admission::Admitted { id, evicted }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// The vertex with this id, admitted or not.
    ///
    /// # Panics
    /// Panics if `id` was not handed out since the last [`clear`](Self::clear).
    #[inline]
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.arena[id.index()]
    }

    /// `true` if the vertex is still in its bucket (not evicted).
    pub fn is_admitted(&self, id: VertexId) -> bool {
        self.buckets
            .get(&self.vertex(id).location)
            .is_some_and(|b| b.contains(&id))
    }

    /// Admitted vertices at `tile`, in admission order.
    pub fn bucket(&self, tile: TileId) -> impl Iterator<Item = (VertexId, &Vertex)> + '_ {
        self.buckets
            .get(&tile)
            .into_iter()
            .flatten()
            .map(|&id| (id, self.vertex(id)))
    }

    /// The best admitted vertex at `tile` by the total cost order; ties go
    /// to the vertex admitted first.
    pub fn best_at(&self, tile: TileId) -> Option<VertexId> {
        self.bucket(tile)
            .min_by_key(|&(id, v)| (v.cost, id))
            .map(|(id, _)| id)
    }

    /// Every admitted vertex, grouped by tile in no particular tile order.
    pub fn iter_admitted(&self) -> impl Iterator<Item = (VertexId, &Vertex)> + '_ {
        self.buckets
            .values()
            .flatten()
            .map(|&id| (id, self.vertex(id)))
    }

    /// Number of vertices created since the last clear (admitted or evicted).
    pub fn vertex_count(&self) -> usize {
        self.arena.len()
    }

    /// Number of currently admitted vertices.
    pub fn admitted_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }
}
