//! `wf-path` — multi-criteria path finding for a single unit.
//!
//! A path is judged on four criteria at once: turns elapsed, moves left,
//! health and fuel.  None can be traded for another, so instead of one best
//! distance per tile the search keeps every non-dominated way of standing
//! on it, and only picks a winner when a path is extracted.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`cost`]     | `Cost` — dominance test and total queue order               |
//! | [`vertex`]   | `Vertex`, `VertexId`, `Link`                                |
//! | [`frontier`] | `Frontier` — vertex arena + per-tile non-dominated buckets  |
//! | [`turn`]     | Turn-boundary transition, `Death`                           |
//! | [`expand`]   | `Rule` — move, full moves, load, unload                     |
//! | [`finder`]   | `PathFinder` — search driver and path extraction            |
//! | [`path`]     | `Path`, `Step`                                              |
//! | [`observer`] | `SearchObserver`, `NoopObserver`, `SearchStats`             |
//!
//! # Example
//!
//! ```
//! use wf_path::PathFinder;
//! use wf_world::{GridMap, GridWorld, UnitKind};
//!
//! let mut world = GridWorld::new(GridMap::parse("...\n...").unwrap());
//! let kind = world.add_kind(UnitKind::warriors());
//! let id = world.add_unit(kind, 0, 0).unwrap();
//!
//! let mut finder = PathFinder::new(*world.unit(id).unwrap());
//! let dest = world.map().tile_at(2, 1).unwrap();
//! let path = finder.find_path(&world, dest);
//! assert_eq!(path.len(), 2);
//! assert_eq!(path.destination(), Some(dest));
//! ```

pub mod cost;
pub mod expand;
pub mod finder;
pub mod frontier;
pub mod observer;
pub mod path;
pub mod turn;
pub mod vertex;


pub use cost::Cost;
pub use expand::Rule;
pub use finder::PathFinder;
pub use frontier::{Admission, Frontier};
pub use observer::{NoopObserver, SearchObserver, SearchStats};
pub use path::{Path, Step};
pub use turn::Death;
pub use vertex::{Link, Vertex, VertexId};
