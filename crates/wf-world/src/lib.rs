//! `wf-world` — map topology, unit kinds and legality oracles.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`rules`]   | `Rules` trait — everything the path finder asks the game    |
//! | [`grid`]    | `GridMap` (row-major tiles), `GridMapBuilder`, ASCII parser |
//! | [`terrain`] | `Terrain` and its move costs                                |
//! | [`kind`]    | `UnitKind`, `Domain`, preset kinds                          |
//! | [`world`]   | `GridWorld` — reference `Rules` implementation              |
//! | [`error`]   | `WorldError`, `WorldResult<T>`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod grid;
pub mod kind;
pub mod rules;
pub mod terrain;
pub mod world;


pub use error::{WorldError, WorldResult};
pub use grid::{GridMap, GridMapBuilder};
pub use kind::{Domain, UnitKind};
pub use rules::Rules;
pub use terrain::Terrain;
pub use world::GridWorld;
