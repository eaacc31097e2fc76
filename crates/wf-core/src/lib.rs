//! `wf-core` — foundational types for the `wayfinder` unit path finder.
//!
//! This crate is a dependency of every other `wf-*` crate.  It has no `wf-*`
//! dependencies and a single external one (`thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `TileId`, `UnitId`, `UnitKindId`                      |
//! | [`direction`]   | `Direction` (eight compass steps)                     |
//! | [`unit`]        | `UnitState` snapshot / probe, `MoveFrags`             |
//! | [`order`]       | `Order`, `Action`, `DisembarkKind`                    |
//! | [`config`]      | `SearchConfig`, `TurnPolicy`                          |
//! | [`error`]       | `CoreError`                                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod direction;
pub mod error;
pub mod ids;
pub mod order;
pub mod unit;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{SearchConfig, TurnPolicy};
pub use direction::Direction;
pub use error::CoreError;
pub use ids::{TileId, UnitId, UnitKindId};
pub use order::{Action, DisembarkKind, Order};
pub use unit::{MoveFrags, SINGLE_MOVE, UnitState};
