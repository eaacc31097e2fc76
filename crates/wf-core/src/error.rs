//! Core error type.
//!
//! Sub-crates define their own error enums; `CoreError` only covers parsing
//! the small value types defined here.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("unknown direction {0:?} (expected n, ne, e, se, s, sw, w or nw)")]
    UnknownDirection(String),

    #[error("unknown turn policy {0:?} (expected fuel-first or health-first)")]
    UnknownTurnPolicy(String),
}
