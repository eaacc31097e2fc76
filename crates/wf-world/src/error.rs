//! World-construction error type.

use thiserror::Error;

use wf_core::{TileId, UnitId, UnitKindId};

/// Errors produced by `wf-world` while building maps and placing units.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorldError {
    #[error("map has no tiles")]
    EmptyMap,

    #[error("row {row} has {got} tiles, expected {expected}")]
    RaggedRow { row: usize, expected: usize, got: usize },

    #[error("unknown map glyph {glyph:?} at row {row}, column {col}")]
    UnknownGlyph { glyph: char, row: usize, col: usize },

    #[error("coordinates ({x}, {y}) are outside the {width}x{height} map")]
    OutOfBounds { x: u32, y: u32, width: u32, height: u32 },

    #[error("unit kind {0} not registered")]
    KindNotFound(UnitKindId),

    #[error("unit {0} not found")]
    UnitNotFound(UnitId),

    #[error("unit kind {kind} cannot stand on tile {tile}")]
    NotNative { kind: UnitKindId, tile: TileId },

    #[error("unit {transport} cannot carry unit {cargo}")]
    CannotLoad { cargo: UnitId, transport: UnitId },
}

pub type WorldResult<T> = Result<T, WorldError>;
