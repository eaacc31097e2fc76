//! Terrain types and their ASCII glyphs.

use wf_core::{MoveFrags, SINGLE_MOVE};

/// The terrain covering one tile.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    #[default]
    Plains,
    Hills,
    Forest,
    Mountains,
    Ocean,
}

impl Terrain {
    #[inline]
    pub fn is_land(self) -> bool {
        !matches!(self, Terrain::Ocean)
    }

    /// Movement fragments a land unit pays to enter this terrain.
    pub fn move_cost(self) -> MoveFrags {
        match self {
            Terrain::Plains | Terrain::Ocean => SINGLE_MOVE,
            Terrain::Hills | Terrain::Forest => 2 * SINGLE_MOVE,
            Terrain::Mountains               => 3 * SINGLE_MOVE,
        }
    }

    /// Map glyph used by [`GridMap::parse`](crate::GridMap::parse).
    pub fn glyph(self) -> char {
        match self {
            Terrain::Plains    => '.',
            Terrain::Hills     => 'h',
            Terrain::Forest    => 'f',
            Terrain::Mountains => '^',
            Terrain::Ocean     => '~',
        }
    }

    pub fn from_glyph(c: char) -> Option<Terrain> {
        match c {
            '.' => Some(Terrain::Plains),
            'h' => Some(Terrain::Hills),
            'f' => Some(Terrain::Forest),
            '^' => Some(Terrain::Mountains),
            '~' => Some(Terrain::Ocean),
            _ => None,
        }
    }
}
