//! Rectangular tile map and builder.
//!
//! # Data layout
//!
//! Tiles are stored row-major in flat `Vec`s indexed by `TileId`:
//!
//! ```text
//! tile = y * width + x
//! ```
//!
//! Per-tile properties (`terrain`, `known`, `base`) are parallel arrays so
//! neighbour scans in the search's inner loop touch contiguous memory.  The
//! map does not wrap at its edges.

use wf_core::{Direction, TileId};

use crate::{Terrain, WorldError, WorldResult};

// ── GridMap ───────────────────────────────────────────────────────────────────

/// An immutable `width × height` tile map.
///
/// Do not construct directly; use [`GridMapBuilder`] or [`GridMap::parse`].
#[derive(Clone, Debug)]
pub struct GridMap {
    width:  u32,
    height: u32,
    terrain: Vec<Terrain>,
    /// Whether the unit's owner has seen this tile.  Unknown tiles are never
    /// entered by a planned move.
    known: Vec<bool>,
    /// Cities and airbases: units there refuel and heal completely.
    base: Vec<bool>,
}

impl GridMap {
    /// Parse an ASCII map, one row per line.
    ///
    /// | Glyph | Tile                                  |
    /// |-------|---------------------------------------|
    /// | `.`   | plains                                |
    /// | `h`   | hills                                 |
    /// | `f`   | forest                                |
    /// | `^`   | mountains                             |
    /// | `~`   | ocean                                 |
    /// | `C`   | city (plains with a base)             |
    /// | `?`   | unexplored plains                     |
    ///
    /// Leading/trailing whitespace and blank lines are ignored.
    pub fn parse(text: &str) -> WorldResult<GridMap> {
        let rows: Vec<Vec<char>> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|l| l.chars().collect())
            .collect();
        let Some(first) = rows.first() else {
            return Err(WorldError::EmptyMap);
        };
        let width = first.len();
        if width == 0 {
            return Err(WorldError::EmptyMap);
        }

        let mut b = GridMapBuilder::new(width as u32, rows.len() as u32);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(WorldError::RaggedRow { row: y, expected: width, got: row.len() });
            }
            for (x, &glyph) in row.iter().enumerate() {
                let (x32, y32) = (x as u32, y as u32);
                match glyph {
                    'C' => {
                        b.set_base(x32, y32)?;
                    }
                    '?' => {
                        b.hide(x32, y32)?;
                    }
                    other => {
                        let terrain = Terrain::from_glyph(other)
                            .ok_or(WorldError::UnknownGlyph { glyph: other, row: y, col: x })?;
                        b.set_terrain(x32, y32, terrain)?;
                    }
                }
            }
        }
        Ok(b.build())
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn tile_count(&self) -> usize {
        self.terrain.len()
    }

    #[inline]
    pub fn contains(&self, tile: TileId) -> bool {
        tile.index() < self.terrain.len()
    }

    // ── Coordinates ───────────────────────────────────────────────────────

    /// Tile at `(x, y)`, or `None` outside the map.
    #[inline]
    pub fn tile_at(&self, x: i64, y: i64) -> Option<TileId> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(TileId((y as u32) * self.width + x as u32))
    }

    /// `(x, y)` of a tile.  The tile must belong to this map.
    #[inline]
    pub fn coords(&self, tile: TileId) -> (u32, u32) {
        (tile.0 % self.width, tile.0 / self.width)
    }

    /// The tile one step from `tile` in `dir`, if it is on the map.
    #[inline]
    pub fn step(&self, tile: TileId, dir: Direction) -> Option<TileId> {
        let (x, y) = self.coords(tile);
        let (dx, dy) = dir.offset();
        self.tile_at(x as i64 + dx as i64, y as i64 + dy as i64)
    }

    /// Iterator over the on-map neighbours of `tile` with the direction that
    /// reaches each, clockwise from north.  No heap allocation.
    #[inline]
    pub fn neighbors(&self, tile: TileId) -> impl Iterator<Item = (TileId, Direction)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |d| self.step(tile, d).map(|t| (t, d)))
    }

    /// `true` if `a` and `b` are distinct and touch (including diagonally).
    pub fn is_adjacent(&self, a: TileId, b: TileId) -> bool {
        a != b && self.distance(a, b) == 1
    }

    /// Chebyshev distance in tiles (the number of king moves).
    pub fn distance(&self, a: TileId, b: TileId) -> u32 {
        let (ax, ay) = self.coords(a);
        let (bx, by) = self.coords(b);
        ax.abs_diff(bx).max(ay.abs_diff(by))
    }

    // ── Tile properties ───────────────────────────────────────────────────

    #[inline]
    pub fn terrain(&self, tile: TileId) -> Terrain {
        self.terrain[tile.index()]
    }

    #[inline]
    pub fn is_known(&self, tile: TileId) -> bool {
        self.known[tile.index()]
    }

    #[inline]
    pub fn has_base(&self, tile: TileId) -> bool {
        self.base[tile.index()]
    }
}

// ── GridMapBuilder ────────────────────────────────────────────────────────────

/// Construct a [`GridMap`] tile by tile, then call [`build`](Self::build).
///
/// Every tile starts as known plains without a base.
///
/// # Example
///
/// ```
/// use wf_world::{GridMapBuilder, Terrain};
///
/// let mut b = GridMapBuilder::new(3, 2);
/// b.set_terrain(2, 0, Terrain::Ocean).unwrap();
/// b.set_base(0, 1).unwrap();
/// let map = b.build();
/// assert_eq!(map.tile_count(), 6);
/// ```
pub struct GridMapBuilder {
    width:   u32,
    height:  u32,
    terrain: Vec<Terrain>,
    known:   Vec<bool>,
    base:    Vec<bool>,
}

impl GridMapBuilder {
    pub fn new(width: u32, height: u32) -> Self {
        let n = (width as usize) * (height as usize);
        Self {
            width,
            height,
            terrain: vec![Terrain::Plains; n],
            known:   vec![true; n],
            base:    vec![false; n],
        }
    }

    fn index(&self, x: u32, y: u32) -> WorldResult<usize> {
        if x >= self.width || y >= self.height {
            return Err(WorldError::OutOfBounds { x, y, width: self.width, height: self.height });
        }
        Ok((y * self.width + x) as usize)
    }

    pub fn set_terrain(&mut self, x: u32, y: u32, terrain: Terrain) -> WorldResult<&mut Self> {
        let i = self.index(x, y)?;
        self.terrain[i] = terrain;
        Ok(self)
    }

    /// Put a city/airbase on the tile.
    pub fn set_base(&mut self, x: u32, y: u32) -> WorldResult<&mut Self> {
        let i = self.index(x, y)?;
        self.base[i] = true;
        Ok(self)
    }

    /// Mark the tile as unexplored.
    pub fn hide(&mut self, x: u32, y: u32) -> WorldResult<&mut Self> {
        let i = self.index(x, y)?;
        self.known[i] = false;
        Ok(self)
    }

    /// Consume the builder and produce a [`GridMap`].
    pub fn build(self) -> GridMap {
        GridMap {
            width:   self.width,
            height:  self.height,
            terrain: self.terrain,
            known:   self.known,
            base:    self.base,
        }
    }
}
