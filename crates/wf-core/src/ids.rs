//! Identifiers for map tiles, units and unit kinds.
//!
//! Each id is a dense index into a `Vec` owned by the map or the world.
//! Absence is spelled `Option<Id>`; there is no sentinel value.

use std::fmt;

/// Declare an index newtype with a short display prefix (`t12`, `u3`, …).
macro_rules! index_id {
    ($(#[$attr:meta])* $name:ident($inner:ty), $prefix:literal) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name(pub $inner);

        impl $name {
            /// Position in the owning `Vec`.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{}"), self.0)
            }
        }
    };
}

index_id! {
    /// Tile of a rectangular map, numbered row-major (`y * width + x`).
    TileId(u32), "t"
}

index_id! {
    /// Unit in the world's unit list.  Transports are units too.
    UnitId(u32), "u"
}

index_id! {
    /// Unit type in the kind registry.  `u16` keeps unit snapshots small.
    UnitKindId(u16), "k"
}
