//! Grid topology and compass locations.
//!
//! A pictograph is drawn on one of two grids.  `Diamond` puts its hand
//! points on the cardinal directions; `Box` rotates the grid 45° so the hand
//! points sit on the diagonals.  The same eight compass names are used for
//! motion endpoints and for the anchor point an arrow is drawn at.

token_enum! {
    /// Which of the two grid layouts a pictograph uses.
    pub enum GridTopology ("grid topology") {
        Diamond => "diamond",
        Box     => "box",
    }
}

impl Default for GridTopology {
    fn default() -> Self {
        GridTopology::Diamond
    }
}

impl GridTopology {
    /// Parse a topology name, normalizing anything unrecognized to `Diamond`.
    ///
    /// Collaborators sometimes hand over an empty or mixed-case grid mode;
    /// placement never fails on it.
    pub fn parse_or_default(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "box" => GridTopology::Box,
            _     => GridTopology::Diamond,
        }
    }
}

token_enum! {
    /// One of the eight named points around the grid centre.
    pub enum CompassLocation ("compass location") {
        N  => "n",
        E  => "e",
        S  => "s",
        W  => "w",
        NE => "ne",
        SE => "se",
        SW => "sw",
        NW => "nw",
    }
}

impl CompassLocation {
    /// Dense index (`0..8`) for table lookups.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// `true` for N, E, S and W.
    #[inline]
    pub fn is_cardinal(self) -> bool {
        matches!(
            self,
            CompassLocation::N | CompassLocation::E | CompassLocation::S | CompassLocation::W
        )
    }

    /// `true` for NE, SE, SW and NW.
    #[inline]
    pub fn is_diagonal(self) -> bool {
        !self.is_cardinal()
    }
}
