//! Cell coordinates and the finite grid they are clipped to.

/// A (column, row) position. Unbounded in principle; [`GridBounds`] decides
/// which positions take part in neighbor counting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub col: i32,
    pub row: i32,
}

impl Coord {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Shift by a relative offset, saturating at the `i32` limits
    pub const fn offset(self, dcol: i32, drow: i32) -> Self {
        Self::new(self.col.saturating_add(dcol), self.row.saturating_add(drow))
    }

    /// Shift by a relative offset, or `None` if either axis would overflow
    pub fn checked_offset(self, dcol: i32, drow: i32) -> Option<Self> {
        Some(Self::new(self.col.checked_add(dcol)?, self.row.checked_add(drow)?))
    }
}

impl From<(i32, i32)> for Coord {
    fn from((col, row): (i32, i32)) -> Self {
        Self::new(col, row)
    }
}

/// Grid size in tiles, derived from the window size and tile size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridBounds {
    width: i32,
    height: i32,
}

impl GridBounds {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Number of whole tiles that fit on a screen of the given pixel size
    pub const fn from_screen(screen_width: u32, screen_height: u32, tile_size: u32) -> Self {
        Self::new(
            (screen_width / tile_size) as i32,
            (screen_height / tile_size) as i32,
        )
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// True for positions inside the visible `[0, width) x [0, height)` area
    pub const fn contains(&self, coord: Coord) -> bool {
        coord.col >= 0 && coord.col < self.width && coord.row >= 0 && coord.row < self.height
    }

    /// Positions at Chebyshev distance 1 from `coord`.
    ///
    /// Offsets landing below 0 or above the width/height are dropped, so edge
    /// cells have fewer neighbors. There is no wraparound. The upper limit is
    /// inclusive: column `width` and row `height` form a one-tile gutter just
    /// past the drawn area.
    pub fn neighbors(&self, coord: Coord) -> Vec<Coord> {
        let (w, h) = (self.width, self.height);

        (-1..=1)
            .flat_map(|dcol| (-1..=1).map(move |drow| (dcol, drow)))
            .filter(|&(dcol, drow)| dcol != 0 || drow != 0)
            .filter_map(|(dcol, drow)| coord.checked_offset(dcol, drow))
            .filter(|n| (0..=w).contains(&n.col) && (0..=h).contains(&n.row))
            .collect()
    }
}
