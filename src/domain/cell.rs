/// Cell identifies one coordinate on the unbounded simulation grid.
/// A cell is live when its coordinate is present in the current
/// `Generation` and dead otherwise; there is no state beyond presence.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
}

impl Cell {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// The 8 horizontally, vertically and diagonally adjacent coordinates.
    /// A cell is not part of its own neighborhood.
    pub const fn neighbors(self) -> [Cell; 8] {
        let Cell { x, y } = self;
        [
            Cell::new(x - 1, y - 1),
            Cell::new(x, y - 1),
            Cell::new(x + 1, y - 1),
            Cell::new(x - 1, y),
            Cell::new(x + 1, y),
            Cell::new(x - 1, y + 1),
            Cell::new(x, y + 1),
            Cell::new(x + 1, y + 1),
        ]
    }
}
