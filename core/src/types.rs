use serde::{Deserialize, Serialize};

/// Single coordinate axis used for grid width, height, and positions.
pub type Coord = u8;

/// Count type used for snake lengths and total-cell counts.
pub type CellCount = u16;

/// Points earned in a session.
pub type Score = u32;

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// A position on the grid, `x` grows to the right and `y` grows downwards.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: Coord,
    pub y: Coord,
}

impl Cell {
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }
}

impl From<(Coord, Coord)> for Cell {
    fn from((x, y): (Coord, Coord)) -> Self {
        Self { x, y }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Unit vector `(dx, dy)`.
    pub const fn delta(self) -> (i8, i8) {
        use Direction::*;
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub const fn opposite(self) -> Self {
        use Direction::*;
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    pub const fn is_opposite(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::Up, Self::Down)
                | (Self::Down, Self::Up)
                | (Self::Left, Self::Right)
                | (Self::Right, Self::Left)
        )
    }

    /// Picks the axis with the larger displacement, vertical on ties.
    pub fn toward(dx: f64, dy: f64) -> Self {
        if dx.abs() > dy.abs() {
            if dx > 0.0 { Self::Right } else { Self::Left }
        } else if dy > 0.0 {
            Self::Down
        } else {
            Self::Up
        }
    }
}

/// Fixed `cols × rows` playing field.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub cols: Coord,
    pub rows: Coord,
}

impl Grid {
    pub const fn new(cols: Coord, rows: Coord) -> Self {
        Self { cols, rows }
    }

    pub const fn in_bounds(&self, cell: Cell) -> bool {
        cell.x < self.cols && cell.y < self.rows
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.cols, self.rows)
    }

    pub const fn center(&self) -> Cell {
        Cell::new(self.cols / 2, self.rows / 2)
    }

    /// Neighbour of `cell` in `direction`, returning a value only when it remains in bounds.
    pub fn step(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        let (dx, dy) = direction.delta();

        let next_x = cell.x.checked_add_signed(dx)?;
        let next_y = cell.y.checked_add_signed(dy)?;
        let next = Cell::new(next_x, next_y);

        self.in_bounds(next).then_some(next)
    }

    /// Row-major iteration over every cell.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        let Self { cols, rows } = *self;
        (0..rows).flat_map(move |y| (0..cols).map(move |x| Cell::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_bounds_is_exclusive_on_the_far_edges() {
        let grid = Grid::new(30, 20);

        assert!(grid.in_bounds(Cell::new(0, 0)));
        assert!(grid.in_bounds(Cell::new(29, 19)));
        assert!(!grid.in_bounds(Cell::new(30, 0)));
        assert!(!grid.in_bounds(Cell::new(0, 20)));
    }

    #[test]
    fn step_stops_at_every_wall() {
        let grid = Grid::new(3, 2);

        assert_eq!(grid.step(Cell::new(0, 0), Direction::Left), None);
        assert_eq!(grid.step(Cell::new(0, 0), Direction::Up), None);
        assert_eq!(grid.step(Cell::new(2, 1), Direction::Right), None);
        assert_eq!(grid.step(Cell::new(2, 1), Direction::Down), None);
        assert_eq!(grid.step(Cell::new(1, 0), Direction::Down), Some(Cell::new(1, 1)));
    }

    #[test]
    fn opposite_directions_pair_up() {
        for direction in Direction::ALL {
            assert!(direction.is_opposite(direction.opposite()));
            assert!(!direction.is_opposite(direction));
        }
    }

    #[test]
    fn toward_prefers_the_dominant_axis() {
        assert_eq!(Direction::toward(10.0, 3.0), Direction::Right);
        assert_eq!(Direction::toward(-10.0, 3.0), Direction::Left);
        assert_eq!(Direction::toward(2.0, -7.0), Direction::Up);
        assert_eq!(Direction::toward(5.0, 5.0), Direction::Down);
    }

    #[test]
    fn cells_walks_the_whole_grid_row_by_row() {
        let grid = Grid::new(3, 2);
        let mut cells = grid.cells();

        assert_eq!(cells.next(), Some(Cell::new(0, 0)));
        assert_eq!(cells.next(), Some(Cell::new(1, 0)));
        assert_eq!(grid.cells().count(), usize::from(grid.total_cells()));
    }
}
