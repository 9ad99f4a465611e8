use alloc::collections::VecDeque;

use crate::*;

/// Body of the snake, tail at the front and head at the back.
#[derive(Clone, Debug, PartialEq)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// Lays out `length` cells ending at `head`, trailing opposite to `direction`.
    ///
    /// Segments that would fall off the grid on the low side are skipped, so callers should size
    /// the grid for the initial length (see [`GameConfig::new`]).
    pub fn new(head: Cell, length: CellCount, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        let body = (0..length.max(1))
            .rev()
            .filter_map(|i| {
                let back = i16::try_from(i).ok()?;
                let x = i16::from(head.x) - i16::from(dx) * back;
                let y = i16::from(head.y) - i16::from(dy) * back;
                Some(Cell::new(x.try_into().ok()?, y.try_into().ok()?))
            })
            .collect();
        Self { body }
    }

    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Option<Self> {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        (!body.is_empty()).then_some(Self { body })
    }

    pub fn head(&self) -> Cell {
        *self.body.back().expect("snake body is never empty")
    }

    pub fn len(&self) -> CellCount {
        self.body.len().try_into().unwrap_or(CellCount::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Appends `new_head`, dropping the tail unless the snake grows.
    pub fn advance(&mut self, new_head: Cell, grow: bool) {
        self.body.push_back(new_head);
        if !grow {
            self.body.pop_front();
        }
    }

    /// Cells from tail to head.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }
}
