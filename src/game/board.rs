use super::types::Mark;

pub const BOARD_CELLS: usize = 9;

/// Cell preference used everywhere moves are enumerated: center, corners, edges.
/// With the search's early exit on a forced win this only changes which of
/// several equally good moves is reported first.
pub const MOVE_ORDER: [usize; BOARD_CELLS] = [4, 0, 2, 6, 8, 1, 3, 5, 7];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Mark; BOARD_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; BOARD_CELLS],
        }
    }

    pub fn from_cells(cells: [Mark; BOARD_CELLS]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; BOARD_CELLS] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Mark {
        self.cells[index]
    }

    pub fn is_cell_empty(&self, index: usize) -> bool {
        self.cells[index] == Mark::Empty
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    pub(crate) fn clear(&mut self, index: usize) {
        self.cells[index] = Mark::Empty;
    }

    pub(crate) fn clear_all(&mut self) {
        self.cells = [Mark::Empty; BOARD_CELLS];
    }

    /// Empty cells in preferred order.
    pub fn available_moves(&self) -> Vec<usize> {
        MOVE_ORDER
            .into_iter()
            .filter(|&index| self.cells[index] == Mark::Empty)
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
