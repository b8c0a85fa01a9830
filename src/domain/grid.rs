use super::Cell;

/// Grid holds the fixed-size board of cells, indexed by (row, col).
/// Evolution is functional: `step` builds the next generation from the
/// current one and never mutates in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        }
    }

    /// Build a grid with the given (row, col) positions alive.
    /// Positions outside the grid are skipped.
    pub fn with_alive(rows: usize, cols: usize, alive: &[(usize, usize)]) -> Self {
        let mut grid = Self::new(rows, cols);
        for &(row, col) in alive {
            grid.set(row, col, Cell::Alive);
        }
        grid
    }

    /// Grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.contains(row, col).then(|| self.cells[self.index(row, col)])
    }

    /// True if the position is inside the grid and alive
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(Cell::is_alive)
    }

    /// Set cell at position. Out-of-range writes are ignored.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if self.contains(row, col) {
            let idx = self.index(row, col);
            self.cells[idx] = cell;
        }
    }

    /// Flip one cell in place, returning its new state
    pub fn toggle(&mut self, row: usize, col: usize) -> Option<Cell> {
        if !self.contains(row, col) {
            return None;
        }
        let idx = self.index(row, col);
        let next = self.cells[idx].toggle();
        self.cells[idx] = next;
        Some(next)
    }

    /// Count live cells among the 8 neighbors. Edges are hard boundaries:
    /// positions outside the grid contribute nothing.
    pub fn live_neighbor_count(&self, row: usize, col: usize) -> u8 {
        (-1isize..=1)
            .flat_map(|dr| (-1isize..=1).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .filter_map(|(dr, dc)| {
                let r = row.checked_add_signed(dr)?;
                let c = col.checked_add_signed(dc)?;
                self.get(r, c)
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Compute the next generation against the current grid
    pub fn step(&self) -> Self {
        let cells = self
            .iter_cells()
            .map(|(row, col, cell)| cell.evolve(self.live_neighbor_count(row, col)))
            .collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Reset all cells to dead
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Number of live cells
    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.count_alive() == 0
    }

    /// Iterate over all cells in row-major order with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.cols, idx % self.cols, cell))
    }
}
