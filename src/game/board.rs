//! Lane board: a fixed grid of cells holding the frog and the obstacles

use crate::config::{BOARD_HEIGHT, BOARD_WIDTH, START_COL, START_ROW};
use crate::game::rng::Rng;

/// Contents of one board cell
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    ObstacleUp,
    ObstacleDown,
    Frog,
}

impl Cell {
    /// Character drawn on the LCD for this cell
    pub const fn glyph(self) -> u8 {
        match self {
            Cell::Empty => b' ',
            Cell::ObstacleUp => b'^',
            Cell::ObstacleDown => b'V',
            Cell::Frog => b'*',
        }
    }

    #[inline]
    pub const fn is_obstacle(self) -> bool {
        matches!(self, Cell::ObstacleUp | Cell::ObstacleDown)
    }

    /// Row an obstacle in `row` moves to on the next tick
    fn next_row(self, row: usize) -> usize {
        match self {
            Cell::ObstacleUp => (row + BOARD_HEIGHT - 1) % BOARD_HEIGHT,
            Cell::ObstacleDown => (row + 1) % BOARD_HEIGHT,
            _ => row,
        }
    }
}

/// Row/column coordinate on the board
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const START: Position = Position {
        row: START_ROW,
        col: START_COL,
    };

    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Fixed 4x20 grid. Obstacles only ever occupy the interior columns and
/// each interior column holds at most one obstacle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_WIDTH]; BOARD_HEIGHT],
}

impl Board {
    pub const fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_WIDTH]; BOARD_HEIGHT],
        }
    }

    /// Clear every cell and put the frog on its start square
    pub fn reset(&mut self) {
        for row in self.cells.iter_mut() {
            row.fill(Cell::Empty);
        }
        self.set(Position::START, Cell::Frog);
    }

    #[inline]
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row][pos.col]
    }

    #[inline]
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row][pos.col] = cell;
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell; BOARD_WIDTH]> {
        self.cells.iter()
    }

    pub fn is_interior(col: usize) -> bool {
        col > 0 && col < BOARD_WIDTH - 1
    }

    /// Row and tag of the obstacle in `col`, if any
    pub fn obstacle_in(&self, col: usize) -> Option<(usize, Cell)> {
        (0..BOARD_HEIGHT)
            .map(|row| (row, self.cells[row][col]))
            .find(|(_, cell)| cell.is_obstacle())
    }

    /// Put a single obstacle on the board.
    ///
    /// Refused (returns `false`) outside the interior columns, when the
    /// column already carries an obstacle, or when the cell holds the frog.
    pub fn place_obstacle(&mut self, pos: Position, obstacle: Cell) -> bool {
        if !obstacle.is_obstacle()
            || pos.row >= BOARD_HEIGHT
            || !Self::is_interior(pos.col)
            || self.obstacle_in(pos.col).is_some()
            || self.get(pos) == Cell::Frog
        {
            return false;
        }
        self.set(pos, obstacle);
        true
    }

    /// Greedy left-to-right fill: every interior column takes an up obstacle
    /// while that quota lasts, then a down obstacle, then nothing. Quotas
    /// larger than the column count simply under-fill.
    pub fn place_obstacles(&mut self, rng: &mut Rng, up_count: usize, down_count: usize) {
        let mut up_left = up_count;
        let mut down_left = down_count;

        for col in 1..BOARD_WIDTH - 1 {
            let obstacle = if up_left > 0 {
                up_left -= 1;
                Cell::ObstacleUp
            } else if down_left > 0 {
                down_left -= 1;
                Cell::ObstacleDown
            } else {
                continue;
            };

            let row = rng.below(BOARD_HEIGHT as u32) as usize;
            self.place_obstacle(Position::new(row, col), obstacle);
        }
    }

    /// Move every obstacle one row along its lane, wrapping around.
    ///
    /// Returns `true` when an obstacle landed on the frog; the obstacle
    /// takes the cell and the caller resolves the hit.
    pub fn advance(&mut self) -> bool {
        let mut frog_struck = false;

        for col in 1..BOARD_WIDTH - 1 {
            let Some((row, obstacle)) = self.obstacle_in(col) else {
                continue;
            };
            let target = Position::new(obstacle.next_row(row), col);

            self.set(Position::new(row, col), Cell::Empty);
            if self.get(target) == Cell::Frog {
                frog_struck = true;
            }
            self.set(target, obstacle);
        }

        frog_struck
    }

    /// Number of cells holding `cell`
    pub fn count(&self, cell: Cell) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|c| **c == cell)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
