//! Frog movement, edge clamping and collision handling

use crate::config::{BOARD_HEIGHT, BOARD_WIDTH, KEY_DOWN, KEY_LEFT, KEY_RIGHT, KEY_UP};
use crate::game::board::{Cell, Position};
use crate::game::session::GameSession;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Direction bound to a keypad symbol; other keys are ignored
    pub fn from_key(key: u8) -> Option<Self> {
        match key {
            KEY_UP => Some(Direction::Up),
            KEY_DOWN => Some(Direction::Down),
            KEY_LEFT => Some(Direction::Left),
            KEY_RIGHT => Some(Direction::Right),
            _ => None,
        }
    }

    /// Neighbouring square, or `pos` itself when a wall is in the way
    fn step(self, pos: Position) -> Position {
        let Position { row, col } = pos;
        match self {
            Direction::Up => Position::new(row.saturating_sub(1), col),
            Direction::Down => Position::new((row + 1).min(BOARD_HEIGHT - 1), col),
            Direction::Left => Position::new(row, col.saturating_sub(1)),
            Direction::Right => Position::new(row, (col + 1).min(BOARD_WIDTH - 1)),
        }
    }
}

/// What a move (or an obstacle tick) did to the frog
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved(Position),
    /// Collided and respawned at the start square
    Hit { lives: u8 },
    /// Collided on the last life; the frog is gone
    Squashed,
}

impl GameSession {
    /// Move the frog one square. Walking into a wall leaves it in place,
    /// walking into an obstacle costs a life.
    pub fn move_frog(&mut self, direction: Direction) -> MoveOutcome {
        if self.lives == 0 {
            return MoveOutcome::Squashed;
        }

        self.board.set(self.frog, Cell::Empty);
        self.frog = direction.step(self.frog);

        if self.board.get(self.frog).is_obstacle() {
            return self.take_hit();
        }

        self.board.set(self.frog, Cell::Frog);
        MoveOutcome::Moved(self.frog)
    }
}
