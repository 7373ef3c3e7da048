//! One play-through: the board, the frog and the remaining lives

use crate::config::{DOWN_OBSTACLES, GOAL_COLUMN, STARTING_LIVES, UP_OBSTACLES};
use crate::game::board::{Board, Cell, Position};
use crate::game::movement::MoveOutcome;
use crate::game::rng::Rng;

/// Result of a session, derived from lives and frog position
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

/// Session aggregate handed to every engine operation
#[derive(Clone, Debug)]
pub struct GameSession {
    pub(crate) board: Board,
    pub(crate) frog: Position,
    pub(crate) lives: u8,
}

impl GameSession {
    pub const fn new() -> Self {
        Self {
            board: Board::new(),
            frog: Position::START,
            lives: STARTING_LIVES,
        }
    }

    /// Empty board, frog on the start square, full lives
    pub fn reset(&mut self) {
        self.board.reset();
        self.frog = Position::START;
        self.lives = STARTING_LIVES;
    }

    /// Reset and lay out a fresh set of obstacles
    pub fn start(&mut self, rng: &mut Rng) {
        self.reset();
        self.board.place_obstacles(rng, UP_OBSTACLES, DOWN_OBSTACLES);
    }

    /// Obstacle tick. An obstacle rolling onto the frog counts as a hit.
    pub fn advance_obstacles(&mut self) -> Option<MoveOutcome> {
        if self.board.advance() {
            Some(self.take_hit())
        } else {
            None
        }
    }

    /// Lose a life and respawn, or leave the frog off the board on the last one
    pub(crate) fn take_hit(&mut self) -> MoveOutcome {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            return MoveOutcome::Squashed;
        }
        self.frog = Position::START;
        self.board.set(self.frog, Cell::Frog);
        MoveOutcome::Hit { lives: self.lives }
    }

    pub fn outcome(&self) -> Outcome {
        if self.lives == 0 {
            Outcome::Lost
        } else if self.frog.col >= GOAL_COLUMN {
            Outcome::Won
        } else {
            Outcome::InProgress
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for laying out custom obstacle patterns
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn frog(&self) -> Position {
        self.frog
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
