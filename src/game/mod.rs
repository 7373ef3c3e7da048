//! Game engine: board model, obstacle movement, frog movement and sessions

pub mod board;
pub mod movement;
pub mod rng;
pub mod session;

pub use board::{Board, Cell, Position};
pub use movement::{Direction, MoveOutcome};
pub use rng::Rng;
pub use session::{GameSession, Outcome};
