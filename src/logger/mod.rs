//! Game event logging

use crate::game::{Direction, MoveOutcome, Outcome, Position};
use ufmt::{uDisplay, uWrite, uwrite, Formatter};

/// Severity of a logged event
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug = 0,
    Info = 1,
}

/// Something worth reporting on the serial console
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    SessionStarted { seed: u32 },
    ObstaclesAdvanced,
    FrogMoved { direction: Direction, to: Position },
    FrogHit { lives: u8 },
    SessionFinished(Outcome),
}

impl GameEvent {
    /// Event for a move or an obstacle tick that touched the frog
    pub fn from_move(direction: Direction, outcome: MoveOutcome) -> Self {
        match outcome {
            MoveOutcome::Moved(to) => GameEvent::FrogMoved { direction, to },
            MoveOutcome::Hit { lives } => GameEvent::FrogHit { lives },
            MoveOutcome::Squashed => GameEvent::FrogHit { lives: 0 },
        }
    }

    pub fn level(&self) -> LogLevel {
        match self {
            GameEvent::ObstaclesAdvanced | GameEvent::FrogMoved { .. } => LogLevel::Debug,
            _ => LogLevel::Info,
        }
    }
}

/// Sink for game events
pub trait EventLog {
    fn record(&mut self, event: GameEvent);
}

/// Discards every event
#[derive(Copy, Clone, Debug, Default)]
pub struct NullLog;

impl EventLog for NullLog {
    fn record(&mut self, _event: GameEvent) {}
}

impl<L: EventLog + ?Sized> EventLog for &mut L {
    fn record(&mut self, event: GameEvent) {
        (**self).record(event);
    }
}

impl uDisplay for Direction {
    fn fmt<W: uWrite + ?Sized>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error> {
        f.write_str(match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        })
    }
}

impl uDisplay for Outcome {
    fn fmt<W: uWrite + ?Sized>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error> {
        f.write_str(match self {
            Outcome::InProgress => "in progress",
            Outcome::Won => "won",
            Outcome::Lost => "lost",
        })
    }
}

impl uDisplay for GameEvent {
    fn fmt<W: uWrite + ?Sized>(&self, f: &mut Formatter<'_, W>) -> Result<(), W::Error> {
        match *self {
            GameEvent::SessionStarted { seed } => uwrite!(f, "session start seed={}", seed),
            GameEvent::ObstaclesAdvanced => f.write_str("obstacles advanced"),
            GameEvent::FrogMoved { direction, to } => {
                uwrite!(f, "frog {} -> ({}, {})", direction, to.row, to.col)
            }
            GameEvent::FrogHit { lives } => uwrite!(f, "frog hit, lives={}", lives),
            GameEvent::SessionFinished(outcome) => uwrite!(f, "session {}", outcome),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::string::String;

    struct Text(String);

    impl uWrite for Text {
        type Error = core::convert::Infallible;

        fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
            self.0.push_str(s);
            Ok(())
        }
    }

    fn render(event: GameEvent) -> String {
        let mut out = Text(String::new());
        uwrite!(out, "{}", event).ok();
        out.0
    }

    #[test]
    fn events_render_as_short_lines() {
        assert_eq!(render(GameEvent::SessionStarted { seed: 812 }), "session start seed=812");
        assert_eq!(
            render(GameEvent::FrogMoved { direction: Direction::Right, to: Position::new(1, 4) }),
            "frog right -> (1, 4)"
        );
        assert_eq!(render(GameEvent::FrogHit { lives: 2 }), "frog hit, lives=2");
        assert_eq!(render(GameEvent::SessionFinished(Outcome::Lost)), "session lost");
    }

    #[test]
    fn squash_is_reported_as_hit_with_no_lives() {
        let event = GameEvent::from_move(Direction::Up, MoveOutcome::Squashed);
        assert_eq!(event, GameEvent::FrogHit { lives: 0 });
        assert_eq!(event.level(), LogLevel::Info);
    }

    #[test]
    fn routine_events_are_debug_level() {
        assert_eq!(GameEvent::ObstaclesAdvanced.level(), LogLevel::Debug);
        let moved = GameEvent::from_move(Direction::Left, MoveOutcome::Moved(Position::START));
        assert_eq!(moved.level(), LogLevel::Debug);
    }
}
