//! Application layer: the setup / running / result cycle of the game

use crate::config::{DISPLAY_TICK_MS, OBSTACLE_TICK_MS, RESULT_DWELL_MS};
use crate::drivers::{DisplaySink, InputSource};
use crate::game::{Direction, GameSession, Outcome, Rng};
use crate::logger::{EventLog, GameEvent};
use crate::os::{wait_ms, Cadence, TimeSource};

/// Owns the session and every peripheral the game talks to
pub struct Game<T, I, D, L> {
    clock: T,
    input: I,
    display: D,
    log: L,
    session: GameSession,
    rng: Rng,
}

impl<T, I, D, L> Game<T, I, D, L>
where
    T: TimeSource,
    I: InputSource,
    D: DisplaySink,
    L: EventLog,
{
    pub fn new(clock: T, input: I, display: D, log: L) -> Self {
        Self {
            clock,
            input,
            display,
            log,
            session: GameSession::new(),
            rng: Rng::default(),
        }
    }

    /// Play sessions back to back forever
    pub fn run(&mut self) -> ! {
        loop {
            self.play_round();
        }
    }

    pub fn play_round(&mut self) -> Outcome {
        self.setup();
        let outcome = self.run_session();
        self.finish(outcome);
        outcome
    }

    /// Show the start screen, wait for any key and build a fresh board.
    /// The time of the key press seeds the obstacle layout.
    pub fn setup(&mut self) {
        self.display.show_prompt();
        while self.input.scan().is_none() {}

        let seed = self.clock.now();
        self.rng = Rng::new(seed);
        self.session.start(&mut self.rng);
        self.log.record(GameEvent::SessionStarted { seed });
    }

    /// Main loop of one session. Obstacles and the display run on their
    /// own cadences while input is polled on every pass.
    pub fn run_session(&mut self) -> Outcome {
        let mut obstacle_tick = Cadence::new(OBSTACLE_TICK_MS);
        let mut display_tick = Cadence::new(DISPLAY_TICK_MS);

        while self.session.outcome() == Outcome::InProgress {
            let now = self.clock.now();

            if obstacle_tick.poll(now) {
                let hit = self.session.advance_obstacles();
                self.log.record(GameEvent::ObstaclesAdvanced);
                if hit.is_some() {
                    self.log.record(GameEvent::FrogHit {
                        lives: self.session.lives(),
                    });
                }
                // Squashed on the last life: the session ends without reading a key
                if self.session.outcome() != Outcome::InProgress {
                    break;
                }
            }

            if let Some(direction) = self.input.scan().and_then(Direction::from_key) {
                let moved = self.session.move_frog(direction);
                self.log.record(GameEvent::from_move(direction, moved));
            }

            if display_tick.poll(now) {
                self.display.render(self.session.board(), self.session.lives());
            }
        }

        let outcome = self.session.outcome();
        self.log.record(GameEvent::SessionFinished(outcome));
        outcome
    }

    /// Show the result, then hold it on screen before the next round
    pub fn finish(&mut self, outcome: Outcome) {
        self.display.show_outcome(outcome);
        wait_ms(&mut self.clock, RESULT_DWELL_MS);
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Direct access to the session, for laying out a board by hand in
    /// tests and demos. The firmware itself only goes through `setup`.
    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    // Peripheral accessors below let tests and demos inspect what the loop
    // did. The firmware never reads its peripherals back.

    pub fn clock(&self) -> &T {
        &self.clock
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn log(&self) -> &L {
        &self.log
    }
}
