//! Plays one round of the game on the host against a simulated front panel.
//!
//! The keypad presses a start key and then keeps stepping right, the clock
//! advances 25ms per read, and every redraw is printed as text. Game events
//! go through the serial console with debug output enabled.
//!
//! Run with `cargo run --example game_loop_demo`.

use embedded_hal::serial;
use frogger_firmware::config::{KEY_RIGHT, OBSTACLE_TICK_MS};
use frogger_firmware::drivers::{DisplaySink, InputSource, Key, SerialConsole};
use frogger_firmware::game::{Board, Outcome};
use frogger_firmware::os::TimeSource;
use frogger_firmware::Game;
use std::convert::Infallible;
use std::io::Write;

struct SimClock {
    now: u32,
}

impl TimeSource for SimClock {
    fn now(&mut self) -> u32 {
        self.now = self.now.wrapping_add(25);
        self.now
    }
}

/// Any key to start, then one step right per scan
struct AutoPilot {
    started: bool,
}

impl InputSource for AutoPilot {
    fn scan(&mut self) -> Option<Key> {
        if !self.started {
            self.started = true;
            return Some(b'5');
        }
        Some(KEY_RIGHT)
    }
}

/// Prints one frame per obstacle tick, plus every prompt and result
struct TextPanel {
    frames: u32,
}

impl DisplaySink for TextPanel {
    fn render(&mut self, board: &Board, lives: u8) {
        self.frames += 1;
        // Redraws run every 100ms; only show a frame per obstacle tick
        if self.frames % (OBSTACLE_TICK_MS / 100) != 1 {
            return;
        }
        println!("+--------------------+ lives {}", lives);
        for row in board.rows() {
            let line: String = row.iter().map(|cell| cell.glyph() as char).collect();
            println!("|{}|", line);
        }
        println!("+--------------------+");
    }

    fn show_prompt(&mut self) {
        println!("Press any key\nto start");
    }

    fn show_outcome(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won => println!("You Win!"),
            _ => println!("You Lose!"),
        }
    }
}

struct StdoutSerial;

impl serial::Write<u8> for StdoutSerial {
    type Error = Infallible;

    fn write(&mut self, byte: u8) -> nb::Result<(), Infallible> {
        std::io::stdout().write_all(&[byte]).ok();
        Ok(())
    }

    fn flush(&mut self) -> nb::Result<(), Infallible> {
        std::io::stdout().flush().ok();
        Ok(())
    }
}

fn main() {
    let mut console = SerialConsole::with_verbosity(StdoutSerial, true);
    console.write_line("Frogger demo").ok();

    let mut game = Game::new(
        SimClock { now: 0 },
        AutoPilot { started: false },
        TextPanel { frames: 0 },
        console,
    );

    let outcome = game.play_round();
    println!(
        "round over after {}ms with {} lives left",
        game.clock().now,
        game.session().lives()
    );
    if outcome == Outcome::Won {
        println!("frog reached the goal column");
    }
}
