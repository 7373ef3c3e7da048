pub mod keypad;
pub mod lcd;
pub mod panel;
pub mod serial_console;
pub mod seven_segment;

pub use keypad::Keypad;
pub use lcd::Lcd;
pub use panel::Panel;
pub use serial_console::SerialConsole;
pub use seven_segment::SevenSegment;

use crate::game::{Board, Outcome};

/// Key symbol as printed on the keypad
pub type Key = u8;

/// Player input as seen by the game loop
pub trait InputSource {
    /// Key currently held, if any. A detected key is only returned once it
    /// has been released, so one press yields one symbol.
    fn scan(&mut self) -> Option<Key>;
}

/// Everything the game loop draws
pub trait DisplaySink {
    /// Full redraw of the board plus the life indicator
    fn render(&mut self, board: &Board, lives: u8);

    /// Start screen shown while waiting for the first key
    fn show_prompt(&mut self);

    /// End-of-session message
    fn show_outcome(&mut self, outcome: Outcome);
}
