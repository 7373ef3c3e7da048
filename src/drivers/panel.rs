//! Front panel: the character LCD showing the board and the seven-segment
//! digit showing the remaining lives

use crate::drivers::lcd::Lcd;
use crate::drivers::seven_segment::SevenSegment;
use crate::drivers::DisplaySink;
use crate::game::{Board, Outcome};
use embedded_hal::blocking::delay::{DelayMs, DelayUs};
use embedded_hal::digital::v2::OutputPin;
use ufmt::uwrite;

pub struct Panel<P, D, S> {
    lcd: Lcd<P, D>,
    lives: SevenSegment<S>,
}

impl<P, D, S, E, F> Panel<P, D, S>
where
    P: OutputPin<Error = E>,
    D: DelayUs<u16> + DelayMs<u16>,
    S: OutputPin<Error = F>,
{
    pub fn new(lcd: Lcd<P, D>, lives: SevenSegment<S>) -> Self {
        Self { lcd, lives }
    }

    fn draw_board(&mut self, board: &Board) -> Result<(), E> {
        self.lcd.clear()?;
        for (row, cells) in board.rows().enumerate() {
            self.lcd.set_cursor(row, 0)?;
            for cell in cells.iter() {
                self.lcd.write_data(cell.glyph())?;
            }
        }
        Ok(())
    }

    fn draw_prompt(&mut self) -> Result<(), E> {
        self.lcd.clear()?;
        uwrite!(self.lcd, "Press any key")?;
        self.lcd.set_cursor(1, 0)?;
        uwrite!(self.lcd, "to start")
    }

    fn draw_outcome(&mut self, outcome: Outcome) -> Result<(), E> {
        self.lcd.clear()?;
        match outcome {
            Outcome::Won => uwrite!(self.lcd, "You Win!"),
            Outcome::Lost => uwrite!(self.lcd, "You Lose!"),
            Outcome::InProgress => Ok(()),
        }
    }
}

impl<P, D, S, E, F> DisplaySink for Panel<P, D, S>
where
    P: OutputPin<Error = E>,
    D: DelayUs<u16> + DelayMs<u16>,
    S: OutputPin<Error = F>,
{
    fn render(&mut self, board: &Board, lives: u8) {
        self.draw_board(board).ok();
        self.lives.show(lives).ok();
    }

    fn show_prompt(&mut self) {
        self.draw_prompt().ok();
        self.lives.blank().ok();
    }

    fn show_outcome(&mut self, outcome: Outcome) {
        self.draw_outcome(outcome).ok();
    }
}
