use crate::config::{KEYPAD_LAYOUT, KEYPAD_SETTLE_US};
use crate::drivers::{InputSource, Key};
use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::{InputPin, OutputPin};

const COLUMNS: usize = 4;
const ROWS: usize = 4;

/// 4x4 matrix keypad. Columns are driven low one at a time, rows are
/// pulled up and read active low.
pub struct Keypad<C, R, D> {
    columns: [C; COLUMNS],
    rows: [R; ROWS],
    delay: D,
}

impl<C, R, D, E> Keypad<C, R, D>
where
    C: OutputPin<Error = E>,
    R: InputPin<Error = E>,
    D: DelayUs<u16>,
{
    pub fn new(columns: [C; COLUMNS], rows: [R; ROWS], delay: D) -> Self {
        Self { columns, rows, delay }
    }

    /// Scan every column once. A held key blocks until it is released and
    /// is then reported; `None` means nothing was pressed.
    pub fn read_key(&mut self) -> Result<Option<Key>, E> {
        for col in 0..COLUMNS {
            self.select(col)?;
            self.delay.delay_us(KEYPAD_SETTLE_US);

            for row in 0..ROWS {
                if self.rows[row].is_low()? {
                    nb::block!(self.poll_release(row))?;
                    return Ok(Some(KEYPAD_LAYOUT[row][col]));
                }
            }
        }
        Ok(None)
    }

    fn select(&mut self, col: usize) -> Result<(), E> {
        for (idx, pin) in self.columns.iter_mut().enumerate() {
            if idx == col {
                pin.set_low()?;
            } else {
                pin.set_high()?;
            }
        }
        Ok(())
    }

    fn poll_release(&self, row: usize) -> nb::Result<(), E> {
        if self.rows[row].is_low()? {
            Err(nb::Error::WouldBlock)
        } else {
            Ok(())
        }
    }
}

impl<C, R, D, E> InputSource for Keypad<C, R, D>
where
    C: OutputPin<Error = E>,
    R: InputPin<Error = E>,
    D: DelayUs<u16>,
{
    fn scan(&mut self) -> Option<Key> {
        self.read_key().ok().flatten()
    }
}
