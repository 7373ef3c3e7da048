//! HD44780 character LCD on a 4-bit bus

use crate::config::LCD_ROW_ADDRESSES;
use embedded_hal::blocking::delay::{DelayMs, DelayUs};
use embedded_hal::digital::v2::OutputPin;
use ufmt::uWrite;

const CMD_CLEAR: u8 = 0x01;
const CMD_HOME: u8 = 0x02;
const CMD_ENTRY_INCREMENT: u8 = 0x06;
const CMD_DISPLAY_ON: u8 = 0x0C;
const CMD_FUNCTION_4BIT_2LINE: u8 = 0x28;
const CMD_SET_DDRAM: u8 = 0x80;

pub struct Lcd<P, D> {
    rs: P,
    en: P,
    /// D4..D7
    data: [P; 4],
    delay: D,
}

impl<P, D, E> Lcd<P, D>
where
    P: OutputPin<Error = E>,
    D: DelayUs<u16> + DelayMs<u16>,
{
    pub fn new(rs: P, en: P, data: [P; 4], delay: D) -> Self {
        Self { rs, en, data, delay }
    }

    /// Power-on sequence: 4-bit mode, two-line addressing, cursor off
    pub fn init(&mut self) -> Result<(), E> {
        self.delay.delay_ms(50);
        self.command(CMD_HOME)?;
        self.command(CMD_FUNCTION_4BIT_2LINE)?;
        self.command(CMD_DISPLAY_ON)?;
        self.command(CMD_ENTRY_INCREMENT)?;
        self.clear()
    }

    pub fn command(&mut self, cmd: u8) -> Result<(), E> {
        self.rs.set_low()?;
        self.write_byte(cmd)
    }

    pub fn write_data(&mut self, data: u8) -> Result<(), E> {
        self.rs.set_high()?;
        self.write_byte(data)
    }

    pub fn clear(&mut self) -> Result<(), E> {
        self.command(CMD_CLEAR)?;
        self.delay.delay_ms(2);
        Ok(())
    }

    pub fn set_cursor(&mut self, row: usize, col: u8) -> Result<(), E> {
        let base = LCD_ROW_ADDRESSES[row % LCD_ROW_ADDRESSES.len()];
        self.command(CMD_SET_DDRAM | base.wrapping_add(col))
    }

    pub fn print(&mut self, text: &str) -> Result<(), E> {
        for byte in text.bytes() {
            self.write_data(byte)?;
        }
        Ok(())
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), E> {
        self.write_nibble(byte >> 4)?;
        self.delay.delay_us(200);
        self.write_nibble(byte & 0x0F)?;
        self.delay.delay_ms(2);
        Ok(())
    }

    fn write_nibble(&mut self, nibble: u8) -> Result<(), E> {
        for (bit, pin) in self.data.iter_mut().enumerate() {
            if nibble & (1 << bit) != 0 {
                pin.set_high()?;
            } else {
                pin.set_low()?;
            }
        }
        self.en.set_high()?;
        self.delay.delay_us(1);
        self.en.set_low()
    }
}

impl<P, D, E> uWrite for Lcd<P, D>
where
    P: OutputPin<Error = E>,
    D: DelayUs<u16> + DelayMs<u16>,
{
    type Error = E;

    fn write_str(&mut self, s: &str) -> Result<(), E> {
        self.print(s)
    }
}
