use crate::logger::{EventLog, GameEvent, LogLevel};
use embedded_hal::serial::Write;
use ufmt::{uWrite, uwrite};

/// Line-oriented text output over a UART, used as the event log
pub struct SerialConsole<W> {
    serial: W,
    min_level: LogLevel,
}

impl<W, E> SerialConsole<W>
where
    W: Write<u8, Error = E>,
{
    /// Debug events are only printed when built with the `debug` feature
    pub fn new(serial: W) -> Self {
        Self::with_verbosity(serial, cfg!(feature = "debug"))
    }

    pub fn with_verbosity(serial: W, verbose: bool) -> Self {
        Self {
            serial,
            min_level: if verbose { LogLevel::Debug } else { LogLevel::Info },
        }
    }

    pub fn write_byte(&mut self, byte: u8) -> Result<(), E> {
        nb::block!(self.serial.write(byte))
    }

    pub fn write_line(&mut self, s: &str) -> Result<(), E> {
        self.write_str(s)?;
        self.write_str("\r\n")
    }

    fn log_line(&mut self, event: GameEvent) -> Result<(), E> {
        let tag = match event.level() {
            LogLevel::Debug => "[DBG] ",
            LogLevel::Info => "[GAME] ",
        };
        self.write_str(tag)?;
        uwrite!(self, "{}\r\n", event)
    }
}

impl<W, E> uWrite for SerialConsole<W>
where
    W: Write<u8, Error = E>,
{
    type Error = E;

    fn write_str(&mut self, s: &str) -> Result<(), E> {
        for byte in s.bytes() {
            self.write_byte(byte)?;
        }
        Ok(())
    }
}

impl<W, E> EventLog for SerialConsole<W>
where
    W: Write<u8, Error = E>,
{
    fn record(&mut self, event: GameEvent) {
        if event.level() >= self.min_level {
            self.log_line(event).ok();
        }
    }
}
