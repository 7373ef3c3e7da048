use crate::config::{CPU_FREQ_HZ, UART_BAUD};
use avr_device::atmega128a::USART0;
use core::convert::Infallible;
use embedded_hal::serial::Write;

const UDRE0: u8 = 1 << 5;
const TXEN0: u8 = 1 << 3;
const FRAME_8N1: u8 = (1 << 2) | (1 << 1);

// 103 at 16MHz / 9600 baud
const UBRR: u16 = (CPU_FREQ_HZ / (16 * UART_BAUD) - 1) as u16;

/// Polled USART0 transmitter
pub struct Uart {
    usart: USART0,
}

impl Uart {
    /// 8N1 transmitter at `UART_BAUD`
    pub fn new(usart: USART0) -> Self {
        usart.ubrr0h.write(|w| unsafe { w.bits((UBRR >> 8) as u8) });
        usart.ubrr0l.write(|w| unsafe { w.bits(UBRR as u8) });
        usart.ucsr0c.write(|w| unsafe { w.bits(FRAME_8N1) });
        usart.ucsr0b.write(|w| unsafe { w.bits(TXEN0) });
        Self { usart }
    }

    #[inline]
    fn tx_ready(&self) -> bool {
        self.usart.ucsr0a.read().bits() & UDRE0 != 0
    }
}

impl Write<u8> for Uart {
    type Error = Infallible;

    fn write(&mut self, byte: u8) -> nb::Result<(), Infallible> {
        if !self.tx_ready() {
            return Err(nb::Error::WouldBlock);
        }
        self.usart.udr0.write(|w| unsafe { w.bits(byte) });
        Ok(())
    }

    fn flush(&mut self) -> nb::Result<(), Infallible> {
        if self.tx_ready() {
            Ok(())
        } else {
            Err(nb::Error::WouldBlock)
        }
    }
}
