use avr_device::atmega128a::{PORTA, PORTB, PORTC, PORTD, PORTE};
use core::convert::Infallible;
use core::marker::PhantomData;
use embedded_hal::digital::v2::{InputPin, OutputPin};

pub trait PinMode {}
pub struct Input;
pub struct Output;
impl PinMode for Input {}
impl PinMode for Output {}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Port {
    A,
    B,
    C,
    D,
    E,
}

// Binds the PINx, DDRx and PORTx registers of `$port` and evaluates `$body`
macro_rules! with_port {
    ($port:expr, |$pin:ident, $ddr:ident, $out:ident| $body:expr) => {
        match $port {
            Port::A => {
                let regs = unsafe { &*PORTA::ptr() };
                let ($pin, $ddr, $out) = (&regs.pina, &regs.ddra, &regs.porta);
                $body
            }
            Port::B => {
                let regs = unsafe { &*PORTB::ptr() };
                let ($pin, $ddr, $out) = (&regs.pinb, &regs.ddrb, &regs.portb);
                $body
            }
            Port::C => {
                let regs = unsafe { &*PORTC::ptr() };
                let ($pin, $ddr, $out) = (&regs.pinc, &regs.ddrc, &regs.portc);
                $body
            }
            Port::D => {
                let regs = unsafe { &*PORTD::ptr() };
                let ($pin, $ddr, $out) = (&regs.pind, &regs.ddrd, &regs.portd);
                $body
            }
            Port::E => {
                let regs = unsafe { &*PORTE::ptr() };
                let ($pin, $ddr, $out) = (&regs.pine, &regs.ddre, &regs.porte);
                $body
            }
        }
    };
}

/// Runtime-addressed port pin, so pins of different ports fit in one array
#[derive(Debug)]
pub struct Pin<MODE> {
    port: Port,
    mask: u8,
    _mode: PhantomData<MODE>,
}

impl<MODE: PinMode> Pin<MODE> {
    fn new(port: Port, bit: u8) -> Self {
        Pin {
            port,
            mask: 1 << (bit & 0x07),
            _mode: PhantomData,
        }
    }

    // Read-modify-write of PORTx with interrupts masked
    fn modify_port(&self, f: impl FnOnce(u8) -> u8) {
        avr_device::interrupt::free(|_| {
            with_port!(self.port, |_pin, _ddr, out| {
                out.modify(|r, w| unsafe { w.bits(f(r.bits())) })
            })
        });
    }

    fn modify_ddr(&self, f: impl FnOnce(u8) -> u8) {
        avr_device::interrupt::free(|_| {
            with_port!(self.port, |_pin, ddr, _out| {
                ddr.modify(|r, w| unsafe { w.bits(f(r.bits())) })
            })
        });
    }
}

impl Pin<Output> {
    /// Configure as push-pull output, initially low
    pub fn output(port: Port, bit: u8) -> Self {
        let pin = Self::new(port, bit);
        let mask = pin.mask;
        pin.modify_port(|r| r & !mask);
        pin.modify_ddr(|r| r | mask);
        pin
    }

    /// Configure as output, initially high
    pub fn output_high(port: Port, bit: u8) -> Self {
        let pin = Self::new(port, bit);
        let mask = pin.mask;
        pin.modify_port(|r| r | mask);
        pin.modify_ddr(|r| r | mask);
        pin
    }
}

impl Pin<Input> {
    /// Configure as input with the internal pull-up enabled
    pub fn pull_up_input(port: Port, bit: u8) -> Self {
        let pin = Self::new(port, bit);
        let mask = pin.mask;
        pin.modify_ddr(|r| r & !mask);
        pin.modify_port(|r| r | mask);
        pin
    }
}

impl OutputPin for Pin<Output> {
    type Error = Infallible;

    #[inline]
    fn set_low(&mut self) -> Result<(), Infallible> {
        let mask = self.mask;
        self.modify_port(|r| r & !mask);
        Ok(())
    }

    #[inline]
    fn set_high(&mut self) -> Result<(), Infallible> {
        let mask = self.mask;
        self.modify_port(|r| r | mask);
        Ok(())
    }
}

impl InputPin for Pin<Input> {
    type Error = Infallible;

    #[inline]
    fn is_high(&self) -> Result<bool, Infallible> {
        let level = with_port!(self.port, |pin, _ddr, _out| pin.read().bits());
        Ok(level & self.mask != 0)
    }

    #[inline]
    fn is_low(&self) -> Result<bool, Infallible> {
        self.is_high().map(|high| !high)
    }
}

// Front panel wiring. Each function consumes the port peripheral it claims.
pub mod board {
    use super::*;

    /// RS, E and D4..D7 of the character LCD
    pub fn lcd_pins(_port: PORTA) -> (Pin<Output>, Pin<Output>, [Pin<Output>; 4]) {
        (
            Pin::output(Port::A, 0),
            Pin::output(Port::A, 1),
            [4, 5, 6, 7].map(|bit| Pin::output(Port::A, bit)),
        )
    }

    /// Segments a..g and dp
    pub fn seven_segment_pins(_port: PORTB) -> [Pin<Output>; 8] {
        [0, 1, 2, 3, 4, 5, 6, 7].map(|bit| Pin::output(Port::B, bit))
    }

    /// Keypad columns PD0..PD3 (idle high) and rows PD4..PD7 (pulled up)
    pub fn keypad_pins(_port: PORTD) -> ([Pin<Output>; 4], [Pin<Input>; 4]) {
        (
            [0, 1, 2, 3].map(|bit| Pin::output_high(Port::D, bit)),
            [4, 5, 6, 7].map(|bit| Pin::pull_up_input(Port::D, bit)),
        )
    }
}
