use crate::config::CPU_FREQ_HZ;
use crate::os::TimeSource;
use avr_device::atmega128a::TC0;
use avr_device::interrupt::{self, Mutex};
use core::cell::Cell;
use embedded_hal::blocking::delay::{DelayMs, DelayUs};

const WGM01: u8 = 1 << 3;
// Timer0 clock select on the ATmega128: CS02 alone is clk/64
const CS_DIV64: u8 = 1 << 2;
const OCIE0: u8 = 1 << 1;

// 16MHz / 64 = 250kHz, 250 counts = 1ms
const COMPARE_1MS: u8 = (CPU_FREQ_HZ / 64 / 1000 - 1) as u8;

static MILLIS: Mutex<Cell<u32>> = Mutex::new(Cell::new(0));

/// Millisecond clock driven by the Timer0 compare interrupt
pub struct SysTick {
    _timer: TC0,
}

impl SysTick {
    /// Put Timer0 in CTC mode with a 1ms compare interrupt.
    /// Interrupts still have to be enabled globally.
    pub fn start(timer: TC0) -> Self {
        interrupt::free(|cs| {
            MILLIS.borrow(cs).set(0);
            timer.tcnt0.write(|w| unsafe { w.bits(0) });
            timer.ocr0.write(|w| unsafe { w.bits(COMPARE_1MS) });
            timer.tccr0.write(|w| unsafe { w.bits(WGM01 | CS_DIV64) });
            timer.timsk.modify(|r, w| unsafe { w.bits(r.bits() | OCIE0) });
        });
        Self { _timer: timer }
    }

    /// Consistent snapshot of the counter
    #[inline]
    pub fn millis() -> u32 {
        interrupt::free(|cs| MILLIS.borrow(cs).get())
    }
}

impl TimeSource for SysTick {
    #[inline]
    fn now(&mut self) -> u32 {
        Self::millis()
    }
}

#[avr_device::interrupt(atmega128a)]
fn TIMER0_COMP() {
    interrupt::free(|cs| {
        let millis = MILLIS.borrow(cs);
        millis.set(millis.get().wrapping_add(1));
    });
}

// Inner loop is roughly four cycles per pass
const LOOPS_PER_US: u32 = CPU_FREQ_HZ / 4_000_000;

/// Busy-wait delay; usable before interrupts are enabled
#[derive(Copy, Clone, Default)]
pub struct Delay;

impl DelayUs<u16> for Delay {
    fn delay_us(&mut self, us: u16) {
        for _ in 0..us {
            for _ in 0..LOOPS_PER_US {
                avr_device::asm::nop();
            }
        }
    }
}

impl DelayMs<u16> for Delay {
    fn delay_ms(&mut self, ms: u16) {
        for _ in 0..ms {
            self.delay_us(1000);
        }
    }
}
