#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]

#[cfg(target_arch = "avr")]
use panic_halt as _;

#[cfg(target_arch = "avr")]
#[avr_device::entry]
fn main() -> ! {
    use frogger_firmware::drivers::{Keypad, Lcd, Panel, SerialConsole, SevenSegment};
    use frogger_firmware::hal::{board, Delay, SysTick, Uart};
    use frogger_firmware::Game;

    let dp = avr_device::atmega128a::Peripherals::take().unwrap();

    let mut console = SerialConsole::new(Uart::new(dp.USART0));
    console.write_line("Frogger firmware v0.1.0").ok();

    let (rs, en, data) = board::lcd_pins(dp.PORTA);
    let mut lcd = Lcd::new(rs, en, data, Delay);
    lcd.init().ok();

    let lives = SevenSegment::new(board::seven_segment_pins(dp.PORTB));
    let (columns, rows) = board::keypad_pins(dp.PORTD);
    let keypad = Keypad::new(columns, rows, Delay);

    let clock = SysTick::start(dp.TC0);

    // Enable interrupts globally
    unsafe { avr_device::interrupt::enable() };

    let mut game = Game::new(clock, keypad, Panel::new(lcd, lives), console);
    game.run()
}

// The firmware entry point only exists on AVR; host builds carry the
// library for tests.
#[cfg(not(target_arch = "avr"))]
fn main() {}
