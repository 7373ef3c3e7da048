use embedded_hal_mock::delay::MockNoop;
use embedded_hal_mock::pin::{Mock as PinMock, State, Transaction as PinTransaction};
use embedded_hal_mock::serial::{Mock as SerialMock, Transaction as SerialTransaction};
use frogger_firmware::drivers::seven_segment::segment_pattern;
use frogger_firmware::drivers::{InputSource, Keypad, Lcd, SerialConsole, SevenSegment};
use frogger_firmware::game::Outcome;
use frogger_firmware::logger::{EventLog, GameEvent};

fn set(states: &[State]) -> Vec<PinTransaction> {
    states.iter().map(|s| PinTransaction::set(s.clone())).collect()
}

fn get(states: &[State]) -> Vec<PinTransaction> {
    states.iter().map(|s| PinTransaction::get(s.clone())).collect()
}

fn pins<const N: usize>(expectations: [Vec<PinTransaction>; N]) -> [PinMock; N] {
    expectations.map(|e| PinMock::new(&e))
}

fn finish<const N: usize>(pins: &mut [PinMock; N]) {
    for pin in pins.iter_mut() {
        pin.done();
    }
}

use State::{High, Low};

#[test]
fn keypad_reports_key_after_release() {
    // '8' sits on row 0, column 1
    let mut columns = pins([
        set(&[Low, High]),
        set(&[High, Low]),
        set(&[High, High]),
        set(&[High, High]),
    ]);
    let mut rows = pins([
        // column 0 pass, column 1 pass, then two release polls
        get(&[High, Low, Low, High]),
        get(&[High]),
        get(&[High]),
        get(&[High]),
    ]);

    let mut keypad = Keypad::new(columns.clone(), rows.clone(), MockNoop::new());
    assert_eq!(keypad.scan(), Some(b'8'));

    finish(&mut columns);
    finish(&mut rows);
}

#[test]
fn keypad_idle_scan_returns_none() {
    let mut columns = pins([
        set(&[Low, High, High, High]),
        set(&[High, Low, High, High]),
        set(&[High, High, Low, High]),
        set(&[High, High, High, Low]),
    ]);
    let mut rows = pins([
        get(&[High, High, High, High]),
        get(&[High, High, High, High]),
        get(&[High, High, High, High]),
        get(&[High, High, High, High]),
    ]);

    let mut keypad = Keypad::new(columns.clone(), rows.clone(), MockNoop::new());
    assert!(matches!(keypad.read_key(), Ok(None)));

    finish(&mut columns);
    finish(&mut rows);
}

#[test]
fn seven_segment_draws_digits_and_blanks_overflow() {
    assert_eq!(segment_pattern(3), 0x4F);
    assert_eq!(segment_pattern(0), 0x3F);
    assert_eq!(segment_pattern(10), 0);

    let mut segments = pins([
        set(&[High, Low]),
        set(&[High, Low]),
        set(&[High, Low]),
        set(&[High, Low]),
        set(&[Low, Low]),
        set(&[Low, Low]),
        set(&[High, Low]),
        set(&[Low, Low]),
    ]);

    let mut digit = SevenSegment::new(segments.clone());
    digit.show(3).unwrap();
    digit.show(12).unwrap();

    finish(&mut segments);
}

#[test]
fn lcd_data_write_sends_two_nibbles() {
    // '*' = 0x2A: high nibble 0010, low nibble 1010
    let mut rs = PinMock::new(&set(&[High]));
    let mut en = PinMock::new(&set(&[High, Low, High, Low]));
    let mut data = pins([
        set(&[Low, Low]),
        set(&[High, High]),
        set(&[Low, Low]),
        set(&[Low, High]),
    ]);

    let mut lcd = Lcd::new(rs.clone(), en.clone(), data.clone(), MockNoop::new());
    lcd.write_data(b'*').unwrap();

    rs.done();
    en.done();
    finish(&mut data);
}

#[test]
fn lcd_cursor_uses_row_addresses() {
    // Row 2 starts at 0x14, so column 3 is command 0x80 | 0x17 = 0x97
    let mut rs = PinMock::new(&set(&[Low]));
    let mut en = PinMock::new(&set(&[High, Low, High, Low]));
    let mut data = pins([
        set(&[High, High]),
        set(&[Low, High]),
        set(&[Low, High]),
        set(&[High, Low]),
    ]);

    let mut lcd = Lcd::new(rs.clone(), en.clone(), data.clone(), MockNoop::new());
    lcd.set_cursor(2, 3).unwrap();

    rs.done();
    en.done();
    finish(&mut data);
}

#[test]
fn console_logs_info_events() {
    let expectations = [SerialTransaction::write_many(b"[GAME] frog hit, lives=2\r\n")];
    let mut serial = SerialMock::new(&expectations);

    let mut console = SerialConsole::with_verbosity(serial.clone(), false);
    console.record(GameEvent::FrogHit { lives: 2 });
    console.record(GameEvent::ObstaclesAdvanced);

    serial.done();
}

#[test]
fn verbose_console_logs_debug_events() {
    let expectations = [
        SerialTransaction::write_many(b"[DBG] obstacles advanced\r\n"),
        SerialTransaction::write_many(b"[GAME] session won\r\n"),
    ];
    let mut serial = SerialMock::new(&expectations);

    let mut console = SerialConsole::with_verbosity(serial.clone(), true);
    console.record(GameEvent::ObstaclesAdvanced);
    console.record(GameEvent::SessionFinished(Outcome::Won));

    serial.done();
}

#[test]
fn console_writes_plain_lines() {
    let expectations = [SerialTransaction::write_many(b"Frogger firmware v0.1.0\r\n")];
    let mut serial = SerialMock::new(&expectations);

    let mut console = SerialConsole::with_verbosity(serial.clone(), false);
    console.write_line("Frogger firmware v0.1.0").unwrap();

    serial.done();
}
