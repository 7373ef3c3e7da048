//! Configuration constants for the frogger firmware

/// CPU frequency in Hz
pub const CPU_FREQ_HZ: u32 = 16_000_000;

/// UART baud rate for the event log
pub const UART_BAUD: u32 = 9600;

/// Board height in rows (lanes)
pub const BOARD_HEIGHT: usize = 4;

/// Board width in columns
pub const BOARD_WIDTH: usize = 20;

/// Rightmost column; reaching it wins the session
pub const GOAL_COLUMN: usize = BOARD_WIDTH - 1;

/// Obstacles travelling towards row 0
pub const UP_OBSTACLES: usize = 10;

/// Obstacles travelling towards the last row
pub const DOWN_OBSTACLES: usize = 7;

/// Frog start / respawn position as (row, col)
pub const START_ROW: usize = 1;
pub const START_COL: usize = 0;

/// Lives at the start of every session
pub const STARTING_LIVES: u8 = 3;

/// Obstacle advance interval in milliseconds
pub const OBSTACLE_TICK_MS: u32 = 2000;

/// Board redraw interval in milliseconds
pub const DISPLAY_TICK_MS: u32 = 100;

/// How long the win/lose message stays up before the next session
pub const RESULT_DWELL_MS: u32 = 2000;

/// Keypad symbols, indexed as `KEYPAD_LAYOUT[row][col]`
pub const KEYPAD_LAYOUT: [[u8; 4]; 4] = [*b"789/", *b"456*", *b"123-", *b"C0=+"];

/// Movement key bindings
pub const KEY_UP: u8 = b'8';
pub const KEY_DOWN: u8 = b'2';
pub const KEY_LEFT: u8 = b'4';
pub const KEY_RIGHT: u8 = b'6';

/// Settle time after driving a keypad column, in microseconds
pub const KEYPAD_SETTLE_US: u16 = 10;

/// DDRAM start address of each LCD row (20x4 HD44780)
pub const LCD_ROW_ADDRESSES: [u8; BOARD_HEIGHT] = [0x00, 0x40, 0x14, 0x54];

/// Seven-segment patterns for digits 0-9, bit 0 = segment a
pub const SEVEN_SEG_DIGITS: [u8; 10] = [0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F];

const _: () = assert!(
    UP_OBSTACLES + DOWN_OBSTACLES <= BOARD_WIDTH - 2,
    "obstacle quotas exceed the number of interior columns"
);
