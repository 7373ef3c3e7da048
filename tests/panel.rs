//! Front panel rendering checked against a small HD44780 model

use core::convert::Infallible;
use embedded_hal::digital::v2::OutputPin;
use embedded_hal_mock::delay::MockNoop;
use frogger_firmware::config::{BOARD_WIDTH, LCD_ROW_ADDRESSES};
use frogger_firmware::drivers::{DisplaySink, Lcd, Panel, SevenSegment};
use frogger_firmware::game::{Board, Cell, Outcome, Position};
use std::cell::RefCell;
use std::rc::Rc;

/// Character RAM of the display plus the latched seven-segment pattern
struct Screen {
    rs: bool,
    bus: u8,
    pending: Option<u8>,
    address: u8,
    ram: [u8; 128],
    segments: u8,
}

impl Screen {
    fn new() -> Self {
        Self {
            rs: false,
            bus: 0,
            pending: None,
            address: 0,
            ram: [b' '; 128],
            segments: 0xFF,
        }
    }

    fn latch(&mut self) {
        match self.pending.take() {
            None => self.pending = Some(self.bus),
            Some(high) => self.execute((high << 4) | self.bus),
        }
    }

    fn execute(&mut self, byte: u8) {
        if self.rs {
            self.ram[self.address as usize & 0x7F] = byte;
            self.address = self.address.wrapping_add(1);
        } else if byte & 0x80 != 0 {
            self.address = byte & 0x7F;
        } else if byte == 0x01 {
            self.ram = [b' '; 128];
            self.address = 0;
        }
    }

    fn line(&self, row: usize) -> String {
        let start = LCD_ROW_ADDRESSES[row] as usize;
        String::from_utf8_lossy(&self.ram[start..start + BOARD_WIDTH]).into_owned()
    }
}

#[derive(Clone, Copy)]
enum Line {
    Rs,
    Enable,
    Data(u8),
    Segment(u8),
}

#[derive(Clone)]
struct Wire {
    screen: Rc<RefCell<Screen>>,
    line: Line,
}

impl Wire {
    fn drive(&mut self, high: bool) {
        let mut screen = self.screen.borrow_mut();
        match self.line {
            Line::Rs => screen.rs = high,
            Line::Data(bit) => {
                screen.bus = (screen.bus & !(1 << bit)) | ((high as u8) << bit);
            }
            // Data is taken on the falling edge of E
            Line::Enable => {
                if !high {
                    screen.latch();
                }
            }
            Line::Segment(bit) => {
                screen.segments = (screen.segments & !(1 << bit)) | ((high as u8) << bit);
            }
        }
    }
}

impl OutputPin for Wire {
    type Error = Infallible;

    fn set_low(&mut self) -> Result<(), Infallible> {
        self.drive(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.drive(true);
        Ok(())
    }
}

fn panel() -> (Panel<Wire, MockNoop, Wire>, Rc<RefCell<Screen>>) {
    let screen = Rc::new(RefCell::new(Screen::new()));
    let wire = |line| Wire {
        screen: screen.clone(),
        line,
    };

    let lcd = Lcd::new(
        wire(Line::Rs),
        wire(Line::Enable),
        [0, 1, 2, 3].map(|bit| wire(Line::Data(bit))),
        MockNoop::new(),
    );
    let digit = SevenSegment::new([0, 1, 2, 3, 4, 5, 6, 7].map(|bit| wire(Line::Segment(bit))));

    (Panel::new(lcd, digit), screen)
}

#[test]
fn board_is_drawn_row_by_row_with_lives() {
    let (mut panel, screen) = panel();

    let mut board = Board::new();
    board.reset();
    board.place_obstacle(Position::new(0, 1), Cell::ObstacleUp);
    board.place_obstacle(Position::new(3, 18), Cell::ObstacleDown);

    panel.render(&board, 2);

    let screen = screen.borrow();
    assert_eq!(screen.line(0), " ^                  ");
    assert_eq!(screen.line(1), "*                   ");
    assert_eq!(screen.line(2), "                    ");
    assert_eq!(screen.line(3), "                  V ");
    assert_eq!(screen.segments, 0x5B);
}

#[test]
fn prompt_spans_two_lines_and_blanks_the_digit() {
    let (mut panel, screen) = panel();
    panel.render(&Board::new(), 3);
    panel.show_prompt();

    let screen = screen.borrow();
    assert_eq!(screen.line(0).trim_end(), "Press any key");
    assert_eq!(screen.line(1).trim_end(), "to start");
    assert_eq!(screen.segments, 0);
}

#[test]
fn outcome_messages_replace_the_board() {
    let (mut panel, screen) = panel();

    let mut board = Board::new();
    board.reset();
    panel.render(&board, 1);
    panel.show_outcome(Outcome::Lost);
    assert_eq!(screen.borrow().line(0).trim_end(), "You Lose!");
    assert_eq!(screen.borrow().line(1).trim_end(), "");

    panel.show_outcome(Outcome::Won);
    assert_eq!(screen.borrow().line(0).trim_end(), "You Win!");
}

#[test]
fn out_of_range_lives_blank_the_digit() {
    let (mut panel, screen) = panel();
    panel.render(&Board::new(), 11);
    assert_eq!(screen.borrow().segments, 0);
}
