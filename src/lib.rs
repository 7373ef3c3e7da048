//! Frog crossing game for an ATmega128 board with a 20x4 character LCD,
//! a 4x4 keypad and a seven-segment life counter.
//!
//! The engine, drivers and game loop are target independent; only [`hal`]
//! touches AVR registers.
#![cfg_attr(not(test), no_std)]
#![cfg_attr(target_arch = "avr", feature(abi_avr_interrupt))]

pub mod application;
pub mod config;
pub mod drivers;
pub mod game;
pub mod logger;
pub mod os;

#[cfg(target_arch = "avr")]
pub mod hal;

pub use application::Game;
