pub mod gpio;
pub mod timer;
pub mod uart;

// Re-export commonly used types
pub use gpio::board;
pub use gpio::{Input, Output, Pin, Port};
pub use timer::{Delay, SysTick};
pub use uart::Uart;
