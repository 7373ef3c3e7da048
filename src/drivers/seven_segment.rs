use crate::config::SEVEN_SEG_DIGITS;
use embedded_hal::digital::v2::OutputPin;

/// Segment pattern for `value`; anything above 9 is blank
pub fn segment_pattern(value: u8) -> u8 {
    SEVEN_SEG_DIGITS.get(value as usize).copied().unwrap_or(0)
}

/// Single common-cathode digit, segments a..g then dp
pub struct SevenSegment<P> {
    segments: [P; 8],
}

impl<P, E> SevenSegment<P>
where
    P: OutputPin<Error = E>,
{
    pub fn new(segments: [P; 8]) -> Self {
        Self { segments }
    }

    pub fn show(&mut self, value: u8) -> Result<(), E> {
        let pattern = segment_pattern(value);
        for (bit, pin) in self.segments.iter_mut().enumerate() {
            if pattern & (1 << bit) != 0 {
                pin.set_high()?;
            } else {
                pin.set_low()?;
            }
        }
        Ok(())
    }

    pub fn blank(&mut self) -> Result<(), E> {
        for pin in self.segments.iter_mut() {
            pin.set_low()?;
        }
        Ok(())
    }
}
