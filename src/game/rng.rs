/// Xorshift32 generator used to pick obstacle rows
#[derive(Clone, Debug)]
pub struct Rng(u32);

impl Rng {
    // Xorshift never leaves the zero state
    const FALLBACK_SEED: u32 = 0x2545_F491;

    pub const fn new(seed: u32) -> Self {
        if seed == 0 {
            Self(Self::FALLBACK_SEED)
        } else {
            Self(seed)
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 17;
        self.0 ^= self.0 << 5;
        self.0
    }

    /// Value in `0..max`; `max` of zero yields zero
    pub fn below(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        self.next_u32() % max
    }
}

impl Default for Rng {
    fn default() -> Self {
        Self::new(Self::FALLBACK_SEED)
    }
}
