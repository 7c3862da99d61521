//! Half-step coil sequence for a 4-coil unipolar stepper (28BYJ-48).
//!
//! The sequence alternates between one and two energised coils:
//!
//! ```text
//!   index   0     1     2     3     4     5     6     7
//!   coils   A     AB    B     BC    C     CD    D     DA
//!   mask    0x01  0x03  0x02  0x06  0x04  0x0C  0x08  0x09
//! ```

use crate::config::COIL_MASK;
use crate::state::Direction;

/// Number of entries in one electrical cycle.
pub const SEQUENCE_LEN: usize = 8;

/// 4-bit coil energisation mask. Bit `n` drives coil line `n`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CoilPattern(u8);

impl CoilPattern {
    /// All coils de-energised.
    pub const OFF: Self = Self(0);

    /// Build a pattern, discarding anything above the coil nibble.
    pub const fn new(bits: u8) -> Self {
        Self(bits & COIL_MASK)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether coil line `coil` (0..4) is energised.
    pub const fn is_energized(self, coil: usize) -> bool {
        coil < 4 && self.0 & (1 << coil) != 0
    }

    pub const fn is_off(self) -> bool {
        self.0 == 0
    }
}

/// The half-step sequence, clockwise order.
pub const HALF_STEP: [CoilPattern; SEQUENCE_LEN] = [
    CoilPattern::new(0x01),
    CoilPattern::new(0x03),
    CoilPattern::new(0x02),
    CoilPattern::new(0x06),
    CoilPattern::new(0x04),
    CoilPattern::new(0x0C),
    CoilPattern::new(0x08),
    CoilPattern::new(0x09),
];

/// True when every entry differs from its cyclic successor by exactly one bit.
pub const fn is_half_step_sequence(seq: &[CoilPattern; SEQUENCE_LEN]) -> bool {
    let mut i = 0;
    while i < SEQUENCE_LEN {
        let next = seq[(i + 1) % SEQUENCE_LEN];
        if (seq[i].0 ^ next.0).count_ones() != 1 {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = assert!(is_half_step_sequence(&HALF_STEP));

/// Position within [`HALF_STEP`], always in `0..SEQUENCE_LEN`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepIndex(u8);

impl StepIndex {
    pub const ZERO: Self = Self(0);

    /// Wraps `raw` into range.
    pub const fn new(raw: u8) -> Self {
        Self(raw % SEQUENCE_LEN as u8)
    }

    pub const fn get(self) -> usize {
        self.0 as usize
    }

    pub const fn pattern(self) -> CoilPattern {
        HALF_STEP[self.0 as usize]
    }

    /// Next index for `direction`: `+1 mod 8` clockwise, `(i - 1 + 8) mod 8`
    /// counter-clockwise.
    pub const fn advance(self, direction: Direction) -> Self {
        let len = SEQUENCE_LEN as u8;
        match direction {
            Direction::Clockwise => Self((self.0 + 1) % len),
            Direction::CounterClockwise => Self((self.0 + len - 1) % len),
        }
    }
}
