use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

use postcard::experimental::max_size::MaxSize;
use serde::{Deserialize, Serialize};

/// Gamepad button state as a 32-bit mask, one bit per input.
///
/// Bit positions follow the board's web-config mask ordering: the four
/// action buttons first, then shoulders/triggers, menu/stick buttons,
/// aux, and the digital d-pad up at bits 16..=19.
#[derive(Serialize, Deserialize, MaxSize, Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GamepadButtons(u32);

impl GamepadButtons {
    pub const NONE: Self = Self(0);

    pub const B1: Self = Self(1 << 0);
    pub const B2: Self = Self(1 << 1);
    pub const B3: Self = Self(1 << 2);
    pub const B4: Self = Self(1 << 3);
    pub const L1: Self = Self(1 << 4);
    pub const R1: Self = Self(1 << 5);
    pub const L2: Self = Self(1 << 6);
    pub const R2: Self = Self(1 << 7);
    pub const S1: Self = Self(1 << 8);
    pub const S2: Self = Self(1 << 9);
    pub const L3: Self = Self(1 << 10);
    pub const R3: Self = Self(1 << 11);
    pub const A1: Self = Self(1 << 12);
    pub const A2: Self = Self(1 << 13);
    pub const FN: Self = Self(1 << 14);
    pub const DPAD_UP: Self = Self(1 << 16);
    pub const DPAD_DOWN: Self = Self(1 << 17);
    pub const DPAD_LEFT: Self = Self(1 << 18);
    pub const DPAD_RIGHT: Self = Self(1 << 19);

    /// Every bit position that maps to a defined button.
    pub const ALL: Self = Self(0x000F_7FFF);

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn into_bits(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// All buttons of `other` are pressed in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// At least one button of `other` is pressed in `self`.
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Exactly one bit set, i.e. a single physical button.
    pub const fn is_single_button(self) -> bool {
        self.0.count_ones() == 1
    }
}

impl BitOr for GamepadButtons {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}
impl BitAnd for GamepadButtons {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}
impl Not for GamepadButtons {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}
impl BitOrAssign for GamepadButtons {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}
impl BitAndAssign for GamepadButtons {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = *self & rhs;
    }
}
