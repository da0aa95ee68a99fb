//! Wire-shaped macro configuration records.
//!
//! These mirror the records the web configurator ships to the board:
//! flags are loose integers, the macro type is a bare numeric code, and
//! durations are signed so malformed values survive transport and can be
//! rejected by the engine's validation instead of wrapping silently.

use heapless::{String, Vec};
use postcard::experimental::max_size::MaxSize;
use serde::{Deserialize, Serialize};

use crate::{MACRO_LABEL_LEN, MAX_MACRO_FRAMES, MAX_MACRO_NUM};

/// Numeric macro type codes used on the wire.
pub const MACRO_TYPE_PRESS: u8 = 1;
pub const MACRO_TYPE_HOLD_REPEAT: u8 = 2;
pub const MACRO_TYPE_TOGGLE: u8 = 3;

/// One timed step of a macro: a button mask held for `duration`
/// microseconds, followed by `wait_duration` microseconds of nothing.
#[derive(Serialize, Deserialize, MaxSize, Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MacroInput {
    pub button_mask: u32,
    pub duration: i64,
    pub wait_duration: i64,
}

/// One macro slot as configured by the host.
#[derive(Serialize, Deserialize, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MacroEntry {
    pub enabled: u8,
    pub exclusive: u8,
    pub interruptible: u8,
    pub show_frames: u8,
    /// 1 = press, 2 = hold-repeat, 3 = toggle
    pub macro_type: u8,
    pub use_macro_trigger_button: u8,
    /// Button mask of the dedicated trigger button, when
    /// `use_macro_trigger_button` is set.
    pub macro_trigger_button: u32,
    pub macro_label: String<MACRO_LABEL_LEN>,
    pub macro_inputs: Vec<MacroInput, MAX_MACRO_FRAMES>,
}

/// The full macro addon configuration, replaced as one unit.
#[derive(Serialize, Deserialize, Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MacroOptions {
    pub board_led_enabled: u8,
    pub macro_list: Vec<MacroEntry, MAX_MACRO_NUM>,
}
