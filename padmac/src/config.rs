//! Validated macro configuration.
//!
//! The host ships loosely-typed [`MacroOptions`] records (numeric flags,
//! numeric type codes, signed durations). Everything is checked once
//! here, at load time, so the tick loop only ever sees a fixed-shape
//! [`MacroBank`] and never validates anything at playback time. A failed
//! load rejects the whole configuration; the engine keeps the previous
//! bank active.

use core::fmt;

use embassy_time::Duration;
use heapless::{String, Vec};
use padmac_types::buttons::GamepadButtons;
use padmac_types::macro_options::{
    MACRO_TYPE_HOLD_REPEAT, MACRO_TYPE_PRESS, MACRO_TYPE_TOGGLE, MacroEntry, MacroInput, MacroOptions,
};
use padmac_types::{MACRO_LABEL_LEN, MAX_MACRO_FRAMES, MAX_MACRO_NUM};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// More slots than the bank holds.
    TooManyMacros,
    /// More frames than a slot holds, with the offending slot index.
    TooManyFrames(usize),
    /// A hold or wait duration below zero, with the offending slot index.
    NegativeDuration(usize),
    /// Trigger button is not exactly one defined button.
    InvalidTriggerButton(usize),
    /// Unknown numeric macro type code.
    InvalidMacroType(usize),
    /// Enabled slot with neither a trigger button nor a non-empty first
    /// frame to level-match against.
    MissingActivation(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::TooManyMacros => write!(f, "too many macro slots"),
            ConfigError::TooManyFrames(i) => write!(f, "macro {}: too many frames", i),
            ConfigError::NegativeDuration(i) => write!(f, "macro {}: negative duration", i),
            ConfigError::InvalidTriggerButton(i) => write!(f, "macro {}: invalid trigger button", i),
            ConfigError::InvalidMacroType(i) => write!(f, "macro {}: unknown macro type", i),
            ConfigError::MissingActivation(i) => write!(f, "macro {}: no trigger condition", i),
        }
    }
}

/// How a macro sequence plays once its trigger fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MacroMode {
    /// Play the sequence through once.
    Press,
    /// Loop the sequence for as long as the trigger is held.
    HoldRepeat,
    /// One trigger press starts playback, the next stops it.
    Toggle,
}

impl MacroMode {
    fn from_code(code: u8) -> Option<Self> {
        match code {
            MACRO_TYPE_PRESS => Some(MacroMode::Press),
            MACRO_TYPE_HOLD_REPEAT => Some(MacroMode::HoldRepeat),
            MACRO_TYPE_TOGGLE => Some(MacroMode::Toggle),
            _ => None,
        }
    }
}

/// The condition that starts a macro.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MacroTrigger {
    /// A dedicated button, edge-triggered: fires on the tick the button
    /// goes from released to pressed.
    Button(GamepadButtons),
    /// A button combination, level-matched: eligible whenever every
    /// button of the mask is held.
    Combo(GamepadButtons),
}

impl MacroTrigger {
    /// Buttons that make up the trigger condition. These never count as
    /// interrupting input while the macro plays.
    pub fn buttons(&self) -> GamepadButtons {
        match *self {
            MacroTrigger::Button(b) => b,
            MacroTrigger::Combo(m) => m,
        }
    }

    /// The condition is satisfied by the current snapshot.
    pub fn held(&self, live: GamepadButtons) -> bool {
        match *self {
            MacroTrigger::Button(b) => live.contains(b),
            MacroTrigger::Combo(m) => !m.is_empty() && live.contains(m),
        }
    }

    /// The condition became satisfied on this tick.
    pub fn edge(&self, live: GamepadButtons, prev: GamepadButtons) -> bool {
        self.held(live) && !self.held(prev)
    }
}

/// One timed step: `buttons` asserted for `hold`, then nothing for
/// `wait`, live input passing through during the gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    pub buttons: GamepadButtons,
    pub hold: Duration,
    pub wait: Duration,
}

impl Frame {
    pub const fn new(buttons: GamepadButtons, hold: Duration, wait: Duration) -> Self {
        Self { buttons, hold, wait }
    }
}

/// One validated macro slot.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MacroSlot {
    pub enabled: bool,
    pub exclusive: bool,
    pub interruptible: bool,
    /// Expose playback on the board LED. Cosmetic only.
    pub show_frames: bool,
    pub mode: MacroMode,
    pub trigger: MacroTrigger,
    pub label: String<MACRO_LABEL_LEN>,
    pub frames: Vec<Frame, MAX_MACRO_FRAMES>,
}

impl MacroSlot {
    /// Build a slot from parts, for engine construction without going
    /// through the wire records.
    pub fn new(
        mode: MacroMode,
        trigger: MacroTrigger,
        frames: &[Frame],
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            enabled: true,
            exclusive: true,
            interruptible: true,
            show_frames: true,
            mode,
            trigger,
            label: String::new(),
            frames: Vec::from_slice(frames).map_err(|_| ConfigError::TooManyFrames(0))?,
        })
    }
}

/// Fixed-capacity ordered macro slot table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MacroBank {
    pub slots: Vec<MacroSlot, MAX_MACRO_NUM>,
}

impl MacroBank {
    pub fn from_slots(slots: &[MacroSlot]) -> Result<Self, ConfigError> {
        Ok(Self {
            slots: Vec::from_slice(slots).map_err(|_| ConfigError::TooManyMacros)?,
        })
    }
}

/// The whole macro configuration, replaced atomically between ticks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MacroConfig {
    pub bank: MacroBank,
    pub board_led_enabled: bool,
}

impl MacroConfig {
    pub fn new(bank: MacroBank, board_led_enabled: bool) -> Self {
        Self {
            bank,
            board_led_enabled,
        }
    }

    /// Validate a raw host configuration into the fixed-shape model.
    pub fn try_from_options(options: &MacroOptions) -> Result<Self, ConfigError> {
        let mut bank = MacroBank::default();
        for (i, entry) in options.macro_list.iter().enumerate() {
            let slot = validate_entry(i, entry)?;
            bank.slots.push(slot).map_err(|_| ConfigError::TooManyMacros)?;
        }
        Ok(Self {
            bank,
            board_led_enabled: options.board_led_enabled != 0,
        })
    }
}

fn validate_frame(slot_idx: usize, input: &MacroInput) -> Result<Frame, ConfigError> {
    if input.duration < 0 || input.wait_duration < 0 {
        return Err(ConfigError::NegativeDuration(slot_idx));
    }
    Ok(Frame {
        buttons: GamepadButtons::from_bits(input.button_mask),
        hold: Duration::from_micros(input.duration as u64),
        wait: Duration::from_micros(input.wait_duration as u64),
    })
}

fn validate_entry(slot_idx: usize, entry: &MacroEntry) -> Result<MacroSlot, ConfigError> {
    let mode = MacroMode::from_code(entry.macro_type).ok_or(ConfigError::InvalidMacroType(slot_idx))?;

    let mut frames: Vec<Frame, MAX_MACRO_FRAMES> = Vec::new();
    for input in &entry.macro_inputs {
        let frame = validate_frame(slot_idx, input)?;
        frames.push(frame).map_err(|_| ConfigError::TooManyFrames(slot_idx))?;
    }

    let enabled = entry.enabled != 0;
    let trigger = if entry.use_macro_trigger_button != 0 {
        let button = GamepadButtons::from_bits(entry.macro_trigger_button);
        if !button.is_single_button() || !GamepadButtons::ALL.contains(button) {
            return Err(ConfigError::InvalidTriggerButton(slot_idx));
        }
        MacroTrigger::Button(button)
    } else {
        // No explicit activation field exists on the wire: a combo macro
        // level-matches its first frame's button mask.
        let activation = frames.first().map(|f| f.buttons).unwrap_or(GamepadButtons::NONE);
        if enabled && activation.is_empty() {
            return Err(ConfigError::MissingActivation(slot_idx));
        }
        MacroTrigger::Combo(activation)
    };

    Ok(MacroSlot {
        enabled,
        exclusive: entry.exclusive != 0,
        interruptible: entry.interruptible != 0,
        show_frames: entry.show_frames != 0,
        mode,
        trigger,
        label: entry.macro_label.clone(),
        frames,
    })
}
