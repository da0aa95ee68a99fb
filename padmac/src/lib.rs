//! Tick-driven input macro engine for gamepad firmware.
//!
//! A fixed bank of up to [`padmac_types::MAX_MACRO_NUM`] macros, each a
//! timed sequence of button-mask frames, played against the live input
//! poll loop. Each tick the engine evaluates trigger conditions, walks
//! the active sequence, arbitrates conflicts with live input, and
//! produces the effective button state reported downstream.
//!
//! The engine core ([`engine::MacroEngine::tick`]) is synchronous and
//! deterministic; [`runner::macro_task`] wraps it in the board's fixed
//! period poll loop and applies host configuration updates between
//! ticks.

#![no_std]

#[macro_use]
mod fmt;

pub mod channel;
pub mod config;
pub mod engine;
pub mod indicator;
pub mod runner;
pub mod sequencer;
pub mod trigger;

pub use padmac_types::buttons::GamepadButtons;
pub use padmac_types::macro_options;
pub use padmac_types::{MACRO_LABEL_LEN, MAX_MACRO_FRAMES, MAX_MACRO_NUM};

/// Raw mutex used for all cross-task primitives in this crate.
pub type RawMutex = embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
