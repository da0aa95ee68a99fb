//! # padmac types
//!
//! Shared type definitions for the padmac input-macro engine.
//!
//! - [`buttons`] - the 32-bit gamepad button mask and named buttons
//! - [`macro_options`] - wire-shaped macro configuration records, as
//!   produced by the board's web configurator
//!
//! The engine crate (`padmac`) validates [`macro_options`] records into
//! its fixed-shape configuration model; host-side tooling serializes
//! them with postcard.

#![no_std]

pub mod buttons;
pub mod macro_options;

/// Number of macro slots on the board.
pub const MAX_MACRO_NUM: usize = 6;
/// Max frames in a single macro sequence.
pub const MAX_MACRO_FRAMES: usize = 30;
/// Max length of a macro's display label, in bytes.
pub const MACRO_LABEL_LEN: usize = 64;
