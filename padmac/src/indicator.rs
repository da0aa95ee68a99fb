//! Board LED indicator for macro playback.

use embedded_hal::digital::{OutputPin, PinState};

/// A single board LED driven while a macro plays.
///
/// The pin is optional so boards without an indicator use the same code
/// path; writes only happen on state changes.
pub struct BoardLed<P: OutputPin> {
    pin: Option<P>,
    on_state: PinState,
    lit: bool,
}

impl<P: OutputPin> BoardLed<P> {
    pub fn new(pin: P, on_state: PinState) -> Self {
        Self {
            pin: Some(pin),
            on_state,
            lit: false,
        }
    }

    /// A board without an indicator LED.
    pub fn disabled() -> Self {
        Self {
            pin: None,
            on_state: PinState::High,
            lit: false,
        }
    }

    pub fn set(&mut self, on: bool) -> Result<(), P::Error> {
        if on == self.lit {
            return Ok(());
        }
        if let Some(pin) = &mut self.pin {
            let state = if on { self.on_state } else { !self.on_state };
            pin.set_state(state)?;
        }
        self.lit = on;
        Ok(())
    }

    pub fn is_lit(&self) -> bool {
        self.lit
    }
}
