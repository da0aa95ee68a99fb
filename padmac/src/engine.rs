//! The macro engine: one `tick` per poll-loop iteration.
//!
//! Tick order is fixed: settle the sequencer, handle the running macro
//! (toggle stop, interrupt by live input, advance), otherwise evaluate
//! triggers and start at most one macro, then composite the effective
//! output. Only one macro plays at a time regardless of the `exclusive`
//! flag; under the no-queueing policy a second trigger is dropped either
//! way, so `exclusive` is carried as configuration without a distinct
//! observable effect here.

use embassy_time::Duration;
use padmac_types::buttons::GamepadButtons;
use padmac_types::macro_options::MacroOptions;

use crate::config::{ConfigError, MacroConfig, MacroMode};
use crate::sequencer::{Sequencer, SequencerState};
use crate::trigger;

/// Effective input state for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickOutput {
    /// Button state reported downstream: a frame mask while a frame is
    /// held, live input otherwise.
    pub buttons: GamepadButtons,
    /// Board LED indicator state.
    pub led: bool,
}

pub struct MacroEngine {
    config: MacroConfig,
    seq: Sequencer,
    /// Previous tick's snapshot, for edge-triggered conditions.
    last_input: GamepadButtons,
}

impl MacroEngine {
    pub fn new(config: MacroConfig) -> Self {
        Self {
            config,
            seq: Sequencer::new(),
            last_input: GamepadButtons::NONE,
        }
    }

    /// Validate raw host options and build an engine from them.
    pub fn from_options(options: &MacroOptions) -> Result<Self, ConfigError> {
        Ok(Self::new(MacroConfig::try_from_options(options)?))
    }

    pub fn config(&self) -> &MacroConfig {
        &self.config
    }

    pub fn state(&self) -> SequencerState {
        self.seq.state()
    }

    /// Replace the whole configuration. Must be called between ticks.
    ///
    /// On error the previous configuration stays active. On success the
    /// run-state is reset to `Idle`: the old state may reference a slot
    /// whose frames changed, and is never carried across a swap.
    pub fn apply_config(&mut self, options: &MacroOptions) -> Result<(), ConfigError> {
        let config = MacroConfig::try_from_options(options)?;
        info!(
            "Macro config replaced: {} slots, board led {}",
            config.bank.slots.len(),
            config.board_led_enabled
        );
        self.config = config;
        self.seq = Sequencer::new();
        Ok(())
    }

    /// Run one poll tick: `live` is the current input snapshot, `dt` the
    /// time elapsed since the previous tick.
    pub fn tick(&mut self, live: GamepadButtons, dt: Duration) -> TickOutput {
        let prev = self.last_input;
        self.last_input = live;

        self.seq.settle();

        if self.seq.is_playing() {
            let slot_idx = self.seq.active_slot().unwrap_or_else(|| unreachable!());
            let slot = &self.config.bank.slots[slot_idx];

            // A toggle macro's own trigger stops it, regardless of the
            // interruptible flag.
            if slot.mode == MacroMode::Toggle && slot.trigger.edge(live, prev) {
                debug!("Macro {} stopped by toggle", slot_idx);
                self.seq.interrupt();
                return TickOutput { buttons: live, led: false };
            }

            // Live input outside the held frame and the macro's own
            // trigger cancels an interruptible macro the same tick.
            let held = self.seq.output(&slot.frames).unwrap_or(GamepadButtons::NONE);
            let outside = live & !(held | slot.trigger.buttons());
            if slot.interruptible && !outside.is_empty() {
                debug!("Macro {} interrupted by live input", slot_idx);
                self.seq.interrupt();
                return TickOutput { buttons: live, led: false };
            }

            let repeat = slot.mode == MacroMode::HoldRepeat && slot.trigger.held(live);
            self.seq.advance(&slot.frames, dt, repeat);
        } else if self.seq.state() == SequencerState::Idle
            && let Some(idx) = trigger::next_start(&self.config.bank, live, prev)
        {
            // Single run-state: a start request is only ever honored
            // from Idle, later triggers this tick are already dropped by
            // the evaluator's lowest-index pick.
            debug!("Macro {} started", idx);
            self.seq.start(idx, &self.config.bank.slots[idx].frames);
        }

        self.composite(live)
    }

    fn composite(&self, live: GamepadButtons) -> TickOutput {
        match self.seq.state() {
            SequencerState::Holding(_) | SequencerState::Waiting(_) => {
                let slot_idx = self.seq.active_slot().unwrap_or_else(|| unreachable!());
                let slot = &self.config.bank.slots[slot_idx];
                let buttons = match self.seq.output(&slot.frames) {
                    // A held frame overrides live input entirely.
                    Some(mask) => mask,
                    // Wait gaps pass live input through.
                    None => live,
                };
                TickOutput {
                    buttons,
                    led: self.config.board_led_enabled && slot.show_frames,
                }
            }
            SequencerState::Idle | SequencerState::Done => TickOutput {
                buttons: live,
                led: false,
            },
        }
    }
}
