//! The per-macro playback state machine.
//!
//! States: `Idle`, `Holding(i)`, `Waiting(i)`, `Done`. While holding,
//! the frame's button mask is the active output; while waiting, live
//! input passes through. `Done` settles back to `Idle` at the start of
//! the next tick. The sequencer is the only owner of playback run-state;
//! it assumes a validated bank and has no failure path at runtime.

use embassy_time::Duration;
use padmac_types::buttons::GamepadButtons;

use crate::config::Frame;

const ZERO: Duration = Duration::from_ticks(0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequencerState {
    Idle,
    /// Asserting `frames[i].buttons`.
    Holding(usize),
    /// In the pass-through gap after frame `i`.
    Waiting(usize),
    /// Finished this tick; re-enters `Idle` on the next one.
    Done,
}

#[derive(Debug)]
pub struct Sequencer {
    state: SequencerState,
    /// Slot being played. Meaningful while not `Idle`.
    slot: usize,
    /// Time spent in the current phase.
    elapsed: Duration,
}

impl Default for Sequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl Sequencer {
    pub const fn new() -> Self {
        Self {
            state: SequencerState::Idle,
            slot: 0,
            elapsed: ZERO,
        }
    }

    pub fn state(&self) -> SequencerState {
        self.state
    }

    /// The slot whose run-state this is, while not `Idle`.
    pub fn active_slot(&self) -> Option<usize> {
        match self.state {
            SequencerState::Idle => None,
            _ => Some(self.slot),
        }
    }

    /// A sequence is being walked (holding or waiting).
    pub fn is_playing(&self) -> bool {
        matches!(self.state, SequencerState::Holding(_) | SequencerState::Waiting(_))
    }

    /// `Done` settles to `Idle` unconditionally at the start of a tick.
    pub fn settle(&mut self) {
        if self.state == SequencerState::Done {
            self.state = SequencerState::Idle;
        }
    }

    /// Begin playback of `slot`. Zero-duration leading frames are
    /// skipped within the same call; an empty sequence goes straight to
    /// `Done` without an observable frame.
    pub fn start(&mut self, slot: usize, frames: &[Frame]) {
        debug_assert_eq!(self.state, SequencerState::Idle);
        self.slot = slot;
        self.elapsed = ZERO;
        if frames.is_empty() {
            self.state = SequencerState::Done;
            return;
        }
        self.state = SequencerState::Holding(0);
        self.run(frames, false);
    }

    /// Account `dt` of elapsed time and take every transition it pays
    /// for. `repeat` wraps the sequence to frame 0 instead of finishing,
    /// for hold-repeat macros whose trigger is still held.
    pub fn advance(&mut self, frames: &[Frame], dt: Duration, repeat: bool) {
        if !self.is_playing() {
            return;
        }
        self.elapsed += dt;
        self.run(frames, repeat);
    }

    /// Abort playback immediately.
    pub fn interrupt(&mut self) {
        if self.is_playing() {
            self.elapsed = ZERO;
            self.state = SequencerState::Done;
        }
    }

    /// The mask asserted this tick, if any. `Holding` only; waits are
    /// pass-through.
    pub fn output(&self, frames: &[Frame]) -> Option<GamepadButtons> {
        match self.state {
            SequencerState::Holding(i) => {
                debug_assert!(i < frames.len());
                frames.get(i).map(|f| f.buttons)
            }
            _ => None,
        }
    }

    fn run(&mut self, frames: &[Frame], repeat: bool) {
        // A repeat of an all-zero-length sequence would never consume
        // elapsed time; let it finish instead.
        let repeat = repeat && frames.iter().any(|f| f.hold > ZERO || f.wait > ZERO);
        loop {
            match self.state {
                SequencerState::Holding(i) => {
                    let hold = frames[i].hold;
                    if self.elapsed >= hold {
                        self.elapsed -= hold;
                        self.state = SequencerState::Waiting(i);
                    } else {
                        break;
                    }
                }
                SequencerState::Waiting(i) => {
                    let wait = frames[i].wait;
                    if self.elapsed < wait {
                        break;
                    }
                    self.elapsed -= wait;
                    if i + 1 < frames.len() {
                        self.state = SequencerState::Holding(i + 1);
                    } else if repeat {
                        self.state = SequencerState::Holding(0);
                    } else {
                        self.elapsed = ZERO;
                        self.state = SequencerState::Done;
                        break;
                    }
                }
                SequencerState::Idle | SequencerState::Done => break,
            }
        }
    }
}
