//! Trigger evaluation.
//!
//! Pure functions of the bank and the last two input snapshots; all
//! run-state mutation happens in the sequencer. At most one start
//! request per tick: when several slots become eligible at once, the
//! lowest index wins so the firmware behaves identically across runs.

use padmac_types::buttons::GamepadButtons;

use crate::config::{MacroBank, MacroSlot, MacroTrigger};

/// The slot that may start this tick, if any.
///
/// Button triggers fire on a press edge; combo triggers are
/// level-matched against the live snapshot. Disabled slots are never
/// considered.
pub fn next_start(bank: &MacroBank, live: GamepadButtons, prev: GamepadButtons) -> Option<usize> {
    bank.slots
        .iter()
        .position(|slot| slot.enabled && eligible(slot, live, prev))
}

fn eligible(slot: &MacroSlot, live: GamepadButtons, prev: GamepadButtons) -> bool {
    match slot.trigger {
        MacroTrigger::Button(_) => slot.trigger.edge(live, prev),
        MacroTrigger::Combo(_) => slot.trigger.held(live),
    }
}
