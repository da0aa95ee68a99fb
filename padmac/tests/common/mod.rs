#![allow(dead_code)]

use embassy_time::Duration;
use padmac::GamepadButtons;
use padmac::config::{Frame, MacroBank, MacroConfig, MacroMode, MacroSlot, MacroTrigger};
use padmac::engine::{MacroEngine, TickOutput};

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// Poll period used by the original firmware's frame data.
pub const TICK: Duration = Duration::from_micros(16_666);

pub fn buttons(bits: u32) -> GamepadButtons {
    GamepadButtons::from_bits(bits)
}

pub fn frame(mask: GamepadButtons, hold_ticks: u64, wait_ticks: u64) -> Frame {
    Frame::new(mask, TICK * hold_ticks as u32, TICK * wait_ticks as u32)
}

pub fn macro_slot(mode: MacroMode, trigger: MacroTrigger, frames: &[Frame]) -> MacroSlot {
    MacroSlot::new(mode, trigger, frames).expect("too many frames")
}

pub fn engine_with(slots: &[MacroSlot]) -> MacroEngine {
    let bank = MacroBank::from_slots(slots).expect("too many slots");
    MacroEngine::new(MacroConfig::new(bank, true))
}

/// Tick the engine once per trace entry at the fixed [`TICK`] period and
/// collect every effective output.
pub fn run_trace(engine: &mut MacroEngine, trace: &[GamepadButtons]) -> Vec<TickOutput> {
    trace.iter().map(|&live| engine.tick(live, TICK)).collect()
}

pub fn output_masks(outputs: &[TickOutput]) -> Vec<u32> {
    outputs.iter().map(|o| o.buttons.into_bits()).collect()
}
