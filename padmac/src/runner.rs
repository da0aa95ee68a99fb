//! The board-side tick loop around [`MacroEngine`].
//!
//! Seams to the rest of the firmware are traits: an [`InputSource`]
//! supplying the live snapshot each tick and an [`OutputSink`] consuming
//! the effective state. Both run inside the tick, so they must not
//! block.

use embassy_time::{Duration, Ticker};
use embedded_hal::digital::OutputPin;
use padmac_types::buttons::GamepadButtons;

use crate::channel::CONFIG_UPDATE;
use crate::engine::{MacroEngine, TickOutput};
use crate::indicator::BoardLed;

/// Fixed period of the macro poll loop.
pub const TICK_PERIOD: Duration = Duration::from_micros(1000);

/// Supplies the live input snapshot for a tick.
pub trait InputSource {
    fn snapshot(&mut self) -> GamepadButtons;
}

/// Consumes the effective input state produced for a tick.
pub trait OutputSink {
    fn write(&mut self, output: TickOutput);
}

/// Run the macro engine forever at [`TICK_PERIOD`].
///
/// Host configuration updates arriving on [`CONFIG_UPDATE`] are applied
/// between ticks; a rejected configuration is logged and the previous
/// one stays active.
pub async fn macro_task<In, Out, Led>(
    engine: &mut MacroEngine,
    input: &mut In,
    output: &mut Out,
    led: &mut BoardLed<Led>,
) where
    In: InputSource,
    Out: OutputSink,
    Led: OutputPin,
{
    let mut ticker = Ticker::every(TICK_PERIOD);
    loop {
        ticker.next().await;

        if let Some(options) = CONFIG_UPDATE.try_take()
            && let Err(e) = engine.apply_config(&options)
        {
            warn!("Rejected macro config: {:?}", e);
        }

        let live = input.snapshot();
        let out = engine.tick(live, TICK_PERIOD);
        output.write(out);
        if led.set(out.led).is_err() {
            error!("Failed to drive macro board led");
        }
    }
}
