//! Exposed synchronization points shared with the (out-of-scope) config
//! surface.

use embassy_sync::signal::Signal;
use padmac_types::macro_options::MacroOptions;

use crate::RawMutex;

/// New raw configuration from the host. The runner drains this between
/// ticks, so the engine never observes a partially-written bank; a
/// second signal before the next tick simply replaces the first.
pub static CONFIG_UPDATE: Signal<RawMutex, MacroOptions> = Signal::new();
