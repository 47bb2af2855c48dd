//! Clock types, constants, and global state.

pub use crate::pac::vals::{Cosc as ClockSource, Frcdiv as FrcPostscaler, Pbdiv as PbPrescaler};

use core::sync::atomic::{AtomicU32, Ordering};

use crate::time::Hertz;

// =============================================================================
// Constants
// =============================================================================

/// Fast RC oscillator, factory trimmed to 8 MHz.
pub const FRC_FREQ: Hertz = Hertz(8_000_000);
/// Primary oscillator. The crystal fitted on the supported boards.
pub const POSC_FREQ: Hertz = Hertz(20_000_000);
/// Secondary oscillator, a 32.768 kHz watch crystal.
pub const SOSC_FREQ: Hertz = Hertz(32_768);
/// Low-power RC oscillator.
// NOTE: +/-15% over voltage and temperature, not suitable for timekeeping
pub const LPRC_FREQ: Hertz = Hertz(31_250);

// =============================================================================
// Clock State
// =============================================================================

/// Resolved core clock frequencies.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Clocks {
    /// System clock feeding the CPU and the core timer.
    pub sysclk: Hertz,
    /// Peripheral bus clock feeding timers, UARTs and friends.
    pub pbclk: Hertz,
}

impl Clocks {
    /// Clock state at power-on reset: FRC driving SYSCLK, PBDIV at 1:8.
    pub const POWER_ON: Clocks = Clocks {
        sysclk: FRC_FREQ,
        pbclk: Hertz(FRC_FREQ.0 / 8),
    };
}

/// Cached SYSCLK frequency. Seeded with the power-on value so that `clocks()`
/// is meaningful even before `init()` or `update()` has run.
static SYSCLK_FREQ: AtomicU32 = AtomicU32::new(Clocks::POWER_ON.sysclk.0);

/// Cached PBCLK frequency.
static PBCLK_FREQ: AtomicU32 = AtomicU32::new(Clocks::POWER_ON.pbclk.0);

/// Sets the cached clock frequencies.
pub(crate) fn set_freqs(freqs: Clocks) {
    debug!("osc: {:?}", freqs);
    SYSCLK_FREQ.store(freqs.sysclk.0, Ordering::Relaxed);
    PBCLK_FREQ.store(freqs.pbclk.0, Ordering::Relaxed);
}

/// Get the cached clock frequencies.
///
/// The cache is refreshed by [`init`](crate::init), [`update`](super::update)
/// and [`switch`](super::switch); until the first refresh it reports the
/// power-on reset state.
pub fn clocks() -> Clocks {
    Clocks {
        sysclk: Hertz(SYSCLK_FREQ.load(Ordering::Relaxed)),
        pbclk: Hertz(PBCLK_FREQ.load(Ordering::Relaxed)),
    }
}

/// Get the cached system clock frequency.
pub fn sysclk() -> Hertz {
    Hertz(SYSCLK_FREQ.load(Ordering::Relaxed))
}

/// Get the cached peripheral bus clock frequency.
pub fn pbclk() -> Hertz {
    Hertz(PBCLK_FREQ.load(Ordering::Relaxed))
}
