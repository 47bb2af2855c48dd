//! Boot-time clock programming and the guarded oscillator switch.

use crate::pac;
use crate::pac::vals::{Frcdiv, Pbdiv};
use crate::time::Hertz;

use super::{update, ClockSource};

/// First word of the SYSKEY unlock sequence.
const UNLOCK_KEY1: u32 = 0xAA99_6655;
/// Second word of the SYSKEY unlock sequence.
const UNLOCK_KEY2: u32 = 0x5566_99AA;

/// Unlock the SYSKEY-protected registers (OSCCON among them).
///
/// The leading zero write forces the key state machine back to locked so
/// the two-word sequence starts from a known state.
pub fn syskey_unlock() {
    pac::CFG.syskey().write_value(0);
    pac::CFG.syskey().write_value(UNLOCK_KEY1);
    pac::CFG.syskey().write_value(UNLOCK_KEY2);
}

/// Relock the SYSKEY-protected registers. Any value that is not part of the
/// key sequence locks, this one is just recognizable in a register dump.
pub fn syskey_lock() {
    pac::CFG.syskey().write_value(0x3333_3333);
}

// =============================================================================
// Configuration
// =============================================================================

/// Clock configuration applied by [`init`](crate::init).
///
/// The clock *source* out of reset is chosen by the FNOSC fuse, not by this
/// struct; set [`source`](Self::source) to retarget it during init through
/// the same guarded sequence as [`switch`].
#[derive(Clone, Copy)]
#[non_exhaustive]
pub struct Config {
    /// Peripheral bus divider, programmed away from its 1:8 reset value.
    pub pbdiv: Pbdiv,
    /// FRC postscaler used when the selected source is the divided FRC.
    pub frcdiv: Frcdiv,
    /// Keep the secondary oscillator running.
    pub sosc: bool,
    /// When set, switch the system clock to this source during init.
    pub source: Option<ClockSource>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Full-speed peripheral bus (1:1), FRC postscaler at 1:2, source left
    /// on whatever the FNOSC fuse selected.
    pub const fn new() -> Self {
        Self {
            pbdiv: Pbdiv::DIV1,
            frcdiv: Frcdiv::DIV2,
            sosc: false,
            source: None,
        }
    }

    pub const fn with_pbdiv(mut self, pbdiv: Pbdiv) -> Self {
        self.pbdiv = pbdiv;
        self
    }

    pub const fn with_frcdiv(mut self, frcdiv: Frcdiv) -> Self {
        self.frcdiv = frcdiv;
        self
    }

    pub const fn with_sosc(mut self, sosc: bool) -> Self {
        self.sosc = sosc;
        self
    }

    pub const fn with_source(mut self, source: ClockSource) -> Self {
        self.source = Some(source);
        self
    }
}

// =============================================================================
// Clock switch
// =============================================================================

/// Switch the system clock to `source` and return the re-resolved SYSCLK.
///
/// Runs the SYSKEY-guarded NOSC write and sets OSWEN to request the switch,
/// then busy-waits for hardware to clear OSWEN. The whole sequence runs with
/// interrupts masked so no handler can observe a half-programmed OSCCON.
///
/// Blocks until the hardware completes the switch; there is no timeout. If
/// the requested oscillator never becomes ready (a missing crystal, say)
/// this never returns.
pub fn switch(source: ClockSource) -> Hertz {
    trace!("osc: switch to {:?}", source);
    critical_section::with(|_| {
        syskey_unlock();
        pac::OSC.osccon().modify(|w| {
            w.set_nosc(source);
            w.set_oswen(true);
        });
        syskey_lock();
        while pac::OSC.osccon().read().oswen() {}
    });
    update()
}

/// Program the boot clock configuration and seed the frequency cache.
pub(crate) unsafe fn init(config: Config) {
    critical_section::with(|_| {
        syskey_unlock();
        pac::OSC.osccon().modify(|w| {
            w.set_pbdiv(config.pbdiv);
            w.set_frcdiv(config.frcdiv);
            w.set_soscen(config.sosc);
        });
        syskey_lock();
    });

    match config.source {
        Some(source) => {
            switch(source);
        }
        None => {
            update();
        }
    }
}
