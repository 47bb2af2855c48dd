//! Busy-wait delays and elapsed-time readout over the selected tick source.
//!
//! The tick source is a cargo feature choice: `tick-coretimer` (default)
//! counts CPU cycles on the CP0 core timer, `tick-tmr2` counts PBCLK cycles
//! on the software-extended TMR2. Either way [`ticks`] is a free-running
//! 32-bit counter; intervals are computed with wrapping arithmetic and stay
//! correct across a counter wrap as long as they are shorter than the full
//! counter range.

#[cfg(all(feature = "tick-coretimer", feature = "tick-tmr2"))]
compile_error!("The `tick-coretimer` and `tick-tmr2` features select the canonical tick source and are mutually exclusive.");

#[cfg(not(any(feature = "tick-coretimer", feature = "tick-tmr2")))]
compile_error!("Enable one of the `tick-coretimer` or `tick-tmr2` features to select a tick source.");

use crate::osc;

/// Current tick count of the selected tick source.
#[inline]
pub fn ticks() -> u32 {
    #[cfg(feature = "tick-coretimer")]
    return crate::coretimer::ticks();
    #[cfg(feature = "tick-tmr2")]
    return crate::timer::systick::ticks();
}

/// Rate the tick counter advances at, per the resolved clocks.
#[inline]
fn tick_hz() -> u32 {
    #[cfg(feature = "tick-coretimer")]
    return osc::sysclk().0;
    #[cfg(feature = "tick-tmr2")]
    return osc::pbclk().0;
}

/// Milliseconds since the tick counter last wrapped.
pub fn millis() -> u32 {
    (ticks() as u64 * 1_000 / tick_hz() as u64) as u32
}

/// Microseconds since the tick counter last wrapped.
pub fn micros() -> u32 {
    (ticks() as u64 * 1_000_000 / tick_hz() as u64) as u32
}

/// Ticks spanned by `us` microseconds at the current tick rate.
pub(crate) fn ticks_for_us(us: u32) -> u32 {
    (us as u64 * tick_hz() as u64 / 1_000_000) as u32
}

/// Ticks spanned by `ns` nanoseconds, rounded up.
pub(crate) fn ticks_for_ns(ns: u32) -> u32 {
    ((ns as u64 * tick_hz() as u64).div_ceil(1_000_000_000)) as u32
}

#[inline]
fn wait_ticks(span: u32) {
    let start = ticks();
    while ticks().wrapping_sub(start) < span {}
}

/// Busy-wait for `us` microseconds.
pub fn blocking_delay_us(us: u32) {
    wait_ticks(ticks_for_us(us));
}

/// Busy-wait for `ms` milliseconds.
pub fn blocking_delay_ms(ms: u32) {
    // Conversion in 64-bit: one u32 of milliseconds overflows a u32 of
    // microseconds, the tick span is what has to fit.
    wait_ticks((ms as u64 * tick_hz() as u64 / 1_000) as u32);
}

/// Busy-wait delay provider for the embedded-hal delay traits.
#[derive(Clone, Copy, Debug, Default)]
pub struct Delay;

impl embedded_hal_1::delay::DelayNs for Delay {
    fn delay_ns(&mut self, ns: u32) {
        wait_ticks(ticks_for_ns(ns));
    }

    fn delay_us(&mut self, us: u32) {
        blocking_delay_us(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        blocking_delay_ms(ms);
    }
}

impl embedded_hal_02::blocking::delay::DelayUs<u32> for Delay {
    fn delay_us(&mut self, us: u32) {
        blocking_delay_us(us);
    }
}

impl embedded_hal_02::blocking::delay::DelayUs<u16> for Delay {
    fn delay_us(&mut self, us: u16) {
        blocking_delay_us(us as u32);
    }
}

impl embedded_hal_02::blocking::delay::DelayUs<u8> for Delay {
    fn delay_us(&mut self, us: u8) {
        blocking_delay_us(us as u32);
    }
}

impl embedded_hal_02::blocking::delay::DelayMs<u32> for Delay {
    fn delay_ms(&mut self, ms: u32) {
        blocking_delay_ms(ms);
    }
}

impl embedded_hal_02::blocking::delay::DelayMs<u16> for Delay {
    fn delay_ms(&mut self, ms: u16) {
        blocking_delay_ms(ms as u32);
    }
}

impl embedded_hal_02::blocking::delay::DelayMs<u8> for Delay {
    fn delay_ms(&mut self, ms: u8) {
        blocking_delay_ms(ms as u32);
    }
}

#[cfg(all(test, feature = "tick-coretimer"))]
mod tests {
    use super::*;
    use crate::pac::regs::Osccon;
    use crate::pac::sim;
    use crate::pac::vals::{Cosc, Fpllidiv, Pbdiv, Pllmult, Pllodiv};
    use crate::{cp0, pac};

    /// Stage the 40 MHz POSC+PLL configuration and refresh the cache.
    fn stage_40mhz() {
        sim::reset();
        let mut osccon = Osccon(0);
        osccon.set_cosc(Cosc::POSCPLL);
        osccon.set_pllmult(Pllmult::MUL16);
        osccon.set_pllodiv(Pllodiv::DIV4);
        osccon.set_pbdiv(Pbdiv::DIV1);
        sim::poke(pac::OSC.osccon().addr(), osccon.0);
        let mut devcfg2 = crate::pac::regs::Devcfg2(0);
        devcfg2.set_fpllidiv(Fpllidiv::DIV2);
        sim::poke(pac::DEVCFG.devcfg2().addr(), devcfg2.0);
        crate::osc::update();
    }

    #[test]
    fn tick_spans_follow_the_resolved_clock() {
        let _guard = sim::lock();
        stage_40mhz();

        // 40 ticks per microsecond at 40 MHz.
        assert_eq!(ticks_for_us(1), 40);
        assert_eq!(ticks_for_us(1_000), 40_000);
        // Nanosecond spans round up to a whole tick.
        assert_eq!(ticks_for_ns(1), 1);
        assert_eq!(ticks_for_ns(25), 1);
        assert_eq!(ticks_for_ns(26), 2);
    }

    #[test]
    fn elapsed_time_readout_scales_cycles() {
        let _guard = sim::lock();
        stage_40mhz();

        cp0::sim::reset();
        // COUNT runs at half the CPU clock; 20_000 COUNT = 40_000 cycles.
        cp0::sim::set_count(20_000);
        assert_eq!(ticks(), 40_000);
        assert_eq!(micros(), 1_000);
        assert_eq!(millis(), 1);

        cp0::sim::set_count(60_000_000);
        assert_eq!(millis(), 3_000);
    }
}
