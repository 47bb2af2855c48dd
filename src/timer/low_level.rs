//! Low-level Timer driver

use embassy_hal_internal::{into_ref, Peripheral, PeripheralRef};

use super::Instance;
use crate::pac;
use crate::time::Hertz;
use crate::{interrupt, osc};

pub use crate::pac::vals::Tckps as Prescaler;

/// Low-level driver for a type B timer.
///
/// Free-running up counter: TMR counts PBCLK (through the prescaler) from 0
/// to PR, then rolls over to 0 and raises the period match interrupt.
pub struct Timer<'d, T: Instance> {
    _tim: PeripheralRef<'d, T>,
}

impl<'d, T: Instance> Timer<'d, T> {
    /// Create a new timer driver, ungating the peripheral. The timer is left
    /// stopped.
    pub fn new(tim: impl Peripheral<P = T> + 'd) -> Self {
        into_ref!(tim);

        osc::enable::<T>();
        T::regs().tcon().write(|_| {});

        Self { _tim: tim }
    }

    pub(crate) fn regs(&self) -> pac::Timer {
        T::regs()
    }

    /// Start counting.
    pub fn start(&mut self) {
        self.regs().tcon().write_set(|w| w.set_on(true));
    }

    /// Stop counting. The count register keeps its value.
    pub fn stop(&mut self) {
        self.regs().tcon().write_clr(|w| w.set_on(true));
    }

    /// Set the prescaler tap between PBCLK and the counter.
    pub fn set_prescaler(&mut self, prescaler: Prescaler) {
        self.regs().tcon().modify(|w| w.set_tckps(prescaler));
    }

    /// Set the period register. The counter rolls over after counting to
    /// `period`, so the match rate is `period + 1` prescaled ticks.
    pub fn set_period(&mut self, period: u16) {
        self.regs().pr().write_value(period as u32);
    }

    /// Get the period register.
    pub fn period(&self) -> u16 {
        self.regs().pr().read() as u16
    }

    /// Current count.
    pub fn count(&self) -> u16 {
        self.regs().tmr().read() as u16
    }

    /// Overwrite the count.
    pub fn set_count(&mut self, count: u16) {
        self.regs().tmr().write_value(count as u32);
    }

    /// Program prescaler and period for a `freq` match rate off the current
    /// peripheral bus clock.
    pub fn set_frequency(&mut self, freq: Hertz) {
        let (prescaler, period) = prescale_for(osc::pbclk(), freq);
        self.set_prescaler(prescaler);
        self.set_period(period);
    }

    /// Clear this timer's period match flag.
    pub fn clear_interrupt(&mut self) {
        interrupt::unpend(T::INTERRUPT);
    }

    /// Enable the period match interrupt.
    pub fn enable_interrupt(&mut self) {
        interrupt::enable(T::INTERRUPT);
    }

    /// Disable the period match interrupt.
    pub fn disable_interrupt(&mut self) {
        interrupt::disable(T::INTERRUPT);
    }
}

/// Counter ticks per PBCLK cycle for a prescaler code.
pub(crate) const fn prescale_ratio(prescaler: Prescaler) -> u32 {
    match prescaler {
        Prescaler::DIV1 => 1,
        Prescaler::DIV2 => 2,
        Prescaler::DIV4 => 4,
        Prescaler::DIV8 => 8,
        Prescaler::DIV16 => 16,
        Prescaler::DIV32 => 32,
        Prescaler::DIV64 => 64,
        Prescaler::DIV256 => 256,
    }
}

/// Pick a prescaler and period for a `target` match rate.
///
/// Walks the prescale taps from fastest to slowest and takes the first whose
/// 16-bit period register can cover one full cycle, so the chosen setting
/// has the finest resolution available. A target faster than the timer clock
/// clamps to a match every tick; one slower than 1:256 over a full period
/// (zero included) clamps to the slowest rate the hardware can do.
pub fn prescale_for(timer_clk: Hertz, target: Hertz) -> (Prescaler, u16) {
    const MAX_PERIOD: u64 = 0x1_0000;

    if target.0 == 0 {
        return (Prescaler::DIV256, 0xffff);
    }
    let period = (timer_clk.0 as u64) / (target.0 as u64);

    for code in 0u8..8 {
        let prescaler = Prescaler::from_bits(code);
        let counts = (period / prescale_ratio(prescaler) as u64).max(1);
        if counts <= MAX_PERIOD {
            return (prescaler, (counts - 1) as u16);
        }
    }

    (Prescaler::DIV256, 0xffff)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prescale_prefers_the_finest_resolution() {
        // 8 MHz bus at 1 kHz fits 1:1 exactly.
        assert_eq!(prescale_for(Hertz(8_000_000), Hertz(1_000)), (Prescaler::DIV1, 7_999));
        // 40 MHz at 100 Hz needs 1:8 (400_000 counts).
        assert_eq!(prescale_for(Hertz(40_000_000), Hertz(100)), (Prescaler::DIV8, 49_999));
        // One full 16-bit cycle at 1:1.
        assert_eq!(prescale_for(Hertz(65_536), Hertz(1)), (Prescaler::DIV1, 0xffff));
    }

    #[test]
    fn prescale_clamps_at_both_ends() {
        // Faster than the timer clock: match every tick.
        assert_eq!(prescale_for(Hertz(1_000), Hertz(1_000_000)), (Prescaler::DIV1, 0));
        // 40 MHz at 1 Hz is slower than 1:256 can cover.
        assert_eq!(prescale_for(Hertz(40_000_000), Hertz(1)), (Prescaler::DIV256, 0xffff));
        // A zero target is the slowest request possible.
        assert_eq!(prescale_for(Hertz(40_000_000), Hertz(0)), (Prescaler::DIV256, 0xffff));
    }

    #[test]
    fn prescale_ratio_table_is_not_linear_at_the_top() {
        let expected = [1, 2, 4, 8, 16, 32, 64, 256];
        for (code, ratio) in expected.into_iter().enumerate() {
            assert_eq!(prescale_ratio(Prescaler::from_bits(code as u8)), ratio);
        }
    }
}
